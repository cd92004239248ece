//! List Interactions Use Case

use crate::domain::entities::{Interaction, InteractionKind};
use crate::domain::repository::{InteractionRepository, PetRepository};
use crate::error::{PetsError, PetsResult};
use kernel::id::PetId;
use std::sync::Arc;

/// List Interactions Use Case
pub struct ListInteractionsUseCase<P, I>
where
    P: PetRepository,
    I: InteractionRepository,
{
    pet_repo: Arc<P>,
    interaction_repo: Arc<I>,
}

impl<P, I> ListInteractionsUseCase<P, I>
where
    P: PetRepository,
    I: InteractionRepository,
{
    pub fn new(pet_repo: Arc<P>, interaction_repo: Arc<I>) -> Self {
        Self {
            pet_repo,
            interaction_repo,
        }
    }

    pub async fn execute(
        &self,
        pet_id: PetId,
        kind: InteractionKind,
    ) -> PetsResult<Vec<Interaction>> {
        if self.pet_repo.find_by_id(pet_id).await?.is_none() {
            return Err(PetsError::PetNotFound(pet_id));
        }

        self.interaction_repo.list_for_pet(pet_id, kind).await
    }
}
