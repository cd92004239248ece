//! Record Interaction Use Case
//!
//! Playtime, feeding and scolding all follow the same steps: load the pet,
//! apply the kind's stat transition, then persist stats and log entry in
//! one unit.

use crate::domain::entities::{Interaction, InteractionKind};
use crate::domain::repository::{InteractionRepository, PetRepository};
use crate::domain::services::Clock;
use crate::error::{PetsError, PetsResult};
use kernel::id::PetId;
use std::sync::Arc;

/// Record Interaction Use Case
pub struct RecordInteractionUseCase<P, I>
where
    P: PetRepository,
    I: InteractionRepository,
{
    pet_repo: Arc<P>,
    interaction_repo: Arc<I>,
    clock: Arc<dyn Clock>,
}

impl<P, I> RecordInteractionUseCase<P, I>
where
    P: PetRepository,
    I: InteractionRepository,
{
    pub fn new(pet_repo: Arc<P>, interaction_repo: Arc<I>, clock: Arc<dyn Clock>) -> Self {
        Self {
            pet_repo,
            interaction_repo,
            clock,
        }
    }

    pub async fn execute(&self, pet_id: PetId, kind: InteractionKind) -> PetsResult<Interaction> {
        let mut pet = self
            .pet_repo
            .find_by_id(pet_id)
            .await?
            .ok_or(PetsError::PetNotFound(pet_id))?;

        let now = self.clock.now();
        pet.interact(kind, now)?;

        let interaction = self.interaction_repo.record(&pet, kind, now).await?;

        tracing::info!(
            pet_id = %pet_id,
            interaction = %kind,
            interaction_id = %interaction.id,
            hunger = pet.hunger_level,
            happiness = pet.happiness_level,
            "Interaction recorded"
        );

        Ok(interaction)
    }
}
