//! Delete Pet Use Case

use crate::application::PetOutput;
use crate::domain::repository::PetRepository;
use crate::domain::services::Clock;
use crate::error::{PetsError, PetsResult};
use kernel::id::PetId;
use std::sync::Arc;

/// Delete Pet Use Case
///
/// Interaction logs go with the pet (cascade).
pub struct DeletePetUseCase<P>
where
    P: PetRepository,
{
    pet_repo: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<P> DeletePetUseCase<P>
where
    P: PetRepository,
{
    pub fn new(pet_repo: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self { pet_repo, clock }
    }

    /// Returns the pet as it was just before deletion
    pub async fn execute(&self, pet_id: PetId) -> PetsResult<PetOutput> {
        let pet = self
            .pet_repo
            .delete(pet_id)
            .await?
            .ok_or(PetsError::PetNotFound(pet_id))?;

        tracing::info!(pet_id = %pet_id, "Pet deleted");

        Ok(PetOutput::at(pet, self.clock.now()))
    }
}
