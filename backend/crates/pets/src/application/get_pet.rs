//! Get Pet Use Case

use crate::application::PetOutput;
use crate::domain::repository::PetRepository;
use crate::domain::services::Clock;
use crate::error::{PetsError, PetsResult};
use kernel::id::PetId;
use std::sync::Arc;

/// Get Pet Use Case
pub struct GetPetUseCase<P>
where
    P: PetRepository,
{
    pet_repo: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<P> GetPetUseCase<P>
where
    P: PetRepository,
{
    pub fn new(pet_repo: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self { pet_repo, clock }
    }

    pub async fn execute(&self, pet_id: PetId) -> PetsResult<PetOutput> {
        let pet = self
            .pet_repo
            .find_by_id(pet_id)
            .await?
            .ok_or(PetsError::PetNotFound(pet_id))?;

        Ok(PetOutput::at(pet, self.clock.now()))
    }
}
