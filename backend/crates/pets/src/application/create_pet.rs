//! Create Pet Use Case
//!
//! Birthday and stats are always server-assigned; only the name comes
//! from the client.

use crate::application::PetOutput;
use crate::domain::entities::NewPet;
use crate::domain::repository::PetRepository;
use crate::domain::services::Clock;
use crate::domain::value_objects::PetName;
use crate::error::PetsResult;
use std::sync::Arc;

/// Create pet input
pub struct CreatePetInput {
    pub name: String,
}

/// Create Pet Use Case
pub struct CreatePetUseCase<P>
where
    P: PetRepository,
{
    pet_repo: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<P> CreatePetUseCase<P>
where
    P: PetRepository,
{
    pub fn new(pet_repo: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self { pet_repo, clock }
    }

    pub async fn execute(&self, input: CreatePetInput) -> PetsResult<PetOutput> {
        let name = PetName::new(input.name)?;
        let now = self.clock.now();

        let pet = self.pet_repo.create(&NewPet::new(name, now)).await?;

        tracing::info!(pet_id = %pet.id, pet_name = %pet.name, "Pet created");

        Ok(PetOutput::at(pet, now))
    }
}
