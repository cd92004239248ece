//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! One use case per API operation.

pub mod config;
pub mod create_pet;
pub mod delete_pet;
pub mod get_pet;
pub mod list_interactions;
pub mod list_pets;
pub mod record_interaction;

use chrono::{DateTime, Utc};

use crate::domain::entities::Pet;

// Re-exports
pub use config::PetsConfig;
pub use create_pet::{CreatePetInput, CreatePetUseCase};
pub use delete_pet::DeletePetUseCase;
pub use get_pet::GetPetUseCase;
pub use list_interactions::ListInteractionsUseCase;
pub use list_pets::{ListPetsUseCase, PetFilter};
pub use record_interaction::RecordInteractionUseCase;

/// A pet as read at a given instant, with liveness resolved
#[derive(Debug, Clone)]
pub struct PetOutput {
    pub pet: Pet,
    pub is_dead: bool,
}

impl PetOutput {
    pub fn at(pet: Pet, now: DateTime<Utc>) -> Self {
        let is_dead = pet.is_dead(now);
        Self { pet, is_dead }
    }
}
