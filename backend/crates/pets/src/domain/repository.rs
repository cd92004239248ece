//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use chrono::{DateTime, Utc};
use kernel::id::PetId;

use crate::domain::entities::{Interaction, InteractionKind, NewPet, Pet};
use crate::error::PetsResult;

/// Pet repository trait
#[trait_variant::make(PetRepository: Send)]
pub trait LocalPetRepository {
    /// Insert a new pet and return it with its assigned ID
    async fn create(&self, pet: &NewPet) -> PetsResult<Pet>;

    /// Find pet by ID
    async fn find_by_id(&self, pet_id: PetId) -> PetsResult<Option<Pet>>;

    /// All pets, ordered by ID ascending
    async fn list(&self) -> PetsResult<Vec<Pet>>;

    /// Delete a pet and its interaction logs, returning the removed pet
    async fn delete(&self, pet_id: PetId) -> PetsResult<Option<Pet>>;
}

/// Interaction log repository trait
#[trait_variant::make(InteractionRepository: Send)]
pub trait LocalInteractionRepository {
    /// Store `pet`'s updated stats and append a log entry of `kind`.
    ///
    /// Both writes commit together or not at all. Fails with
    /// `PetNotFound` if the pet no longer exists.
    async fn record(
        &self,
        pet: &Pet,
        kind: InteractionKind,
        when: DateTime<Utc>,
    ) -> PetsResult<Interaction>;

    /// Log entries of `kind` for a pet, ordered by ID ascending
    async fn list_for_pet(
        &self,
        pet_id: PetId,
        kind: InteractionKind,
    ) -> PetsResult<Vec<Interaction>>;
}
