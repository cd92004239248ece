//! In-memory Repository Implementation
//!
//! Same contract as the PostgreSQL repository, backed by a lock-protected
//! map. Used for tests and for running the router without a database.

use chrono::{DateTime, Utc};
use kernel::id::{InteractionId, PetId};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Interaction, InteractionKind, NewPet, Pet};
use crate::domain::repository::{InteractionRepository, PetRepository};
use crate::error::{PetsError, PetsResult};

#[derive(Default)]
struct MemoryState {
    last_pet_id: i64,
    pets: BTreeMap<PetId, Pet>,
    /// Per-kind identity counters, like one sequence per table
    last_interaction_ids: HashMap<InteractionKind, i64>,
    interactions: Vec<Interaction>,
}

/// In-memory repository
#[derive(Clone, Default)]
pub struct InMemoryPetRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored log entries across all kinds
    pub async fn interaction_count(&self) -> usize {
        self.state.read().await.interactions.len()
    }
}

impl PetRepository for InMemoryPetRepository {
    async fn create(&self, pet: &NewPet) -> PetsResult<Pet> {
        let mut state = self.state.write().await;
        state.last_pet_id += 1;

        let pet = Pet {
            id: PetId::from_i64(state.last_pet_id),
            name: pet.name.clone(),
            birthday: pet.birthday,
            hunger_level: pet.hunger_level,
            happiness_level: pet.happiness_level,
            last_interacted_with_date: pet.last_interacted_with_date,
        };
        state.pets.insert(pet.id, pet.clone());

        Ok(pet)
    }

    async fn find_by_id(&self, pet_id: PetId) -> PetsResult<Option<Pet>> {
        Ok(self.state.read().await.pets.get(&pet_id).cloned())
    }

    async fn list(&self) -> PetsResult<Vec<Pet>> {
        // BTreeMap iterates in key order
        Ok(self.state.read().await.pets.values().cloned().collect())
    }

    async fn delete(&self, pet_id: PetId) -> PetsResult<Option<Pet>> {
        let mut state = self.state.write().await;
        let removed = state.pets.remove(&pet_id);
        if removed.is_some() {
            state.interactions.retain(|i| i.pet_id != pet_id);
        }
        Ok(removed)
    }
}

impl InteractionRepository for InMemoryPetRepository {
    async fn record(
        &self,
        pet: &Pet,
        kind: InteractionKind,
        when: DateTime<Utc>,
    ) -> PetsResult<Interaction> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let stored = state
            .pets
            .get_mut(&pet.id)
            .ok_or(PetsError::PetNotFound(pet.id))?;
        stored.hunger_level = pet.hunger_level;
        stored.happiness_level = pet.happiness_level;
        stored.last_interacted_with_date = pet.last_interacted_with_date;

        let last_id = state.last_interaction_ids.entry(kind).or_insert(0);
        *last_id += 1;
        let interaction = Interaction {
            id: InteractionId::from_i64(*last_id),
            pet_id: pet.id,
            kind,
            when,
        };
        state.interactions.push(interaction.clone());

        Ok(interaction)
    }

    async fn list_for_pet(
        &self,
        pet_id: PetId,
        kind: InteractionKind,
    ) -> PetsResult<Vec<Interaction>> {
        let state = self.state.read().await;
        let mut entries: Vec<Interaction> = state
            .interactions
            .iter()
            .filter(|i| i.pet_id == pet_id && i.kind == kind)
            .cloned()
            .collect();
        entries.sort_by_key(|i| i.id);
        Ok(entries)
    }
}
