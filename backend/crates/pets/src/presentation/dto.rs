//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{InteractionId, PetId};
use serde::{Deserialize, Serialize};

use crate::application::PetOutput;
use crate::domain::entities::Interaction;

/// Request for POST /pets
///
/// Any other fields the client sends (birthday, levels) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: String,
}

/// Query for GET /pets
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPetsQuery {
    pub input: Option<String>,
}

/// Pet representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetResponse {
    pub id: PetId,
    pub name: String,
    pub birthday: DateTime<Utc>,
    pub hunger_level: i32,
    pub happiness_level: i32,
    pub last_interacted_with_date: DateTime<Utc>,
    pub is_dead: bool,
}

impl From<PetOutput> for PetResponse {
    fn from(output: PetOutput) -> Self {
        let pet = output.pet;
        Self {
            id: pet.id,
            name: pet.name.to_string(),
            birthday: pet.birthday,
            hunger_level: pet.hunger_level,
            happiness_level: pet.happiness_level,
            last_interacted_with_date: pet.last_interacted_with_date,
            is_dead: output.is_dead,
        }
    }
}

/// Playtime, feeding or scolding representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResponse {
    pub id: InteractionId,
    pub pet_id: PetId,
    pub when: DateTime<Utc>,
}

impl From<Interaction> for InteractionResponse {
    fn from(interaction: Interaction) -> Self {
        Self {
            id: interaction.id,
            pet_id: interaction.pet_id,
            when: interaction.when,
        }
    }
}
