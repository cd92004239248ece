//! List Pets Use Case

use crate::application::PetOutput;
use crate::application::config::PetsConfig;
use crate::domain::repository::PetRepository;
use crate::domain::services::Clock;
use crate::error::PetsResult;
use std::sync::Arc;

/// Which pets to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetFilter {
    All,
    AliveOnly,
}

impl PetFilter {
    /// Alive-only when the query input equals the configured keyword
    pub fn from_input(input: Option<&str>, config: &PetsConfig) -> Self {
        match input {
            Some(value) if value == config.alive_filter_keyword => PetFilter::AliveOnly,
            _ => PetFilter::All,
        }
    }
}

/// List Pets Use Case
pub struct ListPetsUseCase<P>
where
    P: PetRepository,
{
    pet_repo: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<P> ListPetsUseCase<P>
where
    P: PetRepository,
{
    pub fn new(pet_repo: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self { pet_repo, clock }
    }

    pub async fn execute(&self, filter: PetFilter) -> PetsResult<Vec<PetOutput>> {
        let pets = self.pet_repo.list().await?;
        let now = self.clock.now();

        let outputs: Vec<PetOutput> = pets
            .into_iter()
            .map(|pet| PetOutput::at(pet, now))
            .filter(|output| filter == PetFilter::All || !output.is_dead)
            .collect();

        tracing::debug!(?filter, count = outputs.len(), "Listed pets");

        Ok(outputs)
    }
}
