//! Domain Entities
//!
//! Pets and the interaction log entries recorded against them.

use chrono::{DateTime, Utc};
use derive_more::Display;
use kernel::id::{InteractionId, PetId};

use crate::domain::services;
use crate::domain::value_objects::{PetName, StatDelta};
use crate::error::{PetsError, PetsResult};

/// Pet entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: PetId,
    pub name: PetName,
    /// Set at creation, never changed
    pub birthday: DateTime<Utc>,
    pub hunger_level: i32,
    pub happiness_level: i32,
    pub last_interacted_with_date: DateTime<Utc>,
}

impl Pet {
    /// Derived liveness; see [`services::is_dead`]
    pub fn is_dead(&self, now: DateTime<Utc>) -> bool {
        services::is_dead(self.last_interacted_with_date, now)
    }

    /// Apply an interaction's stat transition in place.
    ///
    /// Feeding a pet whose hunger is exactly zero is rejected and leaves the
    /// pet untouched.
    pub fn interact(&mut self, kind: InteractionKind, now: DateTime<Utc>) -> PetsResult<()> {
        if kind == InteractionKind::Feeding && self.hunger_level == 0 {
            return Err(PetsError::NotHungry {
                name: self.name.to_string(),
            });
        }

        let delta = kind.delta();
        self.hunger_level = self.hunger_level.saturating_add(delta.hunger);
        self.happiness_level = self.happiness_level.saturating_add(delta.happiness);
        self.last_interacted_with_date = now;
        Ok(())
    }
}

/// A pet that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: PetName,
    pub birthday: DateTime<Utc>,
    pub hunger_level: i32,
    pub happiness_level: i32,
    pub last_interacted_with_date: DateTime<Utc>,
}

impl NewPet {
    /// Server-assigned defaults: born now, zero stats.
    ///
    /// The last-interaction timestamp is left at the zero value of the
    /// timestamp type (Unix epoch), so a pet nobody has touched yet reads
    /// as dead.
    pub fn new(name: PetName, now: DateTime<Utc>) -> Self {
        Self {
            name,
            birthday: now,
            hunger_level: 0,
            happiness_level: 0,
            last_interacted_with_date: DateTime::<Utc>::default(),
        }
    }
}

/// Kind of interaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum InteractionKind {
    #[display("playtime")]
    Playtime,
    #[display("feeding")]
    Feeding,
    #[display("scolding")]
    Scolding,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::Playtime,
        InteractionKind::Feeding,
        InteractionKind::Scolding,
    ];

    /// Fixed stat transition for this kind
    pub const fn delta(self) -> StatDelta {
        match self {
            InteractionKind::Playtime => StatDelta::new(3, 5),
            InteractionKind::Feeding => StatDelta::new(-5, 3),
            InteractionKind::Scolding => StatDelta::new(0, -5),
        }
    }

    /// Table holding this kind's log entries
    pub const fn table(self) -> &'static str {
        match self {
            InteractionKind::Playtime => "playtimes",
            InteractionKind::Feeding => "feedings",
            InteractionKind::Scolding => "scoldings",
        }
    }

    /// Primary key column of [`Self::table`]
    pub const fn id_column(self) -> &'static str {
        match self {
            InteractionKind::Playtime => "playtime_id",
            InteractionKind::Feeding => "feeding_id",
            InteractionKind::Scolding => "scolding_id",
        }
    }
}

/// One entry in a pet's playtime, feeding or scolding log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub id: InteractionId,
    pub pet_id: PetId,
    pub kind: InteractionKind,
    pub when: DateTime<Utc>,
}
