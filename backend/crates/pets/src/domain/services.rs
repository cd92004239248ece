//! Domain Services
//!
//! Pure vitality rules plus the clock abstraction that feeds them "now".

use chrono::{DateTime, TimeDelta, Utc};

/// How many days a pet survives without any interaction
pub const LIFESPAN_DAYS: i64 = 3;

/// [`LIFESPAN_DAYS`] as a duration
pub fn lifespan_without_interaction() -> TimeDelta {
    TimeDelta::days(LIFESPAN_DAYS)
}

/// A pet is dead once strictly more than three days have passed since it was
/// last interacted with. Exactly three days is still alive.
pub fn is_dead(last_interacted_with: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(last_interacted_with) > lifespan_without_interaction()
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
