//! Pets (Virtual Pet) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, vitality rules, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Rules
//! - Playtime: happiness +5, hunger +3
//! - Feeding: happiness +3, hunger -5; rejected when hunger is exactly 0
//! - Scolding: happiness -5
//! - Every interaction refreshes the last-interaction timestamp
//! - A pet is dead when more than 3 days have passed since that timestamp;
//!   this is computed on read, never stored

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PetsConfig;
pub use error::{PetsError, PetsResult};
pub use infra::memory::InMemoryPetRepository;
pub use infra::postgres::PgPetRepository;
pub use presentation::router::{pets_router, pets_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
