//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Pet, Interaction)
//! - Domain value objects (PetName, StatDelta)
//! - Domain services (vitality rule, clock)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
