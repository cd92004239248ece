//! Pets Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::PetsConfig;
use crate::domain::repository::{InteractionRepository, PetRepository};
use crate::domain::services::{Clock, SystemClock};
use crate::infra::postgres::PgPetRepository;
use crate::presentation::handlers::{self, PetsAppState};

/// Create the pets router with PostgreSQL repository and the wall clock
pub fn pets_router(repo: PgPetRepository, config: PetsConfig) -> Router {
    pets_router_generic(repo, Arc::new(SystemClock), config)
}

/// Create a generic pets router for any repository implementation
pub fn pets_router_generic<R>(repo: R, clock: Arc<dyn Clock>, config: PetsConfig) -> Router
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    let state = PetsAppState {
        repo: Arc::new(repo),
        clock,
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/pets",
            get(handlers::list_pets::<R>).post(handlers::create_pet::<R>),
        )
        .route(
            "/pets/{id}",
            get(handlers::get_pet::<R>).delete(handlers::delete_pet::<R>),
        )
        .route(
            "/pets/{id}/playtimes",
            post(handlers::record_playtime::<R>).get(handlers::list_playtimes::<R>),
        )
        .route(
            "/pets/{id}/feedings",
            post(handlers::record_feeding::<R>).get(handlers::list_feedings::<R>),
        )
        .route(
            "/pets/{id}/scoldings",
            post(handlers::record_scolding::<R>).get(handlers::list_scoldings::<R>),
        )
        .with_state(state)
}
