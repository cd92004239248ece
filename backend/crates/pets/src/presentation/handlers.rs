//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::id::PetId;
use std::sync::Arc;

use crate::application::{
    CreatePetInput, CreatePetUseCase, DeletePetUseCase, GetPetUseCase, ListInteractionsUseCase,
    ListPetsUseCase, PetFilter, PetsConfig, RecordInteractionUseCase,
};
use crate::domain::entities::InteractionKind;
use crate::domain::repository::{InteractionRepository, PetRepository};
use crate::domain::services::Clock;
use crate::error::PetsResult;
use crate::presentation::dto::{
    CreatePetRequest, InteractionResponse, ListPetsQuery, PetResponse,
};

/// Shared state for pets handlers
#[derive(Clone)]
pub struct PetsAppState<R>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<PetsConfig>,
}

// ============================================================================
// Pets
// ============================================================================

/// GET /pets?input=alive
pub async fn list_pets<R>(
    State(state): State<PetsAppState<R>>,
    Query(query): Query<ListPetsQuery>,
) -> PetsResult<Json<Vec<PetResponse>>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    let filter = PetFilter::from_input(query.input.as_deref(), &state.config);
    let use_case = ListPetsUseCase::new(state.repo.clone(), state.clock.clone());

    let pets = use_case.execute(filter).await?;

    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

/// GET /pets/{id}
pub async fn get_pet<R>(
    State(state): State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<PetResponse>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPetUseCase::new(state.repo.clone(), state.clock.clone());

    let Path(pet_id) = path?;
    let pet = use_case.execute(PetId::from_i64(pet_id)).await?;

    Ok(Json(pet.into()))
}

/// POST /pets
pub async fn create_pet<R>(
    State(state): State<PetsAppState<R>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<CreatePetRequest>, JsonRejection>,
) -> PetsResult<impl IntoResponse>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case = CreatePetUseCase::new(state.repo.clone(), state.clock.clone());

    let pet = use_case.execute(CreatePetInput { name: req.name }).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), pet.pet.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PetResponse::from(pet)),
    ))
}

/// DELETE /pets/{id}
pub async fn delete_pet<R>(
    State(state): State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<PetResponse>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePetUseCase::new(state.repo.clone(), state.clock.clone());

    let Path(pet_id) = path?;
    let pet = use_case.execute(PetId::from_i64(pet_id)).await?;

    Ok(Json(pet.into()))
}

// ============================================================================
// Interactions
// ============================================================================

/// POST /pets/{id}/playtimes
pub async fn record_playtime<R>(
    state: State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<InteractionResponse>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    record(state, path, InteractionKind::Playtime).await
}

/// POST /pets/{id}/feedings
pub async fn record_feeding<R>(
    state: State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<InteractionResponse>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    record(state, path, InteractionKind::Feeding).await
}

/// POST /pets/{id}/scoldings
pub async fn record_scolding<R>(
    state: State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<InteractionResponse>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    record(state, path, InteractionKind::Scolding).await
}

/// GET /pets/{id}/playtimes
pub async fn list_playtimes<R>(
    state: State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<Vec<InteractionResponse>>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    list(state, path, InteractionKind::Playtime).await
}

/// GET /pets/{id}/feedings
pub async fn list_feedings<R>(
    state: State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<Vec<InteractionResponse>>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    list(state, path, InteractionKind::Feeding).await
}

/// GET /pets/{id}/scoldings
pub async fn list_scoldings<R>(
    state: State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> PetsResult<Json<Vec<InteractionResponse>>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    list(state, path, InteractionKind::Scolding).await
}

async fn record<R>(
    State(state): State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    kind: InteractionKind,
) -> PetsResult<Json<InteractionResponse>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        RecordInteractionUseCase::new(state.repo.clone(), state.repo.clone(), state.clock.clone());

    let Path(pet_id) = path?;
    let interaction = use_case.execute(PetId::from_i64(pet_id), kind).await?;

    Ok(Json(interaction.into()))
}

async fn list<R>(
    State(state): State<PetsAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    kind: InteractionKind,
) -> PetsResult<Json<Vec<InteractionResponse>>>
where
    R: PetRepository + InteractionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListInteractionsUseCase::new(state.repo.clone(), state.repo.clone());

    let Path(pet_id) = path?;
    let entries = use_case.execute(PetId::from_i64(pet_id), kind).await?;

    Ok(Json(entries.into_iter().map(InteractionResponse::from).collect()))
}
