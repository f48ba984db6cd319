use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use axum_extra::extract::WithRejection;
use sea_orm::TransactionTrait;
use serde::Deserialize;
use tracing::{debug, info};

use super::created;
use crate::{
    AppState,
    entities::cinema,
    error::{AppError, AppResult},
    models::{CreateCinemaDto, ReadCinemaDto, UpdateCinemaDto},
    repositories,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CinemaQuery {
    endereco_id: Option<i32>,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(dto), _): WithRejection<Json<CreateCinemaDto>, AppError>,
) -> AppResult<Response> {
    let model = dto.into_active_model()?;

    let txn = state.db.begin().await?;
    let cinema = repositories::cinema::insert(&txn, model).await?;
    let id = cinema.id;
    let body = repositories::cinema::load(&txn, cinema).await?;
    txn.commit().await?;

    info!(id, endereco_id = body.endereco_id, "cinema created");
    Ok(created(format!("/cinema/{id}"), body))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(q), _): WithRejection<Query<CinemaQuery>, AppError>,
) -> AppResult<Json<Vec<ReadCinemaDto>>> {
    let cinemas = repositories::cinema::list(&state.db, q.endereco_id).await?;
    debug!(count = cinemas.len(), endereco_id = ?q.endereco_id, "listing cinemas");
    Ok(Json(repositories::cinema::with_relations(&state.db, cinemas).await?))
}

pub async fn read(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<ReadCinemaDto>> {
    let cinema = repositories::cinema::find(&state.db, id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(repositories::cinema::load(&state.db, cinema).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(dto), _): WithRejection<Json<UpdateCinemaDto>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let cinema = repositories::cinema::find(&txn, id).await?.ok_or(AppError::NotFound)?;

    let mut active: cinema::ActiveModel = cinema.into();
    dto.apply_to(&mut active)?;
    repositories::cinema::update(&txn, active).await?;
    txn.commit().await?;

    info!(id, "cinema updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    if repositories::cinema::delete(&txn, id).await? == 0 {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    info!(id, "cinema deleted");
    Ok(StatusCode::NO_CONTENT)
}
