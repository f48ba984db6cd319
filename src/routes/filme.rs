use std::sync::Arc;

use anyhow::Context;
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
    entities::filme,
    error::{AppError, AppResult},
    models::{CreateFilmeDto, ReadFilmeDto, UpdateFilmeDto},
    patch::JsonPatch,
    repositories::{self, filme::FilmeFilter},
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmeQuery {
    #[serde(default)]
    skip: u64,
    take: Option<u64>,
    nome_cinema: Option<String>,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(dto), _): WithRejection<Json<CreateFilmeDto>, AppError>,
) -> AppResult<Response> {
    let model = dto.into_active_model()?;

    let txn = state.db.begin().await?;
    let filme = repositories::filme::insert(&txn, model).await?;
    txn.commit().await?;

    info!(id = filme.id, titulo = %filme.titulo, "filme created");
    Ok(created(format!("/filme/{}", filme.id), ReadFilmeDto::from(filme)))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(q), _): WithRejection<Query<FilmeQuery>, AppError>,
) -> AppResult<Json<Vec<ReadFilmeDto>>> {
    let filter = FilmeFilter {
        skip: q.skip,
        take: state.config.page_size(q.take),
        nome_cinema: q.nome_cinema,
    };
    debug!(
        skip = filter.skip,
        take = filter.take,
        nome_cinema = ?filter.nome_cinema,
        "listing filmes"
    );

    let filmes = repositories::filme::list(&state.db, filter).await?;
    Ok(Json(filmes.into_iter().map(ReadFilmeDto::from).collect()))
}

pub async fn read(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<ReadFilmeDto>> {
    let filme = repositories::filme::find(&state.db, id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(filme.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(dto), _): WithRejection<Json<UpdateFilmeDto>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let filme = repositories::filme::find(&txn, id).await?.ok_or(AppError::NotFound)?;

    let mut active: filme::ActiveModel = filme.into();
    dto.apply_to(&mut active)?;
    repositories::filme::update(&txn, active).await?;
    txn.commit().await?;

    info!(id, "filme updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Applies a JSON Patch to an editable copy, then validates the copy before
/// anything is written.
pub async fn patch(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(patch), _): WithRejection<Json<JsonPatch>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let filme = repositories::filme::find(&txn, id).await?.ok_or(AppError::NotFound)?;

    let mut doc =
        serde_json::to_value(UpdateFilmeDto::from(&filme)).context("serializing filme")?;
    patch.apply(&mut doc)?;
    let patched = UpdateFilmeDto::from_patched(doc)?;

    let mut active: filme::ActiveModel = filme.into();
    patched.apply_to(&mut active)?;
    repositories::filme::update(&txn, active).await?;
    txn.commit().await?;

    info!(id, operations = patch.0.len(), "filme patched");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    if repositories::filme::delete(&txn, id).await? == 0 {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    info!(id, "filme deleted");
    Ok(StatusCode::NO_CONTENT)
}
