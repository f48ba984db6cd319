use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use axum_extra::extract::WithRejection;
use sea_orm::TransactionTrait;
use tracing::{debug, info};

use super::created;
use crate::{
    AppState,
    entities::sessao,
    error::{AppError, AppResult},
    models::{CreateSessaoDto, ReadSessaoDto, UpdateSessaoDto},
    repositories,
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(dto), _): WithRejection<Json<CreateSessaoDto>, AppError>,
) -> AppResult<Response> {
    let model = dto.into_active_model()?;

    let txn = state.db.begin().await?;
    let sessao = repositories::sessao::insert(&txn, model).await?;
    txn.commit().await?;

    info!(filme_id = sessao.filme_id, cinema_id = sessao.cinema_id, "sessao created");
    let location = format!("/sessao/{}/{}", sessao.filme_id, sessao.cinema_id);
    Ok(created(location, ReadSessaoDto::try_from(sessao)?))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<ReadSessaoDto>>> {
    let sessoes = repositories::sessao::list(&state.db).await?;
    debug!(count = sessoes.len(), "listing sessoes");
    let body = sessoes.into_iter().map(ReadSessaoDto::try_from).collect::<Result<Vec<_>, _>>()?;
    Ok(Json(body))
}

pub async fn read(
    State(state): State<Arc<AppState>>,
    WithRejection(Path((filme_id, cinema_id)), _): WithRejection<Path<(i32, i32)>, AppError>,
) -> AppResult<Json<ReadSessaoDto>> {
    let sessao = repositories::sessao::find(&state.db, filme_id, cinema_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ReadSessaoDto::try_from(sessao)?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path((filme_id, cinema_id)), _): WithRejection<Path<(i32, i32)>, AppError>,
    WithRejection(Json(dto), _): WithRejection<Json<UpdateSessaoDto>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let sessao = repositories::sessao::find(&txn, filme_id, cinema_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: sessao::ActiveModel = sessao.into();
    dto.apply_to(&mut active)?;
    repositories::sessao::update(&txn, active).await?;
    txn.commit().await?;

    info!(filme_id, cinema_id, "sessao updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path((filme_id, cinema_id)), _): WithRejection<Path<(i32, i32)>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    if repositories::sessao::delete(&txn, filme_id, cinema_id).await? == 0 {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    info!(filme_id, cinema_id, "sessao deleted");
    Ok(StatusCode::NO_CONTENT)
}
