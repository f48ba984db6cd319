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
    entities::endereco,
    error::{AppError, AppResult},
    models::{CreateEnderecoDto, ReadEnderecoDto, UpdateEnderecoDto},
    repositories,
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(dto), _): WithRejection<Json<CreateEnderecoDto>, AppError>,
) -> AppResult<Response> {
    let model = dto.into_active_model()?;

    let txn = state.db.begin().await?;
    let endereco = repositories::endereco::insert(&txn, model).await?;
    txn.commit().await?;

    info!(id = endereco.id, "endereco created");
    Ok(created(format!("/endereco/{}", endereco.id), ReadEnderecoDto::from(endereco)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<ReadEnderecoDto>>> {
    let enderecos = repositories::endereco::list(&state.db).await?;
    debug!(count = enderecos.len(), "listing enderecos");
    Ok(Json(enderecos.into_iter().map(ReadEnderecoDto::from).collect()))
}

pub async fn read(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<ReadEnderecoDto>> {
    let endereco = repositories::endereco::find(&state.db, id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(endereco.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(dto), _): WithRejection<Json<UpdateEnderecoDto>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    let endereco = repositories::endereco::find(&txn, id).await?.ok_or(AppError::NotFound)?;

    let mut active: endereco::ActiveModel = endereco.into();
    dto.apply_to(&mut active)?;
    repositories::endereco::update(&txn, active).await?;
    txn.commit().await?;

    info!(id, "endereco updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    let txn = state.db.begin().await?;
    if repositories::endereco::delete(&txn, id).await? == 0 {
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    info!(id, "endereco deleted");
    Ok(StatusCode::NO_CONTENT)
}
