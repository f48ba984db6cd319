use std::sync::Arc;

use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

mod cinema;
mod endereco;
mod filme;
mod sessao;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/endereco", get(endereco::list).post(endereco::create))
        .route(
            "/endereco/{id}",
            get(endereco::read).put(endereco::update).delete(endereco::delete),
        )
        .route("/cinema", get(cinema::list).post(cinema::create))
        .route("/cinema/{id}", get(cinema::read).put(cinema::update).delete(cinema::delete))
        .route("/filme", get(filme::list).post(filme::create))
        .route(
            "/filme/{id}",
            get(filme::read).put(filme::update).patch(filme::patch).delete(filme::delete),
        )
        .route("/sessao", get(sessao::list).post(sessao::create))
        .route(
            "/sessao/{filme_id}/{cinema_id}",
            get(sessao::read).put(sessao::update).delete(sessao::delete),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any)),
        )
}

/// 201 with a `Location` header pointing at the new resource.
fn created<T: Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}
