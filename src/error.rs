use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{patch::PatchError, validation::ValidationErrors};

const VALIDATION_TYPE: &str = "https://tools.ietf.org/html/rfc4918#section-11.2";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<PatchError> for AppError {
    fn from(err: PatchError) -> Self {
        Self::Validation(ValidationErrors::single("patch", err.to_string()))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl From<jiff::Error> for AppError {
    fn from(err: jiff::Error) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected { status: rejection.status(), detail: rejection.body_text() }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected { status: rejection.status(), detail: rejection.body_text() }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected { status: rejection.status(), detail: rejection.body_text() }
    }
}

#[derive(Debug, Serialize)]
struct Problem<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    title: &'static str,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ValidationErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(errors) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = Problem {
                    kind: Some(VALIDATION_TYPE),
                    title: "One or more validation errors occurred.",
                    status: status.as_u16(),
                    detail: None,
                    errors: Some(errors),
                };
                (status, Json(body)).into_response()
            },
            AppError::Rejected { status, detail } => {
                let body = Problem {
                    kind: None,
                    title: "The request could not be read.",
                    status: status.as_u16(),
                    detail: Some(detail),
                    errors: None,
                };
                (*status, Json(body)).into_response()
            },
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "request failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = Problem {
                    kind: None,
                    title: "An error occurred while processing your request.",
                    status: status.as_u16(),
                    detail: None,
                    errors: None,
                };
                (status, Json(body)).into_response()
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn validation_lists_failing_fields() {
        let mut errors = ValidationErrors::single("titulo", "obrigatório");
        errors.add("duracao", "fora do intervalo");

        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["status"], 422);
        assert_eq!(body["errors"]["titulo"][0], "obrigatório");
        assert_eq!(body["errors"]["duracao"][0], "fora do intervalo");
    }

    #[tokio::test]
    async fn patch_errors_are_validation_errors() {
        let response = AppError::from(PatchError::TestFailed("/duracao".into())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["errors"]["patch"][0].as_str().unwrap().contains("/duracao"));
    }

    #[tokio::test]
    async fn internal_errors_hide_the_cause() {
        let response = AppError::from(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(!body.to_string().contains("disk on fire"));
    }
}
