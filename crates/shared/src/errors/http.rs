use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::{
    CheckoutError, IngestionError, RepositoryError, ServiceError, error::ErrorResponse,
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Checkout(checkout_err) => match checkout_err {
                CheckoutError::BasketNotFound(id) => {
                    HttpError::NotFound(format!("Basket {id} not found"))
                }
                CheckoutError::EmptyBasket(id) => {
                    HttpError::BadRequest(format!("Basket {id} has no items"))
                }
                CheckoutError::CatalogItemMissing(id) => {
                    HttpError::Conflict(format!("Catalog item {id} does not exist"))
                }
            },

            ServiceError::Ingestion(ingestion_err) => HttpError::from(ingestion_err),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Kafka(err) => HttpError::ServiceUnavailable(format!("Kafka error: {err}")),

            ServiceError::Archive(msg) | ServiceError::Escalation(msg) => {
                HttpError::ServiceUnavailable(msg)
            }

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl From<IngestionError> for HttpError {
    fn from(err: IngestionError) -> Self {
        match err {
            IngestionError::Malformed(msg) => {
                HttpError::BadRequest(format!("Malformed order payload: {msg}"))
            }
            IngestionError::Store(repo_err) => {
                HttpError::ServiceUnavailable(format!("Document store error: {repo_err}"))
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
