//! Error types for the card server.
//!
//! A single [`Error`] aggregates the domain errors (configuration, card profile,
//! reference catalog) and the library errors they sit on. Every error converts into an
//! HTTP response, with anything unexpected collapsing into a logged 500.

pub mod catalog;
pub mod config;
pub mod profile;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError, profile::ProfileError},
};

/// Main error type for the card server.
///
/// Uses `thiserror`'s `#[from]` so domain and library errors convert through `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Card profile lookup or document decoding failed.
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// Reference catalog could not be loaded.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Serialization error while encoding a document or audit payload.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
