use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{error::InternalServerError, model::document::DocumentKind},
};

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Card profile not found for {0}")]
    NotFound(String),
    #[error("Card profile ID {card_id} has no stored {document} document")]
    MissingDocument {
        card_id: i32,
        document: DocumentKind,
    },
    #[error("Card profile ID {card_id} has an invalid {document} document: {source}")]
    InvalidCardData {
        card_id: i32,
        document: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Card profile not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
