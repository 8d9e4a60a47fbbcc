use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
