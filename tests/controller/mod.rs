//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted state and bodies, verifying the status
//! codes they map service results and errors to.

mod card;
mod catalog;
mod game;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use exvs_card::server::model::app::AppState;
use exvs_card_test_utils::prelude::*;
