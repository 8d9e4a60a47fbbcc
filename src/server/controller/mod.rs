//! HTTP controller endpoints for the card server API.
//!
//! This module contains Axum handlers for the card customize endpoints, the cabinet game
//! request envelope and the read-only reference catalog. Controllers delegate to services
//! and map their errors to HTTP responses, and are documented with utoipa.

pub mod card;
pub mod catalog;
pub mod game;
