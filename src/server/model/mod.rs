//! Server application models and type definitions.
//!
//! This module contains the application state, database model type aliases, the typed
//! card profile documents and the in-memory battle types used by the result merges.

pub mod app;
pub mod battle;
pub mod db;
pub mod document;
