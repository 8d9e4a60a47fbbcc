//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, the card profile
//! store, document codec, battle-result and customize merges, the cabinet request
//! dispatcher and the static reference catalog served to the admin UI.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
