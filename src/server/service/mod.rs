//! Service layer for business logic.
//!
//! Services resolve card profiles through the repositories, decode their documents,
//! apply the customize and battle-result merges and persist the outcome. The reference
//! catalog is also loaded here.

pub mod card;
pub mod catalog;
pub mod game;
