//! Data access layer repositories.
//!
//! Repositories provide a thin abstraction over SeaORM queries for the card profile
//! store. They are generic over [`sea_orm::ConnectionTrait`] so callers can run them on
//! a plain connection or inside a transaction.

pub mod card;
