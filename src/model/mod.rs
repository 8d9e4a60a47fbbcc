//! Data transfer objects shared between the server and the admin client.

pub mod api;
pub mod card;
pub mod catalog;
pub mod game;
