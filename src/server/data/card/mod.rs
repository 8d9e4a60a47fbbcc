//! Card profile store repositories.

pub mod battle_result;
pub mod domain;
pub mod online_pair;
pub mod profile;
pub mod tag_team;
