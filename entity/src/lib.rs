//! SeaORM entities for the card profile store.

pub mod prelude;

pub mod card_profile;
pub mod offline_pvp_battle_result;
pub mod online_pair;
pub mod pilot_domain;
pub mod tag_team_data;
pub mod user_domain;
