//! Shorthand aliases for the entity models returned by fixtures.

pub type CardProfileModel = entity::card_profile::Model;
pub type PilotDomainModel = entity::pilot_domain::Model;
pub type UserDomainModel = entity::user_domain::Model;
pub type TagTeamModel = entity::tag_team_data::Model;
pub type OnlinePairModel = entity::online_pair::Model;
pub type OfflinePvpBattleResultModel = entity::offline_pvp_battle_result::Model;
