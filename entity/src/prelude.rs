pub use super::card_profile::Entity as CardProfile;
pub use super::offline_pvp_battle_result::Entity as OfflinePvpBattleResult;
pub use super::online_pair::Entity as OnlinePair;
pub use super::pilot_domain::Entity as PilotDomain;
pub use super::tag_team_data::Entity as TagTeamData;
pub use super::user_domain::Entity as UserDomain;
