//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server, so
//! signatures don't need to reach into the generated `entity` crate directly.

/// Type alias for the card profile database model.
///
/// # Fields (from `entity::card_profile::Model`)
/// - `id` - Primary key, also the pilot id reported by cabinets
/// - `access_code` - Access code printed on the physical card
/// - `chip_id` - Chip id of the physical card
/// - `session_id` - Session id assigned when the card is loaded on a cabinet
/// - `created_at` / `updated_at` - Row timestamps
pub type CardProfileModel = entity::card_profile::Model;

/// Type alias for the pilot domain model holding the `LoadPlayer` and `PilotDataGroup`
/// JSON documents.
pub type PilotDomainModel = entity::pilot_domain::Model;

/// Type alias for the user domain model holding the `User` and `MobileUserGroup` JSON
/// documents.
pub type UserDomainModel = entity::user_domain::Model;

/// Type alias for a tag team, owned by `card_id` and shared with `teammate_card_id`.
pub type TagTeamModel = entity::tag_team_data::Model;

/// Type alias for an online pair marker pointing at a tag team.
pub type OnlinePairModel = entity::online_pair::Model;

/// Type alias for an offline PvP battle audit row.
pub type OfflinePvpBattleResultModel = entity::offline_pvp_battle_result::Model;
