//! Typed views of the JSON documents embedded in a card profile.
//!
//! Each document is decoded whole, mutated in memory and re-encoded whole. Fields
//! the server does not model are kept in a flattened `extra` map so a round trip
//! never drops data written by other components.

pub mod load_player;
pub mod mobile_user;
pub mod pilot_data;
pub mod user;

pub use load_player::LoadPlayer;
pub use mobile_user::{CommandMessageGroup, MobileUserGroup};
pub use pilot_data::{CpuSceneData, MsSkillGroup, PilotDataGroup, PilotRankMatch, PilotRankMatchInfo};
pub use user::{FavoriteMsGroup, GuestNavGroup, User};

/// Identifies which embedded document a codec failure refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    LoadPlayer,
    PilotDataGroup,
    User,
    MobileUserGroup,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LoadPlayer => "LoadPlayer",
            Self::PilotDataGroup => "PilotDataGroup",
            Self::User => "User",
            Self::MobileUserGroup => "MobileUserGroup",
        };

        f.write_str(name)
    }
}

/// The four documents of a card profile, decoded together for a merge
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDocuments {
    pub load_player: LoadPlayer,
    pub user: User,
    pub pilot_data: PilotDataGroup,
    pub mobile_user: MobileUserGroup,
}
