//! Factory functions for card profile JSON documents.
//!
//! Each document carries one field the server does not model so tests can verify
//! that unknown fields survive a decode and re-encode.

use serde_json::{json, Value};

pub const DEFAULT_ECHELON_ID: u32 = 5;
pub const DEFAULT_ECHELON_EXP: i32 = 100;
pub const DEFAULT_GP: u32 = 1000;
pub const DEFAULT_NAVIGATOR_ID: u32 = 1;
pub const DEFAULT_MOBILE_SUIT_ID: u32 = 1001;
pub const DEFAULT_PILOT_NAME: &str = "TESTPILOT";

/// The four stored documents of a card profile
#[derive(Clone, Debug)]
pub struct CardDocuments {
    pub load_player: Value,
    pub pilot_data_group: Value,
    pub user: Value,
    pub mobile_user_group: Value,
}

impl Default for CardDocuments {
    fn default() -> Self {
        Self {
            load_player: load_player(),
            pilot_data_group: pilot_data_group(),
            user: user(),
            mobile_user_group: mobile_user_group(),
        }
    }
}

pub fn load_player() -> Value {
    json!({
        "EchelonId": DEFAULT_ECHELON_ID,
        "EchelonExp": DEFAULT_ECHELON_EXP,
        "SEchelonFlag": false,
        "SEchelonProgress": 0,
        "RankIdSolo": 0,
        "RankIdTeam": 0,
        "TotalWin": 10,
        "TotalLose": 5,
        "ShuffleWin": 6,
        "ShuffleLose": 3,
        "TeamWin": 4,
        "TeamLose": 2,
        "PilotName": DEFAULT_PILOT_NAME
    })
}

pub fn user() -> Value {
    json!({
        "Gp": DEFAULT_GP,
        "GuestNavs": [
            { "GuestNavId": DEFAULT_NAVIGATOR_ID, "GuestNavFamiliarity": 10 },
            { "GuestNavId": 2, "GuestNavFamiliarity": 0 }
        ],
        "FavoriteMobileSuits": [
            { "MstMobileSuitId": DEFAULT_MOBILE_SUIT_ID, "MsUsedNum": 3, "BgmId": 4 },
            { "MstMobileSuitId": 0, "MsUsedNum": 0 }
        ],
        "OpenEchelon": true
    })
}

pub fn pilot_data_group() -> Value {
    json!({
        "MsSkills": [
            {
                "MstMobileSuitId": DEFAULT_MOBILE_SUIT_ID,
                "MsUsedNum": 3,
                "CostumeId": 2,
                "TriadBuddyPoint": 0
            }
        ],
        "CpuScenes": [],
        "TotalTriadScenePlayNum": 0,
        "TotalTriadScore": 0,
        "CpuRibbons": [1],
        "pilot_rank_match": null,
        "TitleCustomizeData": { "TitleId": 7 }
    })
}

pub fn mobile_user_group() -> Value {
    json!({
        "OpeningMessages": [],
        "PlayingMessages": [],
        "ResultMessages": [
            {
                "Command": 1,
                "MessageId": 9,
                "PhraseId": 0,
                "StampId": 0,
                "MessagePosition": 0
            }
        ],
        "PlayerName": DEFAULT_PILOT_NAME
    })
}
