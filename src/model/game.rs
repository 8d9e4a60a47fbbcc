//! Game cabinet request/response envelope.
//!
//! The cabinet protocol is owned by an external schema; these types mirror the
//! parts of it this server handles, using the protocol's field naming on the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request kinds a cabinet may send
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum RequestType {
    PreLoadCard,
    LoadCard,
    SaveVsmResult,
    SaveVscResult,
    SaveVsmOnResult,
}

/// Envelope status, the protocol has no finer grained error taxonomy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ErrorCode {
    Success,
    ErrServer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct GameRequest {
    #[serde(rename = "Type")]
    pub request_type: RequestType,
    pub request_id: u32,
    #[serde(rename = "save_vsm_result", default, skip_serializing_if = "Option::is_none")]
    pub save_vsm_result: Option<SaveVsmResult>,
    #[serde(rename = "save_vsc_result", default, skip_serializing_if = "Option::is_none")]
    pub save_vsc_result: Option<SaveVscResult>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct GameResponse {
    #[serde(rename = "Type")]
    pub response_type: RequestType,
    pub request_id: u32,
    pub error: ErrorCode,
    #[serde(rename = "save_vsm_result", default, skip_serializing_if = "Option::is_none")]
    pub save_vsm_result: Option<SaveVsmResultResponse>,
    #[serde(rename = "save_vsc_result", default, skip_serializing_if = "Option::is_none")]
    pub save_vsc_result: Option<SaveVscResultResponse>,
}

impl GameResponse {
    /// Builds a response echoing the request type and id with no payload
    pub fn for_request(request_type: RequestType, request_id: u32, error: ErrorCode) -> Self {
        Self {
            response_type: request_type,
            request_id,
            error,
            save_vsm_result: None,
            save_vsc_result: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SaveVsmResultResponse {}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SaveVscResultResponse {}

/// Offline versus (player vs player on linked cabinets) result
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct SaveVsmResult {
    pub session_id: String,
    pub pilot_id: u32,
    pub shuffle_flag: bool,
    pub result: VsmPlayResultGroup,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct VsmPlayResultGroup {
    pub win_flag: bool,
    pub result_score: u32,
    pub mst_mobile_suit_id: u32,
    pub skill_point_mobile_suit_id: u32,
    pub burst_type: u32,
    pub vs_elapsed_time: u32,
    pub echelon_id: u32,
    pub echelon_exp: i32,
    pub s_echelon_flag: bool,
    pub s_echelon_progress: u32,
    pub gp: u32,
    pub guest_nav_id: u32,
    pub battle_nav_id: u32,
    pub tag_team_id: u32,
    pub tag_skill_point: u32,
    pub partner: Option<BattlePlayerGroup>,
    pub foes: Option<Vec<BattlePlayerGroup>>,
    /// Result fields not read by the merge, kept for the audit blob
    #[serde(flatten)]
    #[cfg_attr(feature = "server", schema(ignore))]
    pub extra: Map<String, Value>,
}

/// Versus CPU (triad course) result
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct SaveVscResult {
    pub session_id: String,
    pub pilot_id: u32,
    pub result: VscPlayResultGroup,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct VscPlayResultGroup {
    pub echelon_id: u32,
    pub echelon_exp: i32,
    pub s_echelon_flag: bool,
    pub s_echelon_progress: u32,
    pub gp: u32,
    pub guest_nav_id: u32,
    pub battle_nav_id: u32,
    pub mst_mobile_suit_id: u32,
    pub partner: Option<BattlePlayerGroup>,
    pub scene_score: u32,
    pub course_id: u32,
    pub course_clear_flag: Option<bool>,
    pub course_score: Option<u32>,
    pub released_ribbon_ids: Option<Vec<u32>>,
    pub released_course_ids: Option<Vec<u32>>,
    #[serde(rename = "rank_match_info")]
    pub rank_match_info: Option<RankMatchInfo>,
}

/// Partner or foe as reported by the cabinet, `cpu_flag` is 0 for a human pilot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct BattlePlayerGroup {
    pub cpu_flag: u32,
    pub pilot_id: u32,
    pub mst_mobile_suit_id: u32,
    pub echelon_id: u32,
    pub burst_type: u32,
    pub mobile_set_flag: bool,
    #[serde(flatten)]
    #[cfg_attr(feature = "server", schema(ignore))]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct RankMatchInfo {
    pub rank_id_solo: u32,
    pub rank_id_team: u32,
}
