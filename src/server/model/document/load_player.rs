use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Scalar progression counters of a pilot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadPlayer {
    pub echelon_id: u32,
    pub echelon_exp: i32,
    pub s_echelon_flag: bool,
    pub s_echelon_progress: u32,
    pub rank_id_solo: u32,
    pub rank_id_team: u32,
    pub total_win: u32,
    pub total_lose: u32,
    pub shuffle_win: u32,
    pub shuffle_lose: u32,
    pub team_win: u32,
    pub team_lose: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
