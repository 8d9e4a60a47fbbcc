use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-suit, per-course and rank-match progress of a pilot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PilotDataGroup {
    pub ms_skills: Vec<MsSkillGroup>,
    pub cpu_scenes: Vec<CpuSceneData>,
    pub total_triad_scene_play_num: u32,
    pub total_triad_score: u32,
    pub cpu_ribbons: Option<Vec<u32>>,
    #[serde(rename = "pilot_rank_match")]
    pub pilot_rank_match: Option<PilotRankMatch>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MsSkillGroup {
    pub mst_mobile_suit_id: u32,
    pub ms_used_num: u32,
    pub costume_id: u32,
    pub triad_buddy_point: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CpuSceneData {
    pub course_id: u32,
    pub released_at: u64,
    pub total_play_num: u32,
    pub total_clear_num: u32,
    pub highscore: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PilotRankMatch {
    pub pilot_rank_match_solo: Option<PilotRankMatchInfo>,
    pub pilot_rank_match_team: Option<PilotRankMatchInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PilotRankMatchInfo {
    pub rank_id: u32,
    pub level: u32,
    pub win_lose_infoes: Vec<u32>,
    pub rank_point: u32,
    pub ex_rank: u32,
    pub ex_rank_change_flag: u32,
    pub cpu_num: u32,
    pub exx_lock_flag: bool,
    pub pre_trial_exx_flag: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PilotRankMatchInfo {
    /// Fresh rank-match record with every counter zeroed
    pub fn with_rank_id(rank_id: u32) -> Self {
        Self {
            rank_id,
            ..Default::default()
        }
    }
}
