//! In-memory battle types shared by the battle-result merges.

/// Battle mode a result was recorded under
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleMode {
    OfflineSolo,
    OfflineTeam,
    Triad,
}

/// Who occupied a partner or foe slot in a recorded battle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerIndicator {
    Player,
    Cpu,
    /// Slot was not reported by the cabinet
    Discarded,
}

impl PlayerIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Cpu => "Cpu",
            Self::Discarded => "Discarded",
        }
    }
}

/// Result fields the save-battle steps read, independent of the result variant
#[derive(Clone, Debug, PartialEq)]
pub struct BattleResultContext {
    pub battle_mode: BattleMode,
    pub echelon_id: u32,
    pub echelon_exp: i32,
    pub s_echelon_flag: bool,
    pub s_echelon_progress: u32,
}

/// Snapshot of a partner or foe for the battle audit row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantSnapshot {
    pub indicator: PlayerIndicator,
    pub pilot_id: Option<i64>,
    pub ms_id: Option<i64>,
    pub echelon_id: Option<i64>,
    pub burst_type: Option<i64>,
}

impl ParticipantSnapshot {
    /// Slot with no identity, either a CPU or an unreported participant
    pub fn anonymous(indicator: PlayerIndicator) -> Self {
        Self {
            indicator,
            pilot_id: None,
            ms_id: None,
            echelon_id: None,
            burst_type: None,
        }
    }
}

impl Default for ParticipantSnapshot {
    fn default() -> Self {
        Self::anonymous(PlayerIndicator::Discarded)
    }
}

/// Audit record of an offline PvP battle, persisted append-only
#[derive(Clone, Debug, PartialEq)]
pub struct PvpBattleRecord {
    pub offline_battle_mode: &'static str,
    pub win_flag: bool,
    pub score: i64,
    pub used_ms_id: i64,
    pub used_burst_type: i64,
    pub elapsed_second: i64,
    pub past_echelon_id: i64,
    pub echelon_exp_change: i64,
    pub echelon_id_after_battle: i64,
    pub total_echelon_exp: i64,
    pub s_echelon_flag: bool,
    pub s_echelon_progress: i64,
    pub partner: ParticipantSnapshot,
    pub foe1: ParticipantSnapshot,
    pub foe2: ParticipantSnapshot,
    pub full_battle_result_json: String,
}

/// Mode label stored on every offline PvP audit row
pub const OFFLINE_PVP_MODE: &str = "OfflinePvp";
