use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::battle::{PvpBattleRecord, OFFLINE_PVP_MODE};

pub struct BattleResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BattleResultRepository<'a, C> {
    /// Creates a new instance of [`BattleResultRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Append an offline PvP audit row for a card
    pub async fn create(
        &self,
        card_id: i32,
        record: PvpBattleRecord,
    ) -> Result<entity::offline_pvp_battle_result::Model, DbErr> {
        let PvpBattleRecord {
            offline_battle_mode,
            win_flag,
            score,
            used_ms_id,
            used_burst_type,
            elapsed_second,
            past_echelon_id,
            echelon_exp_change,
            echelon_id_after_battle,
            total_echelon_exp,
            s_echelon_flag,
            s_echelon_progress,
            partner,
            foe1,
            foe2,
            full_battle_result_json,
        } = record;

        let battle_result = entity::offline_pvp_battle_result::ActiveModel {
            card_id: ActiveValue::Set(card_id),
            mode: ActiveValue::Set(OFFLINE_PVP_MODE.to_string()),
            offline_battle_mode: ActiveValue::Set(offline_battle_mode.to_string()),
            win_flag: ActiveValue::Set(win_flag),
            score: ActiveValue::Set(score),
            used_ms_id: ActiveValue::Set(used_ms_id),
            used_burst_type: ActiveValue::Set(used_burst_type),
            elapsed_second: ActiveValue::Set(elapsed_second),
            past_echelon_id: ActiveValue::Set(past_echelon_id),
            echelon_exp_change: ActiveValue::Set(echelon_exp_change),
            echelon_id_after_battle: ActiveValue::Set(echelon_id_after_battle),
            total_echelon_exp: ActiveValue::Set(total_echelon_exp),
            s_echelon_flag: ActiveValue::Set(s_echelon_flag),
            s_echelon_progress: ActiveValue::Set(s_echelon_progress),
            partner_indicator: ActiveValue::Set(partner.indicator.as_str().to_string()),
            partner_pilot_id: ActiveValue::Set(partner.pilot_id),
            partner_ms_id: ActiveValue::Set(partner.ms_id),
            partner_echelon_id: ActiveValue::Set(partner.echelon_id),
            partner_burst_type: ActiveValue::Set(partner.burst_type),
            foe1_indicator: ActiveValue::Set(foe1.indicator.as_str().to_string()),
            foe1_pilot_id: ActiveValue::Set(foe1.pilot_id),
            foe1_ms_id: ActiveValue::Set(foe1.ms_id),
            foe1_echelon_id: ActiveValue::Set(foe1.echelon_id),
            foe1_burst_type: ActiveValue::Set(foe1.burst_type),
            foe2_indicator: ActiveValue::Set(foe2.indicator.as_str().to_string()),
            foe2_pilot_id: ActiveValue::Set(foe2.pilot_id),
            foe2_ms_id: ActiveValue::Set(foe2.ms_id),
            foe2_echelon_id: ActiveValue::Set(foe2.echelon_id),
            foe2_burst_type: ActiveValue::Set(foe2.burst_type),
            full_battle_result_json: ActiveValue::Set(full_battle_result_json),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        battle_result.insert(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use exvs_card_test_utils::prelude::*;

    use crate::server::{
        data::card::battle_result::BattleResultRepository,
        model::battle::{ParticipantSnapshot, PlayerIndicator, PvpBattleRecord},
    };

    fn record() -> PvpBattleRecord {
        PvpBattleRecord {
            offline_battle_mode: "Shuffle",
            win_flag: true,
            score: 1200,
            used_ms_id: 1001,
            used_burst_type: 2,
            elapsed_second: 90,
            past_echelon_id: 5,
            echelon_exp_change: 12,
            echelon_id_after_battle: 5,
            total_echelon_exp: 112,
            s_echelon_flag: false,
            s_echelon_progress: 0,
            partner: ParticipantSnapshot {
                indicator: PlayerIndicator::Player,
                pilot_id: Some(77),
                ms_id: Some(1002),
                echelon_id: Some(3),
                burst_type: Some(1),
            },
            foe1: ParticipantSnapshot::anonymous(PlayerIndicator::Cpu),
            foe2: ParticipantSnapshot::default(),
            full_battle_result_json: "{}".to_string(),
        }
    }

    /// Expect the audit row to carry the record and slot indicators
    #[tokio::test]
    async fn creates_audit_row() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_card_tables().build().await?;
        let card = test.card().insert_card("0001", "chip-1", "session-1").await?;

        let repository = BattleResultRepository::new(&test.db);
        let created = repository.create(card.id, record()).await?;

        assert_eq!(created.mode, "OfflinePvp");
        assert_eq!(created.offline_battle_mode, "Shuffle");
        assert_eq!(created.partner_indicator, "Player");
        assert_eq!(created.partner_pilot_id, Some(77));
        assert_eq!(created.foe1_indicator, "Cpu");
        assert_eq!(created.foe1_pilot_id, None);
        assert_eq!(created.foe2_indicator, "Discarded");
        assert_eq!(test.card().get_battle_results(card.id).await?.len(), 1);

        Ok(())
    }
}
