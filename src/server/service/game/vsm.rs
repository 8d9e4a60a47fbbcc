use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::game::SaveVsmResult,
    server::{
        data::card::{
            battle_result::BattleResultRepository, profile::CardProfileRepository,
            tag_team::TagTeamRepository,
        },
        error::{profile::ProfileError, Error},
        model::{
            battle::{BattleMode, BattleResultContext, PvpBattleRecord},
            document::{LoadPlayer, ProfileDocuments},
        },
        service::{
            card::profile::ProfileDocumentService,
            game::{
                merge::{
                    bump_navigator_familiarity, foe_snapshots, participant_snapshot,
                    record_suit_usage, record_win_loss,
                },
                step::{default_steps, SaveBattleStep},
            },
        },
    },
};

/// Merges offline versus (player vs player) results into a card profile
pub struct VsmResultService<'a> {
    db: &'a DatabaseConnection,
    steps: Vec<Box<dyn SaveBattleStep>>,
}

impl<'a> VsmResultService<'a> {
    /// Creates a new instance of [`VsmResultService`] with the default save-battle steps
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_steps(db, default_steps())
    }

    pub fn with_steps(db: &'a DatabaseConnection, steps: Vec<Box<dyn SaveBattleStep>>) -> Self {
        Self { db, steps }
    }

    /// Apply an offline versus result to the card that owns the session
    ///
    /// Appends one audit row, credits the tag team skill point and runs the
    /// registered save-battle steps. Everything is written in one transaction.
    ///
    /// # Returns
    /// - `Ok(())`: The result was merged and persisted
    /// - `Err(Error::ProfileError)`: Unknown session, missing domain row or undecodable
    ///   document
    /// - `Err(Error::DbErr)`: A database operation failed, nothing was written
    pub async fn save(&self, request: &SaveVsmResult) -> Result<(), Error> {
        let card = CardProfileRepository::new(self.db)
            .find_by_session_id(&request.session_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(format!("session {}", request.session_id)))?;

        let txn = self.db.begin().await?;
        let document_service = ProfileDocumentService::new(&txn);

        let mut profile = document_service.load(card.id).await?;
        let record = battle_record(request, &profile.documents.load_player)?;
        let context = battle_context(request);

        merge_vsm_result(&mut profile.documents, request);
        self.credit_tag_team(&txn, request).await?;

        for step in &self.steps {
            step.apply(&mut profile.documents, &context);
        }

        BattleResultRepository::new(&txn)
            .create(card.id, record)
            .await?;
        document_service.save(profile).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn credit_tag_team<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        request: &SaveVsmResult,
    ) -> Result<(), Error> {
        let result = &request.result;
        if result.tag_team_id == 0 {
            return Ok(());
        }

        let (Ok(pilot_card_id), Ok(team_id)) = (
            i32::try_from(request.pilot_id),
            i32::try_from(result.tag_team_id),
        ) else {
            return Ok(());
        };

        let tag_team_repository = TagTeamRepository::new(db);
        let Some(team) = tag_team_repository
            .find_owned(pilot_card_id, team_id)
            .await?
        else {
            return Ok(());
        };

        tracing::info!(
            team_id = team.id,
            increment = result.tag_skill_point,
            "Crediting tag team skill point"
        );

        tag_team_repository
            .add_skill_point(team.id, result.tag_skill_point as i64)
            .await?;

        Ok(())
    }
}

fn battle_context(request: &SaveVsmResult) -> BattleResultContext {
    let result = &request.result;

    BattleResultContext {
        battle_mode: if request.shuffle_flag {
            BattleMode::OfflineSolo
        } else {
            BattleMode::OfflineTeam
        },
        echelon_id: result.echelon_id,
        echelon_exp: result.echelon_exp,
        s_echelon_flag: result.s_echelon_flag,
        s_echelon_progress: result.s_echelon_progress,
    }
}

/// Build the audit row from the result and the pre-merge load player document
pub fn battle_record(
    request: &SaveVsmResult,
    load_player: &LoadPlayer,
) -> Result<PvpBattleRecord, serde_json::Error> {
    let result = &request.result;
    let (foe1, foe2) = foe_snapshots(result.foes.as_deref());

    Ok(PvpBattleRecord {
        offline_battle_mode: if request.shuffle_flag { "Shuffle" } else { "Team" },
        win_flag: result.win_flag,
        score: result.result_score as i64,
        used_ms_id: result.mst_mobile_suit_id as i64,
        used_burst_type: result.burst_type as i64,
        elapsed_second: result.vs_elapsed_time as i64,
        past_echelon_id: load_player.echelon_id as i64,
        echelon_exp_change: result.echelon_exp as i64,
        echelon_id_after_battle: result.echelon_id as i64,
        total_echelon_exp: load_player.echelon_exp as i64 + result.echelon_exp as i64,
        s_echelon_flag: result.s_echelon_flag,
        s_echelon_progress: result.s_echelon_progress as i64,
        partner: participant_snapshot(result.partner.as_ref()),
        foe1,
        foe2,
        full_battle_result_json: serde_json::to_string(result)?,
    })
}

/// Apply the document rules of an offline versus result, before the save-battle steps
pub fn merge_vsm_result(documents: &mut ProfileDocuments, request: &SaveVsmResult) {
    let result = &request.result;

    documents.user.gp = documents.user.gp.saturating_add(result.gp);
    record_win_loss(
        &mut documents.load_player,
        result.win_flag,
        request.shuffle_flag,
    );
    bump_navigator_familiarity(&mut documents.user, result.guest_nav_id, result.battle_nav_id);
    record_suit_usage(
        &mut documents.pilot_data,
        &mut documents.user,
        result.skill_point_mobile_suit_id,
    );
}
