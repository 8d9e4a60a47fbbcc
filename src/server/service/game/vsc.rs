use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::game::{SaveVscResult, VscPlayResultGroup},
    server::{
        data::card::profile::CardProfileRepository,
        error::{profile::ProfileError, Error},
        model::{
            battle::{BattleMode, BattleResultContext},
            document::ProfileDocuments,
        },
        service::{
            card::profile::ProfileDocumentService,
            game::{
                merge::{
                    bump_navigator_familiarity, record_rank_match, record_suit_usage,
                    record_triad_buddy, record_triad_scene,
                },
                step::{SaveBattleStep, SaveEchelonStep},
            },
        },
    },
};

/// Merges versus CPU (triad) results into a card profile
pub struct VscResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VscResultService<'a> {
    /// Creates a new instance of [`VscResultService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Apply a versus CPU result to the card that owns the session
    ///
    /// # Returns
    /// - `Ok(())`: The documents were merged and persisted
    /// - `Err(Error::ProfileError)`: Unknown session, missing domain row or undecodable
    ///   document
    /// - `Err(Error::DbErr)`: A database operation failed, nothing was written
    pub async fn save(&self, request: &SaveVscResult) -> Result<(), Error> {
        let card = CardProfileRepository::new(self.db)
            .find_by_session_id(&request.session_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(format!("session {}", request.session_id)))?;

        let txn = self.db.begin().await?;
        let document_service = ProfileDocumentService::new(&txn);

        let mut profile = document_service.load(card.id).await?;
        merge_vsc_result(&mut profile.documents, &request.result, unix_now());
        document_service.save(profile).await?;

        txn.commit().await?;

        tracing::debug!(
            card_id = card.id,
            course_id = request.result.course_id,
            "Saved versus CPU result"
        );

        Ok(())
    }
}

/// Apply every versus CPU rule to the decoded documents
pub fn merge_vsc_result(documents: &mut ProfileDocuments, result: &VscPlayResultGroup, now: u64) {
    let context = BattleResultContext {
        battle_mode: BattleMode::Triad,
        echelon_id: result.echelon_id,
        echelon_exp: result.echelon_exp,
        s_echelon_flag: result.s_echelon_flag,
        s_echelon_progress: result.s_echelon_progress,
    };

    SaveEchelonStep.apply(documents, &context);
    documents.user.gp = documents.user.gp.saturating_add(result.gp);

    bump_navigator_familiarity(&mut documents.user, result.guest_nav_id, result.battle_nav_id);
    record_suit_usage(
        &mut documents.pilot_data,
        &mut documents.user,
        result.mst_mobile_suit_id,
    );

    if let Some(partner) = &result.partner {
        record_triad_buddy(&mut documents.pilot_data, partner);
    }

    record_triad_scene(&mut documents.pilot_data, result, now);
    record_rank_match(
        &mut documents.load_player,
        &mut documents.pilot_data,
        result.rank_match_info.as_ref(),
    );
}

pub(crate) fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}
