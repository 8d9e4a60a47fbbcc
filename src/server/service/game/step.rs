use dioxus_logger::tracing;

use crate::server::{
    model::{battle::BattleResultContext, document::ProfileDocuments},
    service::game::merge::apply_echelon,
};

/// A post-merge step run after an offline versus result has been applied
///
/// Steps run in registration order against the fully merged documents.
pub trait SaveBattleStep: Send + Sync {
    fn apply(&self, documents: &mut ProfileDocuments, context: &BattleResultContext);
}

/// Applies the echelon fields of the result to the load player document
pub struct SaveEchelonStep;

impl SaveBattleStep for SaveEchelonStep {
    fn apply(&self, documents: &mut ProfileDocuments, context: &BattleResultContext) {
        tracing::debug!(
            battle_mode = ?context.battle_mode,
            echelon_id = context.echelon_id,
            echelon_exp = context.echelon_exp,
            "Applying echelon result"
        );

        apply_echelon(&mut documents.load_player, context);
    }
}

/// Steps registered for every offline versus result
pub fn default_steps() -> Vec<Box<dyn SaveBattleStep>> {
    vec![Box::new(SaveEchelonStep)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::battle::BattleMode;

    fn context(battle_mode: BattleMode) -> BattleResultContext {
        BattleResultContext {
            battle_mode,
            echelon_id: 7,
            echelon_exp: 15,
            s_echelon_flag: true,
            s_echelon_progress: 3,
        }
    }

    /// Expect the echelon applied identically for triad and offline versus results
    #[test]
    fn echelon_step_applies_for_every_mode() {
        for mode in [BattleMode::OfflineSolo, BattleMode::OfflineTeam, BattleMode::Triad] {
            let mut documents = ProfileDocuments::default();
            documents.load_player.echelon_exp = 10;

            SaveEchelonStep.apply(&mut documents, &context(mode));

            assert_eq!(documents.load_player.echelon_id, 7);
            assert_eq!(documents.load_player.echelon_exp, 25);
            assert!(documents.load_player.s_echelon_flag);
        }
    }

    #[test]
    fn default_steps_start_with_echelon() {
        let steps = default_steps();
        let mut documents = ProfileDocuments::default();

        for step in &steps {
            step.apply(&mut documents, &context(BattleMode::OfflineTeam));
        }

        assert_eq!(steps.len(), 1);
        assert_eq!(documents.load_player.echelon_id, 7);
    }
}
