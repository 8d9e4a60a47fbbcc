use std::collections::HashSet;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::card::UpsertTeamsRequest,
    server::{
        data::card::{
            online_pair::OnlinePairRepository, profile::CardProfileRepository,
            tag_team::TagTeamRepository,
        },
        error::{profile::ProfileError, Error},
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Overwrite a card's tag teams with the submitted team list
    ///
    /// Teams the card belongs to that are not listed are deleted, listed teams get their
    /// display attributes replaced and the online pair markers are rebuilt from the
    /// `online_tag` flags. Ids of 0 are placeholders and ids the card does not belong
    /// to are skipped. An empty list leaves everything untouched.
    ///
    /// The passes are committed one after another without an enclosing transaction.
    ///
    /// # Returns
    /// - `Ok(())`: The teams were upserted or the list was empty
    /// - `Err(Error::ProfileError)`: No card matches the access code and chip id
    /// - `Err(Error::DbErr)`: A database operation failed
    pub async fn upsert_teams(&self, request: &UpsertTeamsRequest) -> Result<(), Error> {
        let profile_repository = CardProfileRepository::new(self.db);
        let tag_team_repository = TagTeamRepository::new(self.db);
        let online_pair_repository = OnlinePairRepository::new(self.db);

        let card = profile_repository
            .find_by_access_code(&request.access_code, &request.chip_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(format!("access code {}", request.access_code)))?;

        if request.teams.is_empty() {
            return Ok(());
        }

        online_pair_repository.delete_by_card_id(card.id).await?;

        let incoming_ids: HashSet<i64> = request
            .teams
            .iter()
            .filter(|team| team.id != 0)
            .map(|team| team.id as i64)
            .collect();

        let (kept, removed): (Vec<_>, Vec<_>) = tag_team_repository
            .get_for_card(card.id)
            .await?
            .into_iter()
            .partition(|team| incoming_ids.contains(&(team.id as i64)));

        let removed_ids: Vec<i32> = removed.iter().map(|team| team.id).collect();
        let deleted = tag_team_repository.delete_many(removed_ids).await?;

        let mut online_team_ids = Vec::new();
        let mut updated = 0;
        for team in request.teams.iter().filter(|team| team.id != 0) {
            let Some(existing) = kept
                .iter()
                .find(|existing| existing.id as i64 == team.id as i64)
            else {
                continue;
            };

            let existing = tag_team_repository
                .update_display(existing.clone(), team)
                .await?;
            updated += 1;

            if team.online_tag {
                online_team_ids.push(existing.id);
            }
        }

        online_pair_repository
            .insert_many(card.id, online_team_ids)
            .await?;

        tracing::debug!(
            card_id = card.id,
            updated,
            deleted,
            "Upserted tag teams for card"
        );

        Ok(())
    }
}
