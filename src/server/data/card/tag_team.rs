use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, IntoActiveModel, QueryFilter,
};

use crate::model::card::TeamDto;

pub struct TagTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagTeamRepository<'a, C> {
    /// Creates a new instance of [`TagTeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get every team the card belongs to, either as owner or as teammate
    pub async fn get_for_card(
        &self,
        card_id: i32,
    ) -> Result<Vec<entity::tag_team_data::Model>, DbErr> {
        entity::prelude::TagTeamData::find()
            .filter(
                Condition::any()
                    .add(entity::tag_team_data::Column::CardId.eq(card_id))
                    .add(entity::tag_team_data::Column::TeammateCardId.eq(card_id)),
            )
            .all(self.db)
            .await
    }

    /// Find a team owned by `card_id`
    pub async fn find_owned(
        &self,
        card_id: i32,
        team_id: i32,
    ) -> Result<Option<entity::tag_team_data::Model>, DbErr> {
        entity::prelude::TagTeamData::find()
            .filter(entity::tag_team_data::Column::CardId.eq(card_id))
            .filter(entity::tag_team_data::Column::Id.eq(team_id))
            .one(self.db)
            .await
    }

    /// Delete teams by record id
    ///
    /// # Returns
    /// The number of deleted rows
    pub async fn delete_many(&self, team_ids: Vec<i32>) -> Result<u64, DbErr> {
        if team_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::TagTeamData::delete_many()
            .filter(entity::tag_team_data::Column::Id.is_in(team_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Overwrite the display attributes of a team with the values submitted by an operator
    pub async fn update_display(
        &self,
        team: entity::tag_team_data::Model,
        display: &TeamDto,
    ) -> Result<entity::tag_team_data::Model, DbErr> {
        let mut team_am = team.into_active_model();
        team_am.team_name = ActiveValue::Set(display.name.clone());
        team_am.background_parts_id = ActiveValue::Set(display.background_parts_id as i64);
        team_am.emblem_id = ActiveValue::Set(display.emblem_id as i64);
        team_am.effect_id = ActiveValue::Set(display.effect_id as i64);
        team_am.name_color_id = ActiveValue::Set(display.name_color_id as i64);
        team_am.bgm_id = ActiveValue::Set(display.bgm_id as i64);
        team_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        team_am.update(self.db).await
    }

    /// Add to the skill point of a team
    ///
    /// # Returns
    /// The number of updated rows, 0 if the team does not exist
    pub async fn add_skill_point(&self, team_id: i32, amount: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::TagTeamData::update_many()
            .col_expr(
                entity::tag_team_data::Column::SkillPoint,
                Expr::col(entity::tag_team_data::Column::SkillPoint).add(amount),
            )
            .col_expr(
                entity::tag_team_data::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::tag_team_data::Column::Id.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    mod get_for_card {
        use exvs_card_test_utils::prelude::*;

        use crate::server::data::card::tag_team::TagTeamRepository;

        /// Expect teams where the card is owner or teammate and nothing else
        #[tokio::test]
        async fn returns_owned_and_joined_teams() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_card_tables().build().await?;
            let card = test.card().insert_card("0001", "chip-1", "session-1").await?;
            let other = test.card().insert_card("0002", "chip-2", "session-2").await?;
            let third = test.card().insert_card("0003", "chip-3", "session-3").await?;
            let owned = test.card().insert_tag_team(card.id, other.id, "OWNED").await?;
            let joined = test.card().insert_tag_team(other.id, card.id, "JOINED").await?;
            test.card().insert_tag_team(other.id, third.id, "UNRELATED").await?;

            let repository = TagTeamRepository::new(&test.db);
            let mut ids: Vec<i32> = repository
                .get_for_card(card.id)
                .await?
                .into_iter()
                .map(|team| team.id)
                .collect();
            ids.sort();

            assert_eq!(ids, vec![owned.id, joined.id]);

            Ok(())
        }
    }

    mod find_owned {
        use exvs_card_test_utils::prelude::*;

        use crate::server::data::card::tag_team::TagTeamRepository;

        /// Expect None when the card is only the teammate of the team
        #[tokio::test]
        async fn ignores_team_joined_as_teammate() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_card_tables().build().await?;
            let card = test.card().insert_card("0001", "chip-1", "session-1").await?;
            let other = test.card().insert_card("0002", "chip-2", "session-2").await?;
            let joined = test.card().insert_tag_team(other.id, card.id, "JOINED").await?;

            let repository = TagTeamRepository::new(&test.db);
            let as_teammate = repository.find_owned(card.id, joined.id).await?;
            let as_owner = repository.find_owned(other.id, joined.id).await?;

            assert!(as_teammate.is_none());
            assert_eq!(as_owner.map(|team| team.id), Some(joined.id));

            Ok(())
        }
    }

    mod delete_many {
        use exvs_card_test_utils::prelude::*;

        use crate::server::data::card::tag_team::TagTeamRepository;

        /// Expect only the listed teams to be removed
        #[tokio::test]
        async fn deletes_listed_teams() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_card_tables().build().await?;
            let card = test.card().insert_card("0001", "chip-1", "session-1").await?;
            let other = test.card().insert_card("0002", "chip-2", "session-2").await?;
            let first = test.card().insert_tag_team(card.id, other.id, "FIRST").await?;
            let second = test.card().insert_tag_team(card.id, other.id, "SECOND").await?;

            let repository = TagTeamRepository::new(&test.db);
            let deleted = repository.delete_many(vec![first.id]).await?;

            assert_eq!(deleted, 1);
            assert!(test.card().get_tag_team(first.id).await?.is_none());
            assert!(test.card().get_tag_team(second.id).await?.is_some());

            Ok(())
        }

        /// Expect no query and 0 rows for an empty id list
        #[tokio::test]
        async fn empty_list_deletes_nothing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let repository = TagTeamRepository::new(&test.db);
            let deleted = repository.delete_many(Vec::new()).await?;

            assert_eq!(deleted, 0);

            Ok(())
        }
    }

    mod add_skill_point {
        use exvs_card_test_utils::prelude::*;

        use crate::server::data::card::tag_team::TagTeamRepository;

        /// Expect skill point to accumulate across calls
        #[tokio::test]
        async fn accumulates_skill_point() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_card_tables().build().await?;
            let card = test.card().insert_card("0001", "chip-1", "session-1").await?;
            let other = test.card().insert_card("0002", "chip-2", "session-2").await?;
            let team = test.card().insert_tag_team(card.id, other.id, "TEAM").await?;

            let repository = TagTeamRepository::new(&test.db);
            repository.add_skill_point(team.id, 15).await?;
            let updated = repository.add_skill_point(team.id, 5).await?;

            assert_eq!(updated, 1);
            let team = test.card().get_tag_team(team.id).await?.unwrap();
            assert_eq!(team.skill_point, 20);

            Ok(())
        }

        /// Expect 0 updated rows for an unknown team
        #[tokio::test]
        async fn unknown_team_updates_nothing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_card_tables().build().await?;

            let repository = TagTeamRepository::new(&test.db);
            let updated = repository.add_skill_point(42, 5).await?;

            assert_eq!(updated, 0);

            Ok(())
        }
    }
}
