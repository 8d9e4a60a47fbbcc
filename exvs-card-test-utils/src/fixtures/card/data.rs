//! Card profile database insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    error::TestError,
    fixtures::card::{factory::CardDocuments, CardFixtures},
    model::{
        CardProfileModel, OfflinePvpBattleResultModel, OnlinePairModel, PilotDomainModel,
        TagTeamModel, UserDomainModel,
    },
};

impl<'a> CardFixtures<'a> {
    /// Insert a card profile with the default factory documents.
    pub async fn insert_card(
        &self,
        access_code: &str,
        chip_id: &str,
        session_id: &str,
    ) -> Result<CardProfileModel, TestError> {
        self.insert_card_with_documents(access_code, chip_id, session_id, CardDocuments::default())
            .await
    }

    /// Insert a card profile and domain rows holding the provided documents.
    pub async fn insert_card_with_documents(
        &self,
        access_code: &str,
        chip_id: &str,
        session_id: &str,
        documents: CardDocuments,
    ) -> Result<CardProfileModel, TestError> {
        let card = self
            .insert_bare_card(access_code, chip_id, session_id)
            .await?;

        self.insert_pilot_domain(
            card.id,
            &documents.load_player.to_string(),
            &documents.pilot_data_group.to_string(),
        )
        .await?;
        self.insert_user_domain(
            card.id,
            &documents.user.to_string(),
            &documents.mobile_user_group.to_string(),
        )
        .await?;

        Ok(card)
    }

    /// Insert a card profile without pilot or user domain rows.
    pub async fn insert_bare_card(
        &self,
        access_code: &str,
        chip_id: &str,
        session_id: &str,
    ) -> Result<CardProfileModel, TestError> {
        Ok(
            entity::prelude::CardProfile::insert(entity::card_profile::ActiveModel {
                access_code: ActiveValue::Set(access_code.to_string()),
                chip_id: ActiveValue::Set(chip_id.to_string()),
                session_id: ActiveValue::Set(session_id.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a pilot domain row with raw document bodies, which may be malformed.
    pub async fn insert_pilot_domain(
        &self,
        card_id: i32,
        load_player_json: &str,
        pilot_data_group_json: &str,
    ) -> Result<PilotDomainModel, TestError> {
        Ok(
            entity::prelude::PilotDomain::insert(entity::pilot_domain::ActiveModel {
                card_id: ActiveValue::Set(card_id),
                load_player_json: ActiveValue::Set(load_player_json.to_string()),
                pilot_data_group_json: ActiveValue::Set(pilot_data_group_json.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user domain row with raw document bodies, which may be malformed.
    pub async fn insert_user_domain(
        &self,
        card_id: i32,
        user_json: &str,
        mobile_user_group_json: &str,
    ) -> Result<UserDomainModel, TestError> {
        Ok(
            entity::prelude::UserDomain::insert(entity::user_domain::ActiveModel {
                card_id: ActiveValue::Set(card_id),
                user_json: ActiveValue::Set(user_json.to_string()),
                mobile_user_group_json: ActiveValue::Set(mobile_user_group_json.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a tag team owned by `card_id` with zeroed display attributes.
    pub async fn insert_tag_team(
        &self,
        card_id: i32,
        teammate_card_id: i32,
        team_name: &str,
    ) -> Result<TagTeamModel, TestError> {
        Ok(
            entity::prelude::TagTeamData::insert(entity::tag_team_data::ActiveModel {
                card_id: ActiveValue::Set(card_id),
                teammate_card_id: ActiveValue::Set(teammate_card_id),
                team_name: ActiveValue::Set(team_name.to_string()),
                background_parts_id: ActiveValue::Set(0),
                emblem_id: ActiveValue::Set(0),
                effect_id: ActiveValue::Set(0),
                name_color_id: ActiveValue::Set(0),
                bgm_id: ActiveValue::Set(0),
                skill_point: ActiveValue::Set(0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_online_pair(
        &self,
        card_id: i32,
        team_id: i32,
    ) -> Result<OnlinePairModel, TestError> {
        Ok(
            entity::prelude::OnlinePair::insert(entity::online_pair::ActiveModel {
                card_id: ActiveValue::Set(card_id),
                team_id: ActiveValue::Set(team_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Fetch the pilot domain row of a card, failing if it does not exist.
    pub async fn get_pilot_domain(&self, card_id: i32) -> Result<PilotDomainModel, TestError> {
        entity::prelude::PilotDomain::find()
            .filter(entity::pilot_domain::Column::CardId.eq(card_id))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| {
                TestError::DbErr(DbErr::RecordNotFound(format!(
                    "pilot domain for card {card_id}"
                )))
            })
    }

    /// Fetch the user domain row of a card, failing if it does not exist.
    pub async fn get_user_domain(&self, card_id: i32) -> Result<UserDomainModel, TestError> {
        entity::prelude::UserDomain::find()
            .filter(entity::user_domain::Column::CardId.eq(card_id))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| {
                TestError::DbErr(DbErr::RecordNotFound(format!(
                    "user domain for card {card_id}"
                )))
            })
    }

    pub async fn get_tag_team(&self, team_id: i32) -> Result<Option<TagTeamModel>, TestError> {
        Ok(entity::prelude::TagTeamData::find_by_id(team_id)
            .one(&self.setup.db)
            .await?)
    }

    pub async fn get_online_pairs(&self, card_id: i32) -> Result<Vec<OnlinePairModel>, TestError> {
        Ok(entity::prelude::OnlinePair::find()
            .filter(entity::online_pair::Column::CardId.eq(card_id))
            .order_by_asc(entity::online_pair::Column::TeamId)
            .all(&self.setup.db)
            .await?)
    }

    pub async fn get_battle_results(
        &self,
        card_id: i32,
    ) -> Result<Vec<OfflinePvpBattleResultModel>, TestError> {
        Ok(entity::prelude::OfflinePvpBattleResult::find()
            .filter(entity::offline_pvp_battle_result::Column::CardId.eq(card_id))
            .order_by_asc(entity::offline_pvp_battle_result::Column::Id)
            .all(&self.setup.db)
            .await?)
    }
}
