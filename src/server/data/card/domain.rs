use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Repository for the pilot and user domain rows holding a card's JSON documents
pub struct ProfileDomainRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileDomainRepository<'a, C> {
    /// Creates a new instance of [`ProfileDomainRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_pilot_domain(
        &self,
        card_id: i32,
    ) -> Result<Option<entity::pilot_domain::Model>, DbErr> {
        entity::prelude::PilotDomain::find()
            .filter(entity::pilot_domain::Column::CardId.eq(card_id))
            .one(self.db)
            .await
    }

    pub async fn get_user_domain(
        &self,
        card_id: i32,
    ) -> Result<Option<entity::user_domain::Model>, DbErr> {
        entity::prelude::UserDomain::find()
            .filter(entity::user_domain::Column::CardId.eq(card_id))
            .one(self.db)
            .await
    }

    /// Replace both pilot documents of a pilot domain row
    pub async fn update_pilot_documents(
        &self,
        pilot_domain: entity::pilot_domain::Model,
        load_player_json: String,
        pilot_data_group_json: String,
    ) -> Result<entity::pilot_domain::Model, DbErr> {
        let mut pilot_domain_am = pilot_domain.into_active_model();
        pilot_domain_am.load_player_json = ActiveValue::Set(load_player_json);
        pilot_domain_am.pilot_data_group_json = ActiveValue::Set(pilot_data_group_json);
        pilot_domain_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        pilot_domain_am.update(self.db).await
    }

    /// Replace both user documents of a user domain row
    pub async fn update_user_documents(
        &self,
        user_domain: entity::user_domain::Model,
        user_json: String,
        mobile_user_group_json: String,
    ) -> Result<entity::user_domain::Model, DbErr> {
        let mut user_domain_am = user_domain.into_active_model();
        user_domain_am.user_json = ActiveValue::Set(user_json);
        user_domain_am.mobile_user_group_json = ActiveValue::Set(mobile_user_group_json);
        user_domain_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_domain_am.update(self.db).await
    }
}
