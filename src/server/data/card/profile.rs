use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CardProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardProfileRepository<'a, C> {
    /// Creates a new instance of [`CardProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find a card profile by the physical card identity
    pub async fn find_by_access_code(
        &self,
        access_code: &str,
        chip_id: &str,
    ) -> Result<Option<entity::card_profile::Model>, DbErr> {
        entity::prelude::CardProfile::find()
            .filter(entity::card_profile::Column::AccessCode.eq(access_code))
            .filter(entity::card_profile::Column::ChipId.eq(chip_id))
            .one(self.db)
            .await
    }

    /// Find a card profile by the session id handed out when a cabinet loads the card
    pub async fn find_by_session_id(
        &self,
        session_id: &str,
    ) -> Result<Option<entity::card_profile::Model>, DbErr> {
        entity::prelude::CardProfile::find()
            .filter(entity::card_profile::Column::SessionId.eq(session_id))
            .one(self.db)
            .await
    }
}
