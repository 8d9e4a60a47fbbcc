use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct OnlinePairRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OnlinePairRepository<'a, C> {
    /// Creates a new instance of [`OnlinePairRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Remove every online pair marker of a card
    pub async fn delete_by_card_id(&self, card_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OnlinePair::delete_many()
            .filter(entity::online_pair::Column::CardId.eq(card_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Mark each of `team_ids` as an online pair of the card
    pub async fn insert_many(&self, card_id: i32, team_ids: Vec<i32>) -> Result<(), DbErr> {
        if team_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let pairs = team_ids
            .into_iter()
            .map(|team_id| entity::online_pair::ActiveModel {
                card_id: ActiveValue::Set(card_id),
                team_id: ActiveValue::Set(team_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::OnlinePair::insert_many(pairs)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
