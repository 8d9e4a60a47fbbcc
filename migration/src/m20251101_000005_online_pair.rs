use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_card_profile::CardProfile;

static IDX_ONLINE_PAIR_CARD_ID: &str = "idx-online_pair-card_id";
static FK_ONLINE_PAIR_CARD_ID: &str = "fk-online_pair-card_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnlinePair::Table)
                    .if_not_exists()
                    .col(pk_auto(OnlinePair::Id))
                    .col(integer(OnlinePair::CardId))
                    .col(integer(OnlinePair::TeamId))
                    .col(timestamp(OnlinePair::CreatedAt))
                    .col(timestamp(OnlinePair::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ONLINE_PAIR_CARD_ID)
                    .table(OnlinePair::Table)
                    .col(OnlinePair::CardId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ONLINE_PAIR_CARD_ID)
                    .from_tbl(OnlinePair::Table)
                    .from_col(OnlinePair::CardId)
                    .to_tbl(CardProfile::Table)
                    .to_col(CardProfile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ONLINE_PAIR_CARD_ID)
                    .table(OnlinePair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ONLINE_PAIR_CARD_ID)
                    .table(OnlinePair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OnlinePair::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OnlinePair {
    Table,
    Id,
    CardId,
    TeamId,
    CreatedAt,
    UpdatedAt,
}
