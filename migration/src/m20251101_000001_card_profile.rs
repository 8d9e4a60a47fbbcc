use sea_orm_migration::{prelude::*, schema::*};

static IDX_CARD_PROFILE_ACCESS_CODE_CHIP_ID: &str = "idx-card_profile-access_code-chip_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(CardProfile::Id))
                    .col(string(CardProfile::AccessCode))
                    .col(string(CardProfile::ChipId))
                    .col(string_uniq(CardProfile::SessionId))
                    .col(timestamp(CardProfile::CreatedAt))
                    .col(timestamp(CardProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CARD_PROFILE_ACCESS_CODE_CHIP_ID)
                    .table(CardProfile::Table)
                    .col(CardProfile::AccessCode)
                    .col(CardProfile::ChipId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARD_PROFILE_ACCESS_CODE_CHIP_ID)
                    .table(CardProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CardProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CardProfile {
    Table,
    Id,
    AccessCode,
    ChipId,
    SessionId,
    CreatedAt,
    UpdatedAt,
}
