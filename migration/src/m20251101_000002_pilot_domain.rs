use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_card_profile::CardProfile;

static FK_PILOT_DOMAIN_CARD_ID: &str = "fk-pilot_domain-card_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PilotDomain::Table)
                    .if_not_exists()
                    .col(pk_auto(PilotDomain::Id))
                    .col(integer_uniq(PilotDomain::CardId))
                    .col(text(PilotDomain::LoadPlayerJson))
                    .col(text(PilotDomain::PilotDataGroupJson))
                    .col(timestamp(PilotDomain::CreatedAt))
                    .col(timestamp(PilotDomain::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PILOT_DOMAIN_CARD_ID)
                    .from_tbl(PilotDomain::Table)
                    .from_col(PilotDomain::CardId)
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
                    .name(FK_PILOT_DOMAIN_CARD_ID)
                    .table(PilotDomain::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PilotDomain::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PilotDomain {
    Table,
    Id,
    CardId,
    LoadPlayerJson,
    PilotDataGroupJson,
    CreatedAt,
    UpdatedAt,
}
