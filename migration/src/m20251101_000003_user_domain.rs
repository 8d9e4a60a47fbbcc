use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_card_profile::CardProfile;

static FK_USER_DOMAIN_CARD_ID: &str = "fk-user_domain-card_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDomain::Table)
                    .if_not_exists()
                    .col(pk_auto(UserDomain::Id))
                    .col(integer_uniq(UserDomain::CardId))
                    .col(text(UserDomain::UserJson))
                    .col(text(UserDomain::MobileUserGroupJson))
                    .col(timestamp(UserDomain::CreatedAt))
                    .col(timestamp(UserDomain::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_DOMAIN_CARD_ID)
                    .from_tbl(UserDomain::Table)
                    .from_col(UserDomain::CardId)
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
                    .name(FK_USER_DOMAIN_CARD_ID)
                    .table(UserDomain::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserDomain::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserDomain {
    Table,
    Id,
    CardId,
    UserJson,
    MobileUserGroupJson,
    CreatedAt,
    UpdatedAt,
}
