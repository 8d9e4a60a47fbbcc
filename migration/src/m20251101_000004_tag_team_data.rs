use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_card_profile::CardProfile;

static IDX_TAG_TEAM_DATA_CARD_ID: &str = "idx-tag_team_data-card_id";
static IDX_TAG_TEAM_DATA_TEAMMATE_CARD_ID: &str = "idx-tag_team_data-teammate_card_id";
static FK_TAG_TEAM_DATA_CARD_ID: &str = "fk-tag_team_data-card_id";
static FK_TAG_TEAM_DATA_TEAMMATE_CARD_ID: &str = "fk-tag_team_data-teammate_card_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagTeamData::Table)
                    .if_not_exists()
                    .col(pk_auto(TagTeamData::Id))
                    .col(integer(TagTeamData::CardId))
                    .col(integer(TagTeamData::TeammateCardId))
                    .col(string(TagTeamData::TeamName))
                    .col(big_integer(TagTeamData::BackgroundPartsId))
                    .col(big_integer(TagTeamData::EmblemId))
                    .col(big_integer(TagTeamData::EffectId))
                    .col(big_integer(TagTeamData::NameColorId))
                    .col(big_integer(TagTeamData::BgmId))
                    .col(big_integer(TagTeamData::SkillPoint))
                    .col(timestamp(TagTeamData::CreatedAt))
                    .col(timestamp(TagTeamData::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAG_TEAM_DATA_CARD_ID)
                    .table(TagTeamData::Table)
                    .col(TagTeamData::CardId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAG_TEAM_DATA_TEAMMATE_CARD_ID)
                    .table(TagTeamData::Table)
                    .col(TagTeamData::TeammateCardId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TAG_TEAM_DATA_CARD_ID)
                    .from_tbl(TagTeamData::Table)
                    .from_col(TagTeamData::CardId)
                    .to_tbl(CardProfile::Table)
                    .to_col(CardProfile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TAG_TEAM_DATA_TEAMMATE_CARD_ID)
                    .from_tbl(TagTeamData::Table)
                    .from_col(TagTeamData::TeammateCardId)
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
                    .name(FK_TAG_TEAM_DATA_TEAMMATE_CARD_ID)
                    .table(TagTeamData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TAG_TEAM_DATA_CARD_ID)
                    .table(TagTeamData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TAG_TEAM_DATA_TEAMMATE_CARD_ID)
                    .table(TagTeamData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TAG_TEAM_DATA_CARD_ID)
                    .table(TagTeamData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TagTeamData::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TagTeamData {
    Table,
    Id,
    CardId,
    TeammateCardId,
    TeamName,
    BackgroundPartsId,
    EmblemId,
    EffectId,
    NameColorId,
    BgmId,
    SkillPoint,
    CreatedAt,
    UpdatedAt,
}
