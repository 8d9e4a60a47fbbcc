use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_card_profile::CardProfile;

static IDX_OFFLINE_PVP_BATTLE_RESULT_CARD_ID: &str = "idx-offline_pvp_battle_result-card_id";
static FK_OFFLINE_PVP_BATTLE_RESULT_CARD_ID: &str = "fk-offline_pvp_battle_result-card_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OfflinePvpBattleResult::Table)
                    .if_not_exists()
                    .col(pk_auto(OfflinePvpBattleResult::Id))
                    .col(integer(OfflinePvpBattleResult::CardId))
                    .col(string(OfflinePvpBattleResult::Mode))
                    .col(string(OfflinePvpBattleResult::OfflineBattleMode))
                    .col(boolean(OfflinePvpBattleResult::WinFlag))
                    .col(big_integer(OfflinePvpBattleResult::Score))
                    .col(big_integer(OfflinePvpBattleResult::UsedMsId))
                    .col(big_integer(OfflinePvpBattleResult::UsedBurstType))
                    .col(big_integer(OfflinePvpBattleResult::ElapsedSecond))
                    .col(big_integer(OfflinePvpBattleResult::PastEchelonId))
                    .col(big_integer(OfflinePvpBattleResult::EchelonExpChange))
                    .col(big_integer(OfflinePvpBattleResult::EchelonIdAfterBattle))
                    .col(big_integer(OfflinePvpBattleResult::TotalEchelonExp))
                    .col(boolean(OfflinePvpBattleResult::SEchelonFlag))
                    .col(big_integer(OfflinePvpBattleResult::SEchelonProgress))
                    .col(string(OfflinePvpBattleResult::PartnerIndicator))
                    .col(big_integer_null(OfflinePvpBattleResult::PartnerPilotId))
                    .col(big_integer_null(OfflinePvpBattleResult::PartnerMsId))
                    .col(big_integer_null(OfflinePvpBattleResult::PartnerEchelonId))
                    .col(big_integer_null(OfflinePvpBattleResult::PartnerBurstType))
                    .col(string(OfflinePvpBattleResult::Foe1Indicator))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe1PilotId))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe1MsId))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe1EchelonId))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe1BurstType))
                    .col(string(OfflinePvpBattleResult::Foe2Indicator))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe2PilotId))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe2MsId))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe2EchelonId))
                    .col(big_integer_null(OfflinePvpBattleResult::Foe2BurstType))
                    .col(text(OfflinePvpBattleResult::FullBattleResultJson))
                    .col(timestamp(OfflinePvpBattleResult::CreatedAt))
                    .col(timestamp(OfflinePvpBattleResult::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OFFLINE_PVP_BATTLE_RESULT_CARD_ID)
                    .table(OfflinePvpBattleResult::Table)
                    .col(OfflinePvpBattleResult::CardId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OFFLINE_PVP_BATTLE_RESULT_CARD_ID)
                    .from_tbl(OfflinePvpBattleResult::Table)
                    .from_col(OfflinePvpBattleResult::CardId)
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
                    .name(FK_OFFLINE_PVP_BATTLE_RESULT_CARD_ID)
                    .table(OfflinePvpBattleResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OFFLINE_PVP_BATTLE_RESULT_CARD_ID)
                    .table(OfflinePvpBattleResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(OfflinePvpBattleResult::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OfflinePvpBattleResult {
    Table,
    Id,
    CardId,
    Mode,
    OfflineBattleMode,
    WinFlag,
    Score,
    UsedMsId,
    UsedBurstType,
    ElapsedSecond,
    PastEchelonId,
    EchelonExpChange,
    EchelonIdAfterBattle,
    TotalEchelonExp,
    SEchelonFlag,
    SEchelonProgress,
    PartnerIndicator,
    PartnerPilotId,
    PartnerMsId,
    PartnerEchelonId,
    PartnerBurstType,
    Foe1Indicator,
    Foe1PilotId,
    Foe1MsId,
    Foe1EchelonId,
    Foe1BurstType,
    Foe2Indicator,
    Foe2PilotId,
    Foe2MsId,
    Foe2EchelonId,
    Foe2BurstType,
    FullBattleResultJson,
    CreatedAt,
    UpdatedAt,
}
