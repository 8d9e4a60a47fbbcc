use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "card_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub access_code: String,
    pub chip_id: String,
    #[sea_orm(unique)]
    pub session_id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::pilot_domain::Entity")]
    PilotDomain,
    #[sea_orm(has_one = "super::user_domain::Entity")]
    UserDomain,
    #[sea_orm(has_many = "super::online_pair::Entity")]
    OnlinePair,
    #[sea_orm(has_many = "super::offline_pvp_battle_result::Entity")]
    OfflinePvpBattleResult,
}

impl Related<super::pilot_domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PilotDomain.def()
    }
}

impl Related<super::user_domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDomain.def()
    }
}

impl Related<super::online_pair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnlinePair.def()
    }
}

impl Related<super::offline_pvp_battle_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfflinePvpBattleResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
