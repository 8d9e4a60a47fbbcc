use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "offline_pvp_battle_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub card_id: i32,
    pub mode: String,
    pub offline_battle_mode: String,
    pub win_flag: bool,
    pub score: i64,
    pub used_ms_id: i64,
    pub used_burst_type: i64,
    pub elapsed_second: i64,
    pub past_echelon_id: i64,
    pub echelon_exp_change: i64,
    pub echelon_id_after_battle: i64,
    pub total_echelon_exp: i64,
    pub s_echelon_flag: bool,
    pub s_echelon_progress: i64,
    pub partner_indicator: String,
    pub partner_pilot_id: Option<i64>,
    pub partner_ms_id: Option<i64>,
    pub partner_echelon_id: Option<i64>,
    pub partner_burst_type: Option<i64>,
    pub foe1_indicator: String,
    pub foe1_pilot_id: Option<i64>,
    pub foe1_ms_id: Option<i64>,
    pub foe1_echelon_id: Option<i64>,
    pub foe1_burst_type: Option<i64>,
    pub foe2_indicator: String,
    pub foe2_pilot_id: Option<i64>,
    pub foe2_ms_id: Option<i64>,
    pub foe2_echelon_id: Option<i64>,
    pub foe2_burst_type: Option<i64>,
    #[sea_orm(column_type = "Text")]
    pub full_battle_result_json: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card_profile::Entity",
        from = "Column::CardId",
        to = "super::card_profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CardProfile,
}

impl Related<super::card_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
