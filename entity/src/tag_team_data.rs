use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tag_team_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub card_id: i32,
    pub teammate_card_id: i32,
    pub team_name: String,
    pub background_parts_id: i64,
    pub emblem_id: i64,
    pub effect_id: i64,
    pub name_color_id: i64,
    pub bgm_id: i64,
    pub skill_point: i64,
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
    Owner,
    #[sea_orm(
        belongs_to = "super::card_profile::Entity",
        from = "Column::TeammateCardId",
        to = "super::card_profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Teammate,
}

impl ActiveModelBehavior for ActiveModel {}
