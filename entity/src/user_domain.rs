use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user_domain")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub card_id: i32,
    #[sea_orm(column_type = "Text")]
    pub user_json: String,
    #[sea_orm(column_type = "Text")]
    pub mobile_user_group_json: String,
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
