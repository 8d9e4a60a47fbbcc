pub use sea_orm_migration::prelude::*;

mod m20251101_000001_card_profile;
mod m20251101_000002_pilot_domain;
mod m20251101_000003_user_domain;
mod m20251101_000004_tag_team_data;
mod m20251101_000005_online_pair;
mod m20251101_000006_offline_pvp_battle_result;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_card_profile::Migration),
            Box::new(m20251101_000002_pilot_domain::Migration),
            Box::new(m20251101_000003_user_domain::Migration),
            Box::new(m20251101_000004_tag_team_data::Migration),
            Box::new(m20251101_000005_online_pair::Migration),
            Box::new(m20251101_000006_offline_pvp_battle_result::Migration),
        ]
    }
}
