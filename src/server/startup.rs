use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, service::catalog::Catalog};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Load the static reference catalog served to the admin UI
pub fn load_catalog(config: &Config) -> Result<Arc<Catalog>, Error> {
    let catalog = Catalog::load(&config.catalog_path)?;

    tracing::info!(
        mobile_suits = catalog.mobile_suits.len(),
        navigators = catalog.navigators.len(),
        "Loaded reference catalog from {:?}",
        config.catalog_path
    );

    Ok(Arc::new(catalog))
}
