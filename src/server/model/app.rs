use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
}

/// State with an empty catalog, used where only the profile store matters
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            catalog: Arc::new(Catalog::default()),
        }
    }
}
