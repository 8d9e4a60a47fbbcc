#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use exvs_card::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = match startup::connect_to_database(&config).await {
            Ok(db) => db,
            Err(e) => {
                tracing::error!("Failed to connect to database: {}", e);
                std::process::exit(1);
            }
        };
        let catalog = match startup::load_catalog(&config) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("Failed to load reference catalog: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(AppState { db, catalog });
        router = router.merge(server_routes);

        Ok(router)
    })
}
