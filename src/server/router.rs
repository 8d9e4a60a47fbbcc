//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/card/teams` - Upsert a card's tag team display settings
/// - `POST /api/card/messages` - Upsert a card's directional custom messages
/// - `POST /api/game` - Handle a cabinet request envelope
/// - `GET /api/catalog/...` - Read-only reference catalog tables
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, catalog };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "EXVS Card", description = "Card save and progression API"), tags(
        (name = controller::card::CARD_TAG, description = "Card customize API routes"),
        (name = controller::game::GAME_TAG, description = "Game cabinet API routes"),
        (name = controller::catalog::CATALOG_TAG, description = "Reference catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::card::upsert_teams))
        .routes(routes!(controller::card::upsert_custom_messages))
        .routes(routes!(controller::game::handle_game_request))
        .routes(routes!(controller::catalog::get_mobile_suits))
        .routes(routes!(controller::catalog::get_mobile_suit))
        .routes(routes!(controller::catalog::get_navigators))
        .routes(routes!(controller::catalog::get_bgm))
        .routes(routes!(controller::catalog::get_comment_sentences))
        .routes(routes!(controller::catalog::get_comment_phrases))
        .routes(routes!(controller::catalog::get_team_parts))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
