use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameRequest, GameResponse},
    },
    server::{error::Error, model::app::AppState, service::game::dispatch::GameDispatcher},
};

pub static GAME_TAG: &str = "game";

/// Handle a request envelope sent by a game cabinet
///
/// Card-level failures are reported inside the envelope with the `ErrServer` code,
/// the HTTP status only signals failures of the server itself.
///
/// # Responses
/// - 200 (Success): Response envelope echoing the request type and id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/game",
    tag = GAME_TAG,
    request_body = GameRequest,
    responses(
        (status = 200, description = "Response envelope", body = GameResponse),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn handle_game_request(
    State(state): State<AppState>,
    Json(request): Json<GameRequest>,
) -> Result<impl IntoResponse, Error> {
    let dispatcher = GameDispatcher::new(&state.db);

    let response = dispatcher.dispatch(&request).await?;

    Ok(Json(response))
}
