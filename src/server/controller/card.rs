use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{BasicResponse, ErrorDto},
        card::{UpsertCustomMessagesRequest, UpsertTeamsRequest},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::card::{message::MessageService, team::TeamService},
    },
};

pub static CARD_TAG: &str = "card";

/// Overwrite the tag team display settings of a card
///
/// # Responses
/// - 200 (Success): Teams were updated, or the team list was empty
/// - 404 (Not Found): No card matches the access code and chip id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/card/teams",
    tag = CARD_TAG,
    request_body = UpsertTeamsRequest,
    responses(
        (status = 200, description = "Teams upserted", body = BasicResponse),
        (status = 404, description = "Card profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_teams(
    State(state): State<AppState>,
    Json(request): Json<UpsertTeamsRequest>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(&state.db);

    team_service.upsert_teams(&request).await?;

    Ok((StatusCode::OK, Json(BasicResponse { success: true })))
}

/// Replace the directional custom messages of a card
///
/// # Responses
/// - 200 (Success): Messages were stored
/// - 404 (Not Found): No card matches the access code and chip id
/// - 500 (Internal Server Error): The stored document is invalid or a database error occurred
#[utoipa::path(
    post,
    path = "/api/card/messages",
    tag = CARD_TAG,
    request_body = UpsertCustomMessagesRequest,
    responses(
        (status = 200, description = "Custom messages upserted", body = BasicResponse),
        (status = 404, description = "Card profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_custom_messages(
    State(state): State<AppState>,
    Json(request): Json<UpsertCustomMessagesRequest>,
) -> Result<impl IntoResponse, Error> {
    let message_service = MessageService::new(&state.db);

    message_service.upsert_custom_messages(&request).await?;

    Ok((StatusCode::OK, Json(BasicResponse { success: true })))
}
