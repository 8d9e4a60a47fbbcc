use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{GeneralPreview, IdValuePair, MobileSuitDto, NavigatorDto, TeamPartCategory},
    },
    server::model::app::AppState,
};

pub static CATALOG_TAG: &str = "catalog";

/// List all mobile suits sorted by id
#[utoipa::path(
    get,
    path = "/api/catalog/mobile-suits",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Mobile suits sorted by id", body = Vec<MobileSuitDto>)
    ),
)]
pub async fn get_mobile_suits(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.mobile_suits.sorted().to_vec())
}

/// Get a single mobile suit
///
/// # Responses
/// - 200 (Success): The mobile suit
/// - 404 (Not Found): No mobile suit with the provided id
#[utoipa::path(
    get,
    path = "/api/catalog/mobile-suits/{id}",
    tag = CATALOG_TAG,
    params(("id" = u32, Path, description = "Mobile suit id")),
    responses(
        (status = 200, description = "The mobile suit", body = MobileSuitDto),
        (status = 404, description = "Mobile suit not found", body = ErrorDto)
    ),
)]
pub async fn get_mobile_suit(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    match state.catalog.mobile_suits.get(id) {
        Some(mobile_suit) => (StatusCode::OK, Json(mobile_suit.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Mobile suit not found".to_string(),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/catalog/navigators",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Navigators sorted by id", body = Vec<NavigatorDto>)
    ),
)]
pub async fn get_navigators(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.navigators.sorted().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/catalog/bgm",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Background music sorted by id", body = Vec<IdValuePair>)
    ),
)]
pub async fn get_bgm(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.bgm.sorted().to_vec())
}

/// List the sentence templates used by custom messages
#[utoipa::path(
    get,
    path = "/api/catalog/comments/sentences",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Message sentences sorted by id", body = Vec<IdValuePair>)
    ),
)]
pub async fn get_comment_sentences(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.comment_sentences.sorted().to_vec())
}

/// List the phrases that can fill a sentence template
#[utoipa::path(
    get,
    path = "/api/catalog/comments/phrases",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Message phrases sorted by id", body = Vec<IdValuePair>)
    ),
)]
pub async fn get_comment_phrases(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.comment_phrases.sorted().to_vec())
}

/// List the team cosmetics of a category, hiding entries not present in game
#[utoipa::path(
    get,
    path = "/api/catalog/team/{category}",
    tag = CATALOG_TAG,
    params(("category" = TeamPartCategory, Path, description = "Team cosmetic category")),
    responses(
        (status = 200, description = "Team cosmetics sorted by id", body = Vec<GeneralPreview>)
    ),
)]
pub async fn get_team_parts(
    State(state): State<AppState>,
    Path(category): Path<TeamPartCategory>,
) -> impl IntoResponse {
    Json(state.catalog.team_part(category).to_vec())
}
