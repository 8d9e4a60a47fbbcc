//! Fetch helpers for the admin pages.

#[cfg(feature = "web")]
use crate::model::{
    api::BasicResponse,
    card::UpsertTeamsRequest,
    catalog::{GeneralPreview, MobileSuitDto, TeamPartCategory},
};

/// Retrieve all mobile suits from the catalog API
#[cfg(feature = "web")]
pub async fn get_mobile_suits() -> Result<Vec<MobileSuitDto>, String> {
    get_json("/api/catalog/mobile-suits").await
}

/// Retrieve the team cosmetics of a category from the catalog API
#[cfg(feature = "web")]
pub async fn get_team_parts(category: TeamPartCategory) -> Result<Vec<GeneralPreview>, String> {
    get_json(&format!("/api/catalog/team/{}", category.slug())).await
}

/// Send a team upsert for a card
#[cfg(feature = "web")]
pub async fn upsert_teams(request: &UpsertTeamsRequest) -> Result<BasicResponse, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(request)
        .map_err(|e| format!("Failed to serialize team request: {}", e))?;

    let response = Request::post("/api/card/teams")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_response(response).await
}

#[cfg(feature = "web")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_response(response).await
}

#[cfg(feature = "web")]
async fn read_response<T: serde::de::DeserializeOwned>(
    response: reqwasm::http::Response,
) -> Result<T, String> {
    use crate::model::api::ErrorDto;

    if response.status() == 200 {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        ))
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        ))
    }
}
