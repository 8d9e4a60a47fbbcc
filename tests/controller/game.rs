//! Tests for the game request endpoint.

use axum::body::to_bytes;
use exvs_card::{
    model::game::{ErrorCode, GameRequest, GameResponse, RequestType, SaveVscResult},
    server::controller::game::handle_game_request,
};

use super::*;

fn vsc_request(session_id: &str) -> GameRequest {
    GameRequest {
        request_type: RequestType::SaveVscResult,
        request_id: 12,
        save_vsm_result: None,
        save_vsc_result: Some(SaveVscResult {
            session_id: session_id.to_string(),
            pilot_id: 1,
            ..Default::default()
        }),
    }
}

async fn response_envelope(resp: axum::response::Response) -> GameResponse {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Expect 200 OK with a Success envelope for a known session
#[tokio::test]
async fn known_session_is_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    test.card().insert_card("0001", "chip-1", "session-1").await?;

    let result =
        handle_game_request(State(test.into_app_state()), Json(vsc_request("session-1"))).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope = response_envelope(resp).await;
    assert_eq!(envelope.error, ErrorCode::Success);
    assert_eq!(envelope.request_id, 12);

    Ok(())
}

/// Expect 200 OK with an ErrServer envelope for an unknown session
#[tokio::test]
async fn unknown_session_is_err_server_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;

    let result =
        handle_game_request(State(test.into_app_state()), Json(vsc_request("missing"))).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope = response_envelope(resp).await;
    assert_eq!(envelope.error, ErrorCode::ErrServer);
    assert_eq!(envelope.response_type, RequestType::SaveVscResult);

    Ok(())
}

/// Expect 500 Internal Server Error when the database cannot be queried
#[tokio::test]
async fn database_error_is_internal_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result =
        handle_game_request(State(test.into_app_state()), Json(vsc_request("session-1"))).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
