//! Tests for the card customize endpoints.

use exvs_card::{
    model::card::{
        CustomMessageDto, CustomMessageGroupDto, MessageSettingDto, TeamDto,
        UpsertCustomMessagesRequest, UpsertTeamsRequest,
    },
    server::controller::card::{upsert_custom_messages, upsert_teams},
};

use super::*;

fn teams_request(access_code: &str, teams: Vec<TeamDto>) -> UpsertTeamsRequest {
    UpsertTeamsRequest {
        access_code: access_code.to_string(),
        chip_id: "chip-1".to_string(),
        teams,
    }
}

fn messages_request(access_code: &str) -> UpsertCustomMessagesRequest {
    UpsertCustomMessagesRequest {
        access_code: access_code.to_string(),
        chip_id: "chip-1".to_string(),
        message_setting: MessageSettingDto {
            start_group: Some(CustomMessageGroupDto {
                up_message: Some(CustomMessageDto {
                    message_id: 12,
                    phrase_id: 3,
                    stamp_id: 1,
                    message_position: 0,
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

/// Expect 200 OK when a listed team is updated
#[tokio::test]
async fn upsert_teams_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    let card = test.card().insert_card("0001", "chip-1", "session-1").await?;
    let teammate = test.card().insert_card("0002", "chip-2", "session-2").await?;
    let team = test.card().insert_tag_team(card.id, teammate.id, "OLD").await?;

    let request = teams_request(
        "0001",
        vec![TeamDto {
            id: team.id as u32,
            name: "NEW".to_string(),
            ..Default::default()
        }],
    );
    let result = upsert_teams(State(test.into_app_state()), Json(request)).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = test.card().get_tag_team(team.id).await?;
    assert_eq!(stored.map(|t| t.team_name), Some("NEW".to_string()));

    Ok(())
}

/// Expect 404 Not Found for an unknown access code
#[tokio::test]
async fn upsert_teams_unknown_card() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;

    let result = upsert_teams(
        State(test.into_app_state()),
        Json(teams_request("9999", Vec::new())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when the card tables are missing
#[tokio::test]
async fn upsert_teams_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = upsert_teams(
        State(test.into_app_state()),
        Json(teams_request("0001", Vec::new())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 OK when custom messages are stored
#[tokio::test]
async fn upsert_custom_messages_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    test.card().insert_card("0001", "chip-1", "session-1").await?;

    let result =
        upsert_custom_messages(State(test.into_app_state()), Json(messages_request("0001"))).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for an unknown access code
#[tokio::test]
async fn upsert_custom_messages_unknown_card() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;

    let result =
        upsert_custom_messages(State(test.into_app_state()), Json(messages_request("9999"))).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when the card has no user documents
#[tokio::test]
async fn upsert_custom_messages_missing_documents() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    test.card().insert_bare_card("0001", "chip-1", "session-1").await?;

    let result =
        upsert_custom_messages(State(test.into_app_state()), Json(messages_request("0001"))).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
