use super::*;

use crate::server::model::document::MobileUserGroup;

fn request(setting: MessageSettingDto) -> UpsertCustomMessagesRequest {
    UpsertCustomMessagesRequest {
        access_code: "0001".to_string(),
        chip_id: "chip-1".to_string(),
        message_setting: setting,
    }
}

fn up_only(message_id: u32) -> CustomMessageGroupDto {
    CustomMessageGroupDto {
        up_message: Some(CustomMessageDto {
            message_id,
            phrase_id: 5,
            stamp_id: 6,
            message_position: 0,
        }),
        ..Default::default()
    }
}

/// Expect supplied contexts replaced and null contexts untouched
#[tokio::test]
async fn replaces_supplied_contexts() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    let card = test.card().insert_card("0001", "chip-1", "session-1").await?;

    let service = MessageService::new(&test.db);
    service
        .upsert_custom_messages(&request(MessageSettingDto {
            start_group: Some(up_only(21)),
            in_battle_group: None,
            result_group: None,
        }))
        .await
        .unwrap();

    let user_domain = test.card().get_user_domain(card.id).await?;
    let mobile_user: MobileUserGroup =
        serde_json::from_str(&user_domain.mobile_user_group_json)?;
    assert_eq!(mobile_user.opening_messages.len(), 1);
    assert_eq!(mobile_user.opening_messages[0].command, 1);
    assert_eq!(mobile_user.opening_messages[0].message_id, 21);
    assert!(mobile_user.playing_messages.is_empty());
    assert_eq!(mobile_user.result_messages[0].message_id, 9);
    assert_eq!(mobile_user.extra["PlayerName"], json!(factory::DEFAULT_PILOT_NAME));

    Ok(())
}

/// Expect a group with no directions to keep the stored messages
#[tokio::test]
async fn empty_group_keeps_messages() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    let card = test.card().insert_card("0001", "chip-1", "session-1").await?;

    let service = MessageService::new(&test.db);
    service
        .upsert_custom_messages(&request(MessageSettingDto {
            result_group: Some(CustomMessageGroupDto::default()),
            ..Default::default()
        }))
        .await
        .unwrap();

    let user_domain = test.card().get_user_domain(card.id).await?;
    let mobile_user: MobileUserGroup =
        serde_json::from_str(&user_domain.mobile_user_group_json)?;
    assert_eq!(mobile_user.result_messages.len(), 1);
    assert_eq!(mobile_user.result_messages[0].message_id, 9);

    Ok(())
}

/// Expect ProfileError::NotFound for an unknown card
#[tokio::test]
async fn fails_for_unknown_card() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;

    let service = MessageService::new(&test.db);
    let result = service
        .upsert_custom_messages(&request(MessageSettingDto::default()))
        .await;

    assert!(matches!(
        result,
        Err(Error::ProfileError(ProfileError::NotFound(_)))
    ));

    Ok(())
}

/// Expect ProfileError::InvalidCardData when the stored document is malformed
#[tokio::test]
async fn fails_for_malformed_document() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    let card = test.card().insert_bare_card("0001", "chip-1", "session-1").await?;
    test.card()
        .insert_user_domain(card.id, "{}", "{ not json")
        .await?;

    let service = MessageService::new(&test.db);
    let result = service
        .upsert_custom_messages(&request(MessageSettingDto {
            start_group: Some(up_only(1)),
            ..Default::default()
        }))
        .await;

    assert!(matches!(
        result,
        Err(Error::ProfileError(ProfileError::InvalidCardData { .. }))
    ));

    Ok(())
}
