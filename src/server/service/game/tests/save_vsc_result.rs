use super::*;

fn request(session_id: &str) -> SaveVscResult {
    SaveVscResult {
        session_id: session_id.to_string(),
        pilot_id: 1,
        result: VscPlayResultGroup {
            echelon_id: 6,
            echelon_exp: 25,
            s_echelon_flag: true,
            gp: 150,
            guest_nav_id: factory::DEFAULT_NAVIGATOR_ID,
            battle_nav_id: 2,
            mst_mobile_suit_id: factory::DEFAULT_MOBILE_SUIT_ID,
            partner: Some(BattlePlayerGroup {
                cpu_flag: 1,
                mst_mobile_suit_id: 2001,
                mobile_set_flag: true,
                ..Default::default()
            }),
            scene_score: 700,
            course_id: 10,
            course_clear_flag: Some(true),
            course_score: Some(700),
            released_ribbon_ids: Some(vec![1, 2]),
            released_course_ids: None,
            rank_match_info: Some(RankMatchInfo {
                rank_id_solo: 3,
                rank_id_team: 4,
            }),
            ..Default::default()
        },
    }
}

/// Expect every document rule applied and persisted
#[tokio::test]
async fn merges_and_persists_documents() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    let card = test.card().insert_card("0001", "chip-1", "session-1").await?;

    let service = VscResultService::new(&test.db);
    service.save(&request("session-1")).await.unwrap();

    let (load_player, pilot_data, user) = stored_documents(&mut test, card.id).await?;
    assert_eq!(load_player.echelon_id, 6);
    assert_eq!(load_player.echelon_exp, factory::DEFAULT_ECHELON_EXP + 25);
    assert!(load_player.s_echelon_flag);
    assert_eq!(load_player.rank_id_solo, 3);
    assert_eq!(load_player.rank_id_team, 4);
    assert_eq!(user.gp, factory::DEFAULT_GP + 150);
    assert_eq!(user.guest_navs[0].guest_nav_familiarity, 11);
    assert_eq!(user.guest_navs[1].guest_nav_familiarity, 1);
    assert_eq!(user.favorite_mobile_suits[0].ms_used_num, 4);

    assert_eq!(pilot_data.ms_skills[0].ms_used_num, 4);
    assert_eq!(pilot_data.ms_skills[1].mst_mobile_suit_id, 2001);
    assert_eq!(pilot_data.ms_skills[1].triad_buddy_point, 1);
    assert_eq!(pilot_data.total_triad_scene_play_num, 1);
    assert_eq!(pilot_data.total_triad_score, 700);
    assert_eq!(pilot_data.cpu_scenes[0].course_id, 10);
    assert_eq!(pilot_data.cpu_scenes[0].total_clear_num, 1);
    assert_eq!(pilot_data.cpu_ribbons, Some(vec![1, 2]));
    assert!(pilot_data.pilot_rank_match.is_some());

    Ok(())
}

/// Expect unmodelled document fields to survive the merge
#[tokio::test]
async fn preserves_unknown_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    let card = test.card().insert_card("0001", "chip-1", "session-1").await?;

    let service = VscResultService::new(&test.db);
    service.save(&request("session-1")).await.unwrap();

    let pilot_domain = test.card().get_pilot_domain(card.id).await?;
    let user_domain = test.card().get_user_domain(card.id).await?;
    let load_player: Value = serde_json::from_str(&pilot_domain.load_player_json)?;
    let pilot_data: Value = serde_json::from_str(&pilot_domain.pilot_data_group_json)?;
    let mobile_user: Value = serde_json::from_str(&user_domain.mobile_user_group_json)?;
    assert_eq!(load_player["PilotName"], factory::DEFAULT_PILOT_NAME);
    assert_eq!(pilot_data["TitleCustomizeData"]["TitleId"], 7);
    assert_eq!(mobile_user["PlayerName"], factory::DEFAULT_PILOT_NAME);

    Ok(())
}

/// Expect ProfileError::NotFound for an unknown session
#[tokio::test]
async fn fails_for_unknown_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;

    let service = VscResultService::new(&test.db);
    let result = service.save(&request("missing")).await;

    assert!(matches!(
        result,
        Err(Error::ProfileError(ProfileError::NotFound(_)))
    ));

    Ok(())
}

/// Expect a missing domain row to be reported as missing card data
#[tokio::test]
async fn fails_for_missing_domain() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    test.card().insert_bare_card("0001", "chip-1", "session-1").await?;

    let service = VscResultService::new(&test.db);
    let result = service.save(&request("session-1")).await;

    assert!(matches!(
        result,
        Err(Error::ProfileError(ProfileError::MissingDocument { .. }))
    ));

    Ok(())
}

/// Expect no document to change when one of them does not decode
#[tokio::test]
async fn leaves_documents_untouched_on_invalid_data() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_card_tables().build().await?;
    let card = test.card().insert_bare_card("0001", "chip-1", "session-1").await?;
    let load_player = factory::load_player().to_string();
    test.card()
        .insert_pilot_domain(card.id, &load_player, "not json")
        .await?;
    test.card()
        .insert_user_domain(
            card.id,
            &factory::user().to_string(),
            &factory::mobile_user_group().to_string(),
        )
        .await?;

    let service = VscResultService::new(&test.db);
    let result = service.save(&request("session-1")).await;

    assert!(matches!(
        result,
        Err(Error::ProfileError(ProfileError::InvalidCardData { .. }))
    ));
    let pilot_domain = test.card().get_pilot_domain(card.id).await?;
    assert_eq!(pilot_domain.load_player_json, load_player);

    Ok(())
}
