//! Tests for the reference catalog endpoints.

use std::{collections::HashMap, sync::Arc};

use axum::{body::to_bytes, extract::Path};
use exvs_card::{
    model::catalog::{GeneralPreview, IdValuePair, MobileSuitDto, TeamPartCategory},
    server::{
        controller::catalog::{get_bgm, get_mobile_suit, get_mobile_suits, get_team_parts},
        service::catalog::{Catalog, CatalogTable},
    },
};

use super::*;

fn suit(id: u32, name_en: &str) -> MobileSuitDto {
    MobileSuitDto {
        id,
        name_en: name_en.to_string(),
        ..Default::default()
    }
}

fn preview(id: u32, existence: Option<&str>) -> GeneralPreview {
    GeneralPreview {
        id,
        value: format!("Part {}", id),
        existence: existence.map(str::to_string),
    }
}

async fn state_with_catalog(test: &TestContext) -> AppState {
    let mut team_parts = HashMap::new();
    team_parts.insert(
        TeamPartCategory::Emblems,
        CatalogTable::previews(vec![
            preview(3, None),
            preview(1, Some("NotExist")),
            preview(2, None),
        ]),
    );

    AppState {
        db: test.db.clone(),
        catalog: Arc::new(Catalog {
            mobile_suits: CatalogTable::new(vec![suit(1002, "Zaku II"), suit(1001, "Gundam")]),
            bgm: CatalogTable::new(vec![IdValuePair {
                id: 4,
                value: "Track".to_string(),
            }]),
            team_parts,
            ..Default::default()
        }),
    }
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Expect mobile suits sorted by id
#[tokio::test]
async fn lists_mobile_suits_sorted() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = state_with_catalog(&test).await;

    let resp = get_mobile_suits(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let suits: Vec<MobileSuitDto> = body_json(resp).await;
    let ids: Vec<u32> = suits.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1001, 1002]);

    Ok(())
}

/// Expect 200 OK for a known mobile suit id
#[tokio::test]
async fn gets_mobile_suit_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = state_with_catalog(&test).await;

    let resp = get_mobile_suit(State(state), Path(1002)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let suit: MobileSuitDto = body_json(resp).await;
    assert_eq!(suit.name_en, "Zaku II");

    Ok(())
}

/// Expect 404 Not Found for an unknown mobile suit id
#[tokio::test]
async fn unknown_mobile_suit_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = state_with_catalog(&test).await;

    let resp = get_mobile_suit(State(state), Path(9)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an empty list from an empty catalog table
#[tokio::test]
async fn empty_table_is_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_bgm(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let bgm: Vec<IdValuePair> = body_json(resp).await;
    assert!(bgm.is_empty());

    Ok(())
}

/// Expect team parts without entries flagged as not present in game
#[tokio::test]
async fn team_parts_hide_missing_entries() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = state_with_catalog(&test).await;

    let resp = get_team_parts(State(state), Path(TeamPartCategory::Emblems))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let parts: Vec<GeneralPreview> = body_json(resp).await;
    let ids: Vec<u32> = parts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);

    Ok(())
}
