//! Tests for the favorite endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::favorite::ResourceKind,
    server::controller::{
        favorite::{add_favorite, list_favorites, remove_favorite},
        util::Path,
    },
};
use serde_json::json;

use super::*;

/// Expect a stored favorite to answer with only a message and to be listed afterwards.
#[tokio::test]
async fn add_then_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke")
        .with_vehicle("Sand Crawler")
        .build()
        .await?;

    let resp = add_favorite(
        State(test.to_app_state()),
        Path((ResourceKind::Vehicles, 1, 1)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "msg": "Ok" }));

    let resp = list_favorites(State(test.to_app_state()), Path(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["response"],
        json!([{ "user_id": 1, "kind": "vehicles", "target_id": 1 }])
    );

    Ok(())
}

/// Expect a repeated add to be a client error.
///
/// Expected: 400
#[tokio::test]
async fn add_twice_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke")
        .with_person("Yoda")
        .build()
        .await?;
    test.user().insert_favorite_person(1, 1).await?;

    let resp = add_favorite(
        State(test.to_app_state()),
        Path((ResourceKind::People, 1, 1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect every missing endpoint or link to answer 404.
#[tokio::test]
async fn missing_user_target_or_link_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke")
        .with_planet("Hoth")
        .build()
        .await?;

    let unknown_user = add_favorite(
        State(test.to_app_state()),
        Path((ResourceKind::Planets, 1, 5)),
    )
    .await
    .into_response();
    assert_eq!(unknown_user.status(), StatusCode::NOT_FOUND);

    let unknown_target = add_favorite(
        State(test.to_app_state()),
        Path((ResourceKind::Planets, 5, 1)),
    )
    .await
    .into_response();
    assert_eq!(unknown_target.status(), StatusCode::NOT_FOUND);

    let unknown_link = remove_favorite(
        State(test.to_app_state()),
        Path((ResourceKind::Planets, 1, 1)),
    )
    .await
    .into_response();
    assert_eq!(unknown_link.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 for a user without favorites.
#[tokio::test]
async fn list_empty_is_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("leia")
        .build()
        .await?;

    let resp = list_favorites(State(test.to_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
