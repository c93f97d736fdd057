//! Tests for the planet endpoints, including the create/get/duplicate scenario.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::{
    planet::{create_planet, delete_planet, get_planet, list_planets, update_planet},
    util::Path,
};
use serde_json::json;

use super::*;

/// Expect a created planet to be returned by ID with identical fields, and a second create with
/// the same name to be rejected.
///
/// Expected: 200, then 200 with the same fields, then 400
#[tokio::test]
async fn create_get_and_reject_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let body = json_bytes(factory::planet_body("Tatooine"));

    let resp = create_planet(State(test.to_app_state()), body.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await;
    assert_eq!(created["msg"], "Ok");
    let id = created["response"]["id"].as_i64().unwrap() as i32;

    let resp = get_planet(State(test.to_app_state()), Path(id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched["response"], created["response"]);
    assert_eq!(fetched["response"]["climate"], "arid");
    assert_eq!(fetched["response"]["diameter"], 10465);

    let resp = create_planet(State(test.to_app_state()), body)
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 with no body for an empty table.
#[tokio::test]
async fn list_empty_is_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = list_planets(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    Ok(())
}

/// Expect the envelope to carry every planet in ID order.
#[tokio::test]
async fn list_found_in_id_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .build()
        .await?;

    let resp = list_planets(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body["response"]
        .as_array()
        .unwrap()
        .iter()
        .map(|planet| planet["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Tatooine", "Alderaan"]);

    Ok(())
}

/// Expect 400 naming the problem for an empty body and for a mistyped field.
#[tokio::test]
async fn create_rejects_bad_bodies() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_planet(State(test.to_app_state()), Bytes::new())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["msg"], "The request body is null");

    let mut planet = factory::planet_body("Hoth");
    planet.insert("diameter".to_string(), json!("7200"));
    let resp = create_planet(State(test.to_app_state()), json_bytes(planet))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a partial update to return the whole updated planet.
#[tokio::test]
async fn update_returns_updated_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = update_planet(
        State(test.to_app_state()),
        Path(1),
        json_bytes(json!({ "population": 250000 })),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["response"]["population"], 250000);
    assert_eq!(body["response"]["name"], "Tatooine");

    Ok(())
}

/// Expect 404 for updating an unknown planet even with an empty body.
#[tokio::test]
async fn update_unknown_planet_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = update_planet(State(test.to_app_state()), Path(8), Bytes::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await["msg"],
        "Not found. Planet with id 8 doesn't exist"
    );

    Ok(())
}

/// Expect delete to answer with only a message, then 404 for the deleted planet.
#[tokio::test]
async fn delete_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Alderaan")
        .build()
        .await?;

    let resp = delete_planet(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "msg": "Ok" }));

    let resp = get_planet(State(test.to_app_state()), Path(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
