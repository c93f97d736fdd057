use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::{
    util::Path,
    vehicle::{create_vehicle, update_vehicle},
};
use sea_orm::EntityTrait;
use serde_json::json;

use super::*;

/// Expect a missing field to be reported by name.
///
/// Expected: 400 naming `cargo_capacity`
#[tokio::test]
async fn create_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let mut vehicle = factory::vehicle_body("Sand Crawler");
    vehicle.remove("cargo_capacity");

    let resp = create_vehicle(State(test.to_app_state()), json_bytes(vehicle))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["msg"],
        "Field 'cargo_capacity' not found"
    );

    Ok(())
}

/// Expect a JSON array body to be rejected before validation.
#[tokio::test]
async fn create_rejects_array_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_vehicle(State(test.to_app_state()), json_bytes(json!([1, 2, 3])))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["msg"],
        "The request body must be a JSON object"
    );

    Ok(())
}

/// Expect renaming onto another vehicle's name to fail and leave the row untouched.
#[tokio::test]
async fn update_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle("Sand Crawler")
        .with_vehicle("T-16 skyhopper")
        .build()
        .await?;

    let resp = update_vehicle(
        State(test.to_app_state()),
        Path(2),
        json_bytes(json!({ "crew": 1, "name": "Sand Crawler" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let stored = entity::prelude::Vehicle::find_by_id(2)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "T-16 skyhopper");
    assert_eq!(stored.crew, 46);

    Ok(())
}
