use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::{
    user::{create_user, delete_user, list_users},
    util::Path,
};

use super::*;

/// Expect a created user to be listed with its assigned ID.
#[tokio::test]
async fn create_then_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_user(State(test.to_app_state()), json_bytes(factory::user_body("luke")))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = list_users(State(test.to_app_state())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["response"][0]["id"], 1);
    assert_eq!(body["response"][0]["user_name"], "luke");

    Ok(())
}

/// Expect 404 when deleting a user that does not exist.
#[tokio::test]
async fn delete_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = delete_user(State(test.to_app_state()), Path(3))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
