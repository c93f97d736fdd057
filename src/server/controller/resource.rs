//! Request handling shared by every resource route group.
//!
//! The per-kind modules own the documented handlers; these functions do the work for any
//! [`Resource`].

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::{MessageDto, ResponseDto},
    server::{
        controller::util::parse_body, error::Error, model::app::AppState,
        model::resource::Resource, service::resource::ResourceService,
    },
};

pub async fn list<R: Resource>(state: &AppState) -> Result<Response, Error> {
    let rows = ResourceService::<R>::new(&state.db).list().await?;

    Ok(rows.into_response())
}

pub async fn get<R: Resource>(state: &AppState, id: i32) -> Result<Response, Error> {
    let row = ResourceService::<R>::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ResponseDto::ok(row))).into_response())
}

pub async fn create<R: Resource>(state: &AppState, body: &Bytes) -> Result<Response, Error> {
    let body = parse_body(body)?;
    let row = ResourceService::<R>::new(&state.db).create(&body).await?;

    Ok((StatusCode::OK, Json(ResponseDto::ok(row))).into_response())
}

/// Checks the identifier before parsing the body so an unknown row is a 404 whatever was sent.
pub async fn update<R: Resource>(
    state: &AppState,
    id: i32,
    body: &Bytes,
) -> Result<Response, Error> {
    let service = ResourceService::<R>::new(&state.db);
    let row = service.find(id).await?;

    let body = parse_body(body)?;
    let row = service.update_row(row, &body).await?;

    Ok((StatusCode::OK, Json(ResponseDto::ok(row))).into_response())
}

pub async fn delete<R: Resource>(state: &AppState, id: i32) -> Result<Response, Error> {
    ResourceService::<R>::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Ok"))).into_response())
}
