//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa's `OpenApiRouter` so its annotations are collected
//! into one OpenAPI document, served at `/api/docs/openapi.json` with a Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET|POST /people`, `GET|PUT|DELETE /people/{id}` (likewise `/vehicles`, `/planets`,
///   `/users`)
/// - `POST|DELETE /favorite/{kind}/{target_id}/{user_id}` - Add or remove a favorite
/// - `GET /users/favorites/{user_id}` - List a user's favorites
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron catalog API"), tags(
        (name = controller::person::PEOPLE_TAG, description = "People catalog"),
        (name = controller::vehicle::VEHICLES_TAG, description = "Vehicle catalog"),
        (name = controller::planet::PLANETS_TAG, description = "Planet catalog"),
        (name = controller::user::USERS_TAG, description = "Users"),
        (name = controller::favorite::FAVORITE_TAG, description = "Per-user favorites"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::person::list_people,
            controller::person::create_person
        ))
        .routes(routes!(
            controller::person::get_person,
            controller::person::update_person,
            controller::person::delete_person
        ))
        .routes(routes!(
            controller::vehicle::list_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(
            controller::planet::list_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .routes(routes!(controller::favorite::list_favorites))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
