use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use roster_users::UserDraft;

use crate::app::dto;
use crate::app::errors::{ApiFailure, ApiJson, PathUserId};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(list_users)
                .post(create_user)
                .fallback(super::method_not_allowed),
        )
        .route(
            "/:id",
            get(show_user)
                .put(update_user)
                .delete(delete_user)
                .fallback(super::method_not_allowed),
        )
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<axum::response::Response, ApiFailure> {
    let users = services
        .users()
        .list()?
        .iter()
        .map(dto::user_to_json)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(users)).into_response())
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(draft): ApiJson<UserDraft>,
) -> Result<axum::response::Response, ApiFailure> {
    let user = services.users().create(&draft)?;
    Ok((StatusCode::CREATED, Json(dto::user_to_json(&user))).into_response())
}

pub async fn show_user(
    Extension(services): Extension<Arc<AppServices>>,
    PathUserId(id): PathUserId,
) -> Result<axum::response::Response, ApiFailure> {
    let user = services.users().find(id)?;
    Ok((StatusCode::OK, Json(dto::user_to_json(&user))).into_response())
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    PathUserId(id): PathUserId,
    ApiJson(draft): ApiJson<UserDraft>,
) -> Result<axum::response::Response, ApiFailure> {
    let user = services.users().update(id, &draft)?;
    Ok((StatusCode::OK, Json(dto::user_to_json(&user))).into_response())
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    PathUserId(id): PathUserId,
) -> Result<axum::response::Response, ApiFailure> {
    services.users().delete(id)?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Deleted" })),
    )
        .into_response())
}
