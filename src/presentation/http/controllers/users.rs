// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::UpdateProfileCommand,
    dto::{PublicProfileDto, UserDto},
    error::ApplicationError,
};
use crate::domain::user::UserId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileCommand {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            display_name: request.display_name,
            photo_url: request.photo_url,
            phone_number: request.phone_number,
            address: request.address,
            bio: request.bio,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Profile of the authenticated caller.", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No user record for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn get_my_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(caller): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(caller.id)
        .await
        .into_http()
        .map(|user| Json(UserDto::from(user)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile replaced.", body = UserDto),
        (status = 400, description = "Malformed body or a profile field failed validation.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No user record for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_my_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(caller): Authenticated,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> HttpResult<Json<UserDto>> {
    let Json(payload) = payload.map_err(|rejection| {
        HttpError::from_error(ApplicationError::validation(rejection.body_text()))
    })?;

    state
        .services
        .user_commands
        .update_profile(caller.id, payload.into())
        .await
        .into_http()
        .map(|user| Json(UserDto::from(user)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "Public view of the user's profile.", body = PublicProfileDto),
        (status = 400, description = "Malformed user id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn get_public_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(_caller): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<PublicProfileDto>> {
    let user_id: UserId = id.parse().map_err(|_| {
        HttpError::from_error(ApplicationError::validation("invalid user id format"))
    })?;

    state
        .services
        .user_queries
        .get_public_profile(user_id)
        .await
        .into_http()
        .map(Json)
}
