//! Profile endpoints: registration and the caller's own skill sets.
//!
//! ```text
//! POST   /api/v1/users     {"name":"Alice","email":"alice@example.com"}
//! GET    /api/v1/users/me
//! PUT    /api/v1/users/me  {"teachSkills":["Rust"],"learnSkills":["Go"]}
//! DELETE /api/v1/users/me
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    DisplayName, EmailAddress, Error, SkillSet, SkillSetError, SkillValidationError,
    SkillsUpdate, UserProfile, UserValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /api/v1/users`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProfileRequest {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Skill replacement body for `PUT /api/v1/users/me`.
///
/// An omitted list keeps the stored one; an empty list clears it.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSkillsRequest {
    #[schema(example = json!(["JavaScript", "React"]))]
    pub teach_skills: Option<Vec<String>>,
    #[schema(example = json!(["Python"]))]
    pub learn_skills: Option<Vec<String>>,
}

fn user_validation_error(field: &str, err: UserValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

fn skill_validation_error(field: &str, err: SkillSetError) -> Error {
    let code = match &err.source {
        SkillValidationError::Blank => "blank_skill",
        SkillValidationError::TooLong { .. } => "skill_too_long",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "index": err.index,
        "code": code,
    }))
}

fn parse_skills(field: &str, raw: Option<Vec<String>>) -> Result<Option<SkillSet>, Error> {
    raw.map(|skills| {
        SkillSet::try_from_strings(skills).map_err(|err| skill_validation_error(field, err))
    })
    .transpose()
}

impl TryFrom<UpdateSkillsRequest> for SkillsUpdate {
    type Error = Error;

    fn try_from(value: UpdateSkillsRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            teach_skills: parse_skills("teachSkills", value.teach_skills)?,
            learn_skills: parse_skills("learnSkills", value.learn_skills)?,
        })
    }
}

/// Register a profile and sign the caller in as it.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = UserProfile,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid name or email", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 503, description = "Profile store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createProfile",
    security([])
)]
#[post("/users")]
pub async fn create_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateProfileRequest>,
) -> ApiResult<HttpResponse> {
    let CreateProfileRequest { name, email } = payload.into_inner();
    let name = DisplayName::new(name).map_err(|err| user_validation_error("name", err))?;
    let email = EmailAddress::new(email).map_err(|err| user_validation_error("email", err))?;
    let profile = state.profile_commands.create_profile(name, email).await?;
    session.persist_user(profile.id())?;
    Ok(HttpResponse::Created()
        .insert_header(private_no_cache_header())
        .json(profile))
}

/// The caller's profile.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Current profile", body = UserProfile),
        (status = 401, description = "No session", body = Error),
        (status = 404, description = "Profile deleted", body = Error)
    ),
    tags = ["users"],
    operation_id = "currentProfile"
)]
#[get("/users/me")]
pub async fn current_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let profile = state.profiles.fetch_profile(&user_id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(profile))
}

/// Replace the caller's teach and/or learn skills and reindex them.
#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    request_body = UpdateSkillsRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Blank or oversized skill", body = Error),
        (status = 401, description = "No session", body = Error),
        (status = 404, description = "Profile deleted", body = Error),
        (status = 503, description = "Profile store or skill index unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateSkills"
)]
#[put("/users/me")]
pub async fn update_skills(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UpdateSkillsRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let update = SkillsUpdate::try_from(payload.into_inner())?;
    let profile = state
        .profile_commands
        .update_skills(&user_id, update)
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(profile))
}

/// Delete the caller's profile and end the session.
#[utoipa::path(
    delete,
    path = "/api/v1/users/me",
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "No session", body = Error),
        (status = 404, description = "Profile already gone", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteProfile"
)]
#[delete("/users/me")]
pub async fn delete_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    state.profile_commands.delete_profile(&user_id).await?;
    session.forget_user();
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;
