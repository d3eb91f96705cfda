//! OpenAPI document for the REST API.
//!
//! Served by Swagger UI at `/docs` in debug builds. Domain payload types
//! derive `ToSchema` themselves, so the document registers them directly.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, MatchResult, UserProfile};
use crate::inbound::http::profiles::{CreateProfileRequest, UpdateSkillsRequest};

/// Registers the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/users.",
            ))),
        );
    }
}

/// OpenAPI document for the SkillSwap API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "SkillSwap backend API",
        description = "Skill profiles and skill-swap partner matching."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::matches::list_matches,
        crate::inbound::http::profiles::create_profile,
        crate::inbound::http::profiles::current_profile,
        crate::inbound::http::profiles::update_skills,
        crate::inbound::http::profiles::delete_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        MatchResult,
        UserProfile,
        CreateProfileRequest,
        UpdateSkillsRequest,
        Error,
        ErrorCode
    )),
    tags(
        (name = "matches", description = "Skill-swap partner discovery"),
        (name = "users", description = "Profile registration and skill sets"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
