//! Match listing for the signed-in user.
//!
//! ```text
//! GET /api/v1/matches
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::{Error, MatchResult};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Skill-swap partners for the caller, best overlap first.
#[utoipa::path(
    get,
    path = "/api/v1/matches",
    responses(
        (status = 200, description = "Ranked match list", body = [MatchResult]),
        (status = 401, description = "No session", body = Error),
        (status = 404, description = "Caller has no profile", body = Error),
        (status = 503, description = "Profile store or skill index unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["matches"],
    operation_id = "findMatches"
)]
#[get("/matches")]
pub async fn list_matches(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let matches = state.matches.find_matches(&user_id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(matches))
}
