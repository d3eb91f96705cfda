//! Test helpers for the HTTP adapter.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{HttpResponse, web};

use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;

/// Route path for [`login_as`].
pub const LOGIN_AS_PATH: &str = "/test/login/{id}";

/// Cookie session middleware with a throwaway key and `Secure` off, so
/// plain-HTTP test requests round-trip the `session` cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Bind the session to the user id in the path, standing in for whatever
/// issues sessions in production.
pub async fn login_as(
    session: SessionContext,
    id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let user_id =
        UserId::new(id.into_inner()).map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// The `session` cookie set by a response.
pub fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}
