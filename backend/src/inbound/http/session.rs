//! Session cookie access for handlers.
//!
//! The cookie carries only the caller's `user_id`. Handlers go through
//! [`SessionContext`] so they never touch `actix-session` directly.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Handler-facing view of the session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap an Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the session to `user_id`.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop everything the session holds.
    pub fn forget_user(&self) {
        self.0.purge();
    }

    /// Caller's user id, if the cookie carries a valid one.
    ///
    /// A malformed id is logged and treated as anonymous.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|raw| {
            UserId::new(&raw)
                .inspect_err(|error| warn!(%error, "ignoring malformed user id in session"))
                .ok()
        }))
    }

    /// Caller's user id, or `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::session_cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    const ALICE: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    async fn login(session: SessionContext) -> Result<HttpResponse, Error> {
        session.persist_user(&UserId::new(ALICE).expect("fixture id"))?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn whoami(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = session.require_user_id()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    async fn logout(session: SessionContext) -> HttpResponse {
        session.forget_user();
        HttpResponse::NoContent().finish()
    }

    async fn forge(session: Session) -> HttpResponse {
        session
            .insert(USER_ID_KEY, "not-a-uuid")
            .expect("insert forged id");
        HttpResponse::Ok().finish()
    }

    macro_rules! session_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(crate::inbound::http::test_utils::test_session_middleware())
                    .route("/login", web::post().to(login))
                    .route("/whoami", web::get().to(whoami))
                    .route("/logout", web::post().to(logout))
                    .route("/forge", web::post().to(forge)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn persisted_user_is_read_back() {
        let app = session_app!();
        let req = test::TestRequest::post().uri("/login").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = session_cookie(&res);

        let req = test::TestRequest::get().uri("/whoami").cookie(cookie).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, ALICE);
    }

    #[actix_web::test]
    async fn anonymous_callers_are_unauthorised() {
        let app = session_app!();
        let req = test::TestRequest::get().uri("/whoami").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_ids_are_treated_as_anonymous() {
        let app = session_app!();
        let req = test::TestRequest::post().uri("/forge").to_request();
        let res = test::call_service(&app, req).await;
        let cookie = session_cookie(&res);

        let req = test::TestRequest::get().uri("/whoami").cookie(cookie).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn forgetting_clears_the_cookie() {
        let app = session_app!();
        let req = test::TestRequest::post().uri("/login").to_request();
        let res = test::call_service(&app, req).await;
        let cookie = session_cookie(&res);

        let req = test::TestRequest::post().uri("/logout").cookie(cookie).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let cleared = session_cookie(&res);
        assert!(cleared.value().is_empty());
    }
}
