//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{MatchingSettings, ServerConfig, ServerConfigError, ServerSettings};

use state_builders::build_wiring;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use skillswap_backend::Trace;
use skillswap_backend::demo_data::{DemoDataSettings, seed_demo_data_on_startup};
#[cfg(debug_assertions)]
use skillswap_backend::doc::ApiDoc;
use skillswap_backend::inbound::http::error::json_error_handler;
use skillswap_backend::inbound::http::health::{HealthState, live, ready};
use skillswap_backend::inbound::http::matches::list_matches;
use skillswap_backend::inbound::http::profiles::{
    create_profile, current_profile, delete_profile, update_skills,
};
use skillswap_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(list_matches)
        .service(create_profile)
        .service(current_profile)
        .service(update_skills)
        .service(delete_profile);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Build the HTTP server, seeding demo data first when enabled.
///
/// Readiness flips once the listener is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when seeding fails or the socket cannot be
/// bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    demo_data: &DemoDataSettings,
) -> std::io::Result<Server> {
    let wiring = build_wiring(&config);
    seed_demo_data_on_startup(
        demo_data,
        wiring.profiles.as_ref(),
        wiring.http_state.profile_commands.as_ref(),
    )
    .await
    .map_err(std::io::Error::other)?;

    let http_state = web::Data::new(wiring.http_state);
    let server_health_state = health_state.clone();
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        ..
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
