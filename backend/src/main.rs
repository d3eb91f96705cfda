//! SkillSwap backend entry-point: loads settings, connects storage, and
//! serves the matching and profile API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{MatchingSettings, ServerConfig, ServerSettings, create_server};
use skillswap_backend::demo_data::DemoDataSettings;
use skillswap_backend::inbound::http::health::HealthState;
use skillswap_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};

fn program_name() -> OsString {
    std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("skillswap-backend"))
}

fn settings_error(section: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("invalid {section} settings: {err}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Environment and config files only; CLI flags are not parsed.
    let server_settings = ServerSettings::load_from_iter([program_name()])
        .map_err(|err| settings_error("server", err))?;
    let matching_settings = MatchingSettings::load_from_iter([program_name()])
        .map_err(|err| settings_error("matching", err))?;
    let demo_data = DemoDataSettings::load_from_iter([program_name()])
        .map_err(|err| settings_error("demo data", err))?;

    let mut config = ServerConfig::from_settings(&server_settings, &matching_settings)
        .map_err(std::io::Error::other)?;

    if let Some(url) = server_settings.database_url() {
        run_migrations(url).await.map_err(std::io::Error::other)?;
        let max_connections = server_settings.db_max_connections();
        let pool_config = PoolConfig::new(url)
            .with_max_size(max_connections)
            .with_min_idle(Some(max_connections.min(2)));
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database configured; profiles live in memory and vanish on restart");
    }

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, &demo_data).await?;
    info!(%bind_addr, "skillswap backend listening");
    server.await
}
