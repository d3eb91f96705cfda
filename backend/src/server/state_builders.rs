//! Builders wiring stores into the domain services behind [`HttpState`].

use std::sync::Arc;

use tracing::info;

use skillswap_backend::domain::ports::{ProfileRepository, SkillIndexRepository};
use skillswap_backend::domain::{MatchingService, ProfileService};
use skillswap_backend::inbound::http::state::HttpState;
use skillswap_backend::outbound::memory::{InMemoryProfileRepository, InMemorySkillIndex};
use skillswap_backend::outbound::persistence::{
    DieselProfileRepository, DieselSkillIndexRepository,
};

use super::ServerConfig;

/// Handler state plus the profile store, kept for startup seeding.
pub(crate) struct Wiring {
    pub(crate) http_state: HttpState,
    pub(crate) profiles: Arc<dyn ProfileRepository>,
}

fn wire<P, I>(profiles: Arc<P>, index: Arc<I>, config: &ServerConfig) -> Wiring
where
    P: ProfileRepository + 'static,
    I: SkillIndexRepository + 'static,
{
    let matches = MatchingService::new(profiles.clone(), index.clone())
        .with_policy(config.policy)
        .with_strategy(config.strategy);
    let service = Arc::new(ProfileService::new(profiles.clone(), index));
    Wiring {
        http_state: HttpState {
            matches: Arc::new(matches),
            profiles: service.clone(),
            profile_commands: service,
        },
        profiles,
    }
}

/// PostgreSQL stores when a pool is configured, in-memory stores otherwise.
pub(crate) fn build_wiring(config: &ServerConfig) -> Wiring {
    info!(
        policy = ?config.policy,
        strategy = %config.strategy,
        store = if config.db_pool.is_some() { "postgres" } else { "memory" },
        "wiring matching services"
    );
    match &config.db_pool {
        Some(pool) => wire(
            Arc::new(DieselProfileRepository::new(pool.clone())),
            Arc::new(DieselSkillIndexRepository::new(pool.clone())),
            config,
        ),
        None => wire(
            Arc::new(InMemoryProfileRepository::new()),
            Arc::new(InMemorySkillIndex::new()),
            config,
        ),
    }
}
