//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see driving
//! ports, so they stay testable without any store behind them.

use std::sync::Arc;

use crate::domain::ports::{MatchQuery, ProfileCommand, ProfileQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use skillswap_backend::domain::MatchingService;
/// use skillswap_backend::domain::ProfileService;
/// use skillswap_backend::inbound::http::state::HttpState;
/// use skillswap_backend::outbound::memory::{InMemoryProfileRepository, InMemorySkillIndex};
///
/// let profiles = Arc::new(InMemoryProfileRepository::new());
/// let index = Arc::new(InMemorySkillIndex::new());
/// let service = Arc::new(ProfileService::new(profiles.clone(), index.clone()));
/// let state = HttpState {
///     matches: Arc::new(MatchingService::new(profiles, index)),
///     profiles: service.clone(),
///     profile_commands: service,
/// };
/// let _matches = state.matches.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub matches: Arc<dyn MatchQuery>,
    pub profiles: Arc<dyn ProfileQuery>,
    pub profile_commands: Arc<dyn ProfileCommand>,
}
