//! Driving port for partner matching.
//!
//! Inbound adapters call [`MatchQuery::find_matches`] with the authenticated
//! user's id and serialise the returned [`MatchResult`] list as-is.

use async_trait::async_trait;

use crate::domain::{Error, MatchResult, UserId};

/// Domain use-case port for finding skill-swap partners.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchQuery: Send + Sync {
    /// Candidates whose skills complement the requester's.
    ///
    /// Fails with `not_found` when the requester has no profile and with
    /// `service_unavailable` when a store cannot be reached. Never returns a
    /// partial list.
    async fn find_matches(&self, requester: &UserId) -> Result<Vec<MatchResult>, Error>;
}
