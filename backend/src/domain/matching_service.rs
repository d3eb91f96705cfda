//! Partner matching over the profile store and the skill index.
//!
//! The full scan evaluates every stored profile. The indexed strategy asks
//! the index for everyone who learns a skill the requester teaches and
//! everyone who teaches a skill the requester learns, loads just those
//! profiles, and then evaluates them exactly as the full scan would.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use tracing::{debug, info};

use crate::domain::ports::{MatchQuery, ProfileRepository, SkillIndexRepository};
use crate::domain::{
    Error, MatchPolicy, MatchResult, MatchStrategy, SkillRole, UserId, UserProfile,
    evaluate_candidate, rank_matches,
};

/// Matching service implementing the [`MatchQuery`] driving port.
#[derive(Clone)]
pub struct MatchingService<P, I> {
    profiles: Arc<P>,
    index: Arc<I>,
    policy: MatchPolicy,
    strategy: MatchStrategy,
}

impl<P, I> MatchingService<P, I> {
    /// Service using the default policy and strategy.
    pub fn new(profiles: Arc<P>, index: Arc<I>) -> Self {
        Self {
            profiles,
            index,
            policy: MatchPolicy::default(),
            strategy: MatchStrategy::default(),
        }
    }

    /// Replace the match policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the candidate search strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl<P, I> MatchingService<P, I>
where
    P: ProfileRepository,
    I: SkillIndexRepository,
{
    async fn load_requester(&self, requester: &UserId) -> Result<UserProfile, Error> {
        self.profiles
            .find_by_id(requester)
            .await?
            .ok_or_else(|| Error::not_found(format!("profile {requester} not found")))
    }

    async fn scan_candidates(&self) -> Result<Vec<UserProfile>, Error> {
        Ok(self.profiles.list_all().await?)
    }

    /// Ids reachable from the requester's skills, without the requester.
    async fn indexed_candidate_ids(
        &self,
        requester: &UserProfile,
    ) -> Result<BTreeSet<UserId>, Error> {
        let mut ids = BTreeSet::new();
        let paths = [
            (requester.teach_skills(), SkillRole::Learner),
            (requester.learn_skills(), SkillRole::Teacher),
        ];
        for (skills, role) in paths {
            let lookups = skills.iter().map(|skill| self.index.get_entry(skill));
            let entries = try_join_all(lookups).await?;
            for entry in entries.into_iter().flatten() {
                ids.extend(entry.members(role).iter().cloned());
            }
        }
        ids.remove(requester.id());
        Ok(ids)
    }

    async fn indexed_candidates(
        &self,
        requester: &UserProfile,
    ) -> Result<Vec<UserProfile>, Error> {
        let ids = self.indexed_candidate_ids(requester).await?;
        let loaded = try_join_all(ids.iter().map(|id| self.profiles.find_by_id(id))).await?;

        let mut candidates = Vec::with_capacity(loaded.len());
        for (id, profile) in ids.iter().zip(loaded) {
            match profile {
                Some(profile) => candidates.push(profile),
                None => debug!(candidate = %id, "skill index references a missing profile"),
            }
        }
        Ok(candidates)
    }
}

#[async_trait]
impl<P, I> MatchQuery for MatchingService<P, I>
where
    P: ProfileRepository,
    I: SkillIndexRepository,
{
    async fn find_matches(&self, requester: &UserId) -> Result<Vec<MatchResult>, Error> {
        let profile = self.load_requester(requester).await?;
        let candidates = match self.strategy {
            MatchStrategy::FullScan => self.scan_candidates().await?,
            MatchStrategy::Indexed => self.indexed_candidates(&profile).await?,
        };
        let evaluated = candidates.len();
        let matches: Vec<MatchResult> = candidates
            .iter()
            .filter_map(|candidate| evaluate_candidate(&profile, candidate, self.policy))
            .collect();
        let ranked = rank_matches(matches);
        info!(
            user_id = %requester,
            strategy = %self.strategy,
            candidates = evaluated,
            matches = ranked.len(),
            "matches computed"
        );
        Ok(ranked)
    }
}

#[cfg(test)]
#[path = "matching_service_tests.rs"]
mod tests;
