//! Startup seeding of the demo roster.
//!
//! Profiles go through [`ProfileCommand`] so the skill index is populated by
//! the same reindex path as any user edit.

use thiserror::Error;
use tracing::info;

use crate::demo_data::config::DemoDataSettings;
use crate::demo_data::roster::{DEMO_ROSTER, DemoUser};
use crate::domain::ports::{ProfileCommand, ProfileRepository};
use crate::domain::{
    DisplayName, EmailAddress, Error, SkillSet, SkillSetError, SkillsUpdate, UserValidationError,
};

/// What startup seeding did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSeedOutcome {
    Disabled,
    /// The store already had profiles; nothing was written.
    AlreadyPopulated,
    Seeded { users: usize },
}

/// Errors returned while seeding.
#[derive(Debug, Error)]
pub enum DemoSeedingError {
    #[error("demo user {name} is invalid: {source}")]
    InvalidUser {
        name: &'static str,
        #[source]
        source: UserValidationError,
    },
    #[error("demo user {name} has invalid skills: {source}")]
    InvalidSkills {
        name: &'static str,
        #[source]
        source: SkillSetError,
    },
    #[error("demo seeding failed: {0}")]
    Domain(#[from] Error),
}

async fn seed_user(
    commands: &dyn ProfileCommand,
    user: &DemoUser,
) -> Result<(), DemoSeedingError> {
    let invalid_user = |source| DemoSeedingError::InvalidUser {
        name: user.name,
        source,
    };
    let invalid_skills = |source| DemoSeedingError::InvalidSkills {
        name: user.name,
        source,
    };
    let name = DisplayName::new(user.name).map_err(invalid_user)?;
    let email = EmailAddress::new(user.email).map_err(invalid_user)?;
    let update = SkillsUpdate {
        teach_skills: Some(SkillSet::try_from_strings(user.teach).map_err(invalid_skills)?),
        learn_skills: Some(SkillSet::try_from_strings(user.learn).map_err(invalid_skills)?),
    };
    let profile = commands.create_profile(name, email).await?;
    commands.update_skills(profile.id(), update).await?;
    Ok(())
}

/// Seed [`DEMO_ROSTER`] when enabled and the profile store is empty.
///
/// # Errors
///
/// Returns [`DemoSeedingError`] when the store fails mid-way; profiles
/// written before the failure are kept.
pub async fn seed_demo_data_on_startup<P>(
    settings: &DemoDataSettings,
    profiles: &P,
    commands: &dyn ProfileCommand,
) -> Result<DemoSeedOutcome, DemoSeedingError>
where
    P: ProfileRepository + ?Sized,
{
    if !settings.is_enabled() {
        info!(reason = "disabled", "demo data seeding skipped");
        return Ok(DemoSeedOutcome::Disabled);
    }
    let existing = profiles.list_all().await.map_err(Error::from)?;
    if !existing.is_empty() {
        info!(
            profiles = existing.len(),
            "profile store already populated; demo data seeding skipped"
        );
        return Ok(DemoSeedOutcome::AlreadyPopulated);
    }
    for user in &DEMO_ROSTER {
        seed_user(commands, user).await?;
    }
    info!(users = DEMO_ROSTER.len(), "demo data seeded");
    Ok(DemoSeedOutcome::Seeded {
        users: DEMO_ROSTER.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MatchQuery;
    use crate::domain::{MatchingService, ProfileService};
    use crate::outbound::memory::{InMemoryProfileRepository, InMemorySkillIndex};

    fn enabled(enabled: bool) -> DemoDataSettings {
        DemoDataSettings { enabled }
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_settings_write_nothing() {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let service = ProfileService::new(profiles.clone(), Arc::new(InMemorySkillIndex::new()));
        let outcome = seed_demo_data_on_startup(&enabled(false), profiles.as_ref(), &service)
            .await
            .expect("seeding succeeds");
        assert_eq!(outcome, DemoSeedOutcome::Disabled);
        assert!(profiles.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn seeding_populates_profiles_and_index_once() {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let index = Arc::new(InMemorySkillIndex::new());
        let service = ProfileService::new(profiles.clone(), index.clone());

        let outcome = seed_demo_data_on_startup(&enabled(true), profiles.as_ref(), &service)
            .await
            .expect("seeding succeeds");
        assert_eq!(outcome, DemoSeedOutcome::Seeded { users: 20 });

        let again = seed_demo_data_on_startup(&enabled(true), profiles.as_ref(), &service)
            .await
            .expect("second run succeeds");
        assert_eq!(again, DemoSeedOutcome::AlreadyPopulated);
        assert_eq!(profiles.len(), 20);

        let all = profiles.list_all().await.expect("list");
        let alice = all
            .iter()
            .find(|p| p.name().as_ref() == "Alice")
            .expect("Alice seeded");
        let matches = MatchingService::new(profiles.clone(), index)
            .find_matches(alice.id())
            .await
            .expect("matches");
        let best = matches.first().expect("at least one match");
        assert_eq!(best.name.as_ref(), "Bob");
        assert_eq!(best.overlap(), 8);
    }
}
