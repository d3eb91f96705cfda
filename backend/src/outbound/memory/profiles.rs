//! In-memory [`ProfileRepository`].

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{UserId, UserProfile};

fn poisoned() -> ProfileRepositoryError {
    ProfileRepositoryError::connection("profile store lock poisoned")
}

/// Profiles held in insertion order, which is the full-scan order.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<UserProfile>>,
}

impl InMemoryProfileRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.read().map(|profiles| profiles.len()).unwrap_or(0)
    }

    /// Whether no profiles are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let profiles = self.profiles.read().map_err(|_| poisoned())?;
        Ok(profiles.iter().find(|profile| profile.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, ProfileRepositoryError> {
        let profiles = self.profiles.read().map_err(|_| poisoned())?;
        Ok(profiles.clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned())?;
        if profiles
            .iter()
            .any(|stored| stored.email() == profile.email() && stored.id() != profile.id())
        {
            return Err(ProfileRepositoryError::duplicate_email(profile.email().as_ref()));
        }
        match profiles.iter_mut().find(|stored| stored.id() == profile.id()) {
            Some(stored) => *stored = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, ProfileRepositoryError> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned())?;
        let before = profiles.len();
        profiles.retain(|profile| profile.id() != id);
        Ok(profiles.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayName, EmailAddress, SkillSet};
    use rstest::{fixture, rstest};

    fn profile(name: &str, teach: &[&str]) -> UserProfile {
        UserProfile::new(
            UserId::random(),
            DisplayName::new(name).expect("valid name"),
            EmailAddress::new(format!("{}@example.com", name.to_lowercase()))
                .expect("valid email"),
        )
        .with_skills(
            SkillSet::try_from_strings(teach.iter().copied()).expect("valid skills"),
            SkillSet::empty(),
        )
    }

    #[fixture]
    fn store() -> InMemoryProfileRepository {
        InMemoryProfileRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_keeps_insertion_order(store: InMemoryProfileRepository) {
        let names = ["Carol", "Alice", "Bob"];
        for name in names {
            store.save(&profile(name, &[])).await.expect("save");
        }
        let listed: Vec<String> = store
            .list_all()
            .await
            .expect("list")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(listed, names);
    }

    #[rstest]
    #[tokio::test]
    async fn save_replaces_in_place(store: InMemoryProfileRepository) {
        let first = profile("Alice", &["JS"]);
        store.save(&first).await.expect("save");
        store.save(&profile("Bob", &[])).await.expect("save");
        let updated = first.clone().with_skills(
            SkillSet::try_from_strings(["Rust"]).expect("valid skills"),
            SkillSet::empty(),
        );
        store.save(&updated).await.expect("update");

        assert_eq!(store.len(), 2);
        let listed = store.list_all().await.expect("list");
        assert_eq!(listed[0], updated);
    }

    #[rstest]
    #[tokio::test]
    async fn save_rejects_an_email_owned_by_another_profile(store: InMemoryProfileRepository) {
        let alice = profile("Alice", &[]);
        store.save(&alice).await.expect("save");
        let impostor = UserProfile::new(
            UserId::random(),
            DisplayName::new("Mallory").expect("valid name"),
            alice.email().clone(),
        );

        let err = store.save(&impostor).await.expect_err("duplicate email");
        assert_eq!(err, ProfileRepositoryError::duplicate_email("alice@example.com"));
        assert_eq!(store.len(), 1);
        store.save(&alice).await.expect("resaving the owner is fine");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed(store: InMemoryProfileRepository) {
        let alice = profile("Alice", &[]);
        store.save(&alice).await.expect("save");
        assert!(store.delete(alice.id()).await.expect("delete"));
        assert!(!store.delete(alice.id()).await.expect("delete again"));
        assert!(store.find_by_id(alice.id()).await.expect("find").is_none());
        assert!(store.is_empty());
    }
}
