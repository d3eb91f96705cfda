//! User profile aggregate: identity plus declared teach/learn skills.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DisplayName, EmailAddress, SkillSet, UserId};

/// A user's public profile and declared skill sets.
///
/// A skill may sit in both sets at once. Each set is duplicate free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    #[schema(value_type = String, example = "Alice")]
    name: DisplayName,
    #[schema(value_type = String, example = "alice@example.com")]
    email: EmailAddress,
    #[schema(value_type = Vec<String>, example = json!(["JavaScript", "React"]))]
    teach_skills: SkillSet,
    #[schema(value_type = Vec<String>, example = json!(["Python"]))]
    learn_skills: SkillSet,
}

impl UserProfile {
    /// Fresh profile with empty skill sets, as created at signup.
    pub fn new(id: UserId, name: DisplayName, email: EmailAddress) -> Self {
        Self {
            id,
            name,
            email,
            teach_skills: SkillSet::empty(),
            learn_skills: SkillSet::empty(),
        }
    }

    /// Replace both skill sets.
    #[must_use]
    pub fn with_skills(mut self, teach_skills: SkillSet, learn_skills: SkillSet) -> Self {
        self.teach_skills = teach_skills;
        self.learn_skills = learn_skills;
        self
    }

    /// Profile identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name shown to matched partners.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Contact address shown to matched partners.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Skills this user offers to teach.
    pub fn teach_skills(&self) -> &SkillSet {
        &self.teach_skills
    }

    /// Skills this user wants to learn.
    pub fn learn_skills(&self) -> &SkillSet {
        &self.learn_skills
    }

    /// Apply a partial replace, returning the updated profile.
    #[must_use]
    pub fn apply(mut self, update: SkillsUpdate) -> Self {
        let SkillsUpdate {
            teach_skills,
            learn_skills,
        } = update;
        if let Some(teach) = teach_skills {
            self.teach_skills = teach;
        }
        if let Some(learn) = learn_skills {
            self.learn_skills = learn;
        }
        self
    }
}

/// Full or partial replacement of a profile's skill sets.
///
/// `None` leaves the corresponding set untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsUpdate {
    pub teach_skills: Option<SkillSet>,
    pub learn_skills: Option<SkillSet>,
}

impl SkillsUpdate {
    /// True when the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.teach_skills.is_none() && self.learn_skills.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn alice() -> UserProfile {
        UserProfile::new(
            UserId::new("11111111-1111-1111-1111-111111111111").expect("valid id"),
            DisplayName::new("Alice").expect("valid name"),
            EmailAddress::new("alice@example.com").expect("valid email"),
        )
        .with_skills(
            SkillSet::try_from_strings(["JS"]).expect("valid skills"),
            SkillSet::try_from_strings(["Python"]).expect("valid skills"),
        )
    }

    #[rstest]
    fn new_profiles_have_no_skills() {
        let profile = UserProfile::new(
            UserId::random(),
            DisplayName::new("Carol").expect("valid name"),
            EmailAddress::new("carol@example.com").expect("valid email"),
        );
        assert!(profile.teach_skills().is_empty());
        assert!(profile.learn_skills().is_empty());
    }

    #[rstest]
    fn partial_update_keeps_other_set(alice: UserProfile) {
        let updated = alice.apply(SkillsUpdate {
            teach_skills: Some(SkillSet::try_from_strings(["Go"]).expect("valid skills")),
            learn_skills: None,
        });
        assert_eq!(updated.teach_skills().to_strings(), vec!["Go"]);
        assert_eq!(updated.learn_skills().to_strings(), vec!["Python"]);
    }

    #[rstest]
    fn empty_update_is_a_no_op(alice: UserProfile) {
        let update = SkillsUpdate::default();
        assert!(update.is_empty());
        assert_eq!(alice.clone().apply(update), alice);
    }

    #[rstest]
    fn serialises_with_wire_names(alice: UserProfile) {
        let value = serde_json::to_value(&alice).expect("profile serialises");
        assert_eq!(
            value,
            json!({
                "id": "11111111-1111-1111-1111-111111111111",
                "name": "Alice",
                "email": "alice@example.com",
                "teachSkills": ["JS"],
                "learnSkills": ["Python"],
            })
        );
    }
}
