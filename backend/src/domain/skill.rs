//! Skill labels and per-user skill sets.
//!
//! Skill names are free text compared exactly: `"Python"` and `"python"` are
//! different skills and no trimming is applied. Only blank and oversized
//! labels are rejected.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of a skill label, in characters.
pub const SKILL_NAME_MAX: usize = 64;

/// Validation errors for skill labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillValidationError {
    Blank,
    TooLong { max: usize },
}

impl fmt::Display for SkillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "skill name must not be blank"),
            Self::TooLong { max } => write!(f, "skill name must be at most {max} characters"),
        }
    }
}

impl std::error::Error for SkillValidationError {}

/// A single teachable or learnable capability.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillName(String);

impl SkillName {
    /// Validate and construct a [`SkillName`]; the text is kept verbatim.
    ///
    /// # Examples
    /// ```
    /// use skillswap_backend::domain::SkillName;
    ///
    /// let skill = SkillName::new("Python").expect("valid skill");
    /// assert_ne!(skill, SkillName::new("python").expect("valid skill"));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, SkillValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SkillValidationError::Blank);
        }
        if name.chars().count() > SKILL_NAME_MAX {
            return Err(SkillValidationError::TooLong {
                max: SKILL_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for SkillName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<SkillName> for String {
    fn from(value: SkillName) -> Self {
        value.0
    }
}

impl TryFrom<String> for SkillName {
    type Error = SkillValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Failure building a [`SkillSet`] from raw strings, with the offending index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("skill at position {index} is invalid: {source}")]
pub struct SkillSetError {
    pub index: usize,
    #[source]
    pub source: SkillValidationError,
}

/// Ordered, duplicate-free collection of skills.
///
/// Duplicates are dropped on construction, keeping the first occurrence, so
/// stores that hand back repeated entries are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(Vec<SkillName>);

impl SkillSet {
    /// An empty skill set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate every entry of `raw`, then build the set.
    ///
    /// # Examples
    /// ```
    /// use skillswap_backend::domain::SkillSet;
    ///
    /// let skills = SkillSet::try_from_strings(["Go", "Rust", "Go"]).expect("valid skills");
    /// assert_eq!(skills.len(), 2);
    /// ```
    pub fn try_from_strings<I, S>(raw: I) -> Result<Self, SkillSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = raw
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                SkillName::new(name).map_err(|source| SkillSetError { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names.into_iter().collect())
    }

    /// Whether `skill` is a member.
    pub fn contains(&self, skill: &SkillName) -> bool {
        self.0.contains(skill)
    }

    /// Skills in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SkillName> {
        self.0.iter()
    }

    /// Number of distinct skills.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no skills.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members of `self` that also belong to `other`, in `self`'s order.
    pub fn intersection_in_order(&self, other: &SkillSet) -> Vec<SkillName> {
        let lookup: HashSet<&SkillName> = other.0.iter().collect();
        self.0
            .iter()
            .filter(|skill| lookup.contains(skill))
            .cloned()
            .collect()
    }

    /// Members of `self` missing from `other`, in `self`'s order.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        let lookup: HashSet<&SkillName> = other.0.iter().collect();
        Self(
            self.0
                .iter()
                .filter(|skill| !lookup.contains(skill))
                .cloned()
                .collect(),
        )
    }

    /// Plain string view, as sent over the wire.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|skill| skill.as_ref().to_owned()).collect()
    }
}

impl FromIterator<SkillName> for SkillSet {
    fn from_iter<T: IntoIterator<Item = SkillName>>(iter: T) -> Self {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for name in iter {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
        Self(names)
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a SkillName;
    type IntoIter = std::slice::Iter<'a, SkillName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(value: SkillSet) -> Self {
        value.0.into_iter().map(String::from).collect()
    }
}

impl TryFrom<Vec<String>> for SkillSet {
    type Error = SkillSetError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_from_strings(value)
    }
}
