//! Match results and the pure candidate evaluation shared by every strategy.
//!
//! Both the full-scan and the indexed strategy funnel candidates through
//! [`evaluate_candidate`] and [`rank_matches`], so their output can only
//! differ in which candidates they look at, never in how a candidate is
//! judged or ordered.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DisplayName, EmailAddress, SkillName, SkillSet, UserId, UserProfile};

/// Which skill overlaps qualify a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Either direction is enough: the candidate teaches something the
    /// requester wants, or wants something the requester teaches.
    #[default]
    Either,
    /// Both directions must overlap.
    Both,
}

impl MatchPolicy {
    /// Whether a candidate with these overlaps is a match.
    pub fn admits(self, matching_teach: &[SkillName], matching_learn: &[SkillName]) -> bool {
        match self {
            Self::Either => !matching_teach.is_empty() || !matching_learn.is_empty(),
            Self::Both => !matching_teach.is_empty() && !matching_learn.is_empty(),
        }
    }
}

/// How candidates are gathered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Evaluate every stored profile.
    FullScan,
    /// Narrow candidates through the skill index first.
    #[default]
    Indexed,
}

/// Unrecognised policy or strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'; expected one of {expected}")]
pub struct ParseMatchSettingError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for MatchPolicy {
    type Err = ParseMatchSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "either" => Ok(Self::Either),
            "both" => Ok(Self::Both),
            _ => Err(ParseMatchSettingError {
                kind: "match policy",
                value: s.to_owned(),
                expected: "either|both",
            }),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = ParseMatchSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "full_scan" => Ok(Self::FullScan),
            "indexed" => Ok(Self::Indexed),
            _ => Err(ParseMatchSettingError {
                kind: "match strategy",
                value: s.to_owned(),
                expected: "full_scan|indexed",
            }),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FullScan => "full_scan",
            Self::Indexed => "indexed",
        })
    }
}

/// A candidate partner plus the skills that make them one.
///
/// `matching_teach_skills` lists what the candidate teaches that the
/// requester wants to learn; `matching_learn_skills` lists what the candidate
/// wants to learn that the requester teaches. Both keep the candidate's own
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    #[schema(value_type = String, example = "Bob")]
    pub name: DisplayName,
    #[schema(value_type = String, example = "bob@example.com")]
    pub email: EmailAddress,
    #[schema(value_type = Vec<String>, example = json!(["Python", "Django"]))]
    pub teach_skills: SkillSet,
    #[schema(value_type = Vec<String>, example = json!(["JavaScript"]))]
    pub learn_skills: SkillSet,
    #[schema(value_type = Vec<String>, example = json!(["Python"]))]
    pub matching_teach_skills: Vec<SkillName>,
    #[schema(value_type = Vec<String>, example = json!(["JavaScript"]))]
    pub matching_learn_skills: Vec<SkillName>,
}

impl MatchResult {
    /// Number of shared skills across both directions.
    pub fn overlap(&self) -> usize {
        self.matching_teach_skills.len() + self.matching_learn_skills.len()
    }
}

/// Judge one candidate against the requester.
///
/// Returns `None` for the requester themself or when `policy` rejects the
/// overlaps.
pub fn evaluate_candidate(
    requester: &UserProfile,
    candidate: &UserProfile,
    policy: MatchPolicy,
) -> Option<MatchResult> {
    if candidate.id() == requester.id() {
        return None;
    }
    let matching_teach_skills = candidate
        .teach_skills()
        .intersection_in_order(requester.learn_skills());
    let matching_learn_skills = candidate
        .learn_skills()
        .intersection_in_order(requester.teach_skills());
    if !policy.admits(&matching_teach_skills, &matching_learn_skills) {
        return None;
    }
    Some(MatchResult {
        id: candidate.id().clone(),
        name: candidate.name().clone(),
        email: candidate.email().clone(),
        teach_skills: candidate.teach_skills().clone(),
        learn_skills: candidate.learn_skills().clone(),
        matching_teach_skills,
        matching_learn_skills,
    })
}

/// Drop repeated candidates and order by overlap, then id.
///
/// The first occurrence of an id wins. Ties on overlap are broken by
/// ascending id, so the order is total and independent of how candidates
/// were gathered.
pub fn rank_matches(mut matches: Vec<MatchResult>) -> Vec<MatchResult> {
    matches.sort_by(|a, b| a.id.cmp(&b.id));
    matches.dedup_by(|later, earlier| later.id == earlier.id);
    matches.sort_by_key(|m| Reverse(m.overlap()));
    matches
}
