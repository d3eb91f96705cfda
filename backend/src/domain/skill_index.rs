//! Inverted skill index types and reindex planning.
//!
//! The index maps each skill to the users who teach it and the users who want
//! to learn it. A user id sits in `teachers` for a skill exactly when that
//! skill is in the user's current teach set (likewise for learners). Entries
//! appear on first reference and are never removed, so empty entries may
//! linger.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{SkillName, SkillSet, UserId};

/// Which side of a skill a user sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillRole {
    Teacher,
    Learner,
}

impl SkillRole {
    /// Stable storage label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Learner => "learner",
        }
    }
}

impl fmt::Display for SkillRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership mutation applied atomically by the index store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipOp {
    Add,
    Remove,
}

impl fmt::Display for MembershipOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Remove => "remove",
        })
    }
}

/// Snapshot of one skill's index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillIndexEntry {
    skill: SkillName,
    teachers: BTreeSet<UserId>,
    learners: BTreeSet<UserId>,
}

impl SkillIndexEntry {
    /// Entry with no members.
    pub fn new(skill: SkillName) -> Self {
        Self {
            skill,
            teachers: BTreeSet::new(),
            learners: BTreeSet::new(),
        }
    }

    /// Skill this entry indexes.
    pub fn skill(&self) -> &SkillName {
        &self.skill
    }

    /// Users teaching the skill.
    pub fn teachers(&self) -> &BTreeSet<UserId> {
        &self.teachers
    }

    /// Users learning the skill.
    pub fn learners(&self) -> &BTreeSet<UserId> {
        &self.learners
    }

    /// Members holding `role` for this skill.
    pub fn members(&self, role: SkillRole) -> &BTreeSet<UserId> {
        match role {
            SkillRole::Teacher => &self.teachers,
            SkillRole::Learner => &self.learners,
        }
    }

    /// Apply a membership change; returns whether the entry changed.
    pub fn apply(&mut self, role: SkillRole, user_id: &UserId, op: MembershipOp) -> bool {
        let members = match role {
            SkillRole::Teacher => &mut self.teachers,
            SkillRole::Learner => &mut self.learners,
        };
        match op {
            MembershipOp::Add => members.insert(user_id.clone()),
            MembershipOp::Remove => members.remove(user_id),
        }
    }

    /// Whether neither role has members.
    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty() && self.learners.is_empty()
    }
}

/// One atomic membership write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipChange {
    pub skill: SkillName,
    pub role: SkillRole,
    pub op: MembershipOp,
}

/// Ordered list of membership writes that moves a user's index memberships
/// from one pair of skill sets to another.
///
/// Removals come first and only touch skills that were dropped. Additions
/// cover every skill in the new sets, so unchanged skills are re-added and
/// never removed; repairing a drifted entry falls out for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReindexPlan {
    changes: Vec<MembershipChange>,
}

/// Teach and learn sets for one side of a reindex.
#[derive(Debug, Clone, Copy)]
pub struct SkillSets<'a> {
    pub teach: &'a SkillSet,
    pub learn: &'a SkillSet,
}

impl ReindexPlan {
    /// Plan the writes for moving from `old` to `new`.
    ///
    /// # Examples
    /// ```
    /// use skillswap_backend::domain::{MembershipOp, ReindexPlan, SkillSet, SkillSets};
    ///
    /// let old = SkillSet::try_from_strings(["A", "B"]).expect("valid");
    /// let new = SkillSet::try_from_strings(["B", "C"]).expect("valid");
    /// let none = SkillSet::empty();
    /// let plan = ReindexPlan::new(
    ///     SkillSets { teach: &old, learn: &none },
    ///     SkillSets { teach: &new, learn: &none },
    /// );
    /// let ops: Vec<_> = plan.changes().iter().map(|c| (c.skill.to_string(), c.op)).collect();
    /// assert_eq!(ops, vec![
    ///     ("A".to_owned(), MembershipOp::Remove),
    ///     ("B".to_owned(), MembershipOp::Add),
    ///     ("C".to_owned(), MembershipOp::Add),
    /// ]);
    /// ```
    pub fn new(old: SkillSets<'_>, new: SkillSets<'_>) -> Self {
        let removals = [
            (SkillRole::Teacher, old.teach.difference(new.teach)),
            (SkillRole::Learner, old.learn.difference(new.learn)),
        ];
        let additions = [
            (SkillRole::Teacher, new.teach),
            (SkillRole::Learner, new.learn),
        ];

        let mut changes = Vec::new();
        for (role, skills) in &removals {
            changes.extend(skills.iter().map(|skill| MembershipChange {
                skill: skill.clone(),
                role: *role,
                op: MembershipOp::Remove,
            }));
        }
        for (role, skills) in additions {
            changes.extend(skills.iter().map(|skill| MembershipChange {
                skill: skill.clone(),
                role,
                op: MembershipOp::Add,
            }));
        }
        Self { changes }
    }

    /// Writes in execution order.
    pub fn changes(&self) -> &[MembershipChange] {
        &self.changes
    }
}
