//! Domain types, services, and ports.
//!
//! Nothing in here knows about HTTP or a particular database. Inbound
//! adapters call the driving ports in [`ports`]; outbound adapters implement
//! the repository ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`UserProfile`], [`SkillSet`], [`SkillName`]: profile aggregate.
//! - [`MatchResult`], [`MatchPolicy`], [`MatchStrategy`]: matching output and knobs.
//! - [`SkillIndexEntry`], [`ReindexPlan`]: inverted index model.
//! - [`MatchingService`], [`ProfileService`], [`SkillIndexer`]: use cases.

pub mod error;
pub mod matching;
pub mod matching_service;
pub mod ports;
pub mod profile;
pub mod profile_service;
pub mod skill;
pub mod skill_index;
pub mod skill_indexer;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::matching::{
    MatchPolicy, MatchResult, MatchStrategy, ParseMatchSettingError, evaluate_candidate,
    rank_matches,
};
pub use self::matching_service::MatchingService;
pub use self::profile::{SkillsUpdate, UserProfile};
pub use self::profile_service::ProfileService;
pub use self::skill::{SKILL_NAME_MAX, SkillName, SkillSet, SkillSetError, SkillValidationError};
pub use self::skill_index::{
    MembershipChange, MembershipOp, ReindexPlan, SkillIndexEntry, SkillRole, SkillSets,
};
pub use self::skill_indexer::SkillIndexer;
pub use self::trace_id::TraceId;
pub use self::user::{DisplayName, EmailAddress, UserId, UserValidationError};
