//! Process-local stores for demo runs and tests.
//!
//! Both stores keep their state behind a `std::sync::RwLock` and take the
//! lock for exactly one port operation, which is what makes each index
//! membership write atomic. A poisoned lock surfaces as a connection error.

mod profiles;
mod skill_index;

pub use profiles::InMemoryProfileRepository;
pub use skill_index::InMemorySkillIndex;
