//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`*Query`, `*Command`) are implemented by domain services and called
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod match_query;
mod profile_command;
mod profile_query;
mod profile_repository;
mod skill_index_repository;

#[cfg(test)]
pub use match_query::MockMatchQuery;
pub use match_query::MatchQuery;
#[cfg(test)]
pub use profile_command::MockProfileCommand;
pub use profile_command::ProfileCommand;
#[cfg(test)]
pub use profile_query::MockProfileQuery;
pub use profile_query::ProfileQuery;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
#[cfg(test)]
pub use skill_index_repository::MockSkillIndexRepository;
pub use skill_index_repository::{
    FixtureSkillIndexRepository, SkillIndexRepository, SkillIndexRepositoryError,
};
