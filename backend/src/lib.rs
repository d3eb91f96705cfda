//! SkillSwap backend library: profiles, the inverted skill index, and
//! partner matching, plus the HTTP and storage adapters around them.

pub mod demo_data;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
