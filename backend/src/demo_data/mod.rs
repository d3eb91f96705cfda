//! Optional demo roster seeded at startup.

mod config;
mod roster;
mod startup;

pub use config::DemoDataSettings;
pub use roster::{DEMO_ROSTER, DemoUser};
pub use startup::{DemoSeedOutcome, DemoSeedingError, seed_demo_data_on_startup};
