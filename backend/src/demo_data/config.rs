//! Demo data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Whether to seed the demo roster on startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEMO_DATA")]
pub struct DemoDataSettings {
    /// Seed the roster when the profile store is empty.
    #[ortho_config(default = false)]
    pub enabled: bool,
}

impl DemoDataSettings {
    /// Whether startup seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load() -> DemoDataSettings {
        DemoDataSettings::load_from_iter([OsString::from("skillswap-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn disabled_by_default() {
        let _guard = lock_env([("DEMO_DATA_ENABLED", None::<String>)]);
        assert!(!load().is_enabled());
    }

    #[rstest]
    fn environment_enables_seeding() {
        let _guard = lock_env([("DEMO_DATA_ENABLED", Some("true".to_owned()))]);
        assert!(load().is_enabled());
    }
}
