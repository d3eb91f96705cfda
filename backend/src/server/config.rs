//! Server settings, session key loading, and the assembled server config.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroize;

use skillswap_backend::domain::{MatchPolicy, MatchStrategy, ParseMatchSettingError};
use skillswap_backend::outbound::persistence::DbPool;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Listener, storage, and session cookie settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SKILLSWAP")]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. The in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// File holding the session cookie master key.
    pub session_key_file: Option<PathBuf>,
    /// Fall back to a random session key when the key file is unreadable.
    #[ortho_config(default = false)]
    pub session_allow_ephemeral: bool,
    /// Mark the session cookie `Secure` (default on).
    pub cookie_secure: Option<bool>,
}

/// Failure turning [`ServerSettings`] into a runnable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error(transparent)]
    Matching(#[from] ParseMatchSettingError),
}

impl ServerSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerConfigError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| ServerConfigError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .filter(|max| *max > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or_else(|| Path::new(SESSION_KEY_DEFAULT_PATH))
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Load the session key from [`Self::session_key_file`].
    ///
    /// Debug builds, or `session_allow_ephemeral`, fall back to a random key
    /// when the file cannot be read. A key that is present but short is
    /// always rejected.
    pub fn session_key(&self) -> Result<Key, ServerConfigError> {
        let path = self.session_key_file();
        match std::fs::read(path) {
            Ok(mut bytes) => {
                if bytes.len() < SESSION_KEY_MIN_LEN {
                    let length = bytes.len();
                    bytes.zeroize();
                    return Err(ServerConfigError::KeyTooShort {
                        path: path.to_path_buf(),
                        length,
                        min_len: SESSION_KEY_MIN_LEN,
                    });
                }
                let key = Key::derive_from(&bytes);
                bytes.zeroize();
                Ok(key)
            }
            Err(source) if cfg!(debug_assertions) || self.session_allow_ephemeral => {
                warn!(path = %path.display(), error = %source, "using ephemeral session key");
                Ok(Key::generate())
            }
            Err(source) => Err(ServerConfigError::KeyRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Matching policy and candidate discovery strategy.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MATCHING")]
pub struct MatchingSettings {
    /// `either` (default) or `both`.
    pub policy: Option<String>,
    /// `indexed` (default) or `full_scan`.
    pub strategy: Option<String>,
}

impl MatchingSettings {
    pub fn policy(&self) -> Result<MatchPolicy, ParseMatchSettingError> {
        self.policy
            .as_deref()
            .map_or_else(|| Ok(MatchPolicy::default()), str::parse)
    }

    pub fn strategy(&self) -> Result<MatchStrategy, ParseMatchSettingError> {
        self.strategy
            .as_deref()
            .map_or_else(|| Ok(MatchStrategy::default()), str::parse)
    }
}

/// Everything `create_server` needs, resolved from settings.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) policy: MatchPolicy,
    pub(crate) strategy: MatchStrategy,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Resolve settings into a config without a database pool.
    ///
    /// # Errors
    ///
    /// Returns [`ServerConfigError`] for an unparsable address, an unreadable
    /// or short session key, or an unknown matching setting.
    pub fn from_settings(
        server: &ServerSettings,
        matching: &MatchingSettings,
    ) -> Result<Self, ServerConfigError> {
        Ok(Self {
            key: server.session_key()?,
            cookie_secure: server.cookie_secure(),
            bind_addr: server.bind_addr()?,
            policy: matching.policy()?,
            strategy: matching.strategy()?,
            db_pool: None,
        })
    }

    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
