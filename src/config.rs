//! Service configuration resolved from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `URGENCY_KEYWORDS_PATH` | `config/priority_system_keywords.json` |
//! | `URGENCY_BIND_ADDR` | `127.0.0.1:5000` |
//! | `URGENCY_PHRASE_MATCHING` | `per-character` |

use crate::classification::services::{ParsePhraseMatchingError, PhraseMatching};
use camino::{Utf8Path, Utf8PathBuf};
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

/// Environment variable naming the keyword file.
pub const KEYWORDS_PATH_VAR: &str = "URGENCY_KEYWORDS_PATH";
/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "URGENCY_BIND_ADDR";
/// Environment variable selecting the urgency phrase matching mode.
pub const PHRASE_MATCHING_VAR: &str = "URGENCY_PHRASE_MATCHING";

/// Keyword file used when none is configured.
pub const DEFAULT_KEYWORDS_PATH: &str = "config/priority_system_keywords.json";

/// Errors returned while resolving service configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceConfigError {
    /// The listen address is not a socket address.
    #[error("invalid URGENCY_BIND_ADDR '{value}': {source}")]
    InvalidBindAddress {
        /// Configured value.
        value: String,
        /// Parse failure.
        #[source]
        source: AddrParseError,
    },
    /// The phrase matching mode is unknown.
    #[error("invalid URGENCY_PHRASE_MATCHING: {0}")]
    InvalidPhraseMatching(#[from] ParsePhraseMatchingError),
}

/// Startup configuration of the urgency service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    keywords_path: Utf8PathBuf,
    bind_addr: SocketAddr,
    phrase_matching: PhraseMatching,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            keywords_path: Utf8PathBuf::from(DEFAULT_KEYWORDS_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            phrase_matching: PhraseMatching::default(),
        }
    }
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ServiceConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceConfigError`] when a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = read(KEYWORDS_PATH_VAR) {
            config.keywords_path = Utf8PathBuf::from(path);
        }
        if let Some(value) = read(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ServiceConfigError::InvalidBindAddress { value, source })?;
        }
        if let Some(value) = read(PHRASE_MATCHING_VAR) {
            config.phrase_matching = value.parse()?;
        }
        Ok(config)
    }

    /// Returns the keyword file path.
    #[must_use]
    pub fn keywords_path(&self) -> &Utf8Path {
        &self.keywords_path
    }

    /// Returns the listen address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Returns the urgency phrase matching mode.
    #[must_use]
    pub const fn phrase_matching(&self) -> PhraseMatching {
        self.phrase_matching
    }
}
