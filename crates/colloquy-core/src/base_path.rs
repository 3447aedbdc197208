//! Deployment base path.
//!
//! In production Colloquy is served behind a path-based reverse proxy under
//! [`PRODUCTION_BASE_PATH`]; every route and static asset URL must carry
//! that prefix. Outside production the prefix is empty.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Environment variable that selects the execution mode.
pub const MODE_ENV_VAR: &str = "COLLOQUY_ENV";

pub const PRODUCTION_BASE_PATH: &str = "/openaire";

static MODE: OnceLock<ExecutionMode> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Production,
    #[default]
    Development,
    Test,
}

impl ExecutionMode {
    /// Read the mode from [`MODE_ENV_VAR`]. Unset or unrecognized values
    /// fall back to development.
    pub fn from_env() -> Self {
        std::env::var(MODE_ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// The process-wide mode. Initialized from the environment on first
    /// use unless [`ExecutionMode::install`] ran earlier.
    pub fn current() -> Self {
        *MODE.get_or_init(Self::from_env)
    }

    /// Fix the process-wide mode. Fails with the already-installed mode if
    /// one was set (or read) before.
    pub fn install(self) -> Result<(), ExecutionMode> {
        MODE.set(self).map_err(|_| Self::current())
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            other => Err(format!("unknown execution mode: {other}")),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
        })
    }
}

/// Base path for the given mode: [`PRODUCTION_BASE_PATH`] or `""`.
pub fn base_path_for(mode: ExecutionMode) -> &'static str {
    if mode.is_production() {
        PRODUCTION_BASE_PATH
    } else {
        ""
    }
}

/// Prefix `path` with the base path for `mode`, ensuring exactly one `/`
/// at the join point.
///
/// Not idempotent: applying it to an already-prefixed path prefixes twice.
pub fn with_base_path_for(mode: ExecutionMode, path: &str) -> String {
    let base = base_path_for(mode);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{base}/{path}")
}

/// Base path for the process-wide execution mode.
pub fn base_path() -> &'static str {
    base_path_for(ExecutionMode::current())
}

/// [`with_base_path_for`] using the process-wide execution mode.
pub fn with_base_path(path: &str) -> String {
    with_base_path_for(ExecutionMode::current(), path)
}
