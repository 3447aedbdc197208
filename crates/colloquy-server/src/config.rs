use std::net::SocketAddr;
use std::path::PathBuf;

use colloquy_core::base_path::{ExecutionMode, MODE_ENV_VAR};

const BIND_ENV_VAR: &str = "COLLOQUY_BIND";
const PERSONAS_ENV_VAR: &str = "COLLOQUY_PERSONAS";
const STATIC_DIR_ENV_VAR: &str = "COLLOQUY_STATIC_DIR";
/// Set by the Lambda runtime; its presence selects the Lambda adapter.
const LAMBDA_ENV_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub mode: ExecutionMode,
    pub bind_addr: SocketAddr,
    /// Persona definitions file. `None` uses the built-in set.
    pub personas_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Unset variables
    /// take their defaults; set but invalid ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mode: ExecutionMode = match lookup(MODE_ENV_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| eyre::eyre!("invalid {MODE_ENV_VAR}: {e}"))?,
            None => ExecutionMode::default(),
        };

        let bind = lookup(BIND_ENV_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid {BIND_ENV_VAR} {bind:?}: {e}"))?;

        let personas_path = lookup(PERSONAS_ENV_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let static_dir = lookup(STATIC_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            mode,
            bind_addr,
            personas_path,
            static_dir,
            lambda: lookup(LAMBDA_ENV_VAR).is_some(),
        })
    }
}
