//! Runtime configuration for the `folio` binary.
//!
//! Configuration is resolved once at process startup from command-line flags and environment
//! variables (optionally loaded from a `.env` file) and then passed into commands. Commands
//! never read the environment themselves.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Environment variable enabling pretty-printed JSON output.
pub const PRETTY_ENV: &str = "FOLIO_PRETTY";

/// Environment variable naming the bundled asset directory.
pub const ASSET_DIR_ENV: &str = "FOLIO_ASSET_DIR";

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pretty: bool,
    asset_dir: Option<PathBuf>,
}

impl RunConfig {
    /// Create a new `RunConfig`.
    ///
    /// `asset_dir`, when given, must be an existing directory.
    pub fn new(pretty: bool, asset_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = &asset_dir {
            if !dir.is_dir() {
                bail!("asset directory {} is not a directory", dir.display());
            }
        }
        Ok(Self { pretty, asset_dir })
    }

    /// Resolve configuration from flag values, falling back to environment values.
    ///
    /// Flags win over the environment. A `--pretty` flag can only switch pretty output on.
    pub fn resolve(
        pretty_flag: bool,
        asset_dir_flag: Option<PathBuf>,
        pretty_env: Option<String>,
        asset_dir_env: Option<String>,
    ) -> Result<Self> {
        let pretty = pretty_flag || pretty_from_env_value(pretty_env)?;
        let asset_dir = asset_dir_flag.or_else(|| asset_dir_from_env_value(asset_dir_env));
        Self::new(pretty, asset_dir)
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn asset_dir(&self) -> Option<&Path> {
        self.asset_dir.as_deref()
    }
}

/// Parse the pretty-output switch from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `false`.
pub fn pretty_from_env_value(value: Option<String>) -> Result<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => bail!("{PRETTY_ENV} must be a boolean (true/false/1/0), got '{other}'"),
    }
}

/// Parse the asset directory from an optional string value. Empty values count as unset.
pub fn asset_dir_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
