//! Locating and loading the effective configuration.
//!
//! The CLI picks one configuration source per run, in priority order: the
//! `--config` flag, a project-level file found by [`Config::locate`]
//! (`inclint.toml` / `.inclint.toml`), the global `~/.inclint/config.toml`,
//! and finally the built-in defaults. Loading happens here too, so a
//! malformed file fails the run before any file is scanned.

use anyhow::{Context, Result};
use inclint_core::Config;
use std::path::{Path, PathBuf};

/// The effective configuration together with where it came from.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// Which source supplied it.
    pub origin: Origin,
}

/// Which source supplied the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The `--config` flag.
    Flag(PathBuf),
    /// A config file in the scanned project.
    Project(PathBuf),
    /// The global config directory (`~/.inclint/`).
    Global(PathBuf),
    /// No file found; built-in defaults.
    Defaults,
}

impl Origin {
    /// The file backing this origin, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Flag(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Defaults => None,
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(p) => write!(f, "--config {}", p.display()),
            Self::Project(p) => write!(f, "project config {}", p.display()),
            Self::Global(p) => write!(f, "global config {}", p.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Resolves and loads the configuration for a scan of `project_dir`.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed. A
/// missing file is only an error for the `--config` flag; the other
/// sources simply fall through.
pub fn load(project_dir: &Path, flag: Option<&Path>) -> Result<ResolvedConfig> {
    load_from(project_dir, flag, global_config_dir())
}

/// Testable core: takes the global directory as a parameter so tests do
/// not race on `$HOME` or env vars.
fn load_from(
    project_dir: &Path,
    flag: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> Result<ResolvedConfig> {
    let origin = if let Some(path) = flag {
        Origin::Flag(path.to_path_buf())
    } else if let Some(path) = Config::locate(project_dir) {
        Origin::Project(path)
    } else if let Some(path) = global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|path| path.exists())
    {
        Origin::Global(path)
    } else {
        Origin::Defaults
    };

    let config = match origin.path() {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };

    tracing::debug!("Configuration source: {origin}");
    Ok(ResolvedConfig { config, origin })
}

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Returns the global config directory path.
///
/// Resolution: `$INCLINT_CONFIG_DIR` > `~/.inclint/`
///
/// The env var override enables testing and custom CI setups.
#[must_use]
fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("INCLINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".inclint"))
}
