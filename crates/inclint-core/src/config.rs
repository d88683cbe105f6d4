//! Configuration types and TOML loading for inclint.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::dictionary::{DictionaryError, TermDictionary, TermEntry};
use crate::types::Severity;

/// What a finding reports as its offending text.
///
/// Reference implementations have varied here, so this is a named,
/// configurable choice. The default reports the whole unit text so a reader
/// can locate the exact source span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffendingText {
    /// Report the full unit text (default).
    #[default]
    Unit,
    /// Report only the bare matched term.
    Term,
}

/// Immutable per-run scanner configuration.
///
/// Constructed once per scan run and shared read-only across workers.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether string-literal units are scanned at all.
    pub report_strings: bool,
    /// Exact whole-text exemptions that suppress reporting unconditionally.
    pub skip_words: HashSet<String>,
    /// What to report as the offending text.
    pub offending: OffendingText,
    /// Severity assigned to findings.
    pub severity: Severity,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            report_strings: true,
            skip_words: HashSet::new(),
            offending: OffendingText::Unit,
            severity: Severity::Warning,
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether string literals are scanned.
    #[must_use]
    pub fn report_strings(mut self, report: bool) -> Self {
        self.report_strings = report;
        self
    }

    /// Adds exact whole-text exemptions.
    #[must_use]
    pub fn skip_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Sets what to report as the offending text.
    #[must_use]
    pub fn offending(mut self, offending: OffendingText) -> Self {
        self.offending = offending;
        self
    }

    /// Sets the severity assigned to findings.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Top-level configuration file (`inclint.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for non-zero exit / test failure (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Scanner configuration.
    #[serde(default)]
    pub scanner: ScannerSection,

    /// Optional dictionary override. When present it replaces the built-in
    /// table wholesale; order in the file is the matching order.
    #[serde(default)]
    pub terms: Option<Vec<TermEntry>>,
}

/// `[scanner]` section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerSection {
    /// Root directory to scan (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from scanning.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether string-literal units are scanned (default: true).
    #[serde(default = "default_true")]
    pub report_strings: bool,

    /// Exact whole-text exemptions.
    #[serde(default)]
    pub skip_words: Vec<String>,

    /// What to report as the offending text: "unit" or "term".
    #[serde(default)]
    pub offending: OffendingText,

    /// Severity assigned to findings (default: warning).
    #[serde(default = "default_severity")]
    pub severity: Severity,
}

impl Default for ScannerSection {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            report_strings: true,
            skip_words: Vec::new(),
            offending: OffendingText::default(),
            severity: default_severity(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec!["**/target/**".to_string(), "**/build/**".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_severity() -> Severity {
    Severity::Warning
}

/// Project-level configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &["inclint.toml", ".inclint.toml"];

/// Configuration errors, surfaced before any unit is scanned.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Dictionary override is structurally invalid.
    #[error("invalid term dictionary: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Unknown severity name.
    #[error("{0}")]
    Severity(String),
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Returns the first configuration file present in `dir`, if any,
    /// checking [`CONFIG_FILE_NAMES`] in order.
    #[must_use]
    pub fn locate(dir: &std::path::Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.exists())
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Builds the immutable per-run scan configuration.
    #[must_use]
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            report_strings: self.scanner.report_strings,
            skip_words: self.scanner.skip_words.iter().cloned().collect(),
            offending: self.scanner.offending,
            severity: self.scanner.severity,
        }
    }

    /// Builds the term dictionary: the `[[terms]]` override when present,
    /// otherwise the built-in table.
    ///
    /// # Errors
    ///
    /// Fails fast on duplicate or blank canonical terms.
    pub fn dictionary(&self) -> Result<TermDictionary, ConfigError> {
        match &self.terms {
            Some(entries) => Ok(TermDictionary::new(entries.iter().cloned())?),
            None => Ok(TermDictionary::builtin()),
        }
    }

    /// Resolves the effective fail-on severity (default: error).
    ///
    /// # Errors
    ///
    /// Returns an error for unknown severity names.
    pub fn fail_on(&self) -> Result<Severity, ConfigError> {
        match self.fail_on.as_deref() {
            None => Ok(Severity::Error),
            Some(name) => name.parse().map_err(ConfigError::Severity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.scanner.report_strings);
        assert!(config.scanner.skip_words.is_empty());
        assert_eq!(config.fail_on().unwrap(), Severity::Error);
        assert_eq!(config.dictionary().unwrap().len(), 10);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
fail_on = "warning"

[scanner]
root = "./src"
exclude = ["**/generated/**"]
report_strings = false
skip_words = ["whitelist"]
offending = "term"
severity = "error"

[[terms]]
term = "whitelist"
suggest = "allowlist"

[[terms]]
term = "blacklist"
suggest = "denylist"
"#;
        let config = Config::parse(toml).expect("parse failed");
        assert_eq!(config.scanner.root, PathBuf::from("./src"));
        assert_eq!(config.fail_on().unwrap(), Severity::Warning);

        let scan = config.scan_config();
        assert!(!scan.report_strings);
        assert!(scan.skip_words.contains("whitelist"));
        assert_eq!(scan.offending, OffendingText::Term);
        assert_eq!(scan.severity, Severity::Error);

        let dict = config.dictionary().unwrap();
        assert_eq!(dict.len(), 2);
        let terms: Vec<&str> = dict.terms().collect();
        assert_eq!(terms, vec!["whitelist", "blacklist"]);
    }

    #[test]
    fn terms_override_preserves_file_order() {
        let toml = r#"
[[terms]]
term = "slave"
suggest = "replica"

[[terms]]
term = "master"
suggest = "main"
"#;
        let config = Config::parse(toml).expect("parse failed");
        let dict = config.dictionary().unwrap();
        let terms: Vec<&str> = dict.terms().collect();
        assert_eq!(terms, vec!["slave", "master"]);
    }

    #[test]
    fn duplicate_terms_fail_fast() {
        let toml = r#"
[[terms]]
term = "master"
suggest = "main"

[[terms]]
term = "MASTER"
suggest = "primary"
"#;
        let config = Config::parse(toml).expect("parse failed");
        assert!(matches!(
            config.dictionary(),
            Err(ConfigError::Dictionary(_))
        ));
    }

    #[test]
    fn unknown_fail_on_rejected() {
        let toml = r#"fail_on = "critical""#;
        let config = Config::parse(toml).expect("parse failed");
        assert!(matches!(config.fail_on(), Err(ConfigError::Severity(_))));
    }

    #[test]
    fn locate_prefers_undotted_name() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("inclint.toml"), "").unwrap();
        std::fs::write(tmp.path().join(".inclint.toml"), "").unwrap();
        assert_eq!(
            Config::locate(tmp.path()),
            Some(tmp.path().join("inclint.toml"))
        );
    }

    #[test]
    fn locate_falls_back_to_dotted_name() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".inclint.toml"), "").unwrap();
        assert_eq!(
            Config::locate(tmp.path()),
            Some(tmp.path().join(".inclint.toml"))
        );
    }

    #[test]
    fn locate_empty_dir_is_none() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert_eq!(Config::locate(tmp.path()), None);
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(
            Config::parse("[scanner\nroot = 1"),
            Err(ConfigError::Parse { .. })
        ));
    }
}
