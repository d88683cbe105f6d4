//! The scan engine: file discovery, walker dispatch, finding aggregation.

use inclint_core::{scan, Config, ConfigError, ScanConfig, ScanReport, TermDictionary};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::walker::SourceWalker;

/// Errors that can occur while running the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern error during file discovery.
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// A walker failed on a source file.
    #[error("walk error in {path}: {message}")]
    Walk {
        /// File that failed to walk.
        path: PathBuf,
        /// Walker error message.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    root: Option<PathBuf>,
    walkers: Vec<Box<dyn SourceWalker>>,
    exclude_patterns: Vec<String>,
    scan_config: Option<ScanConfig>,
    dictionary: Option<TermDictionary>,
    fail_on_parse_error: bool,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder from a parsed configuration file: root, excludes,
    /// scan options, and the term dictionary.
    ///
    /// # Errors
    ///
    /// Fails fast when the config's dictionary override is invalid, before
    /// any unit is scanned.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new()
            .root(config.scanner.root.clone())
            .excludes(config.scanner.exclude.clone())
            .scan_config(config.scan_config())
            .dictionary(config.dictionary()?))
    }

    /// Sets the root directory to scan.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Registers a walker.
    #[must_use]
    pub fn walker<W: SourceWalker + 'static>(mut self, walker: W) -> Self {
        self.walkers.push(Box::new(walker));
        self
    }

    /// Registers a boxed walker.
    #[must_use]
    pub fn walker_box(mut self, walker: Box<dyn SourceWalker>) -> Self {
        self.walkers.push(walker);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the scan configuration.
    #[must_use]
    pub fn scan_config(mut self, config: ScanConfig) -> Self {
        self.scan_config = Some(config);
        self
    }

    /// Sets the term dictionary.
    #[must_use]
    pub fn dictionary(mut self, dictionary: TermDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Sets whether unparseable files abort the run (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Engine, EngineError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/build/**".to_string()]);
        }

        Ok(Engine {
            root,
            walkers: self.walkers,
            exclude_patterns,
            scan_config: self.scan_config.unwrap_or_default(),
            dictionary: self.dictionary.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// Discovers source files, drives walkers, and aggregates findings.
///
/// Use [`Engine::builder()`] to construct an instance. The configuration
/// and dictionary are immutable for the engine's lifetime; each unit is
/// scanned by the pure core function, so a run has no cross-unit state.
pub struct Engine {
    root: PathBuf,
    walkers: Vec<Box<dyn SourceWalker>>,
    exclude_patterns: Vec<String>,
    scan_config: ScanConfig,
    dictionary: TermDictionary,
    fail_on_parse_error: bool,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the root directory being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans all discovered files and returns the aggregated report.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or if a walker
    /// fails and `fail_on_parse_error` is set.
    pub fn run(&self) -> Result<ScanReport, EngineError> {
        info!("Starting scan at {:?}", self.root);

        let mut report = ScanReport::new();
        let mut claimed: Vec<PathBuf> = Vec::new();

        for walker in &self.walkers {
            let files = self.discover_files(walker.as_ref())?;
            debug!(
                "Found {} {} file(s) to scan",
                files.len(),
                walker.language_id()
            );

            for file in files {
                if claimed.contains(&file) {
                    continue;
                }
                claimed.push(file.clone());

                match self.scan_file(walker.as_ref(), &file) {
                    Ok(findings) => {
                        report.findings.extend(findings);
                        report.files_checked += 1;
                    }
                    Err(EngineError::Walk { path, message }) => {
                        warn!("Failed to walk {}: {}", path.display(), message);
                        if self.fail_on_parse_error {
                            return Err(EngineError::Walk { path, message });
                        }
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        report.findings.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Scan complete: {} finding(s) in {} file(s)",
            report.findings.len(),
            report.files_checked
        );

        Ok(report)
    }

    /// Walks one file and scans every unit it yields.
    fn scan_file(
        &self,
        walker: &dyn SourceWalker,
        path: &Path,
    ) -> Result<Vec<inclint_core::Finding>, EngineError> {
        debug!("Scanning: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let units = walker.units(&content).map_err(|e| EngineError::Walk {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

        let mut findings = Vec::new();
        for mut unit in units {
            unit.location.file = relative.clone();
            if let Some(finding) = scan(&unit, &self.scan_config, &self.dictionary) {
                findings.push(finding);
            }
        }

        Ok(findings)
    }

    /// Discovers the files a walker handles, honoring exclude patterns.
    fn discover_files(&self, walker: &dyn SourceWalker) -> Result<Vec<PathBuf>, EngineError> {
        let mut files = Vec::new();

        for ext in walker.extensions() {
            let pattern = format!("{}/**/*{ext}", self.root.display());
            for entry in glob::glob(&pattern)? {
                let path = entry.map_err(|e| EngineError::Io(e.into_error()))?;
                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KotlinWalker, RustWalker};
    use inclint_core::{Severity, UnitKind};
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn engine_for(dir: &TempDir) -> Engine {
        Engine::builder()
            .root(dir.path())
            .walker(RustWalker::new())
            .walker(KotlinWalker::new())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_defaults() {
        let engine = Engine::builder().root(".").build().unwrap();
        assert!(engine.root().exists());
        assert!(engine.should_exclude(Path::new("/foo/target/debug/main.rs")));
        assert!(engine.should_exclude(Path::new("/foo/build/out.kt")));
        assert!(!engine.should_exclude(Path::new("/foo/src/lib.rs")));
    }

    #[test]
    fn scans_rust_file_and_reports_relative_path() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "src/lib.rs", "fn load_whitelist() {}\n");

        let report = engine_for(&tmp).run().unwrap();
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].term, "whitelist");
        assert_eq!(report.findings[0].location.file, PathBuf::from("src/lib.rs"));
    }

    #[test]
    fn scans_kotlin_file() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "Main.kt", "class MasterController\n");

        let report = engine_for(&tmp).run().unwrap();
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].suggestion, "main");
        assert_eq!(report.findings[0].kind, UnitKind::Identifier);
    }

    #[test]
    fn findings_sorted_by_file_then_line() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "b.rs", "fn blacklist_a() {}\nfn blacklist_b() {}\n");
        write(&tmp, "a.rs", "fn use_dummy() {}\n");

        let report = engine_for(&tmp).run().unwrap();
        let files: Vec<_> = report
            .findings
            .iter()
            .map(|f| (f.location.file.clone(), f.location.line))
            .collect();
        assert_eq!(
            files,
            vec![
                (PathBuf::from("a.rs"), 1),
                (PathBuf::from("b.rs"), 1),
                (PathBuf::from("b.rs"), 2),
            ]
        );
    }

    #[test]
    fn excluded_directories_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "src/ok.rs", "fn whitelist_entry() {}\n");
        write(&tmp, "target/gen.rs", "fn whitelist_entry() {}\n");

        let report = engine_for(&tmp).run().unwrap();
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.findings.len(), 1);
    }

    #[test]
    fn unparseable_file_is_skipped_by_default() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "bad.rs", "fn {");
        write(&tmp, "good.rs", "fn use_dummy() {}\n");

        let report = engine_for(&tmp).run().unwrap();
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.findings.len(), 1);
    }

    #[test]
    fn unparseable_file_aborts_when_configured() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "bad.rs", "fn {");

        let engine = Engine::builder()
            .root(tmp.path())
            .walker(RustWalker::new())
            .fail_on_parse_error(true)
            .build()
            .unwrap();
        assert!(matches!(engine.run(), Err(EngineError::Walk { .. })));
    }

    #[test]
    fn from_config_carries_scan_options() {
        let config = Config::parse(
            r#"
[scanner]
report_strings = false
skip_words = ["whitelist"]
severity = "error"
"#,
        )
        .unwrap();

        let tmp = TempDir::new().unwrap();
        write(&tmp, "lib.rs", "fn whitelist() {}\nfn blacklist() {}\n");
        write(&tmp, "s.rs", "fn f() { let _ = \"master\"; }\n");

        let engine = EngineBuilder::from_config(&config)
            .unwrap()
            .root(tmp.path())
            .walker(RustWalker::new())
            .build()
            .unwrap();

        let report = engine.run().unwrap();
        // whitelist exempted, string literal gated off, blacklist reported
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].term, "blacklist");
        assert_eq!(report.findings[0].severity, Severity::Error);
    }

    #[test]
    fn from_config_rejects_invalid_dictionary() {
        let config = Config::parse(
            r#"
[[terms]]
term = "master"
suggest = "main"

[[terms]]
term = "MASTER"
suggest = "primary"
"#,
        )
        .unwrap();
        assert!(EngineBuilder::from_config(&config).is_err());
    }

    #[test]
    fn duplicate_units_produce_duplicate_findings() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "dup.rs", "fn use_dummy() {}\nmod x { fn use_dummy() {} }\n");

        let report = engine_for(&tmp).run().unwrap();
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].term, report.findings[1].term);
    }
}
