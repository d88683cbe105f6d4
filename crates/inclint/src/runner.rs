//! Internal runner for `check!()` macro integration.
//!
//! This module is `#[doc(hidden)]` and not part of the public API.
//! It is called by the generated test function from `inclint::check!()`.

use inclint_core::{Config, Severity};
use inclint_walk::{default_walkers, EngineBuilder};
use std::path::{Path, PathBuf};

/// Runs the inclusive-terminology scan as part of `cargo test`.
///
/// Called by the `check!()` macro-generated test function.
/// Panics with a formatted report if findings are found.
///
/// # Panics
///
/// Panics if findings at or above `fail_on` severity are found,
/// or if the engine cannot be built.
pub fn run_check(config_path: Option<&str>, fail_on: Option<&str>) {
    let root = find_project_root();
    let content = read_config_content(&root, config_path);
    let config = parse_config(&content);

    let effective_fail_on = resolve_fail_on(fail_on, &config);

    let mut builder = EngineBuilder::from_config(&config)
        .unwrap_or_else(|e| panic!("inclint: invalid configuration: {e}"));

    // Scanner root is relative to the project root, not the test cwd
    if !config.scanner.root.is_absolute() {
        builder = builder.root(root.join(&config.scanner.root));
    }
    for walker in default_walkers() {
        builder = builder.walker_box(walker);
    }

    let engine = builder.build().unwrap_or_else(|e| {
        panic!("inclint: failed to build engine: {e}");
    });

    let report = engine.run().unwrap_or_else(|e| {
        panic!("inclint: scan failed: {e}");
    });

    if report.has_findings_at(effective_fail_on) {
        let formatted = report.format_test_report(effective_fail_on);
        panic!("{formatted}");
    }
}

/// Reads the raw TOML content from the config file.
///
/// Returns an empty string if no config file is found.
fn read_config_content(root: &Path, explicit_path: Option<&str>) -> String {
    if let Some(path) = explicit_path {
        let full_path = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            root.join(path)
        };
        return std::fs::read_to_string(&full_path).unwrap_or_else(|e| {
            panic!(
                "inclint: failed to read config from {}: {e}",
                full_path.display()
            );
        });
    }

    match Config::locate(root) {
        Some(path) => std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("inclint: failed to read config from {}: {e}", path.display());
        }),
        None => String::new(),
    }
}

/// Parses a `Config` from TOML content.
fn parse_config(content: &str) -> Config {
    if content.is_empty() {
        return Config::default();
    }
    Config::parse(content).unwrap_or_else(|e| {
        panic!("inclint: failed to parse config: {e}");
    })
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);

        // Check if there's a workspace Cargo.toml above
        let mut candidate = manifest_path.as_path();
        loop {
            let cargo_toml = candidate.join("Cargo.toml");
            if cargo_toml.exists() && has_workspace_section(&cargo_toml) {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }

        // No workspace root found — use manifest dir itself
        return manifest_path;
    }

    // Fallback: current directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves the effective `fail_on` severity from macro arg > config > default.
fn resolve_fail_on(macro_arg: Option<&str>, config: &Config) -> Severity {
    match macro_arg {
        Some(name) => name
            .parse()
            .unwrap_or_else(|e: String| panic!("inclint: {e}")),
        None => config
            .fail_on()
            .unwrap_or_else(|e| panic!("inclint: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_fail_on_defaults_to_error() {
        let config = Config::default();
        assert_eq!(resolve_fail_on(None, &config), Severity::Error);
    }

    #[test]
    fn resolve_fail_on_from_config() {
        let config = Config::parse(r#"fail_on = "warning""#).unwrap();
        assert_eq!(resolve_fail_on(None, &config), Severity::Warning);
    }

    #[test]
    fn resolve_fail_on_macro_arg_overrides_config() {
        let config = Config::parse(r#"fail_on = "info""#).unwrap();
        // Explicit "warning" from macro overrides config "info"
        assert_eq!(resolve_fail_on(Some("warning"), &config), Severity::Warning);
    }

    #[test]
    #[should_panic(expected = "unknown severity")]
    fn resolve_fail_on_invalid_panics() {
        let config = Config::default();
        resolve_fail_on(Some("critical"), &config);
    }

    #[test]
    fn parse_config_empty_content_yields_defaults() {
        let config = parse_config("");
        assert!(config.scanner.report_strings);
        assert_eq!(config.dictionary().unwrap().len(), 10);
    }

    #[test]
    #[should_panic(expected = "failed to parse config")]
    fn parse_config_malformed_panics() {
        parse_config("[scanner\nroot = 1");
    }

    #[test]
    fn read_config_content_prefers_inclint_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("inclint.toml"), "fail_on = \"warning\"\n").unwrap();
        fs::write(tmp.path().join(".inclint.toml"), "fail_on = \"info\"\n").unwrap();

        let content = read_config_content(tmp.path(), None);
        assert!(content.contains("warning"));
    }

    #[test]
    fn read_config_content_missing_returns_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(read_config_content(tmp.path(), None).is_empty());
    }

    #[test]
    fn read_config_content_explicit_relative_path() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("lint")).unwrap();
        fs::write(tmp.path().join("lint/custom.toml"), "fail_on = \"info\"\n").unwrap();

        let content = read_config_content(tmp.path(), Some("lint/custom.toml"));
        assert!(content.contains("info"));
    }

    #[test]
    fn detects_workspace_section() {
        let tmp = TempDir::new().unwrap();
        let member = tmp.path().join("member.toml");
        fs::write(&member, "[package]\nname = \"x\"\n").unwrap();
        let ws = tmp.path().join("ws.toml");
        fs::write(&ws, "[workspace]\nmembers = []\n").unwrap();

        assert!(!has_workspace_section(&member));
        assert!(has_workspace_section(&ws));
    }
}
