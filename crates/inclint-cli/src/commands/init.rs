//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# inclint configuration
# See https://github.com/example/inclint for documentation

# Severity threshold for a non-zero exit code (error, warning, info)
fail_on = "error"

[scanner]
# Root directory to scan (default: current directory)
# root = "./src"

# Glob patterns to exclude from scanning
exclude = [
    "**/target/**",
    "**/build/**",
]

# Scan string literals (default: true)
report_strings = true

# Exact whole-text exemptions; a unit whose text equals one of these
# is never reported
skip_words = []

# What a finding reports as its offending text: "unit" (the whole
# unit text) or "term" (the bare matched term)
offending = "unit"

# Severity assigned to findings
severity = "warning"

# Override the built-in term dictionary (order is matching order):
# [[terms]]
# term = "whitelist"
# suggest = "allowlist"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("inclint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created inclint.toml");
    println!("\nNext steps:");
    println!("  1. Edit inclint.toml to configure the scanner");
    println!("  2. Run: inclint check");

    Ok(())
}
