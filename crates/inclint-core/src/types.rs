//! Core types for findings and scan results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::unit::UnitKind;

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail a run.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown severity `{other}`. Valid values: error, warning, info"
            )),
        }
    }
}

/// Source code location of a textual unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the scan root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in the file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A non-inclusive terminology finding produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The reported text (whole unit text or the bare matched term,
    /// depending on configuration).
    pub offending_text: String,
    /// The canonical dictionary term that matched.
    pub term: String,
    /// Suggested inclusive replacement from the dictionary.
    pub suggestion: String,
    /// Kind of the unit the term was found in.
    pub kind: UnitKind,
    /// Severity of this finding.
    pub severity: Severity,
    /// Location of the whole unit in the source.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Formats the finding as a multi-line block for terminal and test
    /// reports.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "non-inclusive-term ({}) at {}:{}:{}\n",
            self.kind,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        let _ = writeln!(output, "  = help: replace '{}' with '{}'", self.term, self.suggestion);
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.term,
            self.message
        )
    }
}

/// Converts a Finding to a miette Diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct FindingDiagnostic {
    message: String,
    #[help]
    help: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Finding> for FindingDiagnostic {
    fn from(finding: &Finding) -> Self {
        Self {
            message: finding.message.clone(),
            help: format!("consider '{}'", finding.suggestion),
            span: SourceSpan::from((finding.location.offset, finding.location.length)),
            label_message: format!("contains '{}'", finding.term),
        }
    }
}

/// Result of scanning a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// All findings produced.
    pub findings: Vec<Finding>,
    /// Number of files scanned.
    pub files_checked: usize,
}

impl ScanReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any findings at error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Checks if any findings meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_findings_at(&self, severity: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= severity)
    }

    /// Counts findings by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warnings = self
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();
        let infos = self
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Formats findings as a test failure report.
    ///
    /// Produces a human-readable multi-line report suitable for `panic!()`
    /// messages in `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Finding> = self
            .findings
            .iter()
            .filter(|f| f.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(report, "\n=== inclint: {} finding(s) ===\n", failing.len());

        for f in &failing {
            let _ = writeln!(report, "{}", f.format());
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {} error(s), {} warning(s), {} info(s) in {} file(s)",
            errors, warnings, infos, self.files_checked
        );

        report
    }

    /// Adds findings from another report.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding(severity: Severity) -> Finding {
        Finding {
            offending_text: "whitelist".to_string(),
            term: "whitelist".to_string(),
            suggestion: "allowlist".to_string(),
            kind: UnitKind::Identifier,
            severity,
            location: Location::new(PathBuf::from("src/lib.rs"), 42, 10),
            message: "'whitelist' contains non-inclusive term 'whitelist'. \
                      Consider using 'allowlist' instead."
                .to_string(),
        }
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn severity_parses_from_str() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn finding_format_includes_help() {
        let f = make_finding(Severity::Warning);
        let formatted = f.format();
        assert!(formatted.contains("= help: replace 'whitelist' with 'allowlist'"));
        assert!(formatted.contains("(identifier) at src/lib.rs:42:10"));
    }

    #[test]
    fn diagnostic_conversion_carries_span() {
        let f = make_finding(Severity::Warning);
        let f = Finding {
            location: f.location.with_span(100, 9),
            ..f
        };
        let diag = FindingDiagnostic::from(&f);
        assert!(diag.help.contains("allowlist"));
        assert_eq!(diag.span.offset(), 100);
        assert_eq!(diag.span.len(), 9);
    }

    #[test]
    fn has_findings_at_respects_threshold() {
        let mut report = ScanReport::new();
        report.findings.push(make_finding(Severity::Warning));
        assert!(!report.has_findings_at(Severity::Error));
        assert!(report.has_findings_at(Severity::Warning));
        assert!(report.has_findings_at(Severity::Info));
    }

    #[test]
    fn count_by_severity_buckets() {
        let mut report = ScanReport::new();
        report.findings.push(make_finding(Severity::Error));
        report.findings.push(make_finding(Severity::Warning));
        report.findings.push(make_finding(Severity::Warning));
        assert_eq!(report.count_by_severity(), (1, 2, 0));
    }

    #[test]
    fn format_test_report_filters_by_severity() {
        let mut report = ScanReport::new();
        report.files_checked = 3;
        report.findings.push(make_finding(Severity::Warning));
        report.findings.push(make_finding(Severity::Error));

        let text = report.format_test_report(Severity::Error);
        assert!(text.contains("1 finding(s)"));
        assert!(text.contains("1 error(s)"));
        assert!(text.contains("1 warning(s)"));
        assert!(text.contains("3 file(s)"));
    }

    #[test]
    fn test_report_renders_findings_via_format() {
        let mut report = ScanReport::new();
        let finding = make_finding(Severity::Error);
        report.findings.push(finding.clone());

        let text = report.format_test_report(Severity::Error);
        assert!(text.contains(&finding.format()));
    }

    #[test]
    fn extend_merges_reports() {
        let mut a = ScanReport::new();
        a.files_checked = 1;
        a.findings.push(make_finding(Severity::Warning));

        let mut b = ScanReport::new();
        b.files_checked = 2;
        b.findings.push(make_finding(Severity::Error));

        a.extend(b);
        assert_eq!(a.files_checked, 3);
        assert_eq!(a.findings.len(), 2);
    }
}
