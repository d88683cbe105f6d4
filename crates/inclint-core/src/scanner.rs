//! The matching policy: one textual unit in, at most one finding out.

use crate::config::{OffendingText, ScanConfig};
use crate::dictionary::TermDictionary;
use crate::types::Finding;
use crate::unit::{TextualUnit, UnitKind};

/// Scans a single textual unit against the dictionary.
///
/// A pure function of its three inputs: no side effects, no cross-unit
/// state, safe to invoke concurrently from any number of workers sharing
/// the same config and dictionary.
///
/// Matching policy, in order:
///
/// 1. blank (empty or whitespace-only) text never reports;
/// 2. string-literal units are skipped entirely when `report_strings` is off;
/// 3. text exactly equal to a skip word is exempt regardless of content;
/// 4. dictionary terms are tested in insertion order as case-insensitive
///    substrings; the first containing term wins and scanning stops, so a
///    unit holding several offending terms reports exactly one finding.
#[must_use]
pub fn scan(
    unit: &TextualUnit,
    config: &ScanConfig,
    dictionary: &TermDictionary,
) -> Option<Finding> {
    if unit.text.trim().is_empty() {
        return None;
    }

    if unit.kind == UnitKind::StringLiteral && !config.report_strings {
        return None;
    }

    if config.skip_words.contains(&unit.text) {
        tracing::debug!(text = %unit.text, "skip word exemption");
        return None;
    }

    let lowered = unit.text.to_lowercase();
    for entry in dictionary.entries() {
        if lowered.contains(&entry.term) {
            return Some(make_finding(unit, config, &entry.term, &entry.suggestion));
        }
    }

    None
}

fn make_finding(
    unit: &TextualUnit,
    config: &ScanConfig,
    term: &str,
    suggestion: &str,
) -> Finding {
    let offending_text = match config.offending {
        OffendingText::Unit => unit.text.clone(),
        OffendingText::Term => term.to_string(),
    };

    let message = format!(
        "'{offending_text}' contains non-inclusive term '{term}'. \
         Consider using '{suggestion}' instead."
    );

    Finding {
        offending_text,
        term: term.to_string(),
        suggestion: suggestion.to_string(),
        kind: unit.kind,
        severity: config.severity,
        location: unit.location.clone(),
        message,
    }
}
