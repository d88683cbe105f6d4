//! Term dictionary: ordered mapping from non-inclusive term to suggestion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Default term table. Iteration order here is the matching order.
const DEFAULT_TERMS: &[(&str, &str)] = &[
    ("whitelist", "allowlist"),
    ("blacklist", "denylist"),
    ("master", "main"),
    ("slave", "replica/secondary"),
    ("blackbox", "opaquebox/closedbox"),
    ("whitebox", "transparentbox"),
    ("grandfathered", "legacy"),
    ("grandfather", "legacy"),
    ("sanity check", "confidence check"),
    ("dummy", "placeholder/mock"),
];

/// A single dictionary entry: canonical term and its inclusive replacement.
///
/// The suggestion is free-form and may carry slash-separated alternatives
/// (e.g. `"replica/secondary"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    /// Canonical non-inclusive term, matched case-insensitively.
    pub term: String,
    /// Suggested inclusive replacement.
    #[serde(rename = "suggest")]
    pub suggestion: String,
}

/// Errors raised while constructing a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Two entries normalize to the same canonical term.
    #[error("duplicate canonical term '{term}' in dictionary")]
    DuplicateTerm {
        /// The offending term.
        term: String,
    },

    /// An entry has an empty or whitespace-only term.
    #[error("dictionary entry {index} has a blank canonical term")]
    BlankTerm {
        /// Zero-based position of the offending entry.
        index: usize,
    },
}

/// Ordered, read-only mapping from canonical term to replacement suggestion.
///
/// Entries keep their insertion order so that first-match-wins tie-breaking
/// is deterministic; a side index gives O(1) lookup by canonical term.
/// Reconfiguration is whole-value replacement, never partial mutation, so a
/// dictionary can be shared freely across scanning threads.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    entries: Vec<TermEntry>,
    index: HashMap<String, usize>,
}

impl TermDictionary {
    /// Builds a dictionary from entries, normalizing terms to lower-case.
    ///
    /// # Errors
    ///
    /// Fails fast on blank or duplicate canonical terms rather than silently
    /// dropping entries.
    pub fn new(entries: impl IntoIterator<Item = TermEntry>) -> Result<Self, DictionaryError> {
        let mut normalized = Vec::new();
        let mut index = HashMap::new();

        for (i, entry) in entries.into_iter().enumerate() {
            let term = entry.term.trim().to_lowercase();
            if term.is_empty() {
                return Err(DictionaryError::BlankTerm { index: i });
            }
            if index.contains_key(&term) {
                return Err(DictionaryError::DuplicateTerm { term });
            }
            index.insert(term.clone(), normalized.len());
            normalized.push(TermEntry {
                term,
                suggestion: entry.suggestion,
            });
        }

        Ok(Self {
            entries: normalized,
            index,
        })
    }

    /// Returns the built-in reference dictionary.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = DEFAULT_TERMS.iter().map(|(term, suggestion)| TermEntry {
            term: (*term).to_string(),
            suggestion: (*suggestion).to_string(),
        });
        // Invariant: the built-in table has unique, non-blank terms.
        match Self::new(entries) {
            Ok(dict) => dict,
            Err(_) => unreachable!("built-in term table is statically valid"),
        }
    }

    /// Looks up the replacement suggestion for a canonical term,
    /// case-insensitively.
    #[must_use]
    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.index
            .get(&term.to_lowercase())
            .map(|&i| self.entries[i].suggestion.as_str())
    }

    /// Iterates canonical terms in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.term.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TermDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
