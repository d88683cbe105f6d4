//! # inclint-core
//!
//! Core engine for inclusive-language linting: the term dictionary, the
//! matching policy, and the finding types.
//!
//! The core does not parse any programming language. An external walker
//! (see `inclint-walk`) traverses a source file and surfaces a stream of
//! [`TextualUnit`] values; [`scan`] applies the dictionary's matching
//! policy to each unit and yields at most one [`Finding`] per unit.
//!
//! ## Example
//!
//! ```
//! use inclint_core::{scan, Location, ScanConfig, TermDictionary, TextualUnit, UnitKind};
//!
//! let dictionary = TermDictionary::builtin();
//! let config = ScanConfig::default();
//! let unit = TextualUnit::new("whitelist", UnitKind::Identifier, Location::default());
//!
//! let finding = scan(&unit, &config, &dictionary).unwrap();
//! assert_eq!(finding.suggestion, "allowlist");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dictionary;
mod scanner;
mod types;
mod unit;

pub use config::{
    Config, ConfigError, OffendingText, ScanConfig, ScannerSection, CONFIG_FILE_NAMES,
};
pub use dictionary::{DictionaryError, TermDictionary, TermEntry};
pub use scanner::scan;
pub use types::{Finding, FindingDiagnostic, Location, ScanReport, Severity};
pub use unit::{TextualUnit, UnitKind};
