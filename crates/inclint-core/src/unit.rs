//! Textual units produced by source walkers.

use serde::{Deserialize, Serialize};

use crate::types::Location;

/// Classification of a span of source text surfaced by a walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// A declared name (function, type, property, field).
    Identifier,
    /// A string literal expression.
    StringLiteral,
    /// A source comment.
    Comment,
    /// A package/module directive.
    PackageDeclaration,
    /// Anything else a walker decides to surface.
    Other,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier => write!(f, "identifier"),
            Self::StringLiteral => write!(f, "string-literal"),
            Self::Comment => write!(f, "comment"),
            Self::PackageDeclaration => write!(f, "package-declaration"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A span of source text worth inspecting, produced by an external walker
/// and consumed exactly once by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextualUnit {
    /// The text of the unit.
    pub text: String,
    /// What kind of syntactic construct the text came from.
    pub kind: UnitKind,
    /// Location of the whole unit within the source file.
    pub location: Location,
}

impl TextualUnit {
    /// Creates a new textual unit.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: UnitKind, location: Location) -> Self {
        Self {
            text: text.into(),
            kind,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_kind_display() {
        assert_eq!(UnitKind::StringLiteral.to_string(), "string-literal");
        assert_eq!(UnitKind::PackageDeclaration.to_string(), "package-declaration");
    }

    #[test]
    fn unit_construction() {
        let unit = TextualUnit::new("whitelist", UnitKind::Identifier, Location::default());
        assert_eq!(unit.text, "whitelist");
        assert_eq!(unit.kind, UnitKind::Identifier);
    }
}
