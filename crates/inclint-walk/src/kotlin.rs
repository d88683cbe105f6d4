//! Kotlin language walker using Tree-sitter.
//!
//! Surfaces the constructs the original inclusive-language inspection
//! visited: package directives, class/object/function/property declaration
//! names, string literals, and comments.

use inclint_core::{Location, TextualUnit, UnitKind};
use std::path::PathBuf;
use tree_sitter::{Language, Node, Parser};

use crate::walker::{SourceWalker, WalkError};

/// Walks Kotlin source via the `tree-sitter-kotlin-ng` grammar.
pub struct KotlinWalker {
    language: Language,
}

impl KotlinWalker {
    /// Creates a new Kotlin walker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn location(node: &Node<'_>) -> Location {
        let start = node.start_position();
        Location::new(PathBuf::new(), start.row + 1, start.column + 1)
            .with_span(node.start_byte(), node.end_byte() - node.start_byte())
    }

    /// Finds the declared name of a declaration node.
    ///
    /// Property declarations nest the identifier inside a
    /// `variable_declaration` child, so one extra level is checked.
    fn declared_identifier<'t>(node: &Node<'t>) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "identifier" {
                return Some(child);
            }
            if child.kind() == "variable_declaration" {
                let mut inner = child.walk();
                for grandchild in child.children(&mut inner) {
                    if grandchild.kind() == "identifier" {
                        return Some(grandchild);
                    }
                }
            }
        }
        None
    }

    fn collect(node: &Node<'_>, src: &[u8], units: &mut Vec<TextualUnit>) {
        match node.kind() {
            "package_header" => {
                units.push(TextualUnit::new(
                    Self::text(node, src).trim_end(),
                    UnitKind::PackageDeclaration,
                    Self::location(node),
                ));
                return;
            }
            "class_declaration" | "object_declaration" | "function_declaration"
            | "property_declaration" => {
                if let Some(ident) = Self::declared_identifier(node) {
                    units.push(TextualUnit::new(
                        Self::text(&ident, src),
                        UnitKind::Identifier,
                        Self::location(&ident),
                    ));
                }
                // fall through: bodies may hold nested declarations,
                // strings, and comments
            }
            "string_literal" | "line_string_literal" | "multi_line_string_literal" => {
                units.push(TextualUnit::new(
                    Self::text(node, src),
                    UnitKind::StringLiteral,
                    Self::location(node),
                ));
                return;
            }
            "line_comment" | "multiline_comment" | "block_comment" | "comment" => {
                units.push(TextualUnit::new(
                    Self::text(node, src).trim_end(),
                    UnitKind::Comment,
                    Self::location(node),
                ));
                return;
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            Self::collect(&child, src, units);
        }
    }
}

impl Default for KotlinWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceWalker for KotlinWalker {
    fn language_id(&self) -> &'static str {
        "kotlin"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".kt", ".kts"]
    }

    fn units(&self, source: &str) -> Result<Vec<TextualUnit>, WalkError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| WalkError::Language {
                message: e.to_string(),
            })?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or_else(|| WalkError::Parse {
            message: "tree-sitter returned no tree".to_string(),
        })?;

        let mut units = Vec::new();
        Self::collect(&tree.root_node(), src, &mut units);
        Ok(units)
    }
}
