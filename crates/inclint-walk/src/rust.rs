//! Rust language walker using `syn`.
//!
//! Surfaces declared names (functions, types, modules, consts, statics,
//! named struct fields), string literals, and `//` comments. Comments are
//! collected in a separate line pass because `syn` drops them from the AST.

use inclint_core::{Location, TextualUnit, UnitKind};
use proc_macro2::Span;
use std::path::PathBuf;
use syn::visit::Visit;
use syn::{
    Fields, ItemConst, ItemEnum, ItemFn, ItemMod, ItemStatic, ItemStruct, ItemTrait, ItemType,
    LitStr,
};

use crate::walker::{SourceWalker, WalkError};

/// Walks Rust source via the `syn` AST.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustWalker;

impl RustWalker {
    /// Creates a new Rust walker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SourceWalker for RustWalker {
    fn language_id(&self) -> &'static str {
        "rust"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".rs"]
    }

    fn units(&self, source: &str) -> Result<Vec<TextualUnit>, WalkError> {
        let ast = syn::parse_file(source).map_err(|e| WalkError::Parse {
            message: e.to_string(),
        })?;

        let mut visitor = RustVisitor {
            source,
            line_starts: line_starts(source),
            units: Vec::new(),
        };
        visitor.visit_file(&ast);

        let mut units = visitor.units;
        units.extend(comment_units(source));
        Ok(units)
    }
}

/// Byte offsets of each line start, for span-to-offset conversion.
fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Line pass for `//` comments, which `syn` does not preserve.
///
/// The comment text includes the `//` marker so the reported span covers
/// the whole comment. A `//` inside a string literal on the same line is
/// misread as a comment start; the scanner would have matched the literal
/// anyway, so the worst case is a duplicate finding with a Comment kind.
fn comment_units(source: &str) -> Vec<TextualUnit> {
    let mut units = Vec::new();
    let mut offset = 0;

    // split_inclusive keeps the terminator, so `offset` tracks exact byte
    // positions on both LF and CRLF files
    for (row, raw) in source.split_inclusive('\n').enumerate() {
        let line = raw.trim_end_matches(['\n', '\r']);
        if let Some(idx) = line.find("//") {
            let text = line[idx..].trim_end();
            if !text.is_empty() {
                let location = Location::new(PathBuf::new(), row + 1, idx + 1)
                    .with_span(offset + idx, text.len());
                units.push(TextualUnit::new(text, UnitKind::Comment, location));
            }
        }
        offset += raw.len();
    }

    units
}

struct RustVisitor<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
    units: Vec<TextualUnit>,
}

impl RustVisitor<'_> {
    fn location(&self, span: Span, length: usize) -> Location {
        let start = span.start();
        let line_start = self
            .line_starts
            .get(start.line.saturating_sub(1))
            .copied()
            .unwrap_or(0);
        // proc-macro2 columns count characters; convert to a byte offset
        // within the line before adding
        let rest = self.source.get(line_start..).unwrap_or("");
        let byte_column = rest
            .char_indices()
            .nth(start.column)
            .map_or(rest.len(), |(i, _)| i);
        Location::new(PathBuf::new(), start.line, start.column + 1)
            .with_span(line_start + byte_column, length)
    }

    fn push_ident(&mut self, ident: &syn::Ident) {
        let text = ident.to_string();
        let location = self.location(ident.span(), text.len());
        self.units
            .push(TextualUnit::new(text, UnitKind::Identifier, location));
    }
}

impl<'ast> Visit<'ast> for RustVisitor<'_> {
    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        self.push_ident(&node.sig.ident);
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_item_struct(&mut self, node: &'ast ItemStruct) {
        self.push_ident(&node.ident);
        if let Fields::Named(fields) = &node.fields {
            for field in &fields.named {
                if let Some(ident) = &field.ident {
                    self.push_ident(ident);
                }
            }
        }
        syn::visit::visit_item_struct(self, node);
    }

    fn visit_item_enum(&mut self, node: &'ast ItemEnum) {
        self.push_ident(&node.ident);
        syn::visit::visit_item_enum(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast ItemTrait) {
        self.push_ident(&node.ident);
        syn::visit::visit_item_trait(self, node);
    }

    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        self.push_ident(&node.ident);
        syn::visit::visit_item_mod(self, node);
    }

    fn visit_item_const(&mut self, node: &'ast ItemConst) {
        self.push_ident(&node.ident);
        syn::visit::visit_item_const(self, node);
    }

    fn visit_item_static(&mut self, node: &'ast ItemStatic) {
        self.push_ident(&node.ident);
        syn::visit::visit_item_static(self, node);
    }

    fn visit_item_type(&mut self, node: &'ast ItemType) {
        self.push_ident(&node.ident);
        syn::visit::visit_item_type(self, node);
    }

    fn visit_lit_str(&mut self, node: &'ast LitStr) {
        let text = node.token().to_string();
        let location = self.location(node.span(), text.len());
        self.units
            .push(TextualUnit::new(text, UnitKind::StringLiteral, location));
        syn::visit::visit_lit_str(self, node);
    }
}
