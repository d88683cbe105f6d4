//! The walker trait and its error type.
//!
//! `SourceWalker` is the extension point for adding new languages.
//! Implement it to teach inclint which spans of a source file are worth
//! handing to the scanner.

use inclint_core::TextualUnit;
use thiserror::Error;

/// Errors raised while walking a source file.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The source could not be parsed.
    #[error("parse error: {message}")]
    Parse {
        /// Parser error message.
        message: String,
    },

    /// The language grammar could not be loaded.
    #[error("language setup failed: {message}")]
    Language {
        /// Underlying error message.
        message: String,
    },
}

/// Trait for language-specific unit extraction.
///
/// A walker receives raw source text and returns the textual units worth
/// inspecting: declared names, string literals, comments, package
/// directives. It decides traversal policy; the scanner decides matching
/// policy. Walkers carry no per-file state and are safe to share across
/// threads.
pub trait SourceWalker: Send + Sync {
    /// Language identifier (e.g., `"rust"`, `"kotlin"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this walker handles (e.g., `&[".kt", ".kts"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts the textual units from source code.
    ///
    /// Unit locations are file-relative spans; the engine fills in the
    /// file path before scanning.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot be parsed.
    fn units(&self, source: &str) -> Result<Vec<TextualUnit>, WalkError>;
}
