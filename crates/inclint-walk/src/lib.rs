//! # inclint-walk
//!
//! Source walkers and the scan engine for inclint.
//!
//! The core matching policy in `inclint-core` is language-agnostic: it
//! consumes a flat stream of textual units. This crate provides the external
//! collaborators that produce that stream ([`RustWalker`] over `syn`,
//! [`KotlinWalker`] over Tree-sitter) and the [`Engine`] that discovers
//! files, drives the walkers, and aggregates findings into a report.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod kotlin;
mod rust;
mod walker;

pub use engine::{Engine, EngineBuilder, EngineError};
pub use kotlin::KotlinWalker;
pub use rust::RustWalker;
pub use walker::{SourceWalker, WalkError};

/// Returns the walkers registered by default: Rust and Kotlin.
#[must_use]
pub fn default_walkers() -> Vec<Box<dyn SourceWalker>> {
    vec![Box::new(RustWalker::new()), Box::new(KotlinWalker::new())]
}
