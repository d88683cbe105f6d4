//! # inclint
//!
//! Inclusive terminology linter: flags non-inclusive terms (`whitelist`,
//! `master`/`slave`, ...) in identifiers, string literals, comments, and
//! package directives, and suggests an inclusive replacement for each.
//!
//! This is the main facade crate that re-exports the core engine and the
//! source walkers.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! inclint = "0.1"
//! ```
//!
//! ```rust,ignore
//! // tests/terminology.rs
//! inclint::check!();
//! ```
//!
//! This runs inclint as part of `cargo test`. Configure via `inclint.toml`.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use inclint::{default_walkers, Engine, TermDictionary};
//!
//! let mut builder = Engine::builder().root("./src");
//! for walker in default_walkers() {
//!     builder = builder.walker_box(walker);
//! }
//! let report = builder.build()?.run()?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and the walkers/engine
pub use inclint_core::*;
pub use inclint_walk::{
    default_walkers, Engine, EngineBuilder, EngineError, KotlinWalker, RustWalker, SourceWalker,
    WalkError,
};

mod runner;

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::run_check;
}

/// Generates a `#[test]` that runs inclint over the project.
///
/// The test panics with a formatted report when findings at or above the
/// effective fail-on severity exist (macro argument > config file >
/// `"error"`).
///
/// ```rust,ignore
/// // tests/terminology.rs
/// inclint::check!();
///
/// // or with explicit options:
/// inclint::check!(config = "lint/inclint.toml", fail_on = "warning");
/// ```
#[macro_export]
macro_rules! check {
    () => {
        #[test]
        fn inclint_check() {
            $crate::__internal::run_check(None, None);
        }
    };
    (config = $config:literal $(,)?) => {
        #[test]
        fn inclint_check() {
            $crate::__internal::run_check(Some($config), None);
        }
    };
    (fail_on = $fail_on:literal $(,)?) => {
        #[test]
        fn inclint_check() {
            $crate::__internal::run_check(None, Some($fail_on));
        }
    };
    (config = $config:literal, fail_on = $fail_on:literal $(,)?) => {
        #[test]
        fn inclint_check() {
            $crate::__internal::run_check(Some($config), Some($fail_on));
        }
    };
}
