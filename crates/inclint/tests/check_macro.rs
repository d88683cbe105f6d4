//! Integration test for the `inclint::check!()` macro.
//!
//! Verifies the full pipeline: macro expansion → config load → file
//! discovery → scan → pass. The config points the scanner at a clean
//! fixture tree so the generated test passes deterministically.

inclint::check!(config = "crates/inclint/tests/test-config.toml");
