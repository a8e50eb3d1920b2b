//! Prelude module for the jalali_calendar crate.
//!
//! Re-exports the derive macros used across modules.

pub use derive_more::Display;
