//! # lp-core
//!
//! Core types, error definitions, and rounding helpers shared by every
//! other crate in the workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Ceiling arithmetic over integer percentages.
pub mod rounding;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A price in whole currency units.
pub type Cost = u32;

/// A rider's age in whole years.
pub type Age = u32;

/// A percentage expressed as a whole number (e.g. 35 = 35 %).
pub type Percent = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rounding::{ceil_percent, ceil_percent_chain};
