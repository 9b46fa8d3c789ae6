//! Deterministic name compatibility scoring.
//!
//! [`compatibility::calculate_compatibility`] is the whole algorithm; the
//! remaining modules carry configuration, logging and error plumbing for
//! services that expose it.

pub mod compatibility;
pub mod config;
pub mod error;
pub mod telemetry;

pub use compatibility::{
    calculate_compatibility, CompatibilityBreakdown, CompatibilityScorer, CompatibilityTier,
};
