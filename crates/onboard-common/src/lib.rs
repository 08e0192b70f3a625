//! Common infrastructure for the switch onboarding toolkit.
//!
//! This crate provides the shared pieces used by the onboarding crates:
//!
//! - [`error`]: Error types for onboarding operations
//!
//! Planning code never touches the inventory database directly; everything
//! here is plain data and plain errors, so the crate stays free of I/O.

pub mod error;

// Re-export commonly used items at crate root
pub use error::{OnboardError, OnboardResult};
