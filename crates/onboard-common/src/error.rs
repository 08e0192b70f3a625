//! Error types for onboarding operations.
//!
//! This module defines the error types used throughout the onboarding crates.
//! All errors implement `std::error::Error` via `thiserror`.

use thiserror::Error;

/// Result type alias for onboarding operations.
pub type OnboardResult<T> = Result<T, OnboardError>;

/// Errors that can occur while planning an onboarding run.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Interface name carries no numeric segment to remap.
    #[error("No numeric segment found in interface name '{name}'")]
    NoNumericSegment {
        /// The offending interface name.
        name: String,
    },

    /// Stack member count below the minimum of one.
    #[error("Stack member count must be >= 1 (got {count})")]
    InvalidMemberCount {
        /// The rejected member count.
        count: u32,
    },

    /// Device model slug not present in the catalog.
    #[error("Unknown device model '{slug}'")]
    UnknownModel {
        /// The unrecognized model slug.
        slug: String,
    },

    /// Interface lookup on a planned device failed.
    #[error("Interface '{name}' not found on device '{device}'")]
    InterfaceNotFound {
        /// The device whose interface list was searched.
        device: String,
        /// The interface name that was looked up.
        name: String,
    },

    /// Request field failed validation.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },
}

impl OnboardError {
    /// Creates a no-numeric-segment error.
    pub fn no_numeric_segment(name: impl Into<String>) -> Self {
        Self::NoNumericSegment { name: name.into() }
    }

    /// Creates an unknown-model error.
    pub fn unknown_model(slug: impl Into<String>) -> Self {
        Self::UnknownModel { slug: slug.into() }
    }

    /// Creates an interface-not-found error.
    pub fn interface_not_found(device: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InterfaceNotFound {
            device: device.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error is caused by operator input
    /// (bad form values, unknown models, uplinks that do not exist)
    /// rather than by a caller bug or a naming-convention violation.
    pub fn is_operator_error(&self) -> bool {
        matches!(
            self,
            OnboardError::UnknownModel { .. }
                | OnboardError::InterfaceNotFound { .. }
                | OnboardError::InvalidConfig { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OnboardError::no_numeric_segment("NoDigitsHere");
        assert_eq!(
            err.to_string(),
            "No numeric segment found in interface name 'NoDigitsHere'"
        );
    }

    #[test]
    fn test_member_count_error() {
        let err = OnboardError::InvalidMemberCount { count: 0 };
        assert_eq!(err.to_string(), "Stack member count must be >= 1 (got 0)");
    }

    #[test]
    fn test_interface_not_found() {
        let err = OnboardError::interface_not_found("acc-sw-01", "TenGigabitEthernet3/1/1");
        assert!(err.to_string().contains("acc-sw-01"));
        assert!(err.to_string().contains("TenGigabitEthernet3/1/1"));
    }

    #[test]
    fn test_is_operator_error() {
        assert!(OnboardError::unknown_model("cisco-c9999").is_operator_error());
        assert!(OnboardError::invalid_config("blan_vlan", "out of range").is_operator_error());
        assert!(!OnboardError::InvalidMemberCount { count: 0 }.is_operator_error());
        assert!(!OnboardError::no_numeric_segment("Po").is_operator_error());
    }
}
