//! Verification helpers for testing onboarding plans
//!
//! Provides assertion helpers to verify plan invariants: pool
//! conservation, role disjointness, and stack shape

use std::collections::HashSet;

use thiserror::Error;

use onboardmgr::{Action, OnboardPlan};

/// Verification error types
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Port {device}/{interface} appears in more than one role")]
    DuplicatePort { device: String, interface: String },

    #[error("Expected {expected} configured ports, found {actual}")]
    PortCountMismatch { expected: usize, actual: usize },

    #[error("Plan summary disagrees with actions: {field} is {summary} but {actual} actions")]
    SummaryMismatch {
        field: String,
        summary: usize,
        actual: usize,
    },

    #[error("Expected a virtual chassis of {expected} members, found {actual}")]
    ChassisMismatch { expected: usize, actual: usize },

    #[error("Plan unexpectedly contains a {kind} action")]
    UnexpectedAction { kind: String },
}

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerificationError>;

/// Plan invariant verifier
pub struct PlanVerifier<'a> {
    plan: &'a OnboardPlan,
}

impl<'a> PlanVerifier<'a> {
    /// Create a new plan verifier
    pub fn new(plan: &'a OnboardPlan) -> Self {
        Self { plan }
    }

    /// Verify that no port is configured into more than one role.
    pub fn assert_ports_disjoint(&self) -> VerifyResult<()> {
        let mut seen = HashSet::new();
        for action in self.plan.actions.iter() {
            if let Action::ConfigureAccessPort {
                device, interface, ..
            } = action
            {
                if !seen.insert((device.clone(), interface.clone())) {
                    return Err(VerificationError::DuplicatePort {
                        device: device.clone(),
                        interface: interface.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Verify that every user port of the device (or stack) is configured
    /// exactly once: the conservation law of the distributor.
    pub fn assert_port_conservation(&self, expected_user_ports: usize) -> VerifyResult<()> {
        let actual = self.plan.port_actions().count();
        if actual != expected_user_ports {
            return Err(VerificationError::PortCountMismatch {
                expected: expected_user_ports,
                actual,
            });
        }
        Ok(())
    }

    /// Verify that the plan summary matches the emitted port actions.
    pub fn assert_summary_consistent(&self) -> VerifyResult<()> {
        let summary = self.plan.summary;
        let total = summary.blan_ports + summary.ap_ports + summary.guest_ports;
        let actual = self.plan.port_actions().count();
        if actual != total {
            return Err(VerificationError::SummaryMismatch {
                field: "total".to_string(),
                summary: total,
                actual,
            });
        }
        Ok(())
    }

    /// Verify that the plan forms a virtual chassis of the given size.
    pub fn assert_chassis_members(&self, expected: usize) -> VerifyResult<()> {
        let actual = self
            .plan
            .actions
            .iter()
            .find_map(|a| match a {
                Action::FormVirtualChassis { members, .. } => Some(members.len()),
                _ => None,
            })
            .unwrap_or(0);
        if actual != expected {
            return Err(VerificationError::ChassisMismatch { expected, actual });
        }
        Ok(())
    }

    /// Verify that the plan contains no chassis or rename steps.
    pub fn assert_single_chassis(&self) -> VerifyResult<()> {
        for action in self.plan.actions.iter() {
            match action {
                Action::FormVirtualChassis { .. } => {
                    return Err(VerificationError::UnexpectedAction {
                        kind: "form_virtual_chassis".to_string(),
                    })
                }
                Action::RenameInterfaces { .. } => {
                    return Err(VerificationError::UnexpectedAction {
                        kind: "rename_interfaces".to_string(),
                    })
                }
                _ => {}
            }
        }
        Ok(())
    }
}
