//! onboardmgr - access-switch onboarding planner
//!
//! Turns operator-supplied onboarding parameters into a deterministic
//! provisioning plan for the network inventory: device records, virtual
//! chassis membership, VLANs, LAG/uplink wiring, and a three-way partition
//! of user-facing ports (access points, wired guest, business LAN).
//!
//! The planner is pure: it produces [`OnboardPlan`] value types and never
//! touches the inventory itself. Applying a plan is the caller's job.

mod allocation;
mod balance;
mod catalog;
mod naming;
mod onboard_mgr;
mod pool;
mod types;

pub use allocation::{distribute, PortSplit};
pub use balance::{per_switch_with_adding, SplitQuota};
pub use catalog::{DeviceModel, UplinkChoice, LAG_CHOICES};
pub use naming::{compare_natural, replace_slot, to_one_ended};
pub use onboard_mgr::OnboardMgr;
pub use pool::{user_pool, USER_PORT_DELIMITER};
pub use types::*;
