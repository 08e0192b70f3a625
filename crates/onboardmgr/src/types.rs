//! Value types for onboarding requests and provisioning plans.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use onboard_common::{OnboardError, OnboardResult};

use crate::catalog::DeviceModel;

/// Inventory role every onboarded switch is filed under.
pub const ACCESS_SWITCH_ROLE: &str = "Access Switch";

/// Platform slug applied to every onboarded switch.
pub const IOS_PLATFORM: &str = "ios";

/// Rendered-config template attached to every onboarded switch.
pub const CONFIG_TEMPLATE: &str = "master_temp_acc_v1";

/// An IPv4 address with prefix length, e.g. "192.168.20.10/23".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MgmtAddress {
    /// Host address.
    pub addr: Ipv4Addr,
    /// Prefix length, 0..=32.
    pub prefix_len: u8,
}

impl MgmtAddress {
    /// Creates a management address, rejecting prefixes longer than /32.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> OnboardResult<Self> {
        if prefix_len > 32 {
            return Err(OnboardError::invalid_config(
                "mgmt_address",
                format!("prefix length /{} is out of range", prefix_len),
            ));
        }
        Ok(Self { addr, prefix_len })
    }
}

impl fmt::Display for MgmtAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl FromStr for MgmtAddress {
    type Err = OnboardError;

    fn from_str(s: &str) -> OnboardResult<Self> {
        let (addr, prefix) = s.split_once('/').ok_or_else(|| {
            OnboardError::invalid_config(
                "mgmt_address",
                format!("'{}' is missing the /prefix part", s),
            )
        })?;
        let addr: Ipv4Addr = addr.parse().map_err(|_| {
            OnboardError::invalid_config("mgmt_address", format!("'{}' is not an IPv4 address", addr))
        })?;
        let prefix_len: u8 = prefix.parse().map_err(|_| {
            OnboardError::invalid_config("mgmt_address", format!("'{}' is not a prefix length", prefix))
        })?;
        Self::new(addr, prefix_len)
    }
}

/// Operator-supplied parameters for one onboarding run.
///
/// Mirrors the provisioning form: device identity, site, addressing,
/// the three site VLANs, AP/guest port demand, stack shape, and the
/// uplink/LAG selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardRequest {
    /// Device hostname (base name for stacks).
    pub device_name: String,
    /// Access switch model.
    pub model: DeviceModel,
    /// Site the device is provisioned into.
    pub site: String,
    /// Management IP with prefix, e.g. 192.168.20.10/23.
    pub mgmt_address: MgmtAddress,
    /// Default gateway.
    pub gateway_address: Ipv4Addr,
    /// Management VLAN ID.
    pub mgmt_vlan: u16,
    /// Business LAN VLAN ID.
    pub blan_vlan: u16,
    /// Guest VLAN ID.
    pub guest_vlan: u16,
    /// Number of access points to attach, if any.
    pub ap_count: Option<u32>,
    /// Number of wired guest users to serve, if any.
    pub guest_count: Option<u32>,
    /// Whether the device is a stack of switches.
    pub is_stack_switch: bool,
    /// Number of stack members; ignored unless `is_stack_switch`.
    pub stack_member_count: u32,
    /// First uplink interface (member 1).
    pub uplink_1: String,
    /// First uplink description.
    pub uplink_desc_a: String,
    /// Second uplink interface (last member on stacks).
    pub uplink_2: String,
    /// Second uplink description.
    pub uplink_desc_b: String,
    /// LAG interface name (Po1/Po2/Po3).
    pub lag_name: String,
    /// LAG interface description.
    pub lag_desc: String,
}

impl OnboardRequest {
    /// Effective member count: the stack count when stacking, else 1.
    pub fn member_count(&self) -> u32 {
        if self.is_stack_switch {
            self.stack_member_count
        } else {
            1
        }
    }

    /// True when the plan spans more than one chassis.
    pub fn is_stacked(&self) -> bool {
        self.member_count() > 1
    }
}

/// One of the site's three VLANs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanPlan {
    /// VLAN ID.
    pub vid: u16,
    /// VLAN name in the inventory.
    pub name: String,
    /// VLAN description.
    pub description: String,
}

impl VlanPlan {
    /// Creates a VLAN plan entry.
    pub fn new(vid: u16, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            vid,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Interface mode applied to a configured port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceMode {
    /// Untagged access port.
    Access,
    /// 802.1Q tagged port.
    Tagged,
}

impl fmt::Display for InterfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceMode::Access => f.write_str("access"),
            InterfaceMode::Tagged => f.write_str("tagged"),
        }
    }
}

/// Virtual chassis membership of one stack member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcMember {
    /// Member device name.
    pub device: String,
    /// Position in the chassis, starting at 1.
    pub position: u32,
    /// Election priority (higher wins).
    pub priority: u32,
}

/// One interface rename on a cloned stack member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRename {
    /// Template name (member-1 form).
    pub from: String,
    /// Name after slot remapping.
    pub to: String,
}

/// A single provisioning step of an [`OnboardPlan`].
///
/// Actions are emitted in apply order; replaying them verbatim against
/// the inventory reproduces the onboarding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Create one switch device record.
    CreateDevice {
        name: String,
        model: DeviceModel,
        site: String,
        role: String,
        platform: String,
        config_template: String,
        gateway: Ipv4Addr,
    },
    /// Bundle the stack members into a virtual chassis.
    FormVirtualChassis {
        name: String,
        master: String,
        members: Vec<VcMember>,
    },
    /// Remap interface names on a cloned stack member.
    RenameInterfaces {
        device: String,
        renames: Vec<InterfaceRename>,
    },
    /// Create the per-device VLAN group scoped to the site.
    CreateVlanGroup {
        name: String,
        slug: String,
        site: String,
    },
    /// Create one VLAN inside the device's VLAN group.
    CreateVlan { group: String, vlan: VlanPlan },
    /// Create the LAG interface on a member.
    CreateLagInterface {
        device: String,
        name: String,
        description: String,
    },
    /// Create the management SVI on member 1.
    CreateMgmtInterface {
        device: String,
        name: String,
        description: String,
    },
    /// Assign the management address to the SVI.
    AssignMgmtAddress {
        device: String,
        interface: String,
        address: MgmtAddress,
    },
    /// Mark the management address primary for the device.
    SetPrimaryAddress {
        device: String,
        address: MgmtAddress,
    },
    /// Put one user port into its allocated role.
    ConfigureAccessPort {
        device: String,
        interface: String,
        mode: InterfaceMode,
        untagged_vlan: u16,
        tagged_vlans: Vec<u16>,
        description: String,
    },
    /// Tag the site VLANs onto the LAG.
    ConfigureLag {
        device: String,
        interface: String,
        tagged_vlans: Vec<u16>,
    },
    /// Attach an uplink port to the LAG.
    AttachUplink {
        device: String,
        interface: String,
        lag: String,
        description: String,
        tagged_vlans: Vec<u16>,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CreateDevice { name, model, site, .. } => {
                write!(f, "Create switch {} ({}) at site {}", name, model, site)
            }
            Action::FormVirtualChassis { name, members, .. } => {
                write!(f, "Form virtual chassis {} with {} members", name, members.len())
            }
            Action::RenameInterfaces { device, renames } => {
                write!(f, "Rename {} interfaces on {}", renames.len(), device)
            }
            Action::CreateVlanGroup { name, site, .. } => {
                write!(f, "Create VLAN group {} at site {}", name, site)
            }
            Action::CreateVlan { group, vlan } => {
                write!(f, "Create VLAN {} ({}) in group {}", vlan.vid, vlan.name, group)
            }
            Action::CreateLagInterface { device, name, .. } => {
                write!(f, "Create LAG {} on {}", name, device)
            }
            Action::CreateMgmtInterface { device, name, .. } => {
                write!(f, "Create mgmt interface {} on {}", name, device)
            }
            Action::AssignMgmtAddress {
                device,
                interface,
                address,
            } => write!(f, "Assign {} to {} on {}", address, interface, device),
            Action::SetPrimaryAddress { device, address } => {
                write!(f, "Set {} as primary IPv4 address of {}", address, device)
            }
            Action::ConfigureAccessPort {
                device,
                interface,
                mode,
                untagged_vlan,
                ..
            } => write!(
                f,
                "Configure {} on {} as {} port untagged on VLAN {}",
                interface, device, mode, untagged_vlan
            ),
            Action::ConfigureLag {
                device,
                interface,
                tagged_vlans,
            } => write!(
                f,
                "Tag VLANs {:?} on LAG {} of {}",
                tagged_vlans, interface, device
            ),
            Action::AttachUplink {
                device,
                interface,
                lag,
                ..
            } => write!(f, "Attach uplink {} on {} to {}", interface, device, lag),
        }
    }
}

/// Port allocation totals across the whole device or stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Ports left on the business LAN.
    pub blan_ports: usize,
    /// Ports reserved for access points.
    pub ap_ports: usize,
    /// Ports reserved for wired guests.
    pub guest_ports: usize,
}

/// The full provisioning plan for one onboarding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardPlan {
    /// Steps in apply order.
    pub actions: Vec<Action>,
    /// Port allocation totals.
    pub summary: PlanSummary,
}

impl OnboardPlan {
    /// All port-role actions in the plan.
    pub fn port_actions(&self) -> impl Iterator<Item = &Action> + '_ {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::ConfigureAccessPort { .. }))
    }

    /// Device names created by the plan, in creation order.
    pub fn device_names(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::CreateDevice { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mgmt_address_parse() {
        let addr: MgmtAddress = "192.168.20.10/23".parse().unwrap();
        assert_eq!(addr.addr, Ipv4Addr::new(192, 168, 20, 10));
        assert_eq!(addr.prefix_len, 23);
        assert_eq!(addr.to_string(), "192.168.20.10/23");
    }

    #[test]
    fn test_mgmt_address_rejects_bad_input() {
        assert!("192.168.20.10".parse::<MgmtAddress>().is_err());
        assert!("not-an-ip/24".parse::<MgmtAddress>().is_err());
        assert!("10.0.0.1/33".parse::<MgmtAddress>().is_err());
    }

    #[test]
    fn test_member_count_ignores_count_when_not_stacking() {
        let mut req = OnboardRequest {
            device_name: "acc-sw-01".into(),
            model: DeviceModel::C9300l24p4x,
            site: "z07".into(),
            mgmt_address: "192.168.20.10/23".parse().unwrap(),
            gateway_address: Ipv4Addr::new(192, 168, 20, 1),
            mgmt_vlan: 60,
            blan_vlan: 1101,
            guest_vlan: 3101,
            ap_count: None,
            guest_count: None,
            is_stack_switch: false,
            stack_member_count: 3,
            uplink_1: "TenGigabitEthernet1/1/1".into(),
            uplink_desc_a: String::new(),
            uplink_2: "TenGigabitEthernet1/1/2".into(),
            uplink_desc_b: String::new(),
            lag_name: "Po1".into(),
            lag_desc: String::new(),
        };
        assert_eq!(req.member_count(), 1);
        assert!(!req.is_stacked());

        req.is_stack_switch = true;
        assert_eq!(req.member_count(), 3);
        assert!(req.is_stacked());
    }

    #[test]
    fn test_action_display() {
        let action = Action::CreateLagInterface {
            device: "acc-sw-01".into(),
            name: "Po1".into(),
            description: "uplink bundle".into(),
        };
        assert_eq!(action.to_string(), "Create LAG Po1 on acc-sw-01");
    }

    #[test]
    fn test_action_serde_tagging() {
        let action = Action::SetPrimaryAddress {
            device: "acc-sw-01".into(),
            address: "10.1.2.3/24".parse().unwrap(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "set_primary_address");
        assert_eq!(json["device"], "acc-sw-01");
    }
}
