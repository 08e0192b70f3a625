//! OnboardMgr - onboarding plan builder.
//!
//! Provisioning flow:
//! 1. Create one device record per stack member, bundle members into a
//!    virtual chassis and remap cloned interface names
//! 2. Create the site VLANs, LAG, management SVI and address
//! 3. Balance the AP/guest demand across members, allocate user ports on
//!    each member, and wire the uplinks into the LAG

use tracing::{debug, info, instrument};

use onboard_common::{OnboardError, OnboardResult};

use crate::allocation::distribute;
use crate::balance::per_switch_with_adding;
use crate::catalog::{DeviceModel, LAG_CHOICES};
use crate::naming::{replace_slot, to_one_ended};
use crate::pool::{user_pool, USER_PORT_DELIMITER};
use crate::types::{
    Action, InterfaceMode, InterfaceRename, OnboardPlan, OnboardRequest, PlanSummary, VcMember,
    VlanPlan, ACCESS_SWITCH_ROLE, CONFIG_TEMPLATE, IOS_PLATFORM,
};

/// Highest virtual-chassis priority; member at position N gets `16 - N`.
const VC_PRIORITY_BASE: u32 = 16;

/// Largest supported stack.
const MAX_STACK_MEMBERS: u32 = 5;

/// Bounds on the AP / guest port demand fields.
const MAX_PORT_DEMAND: u32 = 10;

/// Valid VLAN ID range for the site VLANs.
const VLAN_RANGE: std::ops::RangeInclusive<u16> = 2..=4096;

/// Description stamped on ordinary user ports.
const USER_PORT_DESC: &str = "<<remotehost=User>>";

/// OnboardMgr builds provisioning plans from onboarding requests.
///
/// The manager holds no inventory state; [`OnboardMgr::plan`] is a pure
/// computation and may be called any number of times.
pub struct OnboardMgr {
    /// Naming convention marking user-facing ports.
    user_port_delimiter: String,
}

impl OnboardMgr {
    /// Creates a new OnboardMgr with the default user-port convention.
    pub fn new() -> Self {
        Self {
            user_port_delimiter: USER_PORT_DELIMITER.to_string(),
        }
    }

    /// Overrides the user-port naming convention.
    pub fn with_user_port_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.user_port_delimiter = delimiter.into();
        self
    }

    /// Builds the provisioning plan for `req`.
    #[instrument(skip(self, req), fields(device = %req.device_name))]
    pub fn plan(&self, req: &OnboardRequest) -> OnboardResult<OnboardPlan> {
        self.validate(req)?;

        let member_count = req.member_count();
        let members = member_names(req);
        let mut actions = Vec::new();

        // Device records, one per member.
        let mut member_interfaces: Vec<Vec<String>> = Vec::with_capacity(members.len());
        for (idx, name) in members.iter().enumerate() {
            let position = idx as u32 + 1;
            let interfaces = interfaces_for_member(req.model, position)?;
            info!(
                "Created switch: {} with {} interfaces",
                name,
                interfaces.len()
            );
            actions.push(Action::CreateDevice {
                name: name.clone(),
                model: req.model,
                site: req.site.clone(),
                role: ACCESS_SWITCH_ROLE.to_string(),
                platform: IOS_PLATFORM.to_string(),
                config_template: CONFIG_TEMPLATE.to_string(),
                gateway: req.gateway_address,
            });
            member_interfaces.push(interfaces);
        }

        // Virtual chassis and interface renames for the clones.
        if req.is_stacked() {
            info!("Stack creation complete. Total members: {}", members.len());
            actions.push(Action::FormVirtualChassis {
                name: req.device_name.clone(),
                master: members[0].clone(),
                members: members
                    .iter()
                    .enumerate()
                    .map(|(idx, device)| VcMember {
                        device: device.clone(),
                        position: idx as u32 + 1,
                        priority: VC_PRIORITY_BASE - (idx as u32 + 1),
                    })
                    .collect(),
            });

            for (idx, name) in members.iter().enumerate().skip(1) {
                let position = idx as u32 + 1;
                let renames: Vec<InterfaceRename> = req
                    .model
                    .interface_templates()
                    .into_iter()
                    .zip(member_interfaces[idx].iter())
                    .map(|(from, to)| InterfaceRename {
                        from,
                        to: to.clone(),
                    })
                    .collect();
                info!("Interface name has been updated for stack member {}", position);
                actions.push(Action::RenameInterfaces {
                    device: name.clone(),
                    renames,
                });
            }
        }

        // Site VLANs, grouped per device.
        let group = req.device_name.clone();
        let blan = VlanPlan::new(req.blan_vlan, "blan", "Business LAN");
        let mgmt = VlanPlan::new(req.mgmt_vlan, "mgmt", "Mgmt Vlan");
        let guest = VlanPlan::new(req.guest_vlan, "guest", "Guest Vlan");
        actions.push(Action::CreateVlanGroup {
            name: group.clone(),
            slug: slugify(&group),
            site: req.site.clone(),
        });
        info!("Created new vlan group: {}", group);
        for vlan in [&blan, &mgmt, &guest] {
            actions.push(Action::CreateVlan {
                group: group.clone(),
                vlan: vlan.clone(),
            });
        }
        info!(
            "Created new vlans and added to group: {}: {}:{}:{}",
            group, blan.vid, mgmt.vid, guest.vid
        );
        let site_vids = vec![blan.vid, mgmt.vid, guest.vid];

        // LAG on the first and last member, SVI and address on the first.
        let main_switch = members[0].clone();
        let last_switch = members[members.len() - 1].clone();
        actions.push(Action::CreateLagInterface {
            device: main_switch.clone(),
            name: req.lag_name.clone(),
            description: req.lag_desc.clone(),
        });
        if members.len() > 1 {
            actions.push(Action::CreateLagInterface {
                device: last_switch.clone(),
                name: req.lag_name.clone(),
                description: req.lag_desc.clone(),
            });
        }
        let svi_name = format!("vlan{}", req.mgmt_vlan);
        actions.push(Action::CreateMgmtInterface {
            device: main_switch.clone(),
            name: svi_name.clone(),
            description: "mgmt interface".to_string(),
        });
        info!(
            "Created new {} and mgmt int vlan: {} on {}",
            req.lag_name, svi_name, main_switch
        );
        actions.push(Action::AssignMgmtAddress {
            device: main_switch.clone(),
            interface: svi_name,
            address: req.mgmt_address,
        });
        actions.push(Action::SetPrimaryAddress {
            device: main_switch.clone(),
            address: req.mgmt_address,
        });
        info!(
            "Primary IPv4 address: {} on {}",
            req.mgmt_address, main_switch
        );

        // Per-member port demand: an even split across stacks, the raw
        // request otherwise. Absent counts stay absent.
        let (ap_quota, guest_quota) = if req.is_stacked() {
            (
                self.member_quota("ap_count", req.ap_count, member_count)?,
                self.member_quota("guest_count", req.guest_count, member_count)?,
            )
        } else {
            (req.ap_count, req.guest_count)
        };

        // Allocate user ports member by member.
        let mut blan_ports: Vec<(String, String)> = Vec::new();
        let mut ap_ports: Vec<(String, String)> = Vec::new();
        let mut guest_ports: Vec<(String, String)> = Vec::new();
        for (idx, name) in members.iter().enumerate() {
            let pool = user_pool(&member_interfaces[idx], &self.user_port_delimiter);
            let split = distribute(pool, ap_quota, guest_quota);
            info!(
                "Port allocation: BLAN ports = {}, AP ports = {}, GUEST ports = {} on member {}",
                split.remaining.len(),
                split.ap_ports.len(),
                split.guest_ports.len(),
                idx + 1
            );
            ap_ports.extend(split.ap_ports.into_iter().map(|p| (name.clone(), p)));
            guest_ports.extend(split.guest_ports.into_iter().map(|p| (name.clone(), p)));
            blan_ports.extend(split.remaining.into_iter().map(|p| (name.clone(), p)));
        }
        let summary = PlanSummary {
            blan_ports: blan_ports.len(),
            ap_ports: ap_ports.len(),
            guest_ports: guest_ports.len(),
        };
        info!(
            "Total ports: BLAN = {}, GUEST = {}, AP = {}",
            summary.blan_ports, summary.guest_ports, summary.ap_ports
        );

        // AP ports are numbered consecutively across the whole stack.
        for (n, (device, interface)) in ap_ports.iter().enumerate() {
            actions.push(Action::ConfigureAccessPort {
                device: device.clone(),
                interface: interface.clone(),
                mode: InterfaceMode::Tagged,
                untagged_vlan: blan.vid,
                tagged_vlans: vec![blan.vid],
                description: format!("<<remotehost={}-wif-0{}>>", req.device_name, n + 1),
            });
        }
        for (device, interface) in &blan_ports {
            actions.push(Action::ConfigureAccessPort {
                device: device.clone(),
                interface: interface.clone(),
                mode: InterfaceMode::Access,
                untagged_vlan: blan.vid,
                tagged_vlans: Vec::new(),
                description: USER_PORT_DESC.to_string(),
            });
        }
        for (device, interface) in &guest_ports {
            actions.push(Action::ConfigureAccessPort {
                device: device.clone(),
                interface: interface.clone(),
                mode: InterfaceMode::Access,
                untagged_vlan: guest.vid,
                tagged_vlans: Vec::new(),
                description: USER_PORT_DESC.to_string(),
            });
        }
        debug!("Updated all interfaces as required");

        // Uplink bundle: all three VLANs ride the LAG.
        actions.push(Action::ConfigureLag {
            device: main_switch.clone(),
            interface: req.lag_name.clone(),
            tagged_vlans: site_vids.clone(),
        });
        info!("Update interface Lag: {}", req.lag_name);

        self.require_interface(&member_interfaces[0], &main_switch, &req.uplink_1)?;
        actions.push(Action::AttachUplink {
            device: main_switch.clone(),
            interface: req.uplink_1.clone(),
            lag: req.lag_name.clone(),
            description: format!("<<{}>>", req.uplink_desc_a),
            tagged_vlans: site_vids.clone(),
        });
        info!("Update uplink 1: {} on {}", req.uplink_1, main_switch);

        // On stacks the second uplink lands on port 1 of the last member.
        let uplink_2 = if req.is_stacked() {
            to_one_ended(&replace_slot(&req.uplink_2, member_count)?)
        } else {
            req.uplink_2.clone()
        };
        self.require_interface(
            &member_interfaces[members.len() - 1],
            &last_switch,
            &uplink_2,
        )?;
        actions.push(Action::AttachUplink {
            device: last_switch.clone(),
            interface: uplink_2.clone(),
            lag: req.lag_name.clone(),
            description: format!("<<{}>>", req.uplink_desc_b),
            tagged_vlans: site_vids,
        });
        info!("Update uplink 2: {} on {}", uplink_2, last_switch);

        Ok(OnboardPlan { actions, summary })
    }

    /// Splits a requested count evenly across the stack members.
    fn member_quota(
        &self,
        field: &str,
        count: Option<u32>,
        member_count: u32,
    ) -> OnboardResult<Option<u32>> {
        match count {
            None => Ok(None),
            Some(total) => {
                let quota = per_switch_with_adding(total, member_count)?;
                debug!(
                    "{}: {} per member ({} total, {} added)",
                    field, quota.per_member, quota.adjusted_total, quota.added
                );
                Ok(Some(quota.per_member))
            }
        }
    }

    /// Mirrors the inventory's interface lookup: the named interface must
    /// exist on the planned device.
    fn require_interface(
        &self,
        interfaces: &[String],
        device: &str,
        name: &str,
    ) -> OnboardResult<()> {
        if interfaces.iter().any(|i| i == name) {
            Ok(())
        } else {
            Err(OnboardError::interface_not_found(device, name))
        }
    }

    fn validate(&self, req: &OnboardRequest) -> OnboardResult<()> {
        if req.device_name.trim().is_empty() {
            return Err(OnboardError::invalid_config("device_name", "must not be empty"));
        }
        if req.site.trim().is_empty() {
            return Err(OnboardError::invalid_config("site", "must not be empty"));
        }

        for (field, vid) in [
            ("mgmt_vlan", req.mgmt_vlan),
            ("blan_vlan", req.blan_vlan),
            ("guest_vlan", req.guest_vlan),
        ] {
            if !VLAN_RANGE.contains(&vid) {
                return Err(OnboardError::invalid_config(
                    field,
                    format!("VLAN ID {} is outside {}..={}", vid, VLAN_RANGE.start(), VLAN_RANGE.end()),
                ));
            }
        }
        if req.mgmt_vlan == req.blan_vlan
            || req.mgmt_vlan == req.guest_vlan
            || req.blan_vlan == req.guest_vlan
        {
            return Err(OnboardError::invalid_config(
                "vlans",
                "mgmt, blan and guest VLAN IDs must be distinct",
            ));
        }

        for (field, count) in [("ap_count", req.ap_count), ("guest_count", req.guest_count)] {
            if let Some(c) = count {
                if c < 1 || c > MAX_PORT_DEMAND {
                    return Err(OnboardError::invalid_config(
                        field,
                        format!("{} is outside 1..={}", c, MAX_PORT_DEMAND),
                    ));
                }
            }
        }

        if req.is_stack_switch
            && !(1..=MAX_STACK_MEMBERS).contains(&req.stack_member_count)
        {
            return Err(OnboardError::invalid_config(
                "stack_member_count",
                format!(
                    "{} is outside 1..={}",
                    req.stack_member_count, MAX_STACK_MEMBERS
                ),
            ));
        }

        for (field, uplink) in [("uplink_1", &req.uplink_1), ("uplink_2", &req.uplink_2)] {
            if !req.model.is_uplink_choice(uplink) {
                return Err(OnboardError::invalid_config(
                    field,
                    format!("'{}' is not an uplink of model {}", uplink, req.model),
                ));
            }
        }

        if !LAG_CHOICES.contains(&req.lag_name.as_str()) {
            return Err(OnboardError::invalid_config(
                "lag_name",
                format!("'{}' is not one of {:?}", req.lag_name, LAG_CHOICES),
            ));
        }

        Ok(())
    }
}

impl Default for OnboardMgr {
    fn default() -> Self {
        Self::new()
    }
}

/// Member device names: the base name, then `{base}{2}`, `{base}{3}`, ...
fn member_names(req: &OnboardRequest) -> Vec<String> {
    (1..=req.member_count())
        .map(|position| {
            if position == 1 {
                req.device_name.clone()
            } else {
                format!("{}{}", req.device_name, position)
            }
        })
        .collect()
}

/// Interface names of the member at `position`: the model templates for
/// member 1, slot-remapped clones for the rest.
fn interfaces_for_member(model: DeviceModel, position: u32) -> OnboardResult<Vec<String>> {
    let templates = model.interface_templates();
    if position == 1 {
        return Ok(templates);
    }
    templates
        .iter()
        .map(|name| replace_slot(name, position))
        .collect()
}

/// Inventory-style slug: lowercase with non-alphanumeric runs collapsed
/// to single hyphens.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
