//! Request fixtures for common onboarding scenarios
//!
//! Provides reusable onboarding requests for planner testing

use onboardmgr::{DeviceModel, OnboardRequest};

/// Builder for onboarding requests with sensible test defaults.
#[derive(Debug, Clone)]
pub struct RequestFixture {
    req: OnboardRequest,
}

impl RequestFixture {
    /// Creates a fixture for a single C9300L-24P switch with two APs
    /// and one wired guest.
    pub fn new(device_name: impl Into<String>) -> Self {
        Self {
            req: OnboardRequest {
                device_name: device_name.into(),
                model: DeviceModel::C9300l24p4x,
                site: "z07".to_string(),
                mgmt_address: "192.168.20.10/23".parse().expect("fixture address"),
                gateway_address: "192.168.20.1".parse().expect("fixture gateway"),
                mgmt_vlan: 60,
                blan_vlan: 1101,
                guest_vlan: 3101,
                ap_count: Some(2),
                guest_count: Some(1),
                is_stack_switch: false,
                stack_member_count: 1,
                uplink_1: "TenGigabitEthernet1/1/1".to_string(),
                uplink_desc_a: "remotehost=lef-a; port=xe-0/0/18".to_string(),
                uplink_2: "TenGigabitEthernet1/1/2".to_string(),
                uplink_desc_b: "remotehost=lef-b; port=xe-0/0/18".to_string(),
                lag_name: "Po1".to_string(),
                lag_desc: "remotehost=lef-a/b; port=ae18".to_string(),
            },
        }
    }

    /// Switches the model and picks the model's first two uplink choices.
    pub fn model(mut self, model: DeviceModel) -> Self {
        let choices = model.uplink_choices();
        self.req.model = model;
        self.req.uplink_1 = choices[0].name.to_string();
        self.req.uplink_2 = choices[1].name.to_string();
        self
    }

    /// Turns the request into a stack of `members` switches.
    pub fn stack(mut self, members: u32) -> Self {
        self.req.is_stack_switch = true;
        self.req.stack_member_count = members;
        self
    }

    /// Sets the AP port demand.
    pub fn ap_count(mut self, count: Option<u32>) -> Self {
        self.req.ap_count = count;
        self
    }

    /// Sets the wired guest port demand.
    pub fn guest_count(mut self, count: Option<u32>) -> Self {
        self.req.guest_count = count;
        self
    }

    /// Sets the three site VLAN IDs.
    pub fn vlans(mut self, mgmt: u16, blan: u16, guest: u16) -> Self {
        self.req.mgmt_vlan = mgmt;
        self.req.blan_vlan = blan;
        self.req.guest_vlan = guest;
        self
    }

    /// Finishes the fixture.
    pub fn build(self) -> OnboardRequest {
        self.req
    }
}

/// A plain single-switch request.
pub fn single_switch() -> OnboardRequest {
    RequestFixture::new("acc-sw-01").build()
}

/// A three-member stack with demand that does not divide evenly.
pub fn three_member_stack() -> OnboardRequest {
    RequestFixture::new("acc-sw-01")
        .stack(3)
        .ap_count(Some(7))
        .guest_count(Some(4))
        .build()
}
