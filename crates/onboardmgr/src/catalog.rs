//! Static device-model catalog.
//!
//! Maps each supported access-switch model to its fixed interface-name
//! templates and uplink choices. All data is `const`; the mapping is a
//! plain `match` on the model tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use onboard_common::{OnboardError, OnboardResult};

/// LAG interface names an uplink bundle may use.
pub const LAG_CHOICES: [&str; 3] = ["Po1", "Po2", "Po3"];

/// An uplink port option: full interface name plus its short alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UplinkChoice {
    /// Full interface name, e.g. "TenGigabitEthernet1/1/1".
    pub name: &'static str,
    /// Short display alias, e.g. "Te1/1/1".
    pub alias: &'static str,
}

impl UplinkChoice {
    const fn new(name: &'static str, alias: &'static str) -> Self {
        Self { name, alias }
    }
}

impl fmt::Display for UplinkChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.alias)
    }
}

/// Uplink tables per model family.
const TEN_GIG_UPLINKS: &[UplinkChoice] = &[
    UplinkChoice::new("TenGigabitEthernet1/1/1", "Te1/1/1"),
    UplinkChoice::new("TenGigabitEthernet1/1/2", "Te1/1/2"),
    UplinkChoice::new("TenGigabitEthernet1/1/3", "Te1/1/3"),
    UplinkChoice::new("TenGigabitEthernet1/1/4", "Te1/1/4"),
];

const MIXED_GIG_UPLINKS: &[UplinkChoice] = &[
    UplinkChoice::new("GigabitEthernet1/1/1", "Gi1/1/1"),
    UplinkChoice::new("GigabitEthernet1/1/2", "Gi1/1/2"),
    UplinkChoice::new("TenGigabitEthernet1/1/3", "Te1/1/3"),
    UplinkChoice::new("TenGigabitEthernet1/1/4", "Te1/1/4"),
];

const TWENTY_FIVE_GIG_UPLINKS: &[UplinkChoice] = &[
    UplinkChoice::new("TwentyFiveGigabitEthernet1/1/1", "Twe1/1/1"),
    UplinkChoice::new("TwentyFiveGigabitEthernet1/1/2", "Twe1/1/2"),
    UplinkChoice::new("TwentyFiveGigabitEthernet1/1/3", "Twe1/1/3"),
    UplinkChoice::new("TwentyFiveGigabitEthernet1/1/4", "Twe1/1/4"),
];

const INDUSTRIAL_UPLINKS: &[UplinkChoice] = &[
    UplinkChoice::new("GigabitEthernet1/1", "Gi1/1"),
    UplinkChoice::new("GigabitEthernet1/2", "Gi1/2"),
    UplinkChoice::new("GigabitEthernet1/3", "Gi1/3"),
    UplinkChoice::new("GigabitEthernet1/4", "Gi1/4"),
];

/// Supported access-switch models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeviceModel {
    /// Catalyst 9300L, 24 PoE+ ports, 4x10G uplinks.
    C9300l24p4x,
    /// Catalyst 9300L, 48 UPOE/mGig ports, 4x10G uplinks.
    C9300l48uxg4x,
    /// Catalyst 9300LM, 24 UPOE ports, 4x25G uplinks.
    C9300lm24u4y,
    /// Catalyst 9200CX compact, 12 PoE+ ports, 2x1G + 2x10G uplinks.
    C9200cx12p2x2g,
    /// IE-4000 industrial switch, flat port naming, 4x1G uplinks.
    Ie4000,
}

impl DeviceModel {
    /// Every model the catalog knows.
    pub const ALL: [DeviceModel; 5] = [
        DeviceModel::C9300l24p4x,
        DeviceModel::C9300l48uxg4x,
        DeviceModel::C9300lm24u4y,
        DeviceModel::C9200cx12p2x2g,
        DeviceModel::Ie4000,
    ];

    /// The inventory slug for this model.
    pub fn slug(&self) -> &'static str {
        match self {
            DeviceModel::C9300l24p4x => "cisco-c9300l-24p-4x",
            DeviceModel::C9300l48uxg4x => "cisco-c9300l-48uxg-4x",
            DeviceModel::C9300lm24u4y => "cisco-c9300lm-24u-4y",
            DeviceModel::C9200cx12p2x2g => "cisco-c9200cx-12p-2x2g",
            DeviceModel::Ie4000 => "cisco-ie-4000-8gt8gp4g-e",
        }
    }

    /// The uplink ports an operator may pick for this model.
    pub fn uplink_choices(&self) -> &'static [UplinkChoice] {
        match self {
            DeviceModel::C9300l24p4x | DeviceModel::C9300l48uxg4x => TEN_GIG_UPLINKS,
            DeviceModel::C9300lm24u4y => TWENTY_FIVE_GIG_UPLINKS,
            DeviceModel::C9200cx12p2x2g => MIXED_GIG_UPLINKS,
            DeviceModel::Ie4000 => INDUSTRIAL_UPLINKS,
        }
    }

    /// Number of user-facing ports on the `slot/0/port` path.
    pub fn user_port_count(&self) -> u32 {
        match self {
            DeviceModel::C9300l24p4x | DeviceModel::C9300lm24u4y => 24,
            DeviceModel::C9300l48uxg4x => 48,
            DeviceModel::C9200cx12p2x2g => 12,
            // Industrial models use flat GigabitEthernet1/N naming and
            // expose no /0/ user pool.
            DeviceModel::Ie4000 => 0,
        }
    }

    /// Full interface list a freshly created member-1 device of this
    /// model carries: user ports first, then the uplink ports.
    pub fn interface_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = (1..=self.user_port_count())
            .map(|port| format!("GigabitEthernet1/0/{}", port))
            .collect();

        if let DeviceModel::Ie4000 = self {
            // 8 copper + 8 PoE + 4 combo uplinks, one flat numbering.
            names.extend((5..=20).map(|port| format!("GigabitEthernet1/{}", port)));
            names.extend((1..=4).map(|port| format!("GigabitEthernet1/{}", port)));
            names.sort_by(|a, b| crate::naming::compare_natural(a, b));
        } else {
            names.extend(self.uplink_choices().iter().map(|c| c.name.to_string()));
        }

        names
    }

    /// True when `name` is one of this model's uplink choices.
    pub fn is_uplink_choice(&self, name: &str) -> bool {
        self.uplink_choices().iter().any(|c| c.name == name)
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DeviceModel {
    type Err = OnboardError;

    fn from_str(slug: &str) -> OnboardResult<Self> {
        DeviceModel::ALL
            .iter()
            .find(|m| m.slug() == slug)
            .copied()
            .ok_or_else(|| OnboardError::unknown_model(slug))
    }
}

impl TryFrom<String> for DeviceModel {
    type Error = OnboardError;

    fn try_from(slug: String) -> OnboardResult<Self> {
        slug.parse()
    }
}

impl From<DeviceModel> for String {
    fn from(model: DeviceModel) -> Self {
        model.slug().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for model in DeviceModel::ALL {
            assert_eq!(model.slug().parse::<DeviceModel>().unwrap(), model);
        }
    }

    #[test]
    fn test_unknown_slug() {
        let err = "cisco-c9999".parse::<DeviceModel>().unwrap_err();
        assert!(matches!(err, OnboardError::UnknownModel { .. }));
    }

    #[test]
    fn test_uplink_tables() {
        assert_eq!(DeviceModel::C9300l24p4x.uplink_choices().len(), 4);
        assert!(DeviceModel::C9300l24p4x.is_uplink_choice("TenGigabitEthernet1/1/1"));
        assert!(!DeviceModel::C9300l24p4x.is_uplink_choice("GigabitEthernet1/0/1"));
        assert!(DeviceModel::C9200cx12p2x2g.is_uplink_choice("GigabitEthernet1/1/2"));
        assert!(DeviceModel::C9200cx12p2x2g.is_uplink_choice("TenGigabitEthernet1/1/4"));
        assert!(DeviceModel::C9300lm24u4y.is_uplink_choice("TwentyFiveGigabitEthernet1/1/2"));
    }

    #[test]
    fn test_interface_templates_c9300l() {
        let names = DeviceModel::C9300l24p4x.interface_templates();
        assert_eq!(names.len(), 28);
        assert!(names.contains(&"GigabitEthernet1/0/1".to_string()));
        assert!(names.contains(&"GigabitEthernet1/0/24".to_string()));
        assert!(names.contains(&"TenGigabitEthernet1/1/4".to_string()));
        assert!(!names.contains(&"GigabitEthernet1/0/25".to_string()));
    }

    #[test]
    fn test_interface_templates_industrial_flat_naming() {
        let names = DeviceModel::Ie4000.interface_templates();
        assert_eq!(names.len(), 20);
        assert_eq!(names[0], "GigabitEthernet1/1");
        assert_eq!(names[19], "GigabitEthernet1/20");
        assert!(names.iter().all(|n| !n.contains("/0/")));
    }

    #[test]
    fn test_lag_choices() {
        assert!(LAG_CHOICES.contains(&"Po1"));
        assert_eq!(LAG_CHOICES.len(), 3);
    }
}
