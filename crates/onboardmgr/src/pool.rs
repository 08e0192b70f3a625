//! User-port pool construction.
//!
//! The inventory hands the planner the full interface list of a device;
//! only ports whose name carries the user-port path convention are
//! eligible for AP/guest/BLAN allocation. Uplink ports live under a
//! different module token (`/1/`) and never match.

use itertools::Itertools;

use crate::naming::compare_natural;

/// Path token marking user-facing ports (`slot/0/port`).
pub const USER_PORT_DELIMITER: &str = "/0/";

/// Builds the ordered allocation pool from a device's interface names.
///
/// Keeps the names containing `delimiter` and orders them by descending
/// natural name order, so allocation starts from the highest-numbered
/// port and works down. Ties between names whose numeric tokens compare
/// equal are settled byte-wise (see [`compare_natural`]); duplicates are
/// preserved.
pub fn user_pool<S: AsRef<str>>(names: &[S], delimiter: &str) -> Vec<String> {
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| n.contains(delimiter))
        .sorted_by(|a, b| compare_natural(b, a))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pool_filters_uplinks_out() {
        let names = [
            "GigabitEthernet1/0/1",
            "GigabitEthernet1/0/2",
            "TenGigabitEthernet1/1/1",
            "Po1",
            "vlan60",
        ];
        let pool = user_pool(&names, USER_PORT_DELIMITER);
        assert_eq!(pool, vec!["GigabitEthernet1/0/2", "GigabitEthernet1/0/1"]);
    }

    #[test]
    fn test_pool_orders_numerically_descending() {
        let names = [
            "GigabitEthernet1/0/2",
            "GigabitEthernet1/0/10",
            "GigabitEthernet1/0/9",
            "GigabitEthernet1/0/1",
        ];
        let pool = user_pool(&names, USER_PORT_DELIMITER);
        assert_eq!(
            pool,
            vec![
                "GigabitEthernet1/0/10",
                "GigabitEthernet1/0/9",
                "GigabitEthernet1/0/2",
                "GigabitEthernet1/0/1",
            ]
        );
    }

    #[test]
    fn test_pool_tie_break_deterministic() {
        let names = ["GigabitEthernet1/0/01", "GigabitEthernet1/0/1"];
        let pool = user_pool(&names, USER_PORT_DELIMITER);
        // Descending byte-wise on the numeric tie: "...1" > "...01".
        assert_eq!(pool, vec!["GigabitEthernet1/0/1", "GigabitEthernet1/0/01"]);
    }

    #[test]
    fn test_pool_preserves_duplicates() {
        let names = [
            "GigabitEthernet1/0/3",
            "GigabitEthernet1/0/3",
            "GigabitEthernet1/0/4",
        ];
        let pool = user_pool(&names, USER_PORT_DELIMITER);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0], "GigabitEthernet1/0/4");
        assert_eq!(pool[1], pool[2]);
    }

    #[test]
    fn test_pool_other_delimiter() {
        let names = ["GigabitEthernet1/1", "GigabitEthernet1/2", "vlan60"];
        let pool = user_pool(&names, "Ethernet1/");
        assert_eq!(pool, vec!["GigabitEthernet1/2", "GigabitEthernet1/1"]);
    }
}
