//! Port allocation across the AP / guest / business-LAN buckets.

use serde::{Deserialize, Serialize};

/// Result of distributing a port pool across the three roles.
///
/// The three groups are disjoint and together contain every identifier of
/// the input pool, in pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSplit<T> {
    /// Ports left for the business LAN after both allocations.
    pub remaining: Vec<T>,
    /// Ports reserved for access points.
    pub ap_ports: Vec<T>,
    /// Ports reserved for wired guest users.
    pub guest_ports: Vec<T>,
}

impl<T> PortSplit<T> {
    /// Total number of ports across all three groups.
    pub fn len(&self) -> usize {
        self.remaining.len() + self.ap_ports.len() + self.guest_ports.len()
    }

    /// True when no ports were supplied at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Distributes up to `ap_count` ports to the AP group and up to
/// `guest_count` ports to the guest group, both taken from the front of
/// `pool` in order; whatever is left stays on the business LAN.
///
/// Guest allocation always runs after AP allocation, against the ports the
/// AP allocation did not take. An absent or zero count allocates nothing
/// for that bucket; a count larger than the pool takes the whole pool.
/// There are no error conditions.
pub fn distribute<T>(pool: Vec<T>, ap_count: Option<u32>, guest_count: Option<u32>) -> PortSplit<T> {
    let mut remaining = pool;

    let take_ap = requested(ap_count).min(remaining.len());
    let ap_ports: Vec<T> = remaining.drain(..take_ap).collect();

    let take_guest = requested(guest_count).min(remaining.len());
    let guest_ports: Vec<T> = remaining.drain(..take_guest).collect();

    PortSplit {
        remaining,
        ap_ports,
        guest_ports,
    }
}

fn requested(count: Option<u32>) -> usize {
    count.unwrap_or(0) as usize
}
