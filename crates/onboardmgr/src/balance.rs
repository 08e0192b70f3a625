//! Per-member port quota computation for switch stacks.

use serde::{Deserialize, Serialize};

use onboard_common::{OnboardError, OnboardResult};

/// The even split of a requested port count across stack members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitQuota {
    /// Ports every member must provide.
    pub per_member: u32,
    /// Requested total rounded up to a multiple of the member count.
    pub adjusted_total: u32,
    /// Ports added on top of the request to make the split even.
    pub added: u32,
}

/// Computes the minimal per-member count so that every one of
/// `member_count` stack members gets an equal share of at least
/// `total` ports overall.
///
/// `added` is the smallest non-negative increment making
/// `total + added` an exact multiple of `member_count`; it is always
/// below `member_count`.
///
/// Fails when `member_count` is zero. That is a caller bug, not an
/// operator mistake, and must not be retried.
pub fn per_switch_with_adding(total: u32, member_count: u32) -> OnboardResult<SplitQuota> {
    if member_count < 1 {
        return Err(OnboardError::InvalidMemberCount {
            count: member_count,
        });
    }

    let remainder = total % member_count;
    let added = if remainder == 0 {
        0
    } else {
        member_count - remainder
    };
    let adjusted_total = total + added;

    Ok(SplitQuota {
        per_member: adjusted_total / member_count,
        adjusted_total,
        added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_split_rounds_up() {
        let quota = per_switch_with_adding(7, 3).unwrap();
        assert_eq!(quota.per_member, 3);
        assert_eq!(quota.adjusted_total, 9);
        assert_eq!(quota.added, 2);
    }

    #[test]
    fn test_exact_split_adds_nothing() {
        let quota = per_switch_with_adding(9, 3).unwrap();
        assert_eq!(quota.per_member, 3);
        assert_eq!(quota.adjusted_total, 9);
        assert_eq!(quota.added, 0);
    }

    #[test]
    fn test_zero_total() {
        let quota = per_switch_with_adding(0, 4).unwrap();
        assert_eq!(quota.per_member, 0);
        assert_eq!(quota.adjusted_total, 0);
        assert_eq!(quota.added, 0);
    }

    #[test]
    fn test_zero_members_rejected() {
        let err = per_switch_with_adding(5, 0).unwrap_err();
        assert!(matches!(
            err,
            OnboardError::InvalidMemberCount { count: 0 }
        ));
    }

    #[test]
    fn test_split_guarantees() {
        for total in 0..40 {
            for members in 1..6 {
                let quota = per_switch_with_adding(total, members).unwrap();
                assert_eq!(quota.per_member * members, quota.adjusted_total);
                assert!(quota.adjusted_total >= total);
                assert_eq!(quota.adjusted_total - total, quota.added);
                assert!(quota.added < members);
            }
        }
    }
}
