//! Interface name transforms for stacked chassis members.
//!
//! Interface names follow the vendor convention of a textual type prefix
//! followed by a slot-delimited numeric path, e.g.
//! `GigabitEthernet1/0/24` (slot/module/port). When a configuration
//! pattern is replicated onto additional stack members, only the leading
//! slot token changes.

use std::cmp::Ordering;

use onboard_common::{OnboardError, OnboardResult};

/// Replaces the first maximal run of digits in `name` with `new_slot`.
///
/// Everything before and after that run is preserved verbatim, so
/// `replace_slot("GigabitEthernet1/0/1", 2)` yields
/// `"GigabitEthernet2/0/1"`. The new slot is written without padding;
/// a multi-digit slot simply widens the name.
///
/// Fails when `name` contains no digit at all, which indicates a
/// naming-convention violation on the device record.
pub fn replace_slot(name: &str, new_slot: u32) -> OnboardResult<String> {
    let start = name
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| OnboardError::no_numeric_segment(name))?;

    let end = name[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|off| start + off)
        .unwrap_or(name.len());

    Ok(format!("{}{}{}", &name[..start], new_slot, &name[end..]))
}

/// Replaces the final character of `name` with the digit `1`.
///
/// Used to normalize an uplink's last path segment to port 1 after slot
/// remapping. This is a literal last-character substitution: the name is
/// assumed to already end in a single-character numeric token.
pub fn to_one_ended(name: &str) -> String {
    let mut normalized = name.to_string();
    normalized.pop();
    normalized.push('1');
    normalized
}

/// Compares two interface names in natural (numeric-aware) order.
///
/// Names are split into alternating runs of digits and non-digits. Text
/// runs compare byte-wise; digit runs compare by numeric value, so
/// `GigabitEthernet1/0/9` sorts before `GigabitEthernet1/0/10`. Names
/// whose token streams compare equal (e.g. `.../01` vs `.../1`) fall back
/// to plain byte-wise comparison, making this a total order.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut lhs = a;
    let mut rhs = b;

    while !lhs.is_empty() && !rhs.is_empty() {
        let (l_tok, l_rest, l_digits) = next_token(lhs);
        let (r_tok, r_rest, r_digits) = next_token(rhs);

        let ord = if l_digits && r_digits {
            compare_digit_runs(l_tok, r_tok)
        } else {
            l_tok.cmp(r_tok)
        };
        if ord != Ordering::Equal {
            return ord;
        }

        lhs = l_rest;
        rhs = r_rest;
    }

    match lhs.len().cmp(&rhs.len()) {
        // Token streams match; settle `01` vs `1` style ties byte-wise.
        Ordering::Equal => a.cmp(b),
        ord => ord,
    }
}

/// Splits off the leading token: a maximal run of digits or non-digits.
/// Returns (token, rest, is_digit_run).
fn next_token(s: &str) -> (&str, &str, bool) {
    let digits = s.starts_with(|c: char| c.is_ascii_digit());
    let end = s
        .find(|c: char| c.is_ascii_digit() != digits)
        .unwrap_or(s.len());
    (&s[..end], &s[end..], digits)
}

/// Compares two digit runs by numeric value without parsing: the run with
/// more significant digits is larger, equal-length runs compare
/// lexicographically.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_slot_three_part_name() {
        assert_eq!(
            replace_slot("GigabitEthernet1/0/1", 2).unwrap(),
            "GigabitEthernet2/0/1"
        );
        assert_eq!(
            replace_slot("TenGigabitEthernet1/1/4", 3).unwrap(),
            "TenGigabitEthernet3/1/4"
        );
    }

    #[test]
    fn test_replace_slot_widens_name() {
        assert_eq!(
            replace_slot("GigabitEthernet1/0/1", 12).unwrap(),
            "GigabitEthernet12/0/1"
        );
    }

    #[test]
    fn test_replace_slot_multi_digit_run() {
        // The whole first digit run is replaced, not just its first digit.
        assert_eq!(replace_slot("Port42/1", 5).unwrap(), "Port5/1");
    }

    #[test]
    fn test_replace_slot_digits_at_end() {
        assert_eq!(replace_slot("Po1", 2).unwrap(), "Po2");
    }

    #[test]
    fn test_replace_slot_no_digits() {
        let err = replace_slot("NoDigitsHere", 5).unwrap_err();
        assert!(matches!(
            err,
            onboard_common::OnboardError::NoNumericSegment { .. }
        ));
    }

    #[test]
    fn test_to_one_ended() {
        assert_eq!(to_one_ended("TenGigabitEthernet3/1/4"), "TenGigabitEthernet3/1/1");
        assert_eq!(to_one_ended("GigabitEthernet2/1/2"), "GigabitEthernet2/1/1");
    }

    #[test]
    fn test_remap_then_normalize_uplink() {
        // The stack uplink-2 path: reslot to the last member, then land on port 1.
        let remapped = replace_slot("TenGigabitEthernet1/1/2", 3).unwrap();
        assert_eq!(to_one_ended(&remapped), "TenGigabitEthernet3/1/1");
    }

    #[test]
    fn test_compare_natural_numeric_aware() {
        assert_eq!(
            compare_natural("GigabitEthernet1/0/9", "GigabitEthernet1/0/10"),
            Ordering::Less
        );
        assert_eq!(
            compare_natural("GigabitEthernet1/0/2", "GigabitEthernet1/0/2"),
            Ordering::Equal
        );
        assert_eq!(
            compare_natural("TenGigabitEthernet1/1/1", "GigabitEthernet1/0/48"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_natural_tie_break_is_bytewise() {
        // Equal token streams resolve deterministically, not as Equal.
        assert_eq!(compare_natural("Port01", "Port1"), Ordering::Less);
        assert_eq!(compare_natural("Port1", "Port01"), Ordering::Greater);
    }
}
