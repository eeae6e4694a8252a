//! Menu entry ordering.
//!
//! Entries are ordered by their source name. Numeric ordering compares
//! digit runs by value, so `2-setup` sorts before `10-advanced`.

use std::cmp::Ordering;

/// Compare two entry names for menu ordering.
pub(crate) fn compare_names(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric { natural_cmp(a, b) } else { a.cmp(b) }
}

/// Compare strings treating digit runs as numbers.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (run_a, next_i) = digit_run(a, i);
            let (run_b, next_j) = digit_run(b, j);
            match compare_digit_runs(run_a, run_b) {
                Ordering::Equal => {
                    i = next_i;
                    j = next_j;
                }
                other => return other,
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Slice out a run of ASCII digits starting at `start`, returning the run
/// and the index past its end.
fn digit_run(s: &[u8], start: usize) -> (&[u8], usize) {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    (&s[start..end], end)
}

/// Compare digit runs numerically without parsing: leading zeros are
/// stripped, more significant digits win, equal lengths compare bytewise.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_cmp_digit_runs_by_value() {
        assert_eq!(natural_cmp("2-setup", "10-advanced"), Ordering::Less);
        assert_eq!(natural_cmp("10-advanced", "2-setup"), Ordering::Greater);
        assert_eq!(natural_cmp("ch2", "ch10"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_plain_strings() {
        assert_eq!(natural_cmp("alpha", "beta"), Ordering::Less);
        assert_eq!(natural_cmp("beta", "beta"), Ordering::Equal);
        assert_eq!(natural_cmp("gamma", "beta"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_prefix_is_less() {
        assert_eq!(natural_cmp("guide", "guide-2"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_leading_zeros() {
        assert_eq!(natural_cmp("02-a", "2-a"), Ordering::Equal);
        assert_eq!(natural_cmp("02-a", "10-a"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_huge_numbers() {
        // Values beyond u64 still compare by digit count
        assert_eq!(
            natural_cmp("99999999999999999999-a", "100000000000000000000-a"),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_names_lexicographic_when_numeric_off() {
        assert_eq!(compare_names("10-a", "2-a", false), Ordering::Less);
        assert_eq!(compare_names("10-a", "2-a", true), Ordering::Greater);
    }
}
