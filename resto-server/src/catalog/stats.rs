//! Aggregation/Summary Calculator
//!
//! Counts and percentages for the dashboard summary cards, and grouped
//! counts (e.g. staff per role). A zero-sized collection always yields
//! 0%, never NaN.

use serde::Serialize;

/// Count the records satisfying `predicate`
pub fn count_where<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

/// Percentage of `count` over `total`, rounded half-up.
///
/// Returns 0 when `total` is 0 — dividing a summary card by an empty
/// collection is a defined 0%, not an error.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// One group of a grouped aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub group: String,
    pub count: usize,
}

/// Count records per group for a fixed, enumerated group list.
///
/// Groups with zero matches still appear with count 0. The result is
/// ordered by descending count; ties keep the original group-list order
/// (stable sort).
pub fn count_by_group<T>(
    records: &[T],
    groups: &[&str],
    key: impl Fn(&T) -> &str,
) -> Vec<GroupCount> {
    let mut counts: Vec<GroupCount> = groups
        .iter()
        .map(|group| GroupCount {
            group: group.to_string(),
            count: records.iter().filter(|r| key(r) == *group).count(),
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Member {
        role: &'static str,
    }

    fn members(roles: &[&'static str]) -> Vec<Member> {
        roles.iter().map(|role| Member { role }).collect()
    }

    #[test]
    fn count_where_counts_matches() {
        let staff = members(&["Koki", "Pelayan", "Koki"]);
        assert_eq!(count_where(&staff, |m| m.role == "Koki"), 2);
        assert_eq!(count_where(&staff, |m| m.role == "Kasir"), 0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(3, 8), 38); // 37.5 rounds up
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn percentage_of_empty_collection_is_zero() {
        // Regression: an empty collection must never produce NaN
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn grouped_counts_include_empty_groups() {
        let staff = members(&["Koki", "Pelayan", "Koki", "Admin"]);
        let groups = ["Admin", "Kasir", "Pelayan", "Koki"];
        let counts = count_by_group(&staff, &groups, |m| m.role);

        assert_eq!(counts.len(), groups.len());
        assert!(counts.iter().any(|g| g.group == "Kasir" && g.count == 0));
    }

    #[test]
    fn grouped_counts_sorted_desc_with_stable_ties() {
        let staff = members(&["Koki", "Pelayan", "Koki", "Admin"]);
        let groups = ["Admin", "Kasir", "Pelayan", "Koki"];
        let counts = count_by_group(&staff, &groups, |m| m.role);

        assert_eq!(counts[0].group, "Koki");
        assert_eq!(counts[0].count, 2);
        // Admin and Pelayan both count 1; Admin precedes in the group list
        assert_eq!(counts[1].group, "Admin");
        assert_eq!(counts[2].group, "Pelayan");
        assert_eq!(counts[3].group, "Kasir");
    }

    #[test]
    fn exhaustive_groups_sum_to_collection_size() {
        let staff = members(&["Koki", "Pelayan", "Koki", "Admin", "Kasir", "Kasir"]);
        let groups = ["Admin", "Kasir", "Pelayan", "Koki"];
        let counts = count_by_group(&staff, &groups, |m| m.role);
        let sum: usize = counts.iter().map(|g| g.count).sum();
        assert_eq!(sum, staff.len());
    }
}
