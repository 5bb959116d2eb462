//! One pure aggregation handler per intent.
//!
//! Handlers never mutate their input collections, sort on derived copies,
//! and guard empty input with an "insufficient data" summary instead of
//! letting a mean or percentage divide by zero. Every handler attaches its
//! own fixed follow-up suggestion list.

mod customers;
mod sales;
mod traffic;
mod trends;

pub use customers::{
    age_group_spending, correlation, customer_count, customer_segments, gender_distribution,
    location_analysis, top_customers,
};
pub use sales::{average_order, category_revenue, channel_performance, recent_purchases, top_products};
pub use traffic::web_activity;
pub use trends::{sales_trend, total_revenue};

pub(crate) fn suggest(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Age buckets shared by the age-group and correlation handlers.
/// Lower bounds are inclusive: age 25 lands in "25-34", age 55 in "55+".
pub(crate) const AGE_BUCKET_LABELS: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];

pub(crate) fn age_bucket_index(age: u32) -> usize {
    match age {
        0..=24 => 0,
        25..=34 => 1,
        35..=44 => 2,
        45..=54 => 3,
        _ => 4,
    }
}

/// Shortens a label for chart axes, keeping the table text untouched.
pub(crate) fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let mut short: String = label.chars().take(max_chars).collect();
        short.push_str("...");
        short
    } else {
        label.to_string()
    }
}

/// Accumulates values under first-seen keys, keeping insertion order so
/// that tie-breaks after sorting stay deterministic.
pub(crate) struct GroupedSums<K> {
    entries: Vec<(K, GroupAcc)>,
}

#[derive(Default, Clone, Copy)]
pub(crate) struct GroupAcc {
    pub total: f64,
    pub count: u64,
}

impl<K: PartialEq> GroupedSums<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, key: K, amount: f64, count: u64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, acc)) => {
                acc.total += amount;
                acc.count += count;
            }
            None => self.entries.push((
                key,
                GroupAcc {
                    total: amount,
                    count,
                },
            )),
        }
    }

    pub fn into_entries(self) -> Vec<(K, GroupAcc)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_buckets_are_lower_bound_inclusive() {
        assert_eq!(AGE_BUCKET_LABELS[age_bucket_index(18)], "18-24");
        assert_eq!(AGE_BUCKET_LABELS[age_bucket_index(24)], "18-24");
        assert_eq!(AGE_BUCKET_LABELS[age_bucket_index(25)], "25-34");
        assert_eq!(AGE_BUCKET_LABELS[age_bucket_index(34)], "25-34");
        assert_eq!(AGE_BUCKET_LABELS[age_bucket_index(54)], "45-54");
        assert_eq!(AGE_BUCKET_LABELS[age_bucket_index(55)], "55+");
        assert_eq!(AGE_BUCKET_LABELS[age_bucket_index(80)], "55+");
    }

    #[test]
    fn truncation_appends_ellipsis_only_when_needed() {
        assert_eq!(truncate_label("Yoga Mat", 15), "Yoga Mat");
        assert_eq!(truncate_label("Premium Headphones", 15), "Premium Headpho...");
    }

    #[test]
    fn grouped_sums_keep_first_seen_order() {
        let mut groups = GroupedSums::new();
        groups.add("b", 1.0, 1);
        groups.add("a", 2.0, 1);
        groups.add("b", 3.0, 2);
        let entries = groups.into_entries();
        assert_eq!(entries[0].0, "b");
        assert_eq!(entries[0].1.total, 4.0);
        assert_eq!(entries[0].1.count, 3);
        assert_eq!(entries[1].0, "a");
    }
}
