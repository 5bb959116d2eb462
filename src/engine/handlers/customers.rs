//! Handlers aggregating over the customer collection.

use super::{AGE_BUCKET_LABELS, GroupedSums, age_bucket_index, suggest};
use crate::data::Customer;
use crate::engine::result::{
    AnalysisResult, ChartData, PieChart, ScatterChart, ScatterPoint, SeriesChart, SeriesPoint,
    TableData,
};
use crate::util::format::{group_thousands, money, pct1};
use std::cmp::Ordering;

/// Top N customers by total spend. Ties keep insertion order (stable sort).
pub fn top_customers(customers: &[Customer], count: usize) -> AnalysisResult {
    let suggestions = suggest(&[
        "Show me customer segments breakdown",
        "Which age group spends the most?",
        "What are the recent purchases?",
    ]);
    if customers.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no customer data available yet, so I can't rank top customers.",
            suggestions,
        );
    }

    let mut ranked: Vec<&Customer> = customers.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_spent
            .partial_cmp(&a.total_spent)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(count);
    if ranked.is_empty() {
        return AnalysisResult::insufficient_data(
            "A top customers ranking needs a count of at least one.",
            suggestions,
        );
    }

    let total: f64 = ranked.iter().map(|c| c.total_spent).sum();
    let avg = total / ranked.len() as f64;
    let leader = ranked[0];

    let mut table = TableData::new([
        "Rank",
        "Customer",
        "Location",
        "Segment",
        "Total Spent",
        "Orders",
    ]);
    for (i, c) in ranked.iter().enumerate() {
        table.push_row(vec![
            (i + 1).to_string(),
            c.name.clone(),
            c.location.clone(),
            c.segment.to_string(),
            money(c.total_spent),
            c.orders_count.to_string(),
        ]);
    }

    let chart = ChartData::Bar(SeriesChart {
        title: format!("Top {count} Customers by Spending"),
        x_label: "Customer".to_string(),
        y_label: "Total Spent".to_string(),
        points: ranked
            .iter()
            .map(|c| {
                let first_name = c.name.split_whitespace().next().unwrap_or(&c.name);
                SeriesPoint::new(first_name, c.total_spent)
            })
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "The top {count} customers by total purchase amount have spent a combined {}. \
             The average spending among these top customers is {}. \
             {} leads with {} in total purchases.",
            money(total),
            money(avg),
            leader.name,
            money(leader.total_spent)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

struct AgeBucket {
    label: &'static str,
    count: u64,
    total_spent: f64,
    total_orders: u64,
}

fn age_buckets(customers: &[Customer]) -> [AgeBucket; 5] {
    let mut buckets = AGE_BUCKET_LABELS.map(|label| AgeBucket {
        label,
        count: 0,
        total_spent: 0.0,
        total_orders: 0,
    });
    for c in customers {
        let bucket = &mut buckets[age_bucket_index(c.age)];
        bucket.count += 1;
        bucket.total_spent += c.total_spent;
        bucket.total_orders += c.orders_count as u64;
    }
    buckets
}

impl AgeBucket {
    fn avg_spent(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.total_spent / self.count as f64).round()
        }
    }
}

/// Mean spend per fixed age bucket; all five buckets are always listed.
pub fn age_group_spending(customers: &[Customer]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Show gender distribution analysis",
        "Which customers are premium?",
        "What are the top products?",
    ]);
    if customers.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no customer data available yet, so age groups can't be compared.",
            suggestions,
        );
    }

    let buckets = age_buckets(customers);
    // First bucket wins ties, matching first-occurrence-wins elsewhere.
    let top = buckets
        .iter()
        .fold(&buckets[0], |best, b| {
            if b.avg_spent() > best.avg_spent() { b } else { best }
        });

    let mut table = TableData::new(["Age Range", "Customers", "Total Spent", "Average Spent"]);
    for b in &buckets {
        table.push_row(vec![
            b.label.to_string(),
            b.count.to_string(),
            money(b.total_spent),
            money(b.avg_spent()),
        ]);
    }

    let chart = ChartData::Bar(SeriesChart {
        title: "Average Spending by Age Group".to_string(),
        x_label: "Age Range".to_string(),
        y_label: "Average Spent".to_string(),
        points: buckets
            .iter()
            .map(|b| SeriesPoint::new(b.label, b.avg_spent()))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "The {} age group has the highest average spending at {} per customer. \
             This group contains {} customers with a total spend of {}. \
             Consider targeting marketing campaigns towards this demographic for maximum ROI.",
            top.label,
            money(top.avg_spent()),
            top.count,
            money(top.total_spent)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Pearson correlation between customer age and order count.
///
/// A zero-variance input (all ages equal, or all order counts equal) makes
/// the coefficient undefined; that case reports no measurable relationship
/// instead of dividing by zero.
pub fn correlation(customers: &[Customer]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Which age group spends the most?",
        "Show customer segments breakdown",
        "What is the average order value?",
    ]);
    if customers.len() < 2 {
        return AnalysisResult::insufficient_data(
            "At least two customers are needed to measure a correlation between age and purchase frequency.",
            suggestions,
        );
    }

    let n = customers.len() as f64;
    let sum_x: f64 = customers.iter().map(|c| c.age as f64).sum();
    let sum_y: f64 = customers.iter().map(|c| c.orders_count as f64).sum();
    let sum_xy: f64 = customers
        .iter()
        .map(|c| c.age as f64 * c.orders_count as f64)
        .sum();
    let sum_x2: f64 = customers.iter().map(|c| (c.age as f64).powi(2)).sum();
    let sum_y2: f64 = customers
        .iter()
        .map(|c| (c.orders_count as f64).powi(2))
        .sum();

    let denom = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    let coefficient = if denom == 0.0 {
        None
    } else {
        Some((n * sum_xy - sum_x * sum_y) / denom)
    };

    let summary = match coefficient {
        Some(r) => {
            let strength = if r.abs() < 0.3 {
                "weak"
            } else if r.abs() < 0.7 {
                "moderate"
            } else {
                "strong"
            };
            let direction = if r > 0.0 { "positive" } else { "negative" };
            format!(
                "Analysis shows a {strength} {direction} correlation (r = {r:.3}) between \
                 customer age and purchase frequency. This suggests that {} customers tend \
                 to make more purchases. However, other factors like customer segment and \
                 location also significantly influence purchasing behavior.",
                if r > 0.0 { "older" } else { "younger" }
            )
        }
        None => "There is no measurable linear relationship between customer age and \
                 purchase frequency in this dataset; one of the two variables does not \
                 vary at all."
            .to_string(),
    };

    // Breakdown computed from the actual input, one row per age bucket.
    let buckets = age_buckets(customers);
    let mut table = TableData::new(["Age Group", "Avg Orders", "Avg Spending", "Sample Size"]);
    for b in &buckets {
        let (avg_orders, avg_spending) = if b.count == 0 {
            ("-".to_string(), "-".to_string())
        } else {
            (
                format!("{:.1}", b.total_orders as f64 / b.count as f64),
                money(b.avg_spent()),
            )
        };
        table.push_row(vec![
            b.label.to_string(),
            avg_orders,
            avg_spending,
            b.count.to_string(),
        ]);
    }

    let chart = ChartData::Scatter(ScatterChart {
        title: "Age vs Purchase Frequency Correlation".to_string(),
        x_label: "Age".to_string(),
        y_label: "Orders".to_string(),
        points: customers
            .iter()
            .map(|c| ScatterPoint {
                label: format!("Age {}", c.age),
                x: c.age as f64,
                y: c.orders_count as f64,
            })
            .collect(),
    });

    AnalysisResult {
        summary,
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Count, total and mean spend per customer segment, ordered by mean spend.
pub fn customer_segments(customers: &[Customer]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Who are the top customers?",
        "Show age group spending",
        "Analyze customer locations",
    ]);
    if customers.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no customer data available yet, so segments can't be compared.",
            suggestions,
        );
    }

    let mut groups = GroupedSums::new();
    for c in customers {
        groups.add(c.segment, c.total_spent, 1);
    }
    let mut rows: Vec<_> = groups
        .into_entries()
        .into_iter()
        .map(|(segment, acc)| {
            let avg = (acc.total / acc.count as f64).round();
            (segment, acc.count, acc.total, avg)
        })
        .collect();
    rows.sort_by(|a, b| b.3.partial_cmp(&a.3).unwrap_or(Ordering::Equal));

    let (top_segment, top_count, _, top_avg) = rows[0];
    let share = top_count as f64 / customers.len() as f64 * 100.0;

    let mut table = TableData::new(["Segment", "Customers", "Total Spent", "Avg Spent"]);
    for (segment, count, total, avg) in &rows {
        table.push_row(vec![
            segment.to_string(),
            count.to_string(),
            money(*total),
            money(*avg),
        ]);
    }

    let chart = ChartData::Pie(PieChart {
        title: "Customer Segments Distribution".to_string(),
        slices: rows
            .iter()
            .map(|(segment, count, _, _)| SeriesPoint::new(segment.to_string(), *count as f64))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "Customer segmentation analysis shows {top_segment} customers have the highest \
             average spending at {} per customer. This segment represents {top_count} \
             customers ({} of total). Focus on converting Regular customers to Premium \
             status for revenue growth.",
            money(top_avg),
            pct1(share)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Customer count and spend per location, ordered by total spend.
pub fn location_analysis(customers: &[Customer]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Show customer segments",
        "Which age group spends the most?",
        "What is the total revenue?",
    ]);
    if customers.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no customer data available yet, so locations can't be compared.",
            suggestions,
        );
    }

    let mut groups = GroupedSums::new();
    for c in customers {
        groups.add(c.location.clone(), c.total_spent, 1);
    }
    let mut rows = groups.into_entries();
    rows.sort_by(|a, b| b.1.total.partial_cmp(&a.1.total).unwrap_or(Ordering::Equal));

    let (top_location, top_acc) = &rows[0];
    let (weakest_location, _) = &rows[rows.len() - 1];

    let mut table = TableData::new(["Location", "Customers", "Total Spent", "Avg Spent"]);
    for (location, acc) in &rows {
        table.push_row(vec![
            location.clone(),
            acc.count.to_string(),
            money(acc.total),
            money((acc.total / acc.count as f64).round()),
        ]);
    }

    let chart = ChartData::Bar(SeriesChart {
        title: "Revenue by Location".to_string(),
        x_label: "Location".to_string(),
        y_label: "Total Spent".to_string(),
        points: rows
            .iter()
            .take(8)
            .map(|(location, acc)| SeriesPoint::new(location.clone(), acc.total))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "Geographic analysis shows {top_location} as the top market with {} customers \
             and {} in total spending. Markets like {weakest_location} have growth \
             potential. Consider regional marketing campaigns targeting high-value areas.",
            top_acc.count,
            money(top_acc.total)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Headcount with a per-segment breakdown.
pub fn customer_count(customers: &[Customer]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Who are the top customers?",
        "Show customer locations",
        "Analyze age group spending",
    ]);
    if customers.is_empty() {
        return AnalysisResult::insufficient_data(
            "There are no customers in the database yet.",
            suggestions,
        );
    }

    let mut groups = GroupedSums::new();
    for c in customers {
        groups.add(c.segment, 0.0, 1);
    }
    let rows = groups.into_entries();
    let count_of = |name: &str| {
        rows.iter()
            .find(|(segment, _)| segment.to_string() == name)
            .map(|(_, acc)| acc.count)
            .unwrap_or(0)
    };

    let mut table = TableData::new(["Segment", "Count", "Percentage"]);
    for (segment, acc) in &rows {
        table.push_row(vec![
            segment.to_string(),
            acc.count.to_string(),
            pct1(acc.count as f64 / customers.len() as f64 * 100.0),
        ]);
    }

    let chart = ChartData::Pie(PieChart {
        title: "Customer Distribution by Segment".to_string(),
        slices: rows
            .iter()
            .map(|(segment, acc)| SeriesPoint::new(segment.to_string(), acc.count as f64))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "There are {} total customers in the database. {} are Regular customers, \
             {} are Premium, and {} are New customers.",
            group_thousands(customers.len() as u64),
            count_of("Regular"),
            count_of("Premium"),
            count_of("New")
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Headcount and spend per gender, leader picked by mean spend.
pub fn gender_distribution(customers: &[Customer]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Which age group spends the most?",
        "Show customer segments",
        "Analyze customer locations",
    ]);
    if customers.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no customer data available yet, so gender distribution can't be analyzed.",
            suggestions,
        );
    }

    let mut groups = GroupedSums::new();
    for c in customers {
        groups.add(c.gender, c.total_spent, 1);
    }
    let rows: Vec<_> = groups
        .into_entries()
        .into_iter()
        .map(|(gender, acc)| {
            let avg = (acc.total / acc.count as f64).round();
            (gender, acc.count, acc.total, avg)
        })
        .collect();
    let top = rows
        .iter()
        .fold(&rows[0], |best, row| if row.3 > best.3 { row } else { best });

    let composition = rows
        .iter()
        .map(|(gender, count, _, _)| {
            format!(
                "{:.0}% {gender}",
                *count as f64 / customers.len() as f64 * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut table = TableData::new(["Gender", "Customers", "Total Spent", "Avg Spent"]);
    for (gender, count, total, avg) in &rows {
        table.push_row(vec![
            gender.to_string(),
            count.to_string(),
            money(*total),
            money(*avg),
        ]);
    }

    let chart = ChartData::Pie(PieChart {
        title: "Customer Gender Distribution".to_string(),
        slices: rows
            .iter()
            .map(|(gender, count, _, _)| SeriesPoint::new(gender.to_string(), *count as f64))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "Gender analysis shows {} customers have the highest average spending at {}. \
             The customer base is {composition}. Consider gender-specific marketing \
             strategies to increase engagement.",
            top.0,
            money(top.3)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Gender, Segment};
    use chrono::NaiveDate;

    fn customer(id: &str, name: &str, age: u32, total_spent: f64, orders: u32) -> Customer {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            age,
            gender: Gender::Female,
            location: "Springfield".to_string(),
            segment: Segment::Regular,
            total_spent,
            orders_count: orders,
            last_purchase: day,
            join_date: day,
        }
    }

    #[test]
    fn top_customers_breaks_ties_by_insertion_order() {
        let customers = vec![
            customer("C1", "Ann One", 30, 100.0, 1),
            customer("C2", "Bob Two", 30, 300.0, 2),
            customer("C3", "Cat Three", 30, 300.0, 3),
            customer("C4", "Dan Four", 30, 50.0, 4),
        ];
        let result = top_customers(&customers, 2);
        let table = result.table.expect("table");
        assert_eq!(table.rows[0][1], "Bob Two");
        assert_eq!(table.rows[1][1], "Cat Three");
        assert!(result.summary.contains("$600"));
        assert!(result.summary.contains("$300"));
        assert!(result.summary.contains("Bob Two leads"));
    }

    #[test]
    fn top_zero_customers_returns_graceful_result() {
        let customers = vec![customer("C1", "Ann One", 30, 100.0, 1)];
        let result = top_customers(&customers, 0);
        assert!(!result.is_error());
        assert!(result.table.is_none());
        assert!(result.chart.is_none());
        assert!((1..=5).contains(&result.suggestions.len()));
    }

    #[test]
    fn top_customers_chart_uses_first_names() {
        let customers = vec![customer("C1", "Ann One", 30, 100.0, 1)];
        let result = top_customers(&customers, 5);
        match result.chart {
            Some(ChartData::Bar(chart)) => {
                assert_eq!(chart.points[0].name, "Ann");
                assert_eq!(chart.points[0].value, 100.0);
            }
            other => panic!("expected bar chart, got {other:?}"),
        }
    }

    #[test]
    fn age_boundaries_fall_in_upper_bucket() {
        let customers = vec![
            customer("C1", "A", 25, 1000.0, 5),
            customer("C2", "B", 55, 500.0, 2),
        ];
        let result = age_group_spending(&customers);
        let table = result.table.expect("table");
        assert_eq!(table.rows.len(), 5, "all buckets listed even when empty");
        // age 25 counted in 25-34, not 18-24
        assert_eq!(table.rows[0][1], "0");
        assert_eq!(table.rows[1][1], "1");
        // age 55 counted in 55+
        assert_eq!(table.rows[4][1], "1");
    }

    #[test]
    fn perfectly_linear_data_is_strong_positive() {
        let customers = vec![
            customer("C1", "A", 20, 100.0, 20),
            customer("C2", "B", 30, 200.0, 30),
            customer("C3", "C", 40, 300.0, 40),
        ];
        let result = correlation(&customers);
        assert!(result.summary.contains("strong positive"));
        assert!(result.summary.contains("r = 1.000"));
    }

    #[test]
    fn constant_orders_yield_no_measurable_relationship() {
        let customers = vec![
            customer("C1", "A", 20, 100.0, 7),
            customer("C2", "B", 30, 200.0, 7),
            customer("C3", "C", 40, 300.0, 7),
        ];
        let result = correlation(&customers);
        assert!(result.summary.contains("no measurable linear relationship"));
        assert!(!result.is_error());
    }

    #[test]
    fn correlation_breakdown_is_computed_from_input() {
        let customers = vec![
            customer("C1", "A", 20, 400.0, 2),
            customer("C2", "B", 22, 600.0, 4),
            customer("C3", "C", 30, 1000.0, 10),
        ];
        let result = correlation(&customers);
        let table = result.table.expect("table");
        // 18-24 bucket: two customers, 3.0 avg orders, $500 avg spend
        assert_eq!(table.rows[0], vec!["18-24", "3.0", "$500", "2"]);
        // empty buckets show dashes, not zeros from a division
        assert_eq!(table.rows[2], vec!["35-44", "-", "-", "0"]);
    }

    #[test]
    fn empty_customer_collections_return_graceful_results() {
        for result in [
            top_customers(&[], 5),
            age_group_spending(&[]),
            correlation(&[]),
            customer_segments(&[]),
            location_analysis(&[]),
            customer_count(&[]),
            gender_distribution(&[]),
        ] {
            assert!(!result.is_error());
            assert!(result.table.is_none());
            assert!(result.chart.is_none());
            let len = result.suggestions.len();
            assert!((1..=5).contains(&len));
        }
    }
}
