//! Handlers aggregating over the sales collection.

use super::{GroupedSums, suggest, truncate_label};
use crate::data::{Customer, Sale};
use crate::engine::result::{
    AnalysisResult, ChartData, PieChart, SeriesChart, SeriesPoint, TableData,
};
use crate::util::format::{money, money2, pct1};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Revenue per category as a share of the total, ordered by revenue.
pub fn category_revenue(sales: &[Sale]) -> AnalysisResult {
    let suggestions = suggest(&[
        "What are the top 5 products?",
        "Show sales trends for the last 6 months",
        "Which channel performs best?",
    ]);
    if sales.is_empty() {
        return AnalysisResult::insufficient_data(
            "There are no sales recorded yet, so category revenue can't be broken down.",
            suggestions,
        );
    }

    let mut groups = GroupedSums::new();
    for s in sales {
        groups.add(s.category.clone(), s.revenue(), s.quantity as u64);
    }
    let mut rows = groups.into_entries();
    rows.sort_by(|a, b| b.1.total.partial_cmp(&a.1.total).unwrap_or(Ordering::Equal));

    let total: f64 = rows.iter().map(|(_, acc)| acc.total).sum();
    let (top_category, top_acc) = &rows[0];

    let mut table = TableData::new(["Category", "Revenue", "Items Sold", "% of Total"]);
    for (category, acc) in &rows {
        table.push_row(vec![
            category.clone(),
            money(acc.total),
            acc.count.to_string(),
            pct1(acc.total / total * 100.0),
        ]);
    }

    let chart = ChartData::Pie(PieChart {
        title: "Revenue by Product Category".to_string(),
        slices: rows
            .iter()
            .map(|(category, acc)| SeriesPoint::new(category.clone(), acc.total))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "Revenue breakdown by category shows {top_category} leading with {} ({} of \
             total). Total revenue across all categories is {}. Consider expanding \
             inventory in top-performing categories.",
            money(top_acc.total),
            pct1(top_acc.total / total * 100.0),
            money(total)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Top N products by revenue.
pub fn top_products(sales: &[Sale], count: usize) -> AnalysisResult {
    let suggestions = suggest(&[
        "Show revenue by category",
        "Which channel has the most sales?",
        "What are the recent purchases?",
    ]);
    if sales.is_empty() {
        return AnalysisResult::insufficient_data(
            "There are no sales recorded yet, so products can't be ranked.",
            suggestions,
        );
    }

    struct ProductAcc {
        revenue: f64,
        quantity: u64,
        category: String,
    }
    let mut products: Vec<(String, ProductAcc)> = Vec::new();
    for s in sales {
        match products.iter_mut().find(|(name, _)| *name == s.product) {
            Some((_, acc)) => {
                acc.revenue += s.revenue();
                acc.quantity += s.quantity as u64;
            }
            None => products.push((
                s.product.clone(),
                ProductAcc {
                    revenue: s.revenue(),
                    quantity: s.quantity as u64,
                    category: s.category.clone(),
                },
            )),
        }
    }
    products.sort_by(|a, b| {
        b.1.revenue
            .partial_cmp(&a.1.revenue)
            .unwrap_or(Ordering::Equal)
    });
    products.truncate(count);
    if products.is_empty() {
        return AnalysisResult::insufficient_data(
            "A top products ranking needs a count of at least one.",
            suggestions,
        );
    }

    let (leader_name, leader) = &products[0];

    let mut table = TableData::new(["Rank", "Product", "Category", "Revenue", "Qty Sold"]);
    for (i, (name, acc)) in products.iter().enumerate() {
        table.push_row(vec![
            (i + 1).to_string(),
            name.clone(),
            acc.category.clone(),
            money(acc.revenue),
            acc.quantity.to_string(),
        ]);
    }

    let chart = ChartData::Bar(SeriesChart {
        title: format!("Top {count} Products by Revenue"),
        x_label: "Product".to_string(),
        y_label: "Revenue".to_string(),
        points: products
            .iter()
            .map(|(name, acc)| SeriesPoint::new(truncate_label(name, 15), acc.revenue))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "The top {count} products by revenue are led by \"{leader_name}\" in the {} \
             category, generating {}. These top products account for a significant \
             portion of total sales. Consider featuring these items prominently in \
             marketing campaigns.",
            leader.category,
            money(leader.revenue)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Revenue and order count per sales channel.
pub fn channel_performance(sales: &[Sale]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Show sales trends",
        "What are the top products?",
        "Analyze customer locations",
    ]);
    if sales.is_empty() {
        return AnalysisResult::insufficient_data(
            "There are no sales recorded yet, so channels can't be compared.",
            suggestions,
        );
    }

    let mut groups = GroupedSums::new();
    for s in sales {
        groups.add(s.channel, s.revenue(), 1);
    }
    let mut rows = groups.into_entries();
    rows.sort_by(|a, b| b.1.total.partial_cmp(&a.1.total).unwrap_or(Ordering::Equal));

    let total: f64 = rows.iter().map(|(_, acc)| acc.total).sum();
    let (top_channel, top_acc) = &rows[0];
    let (bottom_channel, _) = &rows[rows.len() - 1];

    let mut table = TableData::new(["Channel", "Revenue", "Orders", "% of Total"]);
    for (channel, acc) in &rows {
        table.push_row(vec![
            channel.to_string(),
            money(acc.total),
            acc.count.to_string(),
            pct1(acc.total / total * 100.0),
        ]);
    }

    let chart = ChartData::Pie(PieChart {
        title: "Revenue by Sales Channel".to_string(),
        slices: rows
            .iter()
            .map(|(channel, acc)| SeriesPoint::new(channel.to_string(), acc.total))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "{top_channel} is the top-performing channel with {} in revenue ({} of \
             total). The {bottom_channel} channel has the lowest performance. Consider \
             investing more in {top_channel} marketing and improving {bottom_channel} \
             conversion strategies.",
            money(top_acc.total),
            pct1(top_acc.total / total * 100.0)
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Mean order value overall and per channel.
pub fn average_order(sales: &[Sale]) -> AnalysisResult {
    let suggestions = suggest(&[
        "What is the total revenue?",
        "Show top products",
        "Analyze customer segments",
    ]);
    if sales.is_empty() {
        return AnalysisResult::insufficient_data(
            "There are no sales recorded yet, so no average order value can be computed.",
            suggestions,
        );
    }

    let total: f64 = sales.iter().map(Sale::revenue).sum();
    let avg_order = total / sales.len() as f64;

    let mut groups = GroupedSums::new();
    for s in sales {
        groups.add(s.channel, s.revenue(), 1);
    }
    let mut rows: Vec<_> = groups
        .into_entries()
        .into_iter()
        .map(|(channel, acc)| (channel, (acc.total / acc.count as f64).round(), acc.count))
        .collect();
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut table = TableData::new(["Channel", "Avg Order Value", "Total Orders"]);
    for (channel, avg, count) in &rows {
        table.push_row(vec![channel.to_string(), money(*avg), count.to_string()]);
    }

    let chart = ChartData::Bar(SeriesChart {
        title: "Average Order Value by Channel".to_string(),
        x_label: "Channel".to_string(),
        y_label: "Avg Order Value".to_string(),
        points: rows
            .iter()
            .map(|(channel, avg, _)| SeriesPoint::new(channel.to_string(), *avg))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "The average order value across all transactions is {}. {} has the highest \
             average order value. Implementing upselling strategies could help increase \
             this metric.",
            money2(avg_order),
            rows[0].0
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// The ten most recent sales, with customer ids resolved to display names.
pub fn recent_purchases(sales: &[Sale], customers: &[Customer]) -> AnalysisResult {
    let suggestions = suggest(&[
        "What are the top products?",
        "Show channel performance",
        "Analyze customer segments",
    ]);
    if sales.is_empty() {
        return AnalysisResult::insufficient_data(
            "There are no sales recorded yet, so recent purchases can't be listed.",
            suggestions,
        );
    }

    let mut recent: Vec<&Sale> = sales.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(10);

    let names: HashMap<&str, &str> = customers
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    // Dominant category among the recent window drives the narrative.
    let mut categories = GroupedSums::new();
    for s in &recent {
        categories.add(s.category.clone(), 0.0, 1);
    }
    let category_counts = categories.into_entries();
    let leading_category = category_counts
        .iter()
        .fold(&category_counts[0], |best, entry| {
            if entry.1.count > best.1.count {
                entry
            } else {
                best
            }
        })
        .0
        .clone();

    let latest = recent[0];

    let mut table = TableData::new(["Date", "Customer", "Product", "Amount", "Channel"]);
    for s in &recent {
        table.push_row(vec![
            s.date.to_string(),
            names
                .get(s.customer_id.as_str())
                .map(|name| name.to_string())
                .unwrap_or_else(|| s.customer_id.clone()),
            s.product.clone(),
            money(s.revenue()),
            s.channel.to_string(),
        ]);
    }

    let chart = ChartData::Bar(SeriesChart {
        title: "Recent Purchase Amounts".to_string(),
        x_label: "Product".to_string(),
        y_label: "Amount".to_string(),
        points: recent
            .iter()
            .take(5)
            .map(|s| SeriesPoint::new(truncate_label(&s.product, 12), s.revenue()))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "The most recent transactions show active customer engagement. The latest \
             purchase was on {} for {}. The {leading_category} category leads recent \
             purchase activity, indicating strong demand in that segment.",
            latest.date, latest.product
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
    use crate::data::{Channel, Gender, Segment};
    use chrono::NaiveDate;

    fn sale(id: &str, category: &str, amount: f64, quantity: u32) -> Sale {
        Sale {
            id: id.to_string(),
            customer_id: "C1".to_string(),
            product: format!("Product {id}"),
            category: category.to_string(),
            amount,
            quantity,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            channel: Channel::Website,
        }
    }

    #[test]
    fn category_revenue_sums_and_percentages() {
        let sales = vec![
            sale("S1", "A", 10.0, 2),
            sale("S2", "A", 5.0, 1),
            sale("S3", "B", 20.0, 1),
        ];
        let result = category_revenue(&sales);
        let table = result.table.expect("table");
        assert_eq!(table.rows[0][0], "A");
        assert_eq!(table.rows[0][1], "$25");
        assert_eq!(table.rows[0][3], "55.6%");
        assert_eq!(table.rows[1][0], "B");
        assert_eq!(table.rows[1][1], "$20");
        assert!(result.summary.contains("$45"));
    }

    #[test]
    fn top_products_ranks_by_revenue() {
        let mut sales = vec![
            sale("S1", "A", 10.0, 1),
            sale("S2", "B", 100.0, 2),
            sale("S3", "A", 50.0, 1),
        ];
        // same product sold twice accumulates
        sales.push(Sale {
            product: "Product S1".to_string(),
            ..sale("S4", "A", 45.0, 1)
        });
        let result = top_products(&sales, 2);
        let table = result.table.expect("table");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "Product S2");
        assert_eq!(table.rows[0][3], "$200");
        assert_eq!(table.rows[1][1], "Product S1");
        assert_eq!(table.rows[1][3], "$55");
    }

    #[test]
    fn top_zero_products_returns_graceful_result() {
        let sales = vec![sale("S1", "A", 10.0, 1)];
        let result = top_products(&sales, 0);
        assert!(!result.is_error());
        assert!(result.table.is_none());
        assert!(result.chart.is_none());
        assert!((1..=5).contains(&result.suggestions.len()));
    }

    #[test]
    fn average_order_uses_two_decimals() {
        let sales = vec![sale("S1", "A", 10.0, 1), sale("S2", "A", 5.0, 1)];
        let result = average_order(&sales);
        assert!(result.summary.contains("$7.50"));
    }

    #[test]
    fn recent_purchases_resolve_customer_names_with_fallback() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let customers = vec![Customer {
            id: "C1".to_string(),
            name: "Emma Wilson".to_string(),
            email: "emma@example.com".to_string(),
            age: 28,
            gender: Gender::Female,
            location: "New York".to_string(),
            segment: Segment::Premium,
            total_spent: 100.0,
            orders_count: 1,
            last_purchase: day,
            join_date: day,
        }];
        let mut sales = vec![sale("S1", "A", 10.0, 1)];
        sales.push(Sale {
            customer_id: "C999".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            ..sale("S2", "B", 20.0, 1)
        });
        let result = recent_purchases(&sales, &customers);
        let table = result.table.expect("table");
        // newest first; unknown id falls back to the raw id
        assert_eq!(table.rows[0][0], "2024-01-20");
        assert_eq!(table.rows[0][1], "C999");
        assert_eq!(table.rows[1][1], "Emma Wilson");
    }

    #[test]
    fn recent_purchases_cap_at_ten_rows() {
        let sales: Vec<Sale> = (0..14)
            .map(|i| Sale {
                date: NaiveDate::from_ymd_opt(2024, 1, 1 + i).unwrap(),
                ..sale(&format!("S{i}"), "A", 10.0, 1)
            })
            .collect();
        let result = recent_purchases(&sales, &[]);
        assert_eq!(result.table.expect("table").rows.len(), 10);
    }

    #[test]
    fn empty_sales_collections_return_graceful_results() {
        for result in [
            category_revenue(&[]),
            top_products(&[], 5),
            channel_performance(&[]),
            average_order(&[]),
            recent_purchases(&[], &[]),
        ] {
            assert!(!result.is_error());
            assert!(result.table.is_none());
            let len = result.suggestions.len();
            assert!((1..=5).contains(&len));
        }
    }
}
