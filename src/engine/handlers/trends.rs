//! Handlers aggregating over the monthly market-trend series.

use super::suggest;
use crate::data::{MarketTrend, Sale};
use crate::engine::result::{AnalysisResult, ChartData, SeriesChart, SeriesPoint, TableData};
use crate::util::format::{group_thousands, money, pct1};

/// Revenue over the trailing N-month window, with first-to-last growth and
/// the peak month (first occurrence wins ties).
pub fn sales_trend(trends: &[MarketTrend], months: usize) -> AnalysisResult {
    let suggestions = suggest(&[
        "What is the total revenue?",
        "Show channel performance comparison",
        "Analyze customer growth",
    ]);
    let start = trends.len().saturating_sub(months);
    let window = &trends[start..];
    if window.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no market trend data for the requested window.",
            suggestions,
        );
    }

    let total: f64 = window.iter().map(|t| t.revenue).sum();
    let avg = total / window.len() as f64;
    let first = &window[0];
    let last = &window[window.len() - 1];
    let peak = window
        .iter()
        .fold(first, |max, t| if t.revenue > max.revenue { t } else { max });

    let growth_sentence = if first.revenue > 0.0 {
        let growth = (last.revenue - first.revenue) / first.revenue * 100.0;
        format!(
            "Revenue {} by {} from {} to {}.",
            if growth >= 0.0 { "grew" } else { "declined" },
            pct1(growth.abs()),
            first.month,
            last.month
        )
    } else {
        format!(
            "Growth from {} is undefined because that month recorded no revenue.",
            first.month
        )
    };

    let mut table = TableData::new([
        "Month",
        "Revenue",
        "Customers",
        "Avg Order Value",
        "Return Rate",
    ]);
    for t in window {
        table.push_row(vec![
            t.month.clone(),
            money(t.revenue),
            group_thousands(t.customers),
            money(t.avg_order_value),
            format!("{}%", t.return_rate),
        ]);
    }

    let chart = ChartData::Area(SeriesChart {
        title: format!("Revenue Trend (Last {months} Months)"),
        x_label: "Month".to_string(),
        y_label: "Revenue".to_string(),
        points: window
            .iter()
            .map(|t| SeriesPoint::new(t.month.clone(), t.revenue))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "Over the last {months} months, total revenue reached {} with an average \
             monthly revenue of {}. {growth_sentence} Peak performance was in {}.",
            money(total),
            money(avg),
            peak.month
        ),
        table: Some(table),
        chart: Some(chart),
        suggestions,
        error: None,
    }
}

/// Annual revenue from the trend series alongside the current sample
/// transactions, with month-over-month growth for the recent half year.
pub fn total_revenue(sales: &[Sale], trends: &[MarketTrend]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Show sales trends for the last 6 months",
        "What is the average order value?",
        "Analyze revenue by category",
    ]);
    if trends.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no market trend data available, so total revenue can't be reported.",
            suggestions,
        );
    }

    let sample_revenue: f64 = sales.iter().map(Sale::revenue).sum();
    let yearly_revenue: f64 = trends.iter().map(|t| t.revenue).sum();
    let peak = trends.iter().fold(&trends[0], |max, t| {
        if t.revenue > max.revenue { t } else { max }
    });

    let start = trends.len().saturating_sub(6);
    let recent = &trends[start..];
    let mut table = TableData::new(["Period", "Revenue", "Growth"]);
    for (i, t) in recent.iter().enumerate() {
        let growth = if i == 0 {
            "-".to_string()
        } else {
            let prev = &recent[i - 1];
            if prev.revenue > 0.0 {
                pct1((t.revenue - prev.revenue) / prev.revenue * 100.0)
            } else {
                "-".to_string()
            }
        };
        table.push_row(vec![t.month.clone(), money(t.revenue), growth]);
    }

    let chart = ChartData::Area(SeriesChart {
        title: "Monthly Revenue Trend".to_string(),
        x_label: "Month".to_string(),
        y_label: "Revenue".to_string(),
        points: trends
            .iter()
            .map(|t| {
                let short: String = t.month.chars().take(3).collect();
                SeriesPoint::new(short, t.revenue)
            })
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "Total annual revenue from market trends data is {}. Current sample data \
             shows {} in transactions. Revenue has shown consistent growth with {} being \
             the peak month at {}.",
            money(yearly_revenue),
            money(sample_revenue),
            peak.month,
            money(peak.revenue)
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

    fn trend(month: &str, revenue: f64) -> MarketTrend {
        MarketTrend {
            month: month.to_string(),
            revenue,
            customers: 1000,
            avg_order_value: 100.0,
            return_rate: 5.0,
        }
    }

    #[test]
    fn trend_window_takes_most_recent_entries() {
        let trends = vec![
            trend("Jan", 100.0),
            trend("Feb", 200.0),
            trend("Mar", 150.0),
            trend("Apr", 300.0),
        ];
        let result = sales_trend(&trends, 2);
        let table = result.table.expect("table");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Mar");
        assert_eq!(table.rows[1][0], "Apr");
        // growth from 150 to 300
        assert!(result.summary.contains("grew by 100.0%"));
        assert!(result.summary.contains("Peak performance was in Apr"));
    }

    #[test]
    fn trend_peak_prefers_first_occurrence_on_ties() {
        let trends = vec![trend("Jan", 300.0), trend("Feb", 300.0), trend("Mar", 100.0)];
        let result = sales_trend(&trends, 3);
        assert!(result.summary.contains("Peak performance was in Jan"));
    }

    #[test]
    fn trend_decline_is_reported_as_such() {
        let trends = vec![trend("Jan", 200.0), trend("Feb", 100.0)];
        let result = sales_trend(&trends, 2);
        assert!(result.summary.contains("declined by 50.0%"));
    }

    #[test]
    fn total_revenue_names_the_actual_peak_month() {
        let trends = vec![trend("Jan", 100.0), trend("Feb", 900.0), trend("Mar", 200.0)];
        let result = total_revenue(&[], &trends);
        assert!(result.summary.contains("Feb being the peak month at $900"));
        assert!(result.summary.contains("$1,200"));
        let table = result.table.expect("table");
        assert_eq!(table.rows[0][2], "-");
        assert_eq!(table.rows[1][2], "800.0%");
        assert_eq!(table.rows[2][2], "-77.8%");
    }

    #[test]
    fn empty_trend_collections_return_graceful_results() {
        for result in [sales_trend(&[], 6), total_revenue(&[], &[])] {
            assert!(!result.is_error());
            assert!(result.table.is_none());
            let len = result.suggestions.len();
            assert!((1..=5).contains(&len));
        }
    }
}
