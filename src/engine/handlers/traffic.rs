//! Website traffic summary handler.

use super::suggest;
use crate::data::WebActivity;
use crate::engine::result::{AnalysisResult, ChartData, SeriesChart, SeriesPoint, TableData};
use crate::util::format::group_thousands;

/// Totals over the analyzed period, last seven days tabulated, full daily
/// page-view series charted.
pub fn web_activity(activity: &[WebActivity]) -> AnalysisResult {
    let suggestions = suggest(&[
        "Show sales trends",
        "What is the conversion rate?",
        "Analyze channel performance",
    ]);
    if activity.is_empty() {
        return AnalysisResult::insufficient_data(
            "There is no web activity recorded yet, so traffic can't be summarized.",
            suggestions,
        );
    }

    let total_page_views: u64 = activity.iter().map(|w| w.page_views).sum();
    let total_sessions: u64 = activity.iter().map(|w| w.sessions).sum();
    let total_conversions: u64 = activity.iter().map(|w| w.conversions).sum();
    let avg_bounce_rate =
        activity.iter().map(|w| w.bounce_rate).sum::<f64>() / activity.len() as f64;
    let conversion_rate = if total_sessions == 0 {
        0.0
    } else {
        total_conversions as f64 / total_sessions as f64 * 100.0
    };
    let peak = activity.iter().fold(&activity[0], |max, w| {
        if w.page_views > max.page_views { w } else { max }
    });

    let start = activity.len().saturating_sub(7);
    let mut table = TableData::new([
        "Date",
        "Page Views",
        "Sessions",
        "Bounce Rate",
        "Conversions",
    ]);
    for w in &activity[start..] {
        table.push_row(vec![
            w.date.to_string(),
            group_thousands(w.page_views),
            group_thousands(w.sessions),
            format!("{}%", w.bounce_rate),
            w.conversions.to_string(),
        ]);
    }

    let chart = ChartData::Line(SeriesChart {
        title: "Daily Page Views Trend".to_string(),
        x_label: "Date".to_string(),
        y_label: "Page Views".to_string(),
        points: activity
            .iter()
            .map(|w| SeriesPoint::new(w.date.format("%m-%d").to_string(), w.page_views as f64))
            .collect(),
    });

    AnalysisResult {
        summary: format!(
            "Website performance over the analyzed period shows {} page views across {} \
             sessions. The average bounce rate is {:.1}% with a conversion rate of \
             {:.2}%. Peak traffic occurred on {}.",
            group_thousands(total_page_views),
            group_thousands(total_sessions),
            avg_bounce_rate,
            conversion_rate,
            peak.date
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
    use chrono::NaiveDate;

    fn day(d: u32, page_views: u64, sessions: u64, conversions: u64) -> WebActivity {
        WebActivity {
            date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            page_views,
            sessions,
            unique_visitors: sessions,
            bounce_rate: 40.0,
            avg_session_duration: 200,
            conversions,
        }
    }

    #[test]
    fn summary_totals_and_rates() {
        let activity = vec![day(1, 1000, 400, 10), day(2, 3000, 600, 20)];
        let result = web_activity(&activity);
        assert!(result.summary.contains("4,000 page views"));
        assert!(result.summary.contains("1,000 sessions"));
        // 30 conversions over 1000 sessions
        assert!(result.summary.contains("3.00%"));
        assert!(result.summary.contains("2024-01-02"));
    }

    #[test]
    fn table_is_capped_at_seven_days() {
        let activity: Vec<WebActivity> = (1..=10).map(|d| day(d, 100, 50, 5)).collect();
        let result = web_activity(&activity);
        let table = result.table.expect("table");
        assert_eq!(table.rows.len(), 7);
        assert_eq!(table.rows[0][0], "2024-01-04");
        match result.chart {
            Some(ChartData::Line(chart)) => assert_eq!(chart.points.len(), 10),
            other => panic!("expected line chart, got {other:?}"),
        }
    }

    #[test]
    fn empty_activity_returns_graceful_result() {
        let result = web_activity(&[]);
        assert!(!result.is_error());
        assert!(result.table.is_none());
        assert!((1..=5).contains(&result.suggestions.len()));
    }
}
