//! The unified output envelope every analysis call returns.

use serde::Serialize;
use std::fmt;

/// Machine-readable failure tag for the two recoverable error results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalysisError {
    #[serde(rename = "Empty query")]
    EmptyQuery,
    #[serde(rename = "Query not understood")]
    QueryNotUnderstood,
}

impl AnalysisError {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisError::EmptyQuery => "Empty query",
            AnalysisError::QueryNotUnderstood => "Query not understood",
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tabular output: ordered headers plus positional rows.
///
/// Rows are stored positionally so a row always carries exactly one value
/// per header; `push_row` checks the arity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        assert_eq!(row.len(), self.headers.len(), "row arity must match headers");
        self.rows.push(row);
    }
}

/// A named numeric point, used by axis charts and pie slices alike.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Payload shared by bar, line and area charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<SeriesPoint>,
}

/// Pie charts are legend-based and carry no axis labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// Chart payload as a closed tagged union; each variant carries only the
/// fields its renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartData {
    Bar(SeriesChart),
    Line(SeriesChart),
    Area(SeriesChart),
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartData {
    pub fn kind(&self) -> &'static str {
        match self {
            ChartData::Bar(_) => "bar",
            ChartData::Line(_) => "line",
            ChartData::Area(_) => "area",
            ChartData::Pie(_) => "pie",
            ChartData::Scatter(_) => "scatter",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartData::Bar(c) | ChartData::Line(c) | ChartData::Area(c) => &c.title,
            ChartData::Pie(c) => &c.title,
            ChartData::Scatter(c) => &c.title,
        }
    }
}

/// The engine's sole output type: narrative summary, optional table and
/// chart, follow-up suggestions, and an error tag on the two failure paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartData>,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AnalysisError>,
}

impl AnalysisResult {
    /// Graceful result for a handler that received an empty collection.
    pub fn insufficient_data(summary: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            table: None,
            chart: None,
            suggestions,
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_union_serializes_with_lowercase_tag() {
        let chart = ChartData::Pie(PieChart {
            title: "Revenue by Product Category".to_string(),
            slices: vec![SeriesPoint::new("Electronics", 1234.0)],
        });
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"type\":\"pie\""));
        assert!(!json.contains("x_label"));

        let chart = ChartData::Bar(SeriesChart {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            points: vec![],
        });
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"type\":\"bar\""));
        assert!(json.contains("x_label"));
    }

    #[test]
    fn error_tags_match_wire_strings() {
        assert_eq!(AnalysisError::EmptyQuery.as_str(), "Empty query");
        assert_eq!(
            AnalysisError::QueryNotUnderstood.as_str(),
            "Query not understood"
        );
        let json = serde_json::to_string(&AnalysisError::EmptyQuery).unwrap();
        assert_eq!(json, "\"Empty query\"");
    }

    #[test]
    fn table_rows_match_header_arity() {
        let mut table = TableData::new(["A", "B"]);
        table.push_row(vec!["1".to_string(), "2".to_string()]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    #[should_panic(expected = "row arity must match headers")]
    fn mismatched_row_arity_is_rejected() {
        let mut table = TableData::new(["A", "B"]);
        table.push_row(vec!["1".to_string()]);
    }

    #[test]
    fn error_results_skip_optional_payloads() {
        let result = AnalysisResult {
            summary: "Please enter a question about your data.".to_string(),
            table: None,
            chart: None,
            suggestions: vec!["What are the top 5 customers?".to_string()],
            error: Some(AnalysisError::EmptyQuery),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"table\""));
        assert!(!json.contains("\"chart\""));
        assert!(json.contains("\"error\":\"Empty query\""));
    }
}
