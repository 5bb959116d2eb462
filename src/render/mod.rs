//! Terminal rendering of analysis results.
//!
//! Pure display: the engine owns every computed value, this module only
//! lays it out.

use crate::engine::result::{AnalysisResult, ChartData, TableData};

/// Prints a result either as formatted text or as raw JSON.
pub fn print_result(result: &AnalysisResult, as_json: bool) -> serde_json::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!();
    println!("{}", result.summary);

    if let Some(table) = &result.table {
        println!();
        print_table(table);
    }

    if let Some(chart) = &result.chart {
        println!();
        println!("[{}]", chart_hint(chart));
    }

    if !result.suggestions.is_empty() {
        println!();
        println!("Try asking:");
        for suggestion in &result.suggestions {
            println!("  - {}", suggestion);
        }
    }
    println!();

    Ok(())
}

fn print_table(table: &TableData) {
    let mut widths: Vec<usize> = table.headers.iter().map(String::len).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let render_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", render_row(&table.headers));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in &table.rows {
        println!("{}", render_row(row));
    }
}

/// One-line stand-in for a chart the terminal can't draw.
fn chart_hint(chart: &ChartData) -> String {
    format!("{} chart: {}", chart.kind(), chart.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::result::{PieChart, SeriesPoint};

    #[test]
    fn chart_hint_names_kind_and_title() {
        let chart = ChartData::Pie(PieChart {
            title: "Revenue by Product Category".to_string(),
            slices: vec![SeriesPoint::new("Electronics", 1.0)],
        });
        assert_eq!(chart_hint(&chart), "pie chart: Revenue by Product Category");
    }
}
