//! The natural-language analysis engine.
//!
//! One call, one result: the query is normalized, classified against the
//! ordered intent table, and dispatched to a pure aggregation handler over
//! the caller's read-only data snapshot. Bad input never raises: empty and
//! unrecognized queries come back as ordinary error-tagged results.

pub mod classifier;
pub mod handlers;
pub mod result;

use crate::config::EngineConfig;
use crate::data::DataContext;
use classifier::{Intent, classify};
use rand::Rng;
use result::{AnalysisError, AnalysisResult};
use std::time::Duration;
use tracing::debug;

/// The five canned example questions returned on both error paths.
pub fn default_suggestions() -> Vec<String> {
    [
        "What are the top 5 customers by total purchase amount?",
        "Show sales trends for the last 6 months",
        "Which age group spends the most?",
        "Give me the total revenue for each product category",
        "Is there a correlation between customer age and purchase frequency?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub struct AnalysisEngine {
    config: EngineConfig,
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Analyzes one free-text question against the given data snapshot.
    ///
    /// Stateless and side-effect free apart from the optional simulated
    /// thinking delay; callers wanting last-result-wins semantics discard
    /// stale results themselves.
    pub async fn analyze(&self, query: &str, ctx: &DataContext) -> AnalysisResult {
        self.simulate_thinking().await;

        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return AnalysisResult {
                summary: "Please enter a question about your data.".to_string(),
                table: None,
                chart: None,
                suggestions: default_suggestions(),
                error: Some(AnalysisError::EmptyQuery),
            };
        }

        match classify(&normalized) {
            Some(intent) => {
                debug!(?intent, query = %normalized, "dispatching query");
                dispatch(intent, ctx)
            }
            None => {
                debug!(query = %normalized, "no intent matched");
                AnalysisResult {
                    summary: "I couldn't understand your question. Could you please \
                              rephrase it or try one of the suggested questions below?"
                        .to_string(),
                    table: None,
                    chart: None,
                    suggestions: default_suggestions(),
                    error: Some(AnalysisError::QueryNotUnderstood),
                }
            }
        }
    }

    async fn simulate_thinking(&self) {
        if !self.config.simulate_latency {
            return;
        }
        let jitter = if self.config.jitter_ms > 0 {
            rand::thread_rng().gen_range(0..=self.config.jitter_ms)
        } else {
            0
        };
        tokio::time::sleep(Duration::from_millis(self.config.base_delay_ms + jitter)).await;
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn dispatch(intent: Intent, ctx: &DataContext) -> AnalysisResult {
    match intent {
        Intent::TopCustomers { count } => handlers::top_customers(&ctx.customers, count),
        Intent::SalesTrend { months } => handlers::sales_trend(&ctx.market_trends, months),
        Intent::AgeGroupSpending => handlers::age_group_spending(&ctx.customers),
        Intent::CategoryRevenue => handlers::category_revenue(&ctx.sales),
        Intent::Correlation => handlers::correlation(&ctx.customers),
        Intent::TopProducts { count } => handlers::top_products(&ctx.sales, count),
        Intent::ChannelPerformance => handlers::channel_performance(&ctx.sales),
        Intent::CustomerSegments => handlers::customer_segments(&ctx.customers),
        Intent::LocationAnalysis => handlers::location_analysis(&ctx.customers),
        Intent::WebActivity => handlers::web_activity(&ctx.web_activity),
        Intent::AverageOrder => handlers::average_order(&ctx.sales),
        Intent::TotalRevenue => handlers::total_revenue(&ctx.sales, &ctx.market_trends),
        Intent::CustomerCount => handlers::customer_count(&ctx.customers),
        Intent::RecentPurchases => handlers::recent_purchases(&ctx.sales, &ctx.customers),
        Intent::GenderDistribution => handlers::gender_distribution(&ctx.customers),
    }
}
