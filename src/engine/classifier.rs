//! Ordered-first-match intent classification.
//!
//! Queries are matched against a fixed-priority table of compiled regexes;
//! the first rule that matches wins, regardless of how many later rules
//! would also match. Keeping the table order stable is what makes
//! classification reproducible.

use regex::Regex;
use std::sync::LazyLock;

/// Default N for "top customers" / "top products" when the query carries no
/// usable number.
pub const DEFAULT_TOP_COUNT: usize = 5;
/// Default window for "sales trend" queries.
pub const DEFAULT_TREND_MONTHS: usize = 6;

/// The classified category of a query, with any extracted parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TopCustomers { count: usize },
    SalesTrend { months: usize },
    AgeGroupSpending,
    CategoryRevenue,
    Correlation,
    TopProducts { count: usize },
    ChannelPerformance,
    CustomerSegments,
    LocationAnalysis,
    WebActivity,
    AverageOrder,
    TotalRevenue,
    CustomerCount,
    RecentPurchases,
    GenderDistribution,
}

struct Rule {
    pattern: Regex,
    build: fn(&str) -> Intent,
}

impl Rule {
    fn new(pattern: &str, build: fn(&str) -> Intent) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("intent pattern must compile"),
            build,
        }
    }
}

// Priority order is part of the contract: e.g. a query mentioning both a
// category and a segment resolves to CategoryRevenue because that rule
// comes first.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            r"top\s*(\d+)?\s*customers?\s*(by)?\s*(total|purchase|spent|amount)?",
            |q| Intent::TopCustomers { count: top_count(q) },
        ),
        Rule::new(
            r"(sales?|revenue)\s*(trend|over|last|past)\s*(\d+)?\s*(months?|days?|weeks?)?",
            |q| Intent::SalesTrend { months: month_count(q) },
        ),
        Rule::new(r"(age\s*group|which\s*age|age\s*range)\s*(spend|purchase|buy)?", |_| {
            Intent::AgeGroupSpending
        }),
        Rule::new(
            r"(total|revenue|sales)\s*(for|by|per)?\s*(each|all)?\s*(product)?\s*categor",
            |_| Intent::CategoryRevenue,
        ),
        Rule::new(r"correlation|relationship|relate|between.*and", |_| {
            Intent::Correlation
        }),
        Rule::new(r"top\s*(\d+)?\s*(products?|items?|selling)", |q| {
            Intent::TopProducts { count: top_count(q) }
        }),
        Rule::new(r"(channel|platform)\s*(performance|comparison|sales)", |_| {
            Intent::ChannelPerformance
        }),
        Rule::new(r"(customer)?\s*segment|premium|regular|new\s*customers?", |_| {
            Intent::CustomerSegments
        }),
        Rule::new(r"location|city|cities|region|where", |_| Intent::LocationAnalysis),
        Rule::new(r"(website?|web|traffic|visit|page\s*view|session|bounce)", |_| {
            Intent::WebActivity
        }),
        Rule::new(
            r"(average|avg|mean)\s*(order|purchase|transaction)\s*(value|amount)?",
            |_| Intent::AverageOrder,
        ),
        Rule::new(r"total\s*(revenue|sales|income)", |_| Intent::TotalRevenue),
        Rule::new(r"(how\s*many|total|count)\s*customers?", |_| Intent::CustomerCount),
        Rule::new(r"(recent|latest|last)\s*(purchases?|orders?|transactions?)", |_| {
            Intent::RecentPurchases
        }),
        Rule::new(r"gender|male|female|men|women", |_| Intent::GenderDistribution),
    ]
});

static TOP_N: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"top\s*(\d+)?").expect("top-N pattern must compile"));
static FIRST_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("integer pattern must compile"));

fn top_count(query: &str) -> usize {
    TOP_N
        .captures(query)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_TOP_COUNT)
}

fn month_count(query: &str) -> usize {
    FIRST_INT
        .captures(query)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_TREND_MONTHS)
}

/// Classifies an already-normalized (lowercased, trimmed) query.
///
/// Returns `None` when no rule matches; the caller turns that into the
/// query-not-understood result.
pub fn classify(query: &str) -> Option<Intent> {
    RULES
        .iter()
        .find(|rule| rule.pattern.is_match(query))
        .map(|rule| (rule.build)(query))
}
