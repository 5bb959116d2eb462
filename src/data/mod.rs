//! Entity model for the analytics engine.
//!
//! All collections are owned by the caller and treated as read-only
//! snapshots for the duration of one analysis call; the engine never
//! mutates them.

pub mod sample;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// Customer classification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Premium,
    Regular,
    New,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Premium => write!(f, "Premium"),
            Segment::Regular => write!(f, "Regular"),
            Segment::New => write!(f, "New"),
        }
    }
}

/// Sales medium a transaction came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Website,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "In-Store")]
    InStore,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Website => write!(f, "Website"),
            Channel::MobileApp => write!(f, "Mobile App"),
            Channel::InStore => write!(f, "In-Store"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    pub location: String,
    pub segment: Segment,
    pub total_spent: f64,
    pub orders_count: u32,
    pub last_purchase: NaiveDate,
    pub join_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    /// Points at `Customer::id`; not enforced as a hard foreign key.
    pub customer_id: String,
    pub product: String,
    pub category: String,
    /// Per-unit price.
    pub amount: f64,
    pub quantity: u32,
    pub date: NaiveDate,
    pub channel: Channel,
}

impl Sale {
    /// Revenue contributed by this sale: amount x quantity.
    pub fn revenue(&self) -> f64 {
        self.amount * self.quantity as f64
    }
}

/// One record per calendar day, chronologically ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebActivity {
    pub date: NaiveDate,
    pub page_views: u64,
    pub sessions: u64,
    pub unique_visitors: u64,
    /// Percentage, 0-100.
    pub bounce_rate: f64,
    /// Seconds.
    pub avg_session_duration: u32,
    pub conversions: u64,
}

/// One record per month, chronologically ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    pub month: String,
    pub revenue: f64,
    pub customers: u64,
    pub avg_order_value: f64,
    pub return_rate: f64,
}

/// A user-uploaded dataset parsed into headers plus string rows.
///
/// Carried as an opaque override alongside the fixed collections; the
/// analysis handlers themselves only consume the typed entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedData {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read-only snapshot of every collection an analysis call may consume.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub customers: Vec<Customer>,
    pub sales: Vec<Sale>,
    pub web_activity: Vec<WebActivity>,
    pub market_trends: Vec<MarketTrend>,
    pub uploaded: Option<UploadedData>,
}

impl DataContext {
    /// The built-in sample dataset the dashboard ships with.
    pub fn sample() -> Self {
        Self {
            customers: sample::customers(),
            sales: sample::sales(),
            web_activity: sample::web_activity(),
            market_trends: sample::market_trends(),
            uploaded: None,
        }
    }
}
