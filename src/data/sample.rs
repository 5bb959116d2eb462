//! The fixed in-memory sample dataset: 15 customers, 15 sales, 14 days of
//! web activity and 12 months of market trends.

use super::{Channel, Customer, Gender, MarketTrend, Sale, Segment, WebActivity};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    age: u32,
    gender: Gender,
    location: &str,
    segment: Segment,
    total_spent: f64,
    orders_count: u32,
    last_purchase: NaiveDate,
    join_date: NaiveDate,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        age,
        gender,
        location: location.to_string(),
        segment,
        total_spent,
        orders_count,
        last_purchase,
        join_date,
    }
}

#[allow(clippy::too_many_arguments)]
fn sale(
    id: &str,
    customer_id: &str,
    product: &str,
    category: &str,
    amount: f64,
    quantity: u32,
    date: NaiveDate,
    channel: Channel,
) -> Sale {
    Sale {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        product: product.to_string(),
        category: category.to_string(),
        amount,
        quantity,
        date,
        channel,
    }
}

fn activity(
    date: NaiveDate,
    page_views: u64,
    sessions: u64,
    unique_visitors: u64,
    bounce_rate: f64,
    avg_session_duration: u32,
    conversions: u64,
) -> WebActivity {
    WebActivity {
        date,
        page_views,
        sessions,
        unique_visitors,
        bounce_rate,
        avg_session_duration,
        conversions,
    }
}

fn trend(
    month: &str,
    revenue: f64,
    customers: u64,
    avg_order_value: f64,
    return_rate: f64,
) -> MarketTrend {
    MarketTrend {
        month: month.to_string(),
        revenue,
        customers,
        avg_order_value,
        return_rate,
    }
}

pub fn customers() -> Vec<Customer> {
    use Gender::{Female, Male};
    use Segment::{New, Premium, Regular};
    vec![
        customer("C001", "Emma Wilson", "emma.w@email.com", 28, Female, "New York", Premium, 4520.0, 23, date(2024, 1, 15), date(2022, 3, 10)),
        customer("C002", "James Chen", "j.chen@email.com", 35, Male, "San Francisco", Premium, 3890.0, 18, date(2024, 1, 18), date(2021, 11, 22)),
        customer("C003", "Sofia Rodriguez", "s.rodriguez@email.com", 42, Female, "Miami", Regular, 1250.0, 8, date(2024, 1, 10), date(2023, 2, 14)),
        customer("C004", "Michael Brown", "m.brown@email.com", 31, Male, "Chicago", Regular, 980.0, 6, date(2024, 1, 12), date(2023, 5, 8)),
        customer("C005", "Olivia Davis", "o.davis@email.com", 26, Female, "Los Angeles", New, 320.0, 2, date(2024, 1, 19), date(2024, 1, 5)),
        customer("C006", "William Lee", "w.lee@email.com", 45, Male, "Seattle", Premium, 5200.0, 28, date(2024, 1, 17), date(2021, 6, 30)),
        customer("C007", "Ava Martinez", "a.martinez@email.com", 33, Female, "Denver", Regular, 1650.0, 11, date(2024, 1, 14), date(2022, 9, 18)),
        customer("C008", "Alexander Kim", "a.kim@email.com", 29, Male, "Boston", New, 450.0, 3, date(2024, 1, 16), date(2023, 12, 1)),
        customer("C009", "Isabella Johnson", "i.johnson@email.com", 38, Female, "Austin", Premium, 3100.0, 15, date(2024, 1, 20), date(2022, 1, 25)),
        customer("C010", "Daniel Garcia", "d.garcia@email.com", 52, Male, "Phoenix", Regular, 890.0, 5, date(2024, 1, 8), date(2023, 7, 12)),
        customer("C011", "Mia Thompson", "m.thompson@email.com", 24, Female, "Portland", New, 280.0, 2, date(2024, 1, 18), date(2024, 1, 10)),
        customer("C012", "Ethan White", "e.white@email.com", 41, Male, "Atlanta", Regular, 1420.0, 9, date(2024, 1, 11), date(2022, 11, 5)),
        customer("C013", "Charlotte Harris", "c.harris@email.com", 36, Female, "Dallas", Premium, 2850.0, 14, date(2024, 1, 19), date(2021, 8, 20)),
        customer("C014", "Benjamin Clark", "b.clark@email.com", 48, Male, "Houston", Regular, 1100.0, 7, date(2024, 1, 13), date(2023, 3, 28)),
        customer("C015", "Amelia Lewis", "a.lewis@email.com", 27, Female, "Nashville", New, 520.0, 4, date(2024, 1, 17), date(2023, 11, 15)),
    ]
}

pub fn sales() -> Vec<Sale> {
    use Channel::{InStore, MobileApp, Website};
    vec![
        sale("S001", "C001", "Premium Headphones", "Electronics", 299.0, 1, date(2024, 1, 15), Website),
        sale("S002", "C002", "Smart Watch", "Electronics", 449.0, 1, date(2024, 1, 18), MobileApp),
        sale("S003", "C003", "Running Shoes", "Sports", 129.0, 1, date(2024, 1, 10), InStore),
        sale("S004", "C001", "Wireless Charger", "Electronics", 59.0, 2, date(2024, 1, 12), Website),
        sale("S005", "C005", "Yoga Mat", "Sports", 45.0, 1, date(2024, 1, 19), MobileApp),
        sale("S006", "C006", "Laptop Stand", "Office", 89.0, 1, date(2024, 1, 17), Website),
        sale("S007", "C007", "Coffee Maker", "Home", 199.0, 1, date(2024, 1, 14), InStore),
        sale("S008", "C002", "Bluetooth Speaker", "Electronics", 149.0, 1, date(2024, 1, 16), Website),
        sale("S009", "C009", "Desk Lamp", "Office", 79.0, 2, date(2024, 1, 20), MobileApp),
        sale("S010", "C004", "Water Bottle", "Sports", 35.0, 3, date(2024, 1, 11), InStore),
        sale("S011", "C010", "Plant Pot Set", "Home", 65.0, 1, date(2024, 1, 8), Website),
        sale("S012", "C011", "Notebook Set", "Office", 28.0, 2, date(2024, 1, 18), MobileApp),
        sale("S013", "C013", "Smart Speaker", "Electronics", 179.0, 1, date(2024, 1, 19), Website),
        sale("S014", "C014", "Kitchen Scale", "Home", 49.0, 1, date(2024, 1, 13), InStore),
        sale("S015", "C015", "Fitness Tracker", "Electronics", 129.0, 1, date(2024, 1, 17), MobileApp),
    ]
}

pub fn web_activity() -> Vec<WebActivity> {
    vec![
        activity(date(2024, 1, 7), 12500, 4200, 3100, 42.0, 185, 156),
        activity(date(2024, 1, 8), 14200, 4800, 3500, 38.0, 210, 189),
        activity(date(2024, 1, 9), 13800, 4600, 3400, 40.0, 195, 172),
        activity(date(2024, 1, 10), 15600, 5200, 3900, 35.0, 225, 215),
        activity(date(2024, 1, 11), 14900, 5000, 3700, 37.0, 218, 198),
        activity(date(2024, 1, 12), 16200, 5400, 4100, 34.0, 235, 245),
        activity(date(2024, 1, 13), 18500, 6200, 4800, 32.0, 250, 298),
        activity(date(2024, 1, 14), 17800, 5900, 4500, 33.0, 242, 278),
        activity(date(2024, 1, 15), 15200, 5100, 3800, 36.0, 220, 205),
        activity(date(2024, 1, 16), 14600, 4900, 3600, 39.0, 205, 185),
        activity(date(2024, 1, 17), 16800, 5600, 4200, 35.0, 228, 235),
        activity(date(2024, 1, 18), 19200, 6400, 5000, 31.0, 265, 320),
        activity(date(2024, 1, 19), 21500, 7200, 5600, 29.0, 280, 385),
        activity(date(2024, 1, 20), 20100, 6700, 5200, 30.0, 270, 352),
    ]
}

pub fn market_trends() -> Vec<MarketTrend> {
    vec![
        trend("Feb 2023", 125000.0, 1200, 104.0, 8.2),
        trend("Mar 2023", 138000.0, 1350, 102.0, 7.8),
        trend("Apr 2023", 142000.0, 1400, 101.0, 7.5),
        trend("May 2023", 155000.0, 1520, 102.0, 7.2),
        trend("Jun 2023", 168000.0, 1650, 102.0, 6.9),
        trend("Jul 2023", 175000.0, 1700, 103.0, 6.5),
        trend("Aug 2023", 182000.0, 1750, 104.0, 6.8),
        trend("Sep 2023", 195000.0, 1850, 105.0, 6.2),
        trend("Oct 2023", 210000.0, 1980, 106.0, 5.9),
        trend("Nov 2023", 245000.0, 2250, 109.0, 5.5),
        trend("Dec 2023", 285000.0, 2580, 110.0, 5.8),
        trend("Jan 2024", 198000.0, 1820, 109.0, 6.1),
    ]
}
