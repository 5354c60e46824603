//! # Revenue Report Builder
//!
//! A library for aggregating payment-processor data (products, checkout
//! sessions, invoices, balance transactions) into a dashboard report:
//! summary totals, a ranked per-product revenue list, and a cumulative
//! per-product time series suitable for a stacked area chart.
//!
//! ## Core Concepts
//!
//! - **Minor units**: raw records carry amounts in the smallest denomination
//!   (cents); the report converts to major units (dollars) on output.
//! - **Bucket**: a day-granularity chart slot keyed by a formatted date label
//!   (e.g. "Jan 5").
//! - **Running total**: each chart point carries every product's cumulative
//!   revenue through that bucket, so series never drop back to zero.
//! - **Display-name attribution**: revenue from line items whose product id
//!   is not in the catalog falls back to `"Invoice to {email}"` when the
//!   invoice has a customer email, otherwise to a shared "Unknown Product"
//!   entry.
//!
//! ## Example
//!
//! ```rust,ignore
//! use revenue_report_builder::*;
//!
//! let demo = demo::generate_demo_data();
//! let report = build_dashboard_data(
//!     &demo.products,
//!     &demo.sessions,
//!     &demo.invoices,
//!     &demo.balance_transactions,
//! );
//!
//! println!("net revenue: {:.2}", report.summary.net_revenue);
//! for product in &report.products {
//!     println!("{}: {} units", product.name, product.units_sold);
//! }
//! ```
//!
//! The aggregation is a pure, single-pass transform: it performs no I/O,
//! never fails for well-typed input, and empty inputs produce a zero-valued
//! report. The optional `stripe` feature adds an async client that fetches
//! the four raw collections from the Stripe API.

pub mod aggregate;
pub mod demo;
pub mod error;
pub mod schema;
pub mod utils;

#[cfg(feature = "stripe")]
pub mod stripe;

pub use aggregate::{aggregate, resolve_display_name, Aggregator, UNKNOWN_PRODUCT};
pub use demo::{generate_demo_data, DemoData};
pub use error::{ReportError, Result};
pub use schema::*;
pub use utils::{bucket_label, minor_to_major};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Revenue totals for one resolved display name. `total_revenue` stays in
/// minor units so ranking and reconciliation are exact; `id` doubles the name
/// since display names are the aggregation key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub total_revenue: i64,
    pub units_sold: u64,
}

/// One cumulative chart point. `values` maps each known product name to its
/// running total in major units through this bucket; serialized flattened so
/// the JSON shape is `{"name": "Jan 5", "date": 1704412800, "Widget": 10.0}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    #[serde(rename = "name")]
    pub label: String,
    #[serde(rename = "date")]
    pub timestamp: i64,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

/// Headline figures in major units. `transaction_count` counts sessions plus
/// invoices, not line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub total_fees: f64,
    pub net_revenue: f64,
    pub transaction_count: usize,
}

/// The full report: summary totals, products pre-sorted descending by
/// revenue, and cumulative chart points in ascending time order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub products: Vec<ProductSummary>,
    pub chart_data: Vec<ChartPoint>,
}

pub struct DashboardReportBuilder;

impl DashboardReportBuilder {
    pub fn build(
        products: &[Product],
        sessions: &[CheckoutSession],
        invoices: &[Invoice],
        balance_transactions: &[BalanceTransaction],
    ) -> DashboardData {
        info!(
            "Building revenue report across {} catalog products",
            products.len()
        );
        debug!(
            "Inputs: {} checkout sessions, {} invoices, {} balance transactions",
            sessions.len(),
            invoices.len(),
            balance_transactions.len()
        );

        let data = aggregate::aggregate(products, sessions, invoices, balance_transactions);

        debug!(
            "Report covers {} product entries over {} chart buckets",
            data.products.len(),
            data.chart_data.len()
        );
        data
    }
}

pub fn build_dashboard_data(
    products: &[Product],
    sessions: &[CheckoutSession],
    invoices: &[Invoice],
    balance_transactions: &[BalanceTransaction],
) -> DashboardData {
    DashboardReportBuilder::build(products, sessions, invoices, balance_transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_end_to_end() {
        let demo = generate_demo_data();
        let report = build_dashboard_data(
            &demo.products,
            &demo.sessions,
            &demo.invoices,
            &demo.balance_transactions,
        );

        assert_eq!(
            report.summary.transaction_count,
            demo.sessions.len() + demo.invoices.len()
        );
        assert!(report.summary.total_revenue > 0.0);
        assert!(report.summary.total_fees > 0.0);
        assert!(!report.products.is_empty());
        assert!(!report.chart_data.is_empty());

        assert!(report
            .products
            .windows(2)
            .all(|w| w[0].total_revenue >= w[1].total_revenue));
        assert!(report
            .chart_data
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_chart_point_serializes_flattened() {
        let mut values = BTreeMap::new();
        values.insert("Widget".to_string(), 10.0);

        let point = ChartPoint {
            label: "Jan 5".to_string(),
            timestamp: 1_704_412_800,
            values,
        };

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["name"], "Jan 5");
        assert_eq!(json["date"], 1_704_412_800);
        assert_eq!(json["Widget"], 10.0);
    }
}
