//! Fetches live Stripe data and prints the aggregated report.
//!
//! Requires the `stripe` feature and a `STRIPE_API_KEY` environment variable;
//! falls back to demo data when the key is missing.
//!
//! Run with: `cargo run --example live_dashboard --features stripe`

use revenue_report_builder::stripe::fetch_dashboard_data;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("STRIPE_API_KEY").ok();
    if api_key.is_none() {
        eprintln!("STRIPE_API_KEY not set, using demo data");
    }

    let report = fetch_dashboard_data(api_key.as_deref(), false).await?;

    println!(
        "gross ${:.2}  fees ${:.2}  net ${:.2}  over {} transactions",
        report.summary.total_revenue,
        report.summary.total_fees,
        report.summary.net_revenue,
        report.summary.transaction_count
    );

    for product in &report.products {
        println!(
            "{:<32} {:>8} minor units, {} units sold",
            product.name, product.total_revenue, product.units_sold
        );
    }

    Ok(())
}
