//! Builds a revenue report from generated demo data and prints it.
//!
//! Run with: `cargo run --example demo_report`

use revenue_report_builder::{build_dashboard_data, generate_demo_data, minor_to_major};

fn main() -> anyhow::Result<()> {
    let demo = generate_demo_data();
    let report = build_dashboard_data(
        &demo.products,
        &demo.sessions,
        &demo.invoices,
        &demo.balance_transactions,
    );

    println!("=== Revenue Summary ===");
    println!("Gross revenue : ${:>10.2}", report.summary.total_revenue);
    println!("Fees          : ${:>10.2}", report.summary.total_fees);
    println!("Net revenue   : ${:>10.2}", report.summary.net_revenue);
    println!("Transactions  : {:>11}", report.summary.transaction_count);

    println!("\n=== Products by Revenue ===");
    for product in &report.products {
        println!(
            "{:<32} ${:>10.2}  ({} units)",
            product.name,
            minor_to_major(product.total_revenue),
            product.units_sold
        );
    }

    println!("\n=== Cumulative Chart ({} points) ===", report.chart_data.len());
    if let Some(last) = report.chart_data.last() {
        println!("{}", serde_json::to_string_pretty(last)?);
    }

    Ok(())
}
