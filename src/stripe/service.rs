use crate::build_dashboard_data;
use crate::demo::generate_demo_data;
use crate::error::Result;
use crate::stripe::client::StripeClient;
use crate::DashboardData;
use futures::future::try_join4;
use log::info;

/// Produces the dashboard report, either from generated demo data (when
/// `use_demo` is set or no API key is supplied) or from a live fetch of the
/// four Stripe collections. The four lists are independent, so the live path
/// fetches them concurrently.
pub async fn fetch_dashboard_data(api_key: Option<&str>, use_demo: bool) -> Result<DashboardData> {
    let Some(api_key) = api_key.filter(|_| !use_demo) else {
        info!("Using generated demo data");
        let demo = generate_demo_data();
        return Ok(build_dashboard_data(
            &demo.products,
            &demo.sessions,
            &demo.invoices,
            &demo.balance_transactions,
        ));
    };

    let client = StripeClient::new(api_key.to_string());
    let (products, sessions, invoices, balance_transactions) = try_join4(
        client.list_products(),
        client.list_checkout_sessions(),
        client.list_invoices(),
        client.list_balance_transactions(),
    )
    .await?;

    info!(
        "Fetched {} products, {} sessions, {} invoices, {} balance transactions",
        products.len(),
        sessions.len(),
        invoices.len(),
        balance_transactions.len()
    );

    Ok(build_dashboard_data(
        &products,
        &sessions,
        &invoices,
        &balance_transactions,
    ))
}
