use crate::schema::{BalanceTransaction, CheckoutSession, Invoice, Product};
use crate::utils::{bucket_label, minor_to_major};
use crate::{ChartPoint, DashboardData, DashboardSummary, ProductSummary};
use std::collections::{BTreeMap, HashMap};

/// Display name used when a line item references a product id that is not in
/// the catalog and no better attribution is available.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Resolves the display name a line item's revenue is attributed to.
///
/// A known product id resolves to the catalog name. An unknown id falls back
/// to a per-customer pseudo-name when an email is available (invoices carry
/// one, checkout sessions do not), otherwise to [`UNKNOWN_PRODUCT`].
pub fn resolve_display_name(
    product_id: &str,
    lookup: &HashMap<String, String>,
    customer_email: Option<&str>,
) -> String {
    match lookup.get(product_id) {
        Some(name) => name.clone(),
        None => match customer_email {
            Some(email) => format!("Invoice to {}", email),
            None => UNKNOWN_PRODUCT.to_string(),
        },
    }
}

// Per-bucket deltas in minor units, keyed by resolved display name. The
// timestamp is the creation time of the first line item that opened the
// bucket and is only used for ordering.
struct Bucket {
    label: String,
    timestamp: i64,
    deltas: HashMap<String, i64>,
}

// Accumulator threaded through the session and invoice folds. Vec + index
// maps preserve insertion order, which the stable product sort relies on for
// revenue ties.
#[derive(Default)]
struct RevenueAccumulator {
    stats: Vec<ProductSummary>,
    stat_index: HashMap<String, usize>,
    buckets: Vec<Bucket>,
    bucket_index: HashMap<String, usize>,
}

impl RevenueAccumulator {
    fn fold_line_item(&mut self, name: &str, amount: i64, quantity: u64, label: &str, created: i64) {
        let bucket_idx = match self.bucket_index.get(label) {
            Some(&idx) => idx,
            None => {
                self.buckets.push(Bucket {
                    label: label.to_string(),
                    timestamp: created,
                    deltas: HashMap::new(),
                });
                let idx = self.buckets.len() - 1;
                self.bucket_index.insert(label.to_string(), idx);
                idx
            }
        };
        *self.buckets[bucket_idx]
            .deltas
            .entry(name.to_string())
            .or_insert(0) += amount;

        let stat_idx = match self.stat_index.get(name) {
            Some(&idx) => idx,
            None => {
                self.stats.push(ProductSummary {
                    id: name.to_string(),
                    name: name.to_string(),
                    total_revenue: 0,
                    units_sold: 0,
                });
                let idx = self.stats.len() - 1;
                self.stat_index.insert(name.to_string(), idx);
                idx
            }
        };
        self.stats[stat_idx].total_revenue += amount;
        self.stats[stat_idx].units_sold += quantity;
    }
}

/// Aggregates raw payment records into the dashboard report.
///
/// Holds the product id to name lookup; each [`Aggregator::aggregate`] call
/// builds fresh accumulators, so an instance can be reused across input sets.
pub struct Aggregator {
    product_names: HashMap<String, String>,
}

impl Aggregator {
    /// Builds the id-to-name lookup. Last write wins on a duplicate id.
    pub fn new(products: &[Product]) -> Self {
        let product_names = products
            .iter()
            .map(|p| (p.id.clone(), p.name.clone()))
            .collect();
        Self { product_names }
    }

    pub fn aggregate(
        &self,
        sessions: &[CheckoutSession],
        invoices: &[Invoice],
        balance_transactions: &[BalanceTransaction],
    ) -> DashboardData {
        let total_fees: i64 = balance_transactions.iter().map(|t| t.fee).sum();
        let session_revenue: i64 = sessions.iter().map(|s| s.amount_total).sum();
        let invoice_revenue: i64 = invoices.iter().map(|i| i.amount_paid).sum();
        // Gross revenue comes from sessions + invoices while fees come from
        // balance transactions; the two sources are not reconciled and may
        // cover different entry types (refunds, adjustments).
        let total_gross = session_revenue + invoice_revenue;

        let mut acc = RevenueAccumulator::default();
        self.fold_sessions(sessions, &mut acc);
        self.fold_invoices(invoices, &mut acc);

        acc.buckets.sort_by_key(|b| b.timestamp);
        let chart_data = cumulative_series(&acc.stats, acc.buckets);

        let mut products = acc.stats;
        products.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));

        DashboardData {
            summary: DashboardSummary {
                total_revenue: minor_to_major(total_gross),
                total_fees: minor_to_major(total_fees),
                net_revenue: minor_to_major(total_gross - total_fees),
                transaction_count: sessions.len() + invoices.len(),
            },
            products,
            chart_data,
        }
    }

    fn fold_sessions(&self, sessions: &[CheckoutSession], acc: &mut RevenueAccumulator) {
        let mut sorted: Vec<&CheckoutSession> = sessions.iter().collect();
        sorted.sort_by_key(|s| s.created);

        for session in sorted {
            let label = bucket_label(session.created);
            let items = session.line_items.iter().flat_map(|l| l.data.iter());
            for item in items {
                // Line items without a product reference are skipped.
                let Some(product_id) = item.price.as_ref().map(|p| p.product.as_str()) else {
                    continue;
                };
                let name = resolve_display_name(product_id, &self.product_names, None);
                let quantity = item.quantity.filter(|&q| q > 0).unwrap_or(1);
                acc.fold_line_item(&name, item.amount_subtotal, quantity, &label, session.created);
            }
        }
    }

    fn fold_invoices(&self, invoices: &[Invoice], acc: &mut RevenueAccumulator) {
        let mut sorted: Vec<&Invoice> = invoices.iter().collect();
        sorted.sort_by_key(|i| i.created);

        for invoice in sorted {
            let label = bucket_label(invoice.created);
            let email = invoice.customer_email.as_deref();
            let items = invoice.lines.iter().flat_map(|l| l.data.iter());
            for item in items {
                let Some(product_id) = item.price.as_ref().map(|p| p.product.as_str()) else {
                    continue;
                };
                let name = resolve_display_name(product_id, &self.product_names, email);
                let quantity = item.quantity.filter(|&q| q > 0).unwrap_or(1);
                acc.fold_line_item(&name, item.amount, quantity, &label, invoice.created);
            }
        }
    }
}

// Converts per-bucket deltas into cumulative points in major units. Every
// point carries every known product's running total, including products with
// no activity in that bucket, so chart series never have gaps.
fn cumulative_series(stats: &[ProductSummary], buckets: Vec<Bucket>) -> Vec<ChartPoint> {
    let product_names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
    let mut running: HashMap<&str, i64> = product_names.iter().map(|&n| (n, 0)).collect();

    buckets
        .into_iter()
        .map(|bucket| {
            let mut values = BTreeMap::new();
            for &name in &product_names {
                let delta = bucket.deltas.get(name).copied().unwrap_or(0);
                let total = running
                    .get_mut(name)
                    .expect("running total initialized for every product name");
                *total += delta;
                values.insert(name.to_string(), minor_to_major(*total));
            }
            ChartPoint {
                label: bucket.label,
                timestamp: bucket.timestamp,
                values,
            }
        })
        .collect()
}

/// Runs the full aggregation pipeline over the four raw collections.
pub fn aggregate(
    products: &[Product],
    sessions: &[CheckoutSession],
    invoices: &[Invoice],
    balance_transactions: &[BalanceTransaction],
) -> DashboardData {
    Aggregator::new(products).aggregate(sessions, invoices, balance_transactions)
}
