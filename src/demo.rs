use crate::schema::{
    BalanceTransaction, CheckoutSession, Invoice, InvoiceLineItem, InvoiceLineItemList, Price,
    Product, SessionLineItem, SessionLineItemList,
};
use chrono::Utc;
use rand::{thread_rng, Rng};

const DAY_SECONDS: i64 = 86_400;
const HISTORY_DAYS: i64 = 90;
const SESSION_COUNT: usize = 150;
const INVOICE_COUNT: usize = 12;

const DEMO_PRODUCTS: [(&str, &str); 4] = [
    ("prod_1", "Pro Subscription"),
    ("prod_2", "Starter Kit"),
    ("prod_3", "Enterprise License"),
    ("prod_4", "Consulting Hour"),
];

/// The four raw collections a live fetch would return, generated locally.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub products: Vec<Product>,
    pub sessions: Vec<CheckoutSession>,
    pub invoices: Vec<Invoice>,
    pub balance_transactions: Vec<BalanceTransaction>,
}

/// Generates 90 days of plausible payment activity: checkout sessions across
/// a fixed catalog, a small batch of paid invoices (some referencing retired
/// product ids so the per-customer attribution path gets data), and a balance
/// transaction per charge with a 2.9% + 30 fee.
pub fn generate_demo_data() -> DemoData {
    let mut rng = thread_rng();
    let now = Utc::now().timestamp();
    let window_start = now - HISTORY_DAYS * DAY_SECONDS;

    let products: Vec<Product> = DEMO_PRODUCTS
        .iter()
        .map(|(id, name)| Product {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

    let mut sessions = Vec::with_capacity(SESSION_COUNT);
    let mut balance_transactions = Vec::with_capacity(SESSION_COUNT + INVOICE_COUNT);

    for i in 0..SESSION_COUNT {
        let created = window_start + rng.gen_range(0..HISTORY_DAYS * DAY_SECONDS);
        let (product_id, _) = DEMO_PRODUCTS[rng.gen_range(0..DEMO_PRODUCTS.len())];
        let amount = rng.gen_range(1000..6000);

        sessions.push(CheckoutSession {
            id: format!("sess_{}", i),
            created,
            amount_total: amount,
            currency: "usd".to_string(),
            line_items: Some(SessionLineItemList {
                data: vec![SessionLineItem {
                    id: format!("li_{}", i),
                    amount_subtotal: amount,
                    price: Some(demo_price(i, product_id, amount)),
                    description: None,
                    quantity: Some(1),
                }],
            }),
        });
        balance_transactions.push(charge_txn(format!("txn_{}", i), amount, created));
    }

    let mut invoices = Vec::with_capacity(INVOICE_COUNT);
    for i in 0..INVOICE_COUNT {
        let created = window_start + rng.gen_range(0..HISTORY_DAYS * DAY_SECONDS);
        let amount = rng.gen_range(5000..20_000);
        // Every third invoice bills against a retired product id, so its
        // revenue is attributed to the customer email instead.
        let product_id = if i % 3 == 0 {
            "prod_legacy"
        } else {
            DEMO_PRODUCTS[rng.gen_range(0..DEMO_PRODUCTS.len())].0
        };

        invoices.push(Invoice {
            id: format!("in_{}", i),
            created,
            amount_paid: amount,
            status: "paid".to_string(),
            currency: "usd".to_string(),
            customer_email: Some(format!("customer{}@example.com", i % 4)),
            lines: Some(InvoiceLineItemList {
                data: vec![InvoiceLineItem {
                    id: format!("il_{}", i),
                    amount,
                    price: Some(demo_price(SESSION_COUNT + i, product_id, amount)),
                    description: None,
                    quantity: Some(1),
                }],
            }),
        });
        balance_transactions.push(charge_txn(format!("txn_in_{}", i), amount, created));
    }

    sessions.sort_by_key(|s| s.created);
    invoices.sort_by_key(|i| i.created);
    balance_transactions.sort_by_key(|t| t.created);

    DemoData {
        products,
        sessions,
        invoices,
        balance_transactions,
    }
}

fn demo_price(seq: usize, product_id: &str, unit_amount: i64) -> Price {
    Price {
        id: format!("price_{}", seq),
        product: product_id.to_string(),
        unit_amount: Some(unit_amount),
        currency: "usd".to_string(),
    }
}

fn charge_txn(id: String, amount: i64, created: i64) -> BalanceTransaction {
    // Card processing fee: 2.9% + 30 minor units.
    let fee = (amount as f64 * 0.029) as i64 + 30;
    BalanceTransaction {
        id,
        amount,
        fee,
        net: amount - fee,
        currency: "usd".to_string(),
        created,
        txn_type: "charge".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_shape() {
        let demo = generate_demo_data();

        assert_eq!(demo.products.len(), 4);
        assert_eq!(demo.sessions.len(), SESSION_COUNT);
        assert_eq!(demo.invoices.len(), INVOICE_COUNT);
        assert_eq!(
            demo.balance_transactions.len(),
            SESSION_COUNT + INVOICE_COUNT
        );
    }

    #[test]
    fn test_demo_collections_sorted_ascending() {
        let demo = generate_demo_data();

        assert!(demo.sessions.windows(2).all(|w| w[0].created <= w[1].created));
        assert!(demo.invoices.windows(2).all(|w| w[0].created <= w[1].created));
        assert!(demo
            .balance_transactions
            .windows(2)
            .all(|w| w[0].created <= w[1].created));
    }

    #[test]
    fn test_demo_fee_formula() {
        let demo = generate_demo_data();

        for txn in &demo.balance_transactions {
            let expected = (txn.amount as f64 * 0.029) as i64 + 30;
            assert_eq!(txn.fee, expected);
            assert_eq!(txn.net, txn.amount - txn.fee);
        }
    }

    #[test]
    fn test_demo_invoices_include_legacy_products() {
        let demo = generate_demo_data();

        let legacy = demo
            .invoices
            .iter()
            .flat_map(|i| i.lines.iter().flat_map(|l| l.data.iter()))
            .filter(|item| item.price.as_ref().is_some_and(|p| p.product == "prod_legacy"))
            .count();
        assert!(legacy > 0, "expected some invoices to bill retired products");
    }
}
