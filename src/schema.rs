use serde::{Deserialize, Serialize};

/// A product in the processor's catalog. Used only to resolve line-item
/// product references to display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub id: String,
    /// Id of the product this price belongs to.
    pub product: String,
    #[serde(default)]
    pub unit_amount: Option<i64>,
    pub currency: String,
}

/// One priced entry within a checkout session. `amount_subtotal` is in minor
/// currency units (cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLineItem {
    pub id: String,
    pub amount_subtotal: i64,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionLineItemList {
    pub data: Vec<SessionLineItem>,
}

/// A completed checkout session. `created` is epoch seconds; `amount_total`
/// is the session total in minor units. `line_items` is only present when the
/// fetch expanded it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub created: i64,
    pub amount_total: i64,
    pub currency: String,
    #[serde(default)]
    pub line_items: Option<SessionLineItemList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: String,
    /// Line amount in minor units.
    pub amount: i64,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InvoiceLineItemList {
    pub data: Vec<InvoiceLineItem>,
}

/// A paid invoice. `amount_paid` is in minor units; `lines` is only present
/// when the fetch expanded it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub created: i64,
    pub amount_paid: i64,
    pub status: String,
    pub currency: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub lines: Option<InvoiceLineItemList>,
}

/// A ledger entry from the processor's balance. Source of fee totals only;
/// never joined to products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub id: String,
    pub amount: i64,
    pub fee: i64,
    pub net: i64,
    pub currency: String,
    pub created: i64,
    #[serde(rename = "type")]
    pub txn_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_expanded_session() {
        let json = r#"{
            "id": "cs_test_a1",
            "created": 1714521600,
            "amount_total": 2500,
            "currency": "usd",
            "line_items": {
                "data": [{
                    "id": "li_1",
                    "amount_subtotal": 2500,
                    "quantity": 2,
                    "description": "Pro Subscription",
                    "price": {
                        "id": "price_1",
                        "product": "prod_1",
                        "unit_amount": 1250,
                        "currency": "usd"
                    }
                }]
            }
        }"#;

        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.amount_total, 2500);
        let items = session.line_items.unwrap();
        assert_eq!(items.data.len(), 1);
        assert_eq!(items.data[0].quantity, Some(2));
        assert_eq!(items.data[0].price.as_ref().unwrap().product, "prod_1");
    }

    #[test]
    fn test_deserialize_session_without_line_items() {
        let json = r#"{"id":"cs_2","created":1714521600,"amount_total":0,"currency":"usd"}"#;
        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert!(session.line_items.is_none());
    }

    #[test]
    fn test_deserialize_invoice_with_null_fields() {
        let json = r#"{
            "id": "in_1",
            "created": 1714608000,
            "amount_paid": 9900,
            "status": "paid",
            "currency": "usd",
            "customer_email": "billing@example.com",
            "lines": {
                "data": [{
                    "id": "il_1",
                    "amount": 9900,
                    "price": null,
                    "description": null,
                    "quantity": null
                }]
            }
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.customer_email.as_deref(), Some("billing@example.com"));
        let lines = invoice.lines.unwrap();
        assert!(lines.data[0].price.is_none());
        assert!(lines.data[0].quantity.is_none());
    }

    #[test]
    fn test_balance_transaction_type_rename() {
        let json = r#"{
            "id": "txn_1",
            "amount": 2500,
            "fee": 102,
            "net": 2398,
            "currency": "usd",
            "created": 1714521600,
            "type": "charge"
        }"#;

        let txn: BalanceTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.txn_type, "charge");

        let round_trip = serde_json::to_value(&txn).unwrap();
        assert_eq!(round_trip["type"], "charge");
    }
}
