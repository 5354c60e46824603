use crate::error::{ReportError, Result};
use crate::schema::{BalanceTransaction, CheckoutSession, Invoice, Product};
use crate::stripe::types::{ApiErrorEnvelope, List};
use reqwest::Client;
use serde::de::DeserializeOwned;

const STRIPE_BASE_URL: &str = "https://api.stripe.com/v1";

#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl StripeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: STRIPE_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different host. Intended for tests against a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.get_list("/products?limit=100&active=true").await
    }

    /// Checkout sessions with `line_items` expanded, so sold units can be
    /// attributed to products.
    pub async fn list_checkout_sessions(&self) -> Result<Vec<CheckoutSession>> {
        self.get_list("/checkout/sessions?limit=100&expand[]=data.line_items")
            .await
    }

    /// Paid invoices with `lines` expanded.
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        self.get_list("/invoices?limit=100&status=paid&expand[]=data.lines")
            .await
    }

    pub async fn list_balance_transactions(&self) -> Result<Vec<BalanceTransaction>> {
        self.get_list("/balance_transactions?limit=100").await
    }

    async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, endpoint);
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            // Surface Stripe's own message when the error envelope parses,
            // the raw body otherwise.
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .unwrap_or(body);
            return Err(ReportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let list: List<T> = res.json().await?;
        Ok(list.data)
    }
}
