use serde::Deserialize;

/// Stripe list envelope: every collection endpoint wraps its results in
/// `{"object": "list", "data": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Product;

    #[test]
    fn test_list_envelope() {
        let json = r#"{"object":"list","data":[{"id":"prod_1","name":"Widget"}],"has_more":false}"#;
        let list: List<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].name, "Widget");
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{"error":{"type":"invalid_request_error","message":"Invalid API Key provided"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.error.unwrap().message.as_deref(),
            Some("Invalid API Key provided")
        );
    }
}
