//! Request and response bodies exchanged with the backend.

use serde::{Deserialize, Serialize};
use techmart::{CartLineId, CartSnapshot, Quantity};

/// `{ success, message, data }` wrapper used by most backend responses.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub(crate) success: bool,

    #[serde(default)]
    pub(crate) message: Option<String>,

    pub(crate) data: Option<T>,
}

impl<T> Envelope<T> {
    /// The payload when the backend reported success and sent one.
    pub(crate) fn into_data(self) -> Result<T, Option<String>> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(self.message),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateQuantityRequest<'a> {
    #[serde(rename = "_id")]
    pub(crate) id: &'a CartLineId,
    pub(crate) quantity: Quantity,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteLineRequest<'a> {
    #[serde(rename = "_id")]
    pub(crate) id: &'a CartLineId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest<'a> {
    pub(crate) cart_items: &'a CartSnapshot,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutSession {
    #[serde(default)]
    pub(crate) id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryRequest<'a> {
    pub(crate) category: &'a str,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn failed_envelope_yields_message() -> TestResult {
        let envelope: Envelope<Vec<u8>> =
            serde_json::from_str(r#"{ "success": false, "error": true, "message": "Please login" }"#)?;

        assert_eq!(envelope.into_data(), Err(Some("Please login".to_string())));

        Ok(())
    }

    #[test]
    fn successful_envelope_without_data_is_rejected() -> TestResult {
        let envelope: Envelope<Vec<u8>> = serde_json::from_str(r#"{ "success": true }"#)?;

        assert_eq!(envelope.into_data(), Err(None));

        Ok(())
    }

    #[test]
    fn update_request_uses_backend_field_names() -> TestResult {
        let id = CartLineId::new("line-1");
        let body = serde_json::to_value(UpdateQuantityRequest {
            id: &id,
            quantity: Quantity::new(3)?,
        })?;

        assert_eq!(body, serde_json::json!({ "_id": "line-1", "quantity": 3 }));

        Ok(())
    }
}
