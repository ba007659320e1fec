use chrono::NaiveDateTime;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UsersEnvelope {
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product_id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSeller {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub seller: OrderSeller,
    pub total_price: f64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

impl Order {
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrdersEnvelope {
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: i64,
}

/// Error bodies the backend produces: a bare JSON string,
/// `{"message": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum BackendMessage {
    Text(String),
    Message { message: String },
    Error { error: String },
}

impl BackendMessage {
    pub fn into_text(self) -> String {
        match self {
            BackendMessage::Text(text) => text,
            BackendMessage::Message { message } => message,
            BackendMessage::Error { error } => error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        let code = match status {
            400 | 422 => "VALIDATION_ERROR",
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            _ => "UNKNOWN",
        };
        Self::with_code(msg, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("net").code, "REQUEST_FAILED");
        assert_eq!(ApiError::unauthorized("no").code, "UNAUTHORIZED");
        assert_eq!(ApiError::from_status(403, "nope").code, "FORBIDDEN");
        assert_eq!(ApiError::from_status(404, "gone").code, "NOT_FOUND");
        assert_eq!(ApiError::from_status(500, "oops").code, "UNKNOWN");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn backend_message_accepts_all_error_shapes() {
        let text: BackendMessage = serde_json::from_value(json!("Usuario ya existe")).unwrap();
        assert_eq!(text.into_text(), "Usuario ya existe");
        let message: BackendMessage =
            serde_json::from_value(json!({ "message": "Credenciales erradas" })).unwrap();
        assert_eq!(message.into_text(), "Credenciales erradas");
        let error: BackendMessage = serde_json::from_value(json!({ "error": "Faltan datos" })).unwrap();
        assert_eq!(error.into_text(), "Faltan datos");
    }

    #[test]
    fn order_parses_backend_isoformat_timestamps() {
        let order: Order = serde_json::from_value(json!({
            "id": 3,
            "created_at": "2025-01-02T10:00:00.123456",
            "seller": { "id": 1, "name": "Ana" },
            "total_price": 30.0,
            "items": [
                { "product_id": 1, "product_name": "Café", "quantity": 2, "price": 10.0 },
                { "product_id": 2, "product_name": "Té", "quantity": 1, "price": 10.0 }
            ]
        }))
        .unwrap();
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.seller.name, "Ana");
    }

    #[test]
    fn product_tolerates_missing_image() {
        let product: Product =
            serde_json::from_value(json!({ "id": 1, "name": "Café", "price": 4.5, "stock": 3, "image": null }))
                .unwrap();
        assert_eq!(product.image, None);
        assert_eq!(product.stock, 3);
    }
}
