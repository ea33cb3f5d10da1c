//! Request DTOs for the shop API
//!
//! Defines the structure of incoming HTTP request bodies together with their
//! validation rules. Validation failures surface as 400 responses carrying
//! the first rule message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Request body for POST /api/users/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 40, message = "name must be between 3 and 40 characters"))]
    pub name: String,
    #[validate(
        email(message = "email must be a valid email address"),
        length(min = 3, max = 200, message = "email must be between 3 and 200 characters")
    )]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 200,
        message = "password must be between 6 and 200 characters"
    ))]
    pub password: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

/// Request body for POST /api/users/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        email(message = "email must be a valid email address"),
        length(min = 3, max = 200, message = "email must be between 3 and 200 characters")
    )]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 200,
        message = "password must be between 6 and 200 characters"
    ))]
    pub password: String,
}

/// Request body for POST /api/categories and PUT /api/categories/:id
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryPayload {
    #[validate(length(min = 3, max = 100, message = "name must be between 3 and 100 characters"))]
    pub name: String,
}

/// Request body for POST /api/products and PATCH /api/products/:id
///
/// `image` carries the raw payload (data URI or remote URL) forwarded to the
/// media host; the stored descriptor replaces it on the way into the catalog.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(length(min = 3, max = 300, message = "name must be between 3 and 300 characters"))]
    pub name: String,
    #[validate(length(min = 3, max = 300, message = "brand must be between 3 and 300 characters"))]
    pub brand: String,
    #[validate(length(min = 3, message = "description must be at least 3 characters"))]
    pub description: String,
    #[validate(range(min = 0.01, message = "price must be a positive amount"))]
    pub price: f64,
    #[validate(length(min = 3, max = 300, message = "image must be between 3 and 300 characters"))]
    pub image: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
}

/// One purchased line inside an order request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    #[serde(rename = "productId")]
    pub product_id: i64,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
}

/// Request body for POST /api/orders
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "an order needs at least one item"), nested)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub shipping: Option<Value>,
    #[serde(default, rename = "paymentStatus")]
    pub payment_status: Option<String>,
}

/// Flattens a validator error set into the first rule message, for the 400
/// response body.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .errors()
        .values()
        .find_map(|kind| match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string())),
            _ => None,
        })
        .unwrap_or_else(|| "invalid request body".to_string())
}
