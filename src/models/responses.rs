//! Response DTOs for the shop API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::{Category, Order, Product, User};

/// Response body for POST /api/users/register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

impl RegisterResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: "User created successfully!".to_string(),
            user,
        }
    }
}

/// Response body for POST /api/users/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

impl LoginResponse {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            message: "Login successfull".to_string(),
            token: token.into(),
        }
    }
}

/// Response body for GET /api/users/:id
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Response body for GET /api/categories/:id
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEnvelope {
    pub category: Category,
}

/// Response body for GET /api/categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesEnvelope {
    pub categories: Vec<Category>,
}

/// Response body for POST /api/categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCreated {
    pub message: String,
    pub category: Category,
}

impl CategoryCreated {
    pub fn new(category: Category) -> Self {
        Self {
            message: "Category created successfully!".to_string(),
            category,
        }
    }
}

/// Response body for POST and PATCH on /api/products
#[derive(Debug, Clone, Serialize)]
pub struct ProductCreated {
    pub message: String,
    pub product: Product,
}

impl ProductCreated {
    pub fn created(product: Product) -> Self {
        Self {
            message: "Product created successfully".to_string(),
            product,
        }
    }

    pub fn updated(product: Product) -> Self {
        Self {
            message: "Product updated successfully".to_string(),
            product,
        }
    }
}

/// Response body for GET /api/products - the shape that gets cached.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: i64,
}

/// Response body for POST /api/orders
#[derive(Debug, Clone, Serialize)]
pub struct OrderCreated {
    pub message: String,
    pub order: Order,
}

impl OrderCreated {
    pub fn new(order: Order) -> Self {
        Self {
            message: "Order placed successfully".to_string(),
            order,
        }
    }
}

/// Bare message body, used by the welcome route.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
