//! Data models for the shop API
//!
//! Entity shapes plus the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod entities;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use entities::{Category, Order, Product, User};
pub use requests::{
    CategoryPayload, CreateOrderRequest, LoginRequest, OrderItem, ProductPayload, RegisterRequest,
};
pub use responses::{
    CategoriesEnvelope, CategoryCreated, CategoryEnvelope, HealthResponse, LoginResponse,
    MessageResponse, OrderCreated, ProductCreated, ProductListResponse, RegisterResponse,
    UserEnvelope,
};
