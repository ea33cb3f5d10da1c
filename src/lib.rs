//! Shop API - an online shop REST backend
//!
//! Exposes user, category, product, and order endpoints backed by a relational
//! store, with a read-through response cache on the product read path.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod media;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
