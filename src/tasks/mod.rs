//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache sweep: removes expired response-cache entries at configured
//!   intervals. Optimization only; `get` already treats expired entries as
//!   absent.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
