//! Cache Module
//!
//! In-process read-through response cache with per-entry TTL expiry.
//!
//! The cache never fetches on miss: handlers perform the authoritative read
//! and populate the cache themselves. A miss (or an expired entry, which is
//! the same thing) is a normal outcome, never an error.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ResponseCache;
