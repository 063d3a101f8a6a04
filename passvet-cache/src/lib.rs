//! Bounded memoization for keyed async computations.
//!
//! [`FlightCache`] combines a capacity-bounded LRU store with a single-flight
//! guarantee: concurrent callers for the same key collapse onto one
//! computation, and completed values are served from memory until evicted.
//! Failed computations are never cached, so transient errors do not poison a
//! key.

pub mod flight;
pub mod lru;

pub use flight::FlightCache;
pub use lru::LruStore;
