//! In-process caches shared across chat sessions.

pub mod session_cache;

pub use session_cache::SessionCache;
