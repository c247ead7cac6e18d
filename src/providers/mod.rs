//! Backends the dashboard can talk to

pub mod http_backend;

// Re-export for convenience
pub use http_backend::HttpBackend;
