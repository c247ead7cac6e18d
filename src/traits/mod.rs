//! Core traits for the dashboard

pub mod backend;
pub mod region_observer;

// Re-export for convenience
pub use backend::WalletBackend;
pub use region_observer::RegionObserver;
