//! Data models for the dashboard

pub mod asset;
pub mod portfolio;
pub mod region;
pub mod send;

// Re-export for convenience
pub use asset::{AssetBalance, AssetRow};
pub use portfolio::{AssetTable, PortfolioResponse};
pub use region::{ElementId, RegionContent};
pub use send::{Chain, SendOutcome, SendRequest};
