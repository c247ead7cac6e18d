//! OmniWallet Dashboard Library
//!
//! Client side of the OmniWallet page: resolves the active wallet address,
//! shows its token balances on each supported chain and submits send
//! requests to the wallet backend.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod page;
pub mod tracker;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items for easier access
pub use config::Config;
pub use error::FetchError;
pub use models::{
    asset::{AssetBalance, AssetRow},
    portfolio::{AssetTable, PortfolioResponse},
    region::{ElementId, RegionContent},
    send::{Chain, SendOutcome, SendRequest},
};
pub use traits::{backend::WalletBackend, region_observer::RegionObserver};
pub use providers::http_backend::HttpBackend;
pub use handlers::{
    console::ConsoleRegionObserver,
    html::HtmlSnapshotObserver,
    composite::CompositeRegionObserver,
};
pub use page::Page;
pub use tracker::{
    Dashboard, PlaceholderLoader, PortfolioLoader, ReceiveFlow, TransactionSubmitter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
