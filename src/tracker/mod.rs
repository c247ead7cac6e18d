//! Page behaviour: loading, sending, receiving and the demo stub

pub mod dashboard;
pub mod placeholder;
pub mod portfolio_loader;
pub mod receive;
pub mod transaction_submitter;

pub use dashboard::Dashboard;
pub use placeholder::PlaceholderLoader;
pub use portfolio_loader::{render_portfolio, PortfolioLoader};
pub use receive::ReceiveFlow;
pub use transaction_submitter::TransactionSubmitter;
