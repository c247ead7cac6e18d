//! Observers for page region updates

pub mod console;
pub mod html;
pub mod composite;

// Re-export for convenience
pub use console::ConsoleRegionObserver;
pub use html::HtmlSnapshotObserver;
pub use composite::CompositeRegionObserver;
