use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::models::{ElementId, RegionContent};
use crate::traits::region_observer::RegionObserver;
use crate::utils::escape_html;

/// Render one region's inner markup. All text is escaped.
pub fn render_region(content: &RegionContent) -> String {
    match content {
        RegionContent::Text(text) => escape_html(text),
        RegionContent::Table(table) => {
            let mut html = String::from("<table>");
            for row in &table.rows {
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&row.ticker),
                    escape_html(&row.quantity_text()),
                    escape_html(&row.value_text()),
                ));
            }
            if let Some(footer) = table.footer() {
                html.push_str(&format!("<tfoot><tr><td colspan=\"3\">{}</td></tr></tfoot>", escape_html(&footer)));
            }
            html.push_str("</table>");
            html
        }
        RegionContent::Link { prefix, text, href } => format!(
            "{}<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape_html(prefix),
            escape_html(href),
            escape_html(text),
        ),
    }
}

/// Render a full page document from a region snapshot
pub fn render_page(regions: &BTreeMap<ElementId, RegionContent>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>OmniWallet</title></head>\n<body>\n",
    );
    for (id, content) in regions {
        html.push_str(&format!("<div id=\"{}\">{}</div>\n", id, render_region(content)));
    }
    html.push_str(&format!(
        "<footer>Updated {}</footer>\n</body>\n</html>\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html
}

/// Keeps an HTML rendition of the page on disk, rewritten on every update
pub struct HtmlSnapshotObserver {
    path: PathBuf,
    regions: Mutex<BTreeMap<ElementId, RegionContent>>,
}

impl HtmlSnapshotObserver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            regions: Mutex::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl RegionObserver for HtmlSnapshotObserver {
    async fn on_region_updated(&self, region: ElementId, content: &RegionContent) {
        let mut regions = self.regions.lock().await;
        regions.insert(region, content.clone());

        let html = render_page(&regions);
        match tokio::fs::write(&self.path, html).await {
            Ok(()) => debug!("Wrote page snapshot to {}", self.path.display()),
            Err(e) => warn!("Failed to write page snapshot {}: {}", self.path.display(), e),
        }
    }
}
