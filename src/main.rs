use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use omniwallet_dashboard::{
    CompositeRegionObserver, Config, ConsoleRegionObserver, Dashboard, ElementId,
    HtmlSnapshotObserver, HttpBackend, Page, PlaceholderLoader, TransactionSubmitter,
    WalletBackend,
};

#[derive(Parser, Debug)]
#[command(name = "omniwallet", version, about = "OmniWallet dashboard client")]
struct Cli {
    /// Wallet backend base URL
    #[arg(long, env = "OMNIWALLET_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dashboard and keep reading commands from stdin
    Dashboard {
        /// Also refresh automatically every N milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Keep an HTML rendition of the page at this path
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Load address and balances once and print them
    Refresh {
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Submit one send request
    Send {
        chain: String,
        to: String,
        amount: String,
        #[arg(long)]
        gas_price_gwei: Option<f64>,
    },
    /// Show the address to receive funds on
    Receive,
    /// Placeholder page with canned values
    Demo,
}

/// A line typed into the interactive dashboard
#[derive(Debug, PartialEq)]
enum Action {
    Refresh,
    Send {
        chain: String,
        to: String,
        amount: String,
        gas_price_gwei: Option<String>,
    },
    Receive,
    Show,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Result<Option<Action>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let action = match words.as_slice() {
        [] => return Ok(None),
        ["refresh"] | ["r"] => Action::Refresh,
        ["send", chain, to, amount] => Action::Send {
            chain: chain.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
            gas_price_gwei: None,
        },
        ["send", chain, to, amount, gas] => Action::Send {
            chain: chain.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
            gas_price_gwei: Some(gas.to_string()),
        },
        ["receive"] => Action::Receive,
        ["show"] | ["page"] => Action::Show,
        ["help"] | ["?"] => Action::Help,
        ["quit"] | ["exit"] | ["q"] => Action::Quit,
        _ => return Err(format!("Unknown command: {}", line.trim())),
    };
    Ok(Some(action))
}

const HELP: &str = "commands: refresh | send <chain> <to> <amount> [gas_gwei] | receive | show | quit";

fn print_page(page: &Page) {
    for (id, content) in page.snapshot() {
        println!("[{}]", id);
        for line in content.lines() {
            println!("  {}", line);
        }
    }
}

fn build_page(html: Option<PathBuf>) -> Arc<Page> {
    let mut observer = CompositeRegionObserver::new();
    observer.add_observer(Arc::new(ConsoleRegionObserver::new()));
    if let Some(path) = html {
        info!("Writing page snapshots to {}", path.display());
        observer.add_observer(Arc::new(HtmlSnapshotObserver::new(path)));
    }
    Arc::new(Page::new(Arc::new(observer)))
}

fn spawn_click(dashboard: &Arc<Dashboard>, element: ElementId) {
    if let Err(e) = dashboard.spawn_click(element) {
        warn!("Click on #{} failed: {}", element, e);
    }
}

async fn run_interactive(dashboard: Arc<Dashboard>) -> anyhow::Result<()> {
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_action(&line) {
                    Ok(None) => {}
                    Ok(Some(Action::Refresh)) => spawn_click(&dashboard, ElementId::Refresh),
                    Ok(Some(Action::Send { chain, to, amount, gas_price_gwei })) => {
                        let page = dashboard.page();
                        page.set_input(ElementId::SendChain, chain);
                        page.set_input(ElementId::SendTo, to);
                        page.set_input(ElementId::SendAmount, amount);
                        page.set_input(ElementId::SendGasPrice, gas_price_gwei.unwrap_or_default());
                        spawn_click(&dashboard, ElementId::SendBtn);
                    }
                    Ok(Some(Action::Receive)) => spawn_click(&dashboard, ElementId::ReceiveBtn),
                    Ok(Some(Action::Show)) => print_page(dashboard.page()),
                    Ok(Some(Action::Help)) => println!("{}", HELP),
                    Ok(Some(Action::Quit)) => break,
                    Err(e) => println!("{}\n{}", e, HELP),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_level(true)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    tokio::runtime::Runtime::new()?.block_on(async {
        let backend: Arc<dyn WalletBackend> =
            Arc::new(HttpBackend::new(&config.api_url, config.http_timeout)?);

        match cli.command {
            Command::Dashboard { interval_ms, html } => {
                let page = build_page(html);
                let dashboard = Arc::new(Dashboard::new(backend, page, config.chains.clone()));
                dashboard.on_load().await;

                if let Some(ms) = interval_ms.filter(|ms| *ms > 0) {
                    let poller = dashboard.clone();
                    tokio::spawn(async move {
                        poller.loader().start_polling(Duration::from_millis(ms)).await;
                    });
                }

                info!("Dashboard is running. Type 'quit' or press Ctrl+C to stop.");
                run_interactive(dashboard).await?;
                info!("Shutting down...");
            }
            Command::Refresh { html } => {
                let page = build_page(html);
                let dashboard = Dashboard::new(backend, page.clone(), config.chains.clone());
                dashboard.on_load().await;
                print_page(&page);
            }
            Command::Send { chain, to, amount, gas_price_gwei } => {
                let page = build_page(None);
                page.set_input(ElementId::SendChain, chain);
                page.set_input(ElementId::SendTo, to);
                page.set_input(ElementId::SendAmount, amount);
                if let Some(gwei) = gas_price_gwei {
                    page.set_input(ElementId::SendGasPrice, gwei.to_string());
                }

                let outcome = TransactionSubmitter::new(backend, page.clone()).submit().await;
                print_page(&page);
                outcome.into_result()?;
            }
            Command::Receive => {
                let page = build_page(None);
                let dashboard = Dashboard::new(backend, page.clone(), config.chains.clone());
                dashboard.click(ElementId::ReceiveBtn).await?;
                print_page(&page);
            }
            Command::Demo => {
                let page = build_page(None);
                let demo = PlaceholderLoader::new(page.clone(), config.demo_delay);
                demo.load().await;
                print_page(&page);
            }
        }

        Ok::<(), anyhow::Error>(())
    })
}
