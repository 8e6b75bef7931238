mod console;

use anyhow::Context;
use clap::Parser;
use futures::future::join_all;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use centros_search::modules::page::{RESULTS_ID, SEARCH_BUTTON_ID, SEARCH_INPUT_ID};
use centros_search::{Button, Config, Page, SearchController, TextInput};

use crate::console::ConsoleRegion;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base url of the centros endpoint, overrides the CENTROS_* variables
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Provinces to search, one activation each. Read line by line from stdin when empty
    queries: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match args.endpoint {
        Some(endpoint) => Config::new(endpoint)?,
        None => Config::from_env()?,
    };
    info!(endpoint = %config.endpoint(), "searching centros");

    let input = TextInput::new();
    let button = Button::new();

    let mut page = Page::new();
    page.insert_input(SEARCH_INPUT_ID, input.clone());
    page.insert_button(SEARCH_BUTTON_ID, button.clone());
    page.insert_container(RESULTS_ID, ConsoleRegion::new());

    SearchController::from_page(&page, config)
        .and_then(|controller| controller.attach_to_page(&page))
        .context("Failed to attach search controller")?;

    let mut pending = Vec::new();

    if args.queries.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            input.set_value(line);
            pending.extend(button.click());
        }
    } else {
        for query in args.queries {
            input.set_value(query);
            pending.extend(button.click());
        }
    }

    // in-flight cycles are never cancelled, wait for all of them
    for result in join_all(pending).await {
        if let Err(error) = result {
            warn!(%error, "search task did not finish");
        }
    }

    Ok(())
}
