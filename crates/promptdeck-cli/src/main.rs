mod commands;
mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use promptdeck::ResourceKind;
use promptdeck_api::{ApiClient, StaticCredentials};
use promptdeck_browser::BrowserSession;

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(about = "Browse the prompt marketplace from the terminal")]
struct Cli {
    /// API base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List resources of one kind
    List {
        /// Resource kind (prompts, tools, agents)
        kind: String,
        /// Filter selection as "Group=Label", repeatable
        #[arg(long)]
        filter: Vec<String>,
        /// Page to display
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search resources by text
    Search {
        /// Resource kind (prompts, tools, agents)
        kind: String,
        /// Search text
        query: String,
        /// Filter selection as "Group=Label", repeatable
        #[arg(long)]
        filter: Vec<String>,
    },
    /// Show the available filter facets for a kind
    Filters {
        /// Resource kind (prompts, tools, agents)
        kind: String,
    },
}

fn parse_kind(s: &str) -> Result<ResourceKind> {
    ResourceKind::parse(s)
        .with_context(|| format!("unknown resource kind: {s} (expected prompts, tools, or agents)"))
}

fn api_token(config: &config::AppConfig) -> Option<String> {
    std::env::var("PROMPTDECK_TOKEN")
        .ok()
        .filter(|t| !t.is_empty())
        .or_else(|| config.api_token.clone())
}

fn build_session(base_url_override: Option<&str>, kind: ResourceKind) -> BrowserSession {
    let config = config::load_config();
    let base_url = base_url_override.unwrap_or(&config.base_url);
    let credentials = Arc::new(StaticCredentials::new(api_token(&config)));
    let client = Arc::new(ApiClient::new(base_url, credentials));

    BrowserSession::new(client, kind).with_page_size(config.page_size)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { kind, filter, page } => {
            let kind = parse_kind(&kind)?;
            let mut session = build_session(cli.base_url.as_deref(), kind);
            commands::list::run(&mut session, &filter, page).await
        }
        Command::Search {
            kind,
            query,
            filter,
        } => {
            let kind = parse_kind(&kind)?;
            let mut session = build_session(cli.base_url.as_deref(), kind);
            commands::search::run(&mut session, &query, &filter).await
        }
        Command::Filters { kind } => {
            let kind = parse_kind(&kind)?;
            let mut session = build_session(cli.base_url.as_deref(), kind);
            commands::filters::run(&mut session).await
        }
    }
}
