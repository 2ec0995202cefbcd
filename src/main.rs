use anyhow::{Context, Result};
use clap::Parser;
use helpdesk::app::{App, AppEvent};
use helpdesk::catalog;
use helpdesk::config::Config;
use helpdesk::feed;
use helpdesk::util::validate_endpoint;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Get the config directory path (~/.config/helpdesk/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("helpdesk"))
}

#[derive(Parser, Debug)]
#[command(name = "helpdesk", about = "Browse and search help articles in the terminal")]
struct Args {
    /// Feed URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file [default: ~/.config/helpdesk/config.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the grouped topics and exit
    #[arg(long)]
    list: bool,

    /// With --list, only print topics whose title matches
    #[arg(long, value_name = "QUERY", requires = "list")]
    search: Option<String>,
}

/// Fetch once and print the category tree to stdout.
async fn print_list(client: &reqwest::Client, endpoint: &str, query: Option<&str>) -> Result<()> {
    let rows = feed::load(client, endpoint)
        .await
        .with_context(|| format!("Failed to fetch help topics from {}", endpoint))?;
    let groups = catalog::group(&rows);
    let groups = match query {
        Some(q) => catalog::filter(&groups, q),
        None => groups,
    };
    print!("{}", catalog::outline(&groups));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    validate_endpoint(&config.endpoint)
        .with_context(|| format!("Invalid endpoint '{}'", config.endpoint))?;

    let client = feed::build_client().context("Failed to create HTTP client")?;

    if args.list {
        return print_list(&client, &config.endpoint, args.search.as_deref()).await;
    }

    let mut app = App::new(&config, client);
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(8);

    helpdesk::ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
