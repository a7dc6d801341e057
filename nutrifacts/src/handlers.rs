use anyhow::{Context, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use nutrifacts_client::FoodDataClient;
use nutrifacts_core::card::{self, CardFormat};
use nutrifacts_core::lookup_food;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

pub fn print_banner() {
    eprintln!("{}", "═".repeat(60).bright_green().bold());
    eprintln!(
        "  {} {}",
        "NUTRIFACTS".bright_white().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    eprintln!("  {}", "Nutrition facts for any food".green());
    eprintln!("{}", "═".repeat(60).bright_green().bold());
}

/// Install the fmt subscriber on stderr. `RUST_LOG` overrides `default_directive`.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    // Ignored when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the FoodData Central client from the api key/url options.
pub fn build_client(api_key: Option<&String>, api_url: Option<&Url>) -> anyhow::Result<FoodDataClient> {
    let api_key = match api_key.map(|k| k.trim()) {
        Some(key) if !key.is_empty() => key,
        _ => bail!("No USDA API key configured: pass --api-key or set USDA_API_KEY"),
    };

    let client = FoodDataClient::new(api_key).context("Failed to create HTTP client")?;
    Ok(match api_url {
        Some(url) => client.with_base_url(url.clone()),
        None => client,
    })
}

fn client_from_args(args: &ArgMatches) -> anyhow::Result<FoodDataClient> {
    build_client(
        args.get_one::<String>("api-key"),
        args.get_one::<Url>("api-url"),
    )
}

/// Join the words of a lookup argument into one query ("peanut butter").
pub fn food_query<'a>(words: impl IntoIterator<Item = &'a String>) -> String {
    words
        .into_iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn handle_serve(args: &ArgMatches) -> anyhow::Result<()> {
    init_logging("info");

    let addr = args
        .get_one::<SocketAddr>("bind")
        .copied()
        .context("--bind is required")?;
    let client = client_from_args(args)?;

    crate::server::serve(addr, client).await
}

pub async fn handle_lookup(args: &ArgMatches) -> anyhow::Result<()> {
    init_logging("warn");

    let query = food_query(args.get_many::<String>("FOOD").into_iter().flatten());
    let format = args
        .get_one::<String>("format")
        .and_then(|f| CardFormat::from_str(f))
        .unwrap_or(CardFormat::Text);
    let client = client_from_args(args)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Looking up {}...", query));

    let result = lookup_food(&client, &query).await;
    spinner.finish_and_clear();

    let facts = result?;
    let rendered = card::render(&facts, format).context("Failed to render nutrition facts")?;
    println!("{}", rendered);
    Ok(())
}
