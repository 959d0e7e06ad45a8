//! ebay-pricer - average eBay listing price and shipping for a search query.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ebay_pricer::commands::SearchCommand;
use ebay_pricer::config::{Config, OutputFormat};
use ebay_pricer::ebay::{Condition, Country};
use ebay_pricer::prompt;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ebay-pricer",
    version,
    about = "Average eBay listing price and shipping for a search query"
)]
struct Cli {
    /// eBay country site to search (defaults to config, then us)
    #[arg(short = 'C', long, global = true)]
    country: Option<Country>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "EBAY_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "EBAY_TIMEOUT")]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average prices for an item (prompts for missing values)
    #[command(alias = "s")]
    Search {
        /// Item name
        query: Option<String>,

        /// Listing condition: all, new, opened, refurbished, used
        #[arg(long)]
        condition: Option<Condition>,
    },

    /// List supported country sites
    Countries,

    /// List supported condition filters
    Conditions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(country) = cli.country {
        config.country = country;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Search { query, condition } => {
            let (item, condition) = {
                let mut input = io::stdin().lock();
                let mut output = io::stdout();

                let item = match query {
                    Some(item) => item,
                    None => prompt::ask_item(&mut input, &mut output)?,
                };
                let condition = match condition {
                    Some(condition) => condition,
                    None => prompt::ask_condition(&mut input, &mut output)?,
                };
                (item, condition)
            };

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&item, condition).await?;
            println!("{}", output);
        }

        Commands::Countries => {
            println!("Supported eBay sites:\n");
            println!("{:<6} {:<16}", "Code", "Domain");
            println!("{:-<6} {:-<16}", "", "");

            for country in Country::all() {
                println!("{:<6} {:<16}", country.to_string(), country.domain());
            }
        }

        Commands::Conditions => {
            println!("{:<12} {:<24}", "Condition", "Filter");
            println!("{:-<12} {:-<24}", "", "");

            for condition in Condition::all() {
                let filter = if condition.filter().is_empty() { "(none)" } else { condition.filter() };
                println!("{:<12} {:<24}", condition.to_string(), filter);
            }
        }
    }

    Ok(())
}
