use clap::{Parser, Subcommand};
use nuzul::core::config;
use nuzul::core::listing::parse_listings;
use nuzul::core::{Currency, Language, PreferenceContext};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nuzul", about = "Storefront language and pricing preferences")]
struct Args {
    /// Display language
    #[arg(short, long, value_enum, global = true)]
    language: Option<Language>,

    /// Display currency (ISO code)
    #[arg(short, long, global = true)]
    currency: Option<Currency>,

    /// Read config from this file instead of ~/.nuzul/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a display string by key
    Translate { key: String },
    /// Format a USD amount in the display currency
    Price { amount: f64 },
    /// Convert an amount between currency codes
    Convert {
        amount: f64,
        #[arg(long, default_value = "USD")]
        from: String,
        /// Defaults to the display currency
        #[arg(long)]
        to: Option<String>,
    },
    /// List the exchange rate table
    Rates,
    /// Render listing rows from a datastore JSON export
    Listings {
        path: PathBuf,
        /// Listing id to mark as wishlisted (repeatable)
        #[arg(long = "wish")]
        wish: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to nuzul.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("nuzul.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let resolved = config::resolve(&file_config, args.language, args.currency)?;
    log::info!(
        "Nuzul starting with language {} and currency {}",
        resolved.language,
        resolved.currency
    );

    let mut prefs = PreferenceContext::from_config(&resolved);

    match args.command {
        Command::Translate { key } => println!("{}", prefs.t(&key)),
        Command::Price { amount } => println!("{}", prefs.format(amount)),
        Command::Convert { amount, from, to } => {
            let to = to.unwrap_or_else(|| prefs.currency().code().to_string());
            println!("{:.2} {}", prefs.convert_codes(amount, &from, &to), to);
        }
        Command::Rates => {
            for (currency, rate) in prefs.rates().iter() {
                println!("{:<4} {:>6} {}", currency.code(), currency.symbol(), rate);
            }
        }
        Command::Listings { path, wish } => {
            let json = fs::read_to_string(&path)?;
            let listings = parse_listings(&json)?;
            if listings.is_empty() {
                println!("{}", prefs.t("no_results"));
                return Ok(());
            }
            for id in &wish {
                prefs.wishlist_add(id);
            }
            for listing in &listings {
                let marker = if prefs.wishlist_contains(&listing.id) { "♥" } else { " " };
                println!(
                    "{} {}  {}/{}",
                    marker,
                    listing.name,
                    prefs.listing_price(listing),
                    prefs.t("night")
                );
            }
        }
    }

    Ok(())
}
