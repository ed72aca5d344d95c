//! Composition root: wires config, catalog, adapters, scorer, and pipeline
//! together behind a small CLI.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use veille_core::{brands_path_from_env, load_app_config, load_brands, Language, ToneFilter};
use veille_news::{MediastackClient, NewsSource, NewsdataClient};
use veille_pipeline::Monitor;
use veille_sentiment::{Classifier, LexiconClassifier, RemoteClassifier, SentimentScorer};

mod table;

#[derive(Debug, Parser)]
#[command(name = "veille")]
#[command(about = "Competitor brand news monitoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Query all providers for a brand and print the scored article table.
    Watch {
        /// Brand to monitor; must exist in the catalog.
        #[arg(long)]
        brand: String,

        /// Language filter; `all` queries without one.
        #[arg(long, value_enum, default_value = "all")]
        language: LanguageArg,

        /// Maximum articles requested per provider.
        #[arg(long, default_value_t = 10)]
        max_per_source: usize,

        /// Keep only articles with this tone.
        #[arg(long, value_enum, default_value = "all")]
        tone: ToneArg,

        /// Override the brand catalog path from the environment.
        #[arg(long)]
        brands_file: Option<PathBuf>,
    },
    /// List the watched brand catalog.
    Brands {
        #[arg(long)]
        brands_file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LanguageArg {
    All,
    Fr,
    En,
    Es,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::All => Language::All,
            LanguageArg::Fr => Language::Fr,
            LanguageArg::En => Language::En,
            LanguageArg::Es => Language::Es,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ToneArg {
    All,
    Positive,
    Neutral,
    Negative,
}

impl From<ToneArg> for ToneFilter {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::All => ToneFilter::All,
            ToneArg::Positive => ToneFilter::Positive,
            ToneArg::Neutral => ToneFilter::Neutral,
            ToneArg::Negative => ToneFilter::Negative,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Watch {
            brand,
            language,
            max_per_source,
            tone,
            brands_file,
        } => watch(brand, language.into(), max_per_source, tone.into(), brands_file).await,
        Commands::Brands { brands_file } => list_brands(brands_file),
    }
}

async fn watch(
    brand: String,
    language: Language,
    max_per_source: usize,
    filter: ToneFilter,
    brands_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_app_config().context("failed to load configuration")?;
    let brands_path = brands_file.unwrap_or_else(|| config.brands_path.clone());
    let catalog = load_brands(&brands_path).context("failed to load brand catalog")?;

    let Some(brand_entry) = catalog.find(&brand) else {
        anyhow::bail!(
            "unknown brand '{brand}'; watched brands are: {}",
            catalog.names().join(", ")
        );
    };

    let sources: Vec<Box<dyn NewsSource>> = vec![
        Box::new(NewsdataClient::new(
            &config.newsdata_api_key,
            config.request_timeout_secs,
            &config.user_agent,
        )?),
        Box::new(MediastackClient::new(
            &config.mediastack_api_key,
            config.request_timeout_secs,
            &config.user_agent,
        )?),
    ];

    let classifier: Box<dyn Classifier> = match &config.sentiment_url {
        Some(url) => {
            tracing::debug!(endpoint = %url, "using remote classifier");
            Box::new(RemoteClassifier::new(url))
        }
        None => {
            tracing::debug!("no sentiment endpoint configured, using lexicon classifier");
            Box::new(LexiconClassifier::new())
        }
    };
    let scorer = Arc::new(SentimentScorer::new(classifier));

    let monitor = Monitor::new(sources, scorer);
    let records = monitor
        .run(&brand_entry.name, language, max_per_source, filter)
        .await;

    if records.is_empty() {
        println!("no articles found.");
    } else {
        print!("{}", table::render(&records));
    }

    Ok(())
}

fn list_brands(brands_file: Option<PathBuf>) -> anyhow::Result<()> {
    // Listing the catalog needs no API keys, so skip the full config load.
    let path = brands_file.unwrap_or_else(brands_path_from_env);
    let catalog = load_brands(&path).context("failed to load brand catalog")?;

    for brand in &catalog.brands {
        match &brand.notes {
            Some(notes) => println!("{}  ({notes})", brand.name),
            None => println!("{}", brand.name),
        }
    }

    Ok(())
}
