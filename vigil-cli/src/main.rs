//! Vigil CLI
//!
//! Terminal front end for navigation-time URL risk scoring.

mod config;
mod console;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use vigil_analysis::RiskScorer;
use vigil_core::{relative_age, Settings};
use vigil_intel::{IntelConfig, ThreatLookup};
use vigil_runtime::{
    NavigationEvent, Pipeline, PipelineConfig, Service, ServiceConfig, TabId, DEFAULT_INTERSTITIAL,
};

use config::FileConfig;
use console::{ConsoleBadge, ConsoleRedirect, ConsoleWarning};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(author, version, about = "Vigil: navigation-time URL risk scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,

    /// Threat provider API key (or set VIGIL_API_KEY env var)
    #[arg(long, env = "VIGIL_API_KEY")]
    api_key: Option<String>,

    /// TOML config file with [settings] and [intel] sections
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score URLs and print their assessments
    Check {
        /// URLs to score
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print assessments as JSON
        #[arg(long)]
        json: bool,

        /// Maximum concurrent lookups
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Treat stdin lines as navigations and run the full pipeline
    Watch {
        /// Disable protection entirely
        #[arg(long)]
        disabled: bool,

        /// Do not redirect high risk navigations
        #[arg(long)]
        no_block: bool,

        /// Do not show medium risk warnings
        #[arg(long)]
        no_warnings: bool,

        /// Do not record activity
        #[arg(long)]
        no_log: bool,

        /// Activity records to print when input ends
        #[arg(long, default_value = "10")]
        tail: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut intel_config = file.intel.clone().into_config();
    if let Some(key) = cli.api_key {
        intel_config.api_key = Some(key);
    }

    match cli.command {
        Commands::Check {
            urls,
            json,
            concurrency,
        } => {
            run_check(intel_config, &urls, json, concurrency).await?;
        }
        Commands::Watch {
            disabled,
            no_block,
            no_warnings,
            no_log,
            tail,
        } => {
            let mut settings = file.settings;
            if disabled {
                settings.enabled = false;
            }
            if no_block {
                settings.block_malicious = false;
            }
            if no_warnings {
                settings.show_warnings = false;
            }
            if no_log {
                settings.log_activity = false;
            }

            run_watch(intel_config, settings, tail).await?;
        }
    }

    Ok(())
}

async fn run_check(
    intel_config: IntelConfig,
    urls: &[String],
    json: bool,
    concurrency: usize,
) -> Result<()> {
    if !intel_config.is_configured() && !json {
        println!("⚠️  No API key set, scoring on local heuristics only\n");
    }

    let intel = ThreatLookup::shared(intel_config)?;
    let scorer = RiskScorer::new(intel);
    let assessments = scorer.score_all(urls, concurrency).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessments)?);
        return Ok(());
    }

    for assessment in &assessments {
        println!(
            "{} {}  {:.1}/10 ({})",
            assessment.tier.glyph(),
            assessment.url,
            assessment.score,
            assessment.tier
        );
        for factor in &assessment.factors {
            println!("    +{}  {}", factor.weight, factor.description);
        }
    }

    Ok(())
}

async fn run_watch(intel_config: IntelConfig, settings: Settings, tail: usize) -> Result<()> {
    println!("🛡️  Vigil watch - one URL per line, Ctrl-D to stop\n");

    if !intel_config.is_configured() {
        println!("⚠️  No API key set, scoring on local heuristics only\n");
    }

    let intel = ThreatLookup::shared(intel_config)?;
    let pipeline = Arc::new(Pipeline::new(
        intel,
        PipelineConfig {
            badge: Arc::new(ConsoleBadge),
            warning: Arc::new(ConsoleWarning),
            redirect: Arc::new(ConsoleRedirect),
            interstitial: DEFAULT_INTERSTITIAL.to_string(),
        },
    ));

    let service = Service::new(
        pipeline.clone(),
        ServiceConfig {
            settings,
            ..ServiceConfig::default()
        },
    );
    let (tx, rx) = mpsc::channel(64);

    // Each stdin line becomes a navigation in a fresh tab
    let reader = tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        let mut next_tab = 1u32;

        while let Ok(Some(line)) = lines.next_line().await {
            let url = line.trim().to_string();
            if url.is_empty() {
                continue;
            }
            let event = NavigationEvent::Navigated {
                tab: TabId(next_tab),
                url,
            };
            if tx.send(event).await.is_err() {
                break;
            }
            next_tab += 1;
        }
    });

    service.run(rx).await?;
    reader.await?;

    let activity = pipeline.activity();
    if !activity.is_empty() {
        let now = chrono::Utc::now();
        println!("\n📋 Activity ({} recorded):", activity.len());
        for record in activity.iter().rev().take(tail) {
            let marker = if record.blocked { " [blocked]" } else { "" };
            println!(
                "   {} {}  {:.1}/10{}  ({})",
                record.tier.glyph(),
                record.url,
                record.score,
                marker,
                relative_age(record.timestamp, now)
            );
        }
    }

    Ok(())
}
