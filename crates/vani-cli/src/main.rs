//! Command-line front end: fetch comments for a video or post, run the
//! analysis pipeline, and print the row table, overall sentiment, and
//! optionally a CSV report.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vani_analysis::{rows_to_csv, run_analysis};
use vani_core::config::AppConfig;
use vani_core::{AggregateResult, AnalysisReport};
use vani_sources::{extract_tweet_id, extract_video_id, TwitterClient, YouTubeClient};
use vani_translate::{GoogleTranslator, DEFAULT_TIMEOUT_SECS};

const FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "vani")]
#[command(about = "Sentiment analysis of multilingual social-media comments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze the comments on a YouTube video.
    Youtube {
        /// Video URL (youtube.com/watch?v=…).
        url: String,
        /// Write the row table to this CSV file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Analyze the replies to a post on X.
    Twitter {
        /// Post URL (the status ID is taken from the last path segment).
        url: String,
        /// Write the row table to this CSV file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Youtube { url, out } => {
            let video_id = extract_video_id(&url).context("invalid YouTube URL")?;
            let api_key = config
                .youtube_api_key
                .as_deref()
                .context("YOUTUBE_API_KEY is not set")?;
            let client = YouTubeClient::new(api_key, FETCH_TIMEOUT_SECS)?;

            println!("Fetching comments...");
            let comments = match client.fetch_comments(&video_id).await {
                Ok(comments) => comments,
                Err(e) => {
                    tracing::error!(error = %e, video_id, "comment fetch failed");
                    Vec::new()
                }
            };
            analyze_and_report(&config, &comments, out.as_deref()).await?;
        }
        Commands::Twitter { url, out } => {
            let tweet_id = extract_tweet_id(&url).context("invalid post URL")?;
            let bearer_token = config
                .twitter_bearer_token
                .as_deref()
                .context("TWITTER_BEARER_TOKEN is not set")?;
            let client = TwitterClient::new(bearer_token, FETCH_TIMEOUT_SECS)?;

            println!("Fetching replies...");
            let comments = match client.fetch_replies(&tweet_id).await {
                Ok(replies) => replies,
                Err(e) => {
                    tracing::error!(error = %e, tweet_id, "reply fetch failed");
                    Vec::new()
                }
            };
            analyze_and_report(&config, &comments, out.as_deref()).await?;
        }
    }

    Ok(())
}

async fn analyze_and_report(
    config: &AppConfig,
    comments: &[String],
    out: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    if comments.is_empty() {
        println!("No comments found to analyze!");
        return Ok(());
    }
    println!("Fetched {} comments. Analyzing...", comments.len());

    let translator = GoogleTranslator::new(DEFAULT_TIMEOUT_SECS)?;
    let report = run_analysis(&translator, config.script_policy, comments, |fraction| {
        eprint!("\rAnalyzing... {:>3.0}%", fraction * 100.0);
        std::io::stderr().flush().ok();
    })
    .await;
    eprintln!();

    print_report(&report);

    if let Some(path) = out {
        std::fs::write(path, rows_to_csv(&report.rows))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let AggregateResult::Computed(summary) = report.aggregate else {
        println!("No valid data to analyze.");
        return;
    };

    println!();
    println!("{:<10} {}", "sentiment", "comment (translated)");
    println!("{:<10} {}", "---------", "--------------------");
    for row in &report.rows {
        println!("{:<10} {}", row.sentiment.as_str(), row.translated);
    }

    println!();
    println!(
        "Counts: positive={} negative={} neutral={}",
        summary.counts.positive, summary.counts.negative, summary.counts.neutral
    );
    println!(
        "Overall Sentiment: {} ({:.2}%)",
        title_case(summary.dominant.as_str()),
        summary.percentage
    );
}

fn title_case(label: &str) -> String {
    let mut out = label.to_owned();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}
