use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

use skimmer::{CollectionSession, SessionSummary};
use skimmer_core::cache::{HandleCache, HandleResolver, NullResolver, StaticResolver};
use skimmer_core::config::Config;
use skimmer_core::writer::PostWriter;
use skimmer_firehose::replay::ReplaySource;

#[derive(Parser)]
#[command(name = "skimmer", about = "Skim posts off the Bluesky firehose into newline-delimited JSON")]
struct Cli {
    /// How many seconds to collect for (overrides config, default 30).
    #[arg(long)]
    duration: Option<u64>,

    /// Output file to append posts to (overrides config).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Replay decoded events from a capture file instead of reading them
    /// from stdin.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// JSON file mapping author DIDs to handles, for offline resolution.
    /// Without it, authors that need resolving fall back to their DID.
    #[arg(long)]
    handles: Option<PathBuf>,

    /// Write debug logs to /tmp/skimmer-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/skimmer-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("skimmer debug log started — tail -f /tmp/skimmer-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let config = Config::load()?;
    let duration = Duration::from_secs(cli.duration.unwrap_or(config.collector.duration_secs));
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.collector.output_path));

    let resolver: Box<dyn HandleResolver> = match &cli.handles {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read handle map {}", path.display()))?;
            let handles: HashMap<String, String> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse handle map {}", path.display()))?;
            Box::new(StaticResolver::new(handles))
        }
        None => Box::new(NullResolver),
    };
    let cache = HandleCache::new(resolver);
    let writer = PostWriter::open(&output).await?;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received, stopping collection");
                cancel.cancel();
            }
        });
    }

    let summary: SessionSummary = match &cli.replay {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open capture file {}", path.display()))?;
            let source = ReplaySource::new(BufReader::new(file));
            CollectionSession::new(source, cache, writer, duration, cancel)
                .run()
                .await?
        }
        None => {
            let source = ReplaySource::new(BufReader::new(tokio::io::stdin()));
            CollectionSession::new(source, cache, writer, duration, cancel)
                .run()
                .await?
        }
    };

    println!(
        "Collected {} posts in {:.2}s ({:.1} posts/sec) -> {}",
        summary.posts_collected,
        summary.elapsed.as_secs_f64(),
        summary.rate(),
        output.display()
    );
    Ok(())
}
