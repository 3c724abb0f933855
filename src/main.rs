//! CLI entry point for the scour tool.

use anyhow::{Context, Result};
use clap::Parser;
use scour::{
    AlbumDownloader, HttpClient, ImgurAlbumDownloader, RedditFeed, ResolveConfig, run_batch,
};
use scour::feed::FeedReader;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!(
        subreddit = %args.subreddit,
        filter = %args.filter,
        limit = args.limit,
        "scouring subreddit"
    );

    // Fetch the listing up front; a failure here is fatal before any
    // downloads begin.
    let feed = RedditFeed::new();
    let posts = feed
        .fetch(&args.subreddit, args.filter, args.limit)
        .await
        .with_context(|| format!("failed to fetch listing for r/{}", args.subreddit))?;

    if posts.is_empty() {
        info!("no submissions found");
        println!("0 of 0 files downloaded.");
        return Ok(());
    }
    info!(posts = posts.len(), "listing fetched");

    // One directory per subreddit, created before any transfer starts.
    let dest_dir = args.output_dir.join(&args.subreddit);
    std::fs::create_dir_all(&dest_dir)
        .with_context(|| format!("failed to create destination {}", dest_dir.display()))?;

    let client = HttpClient::new();
    let album_downloader = ImgurAlbumDownloader::new(client.clone());
    let album: Option<&dyn AlbumDownloader> = if args.no_albums {
        debug!("album downloads disabled");
        None
    } else {
        Some(&album_downloader)
    };

    let config = ResolveConfig {
        dest_dir,
        overwrite: args.overwrite,
        allow_nsfw: !args.no_nsfw,
        albums_available: album.is_some(),
    };

    let report = run_batch(&posts, &config, &client, album).await;

    println!("\n{}", report.render());

    Ok(())
}
