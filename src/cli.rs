//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use scour::SortFilter;

/// Batch download images from a subreddit.
///
/// Scour fetches a listing of posts, classifies each attached URL, and
/// downloads the images it recognizes into a directory named after the
/// subreddit. Files that already exist are left alone unless overwrite is
/// requested.
#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(author, version, about)]
pub struct Args {
    /// Name of the subreddit to scour
    #[arg(short, long, default_value = "me_irl")]
    pub subreddit: String,

    /// Listing sort order: hot, top, new, controversial
    #[arg(short, long, default_value_t = SortFilter::Top)]
    pub filter: SortFilter,

    /// Limit of submissions to gather (1-100)
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: u32,

    /// Overwrite files and albums that already exist (use with caution)
    #[arg(short, long)]
    pub overwrite: bool,

    /// Skip submissions tagged NSFW (downloaded by default)
    #[arg(short = 'n', long)]
    pub no_nsfw: bool,

    /// Disable album downloads even though album support is built in
    #[arg(short = 'a', long)]
    pub no_albums: bool,

    /// Root directory under which the per-subreddit directory is created
    #[arg(short = 'd', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
