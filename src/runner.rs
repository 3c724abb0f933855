//! Sequential driver loop: resolve each post, execute its action, record
//! the outcome.
//!
//! Strictly single-pass and single-flight: one post is fully handled
//! (including any transfer) before the next begins. Per-post failures are
//! recorded in the [`RunReport`] and never abort the batch.

use tracing::{debug, info, warn};

use crate::download::{AlbumDownloader, HttpClient};
use crate::feed::Post;
use crate::report::RunReport;
use crate::resolver::{ResolveConfig, ResolvedAction, SkipReason, resolve};

/// Processes a fetched batch of posts and returns the accumulated report.
///
/// `album` is the optional album capability; when it is `None` the caller
/// is expected to have cleared `config.albums_available` so album posts
/// resolve to skips. The existence check handed to the resolver is the real
/// filesystem.
pub async fn run_batch(
    posts: &[Post],
    config: &ResolveConfig,
    client: &HttpClient,
    album: Option<&dyn AlbumDownloader>,
) -> RunReport {
    let mut report = RunReport::new();

    for (index, post) in posts.iter().enumerate() {
        if post.is_nsfw {
            info!(index, title = %post.title, url = %post.url, "processing post [NSFW]");
        } else {
            info!(index, title = %post.title, url = %post.url, "processing post");
        }
        debug!(permalink = %post.permalink, "post permalink");

        let action = resolve(post, config, |path| path.exists());
        match action {
            ResolvedAction::Skip(reason) => {
                info!(%reason, "skipping post");
                report.record_skip(format!("{}: {reason}", post.url));
            }
            ResolvedAction::FetchDirect {
                source_url,
                dest_path,
            } => {
                debug!("direct link");
                match client.download_to_path(&source_url, &dest_path).await {
                    Ok(_) => report.record_success(),
                    Err(error) => {
                        warn!(%error, "download failed");
                        report.record_failure(format!("{}: {error}", post.url));
                    }
                }
            }
            ResolvedAction::FetchRewritten {
                source_url,
                dest_path,
            } => {
                debug!(rewritten = %source_url, "indirect link");
                match client.download_to_path(&source_url, &dest_path).await {
                    Ok(_) => report.record_success(),
                    Err(error) => {
                        warn!(%error, "download failed");
                        report.record_failure(format!("{}: {error}", post.url));
                    }
                }
            }
            ResolvedAction::DelegateAlbum {
                album_url,
                dest_dir,
            } => {
                let Some(album) = album else {
                    // Resolver only emits this when a capability was
                    // declared available; treat a missing one as a skip.
                    report.record_skip(format!(
                        "{}: {}",
                        post.url,
                        SkipReason::AlbumUnavailable
                    ));
                    continue;
                };
                debug!(album = %album_url, "album link");
                match album.download_album(&album_url, &dest_dir).await {
                    Ok(images) => {
                        info!(images, "album downloaded");
                        report.record_success();
                    }
                    Err(error) => {
                        warn!(%error, "album download failed");
                        report.record_failure(format!("{}: {error}", post.url));
                    }
                }
            }
        }
    }

    report
}
