//! Résumé content pipeline.
//!
//! Flow: fetch the five JSON documents concurrently → decode into a
//! `ResumeBundle` → render the chat system prompt. When a snapshot directory
//! is configured, successful fetches are mirrored to disk and the snapshot is
//! used if the remote host is unreachable at startup.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::resume::ResumeBundle;

pub mod documents;
pub mod fetcher;
pub mod prompts;
pub mod render;
pub mod snapshot;

use fetcher::ResumeFetcher;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("failed to fetch {file}: {source}")]
    Http {
        file: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {file}: status {status}")]
    Status { file: &'static str, status: u16 },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document {0} is missing")]
    Missing(&'static str),

    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Loads the résumé bundle for startup.
///
/// Remote content wins. With `snapshot_dir` set, a good remote fetch is
/// written there and a failed one falls back to the last snapshot.
pub async fn load_resume(
    fetcher: &ResumeFetcher,
    snapshot_dir: Option<&Path>,
) -> Result<ResumeBundle, ResumeError> {
    let fetched = match fetcher.fetch_documents().await {
        Ok(documents) => documents.to_bundle().map(|bundle| (documents, bundle)),
        Err(e) => Err(e),
    };

    match (fetched, snapshot_dir) {
        (Ok((documents, bundle)), Some(dir)) => {
            if let Err(e) = snapshot::write_snapshot(dir, &documents).await {
                warn!("Could not refresh résumé snapshot: {e}");
            }
            Ok(bundle)
        }
        (Ok((_, bundle)), None) => Ok(bundle),
        (Err(e), Some(dir)) => {
            warn!(
                "Remote résumé fetch failed ({e}); loading snapshot from {}",
                dir.display()
            );
            let bundle = snapshot::read_snapshot(dir).await?.to_bundle()?;
            info!("Résumé loaded from snapshot");
            Ok(bundle)
        }
        (Err(e), None) => Err(e),
    }
}
