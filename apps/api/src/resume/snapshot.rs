//! Verbatim on-disk copies of the résumé documents, used when the content
//! host cannot be reached.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{info, warn};

use super::documents::{RawDocuments, DOCUMENT_FILES};
use super::ResumeError;

/// Writes each document body unchanged to `dir/<file>`, creating `dir` if needed.
///
/// Bodies are staged as `<file>.tmp` and only renamed into place once all of
/// them are on disk, so a failed write leaves the previous snapshot intact.
pub async fn write_snapshot(dir: &Path, documents: &RawDocuments) -> Result<(), ResumeError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ResumeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::new();
    for (file, body) in documents.iter() {
        let target = dir.join(file);
        let temp = dir.join(format!("{file}.tmp"));
        if let Err(source) = tokio::fs::write(&temp, body).await {
            discard_staged(&staged).await;
            return Err(ResumeError::Io { path: temp, source });
        }
        staged.push((temp, target));
    }

    for (temp, target) in &staged {
        tokio::fs::rename(temp, target)
            .await
            .map_err(|source| ResumeError::Io {
                path: target.clone(),
                source,
            })?;
    }

    info!("Résumé snapshot written to {}", dir.display());
    Ok(())
}

async fn discard_staged(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        if let Err(e) = tokio::fs::remove_file(temp).await {
            warn!("Could not remove {}: {e}", temp.display());
        }
    }
}

/// Reads all five documents back from `dir`. Any unreadable file fails the read.
pub async fn read_snapshot(dir: &Path) -> Result<RawDocuments, ResumeError> {
    let mut documents = RawDocuments::default();
    for file in DOCUMENT_FILES {
        let path = dir.join(file);
        let body = tokio::fs::read(&path)
            .await
            .map_err(|source| ResumeError::Io { path, source })?;
        documents.insert(file, Bytes::from(body));
    }
    Ok(documents)
}
