//! Concurrent download of the five résumé documents.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::documents::{RawDocuments, DOCUMENT_FILES};
use super::ResumeError;

/// Downloads résumé documents from `{base_url}{file}`.
#[derive(Clone)]
pub struct ResumeFetcher {
    client: Client,
    base_url: String,
}

impl ResumeFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetches every document concurrently and waits for all of them.
    ///
    /// All-or-nothing: if any request fails, the first failure to complete is
    /// returned and every body already received is dropped.
    pub async fn fetch_documents(&self) -> Result<RawDocuments, ResumeError> {
        let mut tasks = JoinSet::new();
        for file in DOCUMENT_FILES {
            let client = self.client.clone();
            let url = format!("{}{}", self.base_url, file);
            tasks.spawn(async move {
                let body = fetch_document(&client, &url, file).await?;
                Ok::<_, ResumeError>((file, body))
            });
        }

        let mut documents = RawDocuments::default();
        let mut first_error: Option<ResumeError> = None;

        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(ResumeError::from).and_then(|result| result) {
                Ok((file, body)) => documents.insert(file, body),
                Err(e) if first_error.is_none() => first_error = Some(e),
                Err(e) => warn!("Additional résumé fetch failure: {e}"),
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        info!("Fetched {} résumé documents from {}", DOCUMENT_FILES.len(), self.base_url);
        Ok(documents)
    }
}

async fn fetch_document(client: &Client, url: &str, file: &'static str) -> Result<Bytes, ResumeError> {
    debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ResumeError::Http { file, source })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ResumeError::Status {
            file,
            status: status.as_u16(),
        });
    }

    response
        .bytes()
        .await
        .map_err(|source| ResumeError::Http { file, source })
}
