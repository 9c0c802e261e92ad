//! Fetching the manifest and set files from a directory or over HTTP.

use std::path::{Path, PathBuf};

use reqwest::{Client, Url};
use thiserror::Error;
use tokio::task::JoinSet;
use vocab_core::{parse_manifest, parse_set, IdRegistry, LoadError, Library, SkippedRecord};

use crate::config::SourceLocation;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned {status}")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Parse(#[from] LoadError),

    #[error("load task failed: {0}")]
    Task(String),
}

/// Output of one complete load.
#[derive(Debug)]
pub struct LoadReport {
    pub library: Library,
    pub skipped: Vec<SkippedRecord>,
}

/// Reads vocabulary files relative to a site root.
#[derive(Debug, Clone)]
pub struct VocabSource {
    location: SourceLocation,
    client: Client,
}

impl VocabSource {
    pub fn new(location: SourceLocation) -> Self {
        Self {
            location,
            client: Client::new(),
        }
    }

    /// Load the manifest, then every set in parallel.
    ///
    /// Sets are assembled in manifest order. The first failure fails the whole
    /// load and aborts the fetches still running.
    pub async fn load_library(&self, manifest_path: &str) -> Result<LoadReport, SourceError> {
        let manifest = parse_manifest(&self.fetch(manifest_path).await?)?;
        tracing::debug!(sets = manifest.len(), "Manifest parsed");

        let mut tasks = JoinSet::new();
        for (index, info) in manifest.iter().cloned().enumerate() {
            let source = self.clone();
            tasks.spawn(async move {
                let content = source.fetch(&info.path).await;
                (index, content)
            });
        }

        let mut contents: Vec<Option<String>> = vec![None; manifest.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, content) = joined.map_err(|e| SourceError::Task(e.to_string()))?;
            contents[index] = Some(content?);
        }

        let mut ids = IdRegistry::new();
        let mut sets = Vec::with_capacity(manifest.len());
        let mut skipped = Vec::new();

        for (info, content) in manifest.iter().zip(contents) {
            let content = content
                .ok_or_else(|| SourceError::Task(format!("{} was not fetched", info.path)))?;
            let loaded = parse_set(info, &content, &mut ids)?;
            tracing::debug!(
                set = %info.id,
                words = loaded.set.words.len(),
                skipped = loaded.skipped.len(),
                "Set loaded"
            );
            skipped.extend(loaded.skipped);
            sets.push(loaded.set);
        }

        Ok(LoadReport {
            library: Library::new(sets),
            skipped,
        })
    }

    /// Read one file. A leading `/` is relative to the root, not the filesystem.
    pub async fn fetch(&self, path: &str) -> Result<String, SourceError> {
        match &self.location {
            SourceLocation::Directory(root) => read_file(&resolve_path(root, path)?).await,
            SourceLocation::Http(base) => {
                let url = base.join(path).map_err(|e| SourceError::InvalidPath {
                    path: path.to_string(),
                    reason: e.to_string(),
                })?;
                self.get_text(url).await
            }
        }
    }

    async fn get_text(&self, url: Url) -> Result<String, SourceError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SourceError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        resp.text().await.map_err(|e| SourceError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Join `path` onto `root`, refusing to climb out of it.
fn resolve_path(root: &Path, path: &str) -> Result<PathBuf, SourceError> {
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, std::path::Component::Normal(_) | std::path::Component::CurDir))
    {
        return Err(SourceError::InvalidPath {
            path: path.to_string(),
            reason: "must stay inside the vocabulary root".to_string(),
        });
    }
    Ok(root.join(relative))
}

async fn read_file(path: &Path) -> Result<String, SourceError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })
}
