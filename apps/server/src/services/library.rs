//! The loaded vocabulary, shared by every request.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use vocab_core::{Library, SkippedRecord};

use crate::error::{ApiError, Result};
use crate::services::source::VocabSource;

/// Outcome of the most recent load.
#[derive(Debug, Clone)]
pub enum LibraryStatus {
    Loading,
    Loaded {
        library: Arc<Library>,
        skipped: Vec<SkippedRecord>,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        message: String,
        failed_at: DateTime<Utc>,
    },
}

pub struct LibraryService {
    source: VocabSource,
    manifest_path: String,
    status: RwLock<LibraryStatus>,
    reload_lock: Mutex<()>,
}

impl LibraryService {
    pub fn new(source: VocabSource, manifest_path: impl Into<String>) -> Self {
        Self {
            source,
            manifest_path: manifest_path.into(),
            status: RwLock::new(LibraryStatus::Loading),
            reload_lock: Mutex::new(()),
        }
    }

    /// Load everything again and replace the current status.
    ///
    /// A failed reload replaces a previously loaded library; there is never a
    /// partial library. Reloads run one at a time, so the stored status is
    /// always the one from the load that finished last.
    pub async fn reload(&self) -> LibraryStatus {
        let _guard = self.reload_lock.lock().await;
        tracing::info!(manifest = %self.manifest_path, "Loading vocabulary");

        let status = match self.source.load_library(&self.manifest_path).await {
            Ok(report) => {
                for record in &report.skipped {
                    tracing::warn!(
                        set = %record.set_id,
                        index = record.index,
                        word = %record.word,
                        reason = record.reason,
                        "Skipped vocabulary record"
                    );
                }
                tracing::info!(
                    sets = report.library.sets().len(),
                    words = report.library.word_count(),
                    skipped = report.skipped.len(),
                    "Vocabulary loaded"
                );
                LibraryStatus::Loaded {
                    library: Arc::new(report.library),
                    skipped: report.skipped,
                    loaded_at: Utc::now(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Vocabulary load failed");
                LibraryStatus::Failed {
                    message: e.to_string(),
                    failed_at: Utc::now(),
                }
            }
        };

        *self.status.write().await = status.clone();
        status
    }

    pub async fn status(&self) -> LibraryStatus {
        self.status.read().await.clone()
    }

    /// The loaded library, or 503 when it is missing.
    pub async fn current(&self) -> Result<Arc<Library>> {
        match &*self.status.read().await {
            LibraryStatus::Loaded { library, .. } => Ok(library.clone()),
            LibraryStatus::Loading => Err(ApiError::LibraryUnavailable(
                "still loading".to_string(),
            )),
            LibraryStatus::Failed { message, .. } => {
                Err(ApiError::LibraryUnavailable(message.clone()))
            }
        }
    }
}
