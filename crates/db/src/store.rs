//! File-backed film collection.
//!
//! The whole collection lives in one JSON array. Every call reads or writes
//! the full document; nothing is cached between calls and nothing is locked,
//! so two overlapping read-modify-write cycles resolve as last writer wins.

use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::film::Film;

/// Distinguishes temporary files of overlapping saves within one process.
static SAVE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Failure reading or writing the backing document.
///
/// Never leaves this crate through [`FilmStore::load`] or [`FilmStore::save`];
/// those log it and carry on.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed film document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle on the JSON document holding the film collection.
///
/// Cheap to clone; holds only the path.
#[derive(Debug, Clone)]
pub struct FilmStore {
    path: PathBuf,
}

impl FilmStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection, falling back to an empty one on any failure.
    pub async fn load(&self) -> Vec<Film> {
        match self.try_load().await {
            Ok(films) => films,
            Err(StoreError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "Film store missing, using empty collection",
                );
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to read film store, using empty collection",
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the document with `films`. Failures are logged, not returned.
    pub async fn save(&self, films: &[Film]) {
        match self.try_save(films).await {
            Ok(()) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = films.len(),
                    "Film store saved",
                );
            }
            Err(err) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to write film store",
                );
            }
        }
    }

    /// Whether the document exists and parses.
    pub async fn is_readable(&self) -> bool {
        self.try_load().await.is_ok()
    }

    /// Strict read: any I/O or parse failure is returned.
    pub async fn try_load(&self) -> Result<Vec<Film>, StoreError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Strict write.
    ///
    /// The document is written to a sibling temporary file and renamed into
    /// place, so readers see either the old or the new collection.
    pub async fn try_save(&self, films: &[Film]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let rendered = serde_json::to_vec_pretty(films)?;
        let tmp = self.temp_path();

        if let Err(err) = tokio::fs::write(&tmp, rendered).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err.into());
        }
        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err.into());
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or(OsStr::new("films.json")));
        name.push(format!(
            ".{}.{}.tmp",
            std::process::id(),
            SAVE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        self.path.with_file_name(name)
    }
}
