//! Project-keyed CSV table storage and incremental refresh.

use std::path::{Path, PathBuf};

use loglens_records::{Timestamp, Timestamped, watermark};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{CacheError, CacheResult};

/// Extension of cached table files.
const TABLE_EXTENSION: &str = "csv";

/// Rows of one project's table together with the file they live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTable<R> {
    path: PathBuf,
    rows: Vec<R>,
}

impl<R> CachedTable<R> {
    /// Returns the file backing this table.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Consumes the table and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Timestamped> CachedTable<R> {
    /// Returns the maximum row timestamp, if any.
    #[must_use]
    pub fn watermark(&self) -> Option<Timestamp> {
        watermark(&self.rows)
    }
}

/// Stores one CSV table per project id in a directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the table file for a project id.
    ///
    /// Path separators in the id are replaced so that full project paths
    /// map to a single file.
    #[must_use]
    pub fn path_for(&self, project_id: &str) -> PathBuf {
        let file_stem = project_id.replace(['/', '\\'], "_");
        self.dir.join(format!("{file_stem}.{TABLE_EXTENSION}"))
    }

    /// Loads a project's table, or `None` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load<R: DeserializeOwned>(
        &self,
        project_id: &str,
    ) -> CacheResult<Option<CachedTable<R>>> {
        let path = self.path_for(project_id);
        if !path.exists() {
            return Ok(None);
        }

        let read_error = |source| CacheError::Read {
            path: path.clone(),
            source,
        };
        let mut reader = csv::Reader::from_path(&path).map_err(read_error)?;
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<R>, _>>()
            .map_err(read_error)?;

        debug!(path = %path.display(), rows = rows.len(), "loaded cached table");
        Ok(Some(CachedTable { path, rows }))
    }

    /// Writes a project's table in full, replacing any previous file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save<R: Serialize>(&self, project_id: &str, rows: &[R]) -> CacheResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|source| CacheError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(project_id);
        let write_error = |source| CacheError::Write {
            path: path.clone(),
            source,
        };
        let mut writer = csv::Writer::from_path(&path).map_err(write_error)?;
        for row in rows {
            writer.serialize(row).map_err(write_error)?;
        }
        writer
            .flush()
            .map_err(|e| write_error(csv::Error::from(e)))?;

        debug!(path = %path.display(), rows = rows.len(), "saved cached table");
        Ok(path)
    }

    /// Returns a project's table, refreshing it through `fetch`.
    ///
    /// With a cached table, `fetch` receives the table's watermark; only
    /// fetched rows strictly newer than the watermark are appended. Without
    /// one, `fetch` receives `None` and its rows form the new table. A
    /// non-empty result is written back in full.
    ///
    /// Concurrent refreshes of the same project are not coordinated; the
    /// last write wins.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or a cache error converted into `E`.
    pub fn merge<R, E, F>(&self, project_id: &str, fetch: F) -> Result<CachedTable<R>, E>
    where
        R: Serialize + DeserializeOwned + Timestamped,
        E: From<CacheError>,
        F: FnOnce(Option<Timestamp>) -> Result<Vec<R>, E>,
    {
        let path = self.path_for(project_id);

        let (mut rows, since) = match self.load::<R>(project_id)? {
            Some(table) => {
                let since = table.watermark();
                info!(path = %path.display(), rows = table.len(), ?since, "cache hit");
                (table.into_rows(), since)
            }
            None => {
                info!(path = %path.display(), "cache miss");
                (Vec::new(), None)
            }
        };

        let fetched = fetch(since)?;
        let before = rows.len();
        rows.extend(
            fetched
                .into_iter()
                .filter(|row| since.is_none_or(|mark| row.timestamp() > mark)),
        );
        debug!(project_id, appended = rows.len() - before, "merged fetched rows");

        if !rows.is_empty() {
            self.save(project_id, &rows)?;
        }

        Ok(CachedTable { path, rows })
    }
}
