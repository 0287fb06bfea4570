use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use super::domain::{AnalysisId, AnalysisRecord};

/// Storage abstraction for analyses awaiting follow-up requests.
pub trait AnalysisStore: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, StoreError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, StoreError>;
    /// Drop expired entries, returning how many were removed.
    fn purge_expired(&self) -> Result<usize, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("analysis already exists")]
    Conflict,
    #[error("analysis not found or expired")]
    NotFound,
    #[error("analysis store unavailable: {0}")]
    Unavailable(String),
}

struct Entry {
    record: AnalysisRecord,
    expires_at: DateTime<Utc>,
}

/// In-process map whose entries expire `ttl` after insertion.
pub struct TtlAnalysisStore {
    ttl: Duration,
    entries: Mutex<HashMap<AnalysisId, Entry>>,
}

impl TtlAnalysisStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    pub(crate) fn insert_at(
        &self,
        record: AnalysisRecord,
        now: DateTime<Utc>,
    ) -> Result<AnalysisRecord, StoreError> {
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            StoreError::Unavailable("analysis expiry out of range".to_string())
        })?;

        let mut entries = self.lock()?;
        if let Some(existing) = entries.get(&record.analysis_id) {
            if existing.expires_at > now {
                return Err(StoreError::Conflict);
            }
        }

        entries.insert(
            record.analysis_id.clone(),
            Entry {
                record: record.clone(),
                expires_at,
            },
        );
        Ok(record)
    }

    pub(crate) fn fetch_at(
        &self,
        id: &AnalysisId,
        now: DateTime<Utc>,
    ) -> Result<Option<AnalysisRecord>, StoreError> {
        let entries = self.lock()?;
        Ok(entries
            .get(id)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.record.clone()))
    }

    pub(crate) fn purge_at(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        Ok(before - entries.len())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<AnalysisId, Entry>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("analysis store mutex poisoned".to_string()))
    }
}

impl AnalysisStore for TtlAnalysisStore {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, StoreError> {
        self.insert_at(record, Utc::now())
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, StoreError> {
        self.fetch_at(id, Utc::now())
    }

    fn purge_expired(&self) -> Result<usize, StoreError> {
        self.purge_at(Utc::now())
    }
}
