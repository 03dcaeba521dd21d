//! Complaint store with best-effort durable persistence.
//!
//! The in-memory collection is the source of truth while the process runs;
//! every mutation snapshots the whole collection to one storage key.

mod backend;

pub use backend::*;

use crate::errors::AppError;
use crate::models::{Complaint, ComplaintUpdate};

/// Fixed key the complaint collection is persisted under.
pub const STORAGE_KEY: &str = "complaints";

/// Single source of truth for the complaint collection.
///
/// All operations are synchronous and complete before returning. Unknown
/// identifiers are silently absorbed by `update` and `remove`; callers that
/// need to distinguish a no-op check [`ComplaintStore::get_by_id`] first.
/// Concurrent store instances sharing one backend are not coordinated, the
/// last writer wins.
pub struct ComplaintStore {
    complaints: Vec<Complaint>,
    backend: Box<dyn StorageBackend>,
}

impl ComplaintStore {
    /// Open a store over the given backend, rehydrating the persisted
    /// collection. A missing or unparseable value is treated as empty state,
    /// not an error.
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        let complaints = match backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!("Persisted complaints unparseable, starting empty: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("Could not read persisted complaints, starting empty: {}", err);
                Vec::new()
            }
        };

        tracing::debug!("Store opened with {} complaints", complaints.len());
        Self {
            complaints,
            backend,
        }
    }

    /// Insert a complaint at the front of the collection (most-recent-first).
    ///
    /// The caller's generated id is trusted; no uniqueness check is made.
    pub fn add(&mut self, complaint: Complaint) -> Result<(), AppError> {
        tracing::info!("Adding complaint {}", complaint.id);
        self.complaints.insert(0, complaint);
        self.persist()
    }

    /// Shallow-merge `changes` onto the record with matching id. Silently
    /// does nothing when the id is unknown.
    pub fn update(&mut self, id: &str, changes: ComplaintUpdate) -> Result<(), AppError> {
        if let Some(complaint) = self.complaints.iter_mut().find(|c| c.id == id) {
            complaint.apply(changes);
            tracing::info!("Updated complaint {}", id);
        } else {
            tracing::debug!("Update for unknown complaint {} ignored", id);
        }
        self.persist()
    }

    /// Remove the record with matching id. Silently does nothing when the id
    /// is unknown.
    pub fn remove(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.complaints.len();
        self.complaints.retain(|c| c.id != id);
        if self.complaints.len() < before {
            tracing::info!("Removed complaint {}", id);
        }
        self.persist()
    }

    /// Look up a complaint by exact, case-sensitive identifier match.
    pub fn get_by_id(&self, id: &str) -> Option<&Complaint> {
        self.complaints.iter().find(|c| c.id == id)
    }

    /// The full collection, most-recently-added first.
    pub fn list(&self) -> &[Complaint] {
        &self.complaints
    }

    /// Serialize the whole collection to the fixed storage key. Runs on every
    /// mutation; no batching, no debouncing.
    fn persist(&self) -> Result<(), AppError> {
        let raw = serde_json::to_string(&self.complaints)?;
        self.backend.set(STORAGE_KEY, &raw)
    }
}
