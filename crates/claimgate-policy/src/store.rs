//! In-memory policy set with atomic replacement.
//!
//! Policies are immutable once constructed, so the store never mutates a
//! tree in place: loading swaps in a complete new map behind an
//! [`ArcSwap`], leaving evaluations already running on the old set
//! undisturbed. Readers take no locks.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::policy::{Policy, ValidationError};

// =============================================================================
// Store Error
// =============================================================================

/// Errors that can occur while loading policies into the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A policy file or directory could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A policy document failed to decode.
    #[error("Failed to decode policy file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A decoded policy failed validation.
    #[error("Policy {id:?} in {path} failed validation: {source}")]
    Invalid {
        id: String,
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// Two files in one directory load carry the same policy id.
    #[error("Duplicate policy id {id:?} in {path}")]
    DuplicateId { id: String, path: PathBuf },
}

// =============================================================================
// Policy Store
// =============================================================================

/// An atomically swappable set of policies keyed by id.
#[derive(Default)]
pub struct PolicyStore {
    policies: ArcSwap<HashMap<String, Arc<Policy>>>,
}

impl PolicyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one policy document, replacing any policy with the same id.
    ///
    /// The document is decoded and validated before it becomes visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, decoded, or validated;
    /// the store is left unchanged.
    pub fn load_file(&self, path: &Path) -> Result<Arc<Policy>, StoreError> {
        let policy = Arc::new(read_policy(path)?);

        self.policies.rcu(|current| {
            let mut map = HashMap::clone(current);
            map.insert(policy.id.clone(), Arc::clone(&policy));
            map
        });

        tracing::debug!(policy_id = %policy.id, path = %path.display(), "policy loaded");
        Ok(policy)
    }

    /// Replace the whole policy set with the `.json` documents in a
    /// directory.
    ///
    /// Every document is decoded and validated before the swap; a failing
    /// document fails the load and leaves the previous set in place.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable, undecodable, invalid or
    /// duplicate-id documents.
    pub fn load_dir(&self, dir: &Path) -> Result<usize, StoreError> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut map = HashMap::new();
        for path in &paths {
            let policy = read_policy(path)?;
            if map.contains_key(&policy.id) {
                return Err(StoreError::DuplicateId {
                    id: policy.id,
                    path: path.clone(),
                });
            }
            map.insert(policy.id.clone(), Arc::new(policy));
        }

        let count = map.len();
        self.policies.store(Arc::new(map));
        tracing::debug!(count, dir = %dir.display(), "policy set replaced");
        Ok(count)
    }

    /// Replace the whole policy set with the given policies.
    ///
    /// When ids collide, the last policy wins.
    pub fn replace_all(&self, policies: impl IntoIterator<Item = Policy>) {
        let map: HashMap<String, Arc<Policy>> = policies
            .into_iter()
            .map(|p| (p.id.clone(), Arc::new(p)))
            .collect();
        self.policies.store(Arc::new(map));
    }

    /// Look up a policy by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<Policy>> {
        self.policies.load().get(id).cloned()
    }

    /// Ids of all stored policies, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.policies.load().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of stored policies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.load().len()
    }

    /// Returns `true` if the store holds no policies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.load().is_empty()
    }
}

fn read_policy(path: &Path) -> Result<Policy, StoreError> {
    let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let policy = Policy::from_json(&json).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    policy.validate().map_err(|source| StoreError::Invalid {
        id: policy.id.clone(),
        path: path.to_path_buf(),
        source,
    })?;

    Ok(policy)
}

// =============================================================================
// Tests
// =============================================================================
