//! Immutable base collection.

use std::collections::HashMap;

use super::{Record, RecordKey};
use crate::error::{DexError, ErrorSeverity};

/// Errors raised while building a [`RecordStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("record at position {position} has no Number")]
    MissingKey { position: usize },

    #[error("duplicate record number {key} at position {position}")]
    DuplicateKey { key: RecordKey, position: usize },
}

impl DexError for StoreError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Data
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingKey { .. } => "missing_key",
            Self::DuplicateKey { .. } => "duplicate_key",
        }
    }
}

/// The base catalog, loaded once and never mutated.
///
/// Records keep their load order; lookups by key go through a side index.
/// Every derived collection handed out by the core is a fresh `Vec`, never a
/// view back into this store.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    index: HashMap<RecordKey, usize>,
}

impl RecordStore {
    /// Build a store, rejecting records without a key and duplicated keys.
    pub fn new(records: Vec<Record>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.number().trim().is_empty() {
                return Err(StoreError::MissingKey { position });
            }
            let key = record.key();
            if index.contains_key(&key) {
                return Err(StoreError::DuplicateKey { key, position });
            }
            index.insert(key, position);
        }
        Ok(Self { records, index })
    }

    /// Records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    pub fn contains(&self, key: &RecordKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}
