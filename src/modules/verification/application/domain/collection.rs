use std::collections::HashSet;

use super::entities::{RecordDraft, RecordPatch, VerificationRecord};

//
// ──────────────────────────────────────────────────────────
// Record Collection
// ──────────────────────────────────────────────────────────
//
// The whole collection is the unit of persistence: stores load it, mutate
// it in memory and write it back in one piece.
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<VerificationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("Snapshot must be a JSON array")]
    NotAnArray,

    #[error("Record at index {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Record at index {index} repeats id {id}")]
    DuplicateId { index: usize, id: i64 },

    #[error("Record at index {index} repeats unique id {unique_id}")]
    DuplicateUniqueId { index: usize, unique_id: String },

    #[error("Record at index {index} has id {id}, which leaves no room for new records")]
    IdOutOfRange { index: usize, id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No sequential id is left after {max_id}")]
pub struct IdSpaceExhausted {
    pub max_id: i64,
}

impl RecordCollection {
    pub fn new(records: Vec<VerificationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VerificationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<VerificationRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `1 + max(id)`, or 1 for an empty collection.
    pub fn next_id(&self) -> Result<i64, IdSpaceExhausted> {
        match self.records.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or(IdSpaceExhausted { max_id }),
        }
    }

    pub fn contains_unique_id(&self, unique_id: &str) -> bool {
        self.records.iter().any(|r| r.unique_id == unique_id)
    }

    pub fn find(&self, unique_id: &str) -> Option<&VerificationRecord> {
        self.records.iter().find(|r| r.unique_id == unique_id)
    }

    /// Appends a record built from `draft` with the next sequential id.
    /// Nothing is appended when no id is left.
    pub fn insert(
        &mut self,
        draft: RecordDraft,
        unique_id: String,
        created_at: String,
    ) -> Result<VerificationRecord, IdSpaceExhausted> {
        let record = VerificationRecord {
            id: self.next_id()?,
            unique_id,
            username: draft.username,
            phone: draft.phone,
            user_id: draft.user_id,
            social_networks: draft.social_networks,
            status: draft.status,
            category: draft.category,
            created_at,
        };

        self.records.push(record.clone());
        Ok(record)
    }

    pub fn update(&mut self, unique_id: &str, patch: RecordPatch) -> Option<VerificationRecord> {
        let record = self.records.iter_mut().find(|r| r.unique_id == unique_id)?;
        record.apply_patch(patch);
        Some(record.clone())
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, unique_id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.unique_id != unique_id);
        self.records.len() < before
    }

    /// Pretty-printed (2-space) JSON array of the whole collection.
    ///
    /// Keys always come out in field order (`id`, `unique_id`, `username`,
    /// `phone`, `user_id`, `social_networks`, `status`, `category`,
    /// `created_at`). An imported snapshot therefore round-trips byte for byte
    /// only when it already uses that order, and keys outside the record
    /// shape are dropped.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Parses and validates a backup snapshot.
    ///
    /// The top level must be an array, every element must decode as a full
    /// record, ids / unique ids must not repeat, and no id may be `i64::MAX`
    /// so the next add still gets a fresh id.
    pub fn from_snapshot(serialized: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(serialized)
            .map_err(|e| SnapshotError::MalformedJson(e.to_string()))?;

        let items = match value {
            serde_json::Value::Array(items) => items,
            _ => return Err(SnapshotError::NotAnArray),
        };

        let mut records = Vec::with_capacity(items.len());
        let mut seen_ids = HashSet::new();
        let mut seen_unique_ids = HashSet::new();

        for (index, item) in items.into_iter().enumerate() {
            let record: VerificationRecord =
                serde_json::from_value(item).map_err(|e| SnapshotError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })?;

            if record.id == i64::MAX {
                return Err(SnapshotError::IdOutOfRange {
                    index,
                    id: record.id,
                });
            }
            if !seen_ids.insert(record.id) {
                return Err(SnapshotError::DuplicateId {
                    index,
                    id: record.id,
                });
            }
            if !seen_unique_ids.insert(record.unique_id.clone()) {
                return Err(SnapshotError::DuplicateUniqueId {
                    index,
                    unique_id: record.unique_id,
                });
            }

            records.push(record);
        }

        Ok(Self { records })
    }
}
