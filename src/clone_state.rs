//! Clone-state annotation
//!
//! Marks each record with whether its derived clone path already exists as a
//! directory. Pure annotation: consumes the collection and returns a new one
//! with `is_cloned` set, never touching filesystem state. A stat error is
//! indistinguishable from absence; both mean "not cloned".

use std::path::Path;

use crate::repository::RepositoryRecord;

/// Set `is_cloned` on every record based on local directory existence.
pub fn annotate(records: Vec<RepositoryRecord>, root: &Path) -> Vec<RepositoryRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.is_cloned = record.clone_path(root).is_dir();
            record
        })
        .collect()
}
