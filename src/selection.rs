//! Display-line formatting and selection matching
//!
//! Each record is rendered to exactly one line: a one-character clone marker
//! (`✓` when cloned, a space otherwise), a space, then
//! `host/organization/name`. The line is the only text the user sees in the
//! fuzzy finder, and the selected line comes back verbatim — possibly with
//! surrounding whitespace or the marker stripped by the finder. Matching is
//! therefore tolerant: both sides are normalized (trim, strip one leading
//! marker, trim again) before exact comparison.

use crate::repository::RepositoryRecord;

/// Marker shown in front of repositories that already have a local clone.
pub const CLONED_MARKER: char = '✓';

/// Render one record to its display line.
pub fn format_line(record: &RepositoryRecord) -> String {
    let marker = if record.is_cloned { CLONED_MARKER } else { ' ' };
    format!(
        "{} {}/{}/{}",
        marker, record.host, record.organization, record.name
    )
}

/// Strip surrounding whitespace and an optional leading clone marker.
fn normalize(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix(CLONED_MARKER).unwrap_or(line);
    line.trim()
}

/// Resolve a selected line back to the originating record.
///
/// The first record whose normalized line equals the normalized selection
/// wins. `None` means the selection matched nothing; callers treat that as a
/// no-op.
pub fn match_selection<'a>(
    selected: &str,
    records: &'a [RepositoryRecord],
) -> Option<&'a RepositoryRecord> {
    let wanted = normalize(selected);
    records.iter().find(|record| {
        let line = format_line(record);
        normalize(&line) == wanted
    })
}
