//! Filter & pagination engine
//!
//! Applies the kind filter, search term and cursor-bounded slicing over a
//! catalog snapshot. Deterministic: identical records and parameters always
//! produce identical output.

pub mod cursor;

pub use cursor::CursorError;

use serde::Serialize;

use crate::catalog::{KindFilter, ResourceRecord};

/// Validated parameters for a resource listing query.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub kind: KindFilter,
    pub search: Option<String>,
    pub cursor: Option<String>,
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub resources: Vec<ResourceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Filter, search and paginate a snapshot.
///
/// Order of operations: kind filter, then search, then slicing. The next
/// cursor is present iff the slice end is inside the filtered sequence; a
/// start offset beyond the end yields an empty page without error.
pub fn run_query(
    records: &[ResourceRecord],
    params: &QueryParams,
    page_size: usize,
) -> Result<PageResult, CursorError> {
    let mut filtered: Vec<&ResourceRecord> = records
        .iter()
        .filter(|record| params.kind.matches(record.kind))
        .collect();

    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        filtered.retain(|record| matches_search(record, &needle));
    }

    let start = match params.cursor.as_deref() {
        Some(token) => cursor::decode_or_fail(token)?,
        None => 0,
    };

    let end = start.saturating_add(page_size);
    let resources: Vec<ResourceRecord> = if start >= filtered.len() {
        Vec::new()
    } else {
        filtered[start..end.min(filtered.len())]
            .iter()
            .map(|record| (*record).clone())
            .collect()
    };

    let next_cursor = if end < filtered.len() {
        Some(cursor::encode(end))
    } else {
        None
    };

    Ok(PageResult {
        resources,
        next_cursor,
    })
}

/// Case-insensitive substring match against id, name and summary.
/// A missing summary never matches.
fn matches_search(record: &ResourceRecord, needle: &str) -> bool {
    record.id.to_lowercase().contains(needle)
        || record.name.to_lowercase().contains(needle)
        || record
            .summary
            .as_deref()
            .is_some_and(|summary| summary.to_lowercase().contains(needle))
}
