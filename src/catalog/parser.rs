//! Manifest parser
//!
//! Turns the llms.txt manifest into typed resource records with a single
//! line scan. Section headings select the kind of the bullets that follow;
//! lines that do not parse are dropped, never reported as errors. The
//! `parse_with_diagnostics` variant records dropped bullet lines so callers
//! can surface manifest authoring problems.

use lazy_static::lazy_static;
use regex::Regex;

use super::{ResourceKind, ResourceRecord, ALL_KINDS};

lazy_static! {
    /// Bullet line: `- [label](url)` with an optional ` - summary` tail.
    static ref RESOURCE_LINE: Regex =
        Regex::new(r"^- \[([^\]]+)\]\(([^)]+)\)(?:\s*-\s*(.*))?$").unwrap();
}

/// A bullet line that was dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the manifest.
    pub line_number: usize,
    pub text: String,
}

/// Map a section heading (already trimmed and lowercased) to a kind.
///
/// Headings match the plural kind name, except custom docs which use the
/// literal heading "custom docs".
fn section_kind(heading: &str) -> Option<ResourceKind> {
    if heading == "custom docs" {
        return Some(ResourceKind::Doc);
    }
    ALL_KINDS
        .iter()
        .copied()
        .filter(|kind| *kind != ResourceKind::Doc)
        .find(|kind| kind.plural() == heading)
}

/// Parse manifest text into resource records, in document order.
pub fn parse(text: &str) -> Vec<ResourceRecord> {
    parse_with_diagnostics(text).0
}

/// Parse manifest text, also collecting bullet lines that were dropped.
///
/// A bullet line is dropped when it sits under no recognized heading, does
/// not match the `- [label](url)` shape, or (for versioned kinds) its label
/// has fewer than three " - " separated fields.
pub fn parse_with_diagnostics(text: &str) -> (Vec<ResourceRecord>, Vec<SkippedLine>) {
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut current_section: Option<ResourceKind> = None;

    for (index, line) in text.lines().enumerate() {
        if let Some(heading) = line.strip_prefix("## ") {
            current_section = section_kind(&heading.trim().to_lowercase());
            continue;
        }

        if !line.starts_with("- [") {
            continue;
        }

        let parsed = current_section.and_then(|kind| parse_resource_line(line, kind));
        match parsed {
            Some(record) => records.push(record),
            None => skipped.push(SkippedLine {
                line_number: index + 1,
                text: line.to_string(),
            }),
        }
    }

    (records, skipped)
}

/// Parse one bullet line under a recognized section.
///
/// Versioned labels are " - " joined fields: trailing field is the version,
/// second-to-last the id, everything before (rejoined) the name.
/// Unversioned labels are the id verbatim, with the trailing free text as
/// name when present.
fn parse_resource_line(line: &str, kind: ResourceKind) -> Option<ResourceRecord> {
    let captures = RESOURCE_LINE.captures(line)?;

    let label = captures.get(1)?.as_str();
    let url = captures.get(2)?.as_str().trim().to_string();
    let tail = captures
        .get(3)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    if kind.is_versioned() {
        let fields: Vec<&str> = label.split(" - ").collect();
        if fields.len() < 3 {
            return None;
        }
        let version = fields[fields.len() - 1].trim().to_string();
        let id = fields[fields.len() - 2].trim().to_string();
        let name = fields[..fields.len() - 2].join(" - ").trim().to_string();

        Some(ResourceRecord {
            kind,
            id,
            name,
            version: Some(version),
            summary: tail,
            url,
        })
    } else {
        let id = label.trim().to_string();
        let name = tail.unwrap_or_else(|| id.clone());

        Some(ResourceRecord {
            kind,
            id,
            name,
            version: None,
            summary: None,
            url,
        })
    }
}
