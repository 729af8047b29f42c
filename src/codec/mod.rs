//! Snapshot import/export: the whole content set as a single JSON
//! document. Import validates every present top-level key before any
//! collection is replaced, so a bad document changes nothing at all;
//! absent keys leave their collections untouched.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    domain::{Announcement, Event, TeamMember},
    error::{AppError, CodecError, Result},
    repository::ContentRepository,
};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocument<'a> {
    schema_version: u32,
    events: &'a [Event],
    team: &'a [TeamMember],
    announcement: &'a Announcement,
    exported_at: String,
}

/// Which collections an import replaced. Keys absent from the document
/// stay false and their collections stay as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub events: bool,
    pub team: bool,
    pub announcement: bool,
}

/// Pretty-printed JSON snapshot of the full content set. Round-trips
/// through `import_snapshot` to an equivalent repository; `exportedAt`
/// is metadata only.
pub fn export_snapshot(repo: &ContentRepository) -> Result<String> {
    let document = SnapshotDocument {
        schema_version: SCHEMA_VERSION,
        events: repo.events(),
        team: repo.team(),
        announcement: repo.announcement(),
        exported_at: Utc::now().to_rfc3339(),
    };

    serde_json::to_string_pretty(&document)
        .map_err(|e| AppError::Internal(format!("Failed to serialize snapshot: {e}")))
}

/// Parses and validates `text`, then replaces each collection present as
/// a top-level key. All-or-nothing across the document: if any present
/// key fails its structural check, nothing is applied. Unknown keys and
/// `exportedAt` are ignored; a missing `schemaVersion` is tolerated for
/// documents exported before versioning existed.
pub fn import_snapshot(
    repo: &mut ContentRepository,
    text: &str,
) -> std::result::Result<ImportReport, CodecError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| CodecError::Malformed(e.to_string()))?;

    let Value::Object(document) = document else {
        return Err(CodecError::InvalidShape(
            "top-level value must be an object".to_string(),
        ));
    };

    if let Some(version) = document.get("schemaVersion") {
        match version.as_u64() {
            Some(v) if v <= u64::from(SCHEMA_VERSION) => {}
            Some(v) => {
                return Err(CodecError::InvalidShape(format!(
                    "unsupported schemaVersion {v} (current is {SCHEMA_VERSION})"
                )))
            }
            None => {
                return Err(CodecError::InvalidShape(
                    "schemaVersion must be a number".to_string(),
                ))
            }
        }
    }

    // Validate every present key before applying any of them.
    let events = document
        .get("events")
        .map(|v| parse_events(v))
        .transpose()?;
    let team = document.get("team").map(|v| parse_team(v)).transpose()?;
    let announcement = document
        .get("announcement")
        .map(|v| parse_announcement(v))
        .transpose()?;

    let mut report = ImportReport::default();
    if let Some(events) = events {
        repo.replace_events(events);
        report.events = true;
    }
    if let Some(team) = team {
        repo.replace_team(team);
        report.team = true;
    }
    if let Some(announcement) = announcement {
        repo.replace_announcement(announcement);
        report.announcement = true;
    }
    Ok(report)
}

fn parse_events(value: &Value) -> std::result::Result<Vec<Event>, CodecError> {
    let events: Vec<Event> = serde_json::from_value(value.clone())
        .map_err(|e| CodecError::InvalidShape(format!("events: {e}")))?;

    let mut seen = HashSet::new();
    for event in &events {
        if event.title.trim().is_empty() {
            return Err(CodecError::InvalidShape(format!(
                "events: empty title (id {})",
                event.id
            )));
        }
        if event.description.trim().is_empty() {
            return Err(CodecError::InvalidShape(format!(
                "events: empty description (id {})",
                event.id
            )));
        }
        if NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").is_err() {
            return Err(CodecError::InvalidShape(format!(
                "events: date is not a calendar date: {:?} (id {})",
                event.date, event.id
            )));
        }
        if !seen.insert(event.id.as_str()) {
            return Err(CodecError::InvalidShape(format!(
                "events: duplicate id {}",
                event.id
            )));
        }
    }
    Ok(events)
}

fn parse_team(value: &Value) -> std::result::Result<Vec<TeamMember>, CodecError> {
    // Members without ids (older exports) get fresh ones from the
    // serde default.
    serde_json::from_value(value.clone())
        .map_err(|e| CodecError::InvalidShape(format!("team: {e}")))
}

fn parse_announcement(value: &Value) -> std::result::Result<Announcement, CodecError> {
    let announcement: Announcement = serde_json::from_value(value.clone())
        .map_err(|e| CodecError::InvalidShape(format!("announcement: {e}")))?;

    if announcement.message.trim().is_empty() {
        return Err(CodecError::InvalidShape(
            "announcement: empty message".to_string(),
        ));
    }
    Ok(announcement)
}
