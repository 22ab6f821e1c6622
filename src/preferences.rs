//! Persistent preferences: the recent-edits list and the favorite filter.
//!
//! Stored as one JSON object in a single file:
//!
//! ```text
//! {
//!   "recent_edits": "[{\"imageUri\":\"...\",\"filterId\":1,...}]",
//!   "favorite_filter": 3
//! }
//! ```
//!
//! The recent-edits list is itself a JSON string value so the whole list is
//! one preference entry. A missing or corrupt list reads as empty.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::engine::FilterId;
use crate::error::PreferencesError;

/// Cap on the recent-edits list.
pub const MAX_RECENT_EDITS: usize = 10;

const RECENT_EDITS_KEY: &str = "recent_edits";
const FAVORITE_FILTER_KEY: &str = "favorite_filter";

/// A past save: which image, with which filter, when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEdit {
    pub image_uri: String,
    pub filter_id: usize,
    pub filter_name: String,
    /// Unix time in milliseconds.
    pub edited_at: i64,
}

impl RecentEdit {
    /// Record an edit made now.
    pub fn new(image_uri: impl Into<String>, filter: FilterId) -> Self {
        Self::at(image_uri, filter, Utc::now())
    }

    pub fn at(image_uri: impl Into<String>, filter: FilterId, when: DateTime<Utc>) -> Self {
        Self {
            image_uri: image_uri.into(),
            filter_id: filter.index(),
            filter_name: filter.display_name().to_string(),
            edited_at: when.timestamp_millis(),
        }
    }

    pub fn edited_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.edited_at).single()
    }

    /// The filter, if the stored index is still part of the palette.
    pub fn filter(&self) -> Option<FilterId> {
        FilterId::from_index(self.filter_id).ok()
    }
}

/// Put `edit` at the front, drop older entries for the same image, cap the length.
pub fn push_recent(edits: &mut Vec<RecentEdit>, edit: RecentEdit, cap: usize) {
    edits.retain(|e| e.image_uri != edit.image_uri);
    edits.insert(0, edit);
    edits.truncate(cap);
}

/// File-backed key-value preferences.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
    max_recent_edits: usize,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, MAX_RECENT_EDITS)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, max_recent_edits: usize) -> Self {
        Self {
            path: path.into(),
            max_recent_edits,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save_recent_edit(&self, edit: RecentEdit) -> Result<(), PreferencesError> {
        let mut map = self.read_map()?;
        let mut edits = decode_recent(&map);
        log::debug!("recording recent edit for {}", edit.image_uri);
        push_recent(&mut edits, edit, self.max_recent_edits);

        map.insert(
            RECENT_EDITS_KEY.to_string(),
            Value::String(serde_json::to_string(&edits)?),
        );
        self.write_map(&map)
    }

    /// Recent edits, most recent first.
    pub fn recent_edits(&self) -> Result<Vec<RecentEdit>, PreferencesError> {
        Ok(decode_recent(&self.read_map()?))
    }

    pub fn clear_recent_edits(&self) -> Result<(), PreferencesError> {
        let mut map = self.read_map()?;
        if map.remove(RECENT_EDITS_KEY).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    pub fn save_favorite_filter(&self, index: usize) -> Result<(), PreferencesError> {
        let mut map = self.read_map()?;
        map.insert(FAVORITE_FILTER_KEY.to_string(), Value::from(index));
        self.write_map(&map)
    }

    pub fn favorite_filter(&self) -> Result<Option<usize>, PreferencesError> {
        let map = self.read_map()?;
        Ok(map
            .get(FAVORITE_FILTER_KEY)
            .and_then(Value::as_u64)
            .map(|v| v as usize))
    }

    fn read_map(&self) -> Result<Map<String, Value>, PreferencesError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                log::warn!(
                    "preferences file {} is not a JSON object, starting fresh",
                    self.path.display()
                );
                Ok(Map::new())
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn decode_recent(map: &Map<String, Value>) -> Vec<RecentEdit> {
    let Some(Value::String(json)) = map.get(RECENT_EDITS_KEY) else {
        return Vec::new();
    };

    serde_json::from_str(json).unwrap_or_else(|e| {
        log::warn!("discarding unreadable recent edits: {}", e);
        Vec::new()
    })
}
