//! To-do item model
//!
//! A standalone value type with a JSON-mapping representation. Nothing in the
//! application stores or mutates these yet.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{Error, Result};

/// ISO-8601 without offset; fractional seconds are written only when non-zero
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// ============================================================================
// Enums
// ============================================================================

/// Urgency of a to-do item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Mid,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Mid => "MID",
            Priority::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HIGH" => Ok(Priority::High),
            "MID" => Ok(Priority::Mid),
            "LOW" => Ok(Priority::Low),
            _ => Err(Error::invalid_enum("priority", s)),
        }
    }
}

/// Completion state of a to-do item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PENDING" => Ok(Status::Pending),
            "COMPLETED" => Ok(Status::Completed),
            _ => Err(Error::invalid_enum("status", s)),
        }
    }
}

// ============================================================================
// TodoItem
// ============================================================================

/// A single to-do item owned by a user
///
/// `owner` is a username, but no store checks that the user exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub details: String,
    pub priority: Priority,
    pub status: Status,
    pub owner: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TodoItem {
    /// Create a pending item with a fresh UUID, stamped with the local time
    pub fn new(
        title: impl Into<String>,
        details: impl Into<String>,
        priority: Priority,
        owner: impl Into<String>,
    ) -> Self {
        let now = Local::now().naive_local();
        let now = now.with_nanosecond(0).unwrap_or(now);

        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            details: details.into(),
            priority,
            status: Status::Pending,
            owner: owner.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Serialize into a JSON-friendly mapping
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), Value::String(self.id.clone()));
        map.insert("title".into(), Value::String(self.title.clone()));
        map.insert("details".into(), Value::String(self.details.clone()));
        map.insert("priority".into(), Value::String(self.priority.to_string()));
        map.insert("status".into(), Value::String(self.status.to_string()));
        map.insert("owner".into(), Value::String(self.owner.clone()));
        let created_at = format_timestamp(&self.created_at);
        let updated_at = format_timestamp(&self.updated_at);
        map.insert("created_at".into(), Value::String(created_at));
        map.insert("updated_at".into(), Value::String(updated_at));
        map
    }

    /// Rebuild an item from its mapping representation
    ///
    /// `details` may be absent (or null) and defaults to the empty string.
    /// Every other key is required; unknown enum names and malformed
    /// timestamps are errors.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: required_string(map, "id")?,
            title: required_string(map, "title")?,
            details: optional_string(map, "details").unwrap_or_default(),
            priority: required_string(map, "priority")?.parse()?,
            status: required_string(map, "status")?.parse()?,
            owner: required_string(map, "owner")?,
            created_at: parse_timestamp("created_at", &required_string(map, "created_at")?)?,
            updated_at: parse_timestamp("updated_at", &required_string(map, "updated_at")?)?,
        })
    }
}

fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(field: &'static str, s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| Error::invalid_timestamp(field, s))
}

/// Strings are taken as-is; other scalars are stringified
fn optional_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn required_string(map: &Map<String, Value>, key: &'static str) -> Result<String> {
    optional_string(map, key).ok_or(Error::MissingField(key))
}
