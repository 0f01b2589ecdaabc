//! Resource records served by the OctoFit API
//!
//! Each record type mirrors the JSON shape of one `/api/<resource>`
//! collection. Field values are carried verbatim; nothing here trims,
//! reformats or normalizes what the backend sent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record
///
/// Backends emit either integer or string ids. The id is only used as the
/// render identity of a row and is never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// A scalar field rendered exactly as received
///
/// Numbers keep their `serde_json` representation, so `45` prints as `45` and
/// `1e21` as `1e21`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

// ============================================================================
// Resource kinds
// ============================================================================

/// The four tracked collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Activities,
    Teams,
    Users,
    Workouts,
}

impl ResourceKind {
    /// All kinds, in the order the UI lays them out
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Activities,
        ResourceKind::Teams,
        ResourceKind::Users,
        ResourceKind::Workouts,
    ];

    /// Collection name as it appears in URLs
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "activities",
            ResourceKind::Teams => "teams",
            ResourceKind::Users => "users",
            ResourceKind::Workouts => "workouts",
        }
    }

    /// API path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "/api/activities",
            ResourceKind::Teams => "/api/teams",
            ResourceKind::Users => "/api/users",
            ResourceKind::Workouts => "/api/workouts",
        }
    }

    /// Heading shown above the collection
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "Activities",
            ResourceKind::Teams => "Teams",
            ResourceKind::Users => "Users",
            ResourceKind::Workouts => "Workouts",
        }
    }

    /// Table column headers, in cell order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Activities => &["Activity Name", "Duration"],
            ResourceKind::Teams => &["Team Name", "Members"],
            ResourceKind::Users => &["User Name"],
            ResourceKind::Workouts => &["Workout Name", "Description"],
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A record type that lives in one of the tracked collections
///
/// `cells` must return exactly one value per entry of `KIND.columns()`.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + 'static
{
    const KIND: ResourceKind;

    /// Render identity of the record
    fn id(&self) -> &RecordId;

    /// Display text of each column
    fn cells(&self) -> Vec<String>;
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub name: String,
    pub duration: FieldValue,
}

impl Resource for Activity {
    const KIND: ResourceKind = ResourceKind::Activities;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.duration.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: RecordId,
    pub name: String,
    pub members: Vec<String>,
}

impl Team {
    /// Members flattened for a single table cell
    pub fn members_label(&self) -> String {
        self.members.join(", ")
    }
}

impl Resource for Team {
    const KIND: ResourceKind = ResourceKind::Teams;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.members_label()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::Users;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl Resource for Workout {
    const KIND: ResourceKind = ResourceKind::Workouts;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}
