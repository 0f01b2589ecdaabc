//! Database models for OctoFit
//!
//! Row structs map to tables; `From` impls turn them into the shared
//! records the API serves.

use octofit_shared::{Activity, FieldValue, RecordId, User, Workout};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: RecordId::Number(row.id),
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TeamRow {
    pub id: i64,
    pub name: String,
}

/// One team membership, joined with the member's name
#[derive(Debug, Clone, FromRow)]
pub struct TeamMemberRow {
    pub team_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub duration_minutes: i64,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            id: RecordId::Number(row.id),
            name: row.name,
            duration: FieldValue::from(row.duration_minutes),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct WorkoutRow {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<WorkoutRow> for Workout {
    fn from(row: WorkoutRow) -> Self {
        Workout {
            id: RecordId::Number(row.id),
            name: row.name,
            description: row.description,
        }
    }
}
