//! Database repository implementations
//!
//! Read access to the served collections, in insertion (id) order.

use std::collections::HashMap;

use octofit_shared::{Activity, RecordId, Team, User, Workout};
use sqlx::SqlitePool;

use super::models::*;

pub struct ResourceRepository;

impl ResourceRepository {
    /// List all activities
    pub async fn list_activities(pool: &SqlitePool) -> Result<Vec<Activity>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT id, name, duration_minutes FROM activities ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }

    /// List all teams with their members in join order
    pub async fn list_teams(pool: &SqlitePool) -> Result<Vec<Team>, sqlx::Error> {
        let teams = sqlx::query_as::<_, TeamRow>("SELECT id, name FROM teams ORDER BY id")
            .fetch_all(pool)
            .await?;

        let member_rows = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            SELECT tm.team_id, u.name
            FROM team_members tm
            JOIN users u ON u.id = tm.user_id
            ORDER BY tm.team_id, tm.position
            "#,
        )
        .fetch_all(pool)
        .await?;

        let mut members: HashMap<i64, Vec<String>> = HashMap::new();
        for row in member_rows {
            members.entry(row.team_id).or_default().push(row.name);
        }

        Ok(teams
            .into_iter()
            .map(|team| Team {
                members: members.remove(&team.id).unwrap_or_default(),
                id: RecordId::Number(team.id),
                name: team.name,
            })
            .collect())
    }

    /// List all users
    pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// List all workouts
    pub async fn list_workouts(pool: &SqlitePool) -> Result<Vec<Workout>, sqlx::Error> {
        let rows = sqlx::query_as::<_, WorkoutRow>(
            "SELECT id, name, description FROM workouts ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Workout::from).collect())
    }
}
