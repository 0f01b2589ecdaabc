//! Demo data
//!
//! `populate` replaces the contents of every collection with a fixed demo
//! set, in one transaction. Running it twice leaves the same data and ids.

use sqlx::SqlitePool;
use tracing::{debug, info};

const USERS: [(&str, &str); 5] = [
    ("thundergod", "thundergod@mhigh.edu"),
    ("metalgeek", "metalgeek@mhigh.edu"),
    ("zerocool", "zerocool@mhigh.edu"),
    ("crashoverride", "crashoverride@hmhigh.edu"),
    ("sleeptoken", "sleeptoken@mhigh.edu"),
];

const TEAM_NAME: &str = "Blue Team";

/// (user index, activity name, duration in minutes)
const ACTIVITIES: [(usize, &str, i64); 5] = [
    (0, "Cycling", 60),
    (1, "Crossfit", 120),
    (2, "Running", 90),
    (3, "Strength", 30),
    (4, "Swimming", 75),
];

const WORKOUTS: [(&str, &str); 5] = [
    ("Cycling Training", "Training for a road cycling event"),
    ("Crossfit", "Training for a crossfit competition"),
    ("Running Training", "Training for a marathon"),
    ("Strength Training", "Training for strength"),
    ("Swimming Training", "Training for a swimming competition"),
];

/// Tables cleared by `populate`, children first
const TABLES: [&str; 5] = ["team_members", "activities", "teams", "workouts", "users"];

/// Row counts written by `populate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub teams: usize,
    pub activities: usize,
    pub workouts: usize,
}

/// Replace all collections with the demo data set
pub async fn populate(pool: &SqlitePool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;

    debug!("Clearing existing collections...");
    for table in TABLES {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('users', 'teams', 'activities', 'workouts')")
        .execute(&mut *tx)
        .await?;

    debug!("Creating users...");
    let mut user_ids = Vec::with_capacity(USERS.len());
    for (name, email) in USERS {
        let id: i64 = sqlx::query_scalar("INSERT INTO users (name, email) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(email)
            .fetch_one(&mut *tx)
            .await?;
        user_ids.push(id);
    }

    debug!("Creating team {}...", TEAM_NAME);
    let team_id: i64 = sqlx::query_scalar("INSERT INTO teams (name) VALUES (?) RETURNING id")
        .bind(TEAM_NAME)
        .fetch_one(&mut *tx)
        .await?;
    for (position, user_id) in user_ids.iter().enumerate() {
        sqlx::query("INSERT INTO team_members (team_id, user_id, position) VALUES (?, ?, ?)")
            .bind(team_id)
            .bind(*user_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
    }

    debug!("Creating activities...");
    for (user_index, name, minutes) in ACTIVITIES {
        sqlx::query("INSERT INTO activities (name, duration_minutes, user_id) VALUES (?, ?, ?)")
            .bind(name)
            .bind(minutes)
            .bind(user_ids.get(user_index).copied())
            .execute(&mut *tx)
            .await?;
    }

    debug!("Creating workouts...");
    for (name, description) in WORKOUTS {
        sqlx::query("INSERT INTO workouts (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        users: USERS.len(),
        teams: 1,
        activities: ACTIVITIES.len(),
        workouts: WORKOUTS.len(),
    };
    info!("Populated database with demo data: {:?}", summary);
    Ok(summary)
}
