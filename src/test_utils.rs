//! Test utilities for Showbook
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data factories for venues, artists and shows

use chrono::{DateTime, Duration, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use crate::{
    config::{Config, LogFormat},
    db::entities::{artist, show, venue},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        log_format: LogFormat::Pretty,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

/// Insert a venue with the given name in San Francisco, CA
pub async fn create_test_venue(db: &DatabaseConnection, name: &str) -> venue::Model {
    create_test_venue_in(db, name, "San Francisco", "CA").await
}

pub async fn create_test_venue_in(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let now = Utc::now();
    venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set(Some("1805 Geary Blvd".to_string())),
        phone: Set(Some("415-555-0100".to_string())),
        image_link: Set(Some(format!(
            "https://images.example.com/venues/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        ))),
        seeking_talent: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test venue")
}

/// Insert an artist with the given name in San Francisco, CA
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let now = Utc::now();
    artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set(Some("326-123-5000".to_string())),
        seeking_venue: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test artist")
}

/// Insert a show starting at `start_time`
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: DateTime<Utc>,
) -> show::Model {
    show::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_time: Set(start_time.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test show")
}

/// A start time `days` days from now; negative values are in the past.
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        let venues = venue::Entity::find().all(&db).await.unwrap();
        assert!(venues.is_empty());
    }

    #[tokio::test]
    async fn test_create_test_show() {
        let db = setup_test_db().await;
        let venue = create_test_venue(&db, "The Fillmore").await;
        let artist = create_test_artist(&db, "Guns N Petals").await;

        let show = create_test_show(&db, artist.id, venue.id, days_from_now(3)).await;

        assert_eq!(show.artist_id, artist.id);
        assert_eq!(show.venue_id, venue.id);
    }
}
