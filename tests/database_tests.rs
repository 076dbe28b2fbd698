//! Database integration tests
//!
//! Checks the schema the migrations build:
//! - Foreign keys on shows are enforced
//! - Deleting a venue or artist cascades to shows and genre links
//! - Genre names are unique

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use showbook::db::entities::{artist_genre, genre, show, venue, venue_genre};
use showbook::error::AppError;
use showbook::test_utils::*;

async fn create_genre(db: &sea_orm::DatabaseConnection, name: &str) -> genre::Model {
    genre::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[tokio::test]
async fn test_create_venue() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "The Musical Hop").await;

    assert!(venue.id > 0);
    assert_eq!(venue.name, "The Musical Hop");
    assert!(!venue.seeking_talent);
    assert!(venue.created_at.timestamp() > 0);
}

#[tokio::test]
async fn test_show_requires_existing_artist() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop").await;

    let result = show::ActiveModel {
        artist_id: Set(99999),
        venue_id: Set(venue.id),
        start_time: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(&db)
    .await;

    let err = result.expect_err("insert should violate the foreign key");
    assert!(matches!(AppError::from(err), AppError::Constraint(_)));
}

#[tokio::test]
async fn test_deleting_venue_cascades() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    create_test_show(&db, artist.id, venue.id, days_from_now(1)).await;
    let jazz = create_genre(&db, "Jazz").await;
    venue_genre::ActiveModel {
        venue_id: Set(venue.id),
        genre_id: Set(jazz.id),
        position: Set(0),
    }
    .insert(&db)
    .await
    .unwrap();

    venue::Entity::delete_by_id(venue.id).exec(&db).await.unwrap();

    assert_eq!(show::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(venue_genre::Entity::find().count(&db).await.unwrap(), 0);
    // Genres themselves are shared and survive
    assert_eq!(genre::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_deleting_artist_cascades() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    create_test_show(&db, artist.id, venue.id, days_from_now(1)).await;
    let rock = create_genre(&db, "Rock n Roll").await;
    artist_genre::ActiveModel {
        artist_id: Set(artist.id),
        genre_id: Set(rock.id),
        position: Set(0),
    }
    .insert(&db)
    .await
    .unwrap();

    showbook::db::entities::artist::Entity::delete_by_id(artist.id)
        .exec(&db)
        .await
        .unwrap();

    let remaining = show::Entity::find()
        .filter(show::Column::VenueId.eq(venue.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    assert_eq!(artist_genre::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_genre_names_are_unique() {
    let db = setup_test_db().await;
    create_genre(&db, "Jazz").await;

    let result = genre::ActiveModel {
        name: Set("Jazz".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await;

    let err = result.expect_err("duplicate genre should be rejected");
    assert!(matches!(AppError::from(err), AppError::Constraint(_)));
}
