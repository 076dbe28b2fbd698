use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entities::{artist_genre, genre, venue_genre};
use crate::error::Result;

/// Looks up each genre by name, inserting the missing ones. The result
/// follows the order of `names`.
async fn ensure_genres<C: ConnectionTrait>(
    conn: &C,
    names: &[String],
) -> Result<Vec<genre::Model>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let existing = genre::Entity::find()
        .filter(genre::Column::Name.is_in(names.iter().cloned()))
        .all(conn)
        .await?;

    let mut ordered = Vec::with_capacity(names.len());
    for name in names {
        let model = match existing.iter().find(|g| &g.name == name) {
            Some(found) => found.clone(),
            None => {
                genre::ActiveModel {
                    name: Set(name.clone()),
                    ..Default::default()
                }
                .insert(conn)
                .await?
            }
        };
        ordered.push(model);
    }

    Ok(ordered)
}

/// Replaces a venue's genre links with `names`, in order.
pub(super) async fn set_venue_genres<C: ConnectionTrait>(
    conn: &C,
    venue_id: i32,
    names: &[String],
) -> Result<()> {
    venue_genre::Entity::delete_many()
        .filter(venue_genre::Column::VenueId.eq(venue_id))
        .exec(conn)
        .await?;

    let genres = ensure_genres(conn, names).await?;
    if genres.is_empty() {
        return Ok(());
    }

    let links = genres
        .iter()
        .enumerate()
        .map(|(position, genre)| venue_genre::ActiveModel {
            venue_id: Set(venue_id),
            genre_id: Set(genre.id),
            position: Set(position as i32),
        });

    venue_genre::Entity::insert_many(links)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

/// Replaces an artist's genre links with `names`, in order.
pub(super) async fn set_artist_genres<C: ConnectionTrait>(
    conn: &C,
    artist_id: i32,
    names: &[String],
) -> Result<()> {
    artist_genre::Entity::delete_many()
        .filter(artist_genre::Column::ArtistId.eq(artist_id))
        .exec(conn)
        .await?;

    let genres = ensure_genres(conn, names).await?;
    if genres.is_empty() {
        return Ok(());
    }

    let links = genres
        .iter()
        .enumerate()
        .map(|(position, genre)| artist_genre::ActiveModel {
            artist_id: Set(artist_id),
            genre_id: Set(genre.id),
            position: Set(position as i32),
        });

    artist_genre::Entity::insert_many(links)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

pub(super) async fn venue_genre_names<C: ConnectionTrait>(
    conn: &C,
    venue_id: i32,
) -> Result<Vec<String>> {
    let rows = venue_genre::Entity::find()
        .filter(venue_genre::Column::VenueId.eq(venue_id))
        .order_by_asc(venue_genre::Column::Position)
        .find_also_related(genre::Entity)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(_, genre)| genre.map(|g| g.name))
        .collect())
}

pub(super) async fn artist_genre_names<C: ConnectionTrait>(
    conn: &C,
    artist_id: i32,
) -> Result<Vec<String>> {
    let rows = artist_genre::Entity::find()
        .filter(artist_genre::Column::ArtistId.eq(artist_id))
        .order_by_asc(artist_genre::Column::Position)
        .find_also_related(genre::Entity)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(_, genre)| genre.map(|g| g.name))
        .collect())
}
