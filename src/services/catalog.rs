//! Page data for venues, artists and shows
//!
//! Every view model here is `Serialize` so the HTML pages and the `/api`
//! routes render the same data.

use chrono::{DateTime, Utc};
use sea_orm::{prelude::DateTimeWithTimeZone, DatabaseConnection};
use serde::Serialize;

use crate::{
    db::{
        entities::{artist, show, venue},
        repositories::{ArtistRepository, ShowRepository, VenueRepository},
    },
    error::Result,
    services::schedule::{partition_shows, split_shows},
};

/// One row of a listing or search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistListItem {
    pub id: i32,
    pub name: String,
}

/// A show as listed on a venue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

/// A show as listed on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// A flattened row of the show listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowRow {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

fn upcoming_count(shows: &[show::Model], now: DateTime<Utc>) -> usize {
    split_shows(shows.iter().map(|s| &s.start_time), now).upcoming
}

fn summarize<M>(
    rows: Vec<(M, Vec<show::Model>)>,
    now: DateTime<Utc>,
    id_name: fn(M) -> (i32, String),
) -> Vec<Summary> {
    rows.into_iter()
        .map(|(model, shows)| {
            let num_upcoming_shows = upcoming_count(&shows, now);
            let (id, name) = id_name(model);
            Summary {
                id,
                name,
                num_upcoming_shows,
            }
        })
        .collect()
}

/// Groups venues by (city, state); areas come out ordered by state then city.
pub async fn venue_areas(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<Vec<Area>> {
    let venues = VenueRepository::new(db.clone()).all_with_shows().await?;

    let mut areas: Vec<Area> = Vec::new();
    for (venue, shows) in venues {
        let summary = Summary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming_count(&shows, now),
        };

        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(summary);
                continue;
            }
            _ => {}
        }

        areas.push(Area {
            city: venue.city,
            state: venue.state,
            venues: vec![summary],
        });
    }

    Ok(areas)
}

pub async fn search_venues(
    db: &DatabaseConnection,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults> {
    let rows = VenueRepository::new(db.clone()).search_with_shows(term).await?;
    let data = summarize(rows, now, |v: venue::Model| (v.id, v.name));

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub async fn venue_detail(
    db: &DatabaseConnection,
    id: i32,
    now: DateTime<Utc>,
) -> Result<VenueDetail> {
    let repo = VenueRepository::new(db.clone());
    let venue = repo.get(id).await?;
    let genres = repo.genres(id).await?;

    let shows: Vec<VenueShow> = repo
        .shows_with_artists(id)
        .await?
        .into_iter()
        .filter_map(|(show, artist)| {
            artist.map(|a| VenueShow {
                artist_id: a.id,
                artist_name: a.name,
                artist_image_link: a.image_link,
                start_time: show.start_time,
            })
        })
        .collect();

    let (past_shows, upcoming_shows) = partition_shows(shows, now, |s| &s.start_time);

    Ok(VenueDetail {
        id: venue.id,
        name: venue.name,
        genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

pub async fn list_artists(db: &DatabaseConnection) -> Result<Vec<ArtistListItem>> {
    Ok(ArtistRepository::new(db.clone())
        .all()
        .await?
        .into_iter()
        .map(|a| ArtistListItem {
            id: a.id,
            name: a.name,
        })
        .collect())
}

pub async fn search_artists(
    db: &DatabaseConnection,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults> {
    let rows = ArtistRepository::new(db.clone()).search_with_shows(term).await?;
    let data = summarize(rows, now, |a: artist::Model| (a.id, a.name));

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub async fn artist_detail(
    db: &DatabaseConnection,
    id: i32,
    now: DateTime<Utc>,
) -> Result<ArtistDetail> {
    let repo = ArtistRepository::new(db.clone());
    let artist = repo.get(id).await?;
    let genres = repo.genres(id).await?;

    let shows: Vec<ArtistShow> = repo
        .shows_with_venues(id)
        .await?
        .into_iter()
        .filter_map(|(show, venue)| {
            venue.map(|v| ArtistShow {
                venue_id: v.id,
                venue_name: v.name,
                venue_image_link: v.image_link,
                start_time: show.start_time,
            })
        })
        .collect();

    let (past_shows, upcoming_shows) = partition_shows(shows, now, |s| &s.start_time);

    Ok(ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

pub async fn show_rows(db: &DatabaseConnection) -> Result<Vec<ShowRow>> {
    let shows = ShowRepository::new(db.clone()).all_with_parties().await?;

    Ok(shows
        .into_iter()
        .filter_map(|(show, venue, artist)| {
            let (venue, artist) = (venue?, artist?);
            Some(ShowRow {
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time,
            })
        })
        .collect())
}
