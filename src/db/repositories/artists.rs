use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, ColumnTrait, DatabaseConnection,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{genres, name_contains};
use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};
use crate::forms::ArtistForm;

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<artist::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))
    }

    pub async fn genres(&self, id: i32) -> Result<Vec<String>> {
        genres::artist_genre_names(&self.db, id).await
    }

    pub async fn all(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn search_with_shows(
        &self,
        term: &str,
    ) -> Result<Vec<(artist::Model, Vec<show::Model>)>> {
        let artists = artist::Entity::find()
            .filter(name_contains((artist::Entity, artist::Column::Name), term))
            .order_by_asc(artist::Column::Name)
            .all(&self.db)
            .await?;

        let shows = artists.load_many(show::Entity, &self.db).await?;
        Ok(artists.into_iter().zip(shows).collect())
    }

    pub async fn shows_with_venues(
        &self,
        artist_id: i32,
    ) -> Result<Vec<(show::Model, Option<venue::Model>)>> {
        Ok(show::Entity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .order_by_asc(show::Column::StartTime)
            .find_also_related(venue::Entity)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, form: &ArtistForm) -> Result<artist::Model> {
        let required = form.required()?;
        let now: DateTimeWithTimeZone = Utc::now().into();

        let txn = self.db.begin().await?;

        let artist = artist::ActiveModel {
            name: Set(required.name),
            city: Set(required.city),
            state: Set(required.state),
            phone: Set(form.phone.clone().flatten()),
            website: Set(form.website.clone().flatten()),
            image_link: Set(form.image_link.clone().flatten()),
            facebook_link: Set(form.facebook_link.clone().flatten()),
            seeking_venue: Set(form.seeking_venue.unwrap_or(false)),
            seeking_description: Set(form.seeking_description.clone().flatten()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(names) = &form.genres {
            genres::set_artist_genres(&txn, artist.id, names).await?;
        }

        txn.commit().await?;
        Ok(artist)
    }

    pub async fn update(&self, id: i32, form: &ArtistForm) -> Result<artist::Model> {
        form.validate_edit()?;

        let txn = self.db.begin().await?;

        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

        let mut active: artist::ActiveModel = existing.into();

        if let Some(name) = &form.name {
            active.name = Set(name.clone());
        }
        if let Some(city) = &form.city {
            active.city = Set(city.clone());
        }
        if let Some(state) = &form.state {
            active.state = Set(state.clone());
        }
        if let Some(phone) = &form.phone {
            active.phone = Set(phone.clone());
        }
        if let Some(website) = &form.website {
            active.website = Set(website.clone());
        }
        if let Some(image_link) = &form.image_link {
            active.image_link = Set(image_link.clone());
        }
        if let Some(facebook_link) = &form.facebook_link {
            active.facebook_link = Set(facebook_link.clone());
        }
        if let Some(seeking) = form.seeking_venue {
            active.seeking_venue = Set(seeking);
        }
        if let Some(description) = &form.seeking_description {
            active.seeking_description = Set(description.clone());
        }

        active.updated_at = Set(Utc::now().into());
        let artist = active.update(&txn).await?;

        if let Some(names) = &form.genres {
            genres::set_artist_genres(&txn, artist.id, names).await?;
        }

        txn.commit().await?;
        Ok(artist)
    }
}
