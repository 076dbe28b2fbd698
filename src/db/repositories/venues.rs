use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, ColumnTrait, DatabaseConnection,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{genres, name_contains};
use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};
use crate::forms::VenueForm;

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<venue::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
    }

    pub async fn genres(&self, id: i32) -> Result<Vec<String>> {
        genres::venue_genre_names(&self.db, id).await
    }

    /// Every venue with its shows, ordered by state, city, then name.
    pub async fn all_with_shows(&self) -> Result<Vec<(venue::Model, Vec<show::Model>)>> {
        let venues = venue::Entity::find()
            .order_by_asc(venue::Column::State)
            .order_by_asc(venue::Column::City)
            .order_by_asc(venue::Column::Name)
            .all(&self.db)
            .await?;

        let shows = venues.load_many(show::Entity, &self.db).await?;
        Ok(venues.into_iter().zip(shows).collect())
    }

    pub async fn search_with_shows(
        &self,
        term: &str,
    ) -> Result<Vec<(venue::Model, Vec<show::Model>)>> {
        let venues = venue::Entity::find()
            .filter(name_contains((venue::Entity, venue::Column::Name), term))
            .order_by_asc(venue::Column::Name)
            .all(&self.db)
            .await?;

        let shows = venues.load_many(show::Entity, &self.db).await?;
        Ok(venues.into_iter().zip(shows).collect())
    }

    pub async fn shows_with_artists(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(show::Model, Option<artist::Model>)>> {
        Ok(show::Entity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .order_by_asc(show::Column::StartTime)
            .find_also_related(artist::Entity)
            .all(&self.db)
            .await?)
    }

    /// Inserts the venue and its genre links in one transaction.
    pub async fn create(&self, form: &VenueForm) -> Result<venue::Model> {
        let required = form.required()?;
        let now: DateTimeWithTimeZone = Utc::now().into();

        let txn = self.db.begin().await?;

        let venue = venue::ActiveModel {
            name: Set(required.name),
            city: Set(required.city),
            state: Set(required.state),
            address: Set(form.address.clone().flatten()),
            phone: Set(form.phone.clone().flatten()),
            website: Set(form.website.clone().flatten()),
            image_link: Set(form.image_link.clone().flatten()),
            facebook_link: Set(form.facebook_link.clone().flatten()),
            seeking_talent: Set(form.seeking_talent.unwrap_or(false)),
            seeking_description: Set(form.seeking_description.clone().flatten()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(names) = &form.genres {
            genres::set_venue_genres(&txn, venue.id, names).await?;
        }

        txn.commit().await?;
        Ok(venue)
    }

    /// Overwrites the submitted fields only; everything else keeps its value.
    pub async fn update(&self, id: i32, form: &VenueForm) -> Result<venue::Model> {
        form.validate_edit()?;

        let txn = self.db.begin().await?;

        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

        let mut active: venue::ActiveModel = existing.into();

        if let Some(name) = &form.name {
            active.name = Set(name.clone());
        }
        if let Some(city) = &form.city {
            active.city = Set(city.clone());
        }
        if let Some(state) = &form.state {
            active.state = Set(state.clone());
        }
        if let Some(address) = &form.address {
            active.address = Set(address.clone());
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
        if let Some(seeking) = form.seeking_talent {
            active.seeking_talent = Set(seeking);
        }
        if let Some(description) = &form.seeking_description {
            active.seeking_description = Set(description.clone());
        }

        active.updated_at = Set(Utc::now().into());
        let venue = active.update(&txn).await?;

        if let Some(names) = &form.genres {
            genres::set_venue_genres(&txn, venue.id, names).await?;
        }

        txn.commit().await?;
        Ok(venue)
    }

    /// Deletes the venue; its shows and genre links go with it.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        let result = venue::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Venue {} not found", id)));
        }

        txn.commit().await?;
        Ok(())
    }
}
