use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set,
    TransactionTrait,
};

use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};
use crate::forms::ShowForm;

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All shows by start time, each with its venue and artist.
    pub async fn all_with_parties(
        &self,
    ) -> Result<Vec<(show::Model, Option<venue::Model>, Option<artist::Model>)>> {
        let shows = show::Entity::find()
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await?;

        let venues = shows.load_one(venue::Entity, &self.db).await?;
        let artists = shows.load_one(artist::Entity, &self.db).await?;

        Ok(shows
            .into_iter()
            .zip(venues)
            .zip(artists)
            .map(|((show, venue), artist)| (show, venue, artist))
            .collect())
    }

    /// Checks both parties exist before inserting; the foreign keys still
    /// guard against a concurrent delete.
    pub async fn create(&self, form: &ShowForm) -> Result<show::Model> {
        let txn = self.db.begin().await?;

        if artist::Entity::find_by_id(form.artist_id).one(&txn).await?.is_none() {
            return Err(AppError::Constraint(format!(
                "artist {} does not exist",
                form.artist_id
            )));
        }

        if venue::Entity::find_by_id(form.venue_id).one(&txn).await?.is_none() {
            return Err(AppError::Constraint(format!(
                "venue {} does not exist",
                form.venue_id
            )));
        }

        let show = show::ActiveModel {
            artist_id: Set(form.artist_id),
            venue_id: Set(form.venue_id),
            start_time: Set(form.start_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(show)
    }
}
