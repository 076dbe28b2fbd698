use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_venues_table::Venues;
use super::m20240101_000002_create_artists_table::Artists;

#[derive(DeriveMigrationName)]
pub struct Migration;

// SQLite accepts a single column change per ALTER TABLE, so each column gets
// its own statement.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Venues::Table)
                    .add_column(
                        ColumnDef::new(SeekingAdditions::SeekingTalent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Venues::Table)
                    .add_column(ColumnDef::new(SeekingAdditions::SeekingDescription).string_len(500))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Artists::Table)
                    .add_column(
                        ColumnDef::new(SeekingAdditions::SeekingVenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Artists::Table)
                    .add_column(ColumnDef::new(SeekingAdditions::SeekingDescription).string_len(500))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Artists::Table)
                    .drop_column(SeekingAdditions::SeekingDescription)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Artists::Table)
                    .drop_column(SeekingAdditions::SeekingVenue)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Venues::Table)
                    .drop_column(SeekingAdditions::SeekingDescription)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Venues::Table)
                    .drop_column(SeekingAdditions::SeekingTalent)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum SeekingAdditions {
    SeekingTalent,
    SeekingVenue,
    SeekingDescription,
}
