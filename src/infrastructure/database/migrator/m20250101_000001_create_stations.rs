//! Create stations table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stations::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stations::Name).string().not_null())
                    .col(
                        ColumnDef::new(Stations::Latitude)
                            .decimal_len(10, 7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stations::Longitude)
                            .decimal_len(10, 7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stations::PowerKw)
                            .decimal_len(8, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Stations::Instructions).text())
                    .col(
                        ColumnDef::new(Stations::Pedestal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Stations::Status)
                            .string()
                            .not_null()
                            .default("Active"),
                    )
                    .col(ColumnDef::new(Stations::PlaceId).big_integer())
                    .col(
                        ColumnDef::new(Stations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Stations::LastMaintenance).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Stations {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    PowerKw,
    Instructions,
    Pedestal,
    Status,
    PlaceId,
    CreatedAt,
    LastMaintenance,
}
