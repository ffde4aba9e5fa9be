//! Reservation entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    pub station_id: i64,

    #[sea_orm(nullable)]
    pub user_id: Option<i64>,

    pub starts_at: DateTimeUtc,
    pub ends_at: DateTimeUtc,

    /// Reservation status: Pending, Accepted, Refused, Cancelled, Completed
    pub status: String,

    #[sea_orm(nullable)]
    pub total_amount: Option<Decimal>,

    #[sea_orm(nullable)]
    pub validated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id"
    )]
    Station,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
