//! Station entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    pub name: String,

    pub latitude: Decimal,
    pub longitude: Decimal,

    /// Maximum power in kW
    pub power_kw: Decimal,

    #[sea_orm(nullable)]
    pub instructions: Option<String>,

    pub pedestal: bool,

    /// Status: Active, Inactive, Maintenance, OutOfService
    pub status: String,

    #[sea_orm(nullable)]
    pub place_id: Option<i64>,

    pub created_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub last_maintenance: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
