//! SeaORM implementation of ReservationLister

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainResult, Reservation, ReservationLister, ReservationStatus};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        station_id: m.station_id,
        user_id: m.user_id,
        starts_at: m.starts_at,
        ends_at: m.ends_at,
        status: ReservationStatus::from_str(&m.status),
        total_amount: m.total_amount,
        validated_at: m.validated_at,
    }
}

#[async_trait]
impl ReservationLister for SeaOrmReservationRepository {
    async fn list_all_reservations(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        debug!(count = models.len(), "Loaded reservations");
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
