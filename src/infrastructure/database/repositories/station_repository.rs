//! SeaORM implementation of StationLister

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainResult, GeoPoint, Station, StationLister, StationStatus};
use crate::infrastructure::database::entities::station;

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: station::Model) -> Station {
    Station {
        id: m.id,
        name: m.name,
        location: GeoPoint::new(m.latitude, m.longitude),
        power_kw: m.power_kw,
        instructions: m.instructions,
        pedestal: m.pedestal,
        status: StationStatus::from_str(&m.status),
        place_id: m.place_id,
        created_at: m.created_at,
        last_maintenance: m.last_maintenance,
    }
}

// ── StationLister impl ──────────────────────────────────────────

#[async_trait]
impl StationLister for SeaOrmStationRepository {
    async fn list_all_stations(&self) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find()
            .order_by_asc(station::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        debug!(count = models.len(), "Loaded stations");
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
