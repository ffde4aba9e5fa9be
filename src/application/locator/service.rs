//! Station locator service

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::dto::StationView;
use crate::domain::{
    DomainError, DomainResult, GeoPoint, Reservation, ReservationLister, Station, StationLister,
};

/// Finds stations by distance and/or occupancy.
///
/// Stateless: every call fetches fresh data from the two ports and keeps
/// nothing between calls, so one instance can be shared across tasks.
#[derive(Clone)]
pub struct StationLocator {
    stations: Arc<dyn StationLister>,
    reservations: Arc<dyn ReservationLister>,
}

impl StationLocator {
    pub fn new(stations: Arc<dyn StationLister>, reservations: Arc<dyn ReservationLister>) -> Self {
        Self {
            stations,
            reservations,
        }
    }

    /// Stations whose distance to `center` is at most `radius_km`, in the
    /// order the station port returns them.
    pub async fn find_nearby(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> DomainResult<Vec<StationView>> {
        center.validate()?;

        let stations = self.stations.list_all_stations().await?;
        let total = stations.len();

        let mut nearby = Vec::new();
        for station in &stations {
            if is_within(station, &center, radius_km)? {
                nearby.push(StationView::from(station));
            }
        }

        debug!(%center, radius_km, total, matched = nearby.len(), "Located nearby stations");
        Ok(nearby)
    }

    /// Stations with no accepted reservation strictly containing `at`.
    pub async fn find_free(&self, at: Option<DateTime<Utc>>) -> DomainResult<Vec<StationView>> {
        let at = require_instant(at)?;

        let stations = self.stations.list_all_stations().await?;
        let reservations = self.reservations.list_all_reservations().await?;
        let occupied = occupied_station_ids(&reservations, at);
        let total = stations.len();

        let free: Vec<StationView> = stations
            .iter()
            .filter(|s| !occupied.contains(&s.id))
            .map(StationView::from)
            .collect();

        debug!(%at, total, occupied = occupied.len(), matched = free.len(), "Located free stations");
        Ok(free)
    }

    /// Stations that are both within `radius_km` of `center` and free at
    /// `at`. Same result as intersecting [`find_nearby`](Self::find_nearby)
    /// and [`find_free`](Self::find_free) by id, computed in one pass.
    pub async fn find_free_nearby(
        &self,
        center: GeoPoint,
        radius_km: f64,
        at: Option<DateTime<Utc>>,
    ) -> DomainResult<Vec<StationView>> {
        let at = require_instant(at)?;
        center.validate()?;

        let stations = self.stations.list_all_stations().await?;
        let reservations = self.reservations.list_all_reservations().await?;
        let occupied = occupied_station_ids(&reservations, at);
        let total = stations.len();

        let mut matched = Vec::new();
        for station in &stations {
            if is_within(station, &center, radius_km)? && !occupied.contains(&station.id) {
                matched.push(StationView::from(station));
            }
        }

        debug!(
            %center,
            radius_km,
            %at,
            total,
            matched = matched.len(),
            "Located free nearby stations"
        );
        Ok(matched)
    }
}

/// Reject an absent instant with `InvalidArgument`.
pub fn require_instant(at: Option<DateTime<Utc>>) -> DomainResult<DateTime<Utc>> {
    at.ok_or_else(|| DomainError::invalid_argument("Time must not be null"))
}

fn is_within(station: &Station, center: &GeoPoint, radius_km: f64) -> DomainResult<bool> {
    Ok(center.distance_km(&station.location)? <= radius_km)
}

fn occupied_station_ids(reservations: &[Reservation], at: DateTime<Utc>) -> HashSet<i64> {
    reservations
        .iter()
        .filter(|r| r.occupies_at(at))
        .map(|r| r.station_id)
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────
