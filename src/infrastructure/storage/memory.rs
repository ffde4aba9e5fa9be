//! In-memory storage implementation

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainResult, Reservation, ReservationLister, Station, StationLister,
};

/// In-memory station and reservation store for development and testing.
///
/// Listings are returned ordered by id, matching the database adapters.
/// Read counters let callers check how often each collection was fetched.
pub struct InMemoryStorage {
    stations: DashMap<i64, Station>,
    reservations: DashMap<i64, Reservation>,
    station_reads: AtomicUsize,
    reservation_reads: AtomicUsize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            stations: DashMap::new(),
            reservations: DashMap::new(),
            station_reads: AtomicUsize::new(0),
            reservation_reads: AtomicUsize::new(0),
        }
    }

    /// Insert or replace a station
    pub fn add_station(&self, station: Station) {
        self.stations.insert(station.id, station);
    }

    /// Insert or replace a reservation
    pub fn add_reservation(&self, reservation: Reservation) {
        self.reservations.insert(reservation.id, reservation);
    }

    pub fn station_reads(&self) -> usize {
        self.station_reads.load(Ordering::SeqCst)
    }

    pub fn reservation_reads(&self) -> usize {
        self.reservation_reads.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StationLister for InMemoryStorage {
    async fn list_all_stations(&self) -> DomainResult<Vec<Station>> {
        self.station_reads.fetch_add(1, Ordering::SeqCst);
        let mut stations: Vec<Station> = self.stations.iter().map(|e| e.value().clone()).collect();
        stations.sort_by_key(|s| s.id);
        Ok(stations)
    }
}

#[async_trait]
impl ReservationLister for InMemoryStorage {
    async fn list_all_reservations(&self) -> DomainResult<Vec<Reservation>> {
        self.reservation_reads.fetch_add(1, Ordering::SeqCst);
        let mut reservations: Vec<Reservation> =
            self.reservations.iter().map(|e| e.value().clone()).collect();
        reservations.sort_by_key(|r| r.id);
        Ok(reservations)
    }
}
