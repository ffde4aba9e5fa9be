//! Demo data for development databases
//!
//! Inserts a handful of Paris and Lyon stations plus reservations around
//! the current time, only when the stations table is empty.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use super::entities::{reservation, station};

struct DemoStation {
    id: i64,
    name: &'static str,
    latitude: Decimal,
    longitude: Decimal,
    power_kw: Decimal,
    pedestal: bool,
}

fn demo_stations() -> Vec<DemoStation> {
    vec![
        DemoStation {
            id: 1,
            name: "Paris Hôtel de Ville",
            latitude: Decimal::new(488566, 4),
            longitude: Decimal::new(23522, 4),
            power_kw: Decimal::new(500, 1),
            pedestal: true,
        },
        DemoStation {
            id: 2,
            name: "Paris Louvre",
            latitude: Decimal::new(488606, 4),
            longitude: Decimal::new(23376, 4),
            power_kw: Decimal::new(220, 1),
            pedestal: false,
        },
        DemoStation {
            id: 3,
            name: "Paris Gare de Lyon",
            latitude: Decimal::new(488443, 4),
            longitude: Decimal::new(23730, 4),
            power_kw: Decimal::new(1500, 1),
            pedestal: true,
        },
        DemoStation {
            id: 4,
            name: "Lyon Bellecour",
            latitude: Decimal::new(457578, 4),
            longitude: Decimal::new(48320, 4),
            power_kw: Decimal::new(500, 1),
            pedestal: true,
        },
        DemoStation {
            id: 5,
            name: "Lyon Part-Dieu",
            latitude: Decimal::new(457606, 4),
            longitude: Decimal::new(48593, 4),
            power_kw: Decimal::new(74, 1),
            pedestal: false,
        },
    ]
}

/// Seed demo stations and reservations relative to `now`.
///
/// Returns `false` without writing anything when stations already exist.
pub async fn seed_demo_data(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<bool, DbErr> {
    let existing = station::Entity::find().count(db).await?;
    if existing > 0 {
        info!(existing, "Stations already present, skipping demo data");
        return Ok(false);
    }

    info!("Seeding demo stations and reservations...");

    let stations = demo_stations();
    for s in &stations {
        station::ActiveModel {
            id: Set(s.id),
            name: Set(s.name.to_string()),
            latitude: Set(s.latitude),
            longitude: Set(s.longitude),
            power_kw: Set(s.power_kw),
            instructions: Set(None),
            pedestal: Set(s.pedestal),
            status: Set("Active".to_string()),
            place_id: Set(None),
            created_at: Set(now),
            last_maintenance: Set(None),
        }
        .insert(db)
        .await?;
    }

    // (id, station, start offset, end offset, status)
    let reservations = [
        (1, 2, Duration::hours(-1), Duration::hours(1), "Accepted"),
        (2, 1, Duration::hours(-1), Duration::hours(1), "Pending"),
        (3, 4, Duration::days(-1), Duration::days(-1) + Duration::hours(2), "Completed"),
        (4, 5, Duration::days(1), Duration::days(1) + Duration::hours(2), "Accepted"),
    ];
    for (id, station_id, start, end, status) in reservations {
        reservation::ActiveModel {
            id: Set(id),
            station_id: Set(station_id),
            user_id: Set(None),
            starts_at: Set(now + start),
            ends_at: Set(now + end),
            status: Set(status.to_string()),
            total_amount: Set(None),
            validated_at: Set(None),
        }
        .insert(db)
        .await?;
    }

    info!(
        stations = stations.len(),
        reservations = reservations.len(),
        "Demo data seeded"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::application::StationLocator;
    use crate::domain::{GeoPoint, ReservationLister, StationLister};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{
        init_database, DatabaseConfig, SeaOrmReservationRepository, SeaOrmStationRepository,
    };

    async fn migrated_db() -> DatabaseConnection {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    #[tokio::test]
    async fn seeds_once() {
        let db = migrated_db().await;
        let now = Utc::now();

        assert!(seed_demo_data(&db, now).await.unwrap());
        assert!(!seed_demo_data(&db, now).await.unwrap());

        let stations = SeaOrmStationRepository::new(db.clone())
            .list_all_stations()
            .await
            .unwrap();
        let ids: Vec<i64> = stations.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(stations[0].name, "Paris Hôtel de Ville");

        let reservations = SeaOrmReservationRepository::new(db)
            .list_all_reservations()
            .await
            .unwrap();
        assert_eq!(reservations.len(), 4);
    }

    #[tokio::test]
    async fn locator_over_seeded_database() {
        let db = migrated_db().await;
        let now = Utc::now();
        seed_demo_data(&db, now).await.unwrap();

        let locator = StationLocator::new(
            Arc::new(SeaOrmStationRepository::new(db.clone())),
            Arc::new(SeaOrmReservationRepository::new(db)),
        );
        let center = GeoPoint::new(Decimal::new(488566, 4), Decimal::new(23522, 4));

        let nearby: Vec<i64> = locator
            .find_nearby(center, 10.0)
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(nearby, vec![1, 2, 3]);

        let free: Vec<i64> = locator
            .find_free(Some(now))
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(free, vec![1, 3, 4, 5]);

        let free_nearby: Vec<i64> = locator
            .find_free_nearby(center, 10.0, Some(now))
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(free_nearby, vec![1, 3]);
    }
}
