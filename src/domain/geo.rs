//! Geographic points and great-circle distance
//!
//! Coordinates are kept as `Decimal` degrees, the precision stations are
//! stored with, and converted to `f64` only for the Haversine computation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::{DomainError, DomainResult};

/// Earth radius used for every distance, in kilometres (the integer 6371).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const INVALID_COORDINATES: &str =
    "Coordinates must be within [-90, 90] latitude and [-180, 180] longitude";

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    #[schema(value_type = String, example = "48.8566")]
    pub latitude: Decimal,
    #[schema(value_type = String, example = "2.3522")]
    pub longitude: Decimal,
}

impl GeoPoint {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from possibly-missing coordinates.
    ///
    /// Only checks presence; ranges are checked by [`GeoPoint::validate`].
    pub fn from_parts(latitude: Option<Decimal>, longitude: Option<Decimal>) -> DomainResult<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(Self::new(latitude, longitude)),
            _ => Err(DomainError::invalid_argument("Coordinates must not be null")),
        }
    }

    /// Check latitude ∈ [-90, 90] and longitude ∈ [-180, 180].
    pub fn validate(&self) -> DomainResult<()> {
        let lat_ok = self.latitude >= Decimal::from(-90) && self.latitude <= Decimal::from(90);
        let lon_ok = self.longitude >= Decimal::from(-180) && self.longitude <= Decimal::from(180);

        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(DomainError::invalid_argument(INVALID_COORDINATES))
        }
    }

    /// Great-circle distance to `other`, in kilometres.
    ///
    /// Both points are validated; the error does not say which one failed.
    pub fn distance_km(&self, other: &GeoPoint) -> DomainResult<f64> {
        self.validate()?;
        other.validate()?;

        Ok(haversine_km(
            degrees(self.latitude)?,
            degrees(self.longitude)?,
            degrees(other.latitude)?,
            degrees(other.longitude)?,
        ))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Distance in kilometres between two points given as raw coordinates.
///
/// Fails with `InvalidArgument` when any coordinate is missing or out of
/// range.
pub fn distance_km(
    lat1: Option<Decimal>,
    lon1: Option<Decimal>,
    lat2: Option<Decimal>,
    lon2: Option<Decimal>,
) -> DomainResult<f64> {
    let from = GeoPoint::from_parts(lat1, lon1)?;
    let to = GeoPoint::from_parts(lat2, lon2)?;
    from.distance_km(&to)
}

fn degrees(value: Decimal) -> DomainResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| DomainError::invalid_argument(INVALID_COORDINATES))
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn d(s: &str) -> Option<Decimal> {
        Some(Decimal::from_str(s).unwrap())
    }

    fn assert_distance(lat1: &str, lon1: &str, lat2: &str, lon2: &str, expected: f64, tolerance: f64) {
        let distance = distance_km(d(lat1), d(lon1), d(lat2), d(lon2)).unwrap();
        assert!(
            (distance - expected).abs() <= tolerance,
            "distance ({lat1}, {lon1}) -> ({lat2}, {lon2}) = {distance}, expected {expected} ± {tolerance}"
        );
    }

    #[test]
    fn paris_to_itself_is_zero() {
        assert_distance("48.8566", "2.3522", "48.8566", "2.3522", 0.0, 0.001);
    }

    #[test]
    fn paris_to_lyon() {
        assert_distance("48.8566", "2.3522", "45.7578", "4.8320", 392.0, 1.0);
    }

    #[test]
    fn paris_to_new_york() {
        assert_distance("48.8566", "2.3522", "40.7128", "-74.0060", 5837.0, 1.0);
    }

    #[test]
    fn one_degree_at_the_equator() {
        assert_distance("0.0", "0.0", "0.0", "1.0", 111.2, 0.1);
        assert_distance("0.0", "0.0", "1.0", "0.0", 111.2, 0.1);
    }

    #[test]
    fn range_boundaries_are_accepted() {
        assert!(distance_km(d("90"), d("180"), d("-90"), d("-180")).is_ok());
    }

    #[test]
    fn out_of_range_first_point_is_rejected() {
        let cases = [
            ("91.0", "0.0"),
            ("-91.0", "0.0"),
            ("0.0", "181.0"),
            ("0.0", "-181.0"),
        ];
        for (lat, lon) in cases {
            let err = distance_km(d(lat), d(lon), d("0.0"), d("0.0")).unwrap_err();
            assert!(err.is_invalid_argument(), "({lat}, {lon}) gave {err:?}");
        }
    }

    #[test]
    fn out_of_range_second_point_is_rejected() {
        let err = distance_km(d("0.0"), d("0.0"), d("0.0"), d("-181.0")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn null_coordinate_is_rejected() {
        assert!(distance_km(None, d("0.0"), d("0.0"), d("0.0"))
            .unwrap_err()
            .is_invalid_argument());
        assert!(distance_km(d("0.0"), None, d("0.0"), d("0.0"))
            .unwrap_err()
            .is_invalid_argument());
        assert!(distance_km(d("0.0"), d("0.0"), d("0.0"), None)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn validate_rejects_center_out_of_range() {
        let point = GeoPoint::from_parts(d("100.0"), d("200.0")).unwrap();
        assert!(point.validate().unwrap_err().is_invalid_argument());
    }

    fn coordinate(limit: i64) -> impl Strategy<Value = Decimal> {
        (-limit * 1_000_000..=limit * 1_000_000).prop_map(|micro| Decimal::new(micro, 6))
    }

    fn point() -> impl Strategy<Value = GeoPoint> {
        (coordinate(90), coordinate(180)).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(p in point()) {
            prop_assert_eq!(p.distance_km(&p).unwrap(), 0.0);
        }

        #[test]
        fn distance_is_symmetric(a in point(), b in point()) {
            let ab = a.distance_km(&b).unwrap();
            let ba = b.distance_km(&a).unwrap();
            prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
        }

        #[test]
        fn distance_never_exceeds_half_circumference(a in point(), b in point()) {
            let max = std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6;
            prop_assert!(a.distance_km(&b).unwrap() <= max);
        }
    }
}
