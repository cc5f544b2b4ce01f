//! Great-circle geometry on a spherical Earth.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The Kaaba, target of every Qibla bearing.
pub const MECCA: GeoCoordinate = GeoCoordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

/// A point on the Earth in decimal degrees.
///
/// Bounds are not checked here; callers hand over coordinates already
/// validated by their geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other` in kilometres.
    pub fn distance_km(&self, other: &GeoCoordinate) -> f64 {
        haversine_km(self, other)
    }

    /// Initial bearing toward `other`, see [`bearing_to`].
    pub fn bearing_to(&self, other: &GeoCoordinate) -> f64 {
        bearing_to(self, other)
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Initial great-circle bearing from `observer` to `target`, in degrees
/// clockwise from true north, always within `[0, 360)`.
///
/// Coincident points have no defined bearing and yield `0.0`.
pub fn bearing_to(observer: &GeoCoordinate, target: &GeoCoordinate) -> f64 {
    if observer == target {
        return 0.0;
    }

    let lat1 = observer.latitude.to_radians();
    let lat2 = target.latitude.to_radians();
    let delta_lon = (target.longitude - observer.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    if y == 0.0 && x == 0.0 {
        return 0.0;
    }

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Qibla bearing for `observer`.
pub fn qibla_bearing(observer: &GeoCoordinate) -> f64 {
    bearing_to(observer, &MECCA)
}

/// Great-circle distance in kilometres (Haversine formula).
pub fn haversine_km(from: &GeoCoordinate, to: &GeoCoordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // rounding can push `a` a hair above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Reduce an angle in degrees to `[0, 360)`.
pub(crate) fn normalize_degrees(angle: f64) -> f64 {
    let a = (angle + 360.0) % 360.0;
    let a = if a < 0.0 { a + 360.0 } else { a };
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bearing_same_point_is_zero() {
        let kl = GeoCoordinate::new(3.139, 101.6869);
        assert_eq!(bearing_to(&kl, &kl), 0.0);
        assert_eq!(qibla_bearing(&MECCA), 0.0);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoCoordinate::new(0.0, 0.0);
        assert_abs_diff_eq!(bearing_to(&origin, &(10.0, 0.0).into()), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bearing_to(&origin, &(0.0, 10.0).into()), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bearing_to(&origin, &(-10.0, 0.0).into()), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bearing_to(&origin, &(0.0, -10.0).into()), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_qibla_kuala_lumpur() {
        let kl = GeoCoordinate::new(3.139, 101.6869);
        assert_abs_diff_eq!(qibla_bearing(&kl), 292.54, epsilon = 0.1);
    }

    #[test]
    fn test_qibla_london() {
        let london = GeoCoordinate::new(51.5074, -0.1278);
        assert_abs_diff_eq!(qibla_bearing(&london), 118.99, epsilon = 0.1);
    }

    #[test]
    fn test_haversine_one_degree() {
        let d = haversine_km(&(0.0, 0.0).into(), &(1.0, 0.0).into());
        // 2πR / 360
        assert_abs_diff_eq!(d, 111.195, epsilon = 0.01);
    }

    #[test]
    fn test_haversine_zero_and_symmetric() {
        let a = GeoCoordinate::new(5.4141, 100.3288);
        let b = GeoCoordinate::new(1.4927, 103.7414);
        assert_eq!(a.distance_km(&a), 0.0);
        assert_abs_diff_eq!(a.distance_km(&b), b.distance_km(&a), epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-720.5), 359.5);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }
}
