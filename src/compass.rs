//! Qibla pointer for a device compass.
//!
//! The device heading is passed in with every update; nothing is remembered
//! between calls.

use serde::Serialize;

use crate::geo::{haversine_km, normalize_degrees, qibla_bearing, GeoCoordinate, MECCA};

/// Angle to draw the pointer at, given the bearing to the target and the
/// direction the device faces (both clockwise from north).
pub fn relative_bearing(bearing: f64, heading: f64) -> f64 {
    normalize_degrees(bearing - heading)
}

/// Everything a Qibla screen shows for one position/heading update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompassReading {
    pub observer: GeoCoordinate,
    /// Qibla bearing from true north
    pub bearing: f64,
    /// Pointer angle relative to the device, when a heading is known
    pub relative: Option<f64>,
    /// Great-circle distance to Mecca
    pub distance_km: f64,
}

impl CompassReading {
    pub fn new(observer: GeoCoordinate, heading: Option<f64>) -> Self {
        let bearing = qibla_bearing(&observer);
        Self {
            observer,
            bearing,
            relative: heading.map(|h| relative_bearing(bearing, h)),
            distance_km: haversine_km(&observer, &MECCA),
        }
    }

    /// Same position, new heading.
    pub fn with_heading(&self, heading: f64) -> Self {
        Self {
            relative: Some(relative_bearing(self.bearing, heading)),
            ..*self
        }
    }
}
