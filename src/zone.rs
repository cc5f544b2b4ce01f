//! Prayer-zone lookup
//!
//! Every administrative zone publishes one canonical timetable.  The zone of
//! a device is the zone of the closest reference point in a flat, ordered
//! table.  Order matters: equal distances resolve to the earlier entry.
//!
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::geo::{haversine_km, GeoCoordinate};

/// One known place tagged with the zone it belongs to
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneReferencePoint {
    pub coordinate: GeoCoordinate,
    /// Zone code as used by the timetable provider
    pub zone_id: &'static str,
    /// Informational only
    pub label: &'static str,
}

impl ZoneReferencePoint {
    pub const fn new(
        zone_id: &'static str,
        label: &'static str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            coordinate: GeoCoordinate::new(latitude, longitude),
            zone_id,
            label,
        }
    }
}

use ZoneReferencePoint as Z;

/// JAKIM zones of Malaysia, one reference town each
///
pub static ZONES: &[ZoneReferencePoint] = &[
    Z::new("JHR01", "Pulau Aur", 2.4500, 104.5167),
    Z::new("JHR02", "Johor Bahru", 1.4927, 103.7414),
    Z::new("JHR03", "Kluang", 2.0251, 103.3328),
    Z::new("JHR04", "Batu Pahat", 1.8548, 102.9325),
    Z::new("KDH01", "Alor Setar", 6.1248, 100.3678),
    Z::new("KDH02", "Sungai Petani", 5.6470, 100.4877),
    Z::new("KDH03", "Sik", 5.8167, 100.7333),
    Z::new("KDH04", "Baling", 5.6766, 100.9167),
    Z::new("KDH05", "Kulim", 5.3650, 100.5617),
    Z::new("KDH06", "Langkawi", 6.3500, 99.8000),
    Z::new("KDH07", "Gunung Jerai", 5.7878, 100.4344),
    Z::new("KTN01", "Kota Bharu", 6.1254, 102.2381),
    Z::new("KTN02", "Gua Musang", 4.8823, 101.9644),
    Z::new("MLK01", "Melaka", 2.1896, 102.2501),
    Z::new("NGS01", "Tampin", 2.4701, 102.2302),
    Z::new("NGS02", "Kuala Pilah", 2.7389, 102.2487),
    Z::new("NGS03", "Seremban", 2.7297, 101.9381),
    Z::new("PHG01", "Pulau Tioman", 2.7900, 104.1700),
    Z::new("PHG02", "Kuantan", 3.8077, 103.3260),
    Z::new("PHG03", "Temerloh", 3.4484, 102.4175),
    Z::new("PHG04", "Raub", 3.7921, 101.8575),
    Z::new("PHG05", "Bukit Tinggi", 3.3510, 101.8250),
    Z::new("PHG06", "Cameron Highlands", 4.4718, 101.3767),
    Z::new("PHG07", "Rompin", 2.8073, 103.4862),
    Z::new("PLS01", "Kangar", 6.4414, 100.1986),
    Z::new("PNG01", "George Town", 5.4141, 100.3288),
    Z::new("PRK01", "Tapah", 4.1979, 101.2613),
    Z::new("PRK02", "Ipoh", 4.5975, 101.0901),
    Z::new("PRK03", "Gerik", 5.4188, 101.1294),
    Z::new("PRK04", "Belum", 5.5667, 101.3333),
    Z::new("PRK05", "Teluk Intan", 4.0259, 101.0213),
    Z::new("PRK06", "Taiping", 4.8500, 100.7333),
    Z::new("PRK07", "Bukit Larut", 4.8623, 100.7933),
    Z::new("SBH01", "Sandakan", 5.8402, 118.1179),
    Z::new("SBH02", "Beluran", 5.8939, 117.5589),
    Z::new("SBH03", "Lahad Datu", 5.0268, 118.3270),
    Z::new("SBH04", "Tawau", 4.2448, 117.8912),
    Z::new("SBH05", "Kudat", 6.8837, 116.8477),
    Z::new("SBH06", "Gunung Kinabalu", 6.0750, 116.5583),
    Z::new("SBH07", "Kota Kinabalu", 5.9804, 116.0735),
    Z::new("SBH08", "Keningau", 5.3378, 116.1602),
    Z::new("SBH09", "Beaufort", 5.3473, 115.7455),
    Z::new("SGR01", "Shah Alam", 3.0738, 101.5183),
    Z::new("SGR02", "Kuala Selangor", 3.3394, 101.2497),
    Z::new("SGR03", "Klang", 3.0449, 101.4456),
    Z::new("SWK01", "Limbang", 4.7548, 115.0089),
    Z::new("SWK02", "Miri", 4.3995, 113.9914),
    Z::new("SWK03", "Bintulu", 3.1667, 113.0333),
    Z::new("SWK04", "Sibu", 2.2873, 111.8305),
    Z::new("SWK05", "Sarikei", 2.1271, 111.5238),
    Z::new("SWK06", "Sri Aman", 1.2376, 111.4621),
    Z::new("SWK07", "Samarahan", 1.4590, 110.4883),
    Z::new("SWK08", "Kuching", 1.5535, 110.3593),
    Z::new("SWK09", "Kampung Patarikan", 1.6900, 110.2000),
    Z::new("TRG01", "Kuala Terengganu", 5.3296, 103.1370),
    Z::new("TRG02", "Besut", 5.8299, 102.5534),
    Z::new("TRG03", "Hulu Terengganu", 5.0723, 102.9921),
    Z::new("TRG04", "Kemaman", 4.2330, 103.4220),
    Z::new("WLY01", "Kuala Lumpur", 3.1390, 101.6869),
    Z::new("WLY02", "Labuan", 5.2831, 115.2308),
];

/// Return the closest entry of `table` and its distance in km.
///
/// Fails with [`Error::InvalidConfiguration`] on an empty table.
///
#[tracing::instrument(skip(table), fields(entries = table.len()))]
pub fn nearest_zone_point<'a>(
    observer: &GeoCoordinate,
    table: &'a [ZoneReferencePoint],
) -> Result<(&'a ZoneReferencePoint, f64)> {
    trace!("enter");

    let mut iter = table.iter();
    let first = iter.next().ok_or_else(|| Error::InvalidConfiguration {
        reason: "zone reference table is empty".into(),
    })?;

    let mut best = (first, haversine_km(observer, &first.coordinate));
    for point in iter {
        let dist = haversine_km(observer, &point.coordinate);
        // strict: ties keep the earlier entry
        if dist < best.1 {
            best = (point, dist);
        }
    }

    debug!(zone = best.0.zone_id, km = best.1, "nearest zone");
    Ok(best)
}

/// Zone id of the closest entry of `table`.
///
pub fn nearest_zone<'a>(observer: &GeoCoordinate, table: &'a [ZoneReferencePoint]) -> Result<&'a str> {
    nearest_zone_point(observer, table).map(|(point, _)| point.zone_id)
}

/// Look a zone up in [`ZONES`] by its id (case-insensitive).
///
pub fn find_zone(zone_id: &str) -> Option<&'static ZoneReferencePoint> {
    ZONES.iter().find(|z| z.zone_id.eq_ignore_ascii_case(zone_id))
}
