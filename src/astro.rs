//! Astronomical prayer times
//!
//! Used to build a fallback [`PrayerSchedule`] when no published timetable
//! is available for a zone.  The sun position model and the high latitude
//! rules follow PrayTimes 1.1 (see <http://praytimes.org/calculation>).
//!
use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::geo::GeoCoordinate;
use crate::prayer::{Prayer, PrayerSchedule};
use crate::time::TimeOfDay;

const INVALID_TIME: &str = "-----";

/// Convert fractional hours into `HH:MM`, or `-----` when not computable
pub fn format_hours_24(time: f64) -> String {
    match TimeOfDay::from_hours(time) {
        Some(t) => t.to_24h(),
        None => INVALID_TIME.into(),
    }
}

// Calculation Methods
#[derive(
    Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum CalculationMethod {
    Jafari,  // Ithna Ashari
    Karachi, // University of Islamic Sciences, Karachi
    ISNA,    // Islamic Society of North America (ISNA)
    #[default]
    MWL, // Muslim World League (MWL)
    Makkah,  // Umm al-Qura, Makkah
    Egypt,   // Egyptian General Authority of Survey
}

// Juristic Methods for Asr
#[derive(
    Debug, Default, PartialEq, Eq, Clone, Copy, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum JuristicMethod {
    #[default]
    Shafii, // shadow ratio 1
    Hanafi, // shadow ratio 2
}

// Adjusting Methods for Higher Latitudes
#[derive(
    Debug, Default, PartialEq, Eq, Clone, Copy, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum AdjustingMethod {
    None, // No adjustment
    #[default]
    MidNight, // middle of night
    OneSeventh, // 1/7th of night
    AngleBased, // angle/60th of night
}

/// Twilight angle or fixed offset after sunset
#[derive(Debug, Clone, Copy, PartialEq)]
enum Twilight {
    Angle(f64),
    Minutes(f64),
}

#[derive(Debug, Clone, Copy)]
struct MethodParams {
    fajr_angle: f64,
    maghrib: Twilight,
    isha: Twilight,
}

impl CalculationMethod {
    fn params(self) -> MethodParams {
        use Twilight::*;

        let (fajr_angle, maghrib, isha) = match self {
            CalculationMethod::Jafari => (16.0, Angle(4.0), Angle(14.0)),
            CalculationMethod::Karachi => (18.0, Minutes(0.0), Angle(18.0)),
            CalculationMethod::ISNA => (15.0, Minutes(0.0), Angle(15.0)),
            CalculationMethod::MWL => (18.0, Minutes(0.0), Angle(17.0)),
            CalculationMethod::Makkah => (19.0, Minutes(0.0), Minutes(90.0)),
            CalculationMethod::Egypt => (19.5, Minutes(0.0), Angle(17.5)),
        };
        MethodParams {
            fajr_angle,
            maghrib,
            isha,
        }
    }
}

/// Everything the calculation can be tuned with
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationSettings {
    pub method: CalculationMethod,
    pub asr_juristic: JuristicMethod,
    pub adjust_high_lats: AdjustingMethod,
    /// minutes after mid-day for Dhuhr
    pub dhuhr_minutes: f64,
}

/// Raw times of one day, in fractional local hours.  `NaN` marks a time the
/// sun never reaches.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTimes {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl DayTimes {
    /// Round to minutes and keep the five prayers.
    ///
    pub fn to_schedule(&self) -> Result<PrayerSchedule> {
        let get = |prayer: Prayer, hours: f64| {
            TimeOfDay::from_hours(hours).ok_or(Error::UnresolvedTime { prayer })
        };
        Ok(PrayerSchedule {
            fajr: get(Prayer::Fajr, self.fajr)?,
            dhuhr: get(Prayer::Dhuhr, self.dhuhr)?,
            asr: get(Prayer::Asr, self.asr)?,
            maghrib: get(Prayer::Maghrib, self.maghrib)?,
            isha: get(Prayer::Isha, self.isha)?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct PrayerCalculator {
    settings: CalculationSettings,
}

/// Per-call state: where and when
struct Observer {
    latitude: f64,
    longitude: f64,
    timezone: f64,
    julian_date: f64,
}

impl PrayerCalculator {
    pub fn new(settings: CalculationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CalculationSettings {
        &self.settings
    }

    /// Compute raw times for `date` at `coordinate`, `utc_offset` in hours
    ///
    #[tracing::instrument(skip(self))]
    pub fn times_for(&self, date: NaiveDate, coordinate: &GeoCoordinate, utc_offset: f64) -> DayTimes {
        trace!("enter");

        let obs = Observer {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            timezone: utc_offset,
            julian_date: julian_date(date) - coordinate.longitude / (15. * 24.),
        };

        // default times, in hours
        let mut times = DayTimes {
            fajr: 5.,
            sunrise: 6.,
            dhuhr: 12.,
            asr: 13.,
            sunset: 18.,
            maghrib: 18.,
            isha: 18.,
        };
        self.compute_times(&obs, &mut times);
        self.adjust_times(&obs, &mut times);

        debug!(?times, "computed");
        times
    }

    /// Fallback schedule for `date` at `coordinate`
    ///
    /// Fails with [`Error::UnresolvedTime`] when a prayer has no time, which
    /// only happens at high latitudes with [`AdjustingMethod::None`].
    ///
    pub fn schedule_for(
        &self,
        date: NaiveDate,
        coordinate: &GeoCoordinate,
        utc_offset: f64,
    ) -> Result<PrayerSchedule> {
        self.times_for(date, coordinate, utc_offset).to_schedule()
    }

    /* compute prayer times at given julian date */
    fn compute_times(&self, obs: &Observer, times: &mut DayTimes) {
        let params = self.settings.method.params();
        let portion = |t: f64| t / 24.0;

        times.fajr = compute_time(obs, 180.0 - params.fajr_angle, portion(times.fajr));
        times.sunrise = compute_time(obs, 180.0 - 0.833, portion(times.sunrise));
        times.dhuhr = compute_mid_day(obs, portion(times.dhuhr));
        times.asr = self.compute_asr(obs, portion(times.asr));
        times.sunset = compute_time(obs, 0.833, portion(times.sunset));
        // a minute offset keeps the placeholder, replaced in adjust_times()
        times.maghrib = match params.maghrib {
            Twilight::Angle(a) => compute_time(obs, a, portion(times.maghrib)),
            Twilight::Minutes(m) => compute_time(obs, m, portion(times.maghrib)),
        };
        times.isha = match params.isha {
            Twilight::Angle(a) => compute_time(obs, a, portion(times.isha)),
            Twilight::Minutes(m) => compute_time(obs, m, portion(times.isha)),
        };
    }

    /* compute the time of Asr */
    fn compute_asr(&self, obs: &Observer, t: f64) -> f64 {
        let step = match self.settings.asr_juristic {
            JuristicMethod::Shafii => 1.0,
            JuristicMethod::Hanafi => 2.0,
        };
        let d = sun_declination(obs.julian_date + t);
        let g = -darccot(step + dtan((obs.latitude - d).abs()));
        compute_time(obs, g, t)
    }

    /* shift to local time, apply offsets */
    fn adjust_times(&self, obs: &Observer, times: &mut DayTimes) {
        let params = self.settings.method.params();
        let shift = obs.timezone - obs.longitude / 15.0;

        for t in [
            &mut times.fajr,
            &mut times.sunrise,
            &mut times.dhuhr,
            &mut times.asr,
            &mut times.sunset,
            &mut times.maghrib,
            &mut times.isha,
        ] {
            *t += shift;
        }

        times.dhuhr += self.settings.dhuhr_minutes / 60.0;
        if let Twilight::Minutes(m) = params.maghrib {
            times.maghrib = times.sunset + m / 60.0;
        }
        if let Twilight::Minutes(m) = params.isha {
            times.isha = times.maghrib + m / 60.0;
        }

        if self.settings.adjust_high_lats != AdjustingMethod::None {
            self.adjust_high_lat_times(&params, times);
        }
    }

    /* adjust Fajr, Isha and Maghrib for locations in higher latitudes */
    fn adjust_high_lat_times(&self, params: &MethodParams, times: &mut DayTimes) {
        let night_time = time_diff(times.sunset, times.sunrise); // sunset to sunrise

        let fajr_diff = self.night_portion(params.fajr_angle) * night_time;
        if times.fajr.is_nan() || time_diff(times.fajr, times.sunrise) > fajr_diff {
            times.fajr = times.sunrise - fajr_diff;
        }

        let isha_angle = match params.isha {
            Twilight::Angle(a) => a,
            Twilight::Minutes(_) => 18.0,
        };
        let isha_diff = self.night_portion(isha_angle) * night_time;
        if times.isha.is_nan() || time_diff(times.sunset, times.isha) > isha_diff {
            times.isha = times.sunset + isha_diff;
        }

        let maghrib_angle = match params.maghrib {
            Twilight::Angle(a) => a,
            Twilight::Minutes(_) => 4.0,
        };
        let maghrib_diff = self.night_portion(maghrib_angle) * night_time;
        if times.maghrib.is_nan() || time_diff(times.sunset, times.maghrib) > maghrib_diff {
            times.maghrib = times.sunset + maghrib_diff;
        }
    }

    /* the night portion used for adjusting times in higher latitudes */
    fn night_portion(&self, angle: f64) -> f64 {
        match self.settings.adjust_high_lats {
            AdjustingMethod::AngleBased => angle / 60.0,
            AdjustingMethod::MidNight => 1.0 / 2.0,
            AdjustingMethod::OneSeventh => 1.0 / 7.0,
            AdjustingMethod::None => 0.,
        }
    }
}

/* compute time for a given angle G */
fn compute_time(obs: &Observer, g: f64, t: f64) -> f64 {
    let d = sun_declination(obs.julian_date + t);
    let z = compute_mid_day(obs, t);
    let v = 1.0 / 15.0
        * darccos((-dsin(g) - dsin(d) * dsin(obs.latitude)) / (dcos(d) * dcos(obs.latitude)));
    z + if g > 90.0 { -v } else { v }
}

/* compute mid-day (Dhuhr, Zawal) time */
fn compute_mid_day(obs: &Observer, t: f64) -> f64 {
    let eq_t = sun_position(obs.julian_date + t).1;
    fix_hour(12. - eq_t)
}

fn julian_date(date: NaiveDate) -> f64 {
    let (mut year, mut month) = (date.year() as f64, date.month() as f64);
    if month <= 2. {
        year -= 1.;
        month += 12.;
    }

    let a = (year / 100.).floor();
    let b = 2. - a + (a / 4.).floor();

    (365.25 * (year + 4716.)).floor() + (30.6001 * (month + 1.)).floor() + date.day() as f64 + b
        - 1524.5
}

fn sun_declination(jd: f64) -> f64 {
    sun_position(jd).0
}

/* declination angle of sun and equation of time */
fn sun_position(jd: f64) -> (f64, f64) {
    let d = jd - 2451545.0;
    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2. * g));

    let e = 23.439 - 0.00000036 * d;

    let dd = darcsin(dsin(e) * dsin(l));
    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

    (dd, q / 15.0 - ra)
}

/* ---------------------- Trigonometric Functions ----------------------- */

fn dsin(d: f64) -> f64 {
    deg2rad(d).sin()
}

fn dcos(d: f64) -> f64 {
    deg2rad(d).cos()
}

fn dtan(d: f64) -> f64 {
    deg2rad(d).tan()
}

fn darcsin(x: f64) -> f64 {
    rad2deg(x.asin())
}

fn darccos(x: f64) -> f64 {
    rad2deg(x.acos())
}

fn darctan2(y: f64, x: f64) -> f64 {
    rad2deg(y.atan2(x))
}

fn darccot(x: f64) -> f64 {
    rad2deg((1.0 / x).atan())
}

fn deg2rad(d: f64) -> f64 {
    d * PI / 180.0
}

fn rad2deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/* range reduce angle in degrees. */
fn fix_angle(a: f64) -> f64 {
    a.rem_euclid(360.0)
}

/* range reduce hours to 0..24 */
fn fix_hour(a: f64) -> f64 {
    a.rem_euclid(24.0)
}

/* difference between two times */
fn time_diff(time1: f64, time2: f64) -> f64 {
    fix_hour(time2 - time1)
}
