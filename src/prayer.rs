//! Daily schedule and next-prayer resolution.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, trace};

use crate::error::Result;
use crate::time::TimeOfDay;

/// The five daily prayers, in the order they occur.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// One day of prayer times for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub fajr: TimeOfDay,
    pub dhuhr: TimeOfDay,
    pub asr: TimeOfDay,
    pub maghrib: TimeOfDay,
    pub isha: TimeOfDay,
}

impl PrayerSchedule {
    /// Build a schedule from the text a timetable provider hands out.
    ///
    /// Any field in an unknown format fails the whole schedule; falling back
    /// to a default timetable is up to the caller.
    pub fn parse(fajr: &str, dhuhr: &str, asr: &str, maghrib: &str, isha: &str) -> Result<Self> {
        Ok(Self {
            fajr: fajr.parse()?,
            dhuhr: dhuhr.parse()?,
            asr: asr.parse()?,
            maghrib: maghrib.parse()?,
            isha: isha.parse()?,
        })
    }

    pub fn get(&self, prayer: Prayer) -> TimeOfDay {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// `(prayer, time)` pairs in daily order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, TimeOfDay)> + '_ {
        Prayer::iter().map(move |p| (p, self.get(p)))
    }
}

/// Outcome of [`next_prayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerWindowResult {
    pub name: Prayer,
    pub time: TimeOfDay,
    /// Set when every prayer of today has passed and this is tomorrow's Fajr
    pub is_tomorrow: bool,
    /// `time` resolved against the right calendar day
    pub at: NaiveDateTime,
}

impl PrayerWindowResult {
    /// Time left until the prayer, never negative.
    pub fn remaining(&self, now: NaiveDateTime) -> Duration {
        (self.at - now).max(Duration::zero())
    }
}

/// First prayer strictly after `now`; tomorrow's Fajr once Isha has passed.
///
/// A prayer whose instant equals `now` counts as passed.
#[tracing::instrument(skip(schedule))]
pub fn next_prayer(schedule: &PrayerSchedule, now: NaiveDateTime) -> PrayerWindowResult {
    trace!("enter");

    let today = now.date();
    if let Some((name, time)) = schedule.iter().find(|(_, t)| t.on(today) > now) {
        debug!(%name, %time, "next prayer today");
        return PrayerWindowResult {
            name,
            time,
            is_tomorrow: false,
            at: time.on(today),
        };
    }

    let tomorrow = today.succ_opt().unwrap_or(today);
    debug!(time = %schedule.fajr, "all passed, next is fajr tomorrow");
    PrayerWindowResult {
        name: Prayer::Fajr,
        time: schedule.fajr,
        is_tomorrow: true,
        at: schedule.fajr.on(tomorrow),
    }
}

/// Latest prayer whose time has come today, `None` before Fajr.
pub fn current_prayer(schedule: &PrayerSchedule, now: NaiveDateTime) -> Option<Prayer> {
    let today = now.date();
    schedule
        .iter()
        .filter(|(_, t)| t.on(today) <= now)
        .map(|(p, _)| p)
        .last()
}
