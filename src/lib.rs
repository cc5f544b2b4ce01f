/*-------------------------- In the name of God ----------------------------*\

    prayer_compass (rust)
    Qibla bearing, prayer zone lookup and next-prayer resolution
    Astronomical fallback times based on PrayTimes 1.1 JavaScript library

----------------------------- Copyright Block --------------------------------

Copyright (C) 2007-2010 PrayTimes.org

Developed By: Nbiba Bedis <bedis at nbiba at gmail dot com>
Based on Cpp Code By: Mohammad Ebrahim Mohammadi Panah <ebrahim at mohammadi dot ir>
Based on a JavaScript Code By: Hamid Zarrabi-Zadeh

License: GNU GPL v3.0

TERMS OF USE:
    Permission is granted to use this code, with or
    without modification, in any website or application
    provided that credit is given to the original work
    with a link back to PrayTimes.org.

This program is distributed in the hope that it will
be useful, but WITHOUT ANY WARRANTY.

PLEASE DO NOT REMOVE THIS COPYRIGHT BLOCK.

------------------------------------------------------------------------------

User's Manual:
http://praytimes.org/manual

Calculating Formulas:
http://praytimes.org/calculation

\*--------------------------------------------------------------------------*/

//! Pure, synchronous computations behind a prayer tracking app: which way
//! Mecca is, which timetable zone a device is in, and which prayer comes
//! next.  Acquiring positions, headings and timetables is left to the caller.

pub mod astro;
pub mod compass;
pub mod error;
pub mod geo;
pub mod prayer;
pub mod time;
pub mod zone;

pub use astro::{
    format_hours_24, AdjustingMethod, CalculationMethod, CalculationSettings, DayTimes,
    JuristicMethod, PrayerCalculator,
};
pub use compass::{relative_bearing, CompassReading};
pub use error::{Error, Result};
pub use geo::{bearing_to, haversine_km, qibla_bearing, GeoCoordinate, EARTH_RADIUS_KM, MECCA};
pub use prayer::{current_prayer, next_prayer, Prayer, PrayerSchedule, PrayerWindowResult};
pub use time::TimeOfDay;
pub use zone::{find_zone, nearest_zone, nearest_zone_point, ZoneReferencePoint, ZONES};
