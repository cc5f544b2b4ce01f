#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use rstest::rstest;

    use prayer_compass::{
        bearing_to, nearest_zone, nearest_zone_point, next_prayer, qibla_bearing,
        CalculationSettings, GeoCoordinate, Prayer, PrayerCalculator, PrayerSchedule, TimeOfDay,
        ZoneReferencePoint, ZONES,
    };

    fn coord() -> impl Strategy<Value = GeoCoordinate> {
        (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lon)| GeoCoordinate::new(lat, lon))
    }

    fn sample() -> PrayerSchedule {
        PrayerSchedule::parse("5:45 AM", "1:15 PM", "4:30 PM", "7:05 PM", "8:20 PM").unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    proptest! {
        #[test]
        fn bearing_in_range(a in coord(), b in coord()) {
            let bearing = bearing_to(&a, &b);
            prop_assert!((0.0..360.0).contains(&bearing), "{}", bearing);
        }

        #[test]
        fn bearing_to_self_is_zero(a in coord()) {
            prop_assert_eq!(bearing_to(&a, &a), 0.0);
        }

        #[test]
        fn nearest_zone_idempotent(a in coord()) {
            let first = nearest_zone(&a, ZONES).unwrap();
            let second = nearest_zone(&a, ZONES).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn time_12h_round_trip(h in 0u32..24, m in 0u32..60) {
            let t = TimeOfDay::new(h, m).unwrap();
            let back: TimeOfDay = t.to_12h().parse().unwrap();
            prop_assert_eq!(back, t);
            let back: TimeOfDay = t.to_24h().parse().unwrap();
            prop_assert_eq!(back, t);
        }

        #[test]
        fn next_prayer_is_after_now(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
            let now = day().and_hms_opt(h, m, s).unwrap();
            let res = next_prayer(&sample(), now);
            prop_assert!(res.at > now);
            prop_assert_eq!(res.is_tomorrow, res.at.date() != now.date());
            prop_assert!(res.remaining(now) <= Duration::hours(24));
        }
    }

    #[rstest]
    #[case(at(0, 0), Prayer::Fajr, false)]
    #[case(at(5, 45), Prayer::Dhuhr, false)]
    #[case(at(13, 14), Prayer::Dhuhr, false)]
    #[case(at(13, 15), Prayer::Asr, false)]
    #[case(at(15, 0), Prayer::Asr, false)]
    #[case(at(19, 4), Prayer::Maghrib, false)]
    #[case(at(20, 19), Prayer::Isha, false)]
    #[case(at(20, 20), Prayer::Fajr, true)]
    #[case(at(21, 0), Prayer::Fajr, true)]
    fn next_prayer_table(#[case] now: NaiveDateTime, #[case] name: Prayer, #[case] tomorrow: bool) {
        let res = next_prayer(&sample(), now);
        assert_eq!(res.name, name);
        assert_eq!(res.is_tomorrow, tomorrow);
        assert_eq!(res.time, sample().get(name));
    }

    #[test]
    fn rollover_crosses_year_end() {
        let res = next_prayer(&sample(), at(23, 59));
        assert!(res.is_tomorrow);
        assert_eq!(res.at, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(5, 45, 0).unwrap());
    }

    #[test]
    fn qibla_from_kuala_lumpur() {
        assert_abs_diff_eq!(qibla_bearing(&GeoCoordinate::new(3.139, 101.6869)), 292.54, epsilon = 0.1);
    }

    #[test]
    fn nearest_zone_tie_keeps_first() {
        // both points 1° of longitude away along the equator
        let table = [
            ZoneReferencePoint::new("EAST", "east", 0.0, 1.0),
            ZoneReferencePoint::new("WEST", "west", 0.0, -1.0),
        ];
        let origin = GeoCoordinate::new(0.0, 0.0);
        assert_eq!(nearest_zone(&origin, &table).unwrap(), "EAST");

        let reversed = [table[1], table[0]];
        assert_eq!(nearest_zone(&origin, &reversed).unwrap(), "WEST");
    }

    #[test]
    fn nearest_zone_exact_entry() {
        let kl = GeoCoordinate::new(3.1390, 101.6869);
        let (point, dist) = nearest_zone_point(&kl, ZONES).unwrap();
        assert_eq!(point.zone_id, "WLY01");
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn fallback_schedule_drives_next_prayer() {
        let kl = GeoCoordinate::new(3.139, 101.6869);
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let schedule = PrayerCalculator::new(CalculationSettings::default())
            .schedule_for(date, &kl, 8.)
            .unwrap();

        // Kuala Lumpur: Fajr before 7, Isha after 20
        assert!(schedule.fajr.hour() >= 5 && schedule.fajr.hour() < 7);
        assert!(schedule.isha.hour() >= 20);

        let noon = date.and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(next_prayer(&schedule, noon).name, Prayer::Dhuhr);
    }

    #[test]
    fn settings_from_json() {
        let settings: CalculationSettings =
            serde_json::from_str(r#"{"method": "Makkah", "asr_juristic": "Hanafi"}"#).unwrap();
        assert_eq!(settings.method, prayer_compass::CalculationMethod::Makkah);
        assert_eq!(settings.asr_juristic, prayer_compass::JuristicMethod::Hanafi);
        assert_eq!(settings.adjust_high_lats, prayer_compass::AdjustingMethod::MidNight);
        assert_eq!(settings.dhuhr_minutes, 0.0);
    }
}
