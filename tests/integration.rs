use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc, Weekday};
use worktime::{WorkHours, WorkPeriod, DAY};

fn at(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .unwrap()
        .and_utc()
}

#[test]
fn standard_window_is_eight_hours_everywhere() {
    let start = at("2018-10-01T00:00:00");
    for step in 0..(14 * 24) {
        let p = WorkPeriod::standard(start + TimeDelta::hours(step));
        assert_eq!(p.length(), TimeDelta::hours(8));
    }
}

#[test]
fn since_midnight_stays_within_a_day() {
    let start = at("2018-10-01T00:00:00");
    for step in 0..(3 * 24 * 60 / 7) {
        let t = start + TimeDelta::minutes(7 * step);
        let p = WorkPeriod::standard(t);
        let since = p.since_midnight();
        assert!(since >= TimeDelta::zero() && since < DAY, "{p}");
        assert!(p.is_same_day(&(t - since)));
    }
}

#[test]
fn next_start_scenarios() {
    let cases = [
        ("2018-10-12T15:00:00", "2018-10-15T09:00:00"), // Friday afternoon
        ("2018-10-12T20:00:00", "2018-10-15T09:00:00"), // Friday evening
        ("2018-10-13T15:00:00", "2018-10-15T09:00:00"), // Saturday
        ("2018-10-14T15:00:00", "2018-10-15T09:00:00"), // Sunday
        ("2018-10-09T07:00:00", "2018-10-09T09:00:00"), // Tuesday, early
        ("2018-10-09T12:00:00", "2018-10-10T09:00:00"), // Tuesday, midday
        ("2018-10-11T17:00:00", "2018-10-12T09:00:00"), // Thursday, at the end
    ];
    for (from, expected) in cases {
        let next = WorkPeriod::standard(at(from)).next_work_day_start();
        assert_eq!(next.instant(), &at(expected), "from {from}");
        assert_eq!(next.work_hours(), WorkHours::STANDARD);
    }
}

#[test]
fn overnight_window_from_config() {
    let night: WorkHours = "19:00 - 03:00".parse().unwrap();
    assert!(night.is_overnight());

    let p = WorkPeriod::with_hours(at("2018-10-10T22:00:00"), night);
    assert_eq!(p.length(), TimeDelta::hours(8));
    assert_eq!(p.weekday(), Weekday::Wed);
    assert_eq!(p.to_string(), "2018-10-10T22:00:00 [Wed] (19:00 - 03:00)");
    // Both offsets are compared on the same day: 22:00 is past 03:00.
    assert!(p.after_end());
    assert!(!p.before_start());
}

#[test]
fn add_translates_without_renormalising() {
    let p = WorkPeriod::new(at("2018-10-12T10:00:00"), TimeDelta::hours(7), TimeDelta::hours(14));
    let q = p + TimeDelta::hours(11);
    assert_eq!(q.to_string(), "2018-10-12T21:00:00 [Fri] (07:00 - 14:00)");
    assert_eq!(q.day_start(), TimeDelta::hours(7));
    assert_eq!(q.day_end(), TimeDelta::hours(14));
}

#[cfg(feature = "serde")]
#[test]
fn serde_work_hours_from_config_document() {
    #[derive(serde::Deserialize)]
    struct Config {
        hours: WorkHours,
    }
    let cfg: Config = serde_json::from_str(r#"{"hours": "08:30 - 16:30"}"#).unwrap();
    assert_eq!(cfg.hours, WorkHours::from_hm(8, 30, 16, 30));
}
