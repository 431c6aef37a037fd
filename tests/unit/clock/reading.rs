use super::*;

#[test]
fn new_rejects_out_of_range_fields() {
    assert!(ClockReading::new(24, 0, 0).is_err());
    assert!(ClockReading::new(0, 60, 0).is_err());
    assert!(ClockReading::new(0, 0, 60).is_err());
    assert!(ClockReading::new(23, 59, 59).is_ok());
}

#[test]
fn hour12_folds_afternoon_and_midnight() {
    assert_eq!(ClockReading::new(0, 0, 0).unwrap().hour12(), 0);
    assert_eq!(ClockReading::new(12, 0, 0).unwrap().hour12(), 0);
    assert_eq!(ClockReading::new(15, 0, 0).unwrap().hour12(), 3);
    assert_eq!(ClockReading::new(23, 0, 0).unwrap().hour12(), 11);
}

#[test]
fn parse_accepts_short_and_long_forms() {
    let r: ClockReading = "03:00".parse().unwrap();
    assert_eq!((r.hour(), r.minute(), r.second()), (3, 0, 0));

    let r: ClockReading = "0:30:45".parse().unwrap();
    assert_eq!((r.hour(), r.minute(), r.second()), (0, 30, 45));
    assert_eq!(r.to_string(), "00:30:45");

    assert!("12".parse::<ClockReading>().is_err());
    assert!("aa:00".parse::<ClockReading>().is_err());
    assert!("10:61:00".parse::<ClockReading>().is_err());
}

#[test]
fn day_secs_roundtrip_wraps_at_midnight() {
    let r = ClockReading::new(13, 7, 9).unwrap();
    assert_eq!(ClockReading::from_day_secs(f64::from(r.day_secs())), r);
    assert_eq!(
        ClockReading::from_day_secs(86_400.0 + 5.0),
        ClockReading::new(0, 0, 5).unwrap()
    );
}

#[test]
fn simulated_clock_advances_one_second_per_fps_samples() {
    let start = ClockReading::new(10, 59, 58).unwrap();
    let mut clock = SimulatedClock::new(start, Fps::new(4, 1).unwrap());

    let samples: Vec<ClockReading> = (0..12).map(|_| clock.now()).collect();
    assert!(samples[..4].iter().all(|r| *r == start));
    assert!(
        samples[4..8]
            .iter()
            .all(|r| *r == ClockReading::new(10, 59, 59).unwrap())
    );
    assert!(
        samples[8..]
            .iter()
            .all(|r| *r == ClockReading::new(11, 0, 0).unwrap())
    );
}

#[test]
fn simulated_clock_wraps_past_midnight() {
    let start = ClockReading::new(23, 59, 59).unwrap();
    let mut clock = SimulatedClock::new(start, Fps::new(1, 1).unwrap());
    assert_eq!(clock.now(), start);
    assert_eq!(clock.now(), ClockReading::new(0, 0, 0).unwrap());
}

#[test]
fn fixed_clock_never_moves() {
    let r = ClockReading::new(9, 15, 30).unwrap();
    let mut clock = FixedClock(r);
    assert_eq!(clock.now(), r);
    assert_eq!(clock.now(), r);
}

#[test]
fn system_clock_reports_valid_fields() {
    let r = SystemClock.now();
    assert!(r.hour() < 24 && r.minute() < 60 && r.second() < 60);
}
