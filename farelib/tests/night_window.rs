use chrono::NaiveTime;
use farelib::model::is_night;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn window_runs_from_22_to_05() {
    assert!(is_night(t(22, 0)));
    assert!(is_night(t(23, 59)));
    assert!(is_night(t(0, 30)));
    assert!(is_night(t(4, 59)));
}

#[test]
fn day_starts_at_05_sharp() {
    assert!(!is_night(t(5, 0)));
    assert!(!is_night(t(12, 0)));
    assert!(!is_night(t(21, 59)));
}
