use farelib::{
    formats::{csv::Csv, json::Json, text::Text},
    model::{AutoTrip, FareBreakdown, FareInput},
    traits::RenderFormat,
};
use rust_decimal::Decimal;

fn sample() -> FareBreakdown {
    FareInput::Auto(AutoTrip {
        distance_km: Decimal::from_str_exact("2.5").unwrap(),
        waiting_minutes: Decimal::from(20),
        night: false,
        return_journey: false,
        major_city: false,
    })
    .compute()
    .expect("compute")
}

#[test]
fn text_renders_all_lines_and_total() {
    let mut out = Vec::new();
    Text::write(&mut out, &sample()).expect("write text");
    let s = String::from_utf8(out).unwrap();
    assert!(s.contains("Minimum Fare"));
    assert!(s.contains("Distance Charge"));
    assert!(s.contains("Waiting Charge"));
    assert!(s.lines().last().unwrap().starts_with("Total"));
}

#[test]
fn json_write_then_read_back() {
    let b = sample();
    let mut buf = Vec::new();
    Json::write(&mut buf, &b).expect("write json");

    let b2: FareBreakdown = serde_json::from_slice(&buf).expect("read json");
    assert_eq!(b2, b);
}

#[test]
fn csv_has_header_and_total_row() {
    let mut out = Vec::new();
    Csv::write(&mut out, &sample()).expect("write csv");
    let s = String::from_utf8(out).unwrap();
    assert!(s.starts_with("label,amount,note"));
    assert!(s.lines().any(|l| l.starts_with("Total,")));
}
