use farelib::error::FareError;
use farelib::model::{BusTrip, FareBreakdown};
use farelib::modes::bus::{self, ServiceClass};
use rust_decimal::Decimal;

fn trip(distance: &str, class: ServiceClass) -> BusTrip {
    BusTrip {
        distance_km: Decimal::from_str_exact(distance).unwrap(),
        service_class: class,
    }
}

fn line<'a>(b: &'a FareBreakdown, label: &str) -> Option<&'a farelib::model::LineItem> {
    b.items.iter().find(|i| i.label == label)
}

fn items_sum(b: &FareBreakdown) -> Decimal {
    b.items.iter().map(|i| i.amount).sum()
}

#[test]
fn at_minimum_distance_only_minimum_fare() {
    let b = bus::compute(&trip("2.5", ServiceClass::Ordinary)).expect("bus");
    assert_eq!(b.total, Decimal::TEN);
    assert_eq!(b.items.len(), 1);
    assert_eq!(b.items[0].label, "Minimum Fare");
}

#[test]
fn paise_exactly_50_rounds_up() {
    // ordinary, 5 км: 10 + 2.5 × 1.00 = 12.50 → 13
    let b = bus::compute(&trip("5", ServiceClass::Ordinary)).unwrap();
    assert_eq!(b.total, Decimal::from(13));
    assert_eq!(
        line(&b, "Additional Distance").unwrap().amount,
        Decimal::from_str_exact("2.5").unwrap()
    );
    assert_eq!(
        line(&b, "Rounding Adjustment").unwrap().amount,
        Decimal::from_str_exact("0.5").unwrap()
    );
    assert_eq!(b.total, items_sum(&b));
}

#[test]
fn paise_1_to_49_rounds_down() {
    // 10 + 2.49 = 12.49 → 12, корректировка отрицательная
    let b = bus::compute(&trip("4.99", ServiceClass::Ordinary)).unwrap();
    assert_eq!(b.total, Decimal::from(12));
    assert_eq!(
        line(&b, "Rounding Adjustment").unwrap().amount,
        Decimal::from_str_exact("-0.49").unwrap()
    );
    assert_eq!(b.total, items_sum(&b));
}

#[test]
fn multiple_rounding_goes_up_to_nearest_multiple() {
    // express: 28 + 5 × 1.10 = 33.5 → 35 (кратно 5)
    let b = bus::compute(&trip("20", ServiceClass::Express)).unwrap();
    assert_eq!(b.total, Decimal::from(35));
    assert_eq!(
        line(&b, "Rounding Adjustment").unwrap().amount,
        Decimal::from_str_exact("1.5").unwrap()
    );
}

#[test]
fn multiple_of_two_rounding() {
    // lowFloorAC: 26 + 5 × 1.75 = 34.75 → 36
    let b = bus::compute(&trip("10", ServiceClass::LowFloorAC)).unwrap();
    assert_eq!(b.total, Decimal::from(36));
    assert_eq!(b.total, items_sum(&b));
}

#[test]
fn exact_multiple_has_no_adjustment_line() {
    // luxury: 60 + 20 × 1.50 = 90 — уже кратно 10
    let b = bus::compute(&trip("40", ServiceClass::Luxury)).unwrap();
    assert_eq!(b.total, Decimal::from(90));
    assert!(line(&b, "Rounding Adjustment").is_none());
}

#[test]
fn class_ids_round_trip() {
    for class in ServiceClass::ALL {
        assert_eq!(ServiceClass::from_id(class.id()).unwrap(), class);
    }
}

#[test]
fn unknown_class_id_is_a_typed_error() {
    assert!(matches!(
        ServiceClass::from_id("helicopter"),
        Err(FareError::UnknownServiceClass(_))
    ));
}

#[test]
fn negative_distance_is_rejected() {
    let mut t = trip("5", ServiceClass::Ordinary);
    t.distance_km = Decimal::from(-3);
    assert!(matches!(
        bus::compute(&t),
        Err(FareError::Negative { .. })
    ));
}
