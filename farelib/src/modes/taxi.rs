//! Такси: база ₹200 (₹225 для машин от 1500 куб. см) за первые 5 км,
//! дальше ₹18/км (₹20/км), ожидание ₹50 за каждый начатый час, но не
//! более ₹500.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::model::{ensure_non_negative, FareBreakdown, LineItem, TaxiTrip};

fn included_km() -> Decimal {
    Decimal::from(5)
}

pub fn compute(trip: &TaxiTrip) -> Result<FareBreakdown> {
    ensure_non_negative("distance_km", trip.distance_km)?;
    ensure_non_negative("waiting_hours", trip.waiting_hours)?;

    let (base, rate_per_km) = if trip.high_capacity {
        (Decimal::from(225), Decimal::from(20))
    } else {
        (Decimal::from(200), Decimal::from(18))
    };

    let mut items = vec![LineItem::new(
        "Minimum Fare",
        base,
        "covers the first 5 KM".to_string(),
    )];

    if trip.distance_km > included_km() {
        let extra_km = trip.distance_km - included_km();
        let distance_charge = extra_km * rate_per_km;
        items.push(LineItem::new(
            "Distance Charge",
            distance_charge,
            format!("{extra_km} KM × ₹{rate_per_km}/KM"),
        ));
    }

    let waiting_charge = (trip.waiting_hours.ceil() * Decimal::from(50)).min(Decimal::from(500));
    if waiting_charge > Decimal::ZERO {
        items.push(LineItem::new(
            "Waiting Charge",
            waiting_charge,
            "₹50 per hour (max ₹500)".to_string(),
        ));
    }

    Ok(FareBreakdown::from_items(items))
}
