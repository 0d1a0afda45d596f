//! Авторикша, тарифное извещение G.O.(P) No.14/2022/TRANS.
//!
//! База ₹30 за первые 1.5 км, дальше ₹1.50 за каждые начатые 100 м.
//! Ожидание — ₹10 за каждые начатые 15 минут, но не более ₹250.
//! Надбавки взаимоисключающие: либо ночная (+50% к промежуточной сумме),
//! либо «региональная» (+50% к плате за расстояние для поездки в один
//! конец вне крупного города).

use rust_decimal::Decimal;

use crate::error::Result;
use crate::model::{ensure_non_negative, AutoTrip, FareBreakdown, LineItem};

fn base_fare() -> Decimal {
    Decimal::from(30)
}

fn included_km() -> Decimal {
    // первые 1.5 км входят в минимальный тариф
    Decimal::new(15, 1)
}

fn rate_per_100m() -> Decimal {
    Decimal::new(150, 2)
}

fn waiting_cap() -> Decimal {
    Decimal::from(250)
}

pub fn compute(trip: &AutoTrip) -> Result<FareBreakdown> {
    ensure_non_negative("distance_km", trip.distance_km)?;
    ensure_non_negative("waiting_minutes", trip.waiting_minutes)?;

    let base = base_fare();

    // расстояние сверх 1.5 км, с округлением вверх до 100 м
    let extra_km = if trip.distance_km > included_km() {
        trip.distance_km - included_km()
    } else {
        Decimal::ZERO
    };
    let mut distance_charge = if extra_km > Decimal::ZERO {
        (extra_km * Decimal::TEN).ceil() * rate_per_100m()
    } else {
        Decimal::ZERO
    };

    let waiting_slabs = (trip.waiting_minutes / Decimal::from(15)).ceil();
    let waiting_charge = (waiting_slabs * Decimal::TEN).min(waiting_cap());

    let subtotal = base + distance_charge + waiting_charge;

    let half = Decimal::new(5, 1);
    let mut night_charge = Decimal::ZERO;
    let mut region_folded = false;
    if trip.night {
        night_charge = subtotal * half;
    } else if !trip.return_journey && !trip.major_city {
        // поездка в один конец вне крупного города: +50% к плате за
        // расстояние, надбавка складывается в ту же строку
        distance_charge += distance_charge * half;
        region_folded = true;
    }

    let mut items = vec![LineItem::new(
        "Minimum Fare",
        base,
        "covers the first 1.5 KM".to_string(),
    )];
    if distance_charge > Decimal::ZERO {
        let note = if region_folded {
            format!(
                "{} KM × ₹15/KM × 1.5 (one-way outside major city)",
                extra_km.round_dp(1)
            )
        } else {
            format!("{} KM × ₹15/KM", extra_km.round_dp(1))
        };
        items.push(LineItem::new("Distance Charge", distance_charge, note));
    }
    if waiting_charge > Decimal::ZERO {
        items.push(LineItem::new(
            "Waiting Charge",
            waiting_charge,
            "₹10 per 15 minutes (max ₹250)".to_string(),
        ));
    }
    if night_charge > Decimal::ZERO {
        items.push(LineItem::new(
            "Night Time Charge",
            night_charge,
            format!("₹{subtotal} × 0.5 (10 PM – 5 AM)"),
        ));
    }

    Ok(FareBreakdown::from_items(items))
}
