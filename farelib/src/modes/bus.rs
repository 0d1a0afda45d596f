//! Автобус (stage carriage), тарифная сетка G.O.(P) No.17/2022/TRANS.
//!
//! 13 классов обслуживания, у каждого — ставка за км, минимальный тариф,
//! минимальное расстояние и правило округления итога. Кратность 1 означает
//! округление по пайсам (1–49 вниз, 50–99 вверх), кратность >1 — вверх до
//! ближайшего кратного.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{FareError, Result};
use crate::model::{ensure_non_negative, BusTrip, FareBreakdown, LineItem};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ServiceClass {
    Ordinary,
    CityFast,
    FastPassenger,
    SuperFast,
    Express,
    SuperAir,
    SuperDeluxe,
    Luxury,
    SingleAxle,
    MultiAxle,
    LowFloorAC,
    LowFloorNonAC,
    AcSleeper,
}

/// Статическая запись тарифной сетки для одного класса.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub name: &'static str,
    pub fare_per_km: Decimal,
    pub min_fare: Decimal,
    pub min_distance_km: Decimal,
    /// 1 — округление по пайсам; >1 — вверх до кратного.
    pub rounding_multiple: u32,
}

fn class_spec(
    name: &'static str,
    fare_per_km_paise: i64,
    min_fare: i64,
    min_distance_100m: i64,
    rounding_multiple: u32,
) -> ClassSpec {
    ClassSpec {
        name,
        fare_per_km: Decimal::new(fare_per_km_paise, 2),
        min_fare: Decimal::from(min_fare),
        min_distance_km: Decimal::new(min_distance_100m, 1),
        rounding_multiple,
    }
}

impl ServiceClass {
    pub const ALL: [ServiceClass; 13] = [
        ServiceClass::Ordinary,
        ServiceClass::CityFast,
        ServiceClass::FastPassenger,
        ServiceClass::SuperFast,
        ServiceClass::Express,
        ServiceClass::SuperAir,
        ServiceClass::SuperDeluxe,
        ServiceClass::Luxury,
        ServiceClass::SingleAxle,
        ServiceClass::MultiAxle,
        ServiceClass::LowFloorAC,
        ServiceClass::LowFloorNonAC,
        ServiceClass::AcSleeper,
    ];

    pub fn spec(self) -> ClassSpec {
        match self {
            ServiceClass::Ordinary => class_spec("Ordinary/Mofussil Services", 100, 10, 25, 1),
            ServiceClass::CityFast => class_spec("City Fast Services", 103, 12, 25, 1),
            ServiceClass::FastPassenger => class_spec("Fast Passenger Services", 105, 15, 50, 1),
            ServiceClass::SuperFast => class_spec("Super Fast Services", 108, 22, 100, 1),
            ServiceClass::Express => class_spec("Express/Super Express Services", 110, 28, 150, 5),
            ServiceClass::SuperAir => class_spec("Super Air Express", 115, 35, 150, 5),
            ServiceClass::SuperDeluxe => {
                class_spec("Super Deluxe/Semi Sleeper Services", 120, 40, 150, 10)
            }
            ServiceClass::Luxury => class_spec("Luxury/High-Tech and AC Services", 150, 60, 200, 10),
            ServiceClass::SingleAxle => class_spec("Single Axle Services", 181, 60, 200, 10),
            ServiceClass::MultiAxle => class_spec("Multi Axle Services", 225, 100, 200, 10),
            ServiceClass::LowFloorAC => {
                class_spec("Low Floor Air Conditioned Services", 175, 26, 50, 2)
            }
            ServiceClass::LowFloorNonAC => class_spec("Low Floor Non-AC Services", 100, 10, 25, 1),
            ServiceClass::AcSleeper => class_spec("A/C Sleeper Services", 250, 130, 200, 10),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ServiceClass::Ordinary => "ordinary",
            ServiceClass::CityFast => "cityFast",
            ServiceClass::FastPassenger => "fastPassenger",
            ServiceClass::SuperFast => "superFast",
            ServiceClass::Express => "express",
            ServiceClass::SuperAir => "superAir",
            ServiceClass::SuperDeluxe => "superDeluxe",
            ServiceClass::Luxury => "luxury",
            ServiceClass::SingleAxle => "singleAxle",
            ServiceClass::MultiAxle => "multiAxle",
            ServiceClass::LowFloorAC => "lowFloorAC",
            ServiceClass::LowFloorNonAC => "lowFloorNonAC",
            ServiceClass::AcSleeper => "acSleeper",
        }
    }

    /// Неизвестный идентификатор — ошибка, а не класс «по умолчанию».
    pub fn from_id(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| FareError::UnknownServiceClass(id.to_string()))
    }
}

pub fn compute(trip: &BusTrip) -> Result<FareBreakdown> {
    ensure_non_negative("distance_km", trip.distance_km)?;
    let spec = trip.service_class.spec();

    let mut items = vec![LineItem::new(
        "Minimum Fare",
        spec.min_fare,
        format!("up to {} KM", spec.min_distance_km),
    )];

    if trip.distance_km > spec.min_distance_km {
        let extra_km = trip.distance_km - spec.min_distance_km;
        // единственный канонический «сырой» промежуточный тариф
        let additional = extra_km * spec.fare_per_km;
        let raw_total = spec.min_fare + additional;
        let rounded = round_total(raw_total, spec.rounding_multiple);

        items.push(LineItem::new(
            "Additional Distance",
            additional,
            format!("{} KM × ₹{}/KM", extra_km, spec.fare_per_km),
        ));

        let adjustment = rounded - raw_total;
        if !adjustment.is_zero() {
            let unit = if spec.rounding_multiple > 1 {
                format!("nearest ₹{}", spec.rounding_multiple)
            } else {
                "nearest rupee".to_string()
            };
            items.push(LineItem::new(
                "Rounding Adjustment",
                adjustment,
                format!("₹{raw_total} rounded to ₹{rounded} ({unit})"),
            ));
        }
    }

    Ok(FareBreakdown::from_items(items))
}

fn round_total(raw: Decimal, multiple: u32) -> Decimal {
    if multiple > 1 {
        let m = Decimal::from(multiple);
        (raw / m).ceil() * m
    } else {
        // пайсы 1–49 — вниз до рупии, 50–99 — вверх, 0 — без изменений
        let whole = raw.floor();
        let paise = ((raw - whole) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if paise >= Decimal::ONE && paise <= Decimal::from(49) {
            whole
        } else if paise >= Decimal::from(50) && paise <= Decimal::from(99) {
            whole + Decimal::ONE
        } else {
            raw
        }
    }
}
