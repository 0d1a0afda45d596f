//! Доменные модели — единый «нормализованный» слой между режимами и рендерами.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FareError, Result};
use crate::modes::bus::ServiceClass;

/// Одна строка разбивки тарифа.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
    /// Пояснение к строке (как сумма получилась).
    pub note: String,
}

impl LineItem {
    pub fn new(label: &str, amount: Decimal, note: String) -> Self {
        Self {
            label: label.to_string(),
            amount,
            note,
        }
    }
}

/// Итоговая разбивка: порядок строк значим — база, расстояние, ожидание,
/// надбавки, корректировка округления последней.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FareBreakdown {
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

impl FareBreakdown {
    /// Инвариант: total — ровно сумма строк, никакого скрытого округления.
    pub(crate) fn from_items(items: Vec<LineItem>) -> Self {
        let total = items.iter().map(|i| i.amount).sum();
        Self { items, total }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoTrip {
    pub distance_km: Decimal,
    pub waiting_minutes: Decimal,
    /// Поездка в окне 22:00–05:00; признак задаёт вызывающая сторона.
    pub night: bool,
    pub return_journey: bool,
    pub major_city: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusTrip {
    pub distance_km: Decimal,
    pub service_class: ServiceClass,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxiTrip {
    pub distance_km: Decimal,
    pub waiting_hours: Decimal,
    /// Двигатель от 1500 куб. см.
    pub high_capacity: bool,
}

/// Помеченное объединение входов — один диспетчер вместо иерархии.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FareInput {
    Auto(AutoTrip),
    Bus(BusTrip),
    Taxi(TaxiTrip),
}

impl FareInput {
    pub fn compute(&self) -> Result<FareBreakdown> {
        match self {
            FareInput::Auto(t) => crate::modes::auto::compute(t),
            FareInput::Bus(t) => crate::modes::bus::compute(t),
            FareInput::Taxi(t) => crate::modes::taxi::compute(t),
        }
    }
}

/// Ночное окно 22:00–05:00 (ровно 05:00 — уже день).
pub fn is_night(t: NaiveTime) -> bool {
    t.hour() >= 22 || t.hour() < 5
}

/// Отрицательные расстояния/время отклоняем на границе, а не «чиним».
pub(crate) fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() {
        return Err(FareError::Negative { field, value });
    }
    Ok(())
}
