//! Человекочитаемая таблица: строка на позицию, итог последним.

use rust_decimal::Decimal;
use std::io::Write;

use crate::{error::Result, model::FareBreakdown};

pub struct Text;

/// Две цифры после запятой; «подпайсовые» суммы показываем как есть.
fn rupees(amount: Decimal) -> String {
    if amount.round_dp(2) == amount {
        format!("₹{:.2}", amount)
    } else {
        format!("₹{amount}")
    }
}

impl crate::traits::RenderFormat for Text {
    fn write<W: Write>(mut w: W, b: &FareBreakdown) -> Result<()> {
        for item in &b.items {
            writeln!(
                w,
                "{:<22} {:>12}  {}",
                item.label,
                rupees(item.amount),
                item.note
            )?;
        }
        writeln!(w, "{:<22} {:>12}", "Total", rupees(b.total))?;
        Ok(())
    }
}
