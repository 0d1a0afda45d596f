//! Простой CSV: заголовки label,amount,note; последняя строка — Total.

use csv::WriterBuilder;
use std::io::Write;

use crate::{error::Result, model::FareBreakdown};

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    label: &'a str,
    amount: String,
    note: &'a str,
}

pub struct Csv;

impl crate::traits::RenderFormat for Csv {
    fn write<W: Write>(mut w: W, b: &FareBreakdown) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for item in &b.items {
            wrt.serialize(CsvOutRow {
                label: &item.label,
                amount: item.amount.to_string(),
                note: &item.note,
            })?;
        }
        wrt.serialize(CsvOutRow {
            label: "Total",
            amount: b.total.to_string(),
            note: "",
        })?;
        wrt.flush()?;
        Ok(())
    }
}
