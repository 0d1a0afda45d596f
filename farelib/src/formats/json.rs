//! JSON-представление разбивки (serde_json поверх модели).

use std::io::Write;

use crate::{error::Result, model::FareBreakdown};

pub struct Json;

impl crate::traits::RenderFormat for Json {
    fn write<W: Write>(mut w: W, b: &FareBreakdown) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, b)?;
        writeln!(w)?;
        Ok(())
    }
}
