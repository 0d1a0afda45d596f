//! Унифицированный трэйт вывода разбивки на основе std::io::Write.

use crate::{error::Result, model::FareBreakdown};
use std::io::Write;

pub trait RenderFormat {
    fn write<W: Write>(w: W, breakdown: &FareBreakdown) -> Result<()>;
}
