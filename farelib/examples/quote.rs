use farelib::{
    formats::text::Text,
    model::{AutoTrip, FareInput},
    traits::RenderFormat,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: авторикша, 2.5 км днём без ожидания — разбивка в stdout
    let input = FareInput::Auto(AutoTrip {
        distance_km: Decimal::new(25, 1),
        waiting_minutes: Decimal::ZERO,
        night: false,
        return_journey: false,
        major_city: false,
    });
    Text::write(std::io::stdout(), &input.compute()?)?;
    Ok(())
}
