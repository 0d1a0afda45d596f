use chrono::NaiveTime;
use clap::{Parser, Subcommand, ValueEnum};
use farelib::{
    error::{FareError, Result},
    formats::{csv::Csv, json::Json, text::Text},
    model::{self, AutoTrip, BusTrip, FareInput, TaxiTrip},
    modes::bus::ServiceClass,
    traits::RenderFormat,
};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "fare", version, about = "Расчёт стоимости поездки (Керала)")]
struct Cli {
    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<String>,

    /// Формат вывода
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    format: Fmt,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Авторикша
    Auto {
        /// Расстояние, км
        #[arg(long)]
        distance: Decimal,

        /// Время ожидания, минуты
        #[arg(long = "waiting-minutes", default_value = "0")]
        waiting_minutes: Decimal,

        /// Ночная поездка (22:00–05:00)
        #[arg(long)]
        night: bool,

        /// Время выезда; признак ночи вычисляется по окну 22:00–05:00
        #[arg(long, value_name = "HH:MM", conflicts_with = "night")]
        at: Option<String>,

        /// Поездка туда и обратно
        #[arg(long = "return-journey")]
        return_journey: bool,

        /// Крупный город (Тривандрам, Коччи, Кожикоде и др.)
        #[arg(long = "major-city")]
        major_city: bool,
    },
    /// Автобус
    Bus {
        /// Расстояние, км
        #[arg(long)]
        distance: Decimal,

        /// Идентификатор класса обслуживания (см. `fare classes`)
        #[arg(long = "class")]
        class: String,
    },
    /// Такси
    Taxi {
        /// Расстояние, км
        #[arg(long)]
        distance: Decimal,

        /// Время ожидания, часы
        #[arg(long = "waiting-hours", default_value = "0")]
        waiting_hours: Decimal,

        /// Двигатель от 1500 куб. см
        #[arg(long = "high-capacity")]
        high_capacity: bool,
    },
    /// Тарифная сетка автобусных классов
    Classes,
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| FareError::Parse(format!("time '{s}': {e}")))
}

fn print_classes<W: Write>(mut w: W) -> Result<()> {
    writeln!(
        w,
        "{:<14} {:<36} {:>6} {:>9} {:>8} {:>9}",
        "id", "name", "₹/km", "min fare", "min km", "rounding"
    )?;
    for class in ServiceClass::ALL {
        let spec = class.spec();
        writeln!(
            w,
            "{:<14} {:<36} {:>6} {:>9} {:>8} {:>9}",
            class.id(),
            spec.name,
            spec.fare_per_km.to_string(),
            spec.min_fare.to_string(),
            spec.min_distance_km.to_string(),
            spec.rounding_multiple,
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    let input = match cli.cmd {
        Cmd::Classes => {
            print_classes(&mut writer)?;
            return writer.flush().map_err(FareError::from);
        }
        Cmd::Auto {
            distance,
            waiting_minutes,
            night,
            at,
            return_journey,
            major_city,
        } => {
            let night = match at {
                Some(s) => model::is_night(parse_time(&s)?),
                None => night,
            };
            FareInput::Auto(AutoTrip {
                distance_km: distance,
                waiting_minutes,
                night,
                return_journey,
                major_city,
            })
        }
        Cmd::Bus { distance, class } => FareInput::Bus(BusTrip {
            distance_km: distance,
            service_class: ServiceClass::from_id(&class)?,
        }),
        Cmd::Taxi {
            distance,
            waiting_hours,
            high_capacity,
        } => FareInput::Taxi(TaxiTrip {
            distance_km: distance,
            waiting_hours,
            high_capacity,
        }),
    };

    let breakdown = input.compute()?;

    match cli.format {
        Fmt::Text => Text::write(&mut writer, &breakdown),
        Fmt::Json => Json::write(&mut writer, &breakdown),
        Fmt::Csv => Csv::write(&mut writer, &breakdown),
    }?;

    writer.flush().map_err(FareError::from)
}
