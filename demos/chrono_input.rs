//! Building calculator inputs from chrono date-times.

use chrono::{DateTime, Duration, FixedOffset, Local, Utc};
use noaa_solar::{GeometryEpoch, SolarInput, SolarPositionCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let calculator = SolarPositionCalculator::new().with_epoch(GeometryEpoch::ObservationTime);

    // Vienna, a week of noons in local summer time
    let start = "2024-06-17T12:00:00+02:00".parse::<DateTime<FixedOffset>>()?;
    println!("Vienna, 48.21° N 16.37° E");
    for day in 0..7 {
        let datetime = start + Duration::days(day);
        let input = SolarInput::from_datetime(&datetime, 48.21, 16.37)?;
        let report = calculator.calculate(&input)?;
        println!(
            "{}  sunrise {}  sunset {}  daylight {}  elevation at noon {:.2}°",
            datetime.date_naive(),
            report.sunrise(),
            report.sunset(),
            report.sunlight_duration(),
            report.position().corrected_elevation_angle()
        );
    }
    println!();

    // Same instant, three zones: the position is identical, the local clock times are not
    let utc: DateTime<Utc> = "2024-03-20T09:00:00Z".parse()?;
    let tokyo = utc.with_timezone(&FixedOffset::east_opt(9 * 3600).ok_or("invalid offset")?);
    let new_york = utc.with_timezone(&FixedOffset::west_opt(4 * 3600).ok_or("invalid offset")?);

    println!("Sydney, 33.87° S 151.21° E, at {utc}");
    for (zone, input) in [
        ("UTC", SolarInput::from_datetime(&utc, -33.87, 151.21)?),
        ("UTC+9", SolarInput::from_datetime(&tokyo, -33.87, 151.21)?),
        ("UTC-4", SolarInput::from_datetime(&new_york, -33.87, 151.21)?),
    ] {
        let report = calculator.calculate(&input)?;
        println!(
            "  {zone:<6} azimuth {:>8.3}°  sunrise {}  sunset {}",
            report.position().azimuth(),
            report.sunrise(),
            report.sunset()
        );
    }
    println!();

    // Right now, at Greenwich
    let now = Local::now();
    let input = SolarInput::from_datetime(&now, 51.4779, 0.0)?;
    let position = calculator.position(&input);
    println!(
        "Greenwich now ({}): elevation {:.2}°, azimuth {:.2}°",
        now.format("%Y-%m-%d %H:%M:%S %:z"),
        position.corrected_elevation_angle(),
        position.azimuth()
    );

    Ok(())
}
