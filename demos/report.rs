//! Prints a full NOAA solar report for one observer and instant.
//!
//! Usage: `cargo run --example report -- [LAT LON UTC_OFFSET YYYY-MM-DD HH:MM:SS]`
//! Without arguments the report is printed for Istanbul on 2016-01-01 12:00:00 (UTC+2).
//! Set `RUST_LOG=debug` (or `trace`) to see the pipeline stages.

use noaa_solar::{
    CalendarDate, GeometryEpoch, LocalTime, Observer, SolarInput, SolarPositionCalculator,
    SolarReport, UtcOffset,
};
use std::error::Error;

fn parse_input(args: &[String]) -> Result<SolarInput, Box<dyn Error>> {
    if args.is_empty() {
        return Ok(SolarInput::new(
            Observer::new(41.0, 29.0)?,
            UtcOffset::from_hours(2.0)?,
            CalendarDate::new(2016, 1, 1)?,
            LocalTime::new(12, 0, 0.0)?,
        ));
    }

    let [lat, lon, offset, date, time] = args else {
        return Err("expected LAT LON UTC_OFFSET YYYY-MM-DD HH:MM:SS".into());
    };

    let date: Vec<&str> = date.split('-').collect();
    let time: Vec<&str> = time.split(':').collect();
    let ([year, month, day], [hour, minute, second]) = (date.as_slice(), time.as_slice()) else {
        return Err("expected a date as YYYY-MM-DD and a time as HH:MM:SS".into());
    };

    Ok(SolarInput::new(
        Observer::new(lat.parse()?, lon.parse()?)?,
        UtcOffset::from_hours(offset.parse()?)?,
        CalendarDate::new(year.parse()?, month.parse()?, day.parse()?)?,
        LocalTime::new(hour.parse()?, minute.parse()?, second.parse()?)?,
    ))
}

fn print_report(title: &str, report: &SolarReport) {
    let input = report.input();
    let geometry = report.geometry();
    let timing = report.timing();
    let position = report.position();

    println!("=== {title} ===");
    println!();
    println!("--- Input ---");
    println!("{:<28}{:>16.4}°", "Latitude", input.observer().latitude());
    println!("{:<28}{:>16.4}°", "Longitude", input.observer().longitude());
    println!("{:<28}{:>16.2} h", "UTC offset", input.utc_offset().hours());
    println!(
        "{:<28}{:>6}{:04}-{:02}-{:02}",
        "Date",
        "",
        input.date().year(),
        input.date().month(),
        input.date().day()
    );
    println!(
        "{:<28}{:>4}{:02}:{:02}:{:06.3}",
        "Time",
        "",
        input.time().hour(),
        input.time().minute(),
        input.time().second()
    );
    println!();

    println!("--- Julian date ---");
    println!("{:<28}{:>16.6}", "Julian Day", report.moment().julian_day());
    println!("{:<28}{:>16.10}", "Julian Century", report.moment().julian_century());
    println!();

    println!("--- Solar geometry ---");
    let rows = [
        ("Geom mean longitude", geometry.geometric_mean_longitude()),
        ("Geom mean anomaly", geometry.geometric_mean_anomaly()),
        ("Eccentricity", geometry.eccentricity()),
        ("Equation of center", geometry.equation_of_center()),
        ("True longitude", geometry.true_longitude()),
        ("True anomaly", geometry.true_anomaly()),
        ("Radius vector (AU)", geometry.radius_vector()),
        ("Apparent longitude", geometry.apparent_longitude()),
        ("Mean obliquity", geometry.mean_obliquity()),
        ("Obliquity correction", geometry.obliquity_correction()),
        ("Right ascension", geometry.right_ascension()),
        ("Declination", geometry.declination()),
    ];
    for (label, value) in rows {
        println!("{label:<28}{value:>16.6}");
    }
    println!();

    println!("--- Day ---");
    println!("{:<28}{:>16.4} min", "Equation of time", timing.equation_of_time());
    println!("{:<28}{:>16.4}°", "Hour angle sunrise", timing.hour_angle_sunrise());
    println!("{:<28}{:>16.4}°", "Hour angle sunset", timing.hour_angle_sunset());
    println!("{:<28}{:>16}", "Solar noon", report.solar_noon().to_string());
    println!("{:<28}{:>16}", "Sunrise", report.sunrise().to_string());
    println!("{:<28}{:>16}", "Sunset", report.sunset().to_string());
    println!("{:<28}{:>16}", "Sunlight duration", report.sunlight_duration().to_string());
    println!("{:<28}{:>16}", "Night duration", report.night_duration().to_string());
    println!();

    println!("--- Position ---");
    println!("{:<28}{:>16.4} min", "True solar time", position.true_solar_time());
    println!("{:<28}{:>16.4}°", "Hour angle", position.hour_angle());
    println!("{:<28}{:>16.4}°", "Zenith", position.zenith_angle());
    println!("{:<28}{:>16.4}°", "Elevation", position.elevation_angle());
    println!("{:<28}{:>16.6}°", "Refraction", position.refraction());
    println!(
        "{:<28}{:>16.4}°",
        "Corrected elevation",
        position.corrected_elevation_angle()
    );
    println!("{:<28}{:>16.4}°", "Azimuth", position.azimuth());
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = parse_input(&args)?;

    let report = SolarPositionCalculator::new().calculate(&input)?;
    print_report("Geometry at 0h UT of the date", &report);

    let report = SolarPositionCalculator::new()
        .with_epoch(GeometryEpoch::ObservationTime)
        .calculate(&input)?;
    print_report("Geometry at the observation time", &report);

    Ok(())
}
