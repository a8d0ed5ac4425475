//! Sunrise, noon and sunset across latitudes and twilight horizons on both solstices.

use noaa_solar::{
    CalendarDate, DayFraction, Horizon, LocalTime, Observer, SolarInput, SolarPositionCalculator,
    SunEvents, UtcOffset,
};

#[derive(Debug)]
struct Place {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    utc_offset: f64,
}

fn describe(fraction: DayFraction) -> String {
    match fraction.day_and_clock() {
        (0, clock) => clock.to_string(),
        (offset, clock) => format!("{clock} ({offset:+} day)"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let places = [
        Place {
            name: "Longyearbyen, Svalbard",
            latitude: 78.22,
            longitude: 15.65,
            utc_offset: 1.0,
        },
        Place {
            name: "Tromsø, Norway",
            latitude: 69.65,
            longitude: 18.96,
            utc_offset: 1.0,
        },
        Place {
            name: "Reykjavík, Iceland",
            latitude: 64.15,
            longitude: -21.94,
            utc_offset: 0.0,
        },
        Place {
            name: "Singapore",
            latitude: 1.28,
            longitude: 103.83,
            utc_offset: 8.0,
        },
        Place {
            name: "McMurdo Station, Antarctica",
            latitude: -77.85,
            longitude: 166.67,
            utc_offset: 12.0,
        },
    ];

    let horizons = [
        Horizon::SunriseSunset,
        Horizon::CivilTwilight,
        Horizon::NauticalTwilight,
        Horizon::AstronomicalTwilight,
    ];

    let calculator = SolarPositionCalculator::new();

    for (month, label) in [(6, "June solstice"), (12, "December solstice")] {
        println!("##### {label} 2024 #####");
        println!();

        for place in &places {
            let input = SolarInput::new(
                Observer::new(place.latitude, place.longitude)?,
                UtcOffset::from_hours(place.utc_offset)?,
                CalendarDate::new(2024, month, 21)?,
                LocalTime::MIDNIGHT,
            );

            println!(
                "=== {} ({:.2}°, {:.2}°) ===",
                place.name, place.latitude, place.longitude
            );

            for result in calculator.sun_events_multiple(&input, horizons) {
                let (horizon, events) = result?;
                let line = match events {
                    SunEvents::RegularDay {
                        sunrise,
                        solar_noon,
                        sunset,
                    } => format!(
                        "{} - {} - {}",
                        describe(sunrise),
                        describe(solar_noon),
                        describe(sunset)
                    ),
                    SunEvents::AllDay { solar_noon } => {
                        format!("above the horizon all day (noon {})", describe(solar_noon))
                    }
                    SunEvents::AllNight { solar_noon } => {
                        format!("below the horizon all day (noon {})", describe(solar_noon))
                    }
                };
                println!("  {:<22}{line}", format!("{horizon:?}"));
            }

            let position = calculator.position(&input);
            println!(
                "  at local midnight: elevation {:.2}°, azimuth {:.2}°",
                position.corrected_elevation_angle(),
                position.azimuth()
            );
            println!();
        }
    }

    Ok(())
}
