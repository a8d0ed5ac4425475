use chrono::{DateTime, Duration, FixedOffset};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use noaa_solar::{
    CalendarDate, GeometryEpoch, Horizon, LocalTime, Observer, SolarInput,
    SolarPositionCalculator, UtcOffset,
};
use std::hint::black_box;

fn istanbul() -> SolarInput {
    SolarInput::new(
        Observer::new(41.0, 29.0).unwrap(),
        UtcOffset::from_hours(2.0).unwrap(),
        CalendarDate::new(2016, 1, 1).unwrap(),
        LocalTime::new(12, 0, 0.0).unwrap(),
    )
}

fn benchmark_single_calculation(c: &mut Criterion) {
    let input = istanbul();
    let calculator = SolarPositionCalculator::new();

    c.bench_function("report_single", |b| {
        b.iter(|| calculator.calculate(black_box(&input)).unwrap())
    });

    c.bench_function("position_single", |b| {
        b.iter(|| calculator.position(black_box(&input)))
    });

    c.bench_function("sun_events_single", |b| {
        b.iter(|| calculator.sun_events(black_box(&input)).unwrap())
    });
}

fn benchmark_yearly_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("yearly_sweep");

    let start = "2024-01-01T12:00:00+01:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let inputs: Vec<SolarInput> = (0..366)
        .map(|day| SolarInput::from_datetime(&(start + Duration::days(day)), 52.52, 13.405).unwrap())
        .collect();

    group.throughput(Throughput::Elements(inputs.len() as u64));

    for (name, calculator) in [
        ("start_of_date", SolarPositionCalculator::new()),
        (
            "observation_time",
            SolarPositionCalculator::new().with_epoch(GeometryEpoch::ObservationTime),
        ),
    ] {
        group.bench_with_input(BenchmarkId::new("report", name), &calculator, |b, calc| {
            b.iter(|| {
                for input in &inputs {
                    let _report = calc.calculate(black_box(input)).unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep");

    let date = CalendarDate::new(2023, 6, 21).unwrap();
    let time = LocalTime::new(12, 0, 0.0).unwrap();

    for &grid_size in &[30, 70, 150] {
        let count = grid_size * grid_size;
        group.throughput(Throughput::Elements(count as u64));

        // Latitudes up to 75° include polar days, which sun_events reports without failing
        let inputs: Vec<SolarInput> = (0..grid_size)
            .flat_map(|i| {
                (0..grid_size).map(move |j| {
                    let lat = -75.0 + 150.0 * (i as f64) / (grid_size as f64);
                    let lon = -180.0 + 360.0 * (j as f64) / (grid_size as f64);
                    SolarInput::new(Observer::new(lat, lon).unwrap(), UtcOffset::UTC, date, time)
                })
            })
            .collect();

        let horizons = [
            Horizon::SunriseSunset,
            Horizon::CivilTwilight,
            Horizon::NauticalTwilight,
            Horizon::AstronomicalTwilight,
        ];

        group.bench_with_input(
            BenchmarkId::new("sun_events", format!("{grid_size}x{grid_size}")),
            &count,
            |b, _| {
                let calculator = SolarPositionCalculator::new();
                b.iter(|| {
                    for input in &inputs {
                        let _events = calculator.sun_events(black_box(input)).unwrap();
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sun_events_multiple", format!("{grid_size}x{grid_size}")),
            &count,
            |b, _| {
                let calculator = SolarPositionCalculator::new();
                b.iter(|| {
                    for input in &inputs {
                        for result in calculator.sun_events_multiple(black_box(input), horizons) {
                            let _events = result.unwrap();
                        }
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_yearly_sweep,
    benchmark_coordinate_sweep
);
criterion_main!(benches);
