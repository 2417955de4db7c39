//! Property-based tests for the view-model mapper
//!
//! These tests use proptest to verify the rounding, conversion and
//! forecast-selection invariants across many random inputs.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use integration_openweather::{
    RawCity, RawCondition, RawCurrentConditions, RawForecastEntry, RawForecastResponse, RawMain,
    RawSys, RawWind, to_current_weather, to_forecast_days, to_forecast_report,
};
use proptest::prelude::*;

// 2024-05-01 00:00:00 UTC
const DAY_ZERO: i64 = 1_714_521_600;
const THREE_HOURS: i64 = 3 * 3600;
const ONE_DAY: i64 = 24 * 3600;

fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

fn condition() -> RawCondition {
    RawCondition {
        main: "Rain".to_string(),
        description: "light rain".to_string(),
        icon: "10d".to_string(),
    }
}

fn main_strategy() -> impl Strategy<Value = RawMain> {
    (
        -60.0f64..60.0,
        -60.0f64..60.0,
        -60.0f64..60.0,
        -60.0f64..60.0,
        900u32..1100,
        0u8..=100,
    )
        .prop_map(|(temp, feels_like, temp_min, temp_max, pressure, humidity)| RawMain {
            temp,
            feels_like,
            temp_min,
            temp_max,
            pressure,
            humidity,
        })
}

fn current_strategy() -> impl Strategy<Value = RawCurrentConditions> {
    (
        main_strategy(),
        0.0f64..60.0,
        0u16..360,
        proptest::option::of(0u32..50_000),
        proptest::option::of(-43_200i32..=50_400),
    )
        .prop_map(|(main, speed, deg, visibility, timezone)| RawCurrentConditions {
            name: "London".to_string(),
            dt: DAY_ZERO + 36_000,
            main,
            condition: condition(),
            wind: RawWind { speed, deg },
            visibility,
            sys: RawSys {
                country: "GB".to_string(),
                sunrise: DAY_ZERO + 16_200,
                sunset: DAY_ZERO + 69_330,
            },
            timezone,
        })
}

fn entry(dt: i64, temp: f64) -> RawForecastEntry {
    RawForecastEntry {
        dt,
        main: RawMain {
            temp,
            feels_like: temp,
            temp_min: temp - 1.0,
            temp_max: temp + 1.0,
            pressure: 1010,
            humidity: 60,
        },
        condition: condition(),
        wind: RawWind {
            speed: 2.5,
            deg: 90,
        },
    }
}

// nearest integer, halves towards positive infinity
#[allow(clippy::cast_possible_truncation)]
fn rounded(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

proptest! {
    #[test]
    fn temperatures_are_rounded(raw in current_strategy()) {
        let view = to_current_weather(&raw, generated_at());
        prop_assert_eq!(view.temperature.current, rounded(raw.main.temp));
        prop_assert_eq!(view.temperature.feels_like, rounded(raw.main.feels_like));
        prop_assert_eq!(view.temperature.min, rounded(raw.main.temp_min));
        prop_assert_eq!(view.temperature.max, rounded(raw.main.temp_max));
    }

    #[test]
    fn wind_is_converted_to_kmh(raw in current_strategy()) {
        let view = to_current_weather(&raw, generated_at());
        prop_assert_eq!(view.wind.speed, rounded(raw.wind.speed * 3.6));
        prop_assert_eq!(view.wind.direction, raw.wind.deg);
    }

    #[test]
    fn visibility_is_converted_or_absent(raw in current_strategy()) {
        let view = to_current_weather(&raw, generated_at());
        match raw.visibility {
            None => prop_assert!(view.visibility.is_none()),
            Some(meters) => {
                let expected = (f64::from(meters) / 1000.0).round();
                prop_assert_eq!(view.visibility.map(f64::from), Some(expected));
            }
        }
    }

    #[test]
    fn mapping_is_idempotent(raw in current_strategy()) {
        let first = to_current_weather(&raw, generated_at());
        let second = to_current_weather(&raw, generated_at());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn forecast_mapping_is_idempotent(
        steps in 0i64..48,
        temps in proptest::collection::vec(-30.0f64..40.0, 48),
    ) {
        let entries: Vec<RawForecastEntry> = (0..steps)
            .map(|i| entry(DAY_ZERO + i * THREE_HOURS, temps[usize::try_from(i).unwrap_or(0)]))
            .collect();

        prop_assert_eq!(to_forecast_days(&entries), to_forecast_days(&entries));

        let raw = RawForecastResponse {
            list: entries,
            city: RawCity {
                name: "Oslo".to_string(),
                country: "NO".to_string(),
            },
        };
        prop_assert_eq!(
            to_forecast_report(&raw, generated_at()),
            to_forecast_report(&raw, generated_at())
        );
    }

    #[test]
    fn forecast_keeps_noon_entries_capped_at_five(
        days in 1i64..8,
        temps in proptest::collection::vec(-30.0f64..40.0, 64),
        reverse in any::<bool>(),
    ) {
        let mut entries: Vec<RawForecastEntry> = (0..days * 8)
            .map(|i| {
                let temp = temps[usize::try_from(i).unwrap_or(0) % temps.len()];
                entry(DAY_ZERO + i * THREE_HOURS, temp)
            })
            .collect();
        if reverse {
            entries.reverse();
        }

        let forecast = to_forecast_days(&entries);

        let expected_len = usize::try_from(days.min(5)).unwrap_or(5);
        prop_assert_eq!(forecast.len(), expected_len);
        for pair in forecast.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
        for (offset, day) in forecast.iter().enumerate() {
            let offset = i64::try_from(offset).unwrap_or(0);
            let noon = DAY_ZERO + offset * ONE_DAY + 12 * 3600;
            let expected = DateTime::from_timestamp(noon, 0).unwrap();
            prop_assert_eq!(day.date, expected.date_naive());
        }
    }

    #[test]
    fn forecast_ignores_off_hour_timestamps(minutes in 1i64..180) {
        let noon = DAY_ZERO + 12 * 3600;
        let entries = vec![entry(noon + minutes * 60, 10.0), entry(noon - minutes * 60, 12.0)];
        prop_assert!(to_forecast_days(&entries).is_empty());
    }
}

#[test]
fn six_days_of_three_hour_steps_yield_five_noons() {
    let entries: Vec<RawForecastEntry> = (0..48)
        .map(|i| entry(DAY_ZERO + i * THREE_HOURS, 10.0))
        .collect();

    let forecast = to_forecast_days(&entries);

    let noon_count = entries
        .iter()
        .filter_map(|e| DateTime::from_timestamp(e.dt, 0))
        .filter(|t| t.hour() == 12)
        .count();
    assert_eq!(noon_count, 6);
    assert_eq!(forecast.len(), 5);
    assert_eq!(forecast[0].day, "Wed");
    assert_eq!(forecast[4].day, "Sun");
}

#[test]
fn three_noon_entries_are_not_padded() {
    let raw = RawForecastResponse {
        list: (0..24)
            .map(|i| entry(DAY_ZERO + i * THREE_HOURS, 20.0))
            .collect(),
        city: RawCity {
            name: "Madrid".to_string(),
            country: "ES".to_string(),
        },
    };

    let report = to_forecast_report(&raw, generated_at());
    assert_eq!(report.forecast.len(), 3);
    assert_eq!(report.city, "Madrid");
}
