use proptest::prelude::*;
use weather_dashboard::{
    data::{
        forecast::{CurrentBlock, DailyBlock, LegacyCurrentBlock, ProviderResponse},
        normalize::normalize,
    },
    domain::{
        projection::{project_hourly, project_ten_days, project_tomorrow},
        weather::{CurrentSource, HourlyForecast, describe, is_night_hour, parse_datetime},
    },
    error::WeatherError,
};

fn weather_code() -> impl Strategy<Value = i64> {
    prop::sample::select(vec![0_i64, 1, 2, 3, 45, 61, 71, 95, 99, 42, 300, -1])
}

fn daily_block(maxima: &[f32], minima: &[f32]) -> DailyBlock {
    DailyBlock {
        time: (0..maxima.len())
            .map(|idx| format!("2026-03-{:02}", idx + 1))
            .collect(),
        temperature_2m_max: maxima.iter().copied().map(Some).collect(),
        temperature_2m_min: minima.iter().copied().map(Some).collect(),
        ..DailyBlock::default()
    }
}

proptest! {
    #[test]
    fn current_block_is_copied_field_for_field(
        temperature in -60.0_f32..60.0,
        apparent in -70.0_f32..60.0,
        humidity in 0.0_f32..100.0,
        wind in 0.0_f32..60.0,
        visibility in 0.0_f32..50_000.0,
        code in weather_code(),
    ) {
        let raw = ProviderResponse {
            current: Some(CurrentBlock {
                time: Some("2026-03-01T12:00".to_string()),
                temperature_2m: Some(temperature),
                apparent_temperature: Some(apparent),
                relative_humidity_2m: Some(humidity),
                wind_speed_10m: Some(wind),
                visibility: Some(visibility),
                weather_code: Some(code),
                ..CurrentBlock::default()
            }),
            ..ProviderResponse::default()
        };

        let bundle = normalize(raw).expect("normalize");
        let current = bundle.current.expect("current");
        prop_assert_eq!(bundle.current_source, CurrentSource::Current);
        prop_assert_eq!(current.temperature_c, temperature);
        prop_assert_eq!(current.apparent_temperature_c, apparent);
        prop_assert_eq!(current.relative_humidity_pct, humidity);
        prop_assert_eq!(current.wind_speed_ms, wind);
        prop_assert_eq!(current.visibility_m, visibility);
        prop_assert_eq!(current.weather_code, code);
    }

    #[test]
    fn legacy_feels_like_equals_temperature(
        temperature in -60.0_f32..60.0,
        code in weather_code(),
    ) {
        let raw = ProviderResponse {
            current_weather: Some(LegacyCurrentBlock {
                temperature: Some(temperature),
                weathercode: Some(code),
                ..LegacyCurrentBlock::default()
            }),
            ..ProviderResponse::default()
        };

        let current = normalize(raw).expect("normalize").current.expect("current");
        prop_assert_eq!(current.apparent_temperature_c, current.temperature_c);
        prop_assert_eq!(current.relative_humidity_pct, 50.0);
        prop_assert_eq!(current.visibility_m, 10_000.0);
    }

    #[test]
    fn daily_only_current_is_midpoint(max in -30.0_f32..40.0, spread in 0.0_f32..20.0) {
        let min = max - spread;
        let raw = ProviderResponse {
            daily: Some(daily_block(&[max], &[min])),
            ..ProviderResponse::default()
        };
        let bundle = normalize(raw).expect("normalize");
        prop_assert_eq!(bundle.current_source, CurrentSource::DailyAggregate);
        let current = bundle.current.expect("current");
        prop_assert!((current.temperature_c - (max + min) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn error_flag_always_short_circuits(reason in "[A-Za-z ]{1,40}") {
        let raw = ProviderResponse {
            error: Some(true),
            reason: Some(reason.clone()),
            daily: Some(daily_block(&[5.0; 10], &[1.0; 10])),
            ..ProviderResponse::default()
        };
        prop_assert_eq!(normalize(raw).map(|_| ()), Err(WeatherError::Provider(reason)));
    }

    #[test]
    fn tomorrow_average_is_rounded_midpoint(max in -30.0_f32..40.0, spread in 0.0_f32..20.0) {
        let min = max - spread;
        let raw = ProviderResponse {
            daily: Some(daily_block(&[0.0, max], &[0.0, min])),
            ..ProviderResponse::default()
        };
        let bundle = normalize(raw).expect("normalize");
        let view = project_tomorrow(&bundle).expect("tomorrow");
        prop_assert_eq!(view.average_c, Some(((max + min) / 2.0).round() as i32));
    }

    #[test]
    fn ten_day_view_needs_exactly_ten_or_more(days in 0_usize..20) {
        let maxima = vec![5.0; days];
        let raw = ProviderResponse {
            daily: Some(daily_block(&maxima, &maxima)),
            ..ProviderResponse::default()
        };
        let bundle = normalize(raw).expect("normalize");
        match project_ten_days(&bundle) {
            Ok(cards) => {
                prop_assert!(days >= 10);
                prop_assert_eq!(cards.len(), 10);
            }
            Err(err) => {
                prop_assert!(days < 10);
                prop_assert_eq!(err, WeatherError::InsufficientForecast { required: 10, available: days });
            }
        }
    }

    #[test]
    fn hourly_window_starts_at_first_hour_not_before_now(
        len in 0_usize..72,
        offset_minutes in -120_i64..(80 * 60),
    ) {
        let start = parse_datetime("2026-03-01T00:00").expect("start");
        let hourly: Vec<HourlyForecast> = (0..len)
            .map(|idx| HourlyForecast {
                time: start + chrono::Duration::hours(idx as i64),
                temperature_c: Some(1.0),
                apparent_temperature_c: None,
                relative_humidity_pct: None,
                weather_code: Some(0),
                visibility_m: None,
                precipitation_mm: None,
            })
            .collect();
        let now = start + chrono::Duration::minutes(offset_minutes);

        let slots: Vec<_> = project_hourly(&hourly, now).collect();
        let expected_start = hourly.iter().position(|h| h.time >= now);
        match expected_start {
            Some(idx) => {
                prop_assert_eq!(slots.len(), (len - idx).min(24));
                prop_assert_eq!(slots[0].time, hourly[idx].time);
            }
            None => prop_assert!(slots.is_empty()),
        }
    }

    #[test]
    fn only_clear_sky_has_a_night_variant(code in weather_code(), hour in 0_u32..24) {
        let day = describe(code, None);
        let at_hour = describe(code, Some(hour));
        if code == 0 && is_night_hour(hour) {
            prop_assert_eq!(at_hour.description, "Clear night");
        } else {
            prop_assert_eq!(at_hour, day);
        }
    }
}
