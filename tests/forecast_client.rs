mod common;

use common::{current_payload, legacy_payload};
use weather_dashboard::{
    data::{forecast::ForecastClient, normalize::normalize},
    domain::{
        projection::{Period, Projection, project},
        weather::{Coordinates, CurrentSource},
    },
    error::WeatherError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn moscow() -> Coordinates {
    Coordinates::new(55.7558, 37.6173).expect("valid coordinates")
}

fn client_for(server: &MockServer) -> ForecastClient {
    ForecastClient::with_base_url(format!("{}/v1/forecast", server.uri()))
}

#[tokio::test]
async fn sends_expected_query_and_normalizes_current_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "55.7558"))
        .and(query_param("longitude", "37.6173"))
        .and(query_param("wind_speed_unit", "ms"))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload(6.5)))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server).fetch(moscow()).await.expect("fetch");
    let bundle = normalize(raw).expect("normalize");

    assert_eq!(bundle.current_source, CurrentSource::Current);
    assert_eq!(bundle.utc_offset_seconds, 10_800);
    assert_eq!(bundle.daily.len(), 10);
    assert_eq!(bundle.hourly.len(), 24);
    let current = bundle.current.as_ref().expect("current");
    assert!((current.temperature_c - 6.5).abs() < f32::EPSILON);
    assert_eq!(current.pressure_hpa, Some(1015.0));

    assert!(matches!(
        project(&bundle, Period::TenDays),
        Ok(Projection::TenDays(cards)) if cards.len() == 10
    ));
}

#[tokio::test]
async fn legacy_shape_fills_gaps_from_hourly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(legacy_payload(-4.0)))
        .mount(&server)
        .await;

    let raw = client_for(&server).fetch(moscow()).await.expect("fetch");
    let bundle = normalize(raw).expect("normalize");
    let current = bundle.current.expect("current");

    assert_eq!(bundle.current_source, CurrentSource::LegacyCurrentWeather);
    assert!((current.apparent_temperature_c - current.temperature_c).abs() < f32::EPSILON);
    assert!((current.relative_humidity_pct - 65.0).abs() < f32::EPSILON);
    assert!((current.visibility_m - 12_000.0).abs() < f32::EPSILON);
    assert_eq!(current.weather_code, 61);
}

#[tokio::test]
async fn provider_error_body_is_returned_for_normalizer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Cannot initialize WeatherVariable from invalid String value"
        })))
        .mount(&server)
        .await;

    let raw = client_for(&server).fetch(moscow()).await.expect("error payload");
    assert!(raw.has_error());
    assert_eq!(
        normalize(raw).map(|_| ()),
        Err(WeatherError::Provider(
            "Cannot initialize WeatherVariable from invalid String value".to_string()
        ))
    );
}

#[tokio::test]
async fn server_failure_without_body_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch(moscow()).await;
    assert!(matches!(result, Err(WeatherError::Network(_))));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let client = ForecastClient::with_base_url("http://127.0.0.1:9/v1/forecast");
    let result = client.fetch(moscow()).await;
    assert!(matches!(result, Err(WeatherError::Network(_))));
}
