mod common;

use common::geocode_body;
use weather_dashboard::{
    data::geocode::{GeocodeClient, SUGGESTION_COUNT},
    error::WeatherError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn client_for(server: &MockServer) -> GeocodeClient {
    GeocodeClient::with_base_url(format!("{}/v1/search", server.uri()))
}

#[tokio::test]
async fn suggestions_keep_provider_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Springfield"))
        .and(query_param("count", "8"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body(&[
            ("Springfield", 39.799, -89.644, "United States"),
            ("Springfield", 44.046, -123.022, "United States"),
        ])))
        .mount(&server)
        .await;

    let places = client_for(&server)
        .search("Springfield", SUGGESTION_COUNT)
        .await
        .expect("search");

    assert_eq!(places.len(), 2);
    assert!((places[0].coordinates.latitude - 39.799).abs() < 1e-9);
    assert!((places[1].coordinates.longitude + 123.022).abs() < 1e-9);
    assert_eq!(places[0].label(), "Springfield, United States");
}

#[tokio::test]
async fn language_hint_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("language", "ru"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(geocode_body(&[("Москва", 55.75, 37.62, "Россия")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let place = client_for(&server)
        .with_language("ru")
        .resolve("Москва")
        .await
        .expect("resolve");
    assert_eq!(place.name, "Москва");
}

#[tokio::test]
async fn empty_results_are_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.search("Atlantis", 8).await, Ok(Vec::new()));
    assert_eq!(
        client.resolve("Atlantis").await,
        Err(WeatherError::NoSearchResults("Atlantis".to_string()))
    );
}

#[tokio::test]
async fn http_failure_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).resolve("Paris").await;
    assert!(matches!(result, Err(WeatherError::Network(_))));
}
