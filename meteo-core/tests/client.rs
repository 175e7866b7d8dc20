//! Integration tests for `WeatherClient` using wiremock HTTP mocks.

use meteo_core::{LocationQuery, WeatherClient, WeatherError};
use wiremock::matchers::{any, method, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> WeatherClient {
    WeatherClient::with_base_url(Some("test-key".to_string()), base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn place_lookup_returns_payload() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "name": "Paris", "main": { "temp": 15 } });

    Mock::given(method("GET"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "fr"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let weather = client
        .get_current(&LocationQuery::Place("Paris".to_string()))
        .await
        .expect("lookup should succeed");

    assert_eq!(weather.name, "Paris");
    assert_eq!(weather.main.temp, 15.0);
}

#[tokio::test]
async fn coordinate_lookup_sends_lat_lon_and_no_q() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "name": "Paris", "main": { "temp": 15 } });

    Mock::given(method("GET"))
        .and(query_param("lat", "48.85"))
        .and(query_param("lon", "2.35"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = LocationQuery::Coordinates { latitude: 48.85, longitude: 2.35 };
    let weather = client.get_current(&query).await.expect("lookup should succeed");

    assert_eq!(weather.name, "Paris");
}

#[tokio::test]
async fn full_payload_is_decoded() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "name": "Brest",
        "sys": { "country": "FR", "sunrise": 1755234000, "sunset": 1755286800 },
        "weather": [ { "description": "couvert", "icon": "04d" } ],
        "main": {
            "temp": 14.2, "feels_like": 13.6, "temp_min": 13.0, "temp_max": 15.1,
            "pressure": 1008, "humidity": 91
        },
        "wind": { "speed": 8.1, "deg": 250, "gust": 13.4 },
        "visibility": 9000,
        "rain": { "1h": 0.6 }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let weather = client
        .get_current(&LocationQuery::Place("Brest".to_string()))
        .await
        .expect("lookup should succeed");

    assert_eq!(weather.condition(), Some("couvert"));
    assert_eq!(weather.sys.country.as_deref(), Some("FR"));
    assert_eq!(weather.wind.gust, Some(13.4));
    assert_eq!(weather.rain.and_then(|r| r.one_hour), Some(0.6));
}

#[tokio::test]
async fn upstream_error_surfaces_message_field() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "cod": "404", "message": "city not found" });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_current(&LocationQuery::Place("Nowhere".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Api { .. }));
    assert_eq!(err.to_string(), "city not found");
}

#[tokio::test]
async fn upstream_error_without_message_falls_back_to_generic_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_current(&LocationQuery::Place("Paris".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API error.");
}

#[tokio::test]
async fn missing_api_key_fails_without_network_io() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url(None, &server.uri()).expect("client construction");
    let err = client
        .get_current(&LocationQuery::Place("Paris".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::MissingApiKey));

    let requests = server.received_requests().await.expect("request recording enabled");
    assert!(requests.is_empty(), "no request may be sent without an API key");
}

#[tokio::test]
async fn empty_api_key_is_treated_as_missing() {
    let server = MockServer::start().await;

    let client = WeatherClient::with_base_url(Some(String::new()), &server.uri())
        .expect("client construction");
    let err = client
        .get_current(&LocationQuery::Place("Paris".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::MissingApiKey));

    let requests = server.received_requests().await.expect("request recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn connection_failure_is_reported_not_thrown() {
    // Nothing listens on this port; the connection is refused immediately.
    let client = test_client("http://127.0.0.1:9");
    let err = client
        .get_current(&LocationQuery::Place("Paris".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Http(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_current(&LocationQuery::Place("Paris".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Decode(_)));
}
