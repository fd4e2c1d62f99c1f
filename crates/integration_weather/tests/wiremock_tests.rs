//! Integration tests for the Open-Meteo client using wiremock
//!
//! These tests verify request shapes and response handling against a mock
//! HTTP server standing in for the three Open-Meteo hosts.

use chrono::NaiveDate;
use domain::Coordinate;
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

/// Current-conditions response as returned by `/forecast?current=...`
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 21.0,
        "longitude": 105.875,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 25200,
        "timezone": "Asia/Bangkok",
        "timezone_abbreviation": "+07",
        "elevation": 13.0,
        "current_units": {
            "time": "iso8601",
            "temperature_2m": "°C"
        },
        "current": {
            "time": "2024-06-01T14:15",
            "interval": 900,
            "temperature_2m": 33.4,
            "apparent_temperature": 39.1,
            "relative_humidity_2m": 62,
            "precipitation": 0.1,
            "weather_code": 80,
            "cloud_cover": 75,
            "wind_speed_10m": 9.7,
            "wind_direction_10m": 157,
            "wind_gusts_10m": 21.6,
            "pressure_msl": 1002.8,
            "uv_index": 8.35,
            "visibility": 24140.0,
            "is_day": 1
        }
    })
}

/// Daily response for `days` consecutive days starting 2024-06-01
fn sample_daily_response(days: usize) -> serde_json::Value {
    let time: Vec<String> = (1..=days).map(|d| format!("2024-06-{d:02}")).collect();
    let codes: Vec<i32> = (0..days).map(|d| [0, 2, 61, 95][d % 4]).collect();
    let max: Vec<f64> = (0..days).map(|d| 30.0 + d as f64).collect();
    let min: Vec<f64> = (0..days).map(|d| 22.0 + d as f64).collect();

    serde_json::json!({
        "latitude": 21.0,
        "longitude": 105.875,
        "utc_offset_seconds": 25200,
        "daily_units": { "time": "iso8601" },
        "daily": {
            "time": time,
            "weather_code": codes,
            "temperature_2m_max": max,
            "temperature_2m_min": min
        }
    })
}

fn sample_air_quality_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 21.0,
        "longitude": 105.8,
        "utc_offset_seconds": 25200,
        "current": {
            "time": "2024-06-01T14:00",
            "interval": 3600,
            "us_aqi": 158,
            "pm10": 81.2,
            "pm2_5": 66.5,
            "carbon_monoxide": 912.0,
            "nitrogen_dioxide": 28.4,
            "sulphur_dioxide": 14.1,
            "ozone": 52.0
        }
    })
}

fn sample_geocoding_response() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 1_581_130,
                "name": "Hanoi",
                "latitude": 21.0245,
                "longitude": 105.84117,
                "country_code": "VN",
                "admin1": "Hanoi",
                "country": "Vietnam"
            }
        ],
        "generationtime_ms": 0.7
    })
}

/// Create a test client pointing all three hosts at the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        geocoding_url: mock_server.uri(),
        air_quality_url: mock_server.uri(),
        archive_url: mock_server.uri(),
        timeout_secs: 5,
        language: "en".to_string(),
    };
    #[allow(clippy::expect_used)]
    OpenMeteoClient::new(config).expect("Failed to create client")
}

#[allow(clippy::expect_used)]
fn hanoi() -> Coordinate {
    Coordinate::new(21.0245, 105.84117).expect("valid coordinate")
}

// ============================================================================
// Geocoding
// ============================================================================

#[tokio::test]
async fn test_geocode_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Hanoi"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .and(query_param("countryCode", "VN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocoding_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let location = client
        .geocode("Hanoi", Some("vn"))
        .await
        .expect("location resolved");

    assert_eq!(location.display_name(), "Hanoi, Hanoi, Vietnam");
    assert!((location.coordinate().latitude() - 21.0245).abs() < 1e-9);
    assert!((location.coordinate().longitude() - 105.84117).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_without_country_omits_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param_is_missing("countryCode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocoding_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.geocode("Hanoi", None).await.is_ok());
}

#[tokio::test]
async fn test_geocode_empty_results_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.geocode("Atlantis", None).await;
    assert!(matches!(result, Err(WeatherError::NotFound(name)) if name == "Atlantis"));
}

#[tokio::test]
async fn test_geocode_absent_results_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "generationtime_ms": 0.3 })),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.geocode("Nowhere", None).await,
        Err(WeatherError::NotFound(_))
    ));
}

// ============================================================================
// Current conditions
// ============================================================================

#[tokio::test]
async fn test_current_conditions_exact_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "21.0245"))
        .and(query_param("longitude", "105.84117"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let current = client.current(&hanoi()).await.expect("current conditions");

    assert!((current.temperature - 33.4).abs() < f64::EPSILON);
    assert!((current.feels_like - 39.1).abs() < f64::EPSILON);
    assert!((current.humidity - 62.0).abs() < f64::EPSILON);
    assert!((current.precipitation - 0.1).abs() < f64::EPSILON);
    assert_eq!(current.weather_code.code(), 80);
    assert!((current.cloud_cover - 75.0).abs() < f64::EPSILON);
    assert!((current.wind_speed - 9.7).abs() < f64::EPSILON);
    assert!((current.wind_direction - 157.0).abs() < f64::EPSILON);
    assert!((current.wind_gusts - 21.6).abs() < f64::EPSILON);
    assert!((current.pressure - 1002.8).abs() < f64::EPSILON);
    assert!((current.uv_index - 8.35).abs() < f64::EPSILON);
    assert!((current.visibility - 24140.0).abs() < f64::EPSILON);
    assert!(current.is_day);
    assert_eq!(
        current.observed_at.format("%Y-%m-%d %H:%M").to_string(),
        "2024-06-01 14:15"
    );
    assert_eq!(current.utc_offset_seconds, 25200);
}

#[tokio::test]
async fn test_current_requests_all_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param(
            "current",
            "temperature_2m,apparent_temperature,relative_humidity_2m,precipitation,\
             weather_code,cloud_cover,wind_speed_10m,wind_direction_10m,wind_gusts_10m,\
             pressure_msl,uv_index,visibility,is_day"
                .replace(' ', ""),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.current(&hanoi()).await.is_ok());
}

#[tokio::test]
async fn test_current_missing_section() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "latitude": 21.0, "longitude": 105.8 })),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.current(&hanoi()).await,
        Err(WeatherError::MissingData(section)) if section == "current"
    ));
}

#[tokio::test]
async fn test_current_missing_field_fails_fast() {
    let mock_server = MockServer::start().await;

    let mut body = sample_current_response();
    if let Some(current) = body["current"].as_object_mut() {
        current.remove("visibility");
    }

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.current(&hanoi()).await,
        Err(WeatherError::MissingData(field)) if field == "current.visibility"
    ));
}

// ============================================================================
// Daily forecast
// ============================================================================

#[tokio::test]
async fn test_daily_forecast_seven_days_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("forecast_days", "7"))
        .and(query_param("daily", "weather_code,temperature_2m_max,temperature_2m_min"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_daily_response(7)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let forecast = client
        .daily_forecast(&hanoi(), 7)
        .await
        .expect("forecast");

    assert_eq!(forecast.len(), 7);
    assert!(forecast.days.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(forecast.days[0].date.to_string(), "2024-06-01");
    assert_eq!(forecast.days[3].weather_code.code(), 95);
    assert!((forecast.days[6].temperature_max - 36.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_daily_forecast_clamps_days_in_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("forecast_days", "16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_daily_response(16)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let forecast = client
        .daily_forecast(&hanoi(), 200)
        .await
        .expect("forecast");
    assert_eq!(forecast.len(), 16);
}

#[tokio::test]
async fn test_daily_forecast_missing_section() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "latitude": 21.0 })),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.daily_forecast(&hanoi(), 3).await,
        Err(WeatherError::MissingData(section)) if section == "daily"
    ));
}

// ============================================================================
// Air quality
// ============================================================================

#[tokio::test]
async fn test_air_quality_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/air-quality"))
        .and(query_param(
            "current",
            "us_aqi,pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_air_quality_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let air = client.air_quality(&hanoi()).await.expect("air quality");

    assert_eq!(air.aqi, 158);
    assert!((air.pm2_5 - 66.5).abs() < f64::EPSILON);
    assert!((air.sulphur_dioxide - 14.1).abs() < f64::EPSILON);
    assert_eq!(air.category(), domain::AqiCategory::Unhealthy);
}

#[tokio::test]
async fn test_air_quality_missing_current() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/air-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.air_quality(&hanoi()).await,
        Err(WeatherError::MissingData(_))
    ));
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.current(&hanoi()).await,
        Err(WeatherError::RateLimitExceeded)
    ));
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.daily_forecast(&hanoi(), 3).await,
        Err(WeatherError::ServiceUnavailable(_))
    ));
}

#[tokio::test]
async fn test_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Parameter count must be between 1 and 100"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.geocode("Hanoi", None).await,
        Err(WeatherError::RequestFailed(_))
    ));
}

#[tokio::test]
async fn test_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.current(&hanoi()).await,
        Err(WeatherError::ParseError(_))
    ));
}

#[tokio::test]
async fn test_unsupported_operations_hit_no_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(matches!(
        client.hourly_forecast(&hanoi(), 24).await,
        Err(WeatherError::Unsupported(_))
    ));
    assert!(matches!(
        client.weather_alerts(&hanoi()).await,
        Err(WeatherError::Unsupported(_))
    ));
}

/// Archive response with the last two days not yet filled in
fn sample_archive_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 21.0,
        "longitude": 105.875,
        "utc_offset_seconds": 25200,
        "daily_units": {
            "time": "iso8601",
            "precipitation_sum": "mm"
        },
        "daily": {
            "time": ["2024-05-27", "2024-05-28", "2024-05-29", "2024-05-30", "2024-05-31"],
            "weather_code": [63, 3, 95, null, null],
            "temperature_2m_max": [31.2, 34.0, 33.1, null, null],
            "temperature_2m_min": [25.0, 26.4, 26.0, null, null],
            "precipitation_sum": [18.3, 0.0, 7.9, null, null],
            "wind_speed_10m_max": [15.1, 11.2, 28.8, null, null]
        }
    })
}

#[tokio::test]
async fn test_historical_requests_thirty_day_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/archive"))
        .and(query_param("start_date", "2024-05-01"))
        .and(query_param("end_date", "2024-05-31"))
        .and(query_param(
            "daily",
            "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max",
        ))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_archive_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let end = NaiveDate::from_ymd_opt(2024, 5, 31).expect("valid date");
    let history = client.historical(&hanoi(), end).await.expect("history");

    assert_eq!(history.len(), 3);
    assert_eq!(history.start.to_string(), "2024-05-01");
    assert_eq!(history.days[2].weather_code.code(), 95);
    assert!((history.total_precipitation() - 26.2).abs() < 1e-9);
}

#[tokio::test]
async fn test_historical_missing_section() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 21.0,
            "longitude": 105.875
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let end = NaiveDate::from_ymd_opt(2024, 5, 31).expect("valid date");
    assert!(matches!(
        client.historical(&hanoi(), end).await,
        Err(WeatherError::MissingData(_))
    ));
}

#[tokio::test]
async fn test_historical_out_of_range_is_request_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/archive"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Parameter 'end_date' is out of allowed range"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let end = NaiveDate::from_ymd_opt(2100, 1, 1).expect("valid date");
    assert!(matches!(
        client.historical(&hanoi(), end).await,
        Err(WeatherError::RequestFailed(_))
    ));
}
