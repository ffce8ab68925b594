//! Configuration file through request to parsed body.

use super::start_server;
use sdk_utils::config::{get_config, load_config_from_file, reset_config};
use sdk_utils::executor::RequestError;
use sdk_utils::{get, parse_json, SdkError, Value};

use num_bigint::BigInt;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// Helper to write a settings file into a temporary directory
fn write_settings(dir: &TempDir, content: &str) -> PathBuf {
    let file_path = dir.path().join("sdk-settings.json");
    fs::write(&file_path, content).expect("Failed to write settings file");
    file_path
}

#[tokio::test]
#[serial]
async fn test_configured_client_fetches_and_parses_large_integers() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_settings(
        &temp_dir,
        r#"{
            "sdk": {
                "timeout": 5000,
                "userAgent": "explorer/2.1",
                "defaultHeaders": { "X-Network": "testnet" }
            }
        }"#,
    );
    let config = load_config_from_file(&settings).unwrap();
    assert_eq!(config.timeout, 5000);
    assert_eq!(get_config(), config);

    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/testnet/block/height/latest"))
        .and(header("x-network", "testnet"))
        .and(header("user-agent", "explorer/2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"height": 123456789012345678, "supply": 1500000000000000000000, "ratio": 0.75}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/testnet/block/height/latest", server.uri());
    let response = get(&url, None).await.unwrap();
    let text = response.text().await.map_err(RequestError::from).unwrap();
    let body = parse_json(&text).unwrap();

    let height: BigInt = "123456789012345678".parse().unwrap();
    let supply: BigInt = "1500000000000000000000".parse().unwrap();
    assert_eq!(body["height"], Value::Int(height));
    assert_eq!(body["supply"], Value::Int(supply));
    assert_eq!(body["ratio"], Value::Float(0.75));

    reset_config();
}

#[tokio::test]
#[serial]
async fn test_redirects_disabled_by_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_settings(&temp_dir, r#"{ "sdk": { "followRedirects": false } }"#);
    load_config_from_file(&settings).unwrap();

    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new"))
        .mount(&server)
        .await;

    let url = format!("{}/old", server.uri());
    let err = get(&url, None).await.unwrap_err();
    assert_eq!(err.status(), Some(301));

    reset_config();
}

#[test]
#[serial]
fn test_missing_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_config_from_file(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SdkError::Config(_)));
}

#[test]
#[serial]
fn test_malformed_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_settings(&temp_dir, "{ \"sdk\": ");

    let err = load_config_from_file(&settings).unwrap_err();
    assert!(err.to_string().contains("is not valid JSON"));
}

#[test]
#[serial]
fn test_invalid_settings_keep_previous_config() {
    reset_config();
    let temp_dir = TempDir::new().unwrap();
    let settings = write_settings(&temp_dir, r#"{ "sdk": { "maxRedirects": 500 } }"#);

    let err = load_config_from_file(&settings).unwrap_err();
    assert!(err.to_string().contains("maxRedirects"));
    assert_eq!(get_config().max_redirects, 10);
}
