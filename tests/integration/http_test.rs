//! GET/POST against a live mock server.

use super::{closed_port_url, start_server};
use sdk_utils::config::reset_config;
use sdk_utils::executor::RequestError;
use sdk_utils::{get, post, HttpMethod, HttpResponse, RequestConfig, SdkError};

use serial_test::serial;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
#[serial]
async fn test_get_returns_unconsumed_response_on_200() {
    reset_config();
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/latest/height"))
        .respond_with(ResponseTemplate::new(200).set_body_string("4821"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/latest/height", server.uri());
    let response = get(&url, None).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "4821");
}

#[tokio::test]
#[serial]
async fn test_get_404_is_http_error_with_status_and_url() {
    reset_config();
    let server = start_server().await;

    let url = format!("{}/program/missing.aleo", server.uri());
    let err = get(&url, None).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), format!("404 could not get URL {}", url));
}

#[tokio::test]
#[serial]
async fn test_get_sends_configured_headers() {
    reset_config();
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/blocks"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = RequestConfig::new().header("Accept", "application/json");
    let url = format!("{}/blocks", server.uri());

    assert!(get(&url, Some(config)).await.is_ok());
}

#[tokio::test]
#[serial]
async fn test_get_honours_method_in_config() {
    reset_config();
    let server = start_server().await;
    Mock::given(method("DELETE"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = RequestConfig::new().method(HttpMethod::DELETE);
    let url = format!("{}/session", server.uri());

    let response = get(&url, Some(config)).await.unwrap();
    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
#[serial]
async fn test_post_forces_post_and_sends_body() {
    reset_config();
    let server = start_server().await;
    Mock::given(method("POST"))
        .and(path("/transaction/broadcast"))
        .and(body_string("x"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"at1qq"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let config = RequestConfig::new().method(HttpMethod::GET).body("x");
    let url = format!("{}/transaction/broadcast", server.uri());

    let response = post(&url, config).await.unwrap();
    let buffered = HttpResponse::from_reqwest(response).await.unwrap();

    assert_eq!(buffered.status_code, 201);
    assert_eq!(buffered.json().unwrap()["id"].as_str(), Some("at1qq"));
}

#[tokio::test]
#[serial]
async fn test_post_server_error() {
    reset_config();
    let server = start_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/transaction/broadcast", server.uri());
    let err = post(&url, RequestConfig::new().body("x")).await.unwrap_err();

    assert!(matches!(
        &err,
        SdkError::Http {
            status: 503,
            method: HttpMethod::POST,
            url: sent,
        } if *sent == url
    ));
    assert!(err.to_string().contains("could not post URL"));
}

#[tokio::test]
#[serial]
async fn test_connection_refused_is_transport_error() {
    reset_config();

    let err = get(&closed_port_url(), None).await.unwrap_err();

    match &err {
        SdkError::Transport(inner) => {
            assert!(inner.is_connect(), "unexpected error: {:?}", inner);
            assert!(inner.reqwest().is_some());
            // The reqwest error stays reachable for callers walking the chain.
            let cause = std::error::Error::source(inner).expect("reqwest error as source");
            assert_eq!(cause.to_string(), inner.to_string());
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
#[serial]
async fn test_per_request_timeout() {
    reset_config();
    let server = start_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = RequestConfig::new().timeout_ms(50);
    let err = get(&server.uri(), Some(config)).await.unwrap_err();

    assert!(
        matches!(&err, SdkError::Transport(inner) if inner.is_timeout()),
        "unexpected error: {:?}",
        err
    );
}

#[tokio::test]
#[serial]
async fn test_invalid_url_never_reaches_network() {
    reset_config();

    let err = get("not a url", None).await.unwrap_err();

    assert!(matches!(
        err,
        SdkError::Transport(RequestError::InvalidUrl(_))
    ));
}
