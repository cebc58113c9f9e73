//! HTTP page source against a mock server

use application::{ApplicationError, PageSourcePort};
use infrastructure::{HttpConfig, HttpPageSource, RetryConfig};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source(max_retries: u32) -> HttpPageSource {
    let config = HttpConfig {
        timeout_secs: 5,
        retry: RetryConfig {
            initial_delay_ms: 1,
            max_delay_ms: 5,
            max_retries,
            ..RetryConfig::default()
        }
        .without_jitter(),
        ..HttpConfig::default()
    };
    HttpPageSource::new(&config).unwrap()
}

#[tokio::test]
async fn fetches_page_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/world"))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<h3><a href=\"Київ\">Київ</a></h3>", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = source(0)
        .fetch_page(&format!("{}/world", server.uri()))
        .await
        .unwrap();

    assert!(body.contains("Київ"));
}

#[tokio::test]
async fn percent_encoded_cyrillic_path_is_requested_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/%D0%9A%D0%B8%D1%97%D0%B2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let body = source(0)
        .fetch_page(&format!("{}/%D0%9A%D0%B8%D1%97%D0%B2", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn server_error_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .expect(1)
        .mount(&server)
        .await;

    let body = source(2)
        .fetch_page(&format!("{}/flaky", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "recovered");
}

#[tokio::test]
async fn persistent_server_error_gives_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let err = source(2)
        .fetch_page(&format!("{}/down", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::PageSource(ref msg) if msg.contains("500")));
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = source(3)
        .fetch_page(&format!("{}/gone", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::PageSource(_)));
}

#[tokio::test]
async fn unreachable_host_is_page_source_error() {
    let err = source(0)
        .fetch_page("http://127.0.0.1:9/unreachable")
        .await
        .unwrap_err();

    assert!(err.is_retryable());
}
