use super::headers::headers_for_request;
use super::utils::{classify_status, is_dns_failure};
use super::*;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "<!DOCTYPE html><html><head><title>Mock</title></head><body>ok</body></html>";

fn request_for(server: &MockServer, route: &str) -> FetchRequest {
    let url = Url::parse(&server.uri()).unwrap().join(route).unwrap();
    FetchRequest::new(url).with_timeout(Duration::from_secs(5))
}

#[test]
fn headers_carry_user_agent_and_accept() {
    let headers = headers_for_request("test-agent/1.0");
    assert_eq!(
        headers.get("user-agent").and_then(|v| v.to_str().ok()),
        Some("test-agent/1.0")
    );
    assert!(headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));
    assert!(headers.contains_key("accept-language"));
}

#[test]
fn invalid_user_agent_falls_back_to_default() {
    let headers = headers_for_request("bad\nagent");
    assert_eq!(
        headers.get("user-agent").and_then(|v| v.to_str().ok()),
        Some(crate::config::DEFAULT_USER_AGENT)
    );
}

#[test]
fn status_classification() {
    assert!(classify_status(reqwest::StatusCode::OK).is_ok());
    assert_eq!(
        classify_status(reqwest::StatusCode::NOT_FOUND),
        Err(FetchError::HttpStatus(404))
    );
    assert_eq!(
        classify_status(reqwest::StatusCode::SERVICE_UNAVAILABLE),
        Err(FetchError::HttpStatus(503))
    );
}

#[test]
fn dns_failure_detection() {
    assert!(is_dns_failure(
        "error sending request: error trying to connect: dns error: failed to lookup address information: Name or service not known"
    ));
    assert!(is_dns_failure("No such host is known. (os error 11001)"));
    assert!(!is_dns_failure("tcp connect error: Connection refused (os error 111)"));
}

#[tokio::test]
async fn fetches_html_with_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let request = request_for(&server, "/page").with_user_agent("test-agent/1.0");
    let html = ReqwestFetcher::new().fetch(&request).await.unwrap();
    assert_eq!(html, PAGE);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = fetch_html(&request_for(&server, "/missing")).await.unwrap_err();
    assert_eq!(err, FetchError::HttpStatus(404));
}

#[tokio::test]
async fn follows_redirects_within_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let html = fetch_html(&request_for(&server, "/old")).await.unwrap();
    assert_eq!(html, PAGE);
}

#[tokio::test]
async fn redirect_loop_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/loop"))
        .mount(&server)
        .await;

    let request = request_for(&server, "/loop").with_max_redirects(3);
    let err = fetch_html(&request).await.unwrap_err();
    assert!(matches!(err, FetchError::Other(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let request = request_for(&server, "/slow").with_timeout(Duration::from_millis(200));
    let err = fetch_html(&request).await.unwrap_err();
    assert_eq!(err, FetchError::Timeout);
}
