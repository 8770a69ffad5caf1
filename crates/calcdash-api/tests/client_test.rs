//! Integration tests for `CalcClient` using wiremock.
#![allow(clippy::unwrap_used, clippy::float_cmp)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use calcdash_api::{CalcClient, Error, FibonacciReply, GreetReply, StatsReply};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CalcClient) {
    let server = MockServer::start().await;
    let client = CalcClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

async fn mount_text(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// ── Construction ────────────────────────────────────────────────────

#[test]
fn test_non_http_base_url_is_rejected_at_construction() {
    // These parse as valid URLs but cannot carry endpoint paths; they must
    // fail here instead of on the first request.
    for origin in ["mailto:foo", "data:text/plain,x", "ftp://example.com"] {
        let err = CalcClient::from_reqwest(origin, reqwest::Client::new()).unwrap_err();
        assert!(err.is_invalid_input(), "{origin}: got {err:?}");
    }
}

// ── Text endpoints ──────────────────────────────────────────────────

#[tokio::test]
async fn test_text_endpoints() {
    let (server, client) = setup().await;

    mount_text(&server, "/", "Welcome to the demo backend!").await;
    mount_text(&server, "/hello", "Hello, World!").await;
    mount_text(&server, "/sum", "Sum of 5 and 10 is: 15").await;

    assert_eq!(client.home().await.unwrap(), "Welcome to the demo backend!");
    assert_eq!(client.hello().await.unwrap(), "Hello, World!");
    assert_eq!(client.sum().await.unwrap(), "Sum of 5 and 10 is: 15");
}

// ── Bubble sort ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_bubblesort() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bubblesort"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original": [64, 34, 25, 12, 22],
            "sorted": [12, 22, 25, 34, 64],
        })))
        .mount(&server)
        .await;

    let result = client.bubblesort().await.unwrap();
    assert_eq!(result.original, vec![64, 34, 25, 12, 22]);
    assert_eq!(result.sorted, vec![12, 22, 25, 34, 64]);
}

// ── Greeting ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_greet_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/greet/Ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Hello, Ada!",
        })))
        .mount(&server)
        .await;

    let reply = client.greet("Ada").await.unwrap();
    assert_eq!(
        reply,
        GreetReply::Greeting {
            message: "Hello, Ada!".into()
        }
    );
}

#[tokio::test]
async fn test_greet_name_is_percent_encoded() {
    let (server, client) = setup().await;

    // The name travels as a single path segment; the space must be encoded.
    Mock::given(method("GET"))
        .and(path("/greet/Ada%20Lovelace"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Hello, Ada Lovelace!",
        })))
        .mount(&server)
        .await;

    let reply = client.greet("Ada Lovelace").await.unwrap();
    assert!(matches!(reply, GreetReply::Greeting { .. }));
}

#[tokio::test]
async fn test_greet_business_refusal_on_200() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/greet/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Name 'admin' is reserved",
        })))
        .mount(&server)
        .await;

    let reply = client.greet("admin").await.unwrap();
    assert_eq!(
        reply,
        GreetReply::Refused {
            reason: "Name 'admin' is reserved".into()
        }
    );
}

// ── Fibonacci ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_fibonacci_computed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/fibonacci-param"))
        .and(query_param("n", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "n": 10,
            "result": 55,
            "error": null,
        })))
        .mount(&server)
        .await;

    let reply = client.fibonacci(10).await.unwrap();
    assert_eq!(reply, FibonacciReply::Computed { n: 10, value: 55 });
}

#[tokio::test]
async fn test_fibonacci_business_rejection_on_200() {
    let (server, client) = setup().await;

    // HTTP 200 whose payload encodes an application error -- distinct from
    // a failed request.
    Mock::given(method("GET"))
        .and(path("/fibonacci-param"))
        .and(query_param("n", "95"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "n": 95,
            "result": null,
            "error": "n too large for long arithmetic",
        })))
        .mount(&server)
        .await;

    let reply = client.fibonacci(95).await.unwrap();
    assert_eq!(
        reply,
        FibonacciReply::Rejected {
            n: 95,
            reason: "n too large for long arithmetic".into()
        }
    );
}

#[tokio::test]
async fn test_fibonacci_sample() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/fibonacci"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "n": 10,
            "result": 55,
            "error": null,
        })))
        .mount(&server)
        .await;

    let reply = client.fibonacci_sample().await.unwrap();
    assert_eq!(reply, FibonacciReply::Computed { n: 10, value: 55 });
}

#[tokio::test]
async fn test_fibonacci_body_with_neither_field_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/fibonacci-param"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "n": 7,
            "result": null,
            "error": null,
        })))
        .mount(&server)
        .await;

    let err = client.fibonacci(7).await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }), "got {err:?}");
}

// ── Statistics ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_calculate_stats_submits_values_as_json_array() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/calculate-stats"))
        .and(body_json(json!([1.0, 2.0, 3.0, 4.0, 5.0, 5.0])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 6,
            "sum": 20.0,
            "average": 3.3333333333333335,
            "min": 1.0,
            "max": 5.0,
        })))
        .mount(&server)
        .await;

    let reply = client
        .calculate_stats(&[1.0, 2.0, 3.0, 4.0, 5.0, 5.0])
        .await
        .unwrap();

    let StatsReply::Summary(summary) = reply else {
        panic!("expected summary, got {reply:?}");
    };
    assert_eq!(summary.count, 6);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 5.0);
}

#[tokio::test]
async fn test_calculate_stats_round_trip_literals() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/calculate-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "sum": 6,
            "average": 2,
            "min": 1,
            "max": 3,
        })))
        .mount(&server)
        .await;

    let reply = client.calculate_stats(&[1.0, 2.0, 3.0]).await.unwrap();
    let StatsReply::Summary(summary) = reply else {
        panic!("expected summary, got {reply:?}");
    };
    assert_eq!(summary.count, 3);
    assert_eq!(summary.sum, 6.0);
    assert_eq!(summary.average, 2.0);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 3.0);
}

#[tokio::test]
async fn test_calculate_stats_error_body_is_extracted_on_non_2xx() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/calculate-stats"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Input list cannot be empty",
        })))
        .mount(&server)
        .await;

    let err = client.calculate_stats(&[]).await.unwrap_err();
    match err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Input list cannot be empty");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ── Error handling ──────────────────────────────────────────────────

#[tokio::test]
async fn test_http_failure_without_error_body_synthesizes_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bubblesort"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.bubblesort().await.unwrap_err();
    match err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP error! status: 500");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_on_success_status_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bubblesort"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.bubblesort().await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => {
            assert_eq!(body, "<html>not json</html>");
        }
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

// ── Overview batch ──────────────────────────────────────────────────

async fn mount_overview_happy(server: &MockServer) {
    mount_text(server, "/", "Welcome!").await;
    mount_text(server, "/hello", "Hello, World!").await;
    mount_text(server, "/sum", "Sum of 5 and 10 is: 15").await;

    Mock::given(method("GET"))
        .and(path("/bubblesort"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original": [3, 1, 2],
            "sorted": [1, 2, 3],
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fibonacci"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "n": 10,
            "result": 55,
            "error": null,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_overview_aggregates_all_five_endpoints() {
    let (server, client) = setup().await;
    mount_overview_happy(&server).await;

    let overview = client.overview().await.unwrap();
    assert_eq!(overview.home, "Welcome!");
    assert_eq!(overview.hello, "Hello, World!");
    assert_eq!(overview.sum, "Sum of 5 and 10 is: 15");
    assert_eq!(overview.bubblesort.sorted, vec![1, 2, 3]);
    assert_eq!(
        overview.fibonacci,
        FibonacciReply::Computed { n: 10, value: 55 }
    );
}

#[tokio::test]
async fn test_overview_aborts_on_single_failure() {
    let (server, client) = setup().await;

    mount_text(&server, "/", "Welcome!").await;
    mount_text(&server, "/hello", "Hello, World!").await;

    // /sum is down; the whole batch must fail with its URL and status.
    Mock::given(method("GET"))
        .and(path("/sum"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/bubblesort"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original": [2, 1],
            "sorted": [1, 2],
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fibonacci"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "n": 10,
            "result": 55,
            "error": null,
        })))
        .mount(&server)
        .await;

    let err = client.overview().await.unwrap_err();
    match err {
        Error::Api {
            url,
            status,
            message,
        } => {
            assert!(url.ends_with("/sum"), "unexpected url {url}");
            assert_eq!(status, 503);
            assert_eq!(message, "HTTP error! status: 503");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
