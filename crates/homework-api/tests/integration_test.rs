//! Integration tests for homework-api crate.
//!
//! The Practicum endpoint is replaced by a local axum server.

use axum::extract::Query;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use homework_api::{check_response, ClientConfig, HomeworkSource, PracticumClient, StatusFormatter};
use homework_common::test_utils::init_test_logging;
use homework_common::test_utils::payload_fixtures::{homework, response};
use homework_common::{Cursor, HomeworkError, PayloadError};
use homework_i18n::Locale;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

const TOKEN: &str = "y0_test_token";

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, timeout: Duration) -> PracticumClient {
    let endpoint = format!("http://{addr}/api/user_api/homework_statuses/");
    PracticumClient::new(ClientConfig::new(endpoint, TOKEN).with_timeout(timeout)).unwrap()
}

/// Answers like the real endpoint: one homework, cursor echoed back plus one.
async fn statuses(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("OAuth {TOKEN}"));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "code": "not_authenticated" })),
        )
            .into_response();
    }

    let Some(from_date) = params.get("from_date").and_then(|v| v.parse::<u64>().ok()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "code": "UnknownError" }))).into_response();
    };

    Json(response(vec![homework("hw_api", "approved")], from_date + 1)).into_response()
}

#[tokio::test]
async fn test_fetch_sends_token_and_cursor() {
    init_test_logging();
    let addr = spawn_server(Router::new().route("/api/user_api/homework_statuses/", get(statuses))).await;
    let client = client_for(addr, Duration::from_secs(5));

    let payload = client.fetch(Cursor(1_700_000_000)).await.unwrap();
    let checked = check_response(&payload).unwrap();

    assert_eq!(checked.current_date, Some(Cursor(1_700_000_001)));
    assert_eq!(
        StatusFormatter::new(Locale::Russian).format(checked.latest()).unwrap(),
        "Изменился статус проверки работы \"hw_api\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[tokio::test]
async fn test_wrong_token_is_bad_response() {
    let addr = spawn_server(Router::new().route("/api/user_api/homework_statuses/", get(statuses))).await;
    let endpoint = format!("http://{addr}/api/user_api/homework_statuses/");
    let client = PracticumClient::new(ClientConfig::new(endpoint, "wrong")).unwrap();

    match client.fetch(Cursor(0)).await {
        Err(HomeworkError::BadResponse { status, body, .. }) => {
            assert_eq!(status, 401);
            assert!(body.contains("not_authenticated"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_bad_response() {
    let router = Router::new().route(
        "/api/user_api/homework_statuses/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_server(router).await;

    let err = client_for(addr, Duration::from_secs(5)).fetch(Cursor(0)).await.unwrap_err();

    match err {
        HomeworkError::BadResponse { status, reason, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(reason, "Internal Server Error");
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_malformed_payload() {
    let router = Router::new().route(
        "/api/user_api/homework_statuses/",
        get(|| async { "<html>maintenance</html>" }),
    );
    let addr = spawn_server(router).await;

    let err = client_for(addr, Duration::from_secs(5)).fetch(Cursor(0)).await.unwrap_err();
    assert!(matches!(
        err,
        HomeworkError::MalformedPayload(PayloadError::InvalidJson(_))
    ));
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr, Duration::from_secs(5)).fetch(Cursor(0)).await.unwrap_err();
    assert!(matches!(err, HomeworkError::Network { .. }));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_transport_failures_keep_their_cause() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let refused = client_for(addr, Duration::from_secs(5)).fetch(Cursor(0)).await.unwrap_err();

    let unresolvable = ClientConfig::new("http://homework-reviews.invalid/api/user_api/homework_statuses/", TOKEN)
        .with_timeout(Duration::from_secs(5));
    let unresolved = PracticumClient::new(unresolvable).unwrap().fetch(Cursor(0)).await.unwrap_err();

    let formatter = StatusFormatter::new(Locale::Russian);
    let refused_message = formatter.failure(&refused);
    let unresolved_message = formatter.failure(&unresolved);

    assert!(refused_message.starts_with("Сбой в работе программы: Network error: Connection error: "));
    assert!(unresolved_message.starts_with("Сбой в работе программы: Network error: "));
    assert_ne!(refused_message, unresolved_message);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let router = Router::new().route(
        "/api/user_api/homework_statuses/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Json(json!({ "homeworks": [] }))
        }),
    );
    let addr = spawn_server(router).await;

    let err = client_for(addr, Duration::from_millis(200)).fetch(Cursor(0)).await.unwrap_err();
    assert!(matches!(err, HomeworkError::Network { ref message, .. } if message == "Request timeout"));
}

mod formatter_properties {
    use super::*;
    use homework_common::test_utils::property_testing::{
        homework_name_strategy, known_status_strategy, unknown_status_strategy,
    };
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn known_status_always_formats(name in homework_name_strategy(), status in known_status_strategy()) {
            let formatter = StatusFormatter::new(Locale::Russian);
            let item = homework(&name, status);

            let first = formatter.format(Some(&item)).unwrap();
            let second = formatter.format(Some(&item)).unwrap();

            prop_assert_eq!(&first, &second);
            let quoted = format!("\"{}\"", name);
            prop_assert!(first.contains(&quoted));
        }

        #[test]
        fn unknown_status_is_rejected(name in homework_name_strategy(), status in unknown_status_strategy()) {
            let item = homework(&name, &status);
            let result = StatusFormatter::new(Locale::English).format(Some(&item));
            let rejected =
                matches!(result, Err(HomeworkError::UnexpectedStatus { status: ref s }) if *s == status);
            prop_assert!(rejected);
        }
    }
}
