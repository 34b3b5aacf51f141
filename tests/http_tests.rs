//! HTTP adapter integration tests
//!
//! These tests drive the full router (handlers, panic recovery and access log
//! layers) in-process with `tower::ServiceExt::oneshot`, without binding a socket.
//! The scripted test walks one account through its whole lifecycle and checks the
//! status code, and where relevant the JSON body, of every step.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use bank_account::http::{router, ACCOUNT_PATH};
    use bank_account::{AccountSlot, AmountResponse, ErrorResponse};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> (Router, Arc<AccountSlot>) {
        let slot = Arc::new(AccountSlot::new());
        (router(Arc::clone(&slot)), slot)
    }

    /// Send one request to the router and return the status and raw body
    async fn send(app: &Router, method: Method, body: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(ACCOUNT_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        (status, bytes.to_vec())
    }

    fn amount(body: &[u8]) -> i64 {
        serde_json::from_slice::<AmountResponse>(body)
            .unwrap_or_else(|e| panic!("Expected amount body ({}): {:?}", e, body))
            .amount
    }

    fn error(body: &[u8]) -> String {
        serde_json::from_slice::<ErrorResponse>(body)
            .unwrap_or_else(|e| panic!("Expected error body ({}): {:?}", e, body))
            .error
    }

    /// The full lifecycle, step by step: (method, body, status, amount on success)
    #[tokio::test]
    async fn test_account_lifecycle() {
        let (app, _) = app();

        let steps: Vec<(Method, &str, StatusCode, Option<i64>)> = vec![
            // not active
            (Method::GET, "", StatusCode::BAD_REQUEST, None),
            (Method::POST, r#"{"amount":10}"#, StatusCode::BAD_REQUEST, None),
            (Method::DELETE, "", StatusCode::BAD_REQUEST, None),
            // open
            (Method::PUT, r#"{initialAmount": -100}"#, StatusCode::INTERNAL_SERVER_ERROR, None),
            (Method::PUT, r#"{"initialAmount": -100}"#, StatusCode::BAD_REQUEST, None),
            (Method::PUT, r#"{"initialAmount": 100}"#, StatusCode::OK, Some(100)),
            (Method::PUT, r#"{"initialAmount": 100}"#, StatusCode::BAD_REQUEST, None),
            // balance
            (Method::GET, "", StatusCode::OK, Some(100)),
            // deposit
            (Method::POST, r#"{amount": 10}"#, StatusCode::INTERNAL_SERVER_ERROR, None),
            (Method::POST, r#"{"amount": 10}"#, StatusCode::OK, Some(110)),
            (Method::POST, r#"{"amount": -200}"#, StatusCode::BAD_REQUEST, None),
            (Method::POST, r#"{"amount": 0}"#, StatusCode::OK, Some(110)),
            (Method::GET, "", StatusCode::OK, Some(110)),
            // close
            (Method::DELETE, "", StatusCode::OK, Some(110)),
            // closed
            (Method::GET, "", StatusCode::BAD_REQUEST, None),
            (Method::POST, r#"{"amount":10}"#, StatusCode::BAD_REQUEST, None),
            (Method::DELETE, "", StatusCode::BAD_REQUEST, None),
            (Method::PUT, r#"{"initialAmount": 100}"#, StatusCode::BAD_REQUEST, None),
        ];

        for (index, (method, body, expected_status, expected_amount)) in
            steps.into_iter().enumerate()
        {
            let (status, response) = send(&app, method.clone(), body).await;
            assert_eq!(
                status, expected_status,
                "step {} ({} {}): unexpected status, body {:?}",
                index, method, body, String::from_utf8_lossy(&response)
            );
            match expected_amount {
                Some(expected) => assert_eq!(amount(&response), expected, "step {}", index),
                None => assert!(!error(&response).is_empty(), "step {}", index),
            }
        }
    }

    #[rstest]
    #[case::balance(Method::GET, "")]
    #[case::deposit(Method::POST, r#"{"amount": 5}"#)]
    #[case::malformed_deposit(Method::POST, "not json")]
    #[case::close(Method::DELETE, "")]
    #[tokio::test]
    async fn test_requests_before_open_report_not_created(
        #[case] method: Method,
        #[case] body: &str,
    ) {
        let (app, slot) = app();

        let (status, response) = send(&app, method, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error(&response), "Account is not created");
        assert!(slot.account().is_none());
    }

    #[rstest]
    #[case::balance(Method::GET, "")]
    #[case::deposit(Method::POST, r#"{"amount": 5}"#)]
    #[case::malformed_deposit(Method::POST, "not json")]
    #[case::close(Method::DELETE, "")]
    #[tokio::test]
    async fn test_requests_after_close_report_closed(#[case] method: Method, #[case] body: &str) {
        let (app, slot) = app();
        slot.open(20).unwrap();
        slot.close().unwrap();

        let (status, response) = send(&app, method, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error(&response), "Account is closed");
    }

    #[tokio::test]
    async fn test_open_with_existing_account_ignores_body() {
        let (app, slot) = app();
        slot.open(1).unwrap();

        let (status, response) = send(&app, Method::PUT, "not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error(&response), "Account is created");
    }

    #[rstest]
    #[case::missing_field(r#"{}"#)]
    #[case::fractional(r#"{"amount": 1.5}"#)]
    #[case::empty("")]
    #[tokio::test]
    async fn test_malformed_deposit_is_server_error(#[case] body: &str) {
        let (app, slot) = app();
        slot.open(10).unwrap();

        let (status, _) = send(&app, Method::POST, body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(slot.balance(), Ok(10));
    }

    #[tokio::test]
    async fn test_overdraft_keeps_balance() {
        let (app, slot) = app();
        slot.open(110).unwrap();

        let (status, response) = send(&app, Method::POST, r#"{"amount": -200}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error(&response).starts_with("Not enough money"));
        assert_eq!(slot.balance(), Ok(110));
    }

    #[tokio::test]
    async fn test_success_is_json() {
        let (app, _) = app();

        let request = Request::builder()
            .method(Method::PUT)
            .uri(ACCOUNT_PATH)
            .body(Body::from(r#"{"initialAmount": 7}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[rstest]
    #[case::patch(Method::PATCH)]
    #[case::options(Method::OPTIONS)]
    #[tokio::test]
    async fn test_unsupported_method(#[case] method: Method) {
        let (app, _) = app();

        let (status, _) = send(&app, method, "").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_deposits_over_http() {
        let (app, slot) = app();
        slot.open(0).unwrap();

        let requests = (0..200).map(|_| {
            let app = app.clone();
            tokio::spawn(async move { send(&app, Method::POST, r#"{"amount": 3}"#).await })
        });
        let results = futures::future::join_all(requests).await;

        for result in results {
            let (status, _) = result.expect("request task panicked");
            assert_eq!(status, StatusCode::OK);
        }
        assert_eq!(slot.balance(), Ok(600));

        let (status, response) = send(&app, Method::DELETE, "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(amount(&response), 600);
    }
}
