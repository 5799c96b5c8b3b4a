use std::collections::HashMap;

use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{setup_anonymous_client, RecordingTransport};
use tesla_client::{AccessTokenRequest, AccessTokenResponse, TeslaError};

const CLIENT_ID: &str = "client-id-81527cff";
const CLIENT_SECRET: &str = "client-secret-c7257eb7";
const EMAIL: &str = "elon@example.com";
const PASSWORD: &str = "p@ss w&rd=1";

fn token_json() -> serde_json::Value {
    json!({
        "access_token": "abc123",
        "token_type": "bearer",
        "expires_in": 3888000,
        "refresh_token": "def456",
        "created_at": 1538359034
    })
}

#[tokio::test]
async fn test_request_access_token() -> Result<(), TeslaError> {
    // What it tests: The password grant POSTs to {base}/oauth/token without a bearer header and
    // decodes the token payload (which is not wrapped in a `response` envelope).
    //
    // Why it's valuable: This is the only unauthenticated call; sending a stale default token or
    // expecting the envelope here would break login.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_anonymous_client(&mock_server.uri());
    let response = client
        .request_access_token(CLIENT_ID, CLIENT_SECRET, EMAIL, PASSWORD)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.data(),
        &AccessTokenResponse {
            access_token: "abc123".into(),
            token_type: "bearer".into(),
            expires_in: 3888000,
            refresh_token: "def456".into(),
            created_at: 1538359034,
        }
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());

    Ok(())
}

#[tokio::test]
async fn test_request_access_token_posts_exactly_five_fields() {
    // What it tests: The form body has exactly five keys, each present once with the supplied
    // value, including characters that need form encoding.
    //
    // Why it's valuable: The token endpoint rejects unknown or duplicate fields; the password
    // in particular must survive encoding byte for byte.
    for base in ["https://owner-api.example.com", "http://localhost:4000/custom/"] {
        let transport = RecordingTransport::new(200, token_json());
        let client = transport.client(base);

        client
            .request_access_token(CLIENT_ID, CLIENT_SECRET, EMAIL, PASSWORD)
            .send()
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            format!("{}/oauth/token", base.trim_end_matches('/'))
        );
        assert!(request.headers.get("authorization").is_none());

        let body = request.body.clone().unwrap();
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&body).into_owned().collect();
        assert_eq!(pairs.len(), 5);

        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            fields.entry(key).or_default().push(value);
        }

        assert_eq!(fields.len(), 5);
        assert_eq!(fields["grant_type"], vec!["password"]);
        assert_eq!(fields["client_id"], vec![CLIENT_ID]);
        assert_eq!(fields["client_secret"], vec![CLIENT_SECRET]);
        assert_eq!(fields["email"], vec![EMAIL]);
        assert_eq!(fields["password"], vec![PASSWORD]);
    }
}

#[tokio::test]
async fn test_request_access_token_unauthorized() {
    // What it tests: A 401 from the token endpoint surfaces as HttpStatus(401), not as a decode
    // error, even though the body is valid JSON.
    //
    // Why it's valuable: Lets callers map bad credentials to a clear message instead of a
    // confusing "missing field" decode failure.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_anonymous_client(&mock_server.uri());
    let err = client
        .request_access_token(CLIENT_ID, CLIENT_SECRET, EMAIL, "wrong-password")
        .send()
        .await
        .unwrap_err();

    match err {
        TeslaError::HttpStatus { status, .. } => assert_eq!(status, StatusCode::UNAUTHORIZED),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_token_from_exchange_authenticates_later_calls() -> Result<(), TeslaError> {
    // What it tests: A client derived with `authenticated()` from an exchanged token sends it as
    // the bearer on subsequent calls.
    //
    // Why it's valuable: Covers the common login-then-use flow end to end.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/1/vehicles"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_anonymous_client(&mock_server.uri());
    let token = client
        .request_access_token(CLIENT_ID, CLIENT_SECRET, EMAIL, PASSWORD)
        .send()
        .await?
        .into_data();

    let client = client.authenticated(token.access_token)?;
    assert!(client.has_default_access_token());
    assert!(client.vehicles().payload().await?.is_empty());

    Ok(())
}

#[test]
fn test_credentials_debug_hides_secrets() {
    // What it tests: Debug output of the credentials shows the client id and email but neither
    // the client secret nor the password.
    //
    // Why it's valuable: Credentials get logged with `{:?}` by accident far more often than on
    // purpose.
    let credentials = AccessTokenRequest::new(CLIENT_ID, CLIENT_SECRET, EMAIL, PASSWORD);
    let debug = format!("{credentials:?}");

    assert!(debug.contains(CLIENT_ID), "{debug}");
    assert!(debug.contains(EMAIL), "{debug}");
    assert!(!debug.contains(CLIENT_SECRET), "{debug}");
    assert!(!debug.contains(PASSWORD), "{debug}");
}
