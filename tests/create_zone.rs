use std::net::TcpListener;
use std::time::Duration;

use config::Map;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hetzner_dns_zone::providers::hetzner::{ApiToken, ResultValue, ZoneError};
use hetzner_dns_zone::run;
use hetzner_dns_zone::settings::{ConfigurationError, Settings, ZoneArgs};

fn settings_for(server_uri: &str, vars: &[(&str, &str)]) -> Settings {
    let mut env: Map<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    env.insert(
        "HETZNER_DNS_API_URL".to_string(),
        format!("{}/api/v1", server_uri),
    );

    Settings::load_settings(None, false, Some(env)).expect("settings should load")
}

fn zone_body() -> serde_json::Value {
    json!({
        "zone": {
            "id": "123",
            "name": "example.com",
            "ttl": 86400,
            "status": "verified"
        }
    })
}

#[tokio::test]
async fn posts_json_with_auth_header_and_prints_full_zone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .and(header("Auth-API-Token", "secret-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "example.com", "ttl": 86400})))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_body()))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(
        &server.uri(),
        &[("HETZNER_DNS_TOKEN", "secret-token"), ("NAME", "example.com")],
    );

    let result = run(ZoneArgs::default(), &settings).await.unwrap();
    assert_eq!(result, ResultValue::Zone(zone_body()));
}

#[tokio::test]
async fn id_only_prints_the_zone_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_body()))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(
        &server.uri(),
        &[
            ("HETZNER_DNS_TOKEN", "secret-token"),
            ("NAME", "example.com"),
            ("ID_ONLY", "1"),
        ],
    );

    let result = run(ZoneArgs::default(), &settings).await.unwrap();
    assert_eq!(result.to_string(), "123");
}

#[tokio::test]
async fn ttl_from_environment_reaches_the_request_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .and(body_json(json!({"name": "example.com", "ttl": 3600})))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_body()))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(
        &server.uri(),
        &[
            ("HETZNER_DNS_TOKEN", "secret-token"),
            ("NAME", "example.com"),
            ("TTL", "3600"),
        ],
    );

    run(ZoneArgs::default(), &settings).await.unwrap();
}

#[tokio::test]
async fn explicit_arguments_override_environment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .and(header("Auth-API-Token", "arg-token"))
        .and(body_json(json!({"name": "arg.example", "ttl": 300})))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_body()))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(
        &server.uri(),
        &[
            ("HETZNER_DNS_TOKEN", "env-token"),
            ("NAME", "env.example"),
            ("TTL", "3600"),
        ],
    );
    let args = ZoneArgs {
        token: Some(ApiToken::new("arg-token")),
        name: Some("arg.example".to_string()),
        ttl: Some(300),
        id_only: Some(true),
    };

    let result = run(args, &settings).await.unwrap();
    assert_eq!(result, ResultValue::ZoneId("123".to_string()));
}

#[tokio::test]
async fn api_error_payload_fails_in_both_modes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {"message": "zone already exists", "code": 422}
        })))
        .expect(2)
        .mount(&server)
        .await;

    for id_only in ["0", "1"] {
        let settings = settings_for(
            &server.uri(),
            &[
                ("HETZNER_DNS_TOKEN", "secret-token"),
                ("NAME", "example.com"),
                ("ID_ONLY", id_only),
            ],
        );

        let err = run(ZoneArgs::default(), &settings).await.unwrap_err();
        match err {
            ZoneError::Api(details) => {
                assert_eq!(details.status, 422);
                assert!(details.to_string().contains("zone already exists"));
            }
            other => panic!("expected an API error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn unauthorized_response_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "Invalid authentication credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(
        &server.uri(),
        &[("HETZNER_DNS_TOKEN", "wrong"), ("NAME", "example.com")],
    );

    let err = run(ZoneArgs::default(), &settings).await.unwrap_err();
    assert!(matches!(err, ZoneError::Api(ref details) if details.status == 401));
}

#[tokio::test]
async fn non_json_body_is_a_format_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(
        &server.uri(),
        &[("HETZNER_DNS_TOKEN", "secret-token"), ("NAME", "example.com")],
    );

    let err = run(ZoneArgs::default(), &settings).await.unwrap_err();
    assert!(matches!(err, ZoneError::ResponseFormat(_)));
}

#[tokio::test]
async fn missing_token_or_name_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_body()))
        .expect(0)
        .mount(&server)
        .await;

    let without_token = settings_for(&server.uri(), &[("NAME", "example.com")]);
    let err = run(ZoneArgs::default(), &without_token).await.unwrap_err();
    assert!(matches!(
        err,
        ZoneError::Configuration(ConfigurationError::MissingToken)
    ));

    let without_name = settings_for(&server.uri(), &[("HETZNER_DNS_TOKEN", "secret-token")]);
    let err = run(ZoneArgs::default(), &without_name).await.unwrap_err();
    assert!(matches!(
        err,
        ZoneError::Configuration(ConfigurationError::MissingName)
    ));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    // Grab a free port and release it so nothing is listening there.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let settings = settings_for(
        &format!("http://127.0.0.1:{}", port),
        &[("HETZNER_DNS_TOKEN", "secret-token"), ("NAME", "example.com")],
    );

    let err = run(ZoneArgs::default(), &settings).await.unwrap_err();
    match err {
        ZoneError::Transport { url, .. } => {
            assert_eq!(url, format!("http://127.0.0.1:{}/api/v1/zones", port));
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(zone_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let settings = settings_for(
        &server.uri(),
        &[
            ("HETZNER_DNS_TOKEN", "secret-token"),
            ("NAME", "example.com"),
            ("HETZNER_DNS_TIMEOUT", "1"),
        ],
    );

    let err = run(ZoneArgs::default(), &settings).await.unwrap_err();
    assert!(
        matches!(err, ZoneError::Transport { .. }),
        "expected a transport error, got {err:?}"
    );

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
}
