use reelbase_describe::*;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> DescribeConfig {
    DescribeConfig::default()
        .with_api_key("test-key")
        .with_base_url(server.uri())
}

fn candidate(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

#[tokio::test]
async fn generate_posts_prompt_and_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt("Galactic Horizons", EntityKind::Show) }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("A crew races the dark.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = DescriptionClient::new(config_for(&server)).unwrap();
    let text = client
        .generate("Galactic Horizons", EntityKind::Show)
        .await
        .unwrap();
    assert_eq!(text, "A crew races the dark.");
}

#[tokio::test]
async fn describe_clamps_long_output() {
    let server = MockServer::start().await;
    let long = "x".repeat(500);
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&long)))
        .mount(&server)
        .await;

    let text = describe(&config_for(&server), "Pilot", EntityKind::Episode).await;
    assert_eq!(text.chars().count(), 200);

    let mut narrow = config_for(&server);
    narrow.max_chars = 10;
    assert_eq!(describe(&narrow, "Pilot", EntityKind::Episode).await, "x".repeat(10));
}

#[tokio::test]
async fn describe_without_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = DescribeConfig::default().with_base_url(server.uri());
    let text = describe(&config, "Urban Legends", EntityKind::Show).await;
    assert_eq!(text, MISSING_KEY_MESSAGE);
}

#[tokio::test]
async fn describe_reports_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let text = describe(&config_for(&server), "Pilot", EntityKind::Episode).await;
    assert_eq!(text, EMPTY_MESSAGE);
}

#[tokio::test]
async fn describe_masks_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let text = describe(&config_for(&server), "Pilot", EntityKind::Episode).await;
    assert_eq!(text, FAILURE_MESSAGE);
}

#[tokio::test]
async fn generate_maps_status_codes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/denied:generateContent"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/busy:generateContent"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.model = "denied".to_string();
    let err = DescriptionClient::new(config.clone())
        .unwrap()
        .generate("T", EntityKind::Show)
        .await
        .unwrap_err();
    assert!(matches!(err, DescribeError::InvalidCredentials(403)));

    config.model = "busy".to_string();
    let err = DescriptionClient::new(config)
        .unwrap()
        .generate("T", EntityKind::Show)
        .await
        .unwrap_err();
    assert!(matches!(err, DescribeError::RateLimit));
}

#[tokio::test]
async fn generate_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = DescriptionClient::new(config_for(&server))
        .unwrap()
        .generate("T", EntityKind::Show)
        .await
        .unwrap_err();
    assert!(matches!(err, DescribeError::Json(_)));
}

#[test]
fn settings_file_supplies_describe_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[storage]\ndatabase = \"/tmp/x.db\"\n\n[describe]\nmodel = \"gemini-pro\"\nmax_chars = 120\n",
    )
    .unwrap();

    let config = DescribeConfig::load_strict(&path).unwrap();
    assert_eq!(config.model, "gemini-pro");
    assert_eq!(config.max_chars, 120);
}

#[test]
fn malformed_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[describe\nmodel = ").unwrap();

    assert!(matches!(
        DescribeConfig::load_strict(&path),
        Err(DescribeError::Config(_))
    ));
    // The lenient loader falls back to defaults.
    assert_eq!(DescribeConfig::load(Some(&path)).model, config::DEFAULT_MODEL);
}
