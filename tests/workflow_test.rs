//! Workflow Integration Tests
//!
//! NewsPushWorkflow の統合テスト（フィードとLINE APIはモックサーバー）

use newsline::adapter::config::Config;
use newsline::driver::cli::Args;
use newsline::driver::workflow::NewsPushWorkflow;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_PATH: &str = "/frontpage";
const PUSH_PATH: &str = "/v2/bot/message/push";

fn fixture_feed() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("frontpage.xml");
    fs::read_to_string(path).unwrap()
}

/// テスト用のConfigを作成
fn create_test_config(server: &MockServer) -> Config {
    Config {
        line_access_token: "test-token".to_string(),
        target_user_id: "U1234567890abcdef".to_string(),
        line_api_url: format!("{}{}", server.uri(), PUSH_PATH),
        rss_url: format!("{}{}", server.uri(), FEED_PATH),
    }
}

async fn mount_feed(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn push_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == PUSH_PATH)
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

#[tokio::test]
async fn test_workflow_sends_all_batches() {
    let server = MockServer::start().await;
    mount_feed(&server, fixture_feed()).await;

    Mock::given(method("POST"))
        .and(path(PUSH_PATH))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"sentMessages": []}"#))
        .expect(3)
        .mount(&server)
        .await;

    let workflow = NewsPushWorkflow::new(create_test_config(&server)).unwrap();
    let result = workflow.execute(&Args::default()).await;

    assert!(result.is_ok(), "Workflow should succeed, but got: {:?}", result);

    let bodies = push_bodies(&server).await;
    let sizes: Vec<usize> = bodies
        .iter()
        .map(|b| b["messages"].as_array().unwrap().len())
        .collect();
    assert_eq!(sizes, vec![5, 5, 2]);

    assert_eq!(bodies[0]["to"], "U1234567890abcdef");
    assert_eq!(bodies[0]["messages"][0]["type"], "text");
    assert_eq!(
        bodies[0]["messages"][0]["text"],
        "1. Show HN: A tiny Rust HTTP server\nhttps://example.com/articles/1"
    );
    assert_eq!(
        bodies[2]["messages"][1]["text"],
        "12. Building a keyboard from scratch\nhttps://example.com/articles/12"
    );
}

#[tokio::test]
async fn test_workflow_dry_run_sends_nothing() {
    let server = MockServer::start().await;
    mount_feed(&server, fixture_feed()).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let args = Args {
        dry_run: true,
        env_file: None,
    };

    let workflow = NewsPushWorkflow::new(create_test_config(&server)).unwrap();
    let result = workflow.execute(&args).await;

    assert!(
        result.is_ok(),
        "Workflow should succeed in dry-run mode, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_empty_feed() {
    let server = MockServer::start().await;
    mount_feed(
        &server,
        r#"<rss version="2.0"><channel><title>Empty</title></channel></rss>"#.to_string(),
    )
    .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let workflow = NewsPushWorkflow::new(create_test_config(&server)).unwrap();
    let result = workflow.execute(&Args::default()).await;

    assert!(
        result.is_ok(),
        "Workflow should handle an empty feed, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_stops_on_first_failed_batch() {
    let server = MockServer::start().await;
    mount_feed(&server, fixture_feed()).await;

    Mock::given(method("POST"))
        .and(path(PUSH_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message": "Invalid access token"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let workflow = NewsPushWorkflow::new(create_test_config(&server)).unwrap();
    let err = workflow.execute(&Args::default()).await.unwrap_err();

    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to send LINE message"), "{}", chain);
    assert!(chain.contains("failed to send batch 1-5"), "{}", chain);
    assert!(chain.contains("LINE API returned status 401"), "{}", chain);
}

#[tokio::test]
async fn test_workflow_feed_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let workflow = NewsPushWorkflow::new(create_test_config(&server)).unwrap();
    let err = workflow.execute(&Args::default()).await.unwrap_err();

    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to get news"), "{}", chain);
    assert!(chain.contains("unexpected status code: 503"), "{}", chain);
}

#[tokio::test]
async fn test_workflow_malformed_feed() {
    let server = MockServer::start().await;
    mount_feed(
        &server,
        "<rss><channel><item><title>Broken</item></channel></rss>".to_string(),
    )
    .await;

    let workflow = NewsPushWorkflow::new(create_test_config(&server)).unwrap();
    let err = workflow.execute(&Args::default()).await.unwrap_err();

    assert!(format!("{:#}", err).contains("error parsing XML"));
}
