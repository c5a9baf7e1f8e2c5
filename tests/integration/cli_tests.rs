//! End-to-end tests for the `web-spider` binary
//!
//! Each test starts a wiremock server, runs the binary inside a fresh
//! temporary directory and checks the exit status, console output and the
//! output file.

use std::path::Path;
use std::process::{Command, Output};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEFAULT_OUTPUT: &str = "web_spider_output.txt";

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(server)
        .await;
}

/// Runs the binary off the async runtime so the mock server keeps serving
async fn run_spider(dir: &Path, args: Vec<String>) -> Output {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_web-spider"))
            .args(&args)
            .current_dir(&dir)
            .output()
            .expect("Failed to run web-spider")
    })
    .await
    .expect("Blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_successful_crawl_reports_output_path() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(&mock_server, "/", r#"<a href="/hello">Hello</a>"#).await;
    mount_html(&mock_server, "/hello", "<h1>Hello</h1><p>world</p>").await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_spider(dir.path(), vec![format!("{}/", base_url)]).await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Wrote link texts to "));
    assert!(stdout.trim_end().ends_with(DEFAULT_OUTPUT));

    let content =
        std::fs::read_to_string(dir.path().join(DEFAULT_OUTPUT)).expect("Output file missing");
    assert_eq!(content, format!("{}/hello\nHello world\n\n", base_url));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_output_option_overrides_default_path() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(&mock_server, "/", r#"<a href="/x">X</a>"#).await;
    mount_html(&mock_server, "/x", "<p>x</p>").await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_spider(
        dir.path(),
        vec![
            format!("{}/", base_url),
            "-o".to_string(),
            "custom.txt".to_string(),
        ],
    )
    .await;

    assert!(output.status.success());
    assert!(dir.path().join("custom.txt").exists());
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_links_exits_with_failure() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", "<p>Nothing to follow</p>").await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_spider(dir.path(), vec![format!("{}/", mock_server.uri())]).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No links found"));
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_base_fetch_failure_exits_with_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_spider(dir.path(), vec![format!("{}/", mock_server.uri())]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to fetch starting page"));
    assert!(stderr.contains("503"));
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dry_run_lists_links_without_output_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(
        &mock_server,
        "/",
        r#"<a href="/one">1</a><a href="/two">2</a><a href="/one">1 again</a>"#,
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_spider(
        dir.path(),
        vec![format!("{}/", base_url), "--dry-run".to_string()],
    )
    .await;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{base}/one\n{base}/two\n", base = base_url)
    );
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_start_url_exits_with_failure() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_spider(dir.path(), vec!["not-a-url".to_string()]).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid starting URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_config_exits_with_failure() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("spider.toml");
    std::fs::write(&config_path, "[fetch]\ntimeout-secs = 0\n").expect("Write failed");

    let output = run_spider(
        dir.path(),
        vec![
            "http://127.0.0.1/".to_string(),
            "--config".to_string(),
            config_path.display().to_string(),
        ],
    )
    .await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("timeout-secs"));
}
