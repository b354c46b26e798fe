use crate::{fast_config, mount_redirect_chain};
use std::time::Duration;
use web_lens::config::DEFAULT_PROBE_USER_AGENT;
use web_lens::Prober;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn prober() -> Prober {
    Prober::new(&fast_config().prober).expect("Failed to build prober")
}

#[tokio::test]
async fn test_probe_counts_error_statuses_and_failures() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("HEAD"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/ok"))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let links = vec![
        format!("{}/ok", base),
        format!("{}/moved", base),
        format!("{}/missing", base),
        format!("{}/error", base),
        format!("{}/slow", base),
        "http://127.0.0.1:1/refused".to_string(),
    ];

    // missing, error, slow (timeout) and refused
    assert_eq!(prober().probe(&links).await, 4);
}

#[tokio::test]
async fn test_probe_uses_head_with_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(header("user-agent", DEFAULT_PROBE_USER_AGENT))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let links: Vec<String> = (0..3)
        .map(|i| format!("{}/page{}", mock_server.uri(), i))
        .collect();

    assert_eq!(prober().probe(&links).await, 0);
}

#[tokio::test]
async fn test_probe_many_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(50)))
        .expect(35)
        .mount(&mock_server)
        .await;

    let links: Vec<String> = (0..35)
        .map(|i| format!("{}/item/{}", mock_server.uri(), i))
        .collect();

    assert_eq!(prober().probe(&links).await, 0);
}

#[tokio::test]
async fn test_probe_follows_ten_redirects() {
    let mock_server = MockServer::start().await;
    let start = mount_redirect_chain(&mock_server, "HEAD", 10).await;

    assert_eq!(prober().probe(&[start]).await, 0);
}

#[tokio::test]
async fn test_probe_redirect_chain_past_cap_is_inaccessible() {
    let mock_server = MockServer::start().await;
    let too_long = mount_redirect_chain(&mock_server, "HEAD", 11).await;

    Mock::given(method("HEAD"))
        .and(path("/fine"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let links = vec![too_long, format!("{}/fine", mock_server.uri())];
    assert_eq!(prober().probe(&links).await, 1);
}
