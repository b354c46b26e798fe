//! Integration tests for Web-Lens
//!
//! These tests use wiremock to create mock HTTP servers and exercise fetching,
//! link probing and the full analysis pipeline end-to-end.

mod analyze_tests;
mod prober_tests;

use web_lens::config::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config with short timeouts so failure cases finish quickly
pub fn fast_config() -> Config {
    let mut config = Config::default();
    config.fetcher.timeout_secs = 2;
    config.prober.timeout_secs = 1;
    config
}

/// Mounts `/r0 -> /r1 -> ... -> /r{redirects}` for `http_method`, where the last
/// path answers 200. Returns the URL of `/r0`.
pub async fn mount_redirect_chain(
    server: &MockServer,
    http_method: &str,
    redirects: usize,
) -> String {
    for hop in 0..redirects {
        Mock::given(method(http_method))
            .and(path(format!("/r{}", hop)))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", format!("/r{}", hop + 1).as_str()),
            )
            .mount(server)
            .await;
    }

    Mock::given(method(http_method))
        .and(path(format!("/r{}", redirects)))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>end</html>"))
        .mount(server)
        .await;

    format!("{}/r0", server.uri())
}
