use crate::fast_config;
use web_lens::{analyze_url, FetchError, HtmlVersion, LensError, ParseError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_head(server: &MockServer, link_path: &str, status: u16) {
    Mock::given(method("HEAD"))
        .and(path(link_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_analysis() {
    let site = MockServer::start().await;
    let elsewhere = MockServer::start().await;

    let body = format!(
        r##"<!DOCTYPE html>
        <html>
        <head><title>  Mock Home  </title></head>
        <body>
            <h1>Welcome</h1>
            <h2>One</h2><h2>Two</h2>
            <a href="/about">About</a>
            <a href="/about">About again</a>
            <a href="docs/guide.html">Guide</a>
            <a href="/gone">Gone</a>
            <a href="{}/partner">Partner</a>
            <a href="#top">Top</a>
            <a href="mailto:team@example.com">Mail</a>
            <form action="/login"><input type="text" name="user"></form>
        </body>
        </html>"##,
        elsewhere.uri()
    );
    mount_page(&site, "/", body).await;

    mount_head(&site, "/about", 200).await;
    mount_head(&site, "/docs/guide.html", 200).await;
    mount_head(&site, "/gone", 404).await;
    mount_head(&elsewhere, "/partner", 503).await;

    let result = analyze_url(&fast_config(), &format!("{}/", site.uri()))
        .await
        .expect("Analysis failed");

    assert_eq!(result.url, format!("{}/", site.uri()));
    assert_eq!(result.html_version, HtmlVersion::Html5);
    assert_eq!(result.title, "Mock Home");
    assert_eq!(result.headings.len(), 2);
    assert_eq!(result.headings["h1"], 1);
    assert_eq!(result.headings["h2"], 2);
    assert_eq!(result.internal_links, 4);
    assert_eq!(result.external_links, 1);
    assert_eq!(result.inaccessible_links, 2);
    assert!(result.has_login_form);
}

#[tokio::test]
async fn test_duplicate_links_probed_once() {
    let site = MockServer::start().await;

    let body = format!(
        r#"<html><body>
            <a href="/same">One</a>
            <a href="{}/same">Two</a>
        </body></html>"#,
        site.uri()
    );
    mount_page(&site, "/", body).await;

    Mock::given(method("HEAD"))
        .and(path("/same"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&site)
        .await;

    let result = analyze_url(&fast_config(), &site.uri())
        .await
        .expect("Analysis failed");

    assert_eq!(result.internal_links, 2);
    assert_eq!(result.inaccessible_links, 0);
    assert_eq!(result.html_version, HtmlVersion::NoDoctype);
}

#[tokio::test]
async fn test_links_resolve_against_final_url() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/blog/index.html"))
        .mount(&site)
        .await;

    mount_page(
        &site,
        "/blog/index.html",
        r#"<html><body><a href="post.html">Post</a></body></html>"#.to_string(),
    )
    .await;

    Mock::given(method("HEAD"))
        .and(path("/blog/post.html"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&site)
        .await;

    let result = analyze_url(&fast_config(), &format!("{}/start", site.uri()))
        .await
        .expect("Analysis failed");

    assert_eq!(result.url, format!("{}/blog/index.html", site.uri()));
    assert_eq!(result.internal_links, 1);
    assert_eq!(result.inaccessible_links, 0);
}

#[tokio::test]
async fn test_page_without_links_makes_no_probes() {
    let site = MockServer::start().await;

    mount_page(
        &site,
        "/",
        r#"<html><body><input type="text"></body></html>"#.to_string(),
    )
    .await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&site)
        .await;

    let result = analyze_url(&fast_config(), &site.uri())
        .await
        .expect("Analysis failed");

    assert_eq!(result.internal_links + result.external_links, 0);
    assert_eq!(result.inaccessible_links, 0);
    assert!(!result.has_login_form);
}

#[tokio::test]
async fn test_remote_404_produces_no_result() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&site)
        .await;

    let err = analyze_url(&fast_config(), &format!("{}/nope", site.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.remote_status(), Some(404));
    assert!(matches!(
        err,
        LensError::Fetch(FetchError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_empty_body_is_parse_error() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&site)
        .await;

    let err = analyze_url(&fast_config(), &site.uri()).await.unwrap_err();

    assert!(matches!(err, LensError::Parse(ParseError::Empty)));
    assert_eq!(err.remote_status(), None);
}

#[tokio::test]
async fn test_empty_input_is_rejected() {
    let err = analyze_url(&fast_config(), "   ").await.unwrap_err();
    assert!(matches!(err, LensError::Fetch(FetchError::EmptyUrl)));
}
