//! CLI flow tests against a mock fzmovies site

use clap::Parser;
use fzmovies_cli::{Cli, Status, commands::NO_RESULTS, run};
use fzmovies_core::ClientConfig;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOMEPAGE: &str = r#"
<html><body>
<form action="csearch.php" method="post">
    <input type="text" name="searchname">
    <input type="submit" name="Search" value="Search">
</form>
</body></html>
"#;

fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body.into())
}

fn mainbox(href: &str, title: &str) -> String {
    format!(
        r#"<div class="mainbox">
            <a href="{href}"><img src="poster.jpg"></a>
            <a href="{href}"><small><b>{title}</b></small></a><br>
            <small>(2010)</small><br><small>BluRay</small>
        </div>"#
    )
}

async fn run_against(server: &MockServer, input: Option<&str>) -> (Status, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run(
        input,
        ClientConfig::with_base_url(server.uri()),
        &mut out,
        &mut err,
    )
    .await
    .expect("writing to memory cannot fail");

    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

async fn mount_search(server: &MockServer, listing: String) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(HOMEPAGE))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/csearch.php"))
        .respond_with(html(listing))
        .mount(server)
        .await;
}

#[tokio::test]
async fn missing_argument_exits_with_usage() {
    let server = MockServer::start().await;

    let (status, out, err) = run_against(&server, None).await;
    assert_eq!(status, Status::Usage);
    assert!(out.is_empty());
    assert!(err.contains("Usage: fzmovies"));

    let (status, _, _) = run_against(&server, Some("")).await;
    assert_eq!(status, Status::Usage);
}

#[tokio::test]
async fn unquoted_words_run_one_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(HOMEPAGE))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/csearch.php"))
        .and(body_string_contains("searchname=the+dark+knight"))
        .respond_with(html(mainbox("movie-The-Dark-Knight--hmp4.htm", "The Dark Knight")))
        .expect(1)
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from(["fzmovies", "the", "dark", "knight"])
        .expect("extra words are part of the query");
    let input = cli.input();
    let (status, out, _) = run_against(&server, input.as_deref()).await;

    assert_eq!(status, Status::Completed);
    assert!(out.starts_with("1. The Dark Knight\n"));
}

#[tokio::test]
async fn search_prints_numbered_entries() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        format!(
            "<html><body>{}{}{}</body></html>",
            mainbox("movie-Inception--hmp4.htm", "Inception"),
            mainbox("movie-Inception-Sequel--hmp4.htm", "Inception Sequel"),
            mainbox("/movie-Inception-Making-Of--hmp4.htm", "Inception Making Of"),
        ),
    )
    .await;

    let (status, out, _) = run_against(&server, Some("inception")).await;
    let base = server.uri();

    assert_eq!(status, Status::Completed);
    assert_eq!(
        out,
        format!(
            "1. Inception\n   {base}/movie-Inception--hmp4.htm\n\
             2. Inception Sequel\n   {base}/movie-Inception-Sequel--hmp4.htm\n\
             3. Inception Making Of\n   {base}/movie-Inception-Making-Of--hmp4.htm\n"
        )
    );
}

#[tokio::test]
async fn search_never_prints_more_than_five() {
    let server = MockServer::start().await;
    let boxes: String = (1..=9)
        .map(|i| mainbox(&format!("movie-{i}--hmp4.htm"), &format!("Movie {i}")))
        .collect();
    mount_search(&server, format!("<html><body>{boxes}</body></html>")).await;

    let (_, out, _) = run_against(&server, Some("movie")).await;
    let entries = out.lines().filter(|l| !l.starts_with("   ")).count();

    assert_eq!(entries, 5);
    assert!(out.starts_with("1. Movie 1\n"));
    assert!(out.contains("5. Movie 5\n"));
}

#[tokio::test]
async fn search_without_results_exits_cleanly() {
    let server = MockServer::start().await;
    mount_search(&server, "<html><body><p>Nothing here</p></body></html>".to_string()).await;

    let (status, out, _) = run_against(&server, Some("inception")).await;
    assert_eq!(status, Status::Completed);
    assert_eq!(out, format!("{}\n", NO_RESULTS));
}

#[tokio::test]
async fn only_media_info_link_reports_no_download_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie-Inception--hmp4.htm"))
        .respond_with(html(
            r#"<ul class="moviesfiles"><li><a href="mediainfo.php?id=1">Media info</a></li></ul>"#,
        ))
        .mount(&server)
        .await;

    let input = format!("{}/movie-Inception--hmp4.htm", server.uri());
    let (status, out, _) = run_against(&server, Some(&input)).await;

    assert_eq!(status, Status::Completed);
    assert_eq!(out, "No download pages found\n");
}

#[tokio::test]
async fn full_chain_prints_direct_links_in_page_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie-Inception--hmp4.htm"))
        .respond_with(html(
            r#"<ul class="moviesfiles">
                <li><a href="mediainfo.php?id=1">Media info</a></li>
                <li><a href="download1.php?downloadoptionslink=1">Inception.mp4</a></li>
            </ul>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/download1.php"))
        .respond_with(html(
            r#"<a id="downloadlink" href="download.php?downloadlink=MQ==">Download</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/download.php"))
        .respond_with(html(
            r#"<input name="download1" value="https://dl-a.example.net/Inception.mp4">
               <input name="download1" value="https://dl-b.example.net/Inception.mp4">"#,
        ))
        .mount(&server)
        .await;

    let input = format!("{}/movie-Inception--hmp4.htm", server.uri());
    let (status, out, _) = run_against(&server, Some(&input)).await;

    assert_eq!(status, Status::Completed);
    assert_eq!(
        out,
        "1. https://dl-a.example.net/Inception.mp4\n2. https://dl-b.example.net/Inception.mp4\n"
    );
}

#[tokio::test]
async fn transport_failure_is_reported_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie-Inception--hmp4.htm"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let input = format!("{}/movie-Inception--hmp4.htm", server.uri());
    let (status, out, _) = run_against(&server, Some(&input)).await;

    assert_eq!(status, Status::Completed);
    assert!(out.starts_with("Unexpected HTTP status 404"));
}
