use pretty_assertions::assert_eq;

use monitor_engine::{
    ClientSettings, Endpoints, ReqwestStatusApi, ResultParameters, StatusApi,
    TransportFailureKind,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params() -> ResultParameters {
    ResultParameters {
        username: "alice".to_string(),
        year: "2023".to_string(),
        sort_by: "playcount".to_string(),
        release_scope: "all".to_string(),
        decade: None,
        release_year: None,
        min_plays: 5,
        min_tracks: 3,
    }
}

#[test]
fn form_omits_blank_optional_fields() {
    let mut p = params();
    p.release_year = Some("  ".to_string());

    let fields = p.form_fields();

    assert_eq!(
        fields,
        vec![
            ("username", "alice".to_string()),
            ("year", "2023".to_string()),
            ("sort_by", "playcount".to_string()),
            ("release_scope", "all".to_string()),
            ("min_plays", "5".to_string()),
            ("min_tracks", "3".to_string()),
        ]
    );
}

#[test]
fn form_carries_optional_fields_when_present() {
    let mut p = params();
    p.decade = Some("1990s".to_string());
    p.release_year = Some("1994".to_string());

    let fields = p.form_fields();

    assert_eq!(
        fields,
        vec![
            ("username", "alice".to_string()),
            ("year", "2023".to_string()),
            ("sort_by", "playcount".to_string()),
            ("release_scope", "all".to_string()),
            ("decade", "1990s".to_string()),
            ("release_year", "1994".to_string()),
            ("min_plays", "5".to_string()),
            ("min_tracks", "3".to_string()),
        ]
    );
}

#[tokio::test]
async fn submit_posts_the_urlencoded_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/results_complete"))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded",
        ))
        .and(body_string(
            "username=alice&year=2023&sort_by=playcount&release_scope=all\
             &min_plays=5&min_tracks=3",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let endpoints = Endpoints::from_base(&server.uri()).expect("endpoints");
    let api = ReqwestStatusApi::new(ClientSettings::default(), endpoints);

    api.submit_results(&params()).await.expect("submit ok");
}

#[tokio::test]
async fn failed_submission_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/results_complete"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let endpoints = Endpoints::from_base(&server.uri()).expect("endpoints");
    let api = ReqwestStatusApi::new(ClientSettings::default(), endpoints);

    let err = api.submit_results(&params()).await.unwrap_err();

    assert_eq!(err.kind, TransportFailureKind::HttpStatus(500));
}
