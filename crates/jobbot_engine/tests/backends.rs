use jobbot_engine::{
    AdapterErrorKind, BackendSettings, ChatBackend, HttpChatBackend, HttpJobSearchBackend,
    JobSearchBackend,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> BackendSettings {
    BackendSettings::new(
        format!("{}/chat", server.uri()),
        format!("{}/jobs/search", server.uri()),
    )
}

#[tokio::test]
async fn chat_backend_returns_the_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "message": "hello there" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "Be specific and calm."
        })))
        .mount(&server)
        .await;

    let backend = HttpChatBackend::new(settings_for(&server));
    let reply = backend.send("hello there").await.expect("chat ok");
    assert_eq!(reply.reply, "Be specific and calm.");
}

#[tokio::test]
async fn chat_backend_normalizes_a_missing_reply_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let backend = HttpChatBackend::new(settings_for(&server));
    let reply = backend.send("hello").await.expect("chat ok");
    assert_eq!(reply.reply, "");
}

#[tokio::test]
async fn chat_backend_treats_non_2xx_as_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend = HttpChatBackend::new(settings_for(&server));
    let err = backend.send("hello").await.unwrap_err();
    assert_eq!(err.kind, AdapterErrorKind::Unreachable);
}

#[tokio::test]
async fn chat_backend_flags_an_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let backend = HttpChatBackend::new(settings_for(&server));
    let err = backend.send("hello").await.unwrap_err();
    assert_eq!(err.kind, AdapterErrorKind::MalformedResponse);
}

#[tokio::test]
async fn chat_backend_reports_a_refused_connection_as_unreachable() {
    // Port 1 is never bound; the connection is refused immediately.
    let backend = HttpChatBackend::new(BackendSettings::new(
        "http://127.0.0.1:1/chat",
        "http://127.0.0.1:1/jobs/search",
    ));
    let err = backend.send("hello").await.unwrap_err();
    assert_eq!(err.kind, AdapterErrorKind::Unreachable);
}

#[tokio::test]
async fn job_backend_sends_the_raw_query_and_normalizes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .and(query_param("query", "python developer job in Berlin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "title": "Senior Python Developer",
                    "company": "Globex",
                    "location": "Berlin",
                    "job_type": "Fulltime",
                    "salary": "90k",
                    "posted": "2026-08-01",
                    "skills_required": "Python, SQL",
                    "hr_email": "hr@globex.example"
                },
                {
                    "title": "Data Analyst",
                    "company": "Initech",
                    "location": null,
                    "job_type": "Contract",
                    "salary": "60k",
                    "posted": "2026-07-28"
                }
            ]
        })))
        .mount(&server)
        .await;

    let backend = HttpJobSearchBackend::new(settings_for(&server));
    let records = backend
        .search("python developer job in Berlin")
        .await
        .expect("search ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Senior Python Developer");
    assert_eq!(records[0].skills_required.as_deref(), Some("Python, SQL"));
    assert_eq!(records[0].experience_required, None);
    assert_eq!(records[1].title, "Data Analyst");
    // Null required fields normalize to empty strings.
    assert_eq!(records[1].location, "");
    assert_eq!(records[1].hr_email, None);
}

#[tokio::test]
async fn job_backend_accepts_an_empty_result_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let backend = HttpJobSearchBackend::new(settings_for(&server));
    let records = backend.search("cobol vacancy").await.expect("search ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn job_backend_accepts_a_missing_results_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let backend = HttpJobSearchBackend::new(settings_for(&server));
    let records = backend.search("cobol vacancy").await.expect("search ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn job_backend_treats_non_2xx_as_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let backend = HttpJobSearchBackend::new(settings_for(&server));
    let err = backend.search("python").await.unwrap_err();
    assert_eq!(err.kind, AdapterErrorKind::Unreachable);
}

#[tokio::test]
async fn job_backend_flags_an_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let backend = HttpJobSearchBackend::new(settings_for(&server));
    let err = backend.search("python").await.unwrap_err();
    assert_eq!(err.kind, AdapterErrorKind::MalformedResponse);
}
