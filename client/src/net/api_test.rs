use futures::executor::block_on;

use super::*;
use crate::net::test_support::StubTransport;
use crate::net::transport::Method;
use crate::net::types::AnalysisStatus;
use crate::util::storage::MemoryStorage;

const BASE: &str = "http://api.test";

fn client(stub: &StubTransport) -> ApiClient<&StubTransport> {
    ApiClient::new(BASE, stub)
}

fn empty_store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn endpoint_joins_base_prefix_and_path() {
    let stub = StubTransport::new();
    assert_eq!(client(&stub).endpoint("/auth/login"), "http://api.test/api/v1.0.0/auth/login");
}

#[test]
fn new_strips_trailing_slash_from_base() {
    let stub = StubTransport::new();
    let api = ApiClient::new("http://api.test/", &stub);
    assert_eq!(api.base_url(), "http://api.test");
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_writes_session_and_returns_server_message() {
    let stub = StubTransport::replying(
        200,
        r#"{"token":"abc123","displayName":"John Doe","message":"Login successful"}"#,
    );
    let store = empty_store();

    let outcome = block_on(client(&stub).login(&store, "john.doe@example.com", "password123"));

    let expected = Session::new("abc123", "john.doe@example.com", Some("John Doe".to_owned()));
    assert!(outcome.success);
    assert_eq!(outcome.message, "Login successful");
    assert_eq!(outcome.session, Some(expected.clone()));
    assert_eq!(store.read(), Some(expected));
}

#[test]
fn login_sends_credentials_as_json_without_auth_header() {
    let stub = StubTransport::replying(200, r#"{"token":"t"}"#);
    block_on(client(&stub).login(&empty_store(), "u@example.com", "pw"));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://api.test/api/v1.0.0/auth/login");
    assert_eq!(requests[0].bearer, None);
    assert_eq!(requests[0].body, Some(serde_json::json!({ "username": "u@example.com", "password": "pw" })));
}

#[test]
fn login_success_without_display_name_falls_back_to_username() {
    let stub = StubTransport::replying(200, r#"{"token":"tok"}"#);
    let store = empty_store();

    let outcome = block_on(client(&stub).login(&store, "jane@example.com", "pw"));

    assert!(outcome.success);
    assert_eq!(outcome.message, "Login successful");
    let session = store.read().unwrap();
    assert_eq!(session.token, "tok");
    assert_eq!(session.username, "jane@example.com");
    assert_eq!(session.display_label(), "jane@example.com");
}

#[test]
fn login_rejected_leaves_store_unchanged() {
    let stub = StubTransport::replying(401, r#"{"message":"Bad credentials"}"#);
    let store = empty_store();
    let previous = Session::new("old", "old@example.com", None);
    store.write(&previous);

    let outcome = block_on(client(&stub).login(&store, "john.doe@example.com", "wrong"));

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Bad credentials");
    assert_eq!(outcome.session, None);
    assert_eq!(store.read(), Some(previous));
}

#[test]
fn login_rejected_without_body_uses_default_message() {
    let stub = StubTransport::replying(500, "");
    let store = empty_store();

    let outcome = block_on(client(&stub).login(&store, "u", "p"));

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Login failed");
    assert!(!store.is_present());
}

#[test]
fn login_transport_failure_is_generic_failure() {
    let stub = StubTransport::failing(TransportError::Network("offline".to_owned()));
    let store = empty_store();

    let outcome = block_on(client(&stub).login(&store, "u", "p"));

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Unauthorized. Please try again.");
    assert!(!store.is_present());
}

#[test]
fn login_success_without_token_is_failure() {
    let stub = StubTransport::replying(200, r#"{"message":"ok"}"#);
    let store = empty_store();

    let outcome = block_on(client(&stub).login(&store, "u", "p"));

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Login failed");
    assert!(!store.is_present());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_conflict_returns_server_message_and_leaves_store_unchanged() {
    let stub = StubTransport::replying(409, r#"{"message":"Email already registered"}"#);
    let store = empty_store();

    let outcome = block_on(client(&stub).register(&store, "John", "Doe", "john.doe@example.com", "pw"));

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Email already registered");
    assert!(!store.is_present());
}

#[test]
fn register_success_falls_back_to_full_name() {
    let stub = StubTransport::replying(200, r#"{"token":"new-token"}"#);
    let store = empty_store();

    let outcome = block_on(client(&stub).register(&store, "John", "Doe", "john.doe@example.com", "pw"));

    assert!(outcome.success);
    assert_eq!(outcome.message, "Registration successful");
    let session = store.read().unwrap();
    assert_eq!(session.display_name.as_deref(), Some("John Doe"));
    assert_eq!(session.username, "john.doe@example.com");
}

#[test]
fn register_sends_camel_case_body() {
    let stub = StubTransport::replying(200, r#"{"token":"t"}"#);
    block_on(client(&stub).register(&empty_store(), "A", "B", "a@b.c", "pw"));

    let request = &stub.requests()[0];
    assert_eq!(request.url, "http://api.test/api/v1.0.0/auth/register");
    assert_eq!(
        request.body,
        Some(serde_json::json!({ "firstName": "A", "lastName": "B", "username": "a@b.c", "password": "pw" }))
    );
}

#[test]
fn register_transport_failure_uses_network_message() {
    let stub = StubTransport::failing(TransportError::Network("offline".to_owned()));
    let outcome = block_on(client(&stub).register(&empty_store(), "A", "B", "a@b.c", "pw"));
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Network error. Please try again.");
}

// =============================================================
// GitHub connection endpoints
// =============================================================

#[test]
fn github_status_parses_boolean_with_bearer() {
    let stub = StubTransport::replying(200, "true");
    let connected = block_on(client(&stub).github_status("abc123")).unwrap();

    assert!(connected);
    let request = &stub.requests()[0];
    assert_eq!(request.url, "http://api.test/api/v1.0.0/auth/github/status");
    assert_eq!(request.authorization_header().as_deref(), Some("Bearer abc123"));
}

#[test]
fn github_status_server_error_is_status_error() {
    let stub = StubTransport::replying(500, "boom");
    let err = block_on(client(&stub).github_status("t")).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[test]
fn github_status_rejected_token_is_unauthorized() {
    let stub = StubTransport::replying(401, "");
    let err = block_on(client(&stub).github_status("stale")).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn github_status_non_boolean_body_is_decode_error() {
    let stub = StubTransport::replying(200, r#"{"connected":true}"#);
    let err = block_on(client(&stub).github_status("t")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn github_oauth_url_returns_trimmed_text() {
    let stub = StubTransport::replying(200, "https://github.com/login/oauth/authorize?client_id=x\n");
    let url = block_on(client(&stub).github_oauth_url("t")).unwrap();
    assert_eq!(url, "https://github.com/login/oauth/authorize?client_id=x");
}

#[test]
fn github_oauth_url_empty_body_is_error() {
    let stub = StubTransport::replying(200, "  ");
    assert!(block_on(client(&stub).github_oauth_url("t")).is_err());
}

// =============================================================
// Analysis endpoints
// =============================================================

#[test]
fn trigger_analysis_encodes_repo_url() {
    let stub = StubTransport::replying(200, r#"{"status":"success","message":"Queued"}"#);
    let outcome = block_on(client(&stub).trigger_analysis("t", "https://github.com/vercel/next.js"));

    assert_eq!(outcome, AnalyzeOutcome { success: true, message: "Queued".to_owned() });
    let request = &stub.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.url,
        "http://api.test/api/v1.0.0/analyze/repo?repoUrl=https%3A%2F%2Fgithub.com%2Fvercel%2Fnext.js"
    );
    assert_eq!(request.bearer.as_deref(), Some("t"));
}

#[test]
fn trigger_analysis_non_success_status_in_body_is_failure() {
    let stub = StubTransport::replying(200, r#"{"status":"error"}"#);
    let outcome = block_on(client(&stub).trigger_analysis("t", "https://github.com/a/b"));
    assert_eq!(outcome, AnalyzeOutcome { success: false, message: "Failed to analyze repository.".to_owned() });
}

#[test]
fn trigger_analysis_success_without_message_uses_default() {
    let stub = StubTransport::replying(200, r#"{"status":"success"}"#);
    let outcome = block_on(client(&stub).trigger_analysis("t", "https://github.com/a/b"));
    assert!(outcome.success);
    assert_eq!(outcome.message, "Repository analysis completed successfully!");
}

#[test]
fn trigger_analysis_transport_failure_is_network_message() {
    let stub = StubTransport::failing(TransportError::Network("offline".to_owned()));
    let outcome = block_on(client(&stub).trigger_analysis("t", "https://github.com/a/b"));
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Network error. Please try again.");
}

#[test]
fn list_analyses_decodes_records() {
    let stub = StubTransport::replying(
        200,
        r#"[{"id":1,"repoUrl":"https://github.com/a/b","status":"COMPLETED","result":{"statistics":[]}},
            {"id":2,"repoUrl":"https://github.com/c/d","status":"IN_PROGRESS","result":null}]"#,
    );
    let records = block_on(client(&stub).list_analyses("t")).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].status, AnalysisStatus::InProgress);
    assert_eq!(stub.requests()[0].url, "http://api.test/api/v1.0.0/analyze/allProjects");
}

#[test]
fn list_analyses_tolerates_nulls_inside_llm_result() {
    let stub = StubTransport::replying(
        200,
        r#"[{"id":1,"repoUrl":"https://github.com/a/b","status":"COMPLETED","result":{"statistics":[{"author":"A","lines_changed":10,"total_commits":2}]}},
            {"id":2,"repoUrl":"https://github.com/c/d","status":"COMPLETED",
             "result":{"ai_summary":{"contributors":[{"name":"X","impact_summary":null,"contribution_percentage":null}],"overall_summary":null},"statistics":null}}]"#,
    );
    let records = block_on(client(&stub).list_analyses("t")).unwrap();

    assert_eq!(records.len(), 2);
    let result = records[1].result.as_ref().unwrap();
    assert!(result.statistics.is_empty());
    assert_eq!(result.contributors()[0].name, "X");
    assert_eq!(result.contributors()[0].impact_summary, "");
    assert_eq!(result.overall_summary(), "No summary available");
}

#[test]
fn list_analyses_skips_undecodable_records_and_keeps_the_rest() {
    let stub = StubTransport::replying(
        200,
        r#"[{"id":1,"repoUrl":"https://github.com/a/b","status":"COMPLETED"},
            {"id":"not-a-number","repoUrl":"https://github.com/c/d"},
            {"repoUrl":"https://github.com/e/f"},
            {"id":4,"repoUrl":"https://github.com/g/h","status":"FAILED"}]"#,
    );
    let records = block_on(client(&stub).list_analyses("t")).unwrap();

    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn list_analyses_non_array_body_is_decode_error() {
    let stub = StubTransport::replying(200, r#"{"message":"oops"}"#);
    let err = block_on(client(&stub).list_analyses("t")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn fetch_analysis_formats_id_path() {
    let stub = StubTransport::replying(200, r#"{"id":9,"repoUrl":"https://github.com/a/b","status":"FAILED"}"#);
    let record = block_on(client(&stub).fetch_analysis("t", 9)).unwrap();

    assert_eq!(record.id, 9);
    assert_eq!(record.status, AnalysisStatus::Failed);
    assert_eq!(stub.requests()[0].url, "http://api.test/api/v1.0.0/analyze/project/9");
}

#[test]
fn fetch_analysis_forbidden_is_unauthorized() {
    let stub = StubTransport::replying(403, "");
    let err = block_on(client(&stub).fetch_analysis("t", 1)).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn status_error_extracts_json_message() {
    let stub = StubTransport::replying(404, r#"{"message":"Analysis not found"}"#);
    let err = block_on(client(&stub).fetch_analysis("t", 1)).unwrap_err();
    assert_eq!(err.to_string(), "server returned 404: Analysis not found");
}
