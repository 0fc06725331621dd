//! CLI tests against a mock Airtable.
//!
//! The binary runs as a child process with an isolated HOME; the mock server
//! runs on the test's runtime, so these tests need the multi-threaded
//! flavor to keep serving while the child blocks a worker.

mod common;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    BASE, TABLE, TABLE_PATH, json_lines, run_cli, run_cli_failure, run_cli_success,
};

fn rec_id(n: usize) -> String {
    format!("rec{:014}", n)
}

fn wire_record(n: usize, fields: Value) -> Value {
    json!({"id": rec_id(n), "createdTime": "2025-03-04T17:21:09.000Z", "fields": fields})
}

/// Connection flags pointing at the mock server.
fn connect(server: &MockServer) -> Vec<String> {
    vec![
        "--api-key".to_string(),
        "patTestKey".to_string(),
        "--api-url".to_string(),
        server.uri(),
    ]
}

fn with<'a>(conn: &'a [String], args: &[&'a str]) -> Vec<&'a str> {
    conn.iter().map(String::as_str).chain(args.iter().copied()).collect()
}

fn astoria() -> Value {
    wire_record(1, json!({
        "Title": "District Wi-Fi Refresh",
        "Application Number": "251042800",
        "Buyer": "Astoria School District",
        "State": "OR",
        "Funding Year": "2025",
        "Contact Name": "Jordan Lee",
        "Contact Email": "jlee@astoria.k12.or.us",
        "Contact Phone Number": "503-555-0100",
        "Total Funding Commitment": 84210.5
    }))
}

// ============================================================================
// Records
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_records_list_follows_pages() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("pageSize", "2"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [wire_record(1, json!({"Name": "A"})), wire_record(2, json!({"Name": "B"}))],
            "offset": "itr1/rec2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("offset", "itr1/rec2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [wire_record(3, json!({"Name": "C"}))]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(
        &with(&conn, &["--base", BASE, "records", "list", TABLE, "--page-size", "2"]),
        home.path(),
    );

    let records = json_lines(&stdout);
    let names: Vec<_> = records.iter().map(|r| r["fields"]["Name"].clone()).collect();
    assert_eq!(names, vec![json!("A"), json!("B"), json!("C")]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_list_forwards_sort_and_filter() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("filterByFormula", "{State} = 'OR'"))
        .and(query_param("sort[0][field]", "Funding Year"))
        .and(query_param("sort[0][direction]", "desc"))
        .and(query_param("maxRecords", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let output = run_cli(
        &with(
            &conn,
            &[
                "--base",
                BASE,
                "records",
                "list",
                TABLE,
                "--filter",
                "{State} = 'OR'",
                "--sort",
                "Funding Year:desc",
                "--max-records",
                "5",
            ],
        ),
        home.path(),
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No records found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_get_missing_fails() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("{}/{}", TABLE_PATH, rec_id(9))))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "NOT_FOUND"})))
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stderr = run_cli_failure(
        &with(&conn, &["--base", BASE, "records", "get", TABLE, &rec_id(9)]),
        home.path(),
    );
    assert!(stderr.contains("Failed to get record"));
    assert!(stderr.contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_create_inline_json() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(header("authorization", "Bearer patTestKey"))
        .and(body_json(json!({"fields": {"Name": "Test Record"}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(wire_record(4, json!({"Name": "Test Record"}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(
        &with(
            &conn,
            &["--base", BASE, "records", "create", TABLE, "--json", r#"{"Name": "Test Record"}"#],
        ),
        home.path(),
    );

    let records = json_lines(&stdout);
    assert_eq!(records[0]["id"], rec_id(4));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_update_and_replace_use_patch_and_put() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let record_path = format!("{}/{}", TABLE_PATH, rec_id(1));

    Mock::given(method("PATCH"))
        .and(path(record_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire_record(
            1,
            json!({"Name": "Kept", "Status": "Completed"}),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(record_path))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(wire_record(1, json!({"Status": "Completed"}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let id = rec_id(1);
    let change = r#"{"Status": "Completed"}"#;

    let merged = run_cli_success(
        &with(&conn, &["--base", BASE, "records", "update", TABLE, &id, "--json", change]),
        home.path(),
    );
    assert_eq!(json_lines(&merged)[0]["fields"]["Name"], "Kept");

    let replaced = run_cli_success(
        &with(&conn, &["--base", BASE, "records", "replace", TABLE, &id, "--json", change]),
        home.path(),
    );
    assert!(json_lines(&replaced)[0]["fields"].get("Name").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_delete_batch() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                {"id": rec_id(1), "deleted": true},
                {"id": rec_id(2), "deleted": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(
        &with(&conn, &["--base", BASE, "records", "delete", TABLE, &rec_id(1), &rec_id(2)]),
        home.path(),
    );
    assert_eq!(json_lines(&stdout).len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_delete_oversize_batch_sends_nothing() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(0)
        .mount(&server)
        .await;

    let ids: Vec<String> = (1..=11).map(rec_id).collect();
    let mut args = vec!["--base", BASE, "records", "delete", TABLE];
    args.extend(ids.iter().map(String::as_str));

    let conn = connect(&server);
    let stderr = run_cli_failure(&with(&conn, &args), home.path());
    assert!(stderr.contains("exceeds the limit of 10"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_find_escapes_value() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("filterByFormula", r"{Contact Name} = 'O\'Brien'"))
        .and(query_param("maxRecords", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [wire_record(7, json!({"Contact Name": "O'Brien"}))]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(
        &with(
            &conn,
            &["--base", BASE, "records", "find", TABLE, "--field", "Contact Name", "--value", "O'Brien"],
        ),
        home.path(),
    );
    assert_eq!(json_lines(&stdout)[0]["id"], rec_id(7));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_records_fields_survey() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("maxRecords", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                wire_record(1, json!({"Title": "A"})),
                wire_record(2, json!({"Title": "B", "Status": "Committed"}))
            ]
        })))
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(
        &with(&conn, &["--base", BASE, "records", "fields", TABLE]),
        home.path(),
    );

    assert!(stdout.contains("- Status"));
    assert!(stdout.contains("- Title"));
    assert!(stdout.contains("Not present in the first record"));
}

// ============================================================================
// Form 470
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_form470_get_uses_default_base() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("filterByFormula", "{Application Number} = '251042800'"))
        .and(query_param("maxRecords", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": [astoria()]})))
        .expect(1)
        .mount(&server)
        .await;

    // No --base: Form 470 commands know their base.
    let conn = connect(&server);
    let stdout = run_cli_success(&with(&conn, &["form470", "get", "251042800"]), home.path());

    let form: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(form["fields"]["Buyer"], "Astoria School District");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_form470_get_no_match_fails() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stderr = run_cli_failure(&with(&conn, &["form470", "get", "999999999"]), home.path());
    assert!(stderr.contains("No Form 470 found with application number: 999999999"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_form470_by_state() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("filterByFormula", "{State} = 'OR'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": [astoria()]})))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(&with(&conn, &["form470", "by-state", "OR"]), home.path());
    assert_eq!(json_lines(&stdout).len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_form470_prefill_deal() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": [astoria()]})))
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(
        &with(&conn, &["form470", "prefill", "deal", "251042800"]),
        home.path(),
    );

    let deal: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(deal["firstName"], "Jordan");
    assert_eq!(deal["lastName"], "Lee");
    assert_eq!(deal["title"], "Authorized Person");
    assert_eq!(
        deal["projectName"],
        "E-Rate Opportunity with Astoria School District"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_form470_prefill_deal_missing_fields() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [wire_record(2, json!({"Application Number": "251042801", "Buyer": "Tiny SD"}))]
        })))
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stderr = run_cli_failure(
        &with(&conn, &["form470", "prefill", "deal", "251042801"]),
        home.path(),
    );
    assert!(stderr.contains("missing required fields: Contact Name, Contact Email"));
}

// ============================================================================
// Schema and Config
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_schema() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v0/meta/bases/app742LUED30ISmmF/tables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tables": [{
                "id": TABLE,
                "name": "Form 470",
                "primaryFieldId": "fld0000000000001",
                "fields": [
                    {"id": "fld0000000000001", "name": "Title", "type": "singleLineText"},
                    {"id": "fld0000000000002", "name": "Size", "type": "number"}
                ],
                "views": [{"id": "viwxQMzxTvYjB3mGX", "name": "Grid view", "type": "grid"}]
            }]
        })))
        .mount(&server)
        .await;

    let conn = connect(&server);
    let stdout = run_cli_success(&with(&conn, &["--base", BASE, "schema"]), home.path());

    assert!(stdout.contains("Form 470 (tblPRqxmCUOo09XCP)"));
    assert!(stdout.contains("- Size number"));
    assert!(stdout.contains("Grid view (viwxQMzxTvYjB3mGX)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stored_config_is_used() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(header("authorization", "Bearer patStoredKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": [astoria()]})))
        .expect(1)
        .mount(&server)
        .await;

    run_cli_success(&["config", "set", "api-key", "patStoredKey"], home.path());
    run_cli_success(&["config", "set", "api-url", &server.uri()], home.path());
    run_cli_success(&["config", "set", "base", BASE], home.path());

    let shown = run_cli_success(&["config", "show"], home.path());
    assert!(!shown.contains("patStoredKey"));
    assert!(shown.contains(BASE));

    let stdout = run_cli_success(&["records", "list", TABLE], home.path());
    assert_eq!(json_lines(&stdout).len(), 1);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let path = home.path().join("config/airtab/config.json");
        let mode = std::fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_form470_ignores_stored_base() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": [astoria()]})))
        .expect(1)
        .mount(&server)
        .await;

    run_cli_success(&["config", "set", "api-key", "patStoredKey"], home.path());
    run_cli_success(&["config", "set", "api-url", &server.uri()], home.path());
    run_cli_success(&["config", "set", "base", "appStoredBase0001"], home.path());

    let stdout = run_cli_success(&["form470", "get", "251042800"], home.path());
    let form: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(form["fields"]["Application Number"], "251042800");
}

#[test]
fn test_config_rejects_invalid_base() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(&["config", "set", "base", "not-a-base"], home.path());
    assert!(stderr.contains("Invalid base id"));
}

#[test]
fn test_missing_api_key() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(&["records", "list", TABLE, "--base", BASE], home.path());
    assert!(stderr.contains("No API key"));
}
