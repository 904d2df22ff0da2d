//! End-to-end tests: JSON text → mapping → CREATE TABLE + batched INSERTs
//!
//! Exercises the public API the way the CLI and HTTP server use it.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use json2sql::cli::{router, ServerConfig};
use json2sql::{
    convert, CaseStyle, ConversionSession, ConvertOptions, Dialect, DialectConfig, Error,
    JsonType, SqlKind,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use tower::ServiceExt;

const MIXED: &str = r#"[
    {"id": 1, "userName": "ann", "score": 12.5, "active": true,
     "created": "2026-01-28T20:46:00Z", "tags": ["a", "b"], "note": null}
]"#;

fn records(n: usize) -> String {
    let rows: Vec<Value> = (1..=n)
        .map(|i| json!({"id": i, "name": format!("user {i}")}))
        .collect();
    Value::Array(rows).to_string()
}

/// Column lines of the CREATE TABLE statement
fn ddl_columns(sql: &str) -> Vec<&str> {
    let ddl = sql.split("\n\n").next().unwrap();
    ddl.lines().filter(|line| line.starts_with("  ")).collect()
}

// ============================================================================
// DDL Properties
// ============================================================================

#[test_case(Dialect::Mysql)]
#[test_case(Dialect::Postgresql)]
#[test_case(Dialect::Sqlite)]
#[test_case(Dialect::Oracle)]
#[test_case(Dialect::Sqlserver)]
fn test_ddl_has_one_quoted_column_per_field(dialect: Dialect) {
    let options = ConvertOptions::new().with_dialect(dialect);
    let result = convert(MIXED, &options).unwrap();
    let config = DialectConfig::get(dialect);

    let columns = ddl_columns(&result.sql);
    assert_eq!(columns.len(), result.mapping.len());
    for (line, field) in columns.iter().zip(&result.mapping) {
        let expected = format!("  {} {}", config.quote_identifier(&field.field), field.sql_type);
        assert!(line.starts_with(&expected), "{line} vs {expected}");
    }
    assert!(result.sql.starts_with(config.create_prefix));
}

#[test_case(Dialect::Mysql, "`DATA`")]
#[test_case(Dialect::Postgresql, "\"DATA\"")]
#[test_case(Dialect::Sqlserver, "\"DATA\"")]
fn test_table_name_is_quoted(dialect: Dialect, quoted: &str) {
    let result = convert(MIXED, &ConvertOptions::new().with_dialect(dialect)).unwrap();
    assert!(result.sql.contains(&format!("INSERT INTO {quoted} (")));
}

#[test]
fn test_mysql_example() {
    let result = convert(r#"[{"id":1,"userName":"a"}]"#, &ConvertOptions::new()).unwrap();

    assert_eq!(result.mapping.len(), 2);
    assert_eq!(result.mapping[0].field, "id");
    assert!(result.mapping[0].is_primary);
    assert_eq!(result.mapping[0].sql_type, "INT");
    assert_eq!(result.mapping[1].field, "userName");
    assert_eq!(result.mapping[1].sql_type, "VARCHAR(4000)");
    assert_eq!(result.insert_batches, 1);
    assert_eq!(result.record_count, 1);
    assert!(result.sql.ends_with("VALUES\n(1, 'a');\n"));
}

#[test]
fn test_inferred_kinds() {
    let result = convert(MIXED, &ConvertOptions::new().with_dialect(Dialect::Postgresql)).unwrap();
    let kind_of = |name: &str| {
        result
            .mapping
            .iter()
            .find(|m| m.original_name == name)
            .map(|m| (m.json_type, m.sql_kind))
            .unwrap()
    };

    assert_eq!(kind_of("id"), (JsonType::Number, SqlKind::Integer));
    assert_eq!(kind_of("score"), (JsonType::Number, SqlKind::Decimal));
    assert_eq!(kind_of("active"), (JsonType::Boolean, SqlKind::Boolean));
    assert_eq!(kind_of("created"), (JsonType::String, SqlKind::Timestamp));
    assert_eq!(kind_of("userName"), (JsonType::String, SqlKind::Varchar));
    assert_eq!(kind_of("tags"), (JsonType::Array, SqlKind::Json));
    assert_eq!(kind_of("note"), (JsonType::Null, SqlKind::Text));
    assert!(result.sql.contains("TIMESTAMP(6)"));
    assert!(result.sql.contains("JSONB"));
}

#[test]
fn test_empty_array_is_ddl_only() {
    let result = convert("[]", &ConvertOptions::new()).unwrap();
    assert_eq!(result.insert_batches, 0);
    assert_eq!(result.record_count, 0);
    assert!(result.mapping.is_empty());
    assert!(!result.sql.contains("INSERT"));
}

// ============================================================================
// Batching
// ============================================================================

#[test]
fn test_batches_of_one_hundred() {
    let result = convert(&records(250), &ConvertOptions::new()).unwrap();
    assert_eq!(result.insert_batches, 3);
    assert_eq!(result.sql.matches("INSERT INTO").count(), 3);

    let last = result.sql.trim_end().rsplit("\n\n").next().unwrap();
    assert_eq!(last.lines().count() - 1, 50);
    assert!(last.ends_with("(250, 'user 250');"));
}

#[test]
fn test_custom_batch_size_and_table() {
    let options = ConvertOptions::new()
        .with_dialect(Dialect::Sqlite)
        .with_table_name("people")
        .with_batch_size(7);
    let result = convert(&records(20), &options).unwrap();
    assert_eq!(result.insert_batches, 3);
    assert_eq!(result.sql.matches("INSERT INTO \"people\"").count(), 3);
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn test_regenerate_is_byte_identical() {
    let mut session = ConversionSession::new(ConvertOptions::new().with_dialect(Dialect::Oracle));
    let sql = session.convert(MIXED).unwrap().sql.clone();
    assert_eq!(session.regenerate().unwrap(), sql);
}

#[test]
fn test_case_style_is_idempotent() {
    let mut session = ConversionSession::new(ConvertOptions::new());
    session.convert(MIXED).unwrap();

    let once = session.apply_case_style(CaseStyle::Snake).unwrap().clone();
    let twice = session.apply_case_style(CaseStyle::Snake).unwrap().clone();
    assert_eq!(once, twice);
}

#[test_case(CaseStyle::Snake, "user_name")]
#[test_case(CaseStyle::Kebab, "user-name")]
#[test_case(CaseStyle::UpperSnake, "USER_NAME")]
#[test_case(CaseStyle::Pascal, "UserName")]
#[test_case(CaseStyle::Camel, "userName")]
fn test_case_style_renames_columns(style: CaseStyle, expected: &str) {
    let mut session = ConversionSession::new(ConvertOptions::new().with_dialect(Dialect::Postgresql));
    session.convert(r#"[{"userName": "a"}]"#).unwrap();
    let result = session.apply_case_style(style).unwrap();

    assert_eq!(result.mapping[0].field, expected);
    assert_eq!(result.mapping[0].original_name, "userName");
    assert!(result.sql.contains(&format!("\"{expected}\" VARCHAR(4000)")));
    assert!(result.sql.contains("VALUES\n('a');"));
}

#[test]
fn test_switch_dialect_keeps_case_style() {
    let options = ConvertOptions::new().with_case_style(CaseStyle::UpperSnake);
    let mut session = ConversionSession::new(options);
    session.convert(MIXED).unwrap();

    let result = session.switch_dialect(Dialect::Sqlserver).unwrap();
    assert!(result.sql.contains("\"USER_NAME\" NVARCHAR(4000)"));
    assert!(result.sql.contains("\nGO\n"));
    assert_eq!(session.options().dialect, Dialect::Sqlserver);
}

#[test]
fn test_failed_conversion_keeps_previous_result() {
    let mut session = ConversionSession::new(ConvertOptions::new());
    session.convert(MIXED).unwrap();
    let before = session.result().cloned();

    assert!(matches!(session.convert("[1, 2]"), Err(Error::InvalidRecord { index: 0 })));
    assert_eq!(session.result().cloned(), before);
}

// ============================================================================
// HTTP Server
// ============================================================================

#[tokio::test]
async fn test_http_convert_matches_library() {
    let input = r#"[{"id": 7, "ok": false}]"#;
    let request = Request::builder()
        .method("POST")
        .uri("/convert")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"json": input, "dialect": "sqlite", "tableName": "flags"}).to_string(),
        ))
        .unwrap();

    let response = router(ServerConfig::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    let options = ConvertOptions::new()
        .with_dialect(Dialect::Sqlite)
        .with_table_name("flags");
    let expected = convert(input, &options).unwrap();
    assert_eq!(body["data"]["sql"], expected.sql);
    assert_eq!(body["data"]["recordCount"], 1);
}
