//! Dialect configuration tests

use super::*;
use test_case::test_case;

#[test_case(Dialect::Mysql, "INT", "DECIMAL(15,4)", "JSON")]
#[test_case(Dialect::Postgresql, "INTEGER", "NUMERIC(15,4)", "JSONB")]
#[test_case(Dialect::Sqlite, "INTEGER", "REAL", "TEXT")]
#[test_case(Dialect::Oracle, "NUMBER(10)", "NUMBER(15,4)", "JSON")]
#[test_case(Dialect::Sqlserver, "INT", "DECIMAL(15,4)", "NVARCHAR(MAX)")]
fn test_column_types(dialect: Dialect, integer: &str, decimal: &str, json: &str) {
    let config = dialect.config();
    assert_eq!(config.dialect, dialect);
    assert_eq!(config.column_type(SqlKind::Integer), integer);
    assert_eq!(config.column_type(SqlKind::Decimal), decimal);
    assert_eq!(config.column_type(SqlKind::Json), json);
}

#[test]
fn test_create_prefix() {
    assert_eq!(Dialect::Mysql.config().create_prefix, "CREATE TABLE IF NOT EXISTS");
    assert_eq!(Dialect::Postgresql.config().create_prefix, "CREATE TABLE IF NOT EXISTS");
    assert_eq!(Dialect::Sqlite.config().create_prefix, "CREATE TABLE IF NOT EXISTS");
    assert_eq!(Dialect::Oracle.config().create_prefix, "CREATE TABLE");
    assert_eq!(Dialect::Sqlserver.config().create_prefix, "CREATE TABLE");
}

#[test]
fn test_only_oracle_uses_insert_all() {
    for config in DialectConfig::all() {
        assert_eq!(config.insert_all, config.dialect == Dialect::Oracle);
    }
}

#[test]
fn test_only_sqlserver_uses_batch_separator() {
    for config in DialectConfig::all() {
        let expected = config.dialect == Dialect::Sqlserver;
        assert_eq!(config.uses_batch_separator, expected, "{}", config.dialect);
    }
    assert_eq!(Dialect::Sqlserver.config().insert_suffix, "GO");
}

#[test]
fn test_quote_identifier() {
    assert_eq!(Dialect::Mysql.config().quote_identifier("userName"), "`userName`");
    assert_eq!(Dialect::Postgresql.config().quote_identifier("userName"), "\"userName\"");
    assert_eq!(Dialect::Mysql.config().quote_identifier("a`b"), "`a``b`");
    assert_eq!(Dialect::Oracle.config().quote_identifier("a\"b"), "\"a\"\"b\"");
}

#[test]
fn test_string_literal() {
    assert_eq!(Dialect::Postgresql.config().string_literal("it's"), "'it''s'");
    assert_eq!(Dialect::Mysql.config().string_literal(r"C:\tmp"), r"'C:\\tmp'");
    assert_eq!(Dialect::Sqlite.config().string_literal(r"C:\tmp"), r"'C:\tmp'");
    assert_eq!(Dialect::Sqlserver.config().string_literal("héllo"), "N'héllo'");
}

#[test]
fn test_boolean_literal() {
    assert_eq!(Dialect::Postgresql.config().boolean_literal(true), "TRUE");
    assert_eq!(Dialect::Postgresql.config().boolean_literal(false), "FALSE");
    assert_eq!(Dialect::Mysql.config().boolean_literal(true), "1");
    assert_eq!(Dialect::Sqlserver.config().boolean_literal(false), "0");
}

#[test]
fn test_terminate() {
    assert_eq!(Dialect::Mysql.config().terminate("SELECT 1"), "SELECT 1;");
    assert_eq!(Dialect::Sqlserver.config().terminate("SELECT 1"), "SELECT 1\nGO");
}

#[test]
fn test_dialect_parse() {
    assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::Mysql);
    assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgresql);
    assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgresql);
    assert_eq!("mssql".parse::<Dialect>().unwrap(), Dialect::Sqlserver);
    let err = "db2".parse::<Dialect>().unwrap_err();
    assert!(matches!(err, crate::Error::UnknownDialect(ref d) if d == "db2"));
}

#[test]
fn test_dialect_serde() {
    assert_eq!(serde_json::to_string(&Dialect::Sqlserver).unwrap(), "\"sqlserver\"");
    let parsed: Dialect = serde_json::from_str("\"postgres\"").unwrap();
    assert_eq!(parsed, Dialect::Postgresql);
}

#[test]
fn test_kind_merge() {
    assert_eq!(SqlKind::Integer.merge_with(SqlKind::Integer), SqlKind::Integer);
    assert_eq!(SqlKind::Integer.merge_with(SqlKind::Decimal), SqlKind::Decimal);
    assert_eq!(SqlKind::Timestamp.merge_with(SqlKind::Date), SqlKind::Timestamp);
    assert_eq!(SqlKind::Varchar.merge_with(SqlKind::Text), SqlKind::Text);
    assert_eq!(SqlKind::Boolean.merge_with(SqlKind::Integer), SqlKind::Text);
    assert_eq!(SqlKind::Json.merge_with(SqlKind::Varchar), SqlKind::Text);
}

#[test]
fn test_every_kind_has_a_type() {
    for config in DialectConfig::all() {
        for kind in SqlKind::ALL {
            assert!(!config.column_type(kind).is_empty());
        }
    }
}
