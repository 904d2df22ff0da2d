//! Plain-text tables for the field mapping and the type reference

use crate::dialect::{Dialect, DialectConfig, SqlKind};
use crate::schema::FieldMapping;

/// Render the field mapping with one row per column
pub fn format_mapping_table(mapping: &[FieldMapping], dialect: Dialect) -> String {
    let sql_header = format!("SQL ({})", dialect.as_str().to_uppercase());
    let header = ["Original", "Current", "JSON", sql_header.as_str(), "Sample", "PK"];
    let rows: Vec<Vec<String>> = mapping
        .iter()
        .map(|m| {
            vec![
                m.original_name.clone(),
                m.field.clone(),
                m.json_type.to_string(),
                m.sql_type.clone(),
                m.sample.clone(),
                if m.is_primary { "*".to_string() } else { String::new() },
            ]
        })
        .collect();
    render(&header, &rows)
}

/// Render the column type used by every dialect for each semantic kind
pub fn format_type_reference() -> String {
    let mut header = vec!["Kind", "JSON value"];
    header.extend(Dialect::ALL.iter().map(|d| d.as_str()));

    let rows: Vec<Vec<String>> = SqlKind::ALL
        .iter()
        .map(|kind| {
            let mut row = vec![kind.to_string(), json_source(*kind).to_string()];
            row.extend(
                DialectConfig::all()
                    .iter()
                    .map(|config| config.column_type(*kind).to_string()),
            );
            row
        })
        .collect();
    render(&header, &rows)
}

/// JSON values that produce a kind
fn json_source(kind: SqlKind) -> &'static str {
    match kind {
        SqlKind::Integer => "number without fraction",
        SqlKind::Decimal => "number with fraction",
        SqlKind::Boolean => "true / false",
        SqlKind::Date => "\"YYYY-MM-DD\"",
        SqlKind::Timestamp => "\"YYYY-MM-DDThh:mm...\"",
        SqlKind::Varchar => "string (<= 4000 chars)",
        SqlKind::Text => "string (> 4000 chars), null",
        SqlKind::Json => "array / object",
    }
}

fn render(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&render_line(header, &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&render_line(&cells, &widths));
        out.push('\n');
    }
    out
}

fn render_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join(" | ").trim_end().to_string()
}
