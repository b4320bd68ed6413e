/// Whole-file assembly: header, optional timestamp, optional type import,
/// then the declaration. Always newline-terminated.
use chrono::{DateTime, SecondsFormat, Utc};

use super::decl::render_declaration;
use super::writer::CodeWriter;
use crate::options::WriteOptions;

pub const HEADER: &str = "// Auto-generated file – DO NOT EDIT";

/// Render the complete file text.
///
/// `now` overrides the clock for the timestamp line; it is ignored when
/// `include_timestamp` is off.
pub fn render_file(opts: &WriteOptions, now: Option<DateTime<Utc>>) -> String {
    let mut w = CodeWriter::new();
    w.line(HEADER);
    if opts.include_timestamp {
        let now = now.unwrap_or_else(Utc::now);
        w.line(&format!("// Last updated: {}", iso_timestamp(&now)));
    }
    if let Some((path, type_name)) = opts.type_import() {
        w.line(&format!("import type {{ {type_name} }} from '{path}';"));
    }
    w.raw(&render_declaration(opts));
    w.finish()
}

/// `2024-05-01T12:00:00.000Z`
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
