/// Declaration rendering: picks a strategy from the data shape and the
/// requested format, then renders one exported binding.
use serde_json::Value;

use super::writer::{js_number, single_quoted, CodeWriter};
use crate::options::{TypeFormat, WriteOptions};

/// Which binding a call produces.
///
/// | data      | Plain      | Enum   | Type   |
/// |-----------|------------|--------|--------|
/// | array     | TypedConst | Enum   | Union  |
/// | non-array | TypedConst | TypedConst | TypedConst |
///
/// `Enum` and `Union` fall back to an untyped raw-array constant when no
/// element survives filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy<'a> {
    TypedConst,
    Enum(&'a [Value]),
    Union(&'a [Value]),
}

impl<'a> Strategy<'a> {
    pub fn select(data: &'a Value, format: TypeFormat) -> Self {
        match (data, format) {
            (Value::Array(items), TypeFormat::Enum) => Strategy::Enum(items),
            (Value::Array(items), TypeFormat::Type) => Strategy::Union(items),
            _ => Strategy::TypedConst,
        }
    }
}

/// Render the exported binding for `opts`, without header lines.
pub fn render_declaration(opts: &WriteOptions) -> String {
    match Strategy::select(&opts.data, opts.type_format) {
        Strategy::TypedConst => emit_typed_const(&opts.variable_name, &opts.type_name, &opts.data),
        Strategy::Enum(items) => generate_enum_from_array(items, &opts.variable_name),
        Strategy::Union(items) => generate_type_from_array(items, &opts.variable_name),
    }
}

/// `export const NAME: TYPE = <pretty JSON>;`
pub fn emit_typed_const(name: &str, type_name: &str, data: &Value) -> String {
    format!("export const {name}: {type_name} = {data:#};")
}

/// Convert an array of primitives to an `export enum`.
///
/// Keeps numbers and strings that are valid identifiers, in order.
/// Numbers become `VALUE_<n> = <n>` members. Duplicates are kept.
pub fn generate_enum_from_array(data: &[Value], enum_name: &str) -> String {
    let members: Vec<(String, String)> = data
        .iter()
        .filter_map(|v| match v {
            Value::String(s) if is_identifier(s) => Some((s.clone(), single_quoted(s))),
            Value::Number(n) => {
                let n = js_number(n);
                Some((format!("VALUE_{n}"), n))
            }
            _ => None,
        })
        .collect();

    if members.is_empty() {
        return raw_array_const(data, enum_name);
    }

    let mut w = CodeWriter::new();
    w.open(&format!("export enum {enum_name}"));
    let last = members.len() - 1;
    for (i, (key, value)) in members.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        w.line(&format!("{key} = {value}{sep}"));
    }
    w.close();
    w.finish_fragment()
}

/// Convert an array of primitives to a union of literal types.
///
/// Keeps every string and number, in order. Duplicates are kept.
pub fn generate_type_from_array(data: &[Value], type_name: &str) -> String {
    let literals: Vec<String> = data
        .iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(single_quoted(s)),
            Value::Number(n) => Some(js_number(n)),
            _ => None,
        })
        .collect();

    if literals.is_empty() {
        return raw_array_const(data, type_name);
    }

    format!("export type {type_name} = {};", literals.join(" | "))
}

/// Fallback when no element can form a member: export the array as-is.
fn raw_array_const(data: &[Value], name: &str) -> String {
    let raw = Value::Array(data.to_vec());
    format!("export const {name} = {raw:#};")
}

/// `^[A-Za-z_$][A-Za-z0-9_$]*$`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
