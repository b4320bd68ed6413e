/// Job description for one generated file.
///
/// Field names on the wire match the camelCase option names used by build
/// scripts (`variableName`, `outputPath`, ...), so a job can be handed over
/// as a JSON document.
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{WriteError, INVALID_VARIABLE_NAME, MISSING_OUTPUT_PATH};

/// How array data is emitted. Non-array data is always a typed constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFormat {
    /// `export enum NAME { ... }`
    Enum,
    /// `export type NAME = 'a' | 'b';`
    Type,
    /// `export const NAME: TYPE = [...];`. Also catches unknown names.
    #[default]
    #[serde(other)]
    Plain,
}

impl TypeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFormat::Plain => "plain",
            TypeFormat::Enum => "enum",
            TypeFormat::Type => "type",
        }
    }
}

impl FromStr for TypeFormat {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to `Plain`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "enum" => TypeFormat::Enum,
            "type" => TypeFormat::Type,
            _ => TypeFormat::Plain,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOptions {
    /// TypeScript type annotation for the exported constant (e.g. `MyType`).
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub data: Value,
    /// Name of the exported constant, enum, or type alias.
    #[serde(default)]
    pub variable_name: String,
    #[serde(default)]
    pub output_path: PathBuf,
    #[serde(default)]
    pub import_path: Option<String>,
    #[serde(default)]
    pub import_type_name: Option<String>,
    #[serde(default = "default_true")]
    pub include_timestamp: bool,
    #[serde(default)]
    pub type_format: TypeFormat,
}

fn default_true() -> bool {
    true
}

/// ECMAScript WhiteSpace and LineTerminator. Differs from
/// `char::is_whitespace` on U+0085 (not included) and U+FEFF (included).
fn is_ecma_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

impl WriteOptions {
    pub fn new(
        type_name: impl Into<String>,
        data: Value,
        variable_name: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            data,
            variable_name: variable_name.into(),
            output_path: output_path.into(),
            import_path: None,
            import_type_name: None,
            include_timestamp: true,
            type_format: TypeFormat::Plain,
        }
    }

    /// Build options from any serializable value.
    pub fn from_serializable<T: Serialize + ?Sized>(
        type_name: impl Into<String>,
        data: &T,
        variable_name: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, WriteError> {
        let data = serde_json::to_value(data)?;
        Ok(Self::new(type_name, data, variable_name, output_path))
    }

    /// Emit `import type { NAME } from 'PATH';` above the declaration.
    pub fn with_import(mut self, path: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.import_path = Some(path.into());
        self.import_type_name = Some(type_name.into());
        self
    }

    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    pub fn with_type_format(mut self, format: TypeFormat) -> Self {
        self.type_format = format;
        self
    }

    /// The import pair, only when both halves are present.
    pub fn type_import(&self) -> Option<(&str, &str)> {
        match (&self.import_path, &self.import_type_name) {
            (Some(path), Some(name)) if !path.is_empty() && !name.is_empty() => {
                Some((path.as_str(), name.as_str()))
            }
            _ => None,
        }
    }

    /// Check the name and path before touching the file system.
    ///
    /// Only whitespace (the ECMAScript `\s` class) is rejected in the name;
    /// other characters are written through as given.
    pub fn validate(&self) -> Result<(), WriteError> {
        if self.variable_name.is_empty() || self.variable_name.chars().any(is_ecma_whitespace) {
            return Err(WriteError::InvalidArgument(INVALID_VARIABLE_NAME));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(WriteError::InvalidArgument(MISSING_OUTPUT_PATH));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_json() {
        let opts: WriteOptions = serde_json::from_value(json!({
            "type": "string[]",
            "data": ["a"],
            "variableName": "NAMES",
            "outputPath": "gen/names.ts"
        }))
        .unwrap();
        assert!(opts.include_timestamp);
        assert_eq!(opts.type_format, TypeFormat::Plain);
        assert_eq!(opts.type_name, "string[]");
        assert_eq!(opts.output_path, PathBuf::from("gen/names.ts"));
        assert_eq!(opts.type_import(), None);
    }

    #[test]
    fn test_all_fields_from_json() {
        let opts: WriteOptions = serde_json::from_value(json!({
            "type": "Mode",
            "data": ["x", "y"],
            "variableName": "Mode",
            "outputPath": "mode.ts",
            "importPath": "./types",
            "importTypeName": "Mode",
            "includeTimestamp": false,
            "typeFormat": "type"
        }))
        .unwrap();
        assert!(!opts.include_timestamp);
        assert_eq!(opts.type_format, TypeFormat::Type);
        assert_eq!(opts.type_import(), Some(("./types", "Mode")));
    }

    #[test]
    fn test_unknown_format_is_plain() {
        let f: TypeFormat = serde_json::from_value(json!("interface")).unwrap();
        assert_eq!(f, TypeFormat::Plain);
        assert_eq!("interface".parse::<TypeFormat>().unwrap(), TypeFormat::Plain);
        assert_eq!("enum".parse::<TypeFormat>().unwrap(), TypeFormat::Enum);
    }

    #[test]
    fn test_unknown_format_in_job_document() {
        let opts: WriteOptions = serde_json::from_value(json!({
            "type": "string[]",
            "data": ["a", "b"],
            "variableName": "NAMES",
            "outputPath": "names.ts",
            "typeFormat": "bogus"
        }))
        .unwrap();
        assert_eq!(opts.type_format, TypeFormat::Plain);
    }

    #[test]
    fn test_whitespace_follows_ecmascript_class() {
        for name in ["a\u{feff}b", "a\u{a0}b", "a\u{2028}b", "a\u{3000}b", "a\u{b}b"] {
            let opts = WriteOptions::new("T", json!(1), name, "x.ts");
            assert!(opts.validate().is_err(), "{name:?} should be rejected");
        }
        let opts = WriteOptions::new("T", json!(1), "a\u{85}b", "x.ts");
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_import_needs_both_halves() {
        let mut opts = WriteOptions::new("T", json!(1), "X", "x.ts");
        opts.import_path = Some("./t".into());
        assert_eq!(opts.type_import(), None);
        opts.import_type_name = Some("T".into());
        assert_eq!(opts.type_import(), Some(("./t", "T")));
    }

    #[test]
    fn test_validate_rejects_whitespace() {
        for name in ["", "my var", "tab\tname", "nl\n", " lead"] {
            let opts = WriteOptions::new("T", json!(1), name, "x.ts");
            assert!(
                matches!(opts.validate(), Err(WriteError::InvalidArgument(m)) if m == INVALID_VARIABLE_NAME),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let opts = WriteOptions::new("T", json!(1), "X", "");
        assert!(matches!(
            opts.validate(),
            Err(WriteError::InvalidArgument(MISSING_OUTPUT_PATH))
        ));
    }

    #[test]
    fn test_validate_accepts_odd_but_spaceless_names() {
        // Only whitespace is checked.
        let opts = WriteOptions::new("T", json!(1), "1-not-an-ident", "x.ts");
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_from_serializable_rejects_non_string_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], 1);
        let err = WriteOptions::from_serializable("T", &map, "X", "x.ts").unwrap_err();
        assert!(matches!(err, WriteError::Serialization(_)));
    }
}
