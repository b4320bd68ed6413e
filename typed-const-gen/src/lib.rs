//! Serialize runtime data into a generated TypeScript module exporting a
//! typed constant, an `enum`, or a union-of-literals type.
//!
//! ```no_run
//! use serde_json::json;
//! use typed_const_gen::{write_typed_variable_to_file, TypeFormat, WriteOptions};
//!
//! # async fn run() -> Result<(), typed_const_gen::WriteError> {
//! let opts = WriteOptions::new("Mode", json!(["x", "y"]), "Mode", "gen/mode.ts")
//!     .with_type_format(TypeFormat::Type);
//! write_typed_variable_to_file(&opts).await?;
//! # Ok(())
//! # }
//! ```
pub mod emit_ts;
pub mod error;
pub mod options;
pub mod write;

pub use emit_ts::{generate_enum_from_array, generate_type_from_array, render_declaration, render_file};
pub use error::WriteError;
pub use options::{TypeFormat, WriteOptions};
pub use write::write_typed_variable_to_file;
