/// TypeScript emitter: pure text rendering, no I/O.
mod decl;
mod file;
mod writer;

pub use decl::{
    emit_typed_const, generate_enum_from_array, generate_type_from_array, render_declaration,
    Strategy,
};
pub use file::{iso_timestamp, render_file, HEADER};
pub use writer::{js_number, single_quoted, CodeWriter};
