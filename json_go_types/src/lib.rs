//! Infer Go struct declarations from example JSON.
//!
//! The decoded document is walked once. Every object becomes a named struct
//! whose name comes from the key it was found under, struct fields are
//! sorted by key, and each struct is declared exactly once.
//!
//! ```
//! let go: String = json_go_types::transform("Out", r#"{"user": {"name": "Alice"}}"#).unwrap();
//! assert_eq!(
//!     go,
//!     "type Out struct {\n\tUser User `json:\"user\"`\n}\n\ntype User struct {\n\tName string `json:\"name\"`\n}"
//! );
//! ```

mod builder;
mod classify;
mod emit;
mod error;
mod naming;
mod settings;
mod types;

pub use builder::TypeGraphBuilder;
pub use classify::{Classified, classify, classify_type};
pub use emit::{render, render_type};
pub use error::TransformError;
pub use naming::{NOT_NAMED_FIELD, is_valid_identifier, to_display_name};
pub use settings::{DedupMode, TransformSettings};
pub use types::{FieldDescriptor, PrimitiveKind, StructDefinition, TypeDescriptor, TypeRegistry};

use std::io::Write;
use std::path::Path;
use tracing::debug_span;

/// Transforms JSON documents into Go type declarations.
///
/// Holds only settings; every call builds and drops its own registry, so one
/// transformer can serve any number of calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    settings: TransformSettings,
}

impl Transformer {
    #[must_use]
    pub fn new(settings: TransformSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &TransformSettings {
        &self.settings
    }

    /// Infer the type graph for `json_text` without rendering it.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidStructName` if `root_name` is not an
    /// identifier (checked before decoding), or `TransformError::InvalidJson`
    /// if `json_text` does not decode.
    pub fn infer(&self, root_name: &str, json_text: &str) -> Result<TypeRegistry, TransformError> {
        if !is_valid_identifier(root_name) {
            return Err(TransformError::InvalidStructName(root_name.to_string()));
        }
        let value: serde_json::Value = serde_json::from_str(json_text)?;
        let _span = debug_span!("transform", root = root_name).entered();
        Ok(TypeGraphBuilder::new(root_name, &self.settings).build_root(&value))
    }

    /// Transform `json_text` into Go declarations, root type first.
    ///
    /// # Errors
    ///
    /// Same as [`Transformer::infer`]. No partial output is produced.
    pub fn transform(&self, root_name: &str, json_text: &str) -> Result<String, TransformError> {
        let registry: TypeRegistry = self.infer(root_name, json_text)?;
        Ok(render(&registry))
    }
}

/// Transform `json_text` into Go declarations with default settings.
///
/// # Errors
///
/// Returns `TransformError::InvalidStructName` if `root_name` is not an
/// identifier, or `TransformError::InvalidJson` if `json_text` is not valid JSON.
pub fn transform(root_name: &str, json_text: &str) -> Result<String, TransformError> {
    Transformer::default().transform(root_name, json_text)
}

/// Transform `json_text` and write the declarations, followed by a newline,
/// to `writer`.
///
/// Any `Write` sink works: an in-memory buffer, a locked stdout, or a file.
///
/// # Errors
///
/// Returns `TransformError` if the name or JSON is invalid, or writing fails.
pub fn transform_to_writer<W: Write>(
    root_name: &str,
    json_text: &str,
    writer: &mut W,
    settings: &TransformSettings,
) -> Result<(), TransformError> {
    let declarations: String = Transformer::new(settings.clone()).transform(root_name, json_text)?;
    writeln!(writer, "{declarations}")?;
    Ok(())
}

/// Transform a JSON file and write the declarations to an output file.
///
/// # Errors
///
/// Returns `TransformError` if reading the input file fails, the name or JSON
/// is invalid, or writing the output file fails. The output file is not
/// created when the transformation fails.
pub fn transform_from_file(
    root_name: &str,
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    settings: &TransformSettings,
) -> Result<(), TransformError> {
    let json_text: String = std::fs::read_to_string(input_path)?;
    let declarations: String = Transformer::new(settings.clone()).transform(root_name, &json_text)?;
    let mut output_file: std::fs::File = std::fs::File::create(output_path)?;
    writeln!(output_file, "{declarations}")?;
    Ok(())
}
