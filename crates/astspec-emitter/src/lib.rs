//! JSON Schema emitter for the astspec schema generator.
//!
//! The pipeline, leaves first:
//! - `DeclarationTable` - indexes top-level declarations by name
//! - `Resolver` - demand-driven worklist that owns the definitions map and
//!   drives the type-to-schema translation
//! - `assemble` - sorts the definitions and wraps them in the schema envelope
//!
//! The emitted document may legitimately contain `$ref`s with no matching
//! definitions entry: a reference to a missing declaration is reported and
//! skipped, never invented or dropped.

pub mod assemble;
pub mod declarations;
pub mod error;
pub mod resolver;
mod translate;

pub use assemble::{SCHEMA_URI, assemble};
pub use declarations::DeclarationTable;
pub use error::EmitError;
pub use resolver::{ROOT_TYPE, ROOT_TYPES, Resolver};

use astspec_parser::SourceFile;
use serde_json::Value;

/// The finished document plus the non-fatal reports produced along the way.
#[derive(Debug)]
pub struct Generated {
    pub document: Value,
    /// Requested names with no declaration in the table.
    pub missing: Vec<String>,
    /// Source text of nodes translated by the best-effort fallback.
    pub fallbacks: Vec<String>,
}

/// Generate the schema document for `file`, seeding the default root set.
pub fn generate(file: &SourceFile) -> Result<Generated, EmitError> {
    generate_with_roots(file, ROOT_TYPES, ROOT_TYPE)
}

/// Generate with an explicit seed set and root name. The root's fragment is
/// merged into the envelope instead of appearing under `definitions`.
pub fn generate_with_roots(
    file: &SourceFile,
    seeds: &[&str],
    root: &str,
) -> Result<Generated, EmitError> {
    let table = DeclarationTable::build(file);
    let mut resolver = Resolver::with_roots(&table, &file.text, seeds);
    resolver.run()?;
    let (definitions, missing, fallbacks) = resolver.into_parts();
    let document = assemble(definitions, root);
    Ok(Generated {
        document,
        missing,
        fallbacks,
    })
}
