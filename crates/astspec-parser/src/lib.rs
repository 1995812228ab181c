//! Declaration parser and AST types for the astspec schema generator.
//!
//! Covers the declaration-file subset an AST definition uses: top-level
//! interface, enum, and type-alias declarations and the type expressions
//! appearing inside them. Anything else is skipped or reported; this is not
//! a general TypeScript parser.

pub mod ast;
pub mod state;

pub use ast::{
    AliasDecl, Declaration, EnumDecl, HeritageRef, ImportDecl, InterfaceDecl, KeywordType,
    LiteralValue, PropertyName, PropertySig, SourceFile, Statement, TypeNode, TypeNodeKind,
};
pub use state::ParserState;

use astspec_common::Diagnostic;
use std::sync::Arc;

/// Parse a declaration source file into statements plus parse diagnostics.
pub fn parse_source_file(
    file_name: impl Into<String>,
    source_text: impl Into<Arc<str>>,
) -> (SourceFile, Vec<Diagnostic>) {
    ParserState::new(file_name, source_text).parse_source_file()
}
