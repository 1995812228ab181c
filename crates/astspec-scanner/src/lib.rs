//! Declaration-file scanner/tokenizer for the astspec schema generator.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `Scanner` - Tokenizer state machine

pub mod scanner;
pub mod syntax_kind;

pub use scanner::{Scanner, ScannerDiagnostic, ScannerState};
pub use syntax_kind::SyntaxKind;
