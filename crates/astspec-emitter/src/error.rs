//! Fatal translation errors.
//!
//! Everything here aborts the run with no document written. Missing
//! declarations and untranslatable type forms are deliberately *not* errors;
//! they are reported and the closure computation continues.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    #[error("unexpected type {namespace}.{member} in {scope}")]
    UnknownNamespace {
        scope: String,
        namespace: String,
        member: String,
    },

    #[error("ValueOf missing or too many type arguments in {scope}")]
    ValueOfArity { scope: String },

    #[error("unknown type ValueOf<{argument}>")]
    ValueOfUnknownArgument { argument: String },

    #[error("unexpected type ValueOf<{argument}>: not an interface")]
    ValueOfNotInterface { argument: String },

    #[error("type nesting in {scope} exceeds {limit} levels")]
    TranslationTooDeep { scope: String, limit: usize },
}
