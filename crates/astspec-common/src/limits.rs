//! Centralized limits and thresholds.
//!
//! Keeping these in one place makes the failure mode explicit: hitting a
//! limit produces a reported error instead of a stack overflow.

/// Maximum nesting depth the parser accepts for a single type expression.
pub const MAX_PARSE_TYPE_DEPTH: usize = 256;

/// Maximum recursion depth for the type-to-schema translator. Depth here is
/// bounded by the nesting of the declaration source, not by the number of
/// declarations, so a small cap is plenty for any real AST definition file.
pub const MAX_TRANSLATE_DEPTH: usize = 128;
