//! Common types and utilities for the astspec schema generator.
//!
//! This crate provides foundational types used across all astspec crates:
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`)
//! - Centralized limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics - positioned error/warning reports
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;
