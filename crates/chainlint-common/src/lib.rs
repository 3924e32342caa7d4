//! Common types and utilities shared by the chainlint crates.
//!
//! This crate provides:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message templates)
//! - Centralized iteration limits

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage, format_message};

// Centralized limits and thresholds
pub mod limits;
