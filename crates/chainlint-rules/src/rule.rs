//! The `Rule` trait and positional option validation.
//!
//! Rules register for node kinds; the walker calls `check_node` once per
//! matching node, in document order. Options arrive from the host as
//! positional JSON values and are validated against the rule's schema
//! before the rule ever parses them.

use std::fmt;

use chainlint_ast::NodeIndex;
use serde_json::Value;

use crate::context::RuleContext;

/// What a positional option slot accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OptionKind {
    NonNegativeInteger,
}

/// Schema entry for one positional option slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OptionSchema {
    pub kind: OptionKind,
}

/// A configuration value the schema rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    NotAnInteger { position: usize },
    Negative { position: usize },
    TooMany { expected: usize, got: usize },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::NotAnInteger { position } => {
                write!(f, "option {position} must be an integer")
            }
            OptionsError::Negative { position } => {
                write!(f, "option {position} must not be negative")
            }
            OptionsError::TooMany { expected, got } => {
                write!(f, "expected at most {expected} option(s), got {got}")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

/// Validate raw positional option values against a rule's schema.
///
/// Missing trailing values are fine (rules substitute defaults); extra
/// values and type mismatches are not.
pub fn validate_options(schema: &[OptionSchema], raw: &[Value]) -> Result<(), OptionsError> {
    if raw.len() > schema.len() {
        return Err(OptionsError::TooMany {
            expected: schema.len(),
            got: raw.len(),
        });
    }
    for (position, (entry, value)) in schema.iter().zip(raw).enumerate() {
        match entry.kind {
            OptionKind::NonNegativeInteger => {
                if value.as_u64().is_some() {
                    continue;
                }
                if value.as_i64().is_some() {
                    return Err(OptionsError::Negative { position });
                }
                return Err(OptionsError::NotAnInteger { position });
            }
        }
    }
    Ok(())
}

/// A lint rule.
///
/// Rules own whatever per-traversal state they need; the walker tells them
/// when a source file is done so that state can be dropped.
pub trait Rule {
    fn name(&self) -> &'static str;

    /// Positional option schema, one entry per accepted option.
    fn schema(&self) -> &'static [OptionSchema];

    /// Node kinds this rule wants to be called for.
    fn listen_kinds(&self) -> &'static [u16];

    fn check_node(&mut self, ctx: &mut RuleContext<'_>, idx: NodeIndex);

    /// Called once after the walker finishes a source file.
    fn leave_source_file(&mut self) {}
}
