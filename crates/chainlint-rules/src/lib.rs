//! Lint rule framework and the rules shipped with it.
//!
//! This crate is organized into several submodules:
//! - `rule` - the `Rule` trait and positional option schemas
//! - `context` - `RuleContext`, the per-traversal state handed to rules
//! - `walker` - pre-order dispatcher that feeds nodes to registered rules
//! - `chains` - dotted-path reconstruction for property-access expressions
//! - `scope_usage` - per-scope occurrence counting and report suppression
//! - `rules` - the shipped rules
//!
//! Hosts build a `Walker`, register rules, and run it over an arena; the
//! walker returns the diagnostics the rules produced.

pub mod chains;
pub mod context;
pub mod rule;
pub mod rules;
pub mod scope_usage;
pub mod walker;

pub use context::RuleContext;
pub use rule::{OptionKind, OptionSchema, OptionsError, Rule, validate_options};
pub use walker::Walker;
