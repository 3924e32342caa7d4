//! Flags property-access chains repeated within one lexical scope.
//!
//! `foo.bar.baz` looked up over and over in the same scope is a repeated
//! walk the author should hoist into a local variable. The rule counts
//! each dotted path per scope and reports the occurrence that first
//! exceeds the tolerated repeat count; the reported path and its prefixes
//! are then silenced for the rest of that scope.

use chainlint_ast::NodeIndex;
use chainlint_ast::syntax_kind;
use chainlint_common::diagnostics::diagnostic_messages;
use serde_json::Value;

use crate::chains::extract_chain;
use crate::context::RuleContext;
use crate::rule::{OptionKind, OptionSchema, OptionsError, Rule, validate_options};
use crate::scope_usage::ScopeUsage;

/// Positional options: `[max_repeats, min_depth]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChainOptions {
    /// Uses of an identical path tolerated within a scope before flagging.
    pub max_repeats: u32,
    /// Paths of this length or shorter are exempt. The default of 1 keeps
    /// two-segment chains like `foo.bar` in play.
    pub min_depth: u32,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            max_repeats: 1,
            min_depth: 1,
        }
    }
}

impl ChainOptions {
    /// Parse positional raw values. Absent values default; an explicit `0`
    /// selects the default too, like an absent option.
    pub fn from_values(values: &[Value]) -> Result<Self, OptionsError> {
        Ok(Self {
            max_repeats: positional_value(values, 0)?,
            min_depth: positional_value(values, 1)?,
        })
    }
}

fn positional_value(values: &[Value], position: usize) -> Result<u32, OptionsError> {
    match values.get(position) {
        None => Ok(1),
        Some(value) => match value.as_u64() {
            Some(0) => Ok(1),
            Some(n) => Ok(u32::try_from(n).unwrap_or(u32::MAX)),
            None => {
                if value.as_i64().is_some() {
                    Err(OptionsError::Negative { position })
                } else {
                    Err(OptionsError::NotAnInteger { position })
                }
            }
        },
    }
}

const SCHEMA: &[OptionSchema] = &[
    OptionSchema {
        kind: OptionKind::NonNegativeInteger,
    },
    OptionSchema {
        kind: OptionKind::NonNegativeInteger,
    },
];

const LISTEN_KINDS: &[u16] = &[syntax_kind::PROPERTY_ACCESS_EXPRESSION];

pub struct NoRepeatedChains {
    options: ChainOptions,
    usage: ScopeUsage,
}

impl NoRepeatedChains {
    pub fn new(options: ChainOptions) -> Self {
        Self {
            options,
            usage: ScopeUsage::new(),
        }
    }

    /// Construct from host-supplied raw option values, schema-checking
    /// them first.
    pub fn from_raw_options(values: &[Value]) -> Result<Self, OptionsError> {
        validate_options(SCHEMA, values)?;
        Ok(Self::new(ChainOptions::from_values(values)?))
    }

    pub fn options(&self) -> ChainOptions {
        self.options
    }
}

impl Default for NoRepeatedChains {
    fn default() -> Self {
        Self::new(ChainOptions::default())
    }
}

impl Rule for NoRepeatedChains {
    fn name(&self) -> &'static str {
        "no-repeated-chains"
    }

    fn schema(&self) -> &'static [OptionSchema] {
        SCHEMA
    }

    fn listen_kinds(&self) -> &'static [u16] {
        LISTEN_KINDS
    }

    fn check_node(&mut self, ctx: &mut RuleContext<'_>, idx: NodeIndex) {
        let Some(node) = ctx.arena().get(idx) else {
            return;
        };
        // element accesses never register; reject anything but a plain
        // property access outright
        if node.kind != syntax_kind::PROPERTY_ACCESS_EXPRESSION {
            return;
        }

        let path = match extract_chain(ctx.arena(), idx) {
            Ok(path) => path,
            // chains rooted in calls, literals etc. are not hoistable
            Err(err) => {
                tracing::trace!(%err, "skipping unresolvable chain");
                return;
            }
        };

        let scope = ctx.current_scope();
        if let Some(repeat) = self.usage.observe(
            scope,
            &path,
            self.options.max_repeats,
            self.options.min_depth,
        ) {
            ctx.report(
                idx,
                diagnostic_messages::REPEATED_PROPERTY_CHAIN,
                &[&repeat.joined, &repeat.count.to_string()],
            );
        }
    }

    fn leave_source_file(&mut self) {
        self.usage.clear();
    }
}
