//! Pre-order dispatcher that feeds arena nodes to registered rules.

use chainlint_ast::{NodeArena, NodeIndex, walk_pre_order};
use chainlint_common::Diagnostic;
use rustc_hash::FxHashMap;

use crate::context::RuleContext;
use crate::rule::Rule;

/// Drives registered rules over one source file at a time.
///
/// Nodes are visited in document order (parents before children, children
/// in source order); a rule is called once per node whose kind it listens
/// for, and each call completes before the next node is visited.
#[derive(Default)]
pub struct Walker {
    rules: Vec<Box<dyn Rule>>,
    by_kind: FxHashMap<u16, Vec<usize>>,
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under every node kind it listens for.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        let index = self.rules.len();
        for &kind in rule.listen_kinds() {
            self.by_kind.entry(kind).or_default().push(index);
        }
        self.rules.push(rule);
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lint one source file and return the diagnostics the rules produced.
    ///
    /// Parent links are (re)established first; rules rely on them for scope
    /// resolution. Every rule is told when the file is done so per-file
    /// state does not outlive the traversal.
    pub fn run(&mut self, arena: &mut NodeArena, root: NodeIndex) -> Vec<Diagnostic> {
        arena.link_parents(root);
        let arena = &*arena;

        let mut ctx = RuleContext::new(arena, root);
        tracing::debug!(
            file = ctx.file_name(),
            rules = self.rules.len(),
            "linting source file"
        );

        walk_pre_order(arena, root, |idx| {
            let Some(node) = arena.get(idx) else {
                return;
            };
            if let Some(interested) = self.by_kind.get(&node.kind) {
                ctx.set_current_node(idx);
                for rule_index in interested.clone() {
                    self.rules[rule_index].check_node(&mut ctx, idx);
                }
            }
        });

        for rule in &mut self.rules {
            rule.leave_source_file();
        }
        ctx.take_diagnostics()
    }
}
