//! Per-traversal state handed to rules.

use chainlint_ast::syntax_kind;
use chainlint_ast::{NodeArena, NodeIndex};
use chainlint_common::diagnostics::{Diagnostic, DiagnosticMessage};
use chainlint_common::limits::MAX_TREE_WALK_ITERATIONS;
use chainlint_common::format_message;

/// Context for one source-file traversal.
///
/// Rules read the arena through it, resolve the current lexical scope, and
/// report diagnostics into it. The walker keeps `current_node` pointed at
/// the node being dispatched.
pub struct RuleContext<'a> {
    arena: &'a NodeArena,
    file_name: String,
    root: NodeIndex,
    current_node: NodeIndex,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RuleContext<'a> {
    pub fn new(arena: &'a NodeArena, root: NodeIndex) -> Self {
        let file_name = arena
            .get(root)
            .and_then(|node| arena.get_source_file(node))
            .map(|data| data.file_name.clone())
            .unwrap_or_default();
        Self {
            arena,
            file_name,
            root,
            current_node: root,
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn set_current_node(&mut self, idx: NodeIndex) {
        self.current_node = idx;
    }

    /// Resolve the lexical scope of the node currently being checked.
    ///
    /// The scope is the nearest enclosing function-like node, or the source
    /// file root when the node sits at top level. The returned index is an
    /// opaque key; callers never look inside it.
    pub fn current_scope(&self) -> NodeIndex {
        let mut current = self.current_node;
        let mut iterations = 0;
        while current.is_some() {
            iterations += 1;
            if iterations > MAX_TREE_WALK_ITERATIONS {
                return self.root;
            }
            let Some(ext) = self.arena.get_extended(current) else {
                return self.root;
            };
            let parent = ext.parent;
            if parent.is_none() {
                return self.root;
            }
            if let Some(node) = self.arena.get(parent)
                && syntax_kind::is_function_like(node.kind)
            {
                return parent;
            }
            current = parent;
        }
        self.root
    }

    /// Record a diagnostic against `idx`, rendering `message`'s template
    /// with `args`.
    pub fn report(&mut self, idx: NodeIndex, message: DiagnosticMessage, args: &[&str]) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        self.diagnostics.push(Diagnostic::new(
            message.category,
            self.file_name.clone(),
            node.pos,
            node.width(),
            format_message(message.message, args),
            message.code,
        ));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
