//! Shared builders for the rule-level tests.
#![allow(dead_code)]

use chainlint_ast::{NodeArena, NodeIndex};
use chainlint_common::Diagnostic;
use chainlint_rules::Walker;
use chainlint_rules::rules::NoRepeatedChains;
use serde_json::Value;

/// Build a dotted chain expression starting at byte offset `pos`.
/// A leading `"this"` segment becomes a `this` root.
pub fn chain(arena: &mut NodeArena, segments: &[&str], pos: u32) -> NodeIndex {
    let mut end = pos + segments[0].len() as u32;
    let mut expr = if segments[0] == "this" {
        arena.add_this_expression(pos, end)
    } else {
        arena.add_identifier(segments[0], pos, end)
    };
    for name in &segments[1..] {
        end += 1 + name.len() as u32;
        expr = arena.add_property_access(expr, name, pos, end);
    }
    expr
}

/// A chain wrapped in an expression statement.
pub fn chain_stmt(arena: &mut NodeArena, segments: &[&str], pos: u32) -> NodeIndex {
    let expr = chain(arena, segments, pos);
    let end = arena.get(expr).unwrap().end;
    arena.add_expression_statement(expr, pos, end + 1)
}

pub fn function_decl(arena: &mut NodeArena, name: &str, statements: Vec<NodeIndex>) -> NodeIndex {
    let body = arena.add_block(statements, 0, 0);
    let name_idx = arena.add_identifier(name, 0, 0);
    arena.add_function_declaration(name_idx, vec![], body, 0, 0)
}

pub fn source_file(arena: &mut NodeArena, statements: Vec<NodeIndex>) -> NodeIndex {
    arena.add_source_file("main.js", statements, 0, 0)
}

/// Run the repeated-chain rule with default options.
pub fn lint(arena: &mut NodeArena, root: NodeIndex) -> Vec<Diagnostic> {
    lint_with_options(arena, root, &[])
}

/// Run the repeated-chain rule with positional raw options.
pub fn lint_with_options(
    arena: &mut NodeArena,
    root: NodeIndex,
    options: &[Value],
) -> Vec<Diagnostic> {
    let rule = NoRepeatedChains::from_raw_options(options).expect("options must satisfy schema");
    let mut walker = Walker::new();
    walker.add_rule(Box::new(rule));
    walker.run(arena, root)
}
