//! Source-order child enumeration and pre-order traversal.

use crate::arena::NodeArena;
use crate::node::NodeIndex;
use crate::syntax_kind;

/// Invoke `f` on each direct child of `idx` in source order.
///
/// Unknown kinds and leaf kinds (identifiers, literals, `this`) have no
/// children.
pub fn for_each_child(arena: &NodeArena, idx: NodeIndex, mut f: impl FnMut(NodeIndex)) {
    let Some(node) = arena.get(idx) else {
        return;
    };

    match node.kind {
        syntax_kind::SOURCE_FILE => {
            if let Some(data) = arena.get_source_file(node) {
                for &stmt in &data.statements {
                    f(stmt);
                }
            }
        }
        syntax_kind::BLOCK => {
            if let Some(data) = arena.get_block(node) {
                for &stmt in &data.statements {
                    f(stmt);
                }
            }
        }
        syntax_kind::EXPRESSION_STATEMENT => {
            if let Some(data) = arena.get_expr_statement(node) {
                f(data.expression);
            }
        }
        syntax_kind::RETURN_STATEMENT => {
            if let Some(data) = arena.get_return(node)
                && data.expression.is_some()
            {
                f(data.expression);
            }
        }
        syntax_kind::PROPERTY_ACCESS_EXPRESSION | syntax_kind::ELEMENT_ACCESS_EXPRESSION => {
            if let Some(data) = arena.get_access_expr(node) {
                f(data.expression);
                f(data.name);
            }
        }
        syntax_kind::CALL_EXPRESSION => {
            if let Some(data) = arena.get_call_expr(node) {
                f(data.expression);
                for &arg in &data.arguments {
                    f(arg);
                }
            }
        }
        syntax_kind::BINARY_EXPRESSION => {
            if let Some(data) = arena.get_binary_expr(node) {
                f(data.left);
                f(data.right);
            }
        }
        k if syntax_kind::is_function_like(k) => {
            if let Some(data) = arena.get_function(node) {
                if data.name.is_some() {
                    f(data.name);
                }
                for &param in &data.parameters {
                    f(param);
                }
                if data.body.is_some() {
                    f(data.body);
                }
            }
        }
        _ => {}
    }
}

/// Visit `root` and every node below it in pre-order (parents before
/// children, children in source order).
pub fn walk_pre_order(arena: &NodeArena, root: NodeIndex, mut f: impl FnMut(NodeIndex)) {
    let mut stack = vec![root];
    let mut children = Vec::new();
    while let Some(idx) = stack.pop() {
        if arena.get(idx).is_none() {
            continue;
        }
        f(idx);
        children.clear();
        for_each_child(arena, idx, |child| children.push(child));
        // reversed so the leftmost child is popped first
        for &child in children.iter().rev() {
            stack.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_order_visits_parents_before_children() {
        let mut arena = NodeArena::new();
        let foo = arena.add_identifier("foo", 0, 3);
        let bar = arena.add_property_access(foo, "bar", 0, 7);
        let baz = arena.add_property_access(bar, "baz", 0, 11);
        let stmt = arena.add_expression_statement(baz, 0, 12);
        let file = arena.add_source_file("main.js", vec![stmt], 0, 12);

        let mut order = Vec::new();
        walk_pre_order(&arena, file, |idx| order.push(idx));

        let file_at = order.iter().position(|&i| i == file).unwrap();
        let baz_at = order.iter().position(|&i| i == baz).unwrap();
        let bar_at = order.iter().position(|&i| i == bar).unwrap();
        let foo_at = order.iter().position(|&i| i == foo).unwrap();
        assert!(file_at < baz_at);
        assert!(baz_at < bar_at);
        assert!(bar_at < foo_at);
    }

    #[test]
    fn statements_are_visited_in_source_order() {
        let mut arena = NodeArena::new();
        let a = arena.add_identifier("a", 0, 1);
        let stmt_a = arena.add_expression_statement(a, 0, 2);
        let b = arena.add_identifier("b", 3, 4);
        let stmt_b = arena.add_expression_statement(b, 3, 5);
        let file = arena.add_source_file("main.js", vec![stmt_a, stmt_b], 0, 5);

        let mut order = Vec::new();
        walk_pre_order(&arena, file, |idx| order.push(idx));

        let a_at = order.iter().position(|&i| i == stmt_a).unwrap();
        let b_at = order.iter().position(|&i| i == stmt_b).unwrap();
        assert!(a_at < b_at);
    }

    #[test]
    fn function_children_include_name_params_and_body() {
        let mut arena = NodeArena::new();
        let name = arena.add_identifier("f", 9, 10);
        let param = arena.add_identifier("x", 11, 12);
        let body = arena.add_block(vec![], 14, 16);
        let func = arena.add_function_declaration(name, vec![param], body, 0, 16);

        let mut children = Vec::new();
        for_each_child(&arena, func, |c| children.push(c));
        assert_eq!(children, vec![name, param, body]);
    }

    #[test]
    fn missing_node_yields_no_children() {
        let arena = NodeArena::new();
        let mut called = false;
        for_each_child(&arena, NodeIndex::NONE, |_| called = true);
        assert!(!called);
    }
}
