//! Dotted-path reconstruction for property-access expressions.
//!
//! Finds `foo.bar.baz` or `this.bar.baz`: the walk starts at the outermost
//! access (the rightmost name), follows `expression` links through nested
//! property accesses, and terminates at an identifier or `this` root.

use std::fmt;

use chainlint_ast::syntax_kind;
use chainlint_ast::{NodeArena, NodeIndex};
use chainlint_common::limits::MAX_CHAIN_WALK_ITERATIONS;
use smallvec::SmallVec;

/// A dotted access path, root first (`["foo", "bar", "baz"]`).
///
/// Immutable once built; keyed by its dot-joined form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainPath {
    segments: SmallVec<[String; 4]>,
}

impl ChainPath {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dot-joined key form, e.g. `"foo.bar.baz"`.
    pub fn join(&self) -> String {
        self.segments.join(".")
    }
}

/// A chain that cannot be resolved to an identifier- or `this`-rooted path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// The innermost object is not an identifier or `this` (a call, a
    /// literal, an element access, ...).
    UnsupportedRoot { kind: u16 },
    /// A node or its payload is missing from the arena.
    MissingData,
    /// The object chain exceeded `MAX_CHAIN_WALK_ITERATIONS` links.
    TooDeep,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::UnsupportedRoot { kind } => {
                write!(f, "chain is rooted in an unsupported node (kind {kind})")
            }
            ChainError::MissingData => write!(f, "chain references a missing node"),
            ChainError::TooDeep => write!(f, "chain exceeds the maximum walk depth"),
        }
    }
}

impl std::error::Error for ChainError {}

/// Reconstruct the dotted path of a property-access expression.
///
/// Pure: reads the arena, never mutates it. The returned path has one
/// segment per access link plus one for the root token. Callers are
/// expected to pre-filter element (computed) accesses; one anywhere in the
/// object chain makes the path unresolvable.
pub fn extract_chain(arena: &NodeArena, idx: NodeIndex) -> Result<ChainPath, ChainError> {
    let mut segments: SmallVec<[String; 4]> = SmallVec::new();
    let mut current = idx;
    let mut iterations = 0;

    // rightmost name first, then everything up to the root, exclusive
    loop {
        iterations += 1;
        if iterations > MAX_CHAIN_WALK_ITERATIONS {
            return Err(ChainError::TooDeep);
        }
        let node = arena.get(current).ok_or(ChainError::MissingData)?;
        if node.kind != syntax_kind::PROPERTY_ACCESS_EXPRESSION {
            break;
        }
        let access = arena.get_access_expr(node).ok_or(ChainError::MissingData)?;
        let name = arena
            .identifier_text(access.name)
            .ok_or(ChainError::MissingData)?;
        segments.push(name.to_string());
        current = access.expression;
    }

    // the root is the object name or "this"
    let root = arena.get(current).ok_or(ChainError::MissingData)?;
    match root.kind {
        syntax_kind::IDENTIFIER => {
            let text = arena
                .identifier_text(current)
                .ok_or(ChainError::MissingData)?;
            segments.push(text.to_string());
        }
        syntax_kind::THIS_EXPRESSION => segments.push("this".to_string()),
        kind => {
            tracing::trace!(kind, "chain root is not hoistable");
            return Err(ChainError::UnsupportedRoot { kind });
        }
    }

    // collected backwards, so reverse
    segments.reverse();
    Ok(ChainPath { segments })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier_chain(arena: &mut NodeArena, segments: &[&str]) -> NodeIndex {
        let mut expr = arena.add_identifier(segments[0], 0, 0);
        for name in &segments[1..] {
            expr = arena.add_property_access(expr, name, 0, 0);
        }
        expr
    }

    #[test]
    fn round_trips_a_this_rooted_chain() {
        let mut arena = NodeArena::new();
        let mut expr = arena.add_this_expression(0, 4);
        for name in ["a", "b", "c"] {
            expr = arena.add_property_access(expr, name, 0, 0);
        }

        let path = extract_chain(&arena, expr).unwrap();
        assert_eq!(path.segments(), ["this", "a", "b", "c"]);
        assert_eq!(path.join(), "this.a.b.c");
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn round_trips_an_identifier_rooted_chain() {
        let mut arena = NodeArena::new();
        let expr = identifier_chain(&mut arena, &["foo", "bar", "baz"]);
        let path = extract_chain(&arena, expr).unwrap();
        assert_eq!(path.join(), "foo.bar.baz");
    }

    #[test]
    fn path_depth_is_links_plus_root() {
        let mut arena = NodeArena::new();
        let expr = identifier_chain(&mut arena, &["foo", "bar"]);
        let path = extract_chain(&arena, expr).unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn rejects_call_rooted_chains() {
        let mut arena = NodeArena::new();
        // getFoo().bar
        let callee = arena.add_identifier("getFoo", 0, 6);
        let call = arena.add_call_expression(callee, vec![], 0, 8);
        let access = arena.add_property_access(call, "bar", 0, 12);

        assert_eq!(
            extract_chain(&arena, access),
            Err(ChainError::UnsupportedRoot {
                kind: syntax_kind::CALL_EXPRESSION
            })
        );
    }

    #[test]
    fn rejects_literal_rooted_chains() {
        let mut arena = NodeArena::new();
        let literal = arena.add_string_literal("s", 0, 3);
        let access = arena.add_property_access(literal, "length", 0, 10);

        assert_eq!(
            extract_chain(&arena, access),
            Err(ChainError::UnsupportedRoot {
                kind: syntax_kind::STRING_LITERAL
            })
        );
    }

    #[test]
    fn rejects_element_access_in_the_object_chain() {
        let mut arena = NodeArena::new();
        // foo["bar"].baz
        let foo = arena.add_identifier("foo", 0, 3);
        let key = arena.add_string_literal("bar", 4, 9);
        let element = arena.add_element_access(foo, key, 0, 10);
        let access = arena.add_property_access(element, "baz", 0, 14);

        assert_eq!(
            extract_chain(&arena, access),
            Err(ChainError::UnsupportedRoot {
                kind: syntax_kind::ELEMENT_ACCESS_EXPRESSION
            })
        );
    }

    #[test]
    fn bare_identifier_has_a_single_segment() {
        let mut arena = NodeArena::new();
        let foo = arena.add_identifier("foo", 0, 3);
        let path = extract_chain(&arena, foo).unwrap();
        assert_eq!(path.segments(), ["foo"]);
    }
}
