//! Centralized limits and thresholds for the chainlint crates.
//!
//! Keeping these in one place prevents duplicate definitions with
//! inconsistent values and documents what each limit protects against.

/// Maximum number of object links followed when reconstructing a dotted
/// chain from a property-access expression.
///
/// A hostile or corrupted arena could contain an access expression whose
/// `expression` links form a cycle; the extractor bails out instead of
/// spinning.
///
/// ```javascript
/// a.b.c.d.e.f /* ... hundreds of links ... */;
/// ```
pub const MAX_CHAIN_WALK_ITERATIONS: u32 = 256;

/// Maximum number of parent links followed when resolving the enclosing
/// scope of a node.
///
/// Parent links are populated by `NodeArena::link_parents`; the walk is
/// bounded so a malformed parent chain cannot loop forever.
pub const MAX_TREE_WALK_ITERATIONS: u32 = 4096;
