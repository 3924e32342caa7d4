//! Node records and typed payload data.
//!
//! A `Node` is a compact fixed-size record; kind-specific payloads live in
//! side pools on the arena, addressed through `data_index`.

/// Index of a node in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no node".
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

/// Compact node record.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub kind: u16,
    pub flags: u16,
    /// Index into the kind-specific side pool, or `Node::NO_DATA`.
    pub data_index: u32,
    /// Byte offset of the node's first character.
    pub pos: u32,
    /// Byte offset one past the node's last character.
    pub end: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }
}

/// Per-node info that is filled in after construction.
#[derive(Copy, Clone, Debug)]
pub struct NodeExtendedInfo {
    pub parent: NodeIndex,
}

impl Default for NodeExtendedInfo {
    fn default() -> Self {
        Self {
            parent: NodeIndex::NONE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Payload shared by property and element accesses.
///
/// For a property access `name` is the property `IDENTIFIER` node; for an
/// element access it is the index expression.
#[derive(Copy, Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: Vec<NodeIndex>,
}

#[derive(Copy, Clone, Debug)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    /// Operator token kind, e.g. `syntax_kind::PLUS_TOKEN`.
    pub operator: u16,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct FunctionData {
    /// Name `IDENTIFIER` node, or `NodeIndex::NONE` for anonymous functions.
    pub name: NodeIndex,
    pub parameters: Vec<NodeIndex>,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BlockData {
    pub statements: Vec<NodeIndex>,
}

#[derive(Copy, Clone, Debug)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Copy, Clone, Debug)]
pub struct ReturnData {
    /// `NodeIndex::NONE` for a bare `return;`.
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: Vec<NodeIndex>,
}
