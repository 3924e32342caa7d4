//! AST node model consumed by the lint rules.
//!
//! Hosts parse source text elsewhere and materialize the result here: an
//! arena of compact `Node` records with side pools of typed payload data,
//! `u16` syntax-kind constants, parent links, and source-order child
//! traversal. The rules never see source text, only arena indices.

pub mod arena;
pub mod node;
pub mod syntax_kind;
pub mod visit;

pub use arena::NodeArena;
pub use node::{
    AccessExprData, BinaryExprData, BlockData, CallExprData, ExprStatementData, FunctionData,
    IdentifierData, LiteralData, Node, NodeExtendedInfo, NodeIndex, ReturnData, SourceFileData,
};
pub use visit::{for_each_child, walk_pre_order};
