//! NodeArena storage, creation methods (add_*) and typed accessors (get_*).

use crate::node::*;
use crate::syntax_kind;
use crate::visit::for_each_child;

/// Arena of nodes plus side pools of kind-specific payload data.
#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    extended_info: Vec<NodeExtendedInfo>,
    identifiers: Vec<IdentifierData>,
    access_exprs: Vec<AccessExprData>,
    call_exprs: Vec<CallExprData>,
    binary_exprs: Vec<BinaryExprData>,
    literals: Vec<LiteralData>,
    functions: Vec<FunctionData>,
    blocks: Vec<BlockData>,
    expr_statements: Vec<ExprStatementData>,
    returns: Vec<ReturnData>,
    source_files: Vec<SourceFileData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        macro_rules! clear_vecs {
            ($($field:ident),+ $(,)?) => {
                $(self.$field.clear();)+
            };
        }

        clear_vecs!(
            nodes,
            extended_info,
            identifiers,
            access_exprs,
            call_exprs,
            binary_exprs,
            literals,
            functions,
            blocks,
            expr_statements,
            returns,
            source_files,
        );
    }

    fn push_node(&mut self, kind: u16, data_index: u32, pos: u32, end: u32) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            flags: 0,
            data_index,
            pos,
            end,
        });
        self.extended_info.push(NodeExtendedInfo::default());
        idx
    }

    // =========================================================================
    // Creation
    // =========================================================================

    pub fn add_identifier(&mut self, text: &str, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData {
            escaped_text: text.to_string(),
        });
        self.push_node(syntax_kind::IDENTIFIER, data_index, pos, end)
    }

    pub fn add_this_expression(&mut self, pos: u32, end: u32) -> NodeIndex {
        self.push_node(syntax_kind::THIS_EXPRESSION, Node::NO_DATA, pos, end)
    }

    pub fn add_numeric_literal(&mut self, text: &str, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(LiteralData {
            text: text.to_string(),
        });
        self.push_node(syntax_kind::NUMERIC_LITERAL, data_index, pos, end)
    }

    pub fn add_string_literal(&mut self, text: &str, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(LiteralData {
            text: text.to_string(),
        });
        self.push_node(syntax_kind::STRING_LITERAL, data_index, pos, end)
    }

    /// Create `expression.name`. The property name becomes its own
    /// `IDENTIFIER` node spanning the tail of the access.
    pub fn add_property_access(
        &mut self,
        expression: NodeIndex,
        name: &str,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let name_end = end;
        let name_pos = end.saturating_sub(name.len() as u32);
        let name_idx = self.add_identifier(name, name_pos, name_end);
        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(AccessExprData {
            expression,
            name: name_idx,
        });
        self.push_node(syntax_kind::PROPERTY_ACCESS_EXPRESSION, data_index, pos, end)
    }

    /// Create `expression[argument]`.
    pub fn add_element_access(
        &mut self,
        expression: NodeIndex,
        argument: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(AccessExprData {
            expression,
            name: argument,
        });
        self.push_node(syntax_kind::ELEMENT_ACCESS_EXPRESSION, data_index, pos, end)
    }

    pub fn add_call_expression(
        &mut self,
        expression: NodeIndex,
        arguments: Vec<NodeIndex>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(CallExprData {
            expression,
            arguments,
        });
        self.push_node(syntax_kind::CALL_EXPRESSION, data_index, pos, end)
    }

    pub fn add_binary_expression(
        &mut self,
        left: NodeIndex,
        operator: u16,
        right: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(BinaryExprData {
            left,
            operator,
            right,
        });
        self.push_node(syntax_kind::BINARY_EXPRESSION, data_index, pos, end)
    }

    pub fn add_expression_statement(
        &mut self,
        expression: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(ExprStatementData { expression });
        self.push_node(syntax_kind::EXPRESSION_STATEMENT, data_index, pos, end)
    }

    pub fn add_return_statement(&mut self, expression: NodeIndex, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.returns.len() as u32;
        self.returns.push(ReturnData { expression });
        self.push_node(syntax_kind::RETURN_STATEMENT, data_index, pos, end)
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>, pos: u32, end: u32) -> NodeIndex {
        let data_index = self.blocks.len() as u32;
        self.blocks.push(BlockData { statements });
        self.push_node(syntax_kind::BLOCK, data_index, pos, end)
    }

    fn add_function_of_kind(
        &mut self,
        kind: u16,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.functions.len() as u32;
        self.functions.push(FunctionData {
            name,
            parameters,
            body,
        });
        self.push_node(kind, data_index, pos, end)
    }

    pub fn add_function_declaration(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        self.add_function_of_kind(
            syntax_kind::FUNCTION_DECLARATION,
            name,
            parameters,
            body,
            pos,
            end,
        )
    }

    pub fn add_function_expression(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        self.add_function_of_kind(
            syntax_kind::FUNCTION_EXPRESSION,
            name,
            parameters,
            body,
            pos,
            end,
        )
    }

    pub fn add_arrow_function(
        &mut self,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        self.add_function_of_kind(
            syntax_kind::ARROW_FUNCTION,
            NodeIndex::NONE,
            parameters,
            body,
            pos,
            end,
        )
    }

    pub fn add_source_file(
        &mut self,
        file_name: &str,
        statements: Vec<NodeIndex>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = self.source_files.len() as u32;
        self.source_files.push(SourceFileData {
            file_name: file_name.to_string(),
            statements,
        });
        self.push_node(syntax_kind::SOURCE_FILE, data_index, pos, end)
    }

    // =========================================================================
    // Access
    // =========================================================================

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    #[inline]
    pub fn get_extended(&self, idx: NodeIndex) -> Option<&NodeExtendedInfo> {
        if idx.is_none() {
            return None;
        }
        self.extended_info.get(idx.0 as usize)
    }

    /// Get identifier data.
    /// Returns None if node is not an identifier or has no data.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == syntax_kind::IDENTIFIER {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Resolve an identifier node's text.
    #[inline]
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        self.get_identifier(node)
            .map(|data| data.escaped_text.as_str())
    }

    /// Get access expression data (property access or element access).
    /// Returns None if node is not an access expression or has no data.
    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        use crate::syntax_kind::{ELEMENT_ACCESS_EXPRESSION, PROPERTY_ACCESS_EXPRESSION};
        if node.has_data()
            && (node.kind == PROPERTY_ACCESS_EXPRESSION || node.kind == ELEMENT_ACCESS_EXPRESSION)
        {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get call expression data.
    /// Returns None if node is not a call expression or has no data.
    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data() && node.kind == syntax_kind::CALL_EXPRESSION {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get binary expression data.
    /// Returns None if node is not a binary expression or has no data.
    #[inline]
    pub fn get_binary_expr(&self, node: &Node) -> Option<&BinaryExprData> {
        if node.has_data() && node.kind == syntax_kind::BINARY_EXPRESSION {
            self.binary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get literal data for numeric and string literals.
    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        use crate::syntax_kind::{NUMERIC_LITERAL, STRING_LITERAL};
        if node.has_data() && (node.kind == NUMERIC_LITERAL || node.kind == STRING_LITERAL) {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get function data for any function-like node.
    #[inline]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        if node.has_data() && syntax_kind::is_function_like(node.kind) {
            self.functions.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get block data.
    #[inline]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        if node.has_data() && node.kind == syntax_kind::BLOCK {
            self.blocks.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get expression statement data.
    #[inline]
    pub fn get_expr_statement(&self, node: &Node) -> Option<&ExprStatementData> {
        if node.has_data() && node.kind == syntax_kind::EXPRESSION_STATEMENT {
            self.expr_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get return statement data.
    #[inline]
    pub fn get_return(&self, node: &Node) -> Option<&ReturnData> {
        if node.has_data() && node.kind == syntax_kind::RETURN_STATEMENT {
            self.returns.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get source file data.
    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        if node.has_data() && node.kind == syntax_kind::SOURCE_FILE {
            self.source_files.get(node.data_index as usize)
        } else {
            None
        }
    }

    // =========================================================================
    // Parent links
    // =========================================================================

    /// Fill in parent links for every node reachable from `root`.
    ///
    /// Hosts call this once after building a source file and before handing
    /// the arena to the rule walker.
    pub fn link_parents(&mut self, root: NodeIndex) {
        let mut stack = vec![root];
        let mut children = Vec::new();
        while let Some(idx) = stack.pop() {
            children.clear();
            for_each_child(self, idx, |child| children.push(child));
            for &child in &children {
                if let Some(ext) = self.extended_info.get_mut(child.0 as usize) {
                    ext.parent = idx;
                }
                stack.push(child);
            }
        }
    }
}
