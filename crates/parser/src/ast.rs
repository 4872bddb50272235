// crates/parser/src/ast.rs

use std::ops::Range;

/// Byte range in the source text
pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Number(f64),
    List(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Short description used in diagnostics
    pub fn describe(&self) -> &'static str {
        match &self.kind {
            NodeKind::Number(_) => "a number",
            NodeKind::List(_) => "a list",
        }
    }
}
