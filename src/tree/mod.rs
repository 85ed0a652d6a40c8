//! Read-only view over a syntax tree.
//!
//! Everything that walks a tree (the matcher, the visualizer, the statistics
//! pass) goes through [`SyntaxNode`], so the same traversal code works on the
//! tree-sitter backed [`CsNode`] and on hand-built trees in tests.

pub mod cs;
pub mod kinds;

pub use cs::CsNode;
pub use kinds::{Category, TrackedKind};

use serde::Serialize;
use std::fmt;

/// 1-based start position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One declared parameter: its name and its type text as written.
///
/// `type_text` is empty when the parameter has no explicit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub type_text: &'a str,
}

/// A leaf token of the source, used to re-render declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: &'a str,
    pub text: &'a str,
}

/// A node of a syntax tree.
///
/// Only `kind`, `children` and `span` are required. The remaining accessors
/// are kind-specific and return an empty value for kinds that don't carry
/// the field.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> &str;

    /// Child nodes in source order.
    fn children(&self) -> Vec<Self>;

    fn span(&self) -> Span;

    /// Declared identifier (class, method, parameter, ...).
    fn name(&self) -> Option<&str> {
        None
    }

    /// Declared type text of a property, field, parameter or event.
    fn type_text(&self) -> Option<&str> {
        None
    }

    /// Return type text of a method-like declaration.
    fn return_type_text(&self) -> Option<&str> {
        None
    }

    fn parameters(&self) -> Vec<Parameter<'_>> {
        Vec::new()
    }

    /// Variable names introduced by a field or variable declaration.
    fn declared_names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn modifiers(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Value of a literal, without quotes.
    fn literal_value(&self) -> Option<&str> {
        None
    }

    /// Number of members declared in a type body.
    fn member_count(&self) -> usize {
        0
    }

    fn accessor_count(&self) -> usize {
        0
    }

    /// Leaf tokens of the declaration with its body and comments left out.
    fn signature_tokens(&self) -> Vec<Token<'_>> {
        Vec::new()
    }
}

/// Visit `root` and all its descendants in pre-order, passing each node's
/// depth (the root is at depth 0).
///
/// Uses an explicit stack, so tree height is bounded by memory rather than
/// by the call stack.
pub fn walk_preorder<N, F>(root: N, mut visit: F)
where
    N: SyntaxNode,
    F: FnMut(&N, usize),
{
    let mut stack = vec![(root, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        visit(&node, depth);
        let children = node.children();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }
}

/// Hand-built tree for exercising traversal code without a parser.
#[cfg(test)]
pub(crate) mod testing {
    use super::{Span, SyntaxNode};

    #[derive(Debug, Clone)]
    pub struct TestNode {
        pub kind: &'static str,
        pub children: Vec<TestNode>,
        pub span: Span,
    }

    pub fn node(kind: &'static str, children: Vec<TestNode>) -> TestNode {
        TestNode {
            kind,
            children,
            span: Span { line: 1, column: 1 },
        }
    }

    pub fn leaf(kind: &'static str) -> TestNode {
        node(kind, Vec::new())
    }

    impl SyntaxNode for TestNode {
        fn kind(&self) -> &str {
            self.kind
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }

        fn span(&self) -> Span {
            self.span
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{leaf, node};
    use super::*;

    #[test]
    fn preorder_visits_in_source_order_with_depth() {
        let tree = node("a", vec![node("b", vec![leaf("c")]), leaf("d")]);

        let mut seen = Vec::new();
        walk_preorder(tree, |n, depth| seen.push((n.kind().to_string(), depth)));

        let expected: Vec<(String, usize)> = vec![
            ("a".into(), 0),
            ("b".into(), 1),
            ("c".into(), 2),
            ("d".into(), 1),
        ];
        assert_eq!(seen, expected);
    }

    #[test]
    fn span_displays_line_and_column() {
        let span = Span { line: 50, column: 15 };
        assert_eq!(span.to_string(), "50:15");
    }
}
