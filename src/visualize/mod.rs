//! Tree outlines.
//!
//! Building an outline and printing it are separate steps: [`outline`]
//! produces plain [`OutlineLine`] records, and [`OutlineRenderer`] turns
//! them into (optionally colored) text.

pub mod annotate;
pub mod render;

pub use annotate::{detail, summarize, Rule};
pub use render::{render_detailed, render_tree, OutlineRenderer};

use crate::tree::{walk_preorder, Category, Span, SyntaxNode};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Basic,
    /// Richer per-kind details and a span on every line.
    Detailed,
}

/// One node of an outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineLine {
    pub kind: String,
    pub depth: usize,
    pub summary: Option<String>,
    pub category: Category,
    pub span: Span,
}

/// One line per node, in pre-order.
pub fn outline<N: SyntaxNode>(root: N, mode: Mode) -> Vec<OutlineLine> {
    let mut lines = Vec::new();
    walk_preorder(root, |node, depth| {
        let kind = node.kind();
        let summary = match mode {
            Mode::Basic => summarize(node),
            Mode::Detailed => detail(node),
        };
        lines.push(OutlineLine {
            kind: kind.to_string(),
            depth,
            summary,
            category: Category::of(kind),
            span: node.span(),
        });
    });
    lines
}
