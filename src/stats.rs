//! Node counts and depth of a syntax tree.

use crate::tree::{walk_preorder, SyntaxNode, TrackedKind};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Root plus every descendant.
    pub total_nodes: usize,
    pub classes: usize,
    pub interfaces: usize,
    pub methods: usize,
    pub properties: usize,
    pub fields: usize,
    pub constructors: usize,
    /// Event declarations and event fields together.
    pub events: usize,
    /// Height of the tree; 0 for a lone root.
    pub max_depth: usize,
}

impl Stats {
    /// Sum of the per-kind counts.
    pub fn tracked_total(&self) -> usize {
        self.classes
            + self.interfaces
            + self.methods
            + self.properties
            + self.fields
            + self.constructors
            + self.events
    }

    fn record(&mut self, kind: TrackedKind) {
        let slot = match kind {
            TrackedKind::Class => &mut self.classes,
            TrackedKind::Interface => &mut self.interfaces,
            TrackedKind::Method => &mut self.methods,
            TrackedKind::Property => &mut self.properties,
            TrackedKind::Field => &mut self.fields,
            TrackedKind::Constructor => &mut self.constructors,
            TrackedKind::Event => &mut self.events,
        };
        *slot += 1;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total nodes: {}", self.total_nodes)?;
        writeln!(f, "Classes: {}", self.classes)?;
        writeln!(f, "Interfaces: {}", self.interfaces)?;
        writeln!(f, "Methods: {}", self.methods)?;
        writeln!(f, "Properties: {}", self.properties)?;
        writeln!(f, "Fields: {}", self.fields)?;
        writeln!(f, "Constructors: {}", self.constructors)?;
        writeln!(f, "Events: {}", self.events)?;
        writeln!(f, "Max depth: {}", self.max_depth)
    }
}

/// Count every node of the tree in one pass.
///
/// Per-kind counts cover the root's descendants only; the root itself is
/// the container being described.
pub fn aggregate<N: SyntaxNode>(root: N) -> Stats {
    let mut stats = Stats::default();
    walk_preorder(root, |node, depth| {
        stats.total_nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if depth == 0 {
            return;
        }
        if let Some(kind) = TrackedKind::of(node.kind()) {
            stats.record(kind);
        }
    });
    stats
}
