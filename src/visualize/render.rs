use super::{outline, Mode, OutlineLine};
use crate::stats::aggregate;
use crate::tree::{Category, SyntaxNode};
use colored::{Color, Colorize};

const RULE_WIDTH: usize = 50;

fn category_color(category: Category) -> Color {
    match category {
        Category::Declaration => Color::Cyan,
        Category::Member => Color::Green,
        Category::Variable => Color::BrightYellow,
        Category::TypeReference => Color::Magenta,
        Category::Statement => Color::Red,
        Category::Expression => Color::Yellow,
        Category::Structural => Color::BrightBlack,
        Category::Directive => Color::BrightWhite,
        Category::Other => Color::White,
    }
}

/// Turns outline records into text.
#[derive(Debug, Clone, Copy)]
pub struct OutlineRenderer {
    pub mode: Mode,
    pub color: bool,
}

impl OutlineRenderer {
    pub fn new(mode: Mode, color: bool) -> Self {
        Self { mode, color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render_line(&self, line: &OutlineLine) -> String {
        let kind = self.paint(&line.kind, category_color(line.category));
        match self.mode {
            Mode::Basic => {
                let mut out = format!("{}├─ {}", "  ".repeat(line.depth), kind);
                if let Some(summary) = &line.summary {
                    out.push(' ');
                    out.push_str(&self.paint(&format!("[{summary}]"), Color::White));
                }
                out
            }
            Mode::Detailed => {
                let connector = if line.depth > 0 { "├─ " } else { "" };
                let mut out = format!("{}{}{}", "│  ".repeat(line.depth), connector, kind);
                if let Some(details) = &line.summary {
                    out.push_str(&self.paint(&format!(" → {details}"), Color::BrightWhite));
                }
                let span = format!(
                    " (Line: {}, Col: {})",
                    line.span.line, line.span.column
                );
                out.push_str(&self.paint(&span, Color::BrightBlack));
                out
            }
        }
    }

    /// Render every line, newline-terminated.
    pub fn render(&self, lines: &[OutlineLine]) -> String {
        let mut out = String::new();
        for line in lines {
            out.push_str(&self.render_line(line));
            out.push('\n');
        }
        out
    }
}

/// Basic outline of the whole tree under a header.
pub fn render_tree<N: SyntaxNode>(root: N, color: bool) -> String {
    let renderer = OutlineRenderer::new(Mode::Basic, color);
    let mut out = format!("{}\n", renderer.paint("=== FULL AST TREE ===", Color::Cyan));
    out.push_str(&renderer.render(&outline(root, Mode::Basic)));
    out
}

/// Full report: the source, the detailed outline and the statistics block.
pub fn render_detailed<N: SyntaxNode + Clone>(source: &str, root: N, color: bool) -> String {
    let renderer = OutlineRenderer::new(Mode::Detailed, color);
    let rule = "-".repeat(RULE_WIDTH);
    let stats = aggregate(root.clone());

    let mut out = String::new();
    out.push_str(&renderer.paint("=== DETAILED AST TREE ===", Color::Cyan));
    out.push('\n');
    out.push_str(&format!("Source code ({} chars):\n", source.chars().count()));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(source);
    if !source.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&rule);
    out.push_str("\n\nAST structure:\n");
    out.push_str(&renderer.render(&outline(root, Mode::Detailed)));
    out.push('\n');
    out.push_str(&renderer.paint("=== AST STATISTICS ===", Color::Cyan));
    out.push('\n');
    out.push_str(&stats.to_string());
    out
}
