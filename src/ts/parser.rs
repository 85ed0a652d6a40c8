use crate::ts::errors::TreeSitterError;
use ast_grep_language::{LanguageExt, SupportLang};
use crate::tree::{CsNode, Span, SyntaxNode};
use tree_sitter::{Parser, Tree};

/// Tree-sitter parser wrapper for C# source code.
pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    /// Create a new parser loaded with the C# grammar.
    pub fn new() -> Result<Self, TreeSitterError> {
        let mut parser = Parser::new();
        // ast-grep-language bundles the tree-sitter-c-sharp grammar
        let ts_lang = SupportLang::CSharp.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| TreeSitterError::LanguageSet)?;

        Ok(Self { parser })
    }

    /// Parse source code into a tree-sitter Tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, TreeSitterError> {
        self.parser
            .parse(source, None)
            .ok_or(TreeSitterError::ParseFailed)
    }

    /// Parse source code and return the tree along with the source.
    pub fn parse_with_source<'a>(
        &mut self,
        source: &'a str,
    ) -> Result<ParsedSource<'a>, TreeSitterError> {
        let tree = self.parse(source)?;
        Ok(ParsedSource { source, tree })
    }
}

/// A parsed source file with its tree-sitter tree.
pub struct ParsedSource<'a> {
    pub source: &'a str,
    pub tree: Tree,
}

impl<'a> ParsedSource<'a> {
    /// Start of every ERROR and MISSING node, in source order.
    pub fn error_spans(&self) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut stack = vec![self.tree.root_node()];

        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                spans.push(CsNode::new(node, self.source).span());
            }

            // Subtrees without errors can be skipped entirely.
            if !node.has_error() {
                continue;
            }

            let mut cursor = node.walk();
            let children: Vec<_> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_csharp() {
        let mut parser = CSharpParser::new().unwrap();
        let source = "class Program { static void Main(string[] args) { } }";
        let parsed = parser.parse_with_source(source).unwrap();

        assert!(parsed.error_spans().is_empty());
        assert_eq!(parsed.tree.root_node().kind(), "compilation_unit");
    }

    #[test]
    fn error_spans_use_character_columns() {
        let mut parser = CSharpParser::new().unwrap();
        let source = "class Ünïcode { void Main( { }";
        let parsed = parser.parse_with_source(source).unwrap();

        let spans = parsed.error_spans();
        assert!(!spans.is_empty());
        assert!(spans.iter().all(|s| s.line == 1 && s.column <= source.chars().count() + 1));
    }
}
