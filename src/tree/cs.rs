use crate::tree::kinds;
use crate::tree::{Parameter, Span, SyntaxNode, Token};
use tree_sitter::Node;

/// A C# tree-sitter node paired with the source it was parsed from.
///
/// Children are the node's named children; anonymous tokens (punctuation,
/// keywords) are only visible through [`SyntaxNode::signature_tokens`].
#[derive(Debug, Clone, Copy)]
pub struct CsNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> CsNode<'a> {
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    pub fn inner(&self) -> Node<'a> {
        self.node
    }

    /// Full source text covered by this node.
    pub fn text(&self) -> &'a str {
        self.source.get(self.node.byte_range()).unwrap_or("")
    }

    fn wrap(&self, node: Node<'a>) -> CsNode<'a> {
        CsNode::new(node, self.source)
    }

    fn field(&self, name: &str) -> Option<CsNode<'a>> {
        self.node.child_by_field_name(name).map(|n| self.wrap(n))
    }

    fn field_text(&self, name: &str) -> Option<&'a str> {
        self.field(name).map(|n| n.text())
    }

    fn named_children(&self) -> Vec<CsNode<'a>> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|n| self.wrap(n))
            .collect()
    }

    fn first_child_of_kind(&self, kind: &str) -> Option<CsNode<'a>> {
        self.named_children().into_iter().find(|c| c.node.kind() == kind)
    }

    /// Name of a `variable_declarator`.
    fn declarator_name(&self) -> Option<&'a str> {
        self.field_text("name").or_else(|| {
            self.first_child_of_kind(kinds::IDENTIFIER)
                .map(|n| n.text())
        })
    }

    /// Names of the declarators under a `variable_declaration`.
    fn declarator_names(&self) -> Vec<&'a str> {
        self.named_children()
            .into_iter()
            .filter(|c| c.node.kind() == kinds::VARIABLE_DECLARATOR)
            .filter_map(|c| c.declarator_name())
            .collect()
    }

    /// The `variable_declaration` carried by a field or event field.
    fn variable_declaration(&self) -> Option<CsNode<'a>> {
        match self.node.kind() {
            kinds::VARIABLE_DECLARATION => Some(*self),
            kinds::FIELD_DECLARATION | kinds::EVENT_FIELD_DECLARATION => {
                self.first_child_of_kind(kinds::VARIABLE_DECLARATION)
            }
            _ => None,
        }
    }

    fn parameter(&self) -> Parameter<'a> {
        Parameter {
            name: self.field_text("name").unwrap_or(""),
            type_text: self.field_text("type").unwrap_or(""),
        }
    }
}

impl<'a> SyntaxNode for CsNode<'a> {
    fn kind(&self) -> &str {
        self.node.kind()
    }

    fn children(&self) -> Vec<Self> {
        self.named_children()
    }

    fn span(&self) -> Span {
        let point = self.node.start_position();
        let start = self.node.start_byte();
        // tree-sitter columns are byte offsets; report characters instead.
        let column = start
            .checked_sub(point.column)
            .and_then(|line_start| self.source.get(line_start..start))
            .map(|prefix| prefix.chars().count())
            .unwrap_or(point.column);

        Span {
            line: point.row + 1,
            column: column + 1,
        }
    }

    fn name(&self) -> Option<&str> {
        match self.node.kind() {
            kinds::IDENTIFIER | kinds::PREDEFINED_TYPE => Some(self.text()),
            kinds::USING_DIRECTIVE => self.field_text("name").or_else(|| {
                self.named_children()
                    .into_iter()
                    .find(|c| kinds::NAME_KINDS.contains(&c.node.kind()))
                    .map(|c| c.text())
            }),
            kinds::VARIABLE_DECLARATOR => self.declarator_name(),
            _ => self.field_text("name"),
        }
    }

    fn type_text(&self) -> Option<&str> {
        match self.variable_declaration() {
            Some(decl) => decl.field_text("type"),
            None => self.field_text("type"),
        }
    }

    fn return_type_text(&self) -> Option<&str> {
        match self.node.kind() {
            kinds::METHOD_DECLARATION
            | kinds::LOCAL_FUNCTION_STATEMENT
            | kinds::DELEGATE_DECLARATION => self
                .field_text("returns")
                .or_else(|| self.field_text("type")),
            _ => None,
        }
    }

    fn parameters(&self) -> Vec<Parameter<'_>> {
        let list = match self.node.kind() {
            kinds::PARAMETER | kinds::PARAMETER_ARRAY => return vec![self.parameter()],
            _ => self.field("parameters"),
        };

        list.map(|list| {
            list.named_children()
                .into_iter()
                .filter(|c| matches!(c.node.kind(), kinds::PARAMETER | kinds::PARAMETER_ARRAY))
                .map(|c| c.parameter())
                .collect()
        })
        .unwrap_or_default()
    }

    fn declared_names(&self) -> Vec<&str> {
        self.variable_declaration()
            .map(|decl| decl.declarator_names())
            .unwrap_or_default()
    }

    fn modifiers(&self) -> Vec<&str> {
        self.named_children()
            .into_iter()
            .filter(|c| c.node.kind() == kinds::MODIFIER)
            .map(|c| c.text())
            .collect()
    }

    fn literal_value(&self) -> Option<&str> {
        let kind = self.node.kind();
        if !kinds::is_literal(kind) {
            return None;
        }

        let text = self.text();
        let value = match kind {
            kinds::STRING_LITERAL | kinds::VERBATIM_STRING_LITERAL => {
                unquote(text.trim_start_matches('@'), '"', false)
            }
            kinds::RAW_STRING_LITERAL => unquote(text.trim_start_matches('$'), '"', true),
            kinds::CHARACTER_LITERAL => unquote(text, '\'', false),
            _ => text,
        };
        Some(value)
    }

    fn member_count(&self) -> usize {
        self.field("body")
            .map(|body| {
                body.named_children()
                    .iter()
                    .filter(|c| c.node.kind() != kinds::COMMENT)
                    .count()
            })
            .unwrap_or(0)
    }

    fn accessor_count(&self) -> usize {
        self.field("accessors")
            .map(|list| {
                list.named_children()
                    .iter()
                    .filter(|c| c.node.kind() == kinds::ACCESSOR_DECLARATION)
                    .count()
            })
            .unwrap_or(0)
    }

    fn signature_tokens(&self) -> Vec<Token<'_>> {
        let mut tokens = Vec::new();
        let mut cursor = self.node.walk();
        if !cursor.goto_first_child() {
            return tokens;
        }

        loop {
            let child = cursor.node();
            let is_body = cursor.field_name() == Some("body")
                || matches!(child.kind(), kinds::BLOCK | kinds::ARROW_EXPRESSION_CLAUSE)
                || (!child.is_named() && child.kind() == ";");
            if !is_body {
                push_leaf_tokens(child, self.source, &mut tokens);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }

        tokens
    }
}

/// Strip the delimiter from each end. Raw strings open with three or more
/// quotes and close with the same count; every other literal uses one.
fn unquote(text: &str, quote: char, raw: bool) -> &str {
    let width = if raw {
        text.chars().take_while(|&c| c == quote).count().max(1)
    } else {
        1
    };
    let delimiter = quote.to_string().repeat(width);

    text.strip_prefix(delimiter.as_str())
        .and_then(|inner| inner.strip_suffix(delimiter.as_str()))
        .unwrap_or(text)
}

fn push_leaf_tokens<'a>(node: Node<'a>, source: &'a str, out: &mut Vec<Token<'a>>) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if node.kind() == kinds::COMMENT {
            continue;
        }
        if node.child_count() == 0 || kinds::is_atomic(node.kind()) {
            let text = source.get(node.byte_range()).unwrap_or("");
            if !text.is_empty() {
                out.push(Token {
                    kind: node.kind(),
                    text,
                });
            }
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
}
