//! One-line rendering of a declaration with its body removed.

use crate::tree::{kinds, SyntaxNode, Token};

const NO_SPACE_BEFORE: &[&str] = &[",", ")", "]", ";", ".", "?", "*", ">"];
const NO_SPACE_AFTER: &[&str] = &["(", "[", ".", "<"];

/// Render a declaration's signature followed by `;`.
///
/// Tokens are joined with single spaces except around punctuation, so the
/// same declaration always renders to the same text regardless of the
/// original layout.
pub fn render_signature<N: SyntaxNode>(node: &N) -> String {
    let mut rendered = join_tokens(&node.signature_tokens());
    rendered.push(';');
    rendered
}

pub fn join_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token<'_>> = None;

    for token in tokens {
        if let Some(prev) = prev {
            if needs_space(prev, token) {
                out.push(' ');
            }
        }
        out.push_str(token.text);
        prev = Some(token);
    }

    out
}

fn needs_space(prev: &Token<'_>, next: &Token<'_>) -> bool {
    if NO_SPACE_BEFORE.contains(&next.text) || NO_SPACE_AFTER.contains(&prev.text) {
        return false;
    }

    match next.text {
        // Call-like: method name, generic parameter list, or `new()` /
        // `this(..)` / `base(..)`.
        "(" => {
            !(prev.kind == kinds::IDENTIFIER
                || matches!(prev.text, ">" | "new" | "this" | "base"))
        }
        // Array rank after a type.
        "[" => !(ends_with_word(prev.text) || matches!(prev.text, ">" | "]" | "?")),
        "<" => prev.kind != kinds::IDENTIFIER,
        _ => true,
    }
}

fn ends_with_word(text: &str) -> bool {
    text.chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok<'a>(kind: &'a str, text: &'a str) -> Token<'a> {
        Token { kind, text }
    }

    #[test]
    fn joins_method_header() {
        let tokens = [
            tok("public", "public"),
            tok("predefined_type", "int"),
            tok("identifier", "Run1"),
            tok("(", "("),
            tok("predefined_type", "string"),
            tok("[", "["),
            tok("]", "]"),
            tok("identifier", "args"),
            tok(",", ","),
            tok("predefined_type", "int"),
            tok("identifier", "i"),
            tok(")", ")"),
        ];
        assert_eq!(join_tokens(&tokens), "public int Run1(string[] args, int i)");
    }

    #[test]
    fn tuple_return_keeps_space_after_modifier() {
        let tokens = [
            tok("static", "static"),
            tok("(", "("),
            tok("predefined_type", "int"),
            tok(",", ","),
            tok("predefined_type", "string"),
            tok(")", ")"),
            tok("identifier", "Pair"),
            tok("(", "("),
            tok(")", ")"),
        ];
        assert_eq!(join_tokens(&tokens), "static (int, string) Pair()");
    }

    #[test]
    fn generics_close_up() {
        let tokens = [
            tok("identifier", "Task"),
            tok("<", "<"),
            tok("identifier", "List"),
            tok("<", "<"),
            tok("predefined_type", "int"),
            tok(">", ">"),
            tok(">", ">"),
            tok("identifier", "Load"),
            tok("<", "<"),
            tok("identifier", "T"),
            tok(">", ">"),
            tok("(", "("),
            tok(")", ")"),
        ];
        assert_eq!(join_tokens(&tokens), "Task<List<int>> Load<T>()");
    }

    #[test]
    fn new_constraint_is_call_like() {
        let tokens = [
            tok("identifier", "T"),
            tok("identifier", "Make"),
            tok("<", "<"),
            tok("identifier", "T"),
            tok(">", ">"),
            tok("(", "("),
            tok(")", ")"),
            tok("where", "where"),
            tok("identifier", "T"),
            tok(":", ":"),
            tok("new", "new"),
            tok("(", "("),
            tok(")", ")"),
        ];
        assert_eq!(join_tokens(&tokens), "T Make<T>() where T : new()");
    }

    #[test]
    fn literal_tokens_are_kept_whole() {
        let tokens = [
            tok("[", "["),
            tok("identifier", "Route"),
            tok("(", "("),
            tok("string_literal", "\"api/items\""),
            tok(")", ")"),
            tok("]", "]"),
            tok("void", "void"),
        ];
        assert_eq!(join_tokens(&tokens), "[Route(\"api/items\")] void");
    }

    #[test]
    fn empty_token_list_renders_empty() {
        assert_eq!(join_tokens(&[]), "");
    }
}
