//! Per-kind annotation rules.
//!
//! Each table maps a kind tag to a rule rendering the bracketed summary for
//! nodes of that kind. Kinds missing from a table get no annotation.

use crate::tree::{kinds, SyntaxNode};

/// Renders the annotation for one node.
pub type Rule<N> = fn(&N) -> String;

fn name<N: SyntaxNode>(node: &N) -> &str {
    node.name().unwrap_or("")
}

fn type_of<N: SyntaxNode>(node: &N) -> &str {
    node.type_text().unwrap_or("")
}

/// Rules used by the basic outline.
pub fn summary_rule<N: SyntaxNode>(kind: &str) -> Option<Rule<N>> {
    let rule: Rule<N> = match kind {
        kinds::CLASS_DECLARATION => |n| format!("Class: {}", name(n)),
        kinds::INTERFACE_DECLARATION => |n| format!("Interface: {}", name(n)),
        kinds::STRUCT_DECLARATION => |n| format!("Struct: {}", name(n)),
        kinds::ENUM_DECLARATION => |n| format!("Enum: {}", name(n)),
        kinds::RECORD_DECLARATION => |n| format!("Record: {}", name(n)),
        kinds::NAMESPACE_DECLARATION | kinds::FILE_SCOPED_NAMESPACE_DECLARATION => {
            |n| format!("Namespace: {}", name(n))
        }
        kinds::METHOD_DECLARATION => |n| format!("Method: {}", name(n)),
        kinds::PROPERTY_DECLARATION => |n| format!("Property: {}", name(n)),
        kinds::CONSTRUCTOR_DECLARATION => |n| format!("Constructor: {}", name(n)),
        kinds::ACCESSOR_DECLARATION => |n| format!("Accessor: {}", name(n)),
        kinds::EVENT_DECLARATION => |n| format!("Event: {}", name(n)),
        kinds::FIELD_DECLARATION => |n| format!("Field: {}", n.declared_names().join(", ")),
        kinds::EVENT_FIELD_DECLARATION => {
            |n| format!("Event Field: {}", n.declared_names().join(", "))
        }
        kinds::VARIABLE_DECLARATION => {
            |n| format!("Variables: {}", n.declared_names().join(", "))
        }
        kinds::USING_DIRECTIVE => |n| format!("Using: {}", name(n)),
        kinds::PARAMETER => |n| format!("Parameter: {}", name(n)),
        kinds::IDENTIFIER => |n| format!("Identifier: {}", name(n)),
        kinds::PREDEFINED_TYPE => |n| format!("Type: {}", name(n)),
        kinds::RETURN_STATEMENT => |_| "Return Statement".to_string(),
        kinds::EXPRESSION_STATEMENT => |_| "Expression Statement".to_string(),
        kinds::BLOCK => |_| "Code Block".to_string(),
        kind if kinds::is_literal(kind) => {
            |n| format!("Literal: {}", n.literal_value().unwrap_or(""))
        }
        _ => return None,
    };
    Some(rule)
}

/// Rules used by the detailed outline, for the kinds that carry more than
/// a name.
pub fn detail_rule<N: SyntaxNode>(kind: &str) -> Option<Rule<N>> {
    let rule: Rule<N> = match kind {
        kinds::CLASS_DECLARATION => |n| {
            format!(
                "'{}' [Modifiers: {}] [Members: {}]",
                name(n),
                n.modifiers().join(" "),
                n.member_count()
            )
        },
        kinds::METHOD_DECLARATION => |n| {
            format!(
                "'{}' [Return: {}] [Params: {}] [Modifiers: {}]",
                name(n),
                n.return_type_text().unwrap_or(""),
                n.parameters().len(),
                n.modifiers().join(" ")
            )
        },
        kinds::PROPERTY_DECLARATION => |n| {
            format!(
                "'{}' [Type: {}] [Accessors: {}]",
                name(n),
                type_of(n),
                n.accessor_count()
            )
        },
        kinds::FIELD_DECLARATION => |n| {
            format!(
                "[{}] [Type: {}] [Modifiers: {}]",
                n.declared_names().join(", "),
                type_of(n),
                n.modifiers().join(" ")
            )
        },
        kinds::IDENTIFIER => |n| format!("Name: '{}'", name(n)),
        kinds::PARAMETER => |n| format!("'{}' : {}", name(n), type_of(n)),
        kind if kinds::is_literal(kind) => {
            |n| format!("Value: '{}'", n.literal_value().unwrap_or(""))
        }
        _ => return None,
    };
    Some(rule)
}

pub fn summarize<N: SyntaxNode>(node: &N) -> Option<String> {
    summary_rule::<N>(node.kind()).map(|rule| rule(node))
}

/// Detailed annotation, falling back to the basic summary.
pub fn detail<N: SyntaxNode>(node: &N) -> Option<String> {
    let kind = node.kind();
    detail_rule::<N>(kind)
        .or_else(|| summary_rule::<N>(kind))
        .map(|rule| rule(node))
}
