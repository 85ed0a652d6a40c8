//! Node kind tags of the C# grammar and the dispatch tables keyed on them.
//!
//! Every table is a total function of the kind name: kinds the table doesn't
//! know fall through to an explicit default.

use serde::Serialize;

pub const COMPILATION_UNIT: &str = "compilation_unit";

pub const CLASS_DECLARATION: &str = "class_declaration";
pub const INTERFACE_DECLARATION: &str = "interface_declaration";
pub const STRUCT_DECLARATION: &str = "struct_declaration";
pub const ENUM_DECLARATION: &str = "enum_declaration";
pub const RECORD_DECLARATION: &str = "record_declaration";
pub const NAMESPACE_DECLARATION: &str = "namespace_declaration";
pub const FILE_SCOPED_NAMESPACE_DECLARATION: &str = "file_scoped_namespace_declaration";

pub const METHOD_DECLARATION: &str = "method_declaration";
pub const CONSTRUCTOR_DECLARATION: &str = "constructor_declaration";
pub const PROPERTY_DECLARATION: &str = "property_declaration";
pub const ACCESSOR_DECLARATION: &str = "accessor_declaration";
pub const EVENT_DECLARATION: &str = "event_declaration";
pub const EVENT_FIELD_DECLARATION: &str = "event_field_declaration";
pub const LOCAL_FUNCTION_STATEMENT: &str = "local_function_statement";
pub const DELEGATE_DECLARATION: &str = "delegate_declaration";

pub const FIELD_DECLARATION: &str = "field_declaration";
pub const VARIABLE_DECLARATION: &str = "variable_declaration";
pub const VARIABLE_DECLARATOR: &str = "variable_declarator";
pub const PARAMETER: &str = "parameter";
pub const PARAMETER_ARRAY: &str = "parameter_array";

pub const IDENTIFIER: &str = "identifier";
pub const PREDEFINED_TYPE: &str = "predefined_type";
pub const QUALIFIED_NAME: &str = "qualified_name";
pub const ALIAS_QUALIFIED_NAME: &str = "alias_qualified_name";
pub const GENERIC_NAME: &str = "generic_name";

pub const USING_DIRECTIVE: &str = "using_directive";
pub const MODIFIER: &str = "modifier";
pub const COMMENT: &str = "comment";

pub const RETURN_STATEMENT: &str = "return_statement";
pub const EXPRESSION_STATEMENT: &str = "expression_statement";
pub const BLOCK: &str = "block";
pub const ARROW_EXPRESSION_CLAUSE: &str = "arrow_expression_clause";

pub const INTEGER_LITERAL: &str = "integer_literal";
pub const REAL_LITERAL: &str = "real_literal";
pub const BOOLEAN_LITERAL: &str = "boolean_literal";
pub const NULL_LITERAL: &str = "null_literal";
pub const CHARACTER_LITERAL: &str = "character_literal";
pub const STRING_LITERAL: &str = "string_literal";
pub const VERBATIM_STRING_LITERAL: &str = "verbatim_string_literal";
pub const RAW_STRING_LITERAL: &str = "raw_string_literal";
pub const INTERPOLATED_STRING_EXPRESSION: &str = "interpolated_string_expression";

pub const LITERAL_KINDS: &[&str] = &[
    INTEGER_LITERAL,
    REAL_LITERAL,
    BOOLEAN_LITERAL,
    NULL_LITERAL,
    CHARACTER_LITERAL,
    STRING_LITERAL,
    VERBATIM_STRING_LITERAL,
    RAW_STRING_LITERAL,
];

/// Kinds that name something a `using` directive can refer to.
pub const NAME_KINDS: &[&str] = &[IDENTIFIER, QUALIFIED_NAME, ALIAS_QUALIFIED_NAME, GENERIC_NAME];

pub fn is_literal(kind: &str) -> bool {
    LITERAL_KINDS.contains(&kind)
}

/// Kinds rendered as a single token: their inner tokens are text, not syntax.
pub fn is_atomic(kind: &str) -> bool {
    is_literal(kind) || kind == INTERPOLATED_STRING_EXPRESSION
}

/// Coarse grouping of node kinds, used to pick an outline color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Declaration,
    Member,
    Variable,
    TypeReference,
    Statement,
    Expression,
    Structural,
    Directive,
    Other,
}

impl Category {
    pub fn of(kind: &str) -> Category {
        match kind {
            CLASS_DECLARATION
            | INTERFACE_DECLARATION
            | STRUCT_DECLARATION
            | ENUM_DECLARATION
            | RECORD_DECLARATION
            | NAMESPACE_DECLARATION
            | FILE_SCOPED_NAMESPACE_DECLARATION => Category::Declaration,

            METHOD_DECLARATION
            | PROPERTY_DECLARATION
            | CONSTRUCTOR_DECLARATION
            | ACCESSOR_DECLARATION => Category::Member,

            FIELD_DECLARATION | VARIABLE_DECLARATION | PARAMETER => Category::Variable,

            PREDEFINED_TYPE | IDENTIFIER | QUALIFIED_NAME => Category::TypeReference,

            RETURN_STATEMENT
            | EXPRESSION_STATEMENT
            | "if_statement"
            | "for_statement"
            | "while_statement" => Category::Statement,

            "invocation_expression" | "member_access_expression" | "assignment_expression" => {
                Category::Expression
            }
            kind if is_literal(kind) => Category::Expression,

            BLOCK | "parameter_list" | "argument_list" | "base_list" => Category::Structural,

            USING_DIRECTIVE | MODIFIER => Category::Directive,

            _ => Category::Other,
        }
    }
}

/// Declaration kinds counted by the statistics pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedKind {
    Class,
    Interface,
    Method,
    Property,
    Field,
    Constructor,
    /// Both `event` declarations with accessors and event fields.
    Event,
}

impl TrackedKind {
    pub fn of(kind: &str) -> Option<TrackedKind> {
        match kind {
            CLASS_DECLARATION => Some(TrackedKind::Class),
            INTERFACE_DECLARATION => Some(TrackedKind::Interface),
            METHOD_DECLARATION => Some(TrackedKind::Method),
            PROPERTY_DECLARATION => Some(TrackedKind::Property),
            FIELD_DECLARATION => Some(TrackedKind::Field),
            CONSTRUCTOR_DECLARATION => Some(TrackedKind::Constructor),
            EVENT_DECLARATION | EVENT_FIELD_DECLARATION => Some(TrackedKind::Event),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_is_total() {
        assert_eq!(Category::of(CLASS_DECLARATION), Category::Declaration);
        assert_eq!(Category::of(RECORD_DECLARATION), Category::Declaration);
        assert_eq!(Category::of(METHOD_DECLARATION), Category::Member);
        assert_eq!(Category::of(PARAMETER), Category::Variable);
        assert_eq!(Category::of(PREDEFINED_TYPE), Category::TypeReference);
        assert_eq!(Category::of("while_statement"), Category::Statement);
        assert_eq!(Category::of(STRING_LITERAL), Category::Expression);
        assert_eq!(Category::of("argument_list"), Category::Structural);
        assert_eq!(Category::of(USING_DIRECTIVE), Category::Directive);
        assert_eq!(Category::of("no_such_kind"), Category::Other);
        assert_eq!(Category::of(""), Category::Other);
    }

    #[test]
    fn events_share_one_tracked_kind() {
        assert_eq!(TrackedKind::of(EVENT_DECLARATION), Some(TrackedKind::Event));
        assert_eq!(TrackedKind::of(EVENT_FIELD_DECLARATION), Some(TrackedKind::Event));
        assert_eq!(TrackedKind::of(BLOCK), None);
    }

    #[test]
    fn strings_and_interpolations_are_atomic() {
        assert!(is_atomic(STRING_LITERAL));
        assert!(is_atomic(CHARACTER_LITERAL));
        assert!(is_atomic(INTERPOLATED_STRING_EXPRESSION));
        assert!(!is_atomic(IDENTIFIER));
    }
}
