use crate::query::Query;
use crate::tree::{Parameter, SyntaxNode};

/// The parts of a declaration a query is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationView<'a> {
    pub parameters: Vec<Parameter<'a>>,
    /// Empty for declarations without a return type (constructors).
    pub return_type_text: &'a str,
}

impl<'a> DeclarationView<'a> {
    pub fn from_node<N: SyntaxNode>(node: &'a N) -> Self {
        Self {
            parameters: node.parameters(),
            return_type_text: node.return_type_text().unwrap_or(""),
        }
    }
}

/// Test a declaration against a query.
///
/// Parameter types must match position by position, exactly and with case,
/// ignoring only leading and trailing whitespace. The return type, when the
/// query has one, is compared with all whitespace removed and without case.
pub fn matches(decl: &DeclarationView<'_>, query: &Query) -> bool {
    if decl.parameters.len() != query.arity() {
        return false;
    }

    let inputs_match = decl
        .parameters
        .iter()
        .zip(query.parameter_types())
        .all(|(param, expected)| param.type_text.trim() == expected.trim());
    if !inputs_match {
        return false;
    }

    match query.return_type() {
        Some(expected) if !expected.trim().is_empty() => {
            squash(decl.return_type_text) == squash(expected)
        }
        _ => true,
    }
}

/// Strip all whitespace and fold case.
fn squash(ty: &str) -> String {
    ty.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn view<'a>(types: &[&'a str], ret: &'a str) -> DeclarationView<'a> {
        DeclarationView {
            parameters: types
                .iter()
                .map(|&ty| Parameter {
                    name: "p",
                    type_text: ty,
                })
                .collect(),
            return_type_text: ret,
        }
    }

    #[test]
    fn matches_inputs_and_output() {
        let query = Query::parse("string[],int -> (int,string)");
        assert!(matches(&view(&["string[]", "int"], "(int,string)"), &query));
        assert!(matches(&view(&["string[]", "int"], "(Int,String)"), &query));
        assert!(matches(&view(&["string[]", "int"], "( int , string )"), &query));
        assert!(!matches(&view(&["string[]", "int"], "(string,int)"), &query));
    }

    #[test]
    fn inputs_only_ignores_return_type() {
        let query = Query::parse("string[],int");
        assert!(matches(&view(&["string[]", "int"], "void"), &query));
        assert!(matches(&view(&["string[]", "int"], ""), &query));
        assert!(!matches(&view(&["int", "string[]"], "void"), &query));
    }

    #[test]
    fn parameter_types_are_case_sensitive() {
        let query = Query::parse("String");
        assert!(!matches(&view(&["string"], "void"), &query));
        assert!(matches(&view(&[" String "], "void"), &query));
    }

    #[test]
    fn parameter_types_keep_interior_whitespace() {
        let query = Query::parse("Dictionary<string,int>");
        assert!(!matches(&view(&["Dictionary<string, int>"], "void"), &query));
    }

    #[test]
    fn missing_return_type_does_not_match_constrained_query() {
        let query = Query::parse("int -> void");
        assert!(!matches(&view(&["int"], ""), &query));
    }

    #[test]
    fn empty_query_matches_only_one_untyped_parameter() {
        let query = Query::parse("");
        assert!(!matches(&view(&[], "void"), &query));
        assert!(matches(&view(&[""], "void"), &query));
    }

    proptest! {
        #[test]
        fn arity_is_strict(n in 0usize..6, m in 0usize..6) {
            prop_assume!(n != m);
            let decl_types = vec!["int"; n];
            let raw = vec!["int"; m].join(",");
            let query = Query::parse(&raw);
            prop_assume!(query.arity() == m.max(1));
            prop_assume!(query.arity() != n);
            prop_assert!(!matches(&view(&decl_types, "void"), &query));
        }

        #[test]
        fn return_type_ignores_whitespace_and_case(
            ret in "[a-zA-Z(),]{1,12}",
            pad in "[ \t]{0,3}",
        ) {
            let spaced: String = ret
                .chars()
                .flat_map(|c| [c].into_iter().chain(pad.chars()))
                .collect();
            let query = Query::parse(&format!("int -> {}", ret.to_uppercase()));
            prop_assert!(matches(&view(&["int"], &spaced), &query));
        }
    }
}
