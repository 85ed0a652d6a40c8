use crate::ts::errors::TreeSitterError;
use crate::ts::parser::ParsedSource;

/// Validate that a parsed C# tree has no syntax errors.
///
/// Returns Ok(()) if the tree contains no ERROR or MISSING nodes. Positions
/// in the error are 1-based.
pub fn validate_syntax(parsed: &ParsedSource<'_>) -> Result<(), TreeSitterError> {
    let errors = parsed.error_spans();
    match errors.as_slice() {
        [] => Ok(()),
        [only] => Err(TreeSitterError::SyntaxError {
            line: only.line,
            column: only.column,
        }),
        [first, ..] => Err(TreeSitterError::MultipleSyntaxErrors {
            count: errors.len(),
            line: first.line,
        }),
    }
}
