//! Thread-local parser pooling.
//!
//! Searching a folder parses every file in it; keeping one parser per thread
//! avoids reloading the grammar for each file.

use crate::ts::{CSharpParser, TreeSitterError};
use std::cell::RefCell;

thread_local! {
    static CSHARP_PARSER: RefCell<Option<CSharpParser>> = const { RefCell::new(None) };
}

/// Execute function with pooled parser instance.
///
/// On first call per thread, creates new parser. Subsequent calls reuse
/// the same parser instance.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use cs_finder::pool::with_parser;
///
/// let tree = with_parser(|parser| parser.parse("class A { }"))??;
/// assert_eq!(tree.root_node().kind(), "compilation_unit");
/// # Ok(())
/// # }
/// ```
pub fn with_parser<F, R>(f: F) -> Result<R, TreeSitterError>
where
    F: FnOnce(&mut CSharpParser) -> R,
{
    CSHARP_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(CSharpParser::new()?);
        }
        match slot.as_mut() {
            Some(parser) => Ok(f(parser)),
            None => Err(TreeSitterError::LanguageSet),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pooled_parser_is_reused() {
        let first = with_parser(|p| p.parse("class A { }").map(|t| t.root_node().kind()))
            .unwrap()
            .unwrap();
        let second = with_parser(|p| p.parse("class B { }").map(|t| t.root_node().kind()))
            .unwrap()
            .unwrap();

        assert_eq!(first, "compilation_unit");
        assert_eq!(second, "compilation_unit");
    }
}
