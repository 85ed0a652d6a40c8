//! Tree-sitter integration for C# sources.
//!
//! This module owns the parser collaborator: it turns raw C# text into a
//! tree-sitter CST and decides whether that tree is usable (no ERROR or
//! MISSING nodes) before anything downstream walks it.

pub mod errors;
pub mod parser;
pub mod validator;

pub use errors::TreeSitterError;
pub use parser::{CSharpParser, ParsedSource};
pub use validator::validate_syntax;
