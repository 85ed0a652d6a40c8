use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeSitterError {
    #[error("failed to set C# language for parser")]
    LanguageSet,

    #[error("failed to parse source code")]
    ParseFailed,

    #[error("syntax error at line {line}, column {column}")]
    SyntaxError { line: usize, column: usize },

    #[error("multiple syntax errors detected: {count} ERROR nodes, first at line {line}")]
    MultipleSyntaxErrors { count: usize, line: usize },
}
