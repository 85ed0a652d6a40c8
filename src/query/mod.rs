//! Signature query DSL.
//!
//! A query describes a method signature as a comma-separated list of
//! parameter types, optionally followed by `->` and a return type:
//!
//! ```text
//! string[],int
//! string[],int -> (int,string)
//! ```
//!
//! Parsing never fails; whether the query is usable is a separate check
//! ([`Query::is_valid`]).

pub mod matcher;

pub use matcher::{matches, DeclarationView};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between the parameter list and the return type.
pub const ARROW: &str = "->";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query is invalid: '{raw}' has '->' but no return type")]
    MissingReturnType { raw: String },
}

/// A parsed signature query. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    parameter_types: Vec<String>,
    return_type: Option<String>,
    has_arrow: bool,
}

impl Query {
    /// Parse a query string.
    ///
    /// Only the first `->` separates inputs from output; the return type is
    /// kept as written and trimmed only when compared. An empty input yields
    /// one empty parameter type, the same as splitting `""` on `,`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(ARROW) {
            Some((inputs, output)) => Query {
                raw: raw.to_string(),
                parameter_types: split_types(inputs),
                return_type: Some(output.to_string()),
                has_arrow: true,
            },
            None => Query {
                raw: raw.to_string(),
                parameter_types: split_types(raw),
                return_type: None,
                has_arrow: false,
            },
        }
    }

    /// A query is invalid only when it has `->` with nothing after it.
    pub fn is_valid(&self) -> bool {
        !self.has_arrow || self.return_type.as_deref().is_some_and(|r| !r.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(QueryError::MissingReturnType {
                raw: self.raw.clone(),
            })
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    /// Return type as written after `->`, untrimmed.
    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn has_arrow(&self) -> bool {
        self.has_arrow
    }
}

fn split_types(inputs: &str) -> Vec<String> {
    inputs
        .trim()
        .split(',')
        .map(|ty| ty.trim().to_string())
        .collect()
}

impl FromStr for Query {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Query::parse(s))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parameter_types.join(", "))?;
        if let Some(ret) = &self.return_type {
            write!(f, " {ARROW} {}", ret.trim())?;
        }
        Ok(())
    }
}
