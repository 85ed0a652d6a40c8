//! cs-finder: structural search over C# sources
//!
//! Finds method declarations by signature shape rather than by text, and
//! prints syntax-tree outlines and statistics for single files.
//!
//! # Architecture
//!
//! Sources are parsed with tree-sitter ([`ts`]) and read through the
//! [`tree::SyntaxNode`] trait, so matching, outlining and counting never
//! touch the parser's types directly. A [`query::Query`] is plain data
//! parsed from `T1, T2 -> R`; [`search::SourceSet`] parses a folder once and
//! answers any number of queries against it.
//!
//! # Example
//!
//! ```no_run
//! use cs_finder::{Query, SearchConfig, SourceSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let set = SourceSet::load("src", &SearchConfig::default())?;
//! for hit in set.search(&Query::parse("string[], int -> void"))? {
//!     println!("{} {} {}", hit.path.display(), hit.span, hit.signature);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod pool;
pub mod query;
pub mod search;
pub mod stats;
pub mod tree;
pub mod ts;
pub mod visualize;

// Re-exports
pub use config::{discover, load_from_path, load_from_str, ConfigError, FinderConfig, SearchConfig};
pub use query::{matches, DeclarationView, Query, QueryError};
pub use search::{FileError, FileFailure, LoadedFile, MatchResult, SearchError, SourceSet};
pub use stats::{aggregate, Stats};
pub use tree::{CsNode, Span, SyntaxNode};
pub use ts::{CSharpParser, TreeSitterError};
pub use visualize::{outline, render_detailed, render_tree, Mode, OutlineLine, OutlineRenderer};
