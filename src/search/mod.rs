//! Signature search over a folder of C# sources.
//!
//! [`SourceSet`] walks a folder once, parses every source file and keeps the
//! trees, so the same set can answer many queries. Files that cannot be read
//! or parsed are recorded as [`FileFailure`]s and left out; they never stop
//! the rest of the folder from being searched.

pub mod signature;

pub use signature::render_signature;

use crate::config::SearchConfig;
use crate::pool::with_parser;
use crate::query::{matches, DeclarationView, Query, QueryError};
use crate::tree::{kinds, walk_preorder, CsNode, Span, SyntaxNode};
use crate::ts::{validate_syntax, ParsedSource, TreeSitterError};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("folder does not exist: {}", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("not a folder: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
}

/// Why a single file was left out of the search.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Parse(#[from] TreeSitterError),
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: FileError,
}

/// One declaration that matched a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub path: PathBuf,
    pub span: Span,
    /// Declaration with its body replaced by `;`, on one line.
    pub signature: String,
}

/// A source file together with its parse tree.
pub struct LoadedFile {
    path: PathBuf,
    source: String,
    tree: tree_sitter::Tree,
}

impl LoadedFile {
    /// Parse `source` as the contents of `path`.
    ///
    /// With `reject_syntax_errors`, a tree containing ERROR or MISSING nodes
    /// is an error rather than a partial result.
    pub fn from_source(
        path: impl Into<PathBuf>,
        source: String,
        reject_syntax_errors: bool,
    ) -> Result<Self, TreeSitterError> {
        let tree = with_parser(|parser| parser.parse(&source))??;
        if reject_syntax_errors {
            validate_syntax(&ParsedSource {
                source: &source,
                tree: tree.clone(),
            })?;
        }

        Ok(Self {
            path: path.into(),
            source,
            tree,
        })
    }

    pub fn read(path: &Path, reject_syntax_errors: bool) -> Result<Self, FileError> {
        let source = fs::read_to_string(path)?;
        Ok(Self::from_source(path, source, reject_syntax_errors)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> CsNode<'_> {
        CsNode::new(self.tree.root_node(), &self.source)
    }

    /// All method declarations in this file that match `query`, in source
    /// order. The query is assumed to be valid.
    pub fn find_matches(&self, query: &Query) -> Vec<MatchResult> {
        let mut hits = Vec::new();
        walk_preorder(self.root(), |node, _| {
            if node.kind() != kinds::METHOD_DECLARATION {
                return;
            }
            if matches(&DeclarationView::from_node(node), query) {
                hits.push(MatchResult {
                    path: self.path.clone(),
                    span: node.span(),
                    signature: render_signature(node),
                });
            }
        });
        hits
    }
}

/// Every source file under a folder, parsed once.
pub struct SourceSet {
    root: PathBuf,
    config: SearchConfig,
    files: Vec<LoadedFile>,
    failures: Vec<FileFailure>,
}

impl SourceSet {
    pub fn load(root: impl AsRef<Path>, config: &SearchConfig) -> Result<Self, SearchError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(SearchError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(SearchError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut set = Self {
            root: root.to_path_buf(),
            config: config.clone(),
            files: Vec::new(),
            failures: Vec::new(),
        };
        set.reload();
        Ok(set)
    }

    /// Walk the folder again and re-parse every file.
    pub fn reload(&mut self) {
        self.files.clear();
        self.failures.clear();

        let config = &self.config;
        let walker = WalkDir::new(&self.root)
            .follow_links(config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !config.is_excluded_dir(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    let path = error
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    warn!(path = %path.display(), %error, "skipping unreadable entry");
                    self.failures.push(FileFailure {
                        path,
                        error: error.into(),
                    });
                    continue;
                }
            };

            let is_source = entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| config.accepts_extension(ext));
            if !is_source {
                continue;
            }

            match LoadedFile::read(entry.path(), config.skip_files_with_errors) {
                Ok(file) => {
                    debug!(path = %entry.path().display(), "parsed");
                    self.files.push(file);
                }
                Err(error) => {
                    warn!(path = %entry.path().display(), %error, "skipping file");
                    self.failures.push(FileFailure {
                        path: entry.into_path(),
                        error,
                    });
                }
            }
        }

        info!(
            root = %self.root.display(),
            files = self.files.len(),
            failures = self.failures.len(),
            "source set loaded"
        );
    }

    /// Search every loaded file. Invalid queries are rejected up front.
    pub fn search(&self, query: &Query) -> Result<Vec<MatchResult>, SearchError> {
        query.validate()?;

        let hits: Vec<MatchResult> = self
            .files
            .iter()
            .flat_map(|file| file.find_matches(query))
            .collect();
        debug!(query = %query, hits = hits.len(), "search finished");
        Ok(hits)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[LoadedFile] {
        &self.files
    }

    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PROGRAM: &str = r#"namespace Demo
{
    public class Test
    {
        public int Run1(string[] args , int i)
        {
            return i;
        }

        public (int, string) Run2(string[] args, int i) => (i, "x");

        public void Run3(string[] args) { }
    }
}
"#;

    fn hits(source: &str, query: &str) -> Vec<MatchResult> {
        let file = LoadedFile::from_source("Test.cs", source.to_string(), true).unwrap();
        file.find_matches(&Query::parse(query))
    }

    #[test]
    fn finds_by_inputs_only() {
        let found = hits(PROGRAM, "string[],int");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].span, Span { line: 5, column: 9 });
        assert_eq!(found[0].signature, "public int Run1(string[] args, int i);");
        assert_eq!(
            found[1].signature,
            "public (int, string) Run2(string[] args, int i);"
        );
    }

    #[test]
    fn finds_by_return_type() {
        let found = hits(PROGRAM, "string[],int -> (INT,string)");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span.line, 10);

        assert!(hits(PROGRAM, "string[],int -> (string,int)").is_empty());
        assert_eq!(hits(PROGRAM, "string[] -> void").len(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        let first = hits(PROGRAM, "string[],int");
        let again = hits(PROGRAM, "string[],int");
        assert_eq!(first, again);

        // Rendered signatures parse back to themselves.
        for hit in &first {
            let wrapped = format!("class C {{ {} }}", hit.signature);
            let reparsed = hits(&wrapped, "string[],int");
            assert_eq!(reparsed.len(), 1);
            assert_eq!(reparsed[0].signature, hit.signature);
        }
    }

    #[test]
    fn literals_render_verbatim_and_reparse() {
        let source = r#"class Api
{
    [Route("api/items")] public void Get(string s = "a b", char c = 'x') { }
    public T Make<T>() where T : new() => new T();
}
"#;
        let found = hits(source, "string, char");
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].signature,
            r#"[Route("api/items")] public void Get(string s = "a b", char c = 'x');"#
        );

        let file = LoadedFile::from_source("Api.cs", source.to_string(), true).unwrap();
        let mut all = Vec::new();
        walk_preorder(file.root(), |node, _| {
            if node.kind() == kinds::METHOD_DECLARATION {
                all.push(render_signature(node));
            }
        });
        assert_eq!(all[1], "public T Make<T>() where T : new();");

        for signature in &all {
            let wrapped = format!("class C {{ {signature} }}");
            let reparsed = LoadedFile::from_source("C.cs", wrapped, true).unwrap();
            let mut again = Vec::new();
            walk_preorder(reparsed.root(), |node, _| {
                if node.kind() == kinds::METHOD_DECLARATION {
                    again.push(render_signature(node));
                }
            });
            assert_eq!(again, vec![signature.clone()]);
        }
    }

    #[test]
    fn syntax_errors_are_rejected_when_asked() {
        let broken = "class C { void M( { }";
        assert!(LoadedFile::from_source("C.cs", broken.to_string(), true).is_err());
        assert!(LoadedFile::from_source("C.cs", broken.to_string(), false).is_ok());
    }

    #[test]
    fn source_set_skips_bad_files_and_excluded_dirs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Good.cs"), PROGRAM).unwrap();
        fs::write(dir.path().join("Broken.cs"), "class C { void M( { }").unwrap();
        fs::write(dir.path().join("notes.txt"), "not code").unwrap();
        fs::create_dir(dir.path().join("obj")).unwrap();
        fs::write(dir.path().join("obj").join("Gen.cs"), PROGRAM).unwrap();

        let set = SourceSet::load(dir.path(), &SearchConfig::default()).unwrap();
        assert_eq!(set.files().len(), 1);
        assert_eq!(set.failures().len(), 1);
        assert!(set.failures()[0].path.ends_with("Broken.cs"));

        let found = set.search(&Query::parse("string[],int")).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|m| m.path.ends_with("Good.cs")));
    }

    #[test]
    fn non_utf8_file_is_a_failure_not_an_abort() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.cs"), [0xff, 0xfe]).unwrap();
        fs::write(dir.path().join("B.cs"), PROGRAM).unwrap();

        let set = SourceSet::load(dir.path(), &SearchConfig::default()).unwrap();
        assert_eq!(set.files().len(), 1);
        assert_eq!(set.failures().len(), 1);
        assert!(set.failures()[0].path.ends_with("A.cs"));
        assert!(matches!(set.failures()[0].error, FileError::Io(_)));
    }

    #[test]
    fn invalid_query_is_rejected() {
        let dir = TempDir::new().unwrap();
        let set = SourceSet::load(dir.path(), &SearchConfig::default()).unwrap();
        assert!(set.is_empty());
        assert!(matches!(
            set.search(&Query::parse("int ->  ")),
            Err(SearchError::InvalidQuery(_))
        ));
        assert!(set.search(&Query::parse("int")).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let result = SourceSet::load("/definitely/not/a/folder", &SearchConfig::default());
        assert!(matches!(result, Err(SearchError::RootNotFound { .. })));
    }

    #[test]
    fn reload_picks_up_new_files() {
        let dir = TempDir::new().unwrap();
        let mut set = SourceSet::load(dir.path(), &SearchConfig::default()).unwrap();
        assert!(set.is_empty());

        fs::write(dir.path().join("Late.cs"), PROGRAM).unwrap();
        set.reload();
        assert_eq!(set.files().len(), 1);
    }
}
