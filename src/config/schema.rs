use serde::Deserialize;
use std::fmt;

/// Contents of a `csfinder.toml` file. Every section is optional.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FinderConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FinderConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.search.extensions.is_empty() {
            issues.push(ValidationIssue::EmptyList {
                field: "search.extensions",
            });
        }
        if self
            .search
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').trim().is_empty())
        {
            issues.push(ValidationIssue::EmptyEntry {
                field: "search.extensions",
            });
        }
        if self.search.exclude.iter().any(|dir| dir.trim().is_empty()) {
            issues.push(ValidationIssue::EmptyEntry {
                field: "search.exclude",
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    /// Strip leading dots and surrounding whitespace from extensions.
    pub(crate) fn normalize(mut self) -> Self {
        for ext in &mut self.search.extensions {
            *ext = ext.trim().trim_start_matches('.').to_string();
        }
        for dir in &mut self.search.exclude {
            *dir = dir.trim().to_string();
        }
        self
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// File extensions (without the dot) treated as C# sources.
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub exclude: Vec<String>,
    pub follow_links: bool,
    /// Report files containing syntax errors as failures instead of
    /// searching their partial trees.
    pub skip_files_with_errors: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["cs".to_string()],
            exclude: vec!["bin".to_string(), "obj".to_string(), ".git".to_string()],
            follow_links: false,
            skip_files_with_errors: true,
        }
    }
}

impl SearchConfig {
    /// Case-insensitive extension check.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyList { field: &'static str },
    EmptyEntry { field: &'static str },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyList { field } => write!(f, "'{field}' must not be empty"),
            ValidationIssue::EmptyEntry { field } => {
                write!(f, "'{field}' contains an empty entry")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_search_csharp_sources() {
        let config = FinderConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.search.accepts_extension("cs"));
        assert!(config.search.accepts_extension("CS"));
        assert!(!config.search.accepts_extension("rs"));
        assert!(config.search.is_excluded_dir("obj"));
        assert!(config.search.skip_files_with_errors);
        assert!(config.output.color);
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let mut config = FinderConfig::default();
        config.search.extensions.clear();
        config.search.exclude.push("  ".to_string());

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                ValidationIssue::EmptyList {
                    field: "search.extensions"
                },
                ValidationIssue::EmptyEntry {
                    field: "search.exclude"
                },
            ]
        );
    }

    #[test]
    fn normalize_strips_dots() {
        let mut config = FinderConfig::default();
        config.search.extensions = vec![".cs".to_string(), " csx ".to_string()];
        let config = config.normalize();
        assert_eq!(config.search.extensions, ["cs", "csx"]);
    }
}
