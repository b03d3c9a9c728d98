use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// What kind of declaration introduced a harvested name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    Function,
    Variable,
    Constant,
    Type,
    Namespace,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Constant => "constant",
            Self::Type => "type",
            Self::Namespace => "namespace",
        };
        write!(f, "{}", s)
    }
}

/// Where a harvested name came from. The matcher copies this through into
/// results without inspecting it; only the reporter reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOrigin {
    pub file: PathBuf,
    pub line: u64, // 1-based
    pub col: u32,  // 0-based
    pub kind: NameKind,
}

impl NameOrigin {
    /// Same as the `Display` form, with the file path shown relative to
    /// `base` when it lives under it.
    pub fn display_relative_to(&self, base: &Path) -> String {
        let file = self.file.strip_prefix(base).unwrap_or(&self.file);
        format!("{}:{}:{}", file.display(), self.line, self.col)
    }
}

impl fmt::Display for NameOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// One harvested identifier, immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub text: String,
    pub origin: NameOrigin,
}

impl Name {
    pub fn new(text: impl Into<String>, origin: NameOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    /// Length in Unicode scalar values, the unit the scorer and extractor
    /// both work in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Identifies one lexical scope in a report. `depth` 0 is the file scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeId {
    pub file: PathBuf,
    pub label: String,
    pub depth: usize,
}

impl ScopeId {
    pub fn file_root(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            label: "file".to_string(),
            depth: 0,
        }
    }

    /// Same as the `Display` form, with the file path shown relative to
    /// `base` when it lives under it.
    pub fn display_relative_to(&self, base: &Path) -> String {
        let file = self.file.strip_prefix(base).unwrap_or(&self.file);
        if self.depth == 0 {
            file.display().to_string()
        } else {
            format!("{} ({})", file.display(), self.label)
        }
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth == 0 {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{} ({})", self.file.display(), self.label)
        }
    }
}

/// One scope's harvested names, in encounter order. Built by the harvester,
/// consumed once by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeNames {
    pub scope: ScopeId,
    pub names: Vec<Name>,
}

impl ScopeNames {
    pub fn new(scope: ScopeId) -> Self {
        Self {
            scope,
            names: Vec::new(),
        }
    }

    pub fn push(&mut self, name: Name) {
        self.names.push(name);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(line: u64) -> NameOrigin {
        NameOrigin {
            file: PathBuf::from("src/main.rs"),
            line,
            col: 4,
            kind: NameKind::Variable,
        }
    }

    #[test]
    fn test_char_len_counts_scalars_not_bytes() {
        let name = Name::new("naïve", origin(1));
        assert_eq!(name.char_len(), 5);
        assert_eq!(name.text.len(), 6);
    }

    #[test]
    fn test_scope_id_display_file_root() {
        let id = ScopeId::file_root("src/lib.rs");
        assert_eq!(id.to_string(), "src/lib.rs");
    }

    #[test]
    fn test_scope_id_display_nested() {
        let id = ScopeId {
            file: PathBuf::from("src/lib.rs"),
            label: "fn parse".to_string(),
            depth: 2,
        };
        assert_eq!(id.to_string(), "src/lib.rs (fn parse)");
    }

    #[test]
    fn test_origin_display() {
        let o = origin(12);
        assert_eq!(o.to_string(), "src/main.rs:12:4");
    }

    #[test]
    fn test_display_relative_strips_base() {
        let id = ScopeId {
            file: PathBuf::from("/work/src/lib.rs"),
            label: "fn parse".to_string(),
            depth: 1,
        };
        assert_eq!(
            id.display_relative_to(Path::new("/work")),
            "src/lib.rs (fn parse)"
        );
        // Paths outside the base come through unchanged
        assert_eq!(
            id.display_relative_to(Path::new("/elsewhere")),
            "/work/src/lib.rs (fn parse)"
        );
    }

    #[test]
    fn test_name_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NameKind::Namespace).unwrap();
        assert_eq!(json, "\"namespace\"");
    }
}
