use crate::scope::NameKind;
use bstr::ByteSlice;
use std::path::Path;

/// Languages the harvester understands. Detection is by file extension,
/// with a shebang fallback for extensionless scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Rust,
    CCpp,
    JavaScript,
    Python,
    Go,
}

impl Language {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension {
            "rs" => Some(Self::Rust),
            "c" | "h" | "cc" | "hh" | "cpp" | "hpp" | "cxx" | "hxx" => Some(Self::CCpp),
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" => Some(Self::JavaScript),
            "py" => Some(Self::Python),
            "go" => Some(Self::Go),
            _ => None,
        }
    }

    /// Sniff the first line for an interpreter when the extension says
    /// nothing (e.g. `bin/migrate` starting with `#!/usr/bin/env python3`).
    pub fn from_shebang(content: &[u8]) -> Option<Self> {
        let first = content.lines().next()?;
        if !first.starts_with(b"#!") {
            return None;
        }
        let line = first.to_str().ok()?;
        if line.contains("python") {
            Some(Self::Python)
        } else if line.contains("node") || line.contains("deno") {
            Some(Self::JavaScript)
        } else {
            None
        }
    }

    /// If `word` is a keyword that introduces a declaration, the kind the
    /// following identifier is harvested with.
    pub fn declaration_kind(self, word: &str) -> Option<NameKind> {
        match self {
            Self::Rust => match word {
                "fn" => Some(NameKind::Function),
                "let" => Some(NameKind::Variable),
                "const" | "static" => Some(NameKind::Constant),
                "struct" | "enum" | "trait" | "type" | "union" => Some(NameKind::Type),
                "mod" => Some(NameKind::Namespace),
                _ => None,
            },
            Self::CCpp => match word {
                "namespace" => Some(NameKind::Namespace),
                "struct" | "class" | "enum" | "union" | "typedef" => Some(NameKind::Type),
                // Type keywords start an init-declarator; the first
                // identifier after one is the declared name
                "int" | "long" | "short" | "float" | "double" | "char" | "bool" | "void"
                | "unsigned" | "signed" | "auto" => Some(NameKind::Variable),
                _ => None,
            },
            Self::JavaScript => match word {
                "function" => Some(NameKind::Function),
                "var" | "let" => Some(NameKind::Variable),
                "const" => Some(NameKind::Constant),
                "class" | "interface" | "enum" | "type" => Some(NameKind::Type),
                "namespace" => Some(NameKind::Namespace),
                _ => None,
            },
            Self::Python => match word {
                "def" => Some(NameKind::Function),
                "class" => Some(NameKind::Type),
                _ => None,
            },
            Self::Go => match word {
                "func" => Some(NameKind::Function),
                "var" => Some(NameKind::Variable),
                "const" => Some(NameKind::Constant),
                "type" => Some(NameKind::Type),
                "package" => Some(NameKind::Namespace),
                _ => None,
            },
        }
    }

    /// Words skipped when tracking the token before an identifier, so
    /// `let mut count` still harvests `count`.
    pub fn is_transparent(self, word: &str) -> bool {
        matches!((self, word), (Self::Rust, "mut"))
    }

    /// Python blocks are indentation-based; everything else here scopes
    /// with braces.
    pub fn has_braces(self) -> bool {
        !matches!(self, Self::Python)
    }

    pub fn line_comment(self) -> u8 {
        match self {
            Self::Python => b'#',
            _ => b'/', // followed by a second '/'
        }
    }

    pub fn has_block_comments(self) -> bool {
        !matches!(self, Self::Python)
    }

    /// Is `delim` a string delimiter in this language?
    pub fn is_string_delimiter(self, delim: u8) -> bool {
        match delim {
            b'"' => true,
            b'\'' => !matches!(self, Self::Rust), // Rust: lifetimes, handled separately
            b'`' => matches!(self, Self::JavaScript | Self::Go),
            _ => false,
        }
    }

    /// May a literal with this delimiter span lines unescaped?
    pub fn string_spans_lines(self, delim: u8) -> bool {
        matches!(
            (self, delim),
            (Self::Rust, b'"') | (Self::JavaScript | Self::Go, b'`')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path_known_extensions() {
        assert_eq!(
            Language::from_path(&PathBuf::from("src/main.rs")),
            Some(Language::Rust)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("lib/util.cpp")),
            Some(Language::CCpp)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("app.tsx")),
            Some(Language::JavaScript)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("tool.py")),
            Some(Language::Python)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("cmd/serve.go")),
            Some(Language::Go)
        );
    }

    #[test]
    fn test_from_path_unknown_extension() {
        assert_eq!(Language::from_path(&PathBuf::from("README.md")), None);
        assert_eq!(Language::from_path(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_from_shebang() {
        assert_eq!(
            Language::from_shebang(b"#!/usr/bin/env python3\nx = 1\n"),
            Some(Language::Python)
        );
        assert_eq!(
            Language::from_shebang(b"#!/usr/bin/env node\n"),
            Some(Language::JavaScript)
        );
        assert_eq!(Language::from_shebang(b"#!/bin/sh\necho hi\n"), None);
        assert_eq!(Language::from_shebang(b"fn main() {}\n"), None);
    }

    #[test]
    fn test_rust_declaration_kinds() {
        assert_eq!(
            Language::Rust.declaration_kind("fn"),
            Some(NameKind::Function)
        );
        assert_eq!(
            Language::Rust.declaration_kind("static"),
            Some(NameKind::Constant)
        );
        assert_eq!(
            Language::Rust.declaration_kind("mod"),
            Some(NameKind::Namespace)
        );
        assert_eq!(Language::Rust.declaration_kind("impl"), None);
        assert_eq!(Language::Rust.declaration_kind("use"), None);
    }

    #[test]
    fn test_c_type_keywords_declare_variables() {
        assert_eq!(
            Language::CCpp.declaration_kind("unsigned"),
            Some(NameKind::Variable)
        );
        assert_eq!(
            Language::CCpp.declaration_kind("namespace"),
            Some(NameKind::Namespace)
        );
        assert_eq!(Language::CCpp.declaration_kind("return"), None);
    }

    #[test]
    fn test_mut_is_transparent_in_rust_only() {
        assert!(Language::Rust.is_transparent("mut"));
        assert!(!Language::Go.is_transparent("mut"));
        assert!(!Language::Rust.is_transparent("pub"));
    }

    #[test]
    fn test_python_has_no_braces_or_block_comments() {
        assert!(!Language::Python.has_braces());
        assert!(!Language::Python.has_block_comments());
        assert!(Language::Go.has_braces());
    }

    #[test]
    fn test_string_delimiters() {
        assert!(Language::Rust.is_string_delimiter(b'"'));
        assert!(!Language::Rust.is_string_delimiter(b'\''));
        assert!(Language::JavaScript.is_string_delimiter(b'`'));
        assert!(!Language::CCpp.is_string_delimiter(b'`'));
        assert!(Language::Rust.string_spans_lines(b'"'));
        assert!(!Language::CCpp.string_spans_lines(b'"'));
    }
}
