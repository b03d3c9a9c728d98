use crate::language::Language;
use crate::scope::{Name, NameKind, NameOrigin, ScopeId, ScopeNames};
use anyhow::Result;
use content_inspector::ContentType;
use globset::{Glob, GlobSet, GlobSetBuilder};
use memmap2::Mmap;
use regex::RegexSet;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct HarvestOptions {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub unrestricted_level: u8, // 0=default, 1=-u, 2=-uu, 3=-uuu
    pub min_length: usize,
    pub ignore: Vec<String>, // anchored regex patterns for names never harvested
}

impl HarvestOptions {
    /// Returns true if binary files should be treated as text (level 3/-uuu)
    pub fn binary_as_text(&self) -> bool {
        self.unrestricted_level >= 3
    }
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            includes: vec![],
            excludes: vec![],
            unrestricted_level: 0,
            min_length: 1,
            ignore: vec![],
        }
    }
}

/// Scopes harvested from one file, innermost first, file root last.
#[derive(Debug, Clone)]
pub struct FileHarvest {
    pub scopes: Vec<ScopeNames>,
    pub names_collected: usize,
}

/// Scopes harvested from a whole tree walk, file by file in sorted path
/// order.
#[derive(Debug, Clone, Default)]
pub struct TreeHarvest {
    pub scopes: Vec<ScopeNames>,
    pub files_scanned: usize,
    pub names_collected: usize,
}

/// Compile the `ignore` name patterns into one anchored set. A pattern must
/// match the whole name, so plain strings behave as exact matches.
pub fn build_ignore_set(patterns: &[String]) -> Result<Option<RegexSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let anchored: Vec<String> = patterns.iter().map(|p| format!("^(?:{})$", p)).collect();
    let set = RegexSet::new(&anchored)
        .map_err(|e| anyhow::anyhow!("Invalid ignore pattern: {}", e))?;
    Ok(Some(set))
}

/// Lexical scanner that collects declared names per scope.
///
/// An identifier is harvested when the meaningful token before it is one of
/// the language's declaration keywords. Braces drive a scope stack; when a
/// scope closes, its names fold into the enclosing scope, so outer scopes
/// compare their own names against everything nested beneath them.
struct Harvester<'a> {
    path: &'a Path,
    language: Language,
    min_length: usize,
    ignore: Option<&'a RegexSet>,
    stack: Vec<ScopeNames>,
    emitted: Vec<ScopeNames>,
    previous_word: Option<String>,
    pending_label: Option<String>,
    adjacent: bool, // a name was just harvested with only whitespace since
    names_collected: usize,
}

impl<'a> Harvester<'a> {
    fn new(
        path: &'a Path,
        language: Language,
        min_length: usize,
        ignore: Option<&'a RegexSet>,
    ) -> Self {
        Self {
            path,
            language,
            min_length,
            ignore,
            stack: vec![ScopeNames::new(ScopeId::file_root(path))],
            emitted: Vec::new(),
            previous_word: None,
            pending_label: None,
            adjacent: false,
            names_collected: 0,
        }
    }

    #[allow(clippy::too_many_lines)]
    fn scan(&mut self, content: &[u8]) {
        let len = content.len();
        let mut pos = 0;
        let mut line: u64 = 1;
        let mut line_start = 0usize;
        let mut first_word_on_line = true;

        while pos < len {
            let b = content[pos];

            if b == b'\n' {
                line += 1;
                pos += 1;
                line_start = pos;
                first_word_on_line = true;
                continue;
            }

            if b == b' ' || b == b'\t' || b == b'\r' {
                pos += 1;
                continue;
            }

            // Comments. Python comments are '#'; everywhere else '#' is
            // ordinary punctuation (preprocessor, attributes).
            if self.language.line_comment() == b'/' {
                if b == b'/' && content.get(pos + 1) == Some(&b'/') {
                    pos += 2;
                    while pos < len && content[pos] != b'\n' {
                        pos += 1;
                    }
                    continue;
                }
                if b == b'/'
                    && content.get(pos + 1) == Some(&b'*')
                    && self.language.has_block_comments()
                {
                    pos += 2;
                    while pos < len {
                        if content[pos] == b'\n' {
                            line += 1;
                            line_start = pos + 1;
                            first_word_on_line = true;
                        } else if content[pos] == b'*' && content.get(pos + 1) == Some(&b'/') {
                            pos += 2;
                            break;
                        }
                        pos += 1;
                    }
                    continue;
                }
            } else if b == b'#' {
                pos += 1;
                while pos < len && content[pos] != b'\n' {
                    pos += 1;
                }
                continue;
            }

            // Rust single quote: char literal or lifetime marker
            if b == b'\'' && self.language == Language::Rust {
                if content.get(pos + 1) == Some(&b'\\') {
                    pos += 2;
                    while pos < len && content[pos] != b'\'' && content[pos] != b'\n' {
                        pos += 1;
                    }
                    if pos < len && content[pos] == b'\'' {
                        pos += 1;
                    }
                } else if content.get(pos + 2) == Some(&b'\'') {
                    pos += 3;
                } else {
                    pos += 1; // lifetime: leave the identifier to the word scan
                }
                self.break_context();
                first_word_on_line = false;
                continue;
            }

            // String and char literals
            if self.language.is_string_delimiter(b) {
                if self.language == Language::Python
                    && content.get(pos + 1) == Some(&b)
                    && content.get(pos + 2) == Some(&b)
                {
                    // Triple-quoted: spans lines until the matching triple
                    pos += 3;
                    while pos < len {
                        if content[pos] == b'\n' {
                            line += 1;
                            line_start = pos + 1;
                            first_word_on_line = true;
                            pos += 1;
                        } else if content[pos] == b
                            && content.get(pos + 1) == Some(&b)
                            && content.get(pos + 2) == Some(&b)
                        {
                            pos += 3;
                            break;
                        } else if content[pos] == b'\\' {
                            pos += 2;
                        } else {
                            pos += 1;
                        }
                    }
                } else {
                    let spans = self.language.string_spans_lines(b);
                    pos += 1;
                    while pos < len {
                        let s = content[pos];
                        if s == b'\\' && b != b'`' {
                            if content.get(pos + 1) == Some(&b'\n') {
                                line += 1;
                                line_start = pos + 2;
                                first_word_on_line = true;
                            }
                            pos += 2;
                        } else if s == b {
                            pos += 1;
                            break;
                        } else if s == b'\n' {
                            if !spans {
                                break; // unterminated; the main loop sees the newline
                            }
                            line += 1;
                            line_start = pos + 1;
                            first_word_on_line = true;
                            pos += 1;
                        } else {
                            pos += 1;
                        }
                    }
                }
                self.break_context();
                first_word_on_line = false;
                continue;
            }

            // Identifiers and keywords
            if b.is_ascii_alphabetic() || b == b'_' {
                let start = pos;
                while pos < len && (content[pos].is_ascii_alphanumeric() || content[pos] == b'_') {
                    pos += 1;
                }
                let word = std::str::from_utf8(&content[start..pos]).unwrap_or("");
                let col = (start - line_start) as u32;
                let assigns = self.language == Language::Python
                    && first_word_on_line
                    && is_assignment_ahead(content, pos);
                self.handle_word(word, line, col, assigns);
                first_word_on_line = false;
                continue;
            }

            // Number literals neither set nor reset the keyword context
            if b.is_ascii_digit() {
                while pos < len && (content[pos].is_ascii_alphanumeric() || content[pos] == b'_') {
                    pos += 1;
                }
                first_word_on_line = false;
                continue;
            }

            // Pointer/reference sigils sit between a keyword and the
            // declared name (`char *buffer`), so they keep the context
            if b == b'*' || b == b'&' {
                pos += 1;
                first_word_on_line = false;
                continue;
            }

            if b == b'{' && self.language.has_braces() {
                self.open_scope();
                first_word_on_line = false;
                pos += 1;
                continue;
            }

            if b == b'}' && self.language.has_braces() {
                self.close_scope();
                first_word_on_line = false;
                pos += 1;
                continue;
            }

            if b == b'(' {
                // `int main(` declares a function, not a variable
                if self.adjacent {
                    self.promote_last_to_function();
                }
                self.break_context();
                first_word_on_line = false;
                pos += 1;
                continue;
            }

            if b == b';' {
                self.pending_label = None;
                self.break_context();
                first_word_on_line = false;
                pos += 1;
                continue;
            }

            // Any other punctuation ends the declaration context
            self.break_context();
            first_word_on_line = false;
            pos += 1;
        }

        self.finish();
    }

    fn handle_word(&mut self, word: &str, line: u64, col: u32, python_assignment: bool) {
        if word.is_empty() {
            return;
        }
        if self.language.is_transparent(word) {
            self.adjacent = false;
            return;
        }

        // A keyword following a keyword (`unsigned long`, `const fn`) is
        // part of the declaration, not the declared name
        let word_is_keyword = self.language.declaration_kind(word).is_some();
        let declared = self
            .previous_word
            .as_deref()
            .and_then(|prev| self.language.declaration_kind(prev));

        if let Some(kind) = declared.filter(|_| !word_is_keyword) {
            let keyword = self.previous_word.clone().unwrap_or_default();
            self.harvest(word, kind, &keyword, line, col);
        } else if python_assignment && !word_is_keyword {
            self.harvest(word, NameKind::Variable, "assignment", line, col);
        } else {
            self.adjacent = false;
        }

        self.previous_word = Some(word.to_string());
    }

    fn harvest(&mut self, text: &str, kind: NameKind, keyword: &str, line: u64, col: u32) {
        self.adjacent = false;
        if text.len() < self.min_length {
            return;
        }
        if self.ignore.is_some_and(|set| set.is_match(text)) {
            return;
        }

        let origin = NameOrigin {
            file: self.path.to_path_buf(),
            line,
            col,
            kind,
        };
        if let Some(top) = self.stack.last_mut() {
            top.push(Name::new(text, origin));
            self.names_collected += 1;
            self.pending_label = Some(format!("{} {}", keyword, text));
            self.adjacent = true;
        }
    }

    fn promote_last_to_function(&mut self) {
        if let Some(name) = self.stack.last_mut().and_then(|s| s.names.last_mut()) {
            if matches!(name.origin.kind, NameKind::Variable | NameKind::Constant) {
                name.origin.kind = NameKind::Function;
            }
        }
    }

    fn break_context(&mut self) {
        self.previous_word = None;
        self.adjacent = false;
    }

    fn open_scope(&mut self) {
        let label = self
            .pending_label
            .take()
            .unwrap_or_else(|| "block".to_string());
        let depth = self.stack.len();
        self.stack.push(ScopeNames::new(ScopeId {
            file: self.path.to_path_buf(),
            label,
            depth,
        }));
        self.break_context();
    }

    fn close_scope(&mut self) {
        self.pending_label = None;
        self.break_context();
        // Excess closers at the file level are ignored
        if self.stack.len() > 1 {
            if let Some(closed) = self.stack.pop() {
                if let Some(parent) = self.stack.last_mut() {
                    parent.names.extend(closed.names.iter().cloned());
                }
                self.emitted.push(closed);
            }
        }
    }

    fn finish(&mut self) {
        // Scopes still open at EOF fold into the root
        while self.stack.len() > 1 {
            self.close_scope();
        }
        if let Some(root) = self.stack.pop() {
            self.emitted.push(root);
        }
    }
}

fn is_assignment_ahead(content: &[u8], mut pos: usize) -> bool {
    while pos < content.len() && (content[pos] == b' ' || content[pos] == b'\t') {
        pos += 1;
    }
    content.get(pos) == Some(&b'=') && content.get(pos + 1) != Some(&b'=')
}

/// Harvest one file's bytes into per-scope name collections.
pub fn harvest_file(
    path: &Path,
    content: &[u8],
    language: Language,
    options: &HarvestOptions,
    ignore: Option<&RegexSet>,
) -> FileHarvest {
    let mut harvester = Harvester::new(path, language, options.min_length, ignore);
    harvester.scan(content);

    if std::env::var("NAMESAKE_DEBUG_HARVEST").is_ok() {
        eprintln!(
            "HARVEST: {} names in {} scopes from {}",
            harvester.names_collected,
            harvester.emitted.len(),
            path.display()
        );
    }

    FileHarvest {
        scopes: harvester.emitted,
        names_collected: harvester.names_collected,
    }
}

/// Walk the given roots and harvest every recognized source file.
///
/// Unreadable files are skipped without failing the walk; binary files are
/// skipped unless the unrestricted level says otherwise; unknown extensions
/// are skipped unless a shebang identifies the language.
pub fn harvest_tree(roots: &[PathBuf], options: &HarvestOptions) -> Result<TreeHarvest> {
    let include_globs = build_globset(&options.includes)?;
    let exclude_globs = build_globset(&options.excludes)?;
    let ignore_set = build_ignore_set(&options.ignore)?;

    let walker = crate::configure_walker(roots, options).build();

    let mut files = Vec::new();
    for entry in walker {
        let Ok(entry) = entry else {
            continue;
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();

        // Apply include/exclude filters (use relative path for matching)
        let relative_path = roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);

        if let Some(ref includes) = include_globs {
            if !includes.is_match(relative_path) {
                continue;
            }
        }

        if let Some(ref excludes) = exclude_globs {
            if excludes.is_match(relative_path) {
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    // Walk order depends on the filesystem; sort for reproducible reports
    files.sort();

    let mut harvest = TreeHarvest::default();
    for path in files {
        let Ok(content) = read_file_content(&path) else {
            continue;
        };
        harvest.files_scanned += 1;

        if !options.binary_as_text() && is_binary(&content) {
            continue;
        }

        let Some(language) =
            Language::from_path(&path).or_else(|| Language::from_shebang(&content))
        else {
            continue;
        };

        let file_harvest = harvest_file(&path, &content, language, options, ignore_set.as_ref());
        harvest.names_collected += file_harvest.names_collected;
        harvest.scopes.extend(file_harvest.scopes);
    }

    Ok(harvest)
}

pub fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        // Add the pattern as-is
        builder.add(Glob::new(pattern)?);

        // If pattern looks like a directory (ends with / or no wildcards and
        // no extension), also add a pattern that matches everything under it
        if pattern.ends_with('/')
            || (!pattern.contains('*') && !pattern.contains('?') && !pattern.contains('.'))
        {
            let recursive_pattern = if pattern.ends_with('/') {
                format!("{}**", pattern)
            } else {
                format!("{}/**", pattern)
            };
            builder.add(Glob::new(&recursive_pattern)?);
        }
    }
    Ok(Some(builder.build()?))
}

fn read_file_content(path: &Path) -> Result<Vec<u8>> {
    use std::io::Read;

    let file = File::open(path)?;
    let metadata = file.metadata()?;

    if metadata.len() > 50 * 1024 * 1024 {
        let mut content = Vec::new();
        std::fs::File::open(path)?.read_to_end(&mut content)?;
        Ok(content)
    } else {
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(mmap.to_vec())
    }
}

fn is_binary(content: &[u8]) -> bool {
    matches!(content_inspector::inspect(content), ContentType::BINARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn harvest_rust(src: &[u8]) -> FileHarvest {
        harvest_file(
            &PathBuf::from("test.rs"),
            src,
            Language::Rust,
            &HarvestOptions::default(),
            None,
        )
    }

    fn texts(scope: &ScopeNames) -> Vec<&str> {
        scope.names.iter().map(|n| n.text.as_str()).collect()
    }

    #[test]
    fn test_rust_declarations_in_file_scope() {
        let harvest = harvest_rust(b"const LIMIT: usize = 10;\nstatic BUFFER: u8 = 0;\n");
        assert_eq!(harvest.scopes.len(), 1);
        let root = &harvest.scopes[0];
        assert_eq!(texts(root), vec!["LIMIT", "BUFFER"]);
        assert_eq!(root.names[0].origin.kind, NameKind::Constant);
        assert_eq!(root.names[0].origin.line, 1);
        assert_eq!(root.names[0].origin.col, 6);
        assert_eq!(root.names[1].origin.line, 2);
    }

    #[test]
    fn test_let_mut_harvests_the_binding() {
        let harvest = harvest_rust(b"fn f() {\n    let mut counter = 0;\n}\n");
        let inner = &harvest.scopes[0];
        assert_eq!(texts(inner), vec!["counter"]);
        assert_eq!(inner.names[0].origin.kind, NameKind::Variable);
    }

    #[test]
    fn test_usage_is_not_harvested() {
        let harvest = harvest_rust(b"fn f() {\n    let x = 1;\n    let y = x + other(x);\n}\n");
        let inner = &harvest.scopes[0];
        assert_eq!(texts(inner), vec!["x", "y"]);
    }

    #[test]
    fn test_comments_and_strings_are_skipped() {
        let src = b"// let ghost = 1;\nlet real = \"let fake = 2;\";\n/* let phantom = 3;\n   spans lines */\nlet second = 0;\n";
        let harvest = harvest_rust(src);
        assert_eq!(texts(&harvest.scopes[0]), vec!["real", "second"]);
        assert_eq!(harvest.scopes[0].names[1].origin.line, 5);
    }

    #[test]
    fn test_char_literal_and_lifetime() {
        let src = b"fn f<'a>(v: &'a str) {\n    let tick = 'x';\n    let escaped = '\\n';\n}\n";
        let harvest = harvest_rust(src);
        assert_eq!(texts(&harvest.scopes[0]), vec!["tick", "escaped"]);
    }

    #[test]
    fn test_nested_scopes_fold_upward() {
        let src = b"fn outer() {\n    let inner_count = 0;\n    fn nested() {\n        let deep = 1;\n    }\n}\n";
        let harvest = harvest_rust(src);
        assert_eq!(harvest.scopes.len(), 3);

        // Innermost first
        assert_eq!(harvest.scopes[0].scope.label, "fn nested");
        assert_eq!(harvest.scopes[0].scope.depth, 2);
        assert_eq!(texts(&harvest.scopes[0]), vec!["deep"]);

        // Enclosing function sees its own names plus the folded ones
        assert_eq!(harvest.scopes[1].scope.label, "fn outer");
        assert_eq!(texts(&harvest.scopes[1]), vec!["inner_count", "nested", "deep"]);

        // File root last, seeing everything
        assert_eq!(harvest.scopes[2].scope.depth, 0);
        assert_eq!(
            texts(&harvest.scopes[2]),
            vec!["outer", "inner_count", "nested", "deep"]
        );

        // Folding does not double-count
        assert_eq!(harvest.names_collected, 4);
    }

    #[test]
    fn test_plain_block_label() {
        let harvest = harvest_rust(b"fn f() {\n    {\n        let z = 1;\n    }\n}\n");
        assert_eq!(harvest.scopes[0].scope.label, "block");
        assert_eq!(texts(&harvest.scopes[0]), vec!["z"]);
    }

    #[test]
    fn test_unbalanced_braces() {
        let harvest = harvest_rust(b"}\nfn late() {\n    let caught = 1;\n");
        // The stray closer is ignored; the unclosed scope folds into the root
        let root = harvest.scopes.last().unwrap();
        assert_eq!(root.scope.depth, 0);
        assert_eq!(texts(root), vec!["late", "caught"]);
    }

    #[test]
    fn test_min_length_filters_short_names() {
        let options = HarvestOptions {
            min_length: 3,
            ..Default::default()
        };
        let harvest = harvest_file(
            &PathBuf::from("test.rs"),
            b"let ab = 1;\nlet abc = 2;\n",
            Language::Rust,
            &options,
            None,
        );
        assert_eq!(texts(&harvest.scopes[0]), vec!["abc"]);
        assert_eq!(harvest.names_collected, 1);
    }

    #[test]
    fn test_ignore_patterns_filter_names() {
        let set = build_ignore_set(&["temp.*".to_string(), "idx".to_string()])
            .unwrap()
            .unwrap();
        let harvest = harvest_file(
            &PathBuf::from("test.rs"),
            b"let temp_buf = 1;\nlet idx = 2;\nlet index = 3;\n",
            Language::Rust,
            &HarvestOptions::default(),
            Some(&set),
        );
        // "idx" matches exactly; "index" only partially, so it stays
        assert_eq!(texts(&harvest.scopes[0]), vec!["index"]);
    }

    #[test]
    fn test_invalid_ignore_pattern_errors() {
        assert!(build_ignore_set(&["(unclosed".to_string()]).is_err());
    }

    #[test]
    fn test_c_pointer_declarations_and_function_promotion() {
        let src = b"int main(void) {\n    char *buffer = 0;\n    unsigned long count = 1;\n}\n";
        let harvest = harvest_file(
            &PathBuf::from("test.c"),
            src,
            Language::CCpp,
            &HarvestOptions::default(),
            None,
        );
        let root = harvest.scopes.last().unwrap();
        assert_eq!(texts(root), vec!["main", "buffer", "count"]);
        assert_eq!(root.names[0].origin.kind, NameKind::Function);

        let body = &harvest.scopes[0];
        assert_eq!(body.scope.label, "int main");
        assert_eq!(texts(body), vec!["buffer", "count"]);
        assert_eq!(body.names[0].origin.kind, NameKind::Variable);
    }

    #[test]
    fn test_cpp_namespace_and_class() {
        let src = b"namespace util {\nclass Parser {\n};\n}\n";
        let harvest = harvest_file(
            &PathBuf::from("test.cpp"),
            src,
            Language::CCpp,
            &HarvestOptions::default(),
            None,
        );
        let root = harvest.scopes.last().unwrap();
        assert_eq!(texts(root), vec!["util", "Parser"]);
        assert_eq!(root.names[0].origin.kind, NameKind::Namespace);
        assert_eq!(root.names[1].origin.kind, NameKind::Type);

        let ns = harvest.scopes.iter().find(|s| s.scope.label == "namespace util").unwrap();
        assert_eq!(texts(ns), vec!["Parser"]);
    }

    #[test]
    fn test_python_assignments_and_defs() {
        let src = b"total = 0\n\ndef compute(x):\n    result = x\n    return result\n\nclass Report:\n    pass\n";
        let harvest = harvest_file(
            &PathBuf::from("tool.py"),
            src,
            Language::Python,
            &HarvestOptions::default(),
            None,
        );
        // No braces: one file-level scope
        assert_eq!(harvest.scopes.len(), 1);
        let root = &harvest.scopes[0];
        assert_eq!(texts(root), vec!["total", "compute", "result", "Report"]);
        assert_eq!(root.names[1].origin.kind, NameKind::Function);
        assert_eq!(root.names[3].origin.kind, NameKind::Type);
    }

    #[test]
    fn test_python_comparison_is_not_assignment() {
        let src = b"flag == other\nreal = 1\n";
        let harvest = harvest_file(
            &PathBuf::from("tool.py"),
            src,
            Language::Python,
            &HarvestOptions::default(),
            None,
        );
        assert_eq!(texts(&harvest.scopes[0]), vec!["real"]);
    }

    #[test]
    fn test_go_declarations() {
        let src = b"package main\n\nfunc serve() {\n\tvar count int\n}\n";
        let harvest = harvest_file(
            &PathBuf::from("serve.go"),
            src,
            Language::Go,
            &HarvestOptions::default(),
            None,
        );
        let root = harvest.scopes.last().unwrap();
        assert_eq!(texts(root), vec!["main", "serve", "count"]);
        assert_eq!(root.names[0].origin.kind, NameKind::Namespace);
        assert_eq!(root.names[1].origin.kind, NameKind::Function);

        let body = &harvest.scopes[0];
        assert_eq!(body.scope.label, "func serve");
    }

    #[test]
    fn test_javascript_template_literal_spans_lines() {
        let src = b"const query = `select\nname`;\nlet second = 1;\n";
        let harvest = harvest_file(
            &PathBuf::from("app.js"),
            src,
            Language::JavaScript,
            &HarvestOptions::default(),
            None,
        );
        assert_eq!(texts(&harvest.scopes[0]), vec!["query", "second"]);
        assert_eq!(harvest.scopes[0].names[1].origin.line, 3);
    }

    #[test]
    fn test_keyword_chain_is_not_a_name() {
        // `const fn` must not harvest "fn"; `unsigned long` must not
        // harvest "long"
        let harvest = harvest_rust(b"const fn helper() {}\n");
        let root = harvest.scopes.last().unwrap();
        assert_eq!(texts(root), vec!["helper"]);
        assert_eq!(root.names[0].origin.kind, NameKind::Function);
    }

    #[test]
    fn test_binary_detection() {
        assert!(is_binary(b"\x00\x01\x02binary"));
        assert!(!is_binary(b"plain text\n"));
    }

    #[test]
    fn test_globset_expands_directories() {
        let set = build_globset(&["src".to_string()]).unwrap().unwrap();
        assert!(set.is_match("src/lib.rs"));
        let set = build_globset(&["*.rs".to_string()]).unwrap().unwrap();
        assert!(set.is_match("main.rs"));
        assert!(!set.is_match("main.py"));
    }
}
