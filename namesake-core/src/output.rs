use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// One line of the check summary: a scope and how many pairs it reported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeSummary {
    pub scope: String,
    pub matches: usize,
}

/// Result of a check operation
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub report_id: String,
    pub roots: Vec<PathBuf>,
    pub threshold: f64,
    pub files_scanned: usize,
    pub names_collected: usize,
    pub scopes_with_matches: usize,
    pub total_matches: usize,
    pub scopes: Vec<ScopeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<crate::report::Report>,
}

/// Result of a compare operation (one pair, scored directly)
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResult {
    pub first: String,
    pub second: String,
    pub score: f64,
    pub evidence: String,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for CheckResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "check",
            "report_id": self.report_id,
            "roots": self.roots,
            "threshold": self.threshold,
            "summary": {
                "files_scanned": self.files_scanned,
                "names_collected": self.names_collected,
                "scopes_with_matches": self.scopes_with_matches,
                "total_matches": self.total_matches,
            },
            "scopes": self.scopes,
            "report": self.report,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "Checked {} files, {} names",
            self.files_scanned, self.names_collected
        )
        .unwrap();

        if self.total_matches == 0 {
            writeln!(output, "No confusingly similar names found").unwrap();
            return output;
        }

        writeln!(
            output,
            "Found {} similar pairs in {} scopes",
            self.total_matches, self.scopes_with_matches
        )
        .unwrap();

        for scope in &self.scopes {
            writeln!(output, "  {}: {} pairs", scope.scope, scope.matches).unwrap();
        }

        output
    }
}

impl OutputFormatter for CompareResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "compare",
            "first": self.first,
            "second": self.second,
            "score": self.score,
            "evidence": self.evidence,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "\"{}\" and \"{}\" are {:.0}% similar",
            self.first,
            self.second,
            self.score * 100.0
        )
        .unwrap();

        if !self.evidence.is_empty() {
            writeln!(
                output,
                "One of the longest common subsequences is: {}",
                self.evidence
            )
            .unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
