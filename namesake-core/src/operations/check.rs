use crate::config::{validate_threshold, Config};
use crate::harvest::{harvest_tree, HarvestOptions};
use crate::matcher::match_scope;
use crate::output::{CheckResult, ScopeSummary};
use crate::preview::Preview;
use crate::report::{created_at_now, generate_report_id, write_report, Report, ScopeMatches, Stats};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Check operation - returns structured data plus an optional rendered preview
#[allow(clippy::too_many_arguments)]
pub fn check_operation(
    paths: Vec<PathBuf>,
    threshold: Option<f64>,
    min_length: Option<usize>,
    include: Vec<String>,
    exclude: Vec<String>,
    unrestricted_level: u8,
    report_out: Option<PathBuf>,
    preview_format: Option<&String>,
    fixed_table_width: bool,
    use_color: bool,
    working_dir: Option<&Path>,
) -> Result<(CheckResult, Option<String>)> {
    let current_dir = working_dir.map_or_else(
        || std::env::current_dir().expect("Failed to get current directory"),
        Path::to_path_buf,
    );

    // Use provided paths or default to current directory
    let search_paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    // File config first, CLI flags override
    let config = Config::load(&current_dir).context("Failed to load configuration")?;
    let threshold = threshold.unwrap_or(config.threshold);
    let min_length = min_length.unwrap_or(config.min_length);
    validate_threshold(threshold)?;

    let options = HarvestOptions {
        includes: include,
        excludes: exclude,
        unrestricted_level: unrestricted_level.min(3),
        min_length,
        ignore: config.ignore,
    };

    // Resolve all search paths to absolute paths and canonicalize them
    let resolved_paths: Vec<PathBuf> = search_paths
        .iter()
        .map(|path| {
            let absolute_path = if path.is_absolute() {
                path.clone()
            } else {
                current_dir.join(path)
            };
            absolute_path.canonicalize().unwrap_or(absolute_path)
        })
        .collect();

    let tree = harvest_tree(&resolved_paths, &options).context("Failed to scan files")?;

    // Compare every pair within each scope; scopes with fewer than two
    // names have no pairs to offer
    let mut scopes = Vec::new();
    let mut total_matches = 0;
    for scope_names in &tree.scopes {
        if scope_names.len() < 2 {
            continue;
        }
        let matches = match_scope(scope_names, threshold);
        if !matches.is_empty() {
            total_matches += matches.len();
            scopes.push(ScopeMatches {
                scope: scope_names.scope.clone(),
                matches,
            });
        }
    }

    let stats = Stats {
        files_scanned: tree.files_scanned,
        names_collected: tree.names_collected,
        scopes_with_matches: scopes.len(),
        total_matches,
    };

    let report = Report {
        id: generate_report_id(&resolved_paths, threshold, &options),
        created_at: created_at_now(),
        roots: resolved_paths,
        threshold,
        scopes,
        stats,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Generate preview content
    let preview_content = if let Some(format) = preview_format.as_ref() {
        if *format == "none" {
            None
        } else {
            let preview: Preview = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Some(crate::preview::render_report_with_fixed_width(
                &report,
                preview,
                Some(use_color),
                fixed_table_width,
            ))
        }
    } else {
        None
    };

    // Write the report artifact when requested
    if let Some(report_path) = report_out.as_ref() {
        write_report(&report, report_path)
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
    }

    // Create structured result (include full report for JSON output)
    let result = CheckResult {
        report_id: report.id.clone(),
        roots: report.roots.clone(),
        threshold,
        files_scanned: report.stats.files_scanned,
        names_collected: report.stats.names_collected,
        scopes_with_matches: report.stats.scopes_with_matches,
        total_matches: report.stats.total_matches,
        scopes: report
            .scopes
            .iter()
            .map(|s| ScopeSummary {
                scope: s.scope.display_relative_to(&current_dir),
                matches: s.matches.len(),
            })
            .collect(),
        report: Some(report),
    };

    Ok((result, preview_content))
}
