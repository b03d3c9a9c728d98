use crate::report::Report;
use std::fmt::Write;

/// Render report as a machine-greppable summary block
pub fn render_summary(report: &Report) -> String {
    let mut output = String::new();

    if report.is_clean() {
        return output;
    }

    // Make paths relative to the current directory for cleaner display
    let cwd = std::env::current_dir().unwrap_or_default();

    writeln!(output, "[NAMESAKE SUMMARY]").unwrap();
    writeln!(output, "Threshold: {}", report.threshold).unwrap();
    writeln!(output, "Pairs: {}", report.stats.total_matches).unwrap();
    writeln!(output, "Scopes: {}", report.stats.scopes_with_matches).unwrap();
    writeln!(output, "Files: {}", report.stats.files_scanned).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "[SCOPES]").unwrap();
    for scope_matches in &report.scopes {
        write!(
            output,
            "{}: {} pairs [",
            scope_matches.scope.display_relative_to(&cwd),
            scope_matches.matches.len()
        )
        .unwrap();

        for (i, m) in scope_matches.matches.iter().enumerate() {
            if i > 0 {
                write!(output, ", ").unwrap();
            }
            write!(output, "{} ~ {}: {:.0}%", m.first.text, m.second.text, m.percent()).unwrap();
        }
        writeln!(output, "]").unwrap();
    }

    output
}
