use crate::report::Report;
use nu_ansi_term::{Color as AnsiColor, Style};
use std::fmt::Write;

/// Render a report as a focused per-scope matches view
pub fn render_matches(report: &Report, use_color: bool) -> String {
    let mut output = String::new();

    if report.is_clean() {
        return output;
    }

    // Make paths relative to the current directory for cleaner display
    let cwd = std::env::current_dir().unwrap_or_default();

    // Header
    if use_color {
        writeln!(
            output,
            "{}",
            AnsiColor::Cyan.bold().paint(format!(
                "🔍 Similar Names (threshold {:.2})",
                report.threshold
            ))
        )
        .unwrap();
    } else {
        writeln!(output, "Similar Names (threshold {:.2})", report.threshold).unwrap();
    }

    for scope_matches in &report.scopes {
        let scope_str = scope_matches.scope.display_relative_to(&cwd);
        if use_color {
            writeln!(output, "\n  {}", AnsiColor::Green.paint(&scope_str)).unwrap();
        } else {
            writeln!(output, "\n  {}", scope_str).unwrap();
        }

        // Show up to the first 5 pairs per scope
        let display_count = scope_matches.matches.len().min(5);
        for m in scope_matches.matches.iter().take(display_count) {
            if use_color {
                writeln!(
                    output,
                    "    {} and {} are {:.0}% similar",
                    Style::new()
                        .on(AnsiColor::Yellow)
                        .fg(AnsiColor::Black)
                        .bold()
                        .paint(&m.first.text),
                    Style::new()
                        .on(AnsiColor::Yellow)
                        .fg(AnsiColor::Black)
                        .bold()
                        .paint(&m.second.text),
                    m.percent()
                )
                .unwrap();
            } else {
                writeln!(
                    output,
                    "    {} and {} are {:.0}% similar",
                    m.first.text,
                    m.second.text,
                    m.percent()
                )
                .unwrap();
            }

            writeln!(
                output,
                "      {} ({})",
                m.first.origin.display_relative_to(&cwd),
                m.first.origin.kind
            )
            .unwrap();
            writeln!(
                output,
                "      {} ({})",
                m.second.origin.display_relative_to(&cwd),
                m.second.origin.kind
            )
            .unwrap();

            if use_color {
                writeln!(
                    output,
                    "      One of the longest common subsequences is: {}",
                    AnsiColor::Yellow.paint(&m.evidence)
                )
                .unwrap();
            } else {
                writeln!(
                    output,
                    "      One of the longest common subsequences is: {}",
                    m.evidence
                )
                .unwrap();
            }
        }

        if scope_matches.matches.len() > display_count {
            let remaining = scope_matches.matches.len() - display_count;
            if use_color {
                writeln!(
                    output,
                    "    {}",
                    AnsiColor::DarkGray.paint(format!("... and {} more pairs", remaining))
                )
                .unwrap();
            } else {
                writeln!(output, "    ... and {} more pairs", remaining).unwrap();
            }
        }
    }

    // Summary
    writeln!(output).unwrap();
    if use_color {
        writeln!(output, "{}", AnsiColor::Cyan.paint("─".repeat(60))).unwrap();
    } else {
        writeln!(output, "{}", "─".repeat(60)).unwrap();
    }

    let summary = format!(
        "Found {} similar pairs in {} scopes across {} files",
        report.stats.total_matches, report.stats.scopes_with_matches, report.stats.files_scanned
    );

    if use_color {
        writeln!(output, "{}", Style::new().bold().paint(&summary)).unwrap();
    } else {
        writeln!(output, "{}", summary).unwrap();
    }

    output
}
