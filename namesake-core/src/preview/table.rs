use crate::report::Report;
use comfy_table::{Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use std::io::{self, IsTerminal};

fn fixed_constraints() -> Vec<ColumnConstraint> {
    vec![
        ColumnConstraint::Absolute(Width::Fixed(60)), // Scope
        ColumnConstraint::Absolute(Width::Fixed(25)), // Name A
        ColumnConstraint::Absolute(Width::Fixed(25)), // Name B
        ColumnConstraint::Absolute(Width::Fixed(12)), // Similarity
        ColumnConstraint::Absolute(Width::Fixed(30)), // Evidence
    ]
}

/// Render report as a table with optional fixed column widths
pub fn render_table(report: &Report, use_color: bool, fixed_table_width: bool) -> String {
    if report.is_clean() {
        return String::new();
    }

    // Make paths relative to the current directory for cleaner display
    let cwd = std::env::current_dir().unwrap_or_default();

    let mut table = Table::new();

    // Set content arrangement and constraints based on fixed width parameter
    if fixed_table_width {
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_constraints(fixed_constraints());
    } else {
        // Use TTY detection fallback when no fixed width specified
        if io::stdout().is_terminal() {
            table.set_content_arrangement(ContentArrangement::Dynamic);
        } else {
            table.set_content_arrangement(ContentArrangement::Disabled);
            table.set_constraints(fixed_constraints());
        }
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
    }

    if use_color {
        table.set_header(vec![
            Cell::new("Scope").fg(Color::Cyan),
            Cell::new("Name A").fg(Color::Cyan),
            Cell::new("Name B").fg(Color::Cyan),
            Cell::new("Similarity").fg(Color::Cyan),
            Cell::new("Evidence").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Scope", "Name A", "Name B", "Similarity", "Evidence"]);
    }

    for scope_matches in &report.scopes {
        let scope_str = scope_matches.scope.display_relative_to(&cwd);

        for m in &scope_matches.matches {
            let percent = format!("{:.0}%", m.percent());

            if use_color {
                table.add_row(vec![
                    Cell::new(&scope_str),
                    Cell::new(&m.first.text).fg(Color::Green),
                    Cell::new(&m.second.text).fg(Color::Green),
                    Cell::new(&percent).fg(Color::Yellow),
                    Cell::new(&m.evidence),
                ]);
            } else {
                table.add_row(vec![
                    &scope_str,
                    &m.first.text,
                    &m.second.text,
                    &percent,
                    &m.evidence,
                ]);
            }
        }
    }

    // Add footer with totals
    let stats = &report.stats;
    if use_color {
        table.add_row(vec![
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
        ]);
        table.add_row(vec![
            Cell::new("TOTALS").fg(Color::Cyan),
            Cell::new(format!("{} files", stats.files_scanned)).fg(Color::White),
            Cell::new(format!("{} scopes", stats.scopes_with_matches)).fg(Color::White),
            Cell::new(stats.total_matches.to_string()).fg(Color::Yellow),
            Cell::new(format!("{} names", stats.names_collected)).fg(Color::White),
        ]);
    } else {
        table.add_row(vec![
            "─────────",
            "─────────",
            "─────────",
            "─────────",
            "─────────",
        ]);
        table.add_row(vec![
            "TOTALS",
            &format!("{} files", stats.files_scanned),
            &format!("{} scopes", stats.scopes_with_matches),
            &stats.total_matches.to_string(),
            &format!("{} names", stats.names_collected),
        ]);
    }

    table.to_string()
}
