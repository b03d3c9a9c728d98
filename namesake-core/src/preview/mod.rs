mod matches;
mod summary;
mod table;

pub use matches::render_matches;
pub use summary::render_summary;
pub use table::render_table;

use crate::report::Report;
use anyhow::Result;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Matches,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "matches" => Ok(Self::Matches),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color, // Honor explicit color request
        None => is_terminal(),                  // Auto-detect only when not specified
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render the report in the specified format
pub fn render_report(report: &Report, format: Preview, use_color: Option<bool>) -> String {
    render_report_with_fixed_width(report, format, use_color, false)
}

pub fn render_report_with_fixed_width(
    report: &Report,
    format: Preview,
    use_color: Option<bool>,
    fixed_width: bool,
) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_table(report, use_color, fixed_width),
        Preview::Matches => render_matches(report, use_color),
        Preview::Summary => render_summary(report),
        Preview::None => String::new(), // Return empty string for no preview
    }
}

/// Write report preview to stdout
pub fn write_preview(report: &Report, format: Preview, use_color: Option<bool>) -> Result<()> {
    let output = render_report(report, format, use_color);
    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
