use anyhow::Result;
use namesake_core::{check_operation, OutputFormatter, Preview};
use std::path::PathBuf;

use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn handle_check(
    paths: Vec<PathBuf>,
    threshold: Option<f64>,
    min_length: Option<usize>,
    include: Vec<String>,
    exclude: Vec<String>,
    unrestricted: u8,
    report_out: Option<PathBuf>,
    preview: Option<Preview>,
    fixed_table_width: bool,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<i32> {
    // Validate that --fixed-table-width is only used with table preview
    if fixed_table_width && preview.is_some() && preview != Some(Preview::Table) {
        return Err(anyhow::anyhow!(
            "--fixed-table-width can only be used with --preview table"
        ));
    }

    // Handle quiet mode - overrides preview to none unless output is json
    let effective_preview = if quiet && output != OutputFormat::Json {
        None
    } else {
        preview
    };

    // For JSON output, don't generate preview
    let preview_format = if output == OutputFormat::Json {
        None
    } else {
        effective_preview.map(|p| match p {
            Preview::Table => "table".to_string(),
            Preview::Matches => "matches".to_string(),
            Preview::Summary => "summary".to_string(),
            Preview::None => "none".to_string(),
        })
    };

    // Call the core operation
    let (result, preview_content) = check_operation(
        paths,
        threshold,
        min_length,
        include,
        exclude,
        unrestricted,
        report_out,
        preview_format.as_ref(),
        fixed_table_width,
        use_color,
        None, // working_dir
    )?;

    // Handle output based on format
    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                // Print preview content if available
                if let Some(preview) = preview_content {
                    println!("{}", preview);
                }
                // Print summary
                print!("{}", result.format_summary());
            }
        },
    }

    // Similar pairs found is exit code 1, even under --quiet
    Ok(if result.total_matches > 0 { 1 } else { 0 })
}
