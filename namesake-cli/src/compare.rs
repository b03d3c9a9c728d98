use anyhow::Result;
use namesake_core::{compare_operation, OutputFormatter};

use crate::OutputFormat;

pub fn handle_compare(name_a: &str, name_b: &str, output: OutputFormat) -> Result<i32> {
    let result = compare_operation(name_a, name_b)?;
    print!("{}", result.format(output.into()));
    Ok(0)
}
