use anyhow::{Context, Result};
use clap::Parser;
use namesake_core::{Config, OutputFormatter, Preview, VersionResult};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use std::str::FromStr;

mod check;
mod cli;
mod compare;

// Import from our cli module
use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    // Load config to get defaults
    let config = Config::load(Path::new(".")).unwrap_or_default();
    let use_color = resolve_use_color(cli.no_color, &config);

    // CLI -u flags override the config default when given at all
    let unrestricted = if cli.unrestricted > 0 {
        cli.unrestricted
    } else {
        config.defaults.unrestricted_level
    };

    let result = match cli.command {
        Commands::Check {
            paths,
            threshold,
            min_length,
            include,
            exclude,
            preview,
            fixed_table_width,
            report_out,
            output,
            quiet,
        } => {
            // Use preview format from CLI arg or config default (unless JSON output)
            let format = if output == OutputFormat::Json {
                None // No preview for JSON output
            } else {
                Some(preview.map(std::convert::Into::into).unwrap_or_else(|| {
                    Preview::from_str(&config.defaults.preview_format).unwrap_or(Preview::Matches)
                }))
            };

            check::handle_check(
                paths,
                threshold,
                min_length,
                include,
                exclude,
                unrestricted,
                report_out,
                format,
                fixed_table_width,
                use_color,
                output,
                quiet,
            )
        },

        Commands::Compare {
            name_a,
            name_b,
            output,
        } => compare::handle_compare(&name_a, &name_b, output),

        Commands::Completions { shell, out_dir } => handle_completions(shell, out_dir.as_deref()),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}

/// Explicit --no-color wins, then the config default, then terminal detection
fn resolve_use_color(no_color: bool, config: &Config) -> bool {
    if no_color {
        return false;
    }
    config
        .defaults
        .use_color
        .unwrap_or_else(|| io::stdout().is_terminal())
}

fn handle_completions(shell: clap_complete::Shell, out_dir: Option<&Path>) -> Result<i32> {
    use clap::CommandFactory;

    let mut cmd = <Cli as CommandFactory>::command();
    match out_dir {
        Some(dir) => generate_completions(shell, &mut cmd, "namesake", dir)?,
        None => clap_complete::generate(shell, &mut cmd, "namesake", &mut io::stdout()),
    }
    Ok(0)
}

// Generate shell completions into a directory
pub fn generate_completions<G: clap_complete::Generator>(
    gen: G,
    cmd: &mut clap::Command,
    name: &str,
    out_dir: &Path,
) -> Result<()> {
    use clap_complete::generate_to;
    use std::fs;

    fs::create_dir_all(out_dir)?;
    let path = generate_to(gen, cmd, name, out_dir)?;
    println!("Generated completion file: {}", path.display());
    Ok(())
}

fn handle_version(output: OutputFormat) -> Result<i32> {
    let version_result = VersionResult {
        name: "namesake".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(0)
}
