#![allow(unused)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod harvest;
pub mod language;
pub mod matcher;
pub mod operations;
pub mod output;
pub mod preview;
pub mod report;
pub mod scope;
pub mod similarity;
pub mod subsequence;

pub use config::Config;
pub use harvest::{harvest_file, harvest_tree, FileHarvest, HarvestOptions, TreeHarvest};
pub use language::Language;
pub use matcher::{match_scope, NameMatch};
pub use operations::{check_operation, compare_operation};
pub use output::{
    CheckResult, CompareResult, OutputFormat, OutputFormatter, ScopeSummary, VersionResult,
};
pub use preview::{render_report, write_preview, Preview};
pub use report::{write_report, Report, ScopeMatches, Stats};
pub use scope::{Name, NameKind, NameOrigin, ScopeId, ScopeNames};
pub use similarity::{may_exceed_threshold, similarity_score, DEFAULT_THRESHOLD};
pub use subsequence::longest_common_subsequence;

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Configure a `WalkBuilder` based on the unrestricted level in `HarvestOptions`.
///
/// This matches ripgrep's behavior:
/// - Level 0 (default): Respect all ignore files, skip hidden files
/// - Level 1 (-u): Don't respect .gitignore, but respect other ignore files, skip hidden
/// - Level 2 (-uu): Don't respect any ignore files, include hidden files
/// - Level 3 (-uuu): Same as level 2, plus treat binary files as text (handled by caller)
pub fn configure_walker(roots: &[PathBuf], options: &harvest::HarvestOptions) -> WalkBuilder {
    let mut builder = if roots.is_empty() {
        WalkBuilder::new(".")
    } else {
        let mut b = WalkBuilder::new(&roots[0]);
        for root in roots.iter().skip(1) {
            b.add(root);
        }
        b
    };

    match options.unrestricted_level {
        0 => {
            // Default: respect all ignore files, skip hidden
            builder
                .git_ignore(true)
                .git_global(true)
                .git_exclude(true)
                .ignore(true)
                .parents(true)
                .hidden(true) // true = skip hidden files
                .add_custom_ignore_filename(".gitignore") // Also treat .gitignore as custom ignore file
                .add_custom_ignore_filename(".rgignore")
                .add_custom_ignore_filename(".nsignore");
        },
        1 => {
            // -u: Don't respect .gitignore, but respect others, skip hidden
            builder
                .git_ignore(false) // Don't respect .gitignore
                .git_global(true) // Still respect global gitignore
                .git_exclude(true) // Still respect .git/info/exclude
                .ignore(true) // Still respect .ignore/.rgignore/.nsignore
                .parents(true) // Still check parent dirs
                .hidden(true) // Still skip hidden files
                .add_custom_ignore_filename(".rgignore")
                .add_custom_ignore_filename(".nsignore");
        },
        _ => {
            // -uu/-uuu: Don't respect any ignore files, show hidden
            // Level 3 also treats binary as text, but that's handled by the harvester
            builder
                .git_ignore(false)
                .git_global(false)
                .git_exclude(false)
                .ignore(false)
                .parents(false)
                .hidden(false); // false = include hidden files
        },
    }

    builder
}
