use crate::harvest::HarvestOptions;
use crate::matcher::NameMatch;
use crate::scope::ScopeId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// All matches found in one scope. Scopes without matches never appear in a
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeMatches {
    pub scope: ScopeId,
    pub matches: Vec<NameMatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub files_scanned: usize,
    pub names_collected: usize,
    pub scopes_with_matches: usize,
    pub total_matches: usize,
}

/// Serializable artifact of one check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub created_at: String,
    pub roots: Vec<PathBuf>,
    pub threshold: f64,
    pub scopes: Vec<ScopeMatches>,
    pub stats: Stats,
    pub version: String,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.scopes.is_empty()
    }
}

pub fn generate_report_id(roots: &[PathBuf], threshold: f64, options: &HarvestOptions) -> String {
    let mut hasher = Sha256::new();
    for root in roots {
        hasher.update(root.to_string_lossy().as_bytes());
    }
    hasher.update(threshold.to_string().as_bytes());
    hasher.update(format!("{:?}", options).as_bytes());
    hasher.update(
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
            .to_string()
            .as_bytes(),
    );
    format!("{:x}", hasher.finalize())[..16].to_string()
}

pub fn created_at_now() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        .to_string()
}

pub fn write_report(report: &Report, path: &Path) -> Result<(), anyhow::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
