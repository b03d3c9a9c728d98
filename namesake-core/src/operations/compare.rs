use crate::output::CompareResult;
use crate::similarity::similarity_score;
use crate::subsequence::longest_common_subsequence;
use anyhow::Result;

/// Compare operation - score one pair of names without touching the filesystem
pub fn compare_operation(first: &str, second: &str) -> Result<CompareResult> {
    Ok(CompareResult {
        first: first.to_string(),
        second: second.to_string(),
        score: similarity_score(first, second),
        evidence: longest_common_subsequence(first, second),
    })
}
