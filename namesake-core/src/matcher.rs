use crate::scope::{Name, ScopeNames};
use crate::similarity::{may_exceed_threshold, similarity_score};
use crate::subsequence::longest_common_subsequence;
use serde::{Deserialize, Serialize};

/// One reported pair: two names in the same scope whose similarity strictly
/// exceeds the threshold, plus the shared subsequence shown as evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameMatch {
    pub first: Name,
    pub second: Name,
    pub score: f64,
    pub evidence: String,
}

impl NameMatch {
    /// Score as a percentage, for display.
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Compare every unordered pair of names in one scope.
///
/// Pairs are enumerated upper-triangular (i < j in collection order), each
/// exactly once. The length-ratio bound runs before the full alignment so
/// hopeless pairs never pay the O(S*L) cost. A pair is reported only when
/// its score is strictly greater than `threshold`; output preserves
/// enumeration order. Zero or one name yields an empty result.
pub fn match_scope(names: &ScopeNames, threshold: f64) -> Vec<NameMatch> {
    let lengths: Vec<usize> = names.names.iter().map(Name::char_len).collect();
    let mut matches = Vec::new();

    for i in 0..names.names.len() {
        for j in (i + 1)..names.names.len() {
            if !may_exceed_threshold(lengths[i], lengths[j], threshold) {
                continue;
            }

            let first = &names.names[i];
            let second = &names.names[j];
            let score = similarity_score(&first.text, &second.text);
            if score > threshold {
                matches.push(NameMatch {
                    first: first.clone(),
                    second: second.clone(),
                    score,
                    evidence: longest_common_subsequence(&first.text, &second.text),
                });
            }
        }
    }

    matches
}
