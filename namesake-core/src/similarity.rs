/// Default similarity threshold: pairs scoring strictly above this are
/// reported. Valid range is (0.0, 1.0].
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Normalized similarity of two strings in [0.0, 1.0].
///
/// The score is the longest-common-subsequence length divided by the longer
/// string's length, so it is symmetric in its arguments. Either side empty
/// returns 0.0. Comparison is over Unicode scalar values.
///
/// Runs the DP over two rolling rows: O(S*L) time, O(L) space, where L and S
/// are the longer and shorter lengths.
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (long, short) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    let len_long = long.len();
    let len_short = short.len();

    if len_long == 0 || len_short == 0 {
        return 0.0;
    }

    // Base row is all zeros; next[0] stays 0 for every row.
    let mut previous = vec![0u32; len_long + 1];
    let mut next = vec![0u32; len_long + 1];

    for i in 0..len_short {
        for k in 1..=len_long {
            next[k] = if long[k - 1] == short[i] {
                previous[k - 1] + 1
            } else {
                previous[k].max(next[k - 1])
            };
        }
        std::mem::swap(&mut previous, &mut next);
    }

    f64::from(previous[len_long]) / len_long as f64
}

/// Cheap upper-bound test: can two names of these lengths possibly score at
/// or above `threshold`?
///
/// The LCS length is bounded by the shorter length, so the score can never
/// exceed `min/max`. Returns `false` when either length is zero. Never
/// rejects a pair that exact scoring would accept.
pub fn may_exceed_threshold(len_a: usize, len_b: usize, threshold: f64) -> bool {
    if len_a == 0 || len_b == 0 {
        return false;
    }
    let (min, max) = if len_a <= len_b {
        (len_a, len_b)
    } else {
        (len_b, len_a)
    };
    min as f64 / max as f64 >= threshold
}
