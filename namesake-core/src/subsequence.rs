/// Reconstruct one longest common subsequence of `a` and `b`.
///
/// Evidence only: the scorer decides accept/reject, this just shows the
/// reader what the two names share. Either side empty returns the empty
/// string. When several subsequences tie for longest, the traceback's fixed
/// priority (up, then left, then diagonal emit) picks the same one every
/// time, so output is reproducible.
///
/// Unlike the scorer this keeps the full (rows+1) x (cols+1) table, `a` in
/// the column role and `b` in the row role; emitted characters come from
/// `b`. The output buffer is sized to the computed LCS length.
pub fn longest_common_subsequence(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let cols = a_chars.len();
    let rows = b_chars.len();

    if cols == 0 || rows == 0 {
        return String::new();
    }

    let mut align = vec![vec![0usize; cols + 1]; rows + 1];
    for r in 1..=rows {
        for c in 1..=cols {
            align[r][c] = if b_chars[r - 1] == a_chars[c - 1] {
                align[r - 1][c - 1] + 1
            } else {
                align[r - 1][c].max(align[r][c - 1])
            };
        }
    }

    let mut len = align[rows][cols];
    let mut lcs = vec!['\0'; len];
    let mut r = rows;
    let mut c = cols;

    while len > 0 && r > 0 && c > 0 {
        if align[r - 1][c] == len {
            r -= 1;
        } else if align[r][c - 1] == len {
            c -= 1;
        } else {
            // align[r-1][c-1] == len - 1 here
            r -= 1;
            c -= 1;
            lcs[len - 1] = b_chars[r];
            len -= 1;
        }
    }

    lcs.into_iter().collect()
}
