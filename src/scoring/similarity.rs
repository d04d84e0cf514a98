//! Normalized sequence-matching ratio (Ratcliff/Obershelp).
//!
//! The ratio is `2 * M / T`, where `T` is the total character count of both
//! strings and `M` is the number of characters covered by matching blocks. Blocks
//! are found by taking the longest common substring, then recursing on the
//! unmatched text to its left and to its right.
//!
//! # Symmetry
//!
//! Block selection breaks ties by position, so the raw algorithm can give slightly
//! different results for `(a, b)` and `(b, a)`. Arguments are put in lexicographic
//! order first, which makes [`similarity`] symmetric.
//!
//! # Conventions
//!
//! - Comparison is case-sensitive; callers lower-case first.
//! - Two empty strings score `0.0`, as does empty vs non-empty.
//! - Characters (Unicode scalar values) are compared, not bytes.

/// Returns the similarity ratio of `a` and `b` in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();

    let total = first.len() + second.len();
    if total == 0 {
        return 0.0;
    }

    let matched = matched_chars(&first, &second);
    (2.0 * matched as f64) / total as f64
}

/// Sums the sizes of all matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_block(a, b, alo, ahi, blo, bhi);
        if block.size == 0 {
            continue;
        }
        matched += block.size;

        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        let a_end = block.a_start + block.size;
        let b_end = block.b_start + block.size;
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
    }

    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the block that ends earliest in `a`, then earliest in `b`.
fn longest_block(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a_start: alo,
        b_start: blo,
        size: 0,
    };

    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo;
            curr[k + 1] = if a[i] == b[j] { prev[k] + 1 } else { 0 };

            let run = curr[k + 1];
            if run > best.size {
                best = Block {
                    a_start: i + 1 - run,
                    b_start: j + 1 - run,
                    size: run,
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
