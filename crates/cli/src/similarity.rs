// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized edit-distance similarity.

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

/// Case-insensitive similarity in `[0, 1]`.
///
/// `(max_len - distance) / max_len` over characters, where `distance` is
/// the Levenshtein distance. Two empty strings are fully similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a == b {
        return 1.0;
    }

    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a, &b);
    (max_len - distance) as f64 / max_len as f64
}

/// Classic edit distance: insertions, deletions and substitutions cost 1.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j].min(table[i][j - 1]).min(table[i - 1][j - 1])
            };
        }
    }

    table[a.len()][b.len()]
}
