/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::Range;

/// Splits the nodes [0 . . `n`) into `num_workers` contiguous ranges.
///
/// Boundaries are computed by advancing a floating-point cursor by `n` /
/// `num_workers` at each step and truncating it, so ranges have usually the
/// same size up to one node, but the rounding of the cumulative cursor may
/// shift a boundary by one node with respect to an exact division. The
/// boundaries are part of the observable behavior (they determine per-worker
/// timings and counts), so they must not be computed in closed form.
///
/// The last range always ends at `n`.
///
/// `num_workers` must be positive.
///
/// # Examples
///
/// ```
/// use pgraph_algo::utils::partition;
///
/// assert_eq!(partition(10, 3), vec![0..3, 3..6, 6..10]);
/// assert_eq!(partition(2, 4), vec![0..0, 0..1, 1..1, 1..2]);
/// ```
pub fn partition(n: usize, num_workers: usize) -> Vec<Range<usize>> {
    debug_assert!(num_workers > 0, "The number of workers must be positive");
    let num_nodes = n as f64;
    let step = num_nodes / num_workers as f64;
    let mut cursor = 0.0_f64;

    (0..num_workers)
        .map(|i| {
            let candidate = cursor + step;
            let finish = if candidate < num_nodes {
                candidate
            } else {
                num_nodes
            };
            let start = cursor.trunc() as usize;
            // Rounding errors on the cursor must not leave nodes uncovered
            let end = if i == num_workers - 1 {
                n
            } else {
                finish.trunc() as usize
            };
            cursor = finish;
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_worker() {
        assert_eq!(partition(0, 1), vec![0..0]);
        assert_eq!(partition(17, 1), vec![0..17]);
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(partition(0, 4), vec![0..0; 4]);
    }

    #[test]
    fn test_fractional_steps() {
        // Steps of 7 / 3 = 2.33...: boundaries at 2.33, 4.66, 7
        assert_eq!(partition(7, 3), vec![0..2, 2..4, 4..7]);
        // Steps of 2.5
        assert_eq!(partition(5, 2), vec![0..2, 2..5]);
        assert_eq!(partition(10, 4), vec![0..2, 2..5, 5..7, 7..10]);
    }

    #[test]
    fn test_more_workers_than_nodes() {
        let ranges = partition(3, 8);
        assert_eq!(ranges.len(), 8);
        assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), 3);
        assert_eq!(ranges.last().unwrap().end, 3);
    }
}
