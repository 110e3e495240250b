/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Ranking algorithms.

pub mod numeric;
pub use numeric::{AtomicRank, Rank};

pub mod pagerank;
pub use pagerank::{PageRank, RankState};
