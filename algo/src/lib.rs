/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel graph-analytics kernel.
//!
//! Both algorithms in this crate split the nodes of a graph into contiguous
//! ranges of (nearly) equal size using a [static partition](utils::partition),
//! and assign each range to an operating-system thread for the whole
//! computation. There is no work stealing and no dynamic load balancing.
//!
//! - [`PageRank`](rank::PageRank) propagates ranks push-style into shared
//!   atomic cells and separates its phases with a reusable
//!   [`Barrier`](sync::Barrier);
//! - [`TriangleCount`](triangles::TriangleCount) intersects sorted neighbor
//!   lists, accumulating into counters private to each thread.

#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod rank;
pub mod sync;
pub mod triangles;
pub mod utils;

pub mod prelude {
    pub use crate::rank::{PageRank, Rank, RankState};
    pub use crate::sync::Barrier;
    pub use crate::triangles::{TriangleCount, WorkerCount};
    pub use crate::utils::{WorkerStats, partition};
}
