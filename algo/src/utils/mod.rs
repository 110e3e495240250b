/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Utilities.

mod partition;
pub use partition::*;

use std::ops::Range;
use std::time::Duration;

/// Timing information about a worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerStats {
    /// The index of the worker, from zero.
    pub id: usize,
    /// The range of nodes assigned to the worker.
    pub range: Range<usize>,
    /// The wall-clock time spent by the worker in its loop.
    pub elapsed: Duration,
}
