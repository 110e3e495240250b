/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::{Condvar, Mutex, PoisonError};

#[derive(Debug, Default)]
struct BarrierState {
    /// Number of participants that arrived in the current generation.
    count: usize,
    /// Incremented each time all participants have arrived.
    generation: u64,
}

/// A reusable counting barrier.
///
/// A barrier for *n* participants blocks each call to [`wait`](Self::wait)
/// until *n* calls have been made; then all participants are released and the
/// barrier is ready for the next generation, without reconstruction.
///
/// Calling [`wait`](Self::wait) fewer or more than *n* times in a generation
/// is a bug of the caller and leads to a deadlock.
///
/// # Examples
///
/// ```
/// use pgraph_algo::sync::Barrier;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let barrier = Barrier::new(4);
/// let arrived = AtomicUsize::new(0);
/// std::thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| {
///             for round in 1..=3 {
///                 arrived.fetch_add(1, Ordering::Relaxed);
///                 barrier.wait();
///                 assert!(arrived.load(Ordering::Relaxed) >= 4 * round);
///                 barrier.wait();
///             }
///         });
///     }
/// });
/// ```
#[derive(Debug)]
pub struct Barrier {
    num_participants: usize,
    state: Mutex<BarrierState>,
    released: Condvar,
}

impl Barrier {
    /// Creates a new barrier for the given number of participants.
    pub fn new(num_participants: usize) -> Self {
        Self {
            num_participants,
            state: Mutex::new(BarrierState::default()),
            released: Condvar::new(),
        }
    }

    /// Returns the number of participants of each generation.
    pub fn num_participants(&self) -> usize {
        self.num_participants
    }

    /// Blocks the current thread until all participants of the current
    /// generation have called this method.
    pub fn wait(&self) {
        // The state is a pair of counters, so it is consistent even if
        // another participant panicked while holding the lock.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let generation = state.generation;
        state.count += 1;
        if state.count < self.num_participants {
            let _state = self
                .released
                .wait_while(state, |state| state.generation == generation)
                .unwrap_or_else(PoisonError::into_inner);
        } else {
            state.count = 0;
            state.generation = state.generation.wrapping_add(1);
            self.released.notify_all();
        }
    }
}
