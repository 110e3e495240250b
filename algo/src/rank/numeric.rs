/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Numeric representations of rank values.
//!
//! [`PageRank`](super::PageRank) is generic over a [`Rank`] type, which
//! provides the initial rank, the rank formula, and an atomic cell type
//! supporting lock-free accumulation. Three representations are available:
//!
//! - `f32` and `f64`: the initial rank is 1 and the rank formula is
//!   1 − *d* + *d* · *x*, with damping factor *d* = 0.85, always evaluated
//!   in double precision;
//! - `i64`: a fixed-point representation in which the initial rank is 100000
//!   and the rank formula is 15000 + 5*x* / 6, that is, a damping factor
//!   of 5 / 6 on the fixed-point scale.
//!
//! Each representation also provides a [magnitude of change](Rank::change)
//! and a reference [threshold](Rank::EPSILON); neither is used to stop the
//! computation, which always performs a fixed number of iterations.

use crossbeam_utils::Backoff;
use std::fmt::{Debug, Display};
use std::ops::Add;
use std::sync::atomic::{AtomicI64, AtomicU32, AtomicU64, Ordering};

/// An atomic cell holding a rank value.
///
/// Loads and stores are relaxed: ordering between the phases of a
/// computation is provided by the [barrier](crate::sync::Barrier).
pub trait AtomicRank<R>: Send + Sync {
    /// Creates a new cell.
    fn new(value: R) -> Self;
    /// Returns the current value.
    fn load(&self) -> R;
    /// Replaces the current value.
    fn store(&self, value: R);
    /// Adds `delta` to the current value, returning the previous value.
    ///
    /// The sum is installed with a compare-and-swap retry loop, so no
    /// concurrent contribution can be lost.
    fn fetch_add(&self, delta: R) -> R;
}

/// A numeric representation of rank values.
pub trait Rank:
    Copy + PartialEq + PartialOrd + Add<Output = Self> + Debug + Display + Send + Sync + 'static
{
    /// The atomic cell type used to share values among threads.
    type Atomic: AtomicRank<Self>;

    /// A short name for the representation, used in logs.
    const NAME: &'static str;
    /// The rank of every node before the first iteration.
    const INIT: Self;
    /// The additive identity.
    const ZERO: Self;
    /// A reference threshold for the [change](Self::change) between
    /// successive ranks.
    const EPSILON: Self;

    /// Applies the rank formula to the sum `x` of the contributions received
    /// by a node.
    fn page_rank(x: Self) -> Self;

    /// Returns the magnitude of the change between `x` and `y`.
    fn change(x: Self, y: Self) -> Self;

    /// Returns the contribution sent along each arc of a node with the given
    /// (positive) outdegree.
    fn share(self, outdegree: usize) -> Self;

    /// Converts the value to an `f64`.
    fn to_f64(self) -> f64;
}

impl AtomicRank<i64> for AtomicI64 {
    #[inline(always)]
    fn new(value: i64) -> Self {
        AtomicI64::new(value)
    }

    #[inline(always)]
    fn load(&self) -> i64 {
        AtomicI64::load(self, Ordering::Relaxed)
    }

    #[inline(always)]
    fn store(&self, value: i64) {
        AtomicI64::store(self, value, Ordering::Relaxed)
    }

    fn fetch_add(&self, delta: i64) -> i64 {
        let backoff = Backoff::new();
        let mut current = AtomicI64::load(self, Ordering::Relaxed);
        loop {
            match self.compare_exchange_weak(
                current,
                current.wrapping_add(delta),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(previous) => return previous,
                Err(actual) => {
                    current = actual;
                    backoff.spin();
                }
            }
        }
    }
}

impl Rank for i64 {
    type Atomic = AtomicI64;

    const NAME: &'static str = "INT";
    const INIT: Self = 100_000;
    const ZERO: Self = 0;
    const EPSILON: Self = 1000;

    #[inline(always)]
    fn page_rank(x: Self) -> Self {
        15000 + (5 * x) / 6
    }

    #[inline(always)]
    fn change(x: Self, y: Self) -> Self {
        (x - y).abs()
    }

    #[inline(always)]
    fn share(self, outdegree: usize) -> Self {
        self / outdegree as i64
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// The damping factor of floating-point representations.
pub const DAMPING: f64 = 0.85;

macro_rules! impl_float_rank {
    ($float:ty, $cell:ident, $bits:ty, $name:literal) => {
        /// An atomic cell storing the bit pattern of a floating-point rank.
        #[derive(Debug, Default)]
        #[repr(transparent)]
        pub struct $cell($bits);

        impl AtomicRank<$float> for $cell {
            #[inline(always)]
            fn new(value: $float) -> Self {
                Self(<$bits>::new(value.to_bits()))
            }

            #[inline(always)]
            fn load(&self) -> $float {
                <$float>::from_bits(self.0.load(Ordering::Relaxed))
            }

            #[inline(always)]
            fn store(&self, value: $float) {
                self.0.store(value.to_bits(), Ordering::Relaxed)
            }

            fn fetch_add(&self, delta: $float) -> $float {
                let backoff = Backoff::new();
                let mut current = self.0.load(Ordering::Relaxed);
                loop {
                    let sum = <$float>::from_bits(current) + delta;
                    match self.0.compare_exchange_weak(
                        current,
                        sum.to_bits(),
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                    ) {
                        Ok(previous) => return <$float>::from_bits(previous),
                        Err(actual) => {
                            current = actual;
                            backoff.spin();
                        }
                    }
                }
            }
        }

        impl Rank for $float {
            type Atomic = $cell;

            const NAME: &'static str = $name;
            const INIT: Self = 1.0;
            const ZERO: Self = 0.0;
            const EPSILON: Self = 0.01;

            #[inline(always)]
            fn page_rank(x: Self) -> Self {
                // Computed in double precision and rounded once
                (1.0 - DAMPING + DAMPING * x.to_f64()) as $float
            }

            #[inline(always)]
            fn change(x: Self, y: Self) -> Self {
                (x - y).abs()
            }

            #[inline(always)]
            fn share(self, outdegree: usize) -> Self {
                self / outdegree as $float
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float_rank!(f32, AtomicF32, AtomicU32, "FLOAT");
impl_float_rank!(f64, AtomicF64, AtomicU64, "DOUBLE");
