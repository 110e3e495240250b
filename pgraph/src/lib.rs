/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Read-only graph views for the `pgraph` analytics kernel.
//!
//! The kernel in `pgraph-algo` needs, for every node, random access to a
//! _sorted_ list of successors and, for triangle counting, to a sorted list of
//! predecessors. This crate provides the [traits](traits) describing such
//! views and a few [implementations](graphs):
//!
//! - [`VecGraph`](graphs::vec_graph::VecGraph), a mutable vector-of-vectors
//!   graph that is handy for building small graphs by hand;
//! - [`BidiCsrGraph`](graphs::bidi_csr_graph::BidiCsrGraph), an immutable
//!   compressed-sparse-row graph storing both directions;
//! - [`ErdosRenyi`](graphs::random::ErdosRenyi), a seeded random arc source.
//!
//! Arc lists in textual form can be parsed with
//! [`ArcListReader`](utils::ArcListReader).

#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod graphs;
pub mod traits;
pub mod utils;

pub mod prelude {
    pub use crate::graphs::prelude::*;
    pub use crate::traits::*;
    pub use crate::utils::*;
}
