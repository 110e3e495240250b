/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.

pub mod bidi_csr_graph;
pub mod random;
pub mod vec_graph;

pub mod prelude {
    pub use super::bidi_csr_graph::BidiCsrGraph;
    pub use super::random::ErdosRenyi;
    pub use super::vec_graph::VecGraph;
}
