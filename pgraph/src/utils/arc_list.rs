/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::io::BufRead;
use thiserror::Error;

use crate::graphs::bidi_csr_graph::BidiCsrGraph;

/// Errors that can happen while parsing an arc list.
#[derive(Error, Debug)]
pub enum ArcParseError {
    #[error("Line {line}: missing column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error("Line {line}: could not parse node identifier {value:?}")]
    InvalidNode {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Line {line}: node identifier {value} is too large")]
    NodeTooLarge { line: usize, value: usize },
    #[error("Could not read arc list")]
    Io(#[from] std::io::Error),
}

/// Reads a textual list of arcs, one per line.
///
/// Each line contains a number of columns separated by
/// [`separator`](Self::separator); the source and target of the arc are read
/// from the columns [`source_column`](Self::source_column) and
/// [`target_column`](Self::target_column). Blank lines and lines starting with
/// the [comment symbol](Self::comment_symbol) are ignored, and do not count
/// towards [`lines_to_skip`](Self::lines_to_skip) or
/// [`max_arcs`](Self::max_arcs).
///
/// # Examples
///
/// ```
/// use pgraph::prelude::*;
///
/// let text = "# a triangle\n0\t1\n1\t2\n2\t0\n";
/// let arcs = ArcListReader::default().read(text.as_bytes()).unwrap();
/// assert_eq!(arcs, vec![(0, 1), (1, 2), (2, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct ArcListReader {
    pub comment_symbol: char,
    pub separator: char,
    pub source_column: usize,
    pub target_column: usize,
    pub lines_to_skip: usize,
    pub max_arcs: Option<usize>,
}

impl Default for ArcListReader {
    fn default() -> Self {
        Self {
            comment_symbol: '#',
            separator: '\t',
            source_column: 0,
            target_column: 1,
            lines_to_skip: 0,
            max_arcs: None,
        }
    }
}

impl ArcListReader {
    fn parse_column(
        line_num: usize,
        line: &str,
        separator: char,
        column: usize,
    ) -> Result<usize, ArcParseError> {
        let value = line
            .split(separator)
            .nth(column)
            .ok_or(ArcParseError::MissingColumn {
                line: line_num,
                column,
            })?
            .trim();
        let node = value
            .parse::<usize>()
            .map_err(|source| ArcParseError::InvalidNode {
                line: line_num,
                value: value.to_owned(),
                source,
            })?;
        // The number of nodes must be representable
        if node == usize::MAX {
            return Err(ArcParseError::NodeTooLarge {
                line: line_num,
                value: node,
            });
        }
        Ok(node)
    }

    /// Reads all arcs from the given reader.
    pub fn read(&self, reader: impl BufRead) -> Result<Vec<(usize, usize)>, ArcParseError> {
        let mut arcs = Vec::new();
        let mut skipped = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim_end_matches(['\r', '\n']);
            if trimmed.trim().is_empty() || trimmed.starts_with(self.comment_symbol) {
                continue;
            }
            if skipped < self.lines_to_skip {
                skipped += 1;
                continue;
            }
            if self.max_arcs.is_some_and(|max| arcs.len() >= max) {
                break;
            }
            let src = Self::parse_column(idx + 1, trimmed, self.separator, self.source_column)?;
            let dst = Self::parse_column(idx + 1, trimmed, self.separator, self.target_column)?;
            arcs.push((src, dst));
        }
        log::debug!("Read {} arcs", arcs.len());
        Ok(arcs)
    }

    /// Reads all arcs from the given reader and builds a [`BidiCsrGraph`].
    ///
    /// See [`BidiCsrGraph::from_arcs`] for the meaning of `num_nodes`.
    pub fn read_graph(
        &self,
        reader: impl BufRead,
        num_nodes: Option<usize>,
    ) -> Result<BidiCsrGraph, ArcParseError> {
        Ok(BidiCsrGraph::from_arcs(num_nodes, self.read(reader)?))
    }
}
