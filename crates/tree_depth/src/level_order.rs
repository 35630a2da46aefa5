//! Building trees from level-order listings.

use crate::{Tree, TreeNode};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// A token in a level-order listing that is neither an integer nor `null`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invalid tree value {token:?} at position {index}")]
pub struct ParseTreeError {
    /// The offending token, trimmed.
    pub token: String,
    /// Zero-based index of the token in the listing.
    pub index: usize,
}

impl std::error::Error for ParseTreeError {}

/// Parses a comma separated level-order listing such as
/// `[3,9,20,null,null,15,7]`.
///
/// Surrounding brackets are optional. `null` (any case) and empty tokens
/// mark a missing child. An empty listing yields an empty vector.
#[instrument(skip(input), fields(len = input.len()))]
pub fn parse_level_order(input: &str) -> Result<Vec<Option<i64>>, ParseTreeError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(index, raw)| {
            let token = raw.trim();
            if token.is_empty() || token.eq_ignore_ascii_case("null") {
                Ok(None)
            } else {
                token.parse::<i64>().map(Some).map_err(|_| ParseTreeError {
                    token: token.to_string(),
                    index,
                })
            }
        })
        .collect()
}

/// Builds a tree from level-order values, where `None` is a missing child.
///
/// Children are assigned only to present nodes, two listing entries per
/// node in breadth-first order. A missing root gives an empty tree;
/// trailing entries with no parent are ignored.
///
/// Every child sits later in the listing than its parent, so nodes are
/// assembled from the back of the listing without recursion.
pub fn from_level_order<T>(values: Vec<Option<T>>) -> Tree<T> {
    if values.first().is_none_or(Option::is_none) {
        return None;
    }

    let mut children: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); values.len()];
    let mut queue = VecDeque::from([0usize]);
    let mut next = 1;
    while let Some(parent) = queue.pop_front() {
        if next >= values.len() {
            break;
        }
        if values[next].is_some() {
            children[parent].0 = Some(next);
            queue.push_back(next);
        }
        next += 1;
        if next >= values.len() {
            break;
        }
        if values[next].is_some() {
            children[parent].1 = Some(next);
            queue.push_back(next);
        }
        next += 1;
    }
    debug!(entries = values.len(), "Built child index table");

    let mut nodes: Vec<Tree<T>> = (0..values.len()).map(|_| None).collect();
    for (idx, value) in values.into_iter().enumerate().rev() {
        let Some(value) = value else { continue };
        let (left_idx, right_idx) = children[idx];
        let left = left_idx.and_then(|i| nodes[i].take());
        let right = right_idx.and_then(|i| nodes[i].take());
        nodes[idx] = Some(TreeNode::with_children(value, left, right));
    }
    nodes.into_iter().next().flatten()
}
