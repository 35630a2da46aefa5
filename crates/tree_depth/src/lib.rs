//! Binary tree depth.
//!
//! A minimal owned binary tree and the classic recursive depth function,
//! plus construction from level-order listings like
//! `3,9,20,null,null,15,7`.
//!
//! ```
//! use tree_depth::{TreeNode, max_depth};
//!
//! let root = TreeNode::with_children(
//!     3,
//!     Some(TreeNode::leaf(9)),
//!     Some(TreeNode::with_children(20, Some(TreeNode::leaf(15)), Some(TreeNode::leaf(7)))),
//! );
//! assert_eq!(max_depth(Some(&*root)), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod level_order;
mod tree;

pub use level_order::{ParseTreeError, from_level_order, parse_level_order};
pub use tree::{Tree, TreeNode, max_depth};
