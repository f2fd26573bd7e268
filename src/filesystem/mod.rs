//! Project layout model and its materialization on disk.
//!
//! A layout is a [`DirectoryTree`]: an ordered mapping from names to
//! [`TreeNode`]s, where each node is either a directory holding empty
//! placeholder files, a directory holding a nested tree, or a bare directory.

mod materializer;
mod tree;

pub use materializer::{MaterializeError, materialize};
pub use tree::{DirectoryTree, TreeNode};
