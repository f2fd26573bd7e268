use derive_more::{Display, From};
use hashlink::LinkedHashMap;

/// A single entry of a project layout.
///
/// The kind of an entry is decided once, when the layout is built, so the
/// materializer never has to inspect values at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum TreeNode {
    /// A directory populated with empty placeholder files.
    #[display("directory with {} file(s)", _0.len())]
    Files(Vec<String>),
    /// A directory containing further entries.
    #[display("directory with {} entries", _0.len())]
    Subtree(DirectoryTree),
    /// A directory with nothing inside.
    #[display("bare directory")]
    #[from(ignore)]
    Bare,
}

impl TreeNode {
    pub fn files<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TreeNode::Files(names.into_iter().map(Into::into).collect())
    }
}

/// Insertion-ordered mapping from entry name to [`TreeNode`].
///
/// Sibling names are unique: inserting a name twice replaces the earlier
/// node but keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryTree {
    entries: LinkedHashMap<String, TreeNode>,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<TreeNode>) {
        let name = name.into();
        let node = node.into();
        match self.entries.get_mut(&name) {
            Some(existing) => *existing = node,
            None => {
                self.entries.insert(name, node);
            }
        }
    }

    pub fn with_files<I, S>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, TreeNode::files(files));
        self
    }

    pub fn with_subtree(mut self, name: impl Into<String>, subtree: DirectoryTree) -> Self {
        self.insert(name, subtree);
        self
    }

    pub fn with_dir(mut self, name: impl Into<String>) -> Self {
        self.insert(name, TreeNode::Bare);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TreeNode)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deepest directory nesting below this tree, counting this level as 1.
    pub fn depth(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                TreeNode::Subtree(subtree) => 1 + subtree.depth(),
                TreeNode::Files(_) | TreeNode::Bare => 1,
            })
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a DirectoryTree {
    type Item = (&'a String, &'a TreeNode);
    type IntoIter = hashlink::linked_hash_map::Iter<'a, String, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
