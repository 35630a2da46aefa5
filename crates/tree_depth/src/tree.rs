//! Tree node type and depth computation.

/// An optional, owned subtree.
pub type Tree<T> = Option<Box<TreeNode<T>>>;

/// A binary tree node owning its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// Value stored at this node.
    pub value: T,
    /// Left child.
    pub left: Tree<T>,
    /// Right child.
    pub right: Tree<T>,
}

impl<T> TreeNode<T> {
    /// A node with no children.
    pub fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// A node with the given children.
    pub fn with_children(value: T, left: Tree<T>, right: Tree<T>) -> Box<Self> {
        Box::new(Self { value, left, right })
    }
}

// Unlinks descendants one at a time so a long chain cannot exhaust the stack.
impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Number of nodes on the longest root-to-leaf path.
///
/// Returns 0 for an absent tree and 1 for a lone node. Walks the tree with
/// an explicit stack, so arbitrarily deep trees are fine.
pub fn max_depth<T>(tree: Option<&TreeNode<T>>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&TreeNode<T>, usize)> = tree.map(|root| (root, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
        stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
    }
    deepest
}
