//! The building block of a [`BinarySearchTree`][crate::BinarySearchTree].

/// A `Node` has a key that is used for searching/sorting and owns up to two children. Dropping a
/// `Node` drops its whole subtree.
///
/// Cloning, comparing and dropping a `Node` walk the subtree with an explicit stack, so they
/// work on trees of any depth.
///
/// Nodes are handed out read-only (through [`BinarySearchTree::root`][crate::BinarySearchTree::root]
/// and to a [`TraversalObserver`][crate::TraversalObserver]) so renderers can walk the shape of
/// the tree. Only the tree's own algorithms rearrange children.
#[derive(Debug, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<Box<Node<K>>>,
    pub(crate) right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    pub fn new(key: K) -> Self {
        Self::with_children(key, None, None)
    }

    /// Construct a `Node` with the given `key` and children.
    ///
    /// Nothing checks that the children respect the ordering invariant. Trees built through
    /// [`BinarySearchTree::insert`][crate::BinarySearchTree::insert] always do.
    pub fn with_children(key: K, left: Option<Node<K>>, right: Option<Node<K>>) -> Self {
        Self {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node holding the smallest key of the subtree rooted here, i.e. its leftmost
    /// descendant.
    ///
    /// # Examples
    ///
    /// ```
    /// use animated_bst::Node;
    ///
    /// let node = Node::with_children(5, Some(Node::new(2)), Some(Node::new(9)));
    /// assert_eq!(node.min().key(), &2);
    /// assert_eq!(node.right().unwrap().min().key(), &9);
    /// ```
    pub fn min(&self) -> &Node<K> {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }
}

impl<K: Clone> Clone for Node<K> {
    fn clone(&self) -> Self {
        enum Frame<'a, K> {
            /// Push the node's children, then come back to build it.
            Enter(&'a Node<K>),
            /// The node's children are cloned and waiting on `built`.
            Build(&'a Node<K>),
        }

        let mut frames: Vec<Frame<'_, K>> = Vec::new();
        frames.extend(self.right().map(Frame::Enter));
        frames.extend(self.left().map(Frame::Enter));
        let mut built = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Enter(node) => {
                    frames.push(Frame::Build(node));
                    frames.extend(node.right().map(Frame::Enter));
                    frames.extend(node.left().map(Frame::Enter));
                }
                Frame::Build(node) => {
                    let copy = assemble(node, &mut built);
                    built.push(copy);
                }
            }
        }

        assemble(self, &mut built)
    }
}

/// Copies `node`'s key over its children's clones, which sit on top of `built` (right above left).
fn assemble<K: Clone>(node: &Node<K>, built: &mut Vec<Node<K>>) -> Node<K> {
    let right = node.right.as_ref().and_then(|_| built.pop());
    let left = node.left.as_ref().and_then(|_| built.pop());
    Node::with_children(node.key.clone(), left, right)
}

impl<K: PartialEq> PartialEq for Node<K> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.key != b.key {
                return false;
            }
            for (a, b) in [(a.left(), b.left()), (a.right(), b.right())] {
                match (a, b) {
                    (Some(a), Some(b)) => pairs.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<K> Drop for Node<K> {
    fn drop(&mut self) {
        let mut detached: Vec<Box<Node<K>>> = Vec::new();
        detached.extend(self.left.take());
        detached.extend(self.right.take());
        // Each node is childless by the time it drops, so its own `drop` ends right away.
        while let Some(mut node) = detached.pop() {
            detached.extend(node.left.take());
            detached.extend(node.right.take());
        }
    }
}
