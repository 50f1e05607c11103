//! An animated, unbalanced Binary Search Tree. Every operation that walks the tree reports the
//! nodes it passes through to a [`TraversalObserver`] and pauses at each one for the tree's
//! [`Pacing`] delay, so a viewer can follow the search path.
//!
//! # Examples
//!
//! ```
//! use animated_bst::{BinarySearchTree, Pacing, Recorder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut tree = BinarySearchTree::with_pacing(Pacing::instant());
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1, &mut ()).await);
//!
//! tree.insert(1, &mut ()).await;
//! assert!(tree.find(&1, &mut ()).await);
//!
//! // Inserting an existing key does nothing.
//! assert!(!tree.insert(1, &mut ()).await);
//! assert_eq!(tree.len(), 1);
//!
//! // Watch a delete walk down the tree.
//! tree.insert(3, &mut ()).await;
//! let mut recorder = Recorder::new();
//! assert!(tree.delete(&3, &mut recorder).await);
//! assert_eq!(recorder.path(), vec![1, 3]);
//! assert!(!tree.find(&3, &mut ()).await);
//! # }
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::{Node, Pacing, TraversalObserver};

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and deleting
/// keys. The tree is not self-balancing: its shape depends entirely on insertion order.
///
/// The animated operations borrow the tree for as long as they run, so only one of them can be in
/// flight at a time.
///
/// Clones share their [`Pacing`] with the original.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
    pacing: Pacing,
}

/// The name the rest of the crate (and its users) know [`Tree`] by.
pub type BinarySearchTree<K> = Tree<K>;

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` with the default [`Pacing`].
    pub fn new() -> Self {
        Self::with_pacing(Pacing::default())
    }

    /// Generates a new, empty `Tree` that pauses according to `pacing`.
    pub fn with_pacing(pacing: Pacing) -> Self {
        Self { root: None, pacing }
    }

    /// The handle controlling how long each step pauses. Clone it to change the delay while an
    /// operation is running.
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// The root node, for walking the tree's shape. `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Gets the height of this tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| root.min().key())
    }

    /// Drops every node at once. The pacing is kept.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// Looks `key` up without pausing or reporting anything.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Inserts `key`, reporting and pausing at each node on the way down to its new spot.
    /// Returns whether a node was added.
    ///
    /// Inserting a key that is already present changes nothing. The existing node is visited and
    /// un-visited without a pause.
    ///
    /// # Examples
    ///
    /// ```
    /// use animated_bst::{BinarySearchTree, Event, Pacing, Recorder};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let mut tree = BinarySearchTree::with_pacing(Pacing::instant());
    /// let mut recorder = Recorder::new();
    ///
    /// // The first key becomes the root without visiting anything.
    /// assert!(tree.insert(5, &mut recorder).await);
    /// assert!(recorder.events().is_empty());
    ///
    /// assert!(tree.insert(2, &mut recorder).await);
    /// assert_eq!(recorder.events(), &[Event::Visit(5), Event::Unvisit(5)]);
    ///
    /// recorder.clear();
    /// assert!(!tree.insert(2, &mut recorder).await);
    /// assert_eq!(recorder.path(), vec![5, 2]);
    /// # }
    /// ```
    pub async fn insert<O>(&mut self, key: K, observer: &mut O) -> bool
    where
        K: Ord,
        O: TraversalObserver<K> + ?Sized,
    {
        let mut walk = Walk::new(observer, &self.pacing);
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let node: &mut Node<K> = node;
            let ordering = key.cmp(&node.key);
            if ordering == Ordering::Equal {
                walk.visit(node);
                walk.unvisit(node);
                return false;
            }

            walk.step(node).await;
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        *slot = Some(Box::new(Node::new(key)));
        true
    }

    /// Searches for `key`, reporting and pausing at each node on the search path. A node holding
    /// `key` gets a second pause before it is un-visited.
    pub async fn find<O>(&self, key: &K, observer: &mut O) -> bool
    where
        K: Ord,
        O: TraversalObserver<K> + ?Sized,
    {
        let mut walk = Walk::new(observer, &self.pacing);
        let mut current = self.root();
        while let Some(node) = current {
            walk.visit(node);
            walk.pause().await;
            current = match key.cmp(&node.key) {
                Ordering::Equal => {
                    walk.pause().await;
                    walk.unvisit(node);
                    return true;
                }
                Ordering::Less => {
                    walk.unvisit(node);
                    node.left()
                }
                Ordering::Greater => {
                    walk.unvisit(node);
                    node.right()
                }
            };
        }
        false
    }

    /// Removes `key` from the tree, reporting and pausing at each node on the way. Returns
    /// whether anything was removed.
    ///
    /// A node with two children takes over the smallest key of its right subtree. The walk down
    /// to that key is reported too, and the node that held it is unlinked. Nothing changes until
    /// the last pause is over, so dropping the future part way leaves the tree as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use animated_bst::{BinarySearchTree, Pacing, Recorder};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let mut tree = BinarySearchTree::with_pacing(Pacing::instant());
    /// for key in [5, 2, 10, 7] {
    ///     tree.insert(key, &mut ()).await;
    /// }
    ///
    /// // Deleting the root promotes the smallest key on its right.
    /// let mut recorder = Recorder::new();
    /// assert!(tree.delete(&5, &mut recorder).await);
    /// assert_eq!(recorder.path(), vec![5, 10, 7]);
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(7));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 7, 10]);
    ///
    /// // Missing keys are fine.
    /// assert!(!tree.delete(&42, &mut ()).await);
    /// # }
    /// ```
    pub async fn delete<O>(&mut self, key: &K, observer: &mut O) -> bool
    where
        K: Ord,
        O: TraversalObserver<K> + ?Sized,
    {
        let mut walk = Walk::new(observer, &self.pacing);
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => {
                    walk.step(node).await;
                    key.cmp(&node.key)
                }
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }

            let Some(node) = slot.as_mut() else {
                return false;
            };
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        let Some(node) = slot.as_mut() else {
            return false;
        };
        if node.left.is_some() {
            if let Some(mut successor) = walk.detach_min(&mut node.right).await {
                mem::swap(&mut node.key, &mut successor.key);
                return true;
            }
        }
        *slot = slot.take().and_then(splice);
        true
    }
}

/// Replaces a node that has at most one child with that child.
fn splice<K>(mut node: Box<Node<K>>) -> Link<K> {
    node.left.take().or_else(|| node.right.take())
}

/// The observer and pacing an operation reports to, bundled for the duration of one walk.
struct Walk<'w, O: ?Sized> {
    observer: &'w mut O,
    pacing: &'w Pacing,
}

impl<'w, O: ?Sized> Walk<'w, O> {
    fn new(observer: &'w mut O, pacing: &'w Pacing) -> Self {
        Self { observer, pacing }
    }

    fn visit<K>(&mut self, node: &Node<K>)
    where
        O: TraversalObserver<K>,
    {
        self.observer.on_visit(node);
    }

    fn unvisit<K>(&mut self, node: &Node<K>)
    where
        O: TraversalObserver<K>,
    {
        self.observer.on_unvisit(node);
    }

    async fn pause(&self) {
        self.pacing.pause().await;
    }

    /// Visit, pause, un-visit.
    async fn step<K>(&mut self, node: &Node<K>)
    where
        O: TraversalObserver<K>,
    {
        self.visit(node);
        self.pause().await;
        self.unvisit(node);
    }

    /// Steps down the left edge of the subtree in `slot`, then unlinks its last node (the
    /// smallest key) and returns it. That node's right child takes its place.
    async fn detach_min<K>(&mut self, mut slot: &mut Link<K>) -> Link<K>
    where
        O: TraversalObserver<K>,
    {
        loop {
            let leftmost = match slot.as_deref() {
                Some(node) => {
                    self.step(node).await;
                    node.left.is_none()
                }
                None => return None,
            };
            if leftmost {
                break;
            }

            let Some(node) = slot.as_mut() else {
                return None;
            };
            slot = &mut node.left;
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min)
    }
}

/// An in-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet but whose left subtree has been (or is about to
    /// be) pushed.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
