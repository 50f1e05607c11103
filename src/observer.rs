//! Hooks a renderer uses to follow a traversal as it happens.
//!
//! Every animated operation on a [`BinarySearchTree`][crate::BinarySearchTree] reports each node
//! it looks at twice: once when its attention lands on the node ([`on_visit`]) and once when it
//! moves on ([`on_unvisit`]). The pacing delay sits between the two, so a renderer highlighting
//! "visited but not yet un-visited" nodes shows the search path one step at a time.
//!
//! Calls are synchronous and happen before the operation suspends, so the observer always sees
//! the tree in a state that satisfies the BST ordering invariant.
//!
//! [`on_visit`]: TraversalObserver::on_visit
//! [`on_unvisit`]: TraversalObserver::on_unvisit

use crate::Node;

/// Receives visit/un-visit notifications during an animated tree operation.
pub trait TraversalObserver<K> {
    /// The operation's attention has arrived at `node`.
    fn on_visit(&mut self, node: &Node<K>);

    /// The operation is done with `node`.
    fn on_unvisit(&mut self, node: &Node<K>);
}

/// Ignores every notification.
impl<K> TraversalObserver<K> for () {
    fn on_visit(&mut self, _node: &Node<K>) {}

    fn on_unvisit(&mut self, _node: &Node<K>) {}
}

impl<K, O> TraversalObserver<K> for &mut O
where
    O: TraversalObserver<K> + ?Sized,
{
    fn on_visit(&mut self, node: &Node<K>) {
        (**self).on_visit(node);
    }

    fn on_unvisit(&mut self, node: &Node<K>) {
        (**self).on_unvisit(node);
    }
}

/// A single notification captured by a [`Recorder`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event<K> {
    /// [`TraversalObserver::on_visit`] was called for the node with this key.
    Visit(K),
    /// [`TraversalObserver::on_unvisit`] was called for the node with this key.
    Unvisit(K),
}

impl<K> Event<K> {
    /// The key of the node this event is about.
    pub fn key(&self) -> &K {
        match self {
            Self::Visit(k) | Self::Unvisit(k) => k,
        }
    }
}

/// An observer that remembers the keys of every node it was told about, in order.
///
/// # Examples
///
/// ```
/// use animated_bst::{BinarySearchTree, Event, Pacing, Recorder};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut tree = BinarySearchTree::with_pacing(Pacing::instant());
/// tree.insert(2, &mut ()).await;
/// tree.insert(1, &mut ()).await;
///
/// let mut recorder = Recorder::new();
/// assert!(tree.find(&1, &mut recorder).await);
/// assert_eq!(
///     recorder.events(),
///     &[Event::Visit(2), Event::Unvisit(2), Event::Visit(1), Event::Unvisit(1)]
/// );
/// assert_eq!(recorder.path(), vec![2, 1]);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorder<K> {
    events: Vec<Event<K>>,
}

impl<K> Default for Recorder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Recorder<K> {
    /// Creates a recorder that hasn't seen anything yet.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Everything recorded so far.
    pub fn events(&self) -> &[Event<K>] {
        &self.events
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Whether every un-visit closes the most recent still-open visit and nothing is left open.
    pub fn is_balanced(&self) -> bool
    where
        K: PartialEq,
    {
        let mut open = Vec::new();
        for event in &self.events {
            match event {
                Event::Visit(k) => open.push(k),
                Event::Unvisit(k) => {
                    if open.pop() != Some(k) {
                        return false;
                    }
                }
            }
        }
        open.is_empty()
    }

    /// The keys of the visited nodes, in visiting order.
    pub fn path(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Visit(k) => Some(k.clone()),
                Event::Unvisit(_) => None,
            })
            .collect()
    }
}

impl<K: Clone> TraversalObserver<K> for Recorder<K> {
    fn on_visit(&mut self, node: &Node<K>) {
        self.events.push(Event::Visit(node.key().clone()));
    }

    fn on_unvisit(&mut self, node: &Node<K>) {
        self.events.push(Event::Unvisit(node.key().clone()));
    }
}
