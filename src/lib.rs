//! This crate exposes an animated Binary Search Tree (BST) meant for watching the classic
//! algorithms run one node at a time.
//!
//! ## Binary Search Tree
//!
//! The tree here holds bare keys: no values ride along, and each key appears at
//! most once. Every [`Node`] owns up to two children, and the whole tree obeys one
//! ordering rule: keys under a node's left child are smaller than the node's key,
//! keys under its right child are larger. A node with no children is a leaf.
//!
//! Because of that rule, finding a key only ever looks at the `Node`s on one
//! path from the root downwards, and inserting or deleting a key only rearranges
//! `Node`s near the end of that path. That path is what this crate animates.
//!
//! ## Animation
//!
//! Each operation on a [`BinarySearchTree`] is an `async fn`. Whenever it looks
//! at a `Node` it tells a [`TraversalObserver`] ("visit"), waits for the
//! [`Pacing`] delay, then tells the observer it is done with that `Node`
//! ("un-visit"). A renderer highlights visited nodes; tests use a [`Recorder`].
//! The tree never stores any presentation state itself.
//!
//! The tree is deliberately not self-balancing, so inserting keys in order
//! produces a long, list-like tree and a correspondingly long animation.
//!
//! ## Front ends
//!
//! [`Session`] wraps a tree with the small text [`Command`] language a front end
//! exposes (insert, delete, find, clear, delay, show), rejecting malformed
//! input before the tree is touched. `demos/shell.rs` is a terminal front end
//! built on it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod error;
mod node;
pub mod observer;
pub mod pacing;
pub mod session;
pub mod tree;

pub use command::{parse_delay, parse_key, Command, Key};
pub use error::{Error, Result};
pub use node::Node;
pub use observer::{Event, Recorder, TraversalObserver};
pub use pacing::Pacing;
pub use session::{Outcome, Session, SEED_KEYS};
pub use tree::{BinarySearchTree, Iter, Tree};
