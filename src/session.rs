//! A tree plus the commands a front end can run against it.

use std::time::Duration;

use crate::command::{Command, Key};
use crate::error::Result;
use crate::{BinarySearchTree, Pacing, TraversalObserver};

/// The keys a fresh [`Session::seeded`] starts with, in insertion order.
pub const SEED_KEYS: [Key; 9] = [5, 2, 1, -1, 0, 10, 9, 7, 3];

/// What running a [`Command`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `true` if the key was new.
    Inserted(bool),
    /// `true` if the key was present.
    Deleted(bool),
    /// `true` if the key was found.
    Found(bool),
    /// The tree was replaced by an empty one.
    Cleared,
    /// The pacing delay is now this long.
    DelaySet(Duration),
    /// Nothing changed.
    Shown,
}

/// Owns the tree a front end animates.
///
/// Commands run one at a time: each `run` borrows the session until its animation is over.
///
/// # Examples
///
/// ```
/// use animated_bst::{Outcome, Pacing, Session};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut session = Session::new(Pacing::instant());
///
/// assert_eq!(session.run_line("insert 4", &mut ()).await, Ok(Outcome::Inserted(true)));
/// assert_eq!(session.run_line("find 4", &mut ()).await, Ok(Outcome::Found(true)));
///
/// // Bad input never reaches the tree.
/// assert!(session.run_line("insert four", &mut ()).await.is_err());
/// assert_eq!(session.tree().len(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Session {
    tree: BinarySearchTree<Key>,
}

impl Session {
    /// A session with an empty tree.
    pub fn new(pacing: Pacing) -> Self {
        Self {
            tree: BinarySearchTree::with_pacing(pacing),
        }
    }

    /// A session whose tree already holds [`SEED_KEYS`], inserted in order.
    pub async fn seeded<O>(pacing: Pacing, observer: &mut O) -> Self
    where
        O: TraversalObserver<Key> + ?Sized,
    {
        let mut session = Self::new(pacing);
        for key in SEED_KEYS {
            session.tree.insert(key, observer).await;
        }
        session
    }

    /// The tree, for drawing.
    pub fn tree(&self) -> &BinarySearchTree<Key> {
        &self.tree
    }

    /// The delay handle shared with the tree.
    pub fn pacing(&self) -> &Pacing {
        self.tree.pacing()
    }

    /// Runs `command`, reporting the animated steps to `observer`.
    pub async fn run<O>(&mut self, command: Command, observer: &mut O) -> Outcome
    where
        O: TraversalObserver<Key> + ?Sized,
    {
        match command {
            Command::Insert(key) => Outcome::Inserted(self.tree.insert(key, observer).await),
            Command::Delete(key) => Outcome::Deleted(self.tree.delete(&key, observer).await),
            Command::Find(key) => Outcome::Found(self.tree.find(&key, observer).await),
            Command::Clear => {
                self.tree.clear();
                Outcome::Cleared
            }
            Command::Delay(delay) => {
                self.pacing().set_delay(delay);
                Outcome::DelaySet(delay)
            }
            Command::Show => Outcome::Shown,
        }
    }

    /// Parses `line` and runs it. A line that doesn't parse leaves the tree untouched.
    pub async fn run_line<O>(&mut self, line: &str, observer: &mut O) -> Result<Outcome>
    where
        O: TraversalObserver<Key> + ?Sized,
    {
        let command = line.parse()?;
        Ok(self.run(command, observer).await)
    }
}
