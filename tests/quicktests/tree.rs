use animated_bst::{BinarySearchTree, Event, Pacing, Recorder};

use std::collections::{BTreeSet, HashSet};

use crate::{block_on, Op};

fn new_tree() -> BinarySearchTree<i8> {
    BinarySearchTree::with_pacing(Pacing::instant())
}

fn keys(tree: &BinarySearchTree<i8>) -> Vec<i8> {
    tree.iter().copied().collect()
}

/// Whether `path` is the route a search for `key` takes: it starts at the root and every step
/// goes towards `key`.
fn is_search_path(tree: &BinarySearchTree<i8>, key: i8, path: &[i8]) -> bool {
    let mut current = tree.root();
    for visited in path {
        match current {
            Some(node) if node.key() == visited => {
                current = if key < *visited {
                    node.left()
                } else {
                    node.right()
                };
            }
            _ => return false,
        }
    }
    true
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both, and that every
/// operation agreed with the set along the way.
async fn do_ops(ops: &[Op<i8>], bst: &mut BinarySearchTree<i8>, set: &mut BTreeSet<i8>) -> bool {
    let mut recorder = Recorder::new();
    for op in ops {
        recorder.clear();
        let agreed = match op {
            Op::Insert(k) => bst.insert(*k, &mut recorder).await == set.insert(*k),
            Op::Delete(k) => bst.delete(k, &mut recorder).await == set.remove(k),
            Op::Find(k) => {
                let found = bst.find(k, &mut recorder).await;
                found == set.contains(k) && is_search_path(bst, *k, &recorder.path())
            }
        };
        if !agreed || !recorder.is_balanced() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = new_tree();
    let mut set = BTreeSet::new();

    block_on(do_ops(&ops, &mut tree, &mut set)) && keys(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn in_order_is_strictly_increasing(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let tree = block_on(async {
        let mut tree = new_tree();
        for x in &xs {
            tree.insert(*x, &mut ()).await;
        }
        for delete in &deletes {
            tree.delete(delete, &mut ()).await;
        }
        tree
    });

    keys(&tree).windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    block_on(async {
        let mut tree = new_tree();
        for x in &xs {
            tree.insert(*x, &mut ()).await;
        }

        for x in &xs {
            if !tree.find(x, &mut ()).await {
                return false;
            }
        }
        true
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    block_on(async {
        let mut tree = new_tree();
        for x in &xs {
            tree.insert(*x, &mut ()).await;
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();

        for x in nots.difference(&added) {
            if tree.find(x, &mut ()).await {
                return false;
            }
        }
        true
    })
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    block_on(async {
        let mut tree = new_tree();
        for x in &xs {
            tree.insert(*x, &mut ()).await;
        }
        for delete in &deletes {
            tree.delete(delete, &mut ()).await;
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        for x in &deletes {
            if tree.find(x, &mut ()).await {
                return false;
            }
        }
        for x in &still_present {
            if !tree.find(x, &mut ()).await {
                return false;
            }
        }
        true
    })
}

#[quickcheck]
fn insert_twice_keeps_shape(xs: Vec<i8>, x: i8) -> bool {
    block_on(async {
        let mut tree = new_tree();
        for x in &xs {
            tree.insert(*x, &mut ()).await;
        }
        tree.insert(x, &mut ()).await;
        let before = tree.root().cloned();

        let mut recorder = Recorder::new();
        let added = tree.insert(x, &mut recorder).await;

        // The duplicate walk ends on the existing node.
        let ends_on_x = recorder.events().last() == Some(&Event::Unvisit(x));
        !added && ends_on_x && tree.root().cloned() == before
    })
}

#[quickcheck]
fn deleting_root_keeps_everything_else(xs: Vec<i8>) -> bool {
    block_on(async {
        let mut tree = new_tree();
        for x in &xs {
            tree.insert(*x, &mut ()).await;
        }
        let Some(root) = tree.root().map(|root| *root.key()) else {
            return true;
        };

        tree.delete(&root, &mut ()).await;

        let mut expected: Vec<i8> = xs.into_iter().filter(|x| *x != root).collect();
        expected.sort_unstable();
        expected.dedup();
        keys(&tree) == expected && !tree.contains(&root)
    })
}
