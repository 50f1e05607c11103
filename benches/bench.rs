use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;

use animated_bst::{BinarySearchTree, Pacing};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing rebalances it, so it is one long
/// right spine.
fn get_unbalanced_tree(rt: &Runtime, num_levels: usize) -> BinarySearchTree<i32> {
    rt.block_on(async {
        let mut tree = BinarySearchTree::with_pacing(Pacing::instant());
        for x in (0..).take(num_nodes_in_full_tree(num_levels)) {
            tree.insert(x, &mut ()).await;
        }
        tree
    })
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that the
/// resultant tree has `num_levels` of nodes, all full.
fn get_balanced_tree(rt: &Runtime, num_levels: usize) -> BinarySearchTree<i32> {
    let xs = (0..).take(num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>();
    let mut order = Vec::with_capacity(xs.len());
    balanced_order(&xs, &mut order);

    rt.block_on(async {
        let mut tree = BinarySearchTree::with_pacing(Pacing::instant());
        for x in order {
            tree.insert(x, &mut ()).await;
        }
        tree
    })
}

/// Recursive helper for [`get_balanced_tree`]: middle first, then each half.
fn balanced_order(xs: &[i32], order: &mut Vec<i32>) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        order.push(xs[mid]);
        balanced_order(&xs[..mid], order);
        balanced_order(&xs[mid + 1..], order);
    }
}

/// Helper to bench an operation on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Pacing is instant so only the walk is measured.
fn bench_helper<F, Fut>(c: &mut Criterion, name: &str, f: F)
where
    F: Fn(BinarySearchTree<i32>, i32) -> Fut,
    Fut: std::future::Future<Output = BinarySearchTree<i32>>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let mut group = c.benchmark_group(name);

    // The unbalanced trees get very deep, so stop a little earlier than for balanced ones.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(&rt, num_levels)),
            ("balanced", get_balanced_tree(&rt, num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        let tree = rt.block_on(f(tree, black_box(largest_element_in_tree as i32)));
                        time += instant.elapsed();
                        drop(tree);
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| async move {
        black_box(tree.find(&i, &mut ()).await);
        tree
    });
    bench_helper(c, "delete", |mut tree, i| async move {
        tree.delete(&i, &mut ()).await;
        tree
    });

    bench_helper(c, "insert", |mut tree, i| async move {
        tree.insert(i + 1, &mut ()).await;
        tree
    });

    bench_helper(c, "find-miss", |tree, i| async move {
        black_box(tree.find(&(i + 1), &mut ()).await);
        tree
    });
    bench_helper(c, "delete-miss", |mut tree, i| async move {
        tree.delete(&(i + 1), &mut ()).await;
        tree
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
