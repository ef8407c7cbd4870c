//! Property tests comparing the tree against `BTreeSet` as a model.

use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use bstree::Tree;

fn build(xs: &[i8]) -> (Tree<i8>, BTreeSet<i8>) {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    for &x in xs {
        tree.insert(x);
        set.insert(x);
    }
    (tree, set)
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let (tree, _) = build(&xs);
        xs.iter().all(|x| tree.find(x).value() == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let (tree, added) = build(&xs);
        nots.iter()
            .filter(|x| !added.contains(*x))
            .all(|x| tree.find(x).is_end())
    }

    fn sorted_iteration(xs: Vec<i8>) -> bool {
        let (tree, set) = build(&xs);
        let from_tree: Vec<i8> = tree.iter().copied().collect();
        let from_set: Vec<i8> = set.iter().copied().collect();
        from_tree == from_set
    }

    fn inorder_matches_cursor_sequence(xs: Vec<i8>) -> bool {
        let (tree, _) = build(&xs);
        let mut sink = String::new();
        tree.traverse_inorder(&mut sink).unwrap();
        let walked: String = tree.iter().map(|x| format!("{} ", x)).collect();
        sink == walked
    }

    fn sorting_invariant_always_holds(xs: Vec<i8>) -> bool {
        let (tree, _) = build(&xs);
        tree.check_sorting_invariant()
    }

    fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
        let (tree, set) = build(&xs);
        tree.len() == set.len() && tree.is_empty() == set.is_empty()
    }

    fn height_is_within_bounds(xs: Vec<i8>) -> bool {
        let (tree, set) = build(&xs);
        let n = set.len();
        let h = tree.height();
        match n {
            0 => h == 0,
            // floor(log2(n)) + 1 <= height <= n
            _ => h >= (n.ilog2() as usize) + 1 && h <= n,
        }
    }

    fn min_and_max_match_the_model(xs: Vec<i8>) -> bool {
        let (tree, set) = build(&xs);
        tree.min().value() == set.iter().next() && tree.max().value() == set.iter().next_back()
    }

    fn successor_matches_the_model(xs: Vec<i8>, probe: i8) -> bool {
        let (tree, set) = build(&xs);
        let expected = set.range((Excluded(probe), Unbounded)).next();
        tree.min_greater_than(&probe).value() == expected
    }
}
