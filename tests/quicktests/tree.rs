use bstree::{Order, Tree, TreeError};

use std::collections::HashSet;

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let distinct: HashSet<_> = xs.iter().collect();

        tree.size() == distinct.len() && xs.iter().all(|x| tree.contains(x) && tree.retrieve(x) == Ok(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| {
            let expected = if tree.is_empty() {
                TreeError::EmptyTree
            } else {
                TreeError::KeyNotFound
            };
            !tree.contains(x) && tree.retrieve(x) == Err(expected) && tree.depth(x) < 0
        })
    }
}

quickcheck::quickcheck! {
    fn reinserting_keeps_size(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let size = tree.size();
        let height = tree.height();
        for x in &xs {
            tree.insert(*x);
        }

        tree.size() == size && tree.height() == height
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let mut still_present: HashSet<_> = xs.into_iter().collect();

        for delete in &deletes {
            let before = tree.size();
            let was_present = still_present.remove(delete);
            tree.remove(delete);

            let expected = if was_present { before - 1 } else { before };
            if tree.size() != expected || tree.contains(delete) {
                return false;
            }
        }

        still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn traversal_is_sorted_after_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut items = Vec::new();
        tree.walk(Order::InOrder, |x| items.push(*x));
        items.windows(2).all(|w| w[0] < w[1]) && items.len() == tree.size()
    }
}

quickcheck::quickcheck! {
    fn every_order_visits_every_item(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let expected: HashSet<_> = tree.iter().copied().collect();

        [Order::InOrder, Order::PreOrder, Order::LevelOrder].iter().all(|order| {
            let mut seen = Vec::new();
            tree.walk(*order, |x| seen.push(*x));
            seen.len() == tree.size() && seen.into_iter().collect::<HashSet<_>>() == expected
        })
    }
}

quickcheck::quickcheck! {
    fn level_order_is_sorted_by_depth(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        let mut depths = Vec::new();
        tree.level_traverse(|x| depths.push(tree.depth(x)));
        depths.first().map_or(true, |root| *root == 0) && depths.windows(2).all(|w| w[0] <= w[1])
    }
}

quickcheck::quickcheck! {
    fn increasing_keys_form_a_chain(xs: Vec<i8>) -> bool {
        let mut keys = xs;
        keys.sort_unstable();
        keys.dedup();
        let tree = build(&keys);

        let n = keys.len() as isize;
        tree.height() == n - 1
            && keys.iter().zip(0..).all(|(x, depth)| tree.depth(x) == depth)
            && (keys.is_empty() || tree.diameter() as isize == n - 1)
    }
}

quickcheck::quickcheck! {
    fn metrics_are_bounded(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let height = tree.height();
        let diameter = tree.diameter() as isize;

        // The diameter is never shorter than the tallest root-to-leaf path and never longer than
        // two of them glued together.
        if tree.is_empty() {
            height == -1 && diameter == 0
        } else {
            height <= diameter && diameter <= 2 * height && tree.iter().all(|x| tree.depth(x) <= height)
        }
    }
}
