use bintree::{Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// rebuilds, and clears we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                if bst.insert(x.clone()) != set.insert(x.clone()) {
                    return false;
                }
            }
            Op::Retrieve(x) => {
                if bst.retrieve(x) != set.get(x) {
                    return false;
                }
            }
            Op::Rebalance => bst.rebalance(),
            Op::Clear => {
                bst.clear();
                set.clear();
            }
        }
        if bst.is_empty() != set.is_empty() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.drain_sorted() == set.into_iter().collect::<Vec<_>>()
        && tree.is_empty()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.retrieve(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.retrieve(x).is_none() && tree.depth(x) == 0)
}

#[quickcheck]
fn in_order_is_ascending(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let expected: BTreeSet<_> = xs.into_iter().collect();

    if expected.is_empty() {
        return tree.to_string() == "Tree is empty.\n";
    }
    let expected = expected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    tree.to_string() == expected + "\n"
}

#[quickcheck]
fn duplicates_are_rejected(xs: Vec<u8>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.clone();
    let len = tree.len();

    xs.iter()
        .all(|x| tree.try_insert(*x) == Err(TreeError::Duplicate(*x)))
        && tree == before
        && tree.len() == len
}

#[quickcheck]
fn round_trip_is_balanced(xs: Vec<i32>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let len = tree.len();

    let values = tree.drain_sorted();
    if !tree.is_empty() || values.len() != len {
        return false;
    }
    let expected: Vec<_> = xs
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let tree = Tree::from_sorted(values);
    let height = (usize::BITS - len.leading_zeros()) as usize;
    tree.height() == height && tree.len() == len && {
        let mut tree = tree;
        tree.drain_sorted() == expected
    }
}

#[quickcheck]
fn depth_is_within_height(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    if tree.is_empty() {
        return xs.is_empty();
    }

    tree.depth(tree.root()) == 1
        && xs.iter().all(|x| {
            let depth = tree.depth(x);
            depth >= 1 && depth <= tree.height()
        })
}

#[quickcheck]
fn first_value_is_root(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    match xs.first() {
        Some(first) => tree.root() == first && tree.try_root() == Ok(first),
        None => tree.try_root() == Err(TreeError::Empty),
    }
}

#[quickcheck]
fn equality_is_reflexive_and_symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut a = Tree::new();
    for x in &xs {
        a.insert(*x);
    }
    let mut b = Tree::new();
    for y in &ys {
        b.insert(*y);
    }

    a == a.clone() && b == b.clone() && (a == b) == (b == a) && (a != b) == !(a == b)
}
