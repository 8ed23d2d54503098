use bst_set::{Comparator, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<'_, T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len()
        && set.iter().all(|v| tree.find(v) == Some(v))
        && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn removing_absent_value_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|v| *v != x).collect();
    let before = tree.render();
    let len = tree.len();

    !tree.remove(&x) && tree.len() == len && tree.render() == before
}

#[quickcheck]
fn reversed_comparator_iterates_descending(xs: Vec<i16>) -> bool {
    let tree = Tree::from_iter_with(xs.clone(), Comparator::natural().reverse());
    let expected: Vec<_> = xs
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect();

    tree.into_iter().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn clone_is_element_wise_equal(xs: Vec<i8>, extra: i8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut cloned = tree.clone();
    let was_equal = cloned == tree;

    cloned.insert(extra);
    was_equal && (tree.contains(&extra) || cloned.len() == tree.len() + 1)
}

#[quickcheck]
fn copy_to_round_trips_iteration(xs: Vec<i8>, offset: u8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let offset = offset as usize % 4;
    let mut dest = vec![0; tree.len() + offset + 1];

    tree.copy_to(&mut dest, offset).is_ok()
        && dest[offset..offset + tree.len()].iter().eq(tree.iter())
}

#[quickcheck]
fn borrowed_slices_of_a_local_string(words: Vec<String>) -> bool {
    let joined = words.join(" ");
    let tree: Tree<&str> = joined.split(' ').collect();
    let expected: BTreeSet<&str> = joined.split(' ').collect();

    tree.iter().eq(expected.iter())
}
