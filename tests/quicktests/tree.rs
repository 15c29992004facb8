use bintree::Tree;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

/// All three depth-first walks of a tree.
fn walks(tree: &Tree<i8>) -> [Vec<i8>; 3] {
    [
        tree.in_order().copied().collect(),
        tree.pre_order().copied().collect(),
        tree.post_order().copied().collect(),
    ]
}

fn sorted(mut xs: Vec<i8>) -> Vec<i8> {
    xs.sort_unstable();
    xs
}

/// Applies a set of operations to a tree and to a `Vec` holding the same
/// values. Removing takes out one copy of a value from each.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                model.push(*x);
            }
            Op::Remove(x) => {
                tree.remove(x);
                if let Some(pos) = model.iter().position(|y| y == x) {
                    model.swap_remove(pos);
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.len() == model.len()
        && model.iter().all(|x| tree.search(x))
        && sorted(tree.in_order().copied().collect()) == sorted(model)
}

#[quickcheck]
fn len_matches_inserts(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.len() == xs.len() && walks(&tree).iter().all(|walk| walk.len() == xs.len())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn remove_absent_is_noop(xs: Vec<i8>, x: i8) -> TestResult {
    if xs.contains(&x) {
        return TestResult::discard();
    }
    let mut tree = build(&xs);
    let before = walks(&tree);

    let removed = tree.remove(&x);
    TestResult::from_bool(removed.is_none() && walks(&tree) == before && tree.len() == xs.len())
}

#[quickcheck]
fn remove_present_excises_it_from_in_order(xs: Vec<i8>, pick: usize) -> TestResult {
    // Keep the first copy of each value so the removed node is unambiguous.
    let mut seen = HashSet::new();
    let xs: Vec<_> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
    if xs.is_empty() {
        return TestResult::discard();
    }
    let target = xs[pick % xs.len()];
    let mut tree = build(&xs);

    let mut expected: Vec<_> = tree.in_order().copied().collect();
    expected.retain(|x| *x != target);

    let removed = tree.remove(&target);
    let in_order: Vec<_> = tree.in_order().copied().collect();
    TestResult::from_bool(removed == Some(target) && in_order == expected)
}

#[quickcheck]
fn remove_takes_exactly_one_copy(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);

    let mut expected = xs.clone();
    if let Some(pos) = expected.iter().position(|y| *y == x) {
        expected.remove(pos);
    }

    tree.remove(&x);
    sorted(tree.in_order().copied().collect()) == sorted(expected)
}

#[quickcheck]
fn remove_everything_empties(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);

    let all_found = xs.iter().all(|x| tree.remove(x) == Some(*x));
    all_found && tree.is_empty() && walks(&tree).iter().all(Vec::is_empty)
}
