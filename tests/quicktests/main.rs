use quickcheck::{Arbitrary, Gen};

mod tree;

/// The "things" a quicktest can do to a tree from the outside.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Remove one T from the tree
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
