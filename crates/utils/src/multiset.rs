//! Order-insensitive comparisons of sequences, i.e. comparing them as multisets.
//!
//! Only [`PartialEq`] is required of the items, so everything here is quadratic.

/// `true` iff there is a one-to-one matching between the items of `left`
/// and `right` such that matched items are related by `eq`
pub fn same_multiset_by<A, B, F>(left: A, right: B, mut eq: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut unmatched: Vec<Option<B::Item>> = right.into_iter().map(Some).collect();
    for l in left {
        let hit = unmatched
            .iter_mut()
            .find(|r| r.as_ref().is_some_and(|r| eq(&l, r)));
        match hit {
            Some(slot) => *slot = None,
            None => return false,
        }
    }
    unmatched.iter().all(Option::is_none)
}

/// see [same_multiset_by]
pub fn same_multiset<A, B>(left: A, right: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    same_multiset_by(left, right, |l, r| l == r)
}
