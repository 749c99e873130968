//! Comparison sorts that only touch their input through [`Observable`].
//!
//! Every comparison is strict (`<` or `>`), so equal elements are never
//! exchanged. The exact sequence of writes is what makes each sort sound
//! the way it does; don't "optimize" them.

use crate::error::{Error, Result};
use crate::sortable::Observable;

/// What a sort hands back.
#[derive(Debug)]
pub enum Sorted<S> {
    /// The input itself is now sorted.
    InPlace,
    /// The sorted elements live in a new sequence; the input is unspecified.
    New(S),
}

/// For each position, find the smallest remaining element and swap it in.
///
/// The swap happens even when the minimum is already in place.
pub fn selection_sort<S>(sortable: &mut S) -> Result<Sorted<S>>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    let len = sortable.len();
    for i in 0..len {
        let mut minimum = i;
        for j in i + 1..len {
            if sortable.get(j)? < sortable.get(minimum)? {
                minimum = j;
            }
        }
        sortable.swap(i, minimum)?;
    }
    Ok(Sorted::InPlace)
}

/// Shift larger elements right one write at a time, then drop the key in.
pub fn insertion_sort<S>(sortable: &mut S) -> Result<Sorted<S>>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    for i in 1..sortable.len() {
        let key = sortable.get(i)?.clone();
        let mut j = i;
        while j > 0 && *sortable.get(j - 1)? > key {
            let shifted = sortable.get(j - 1)?.clone();
            sortable.set(j, shifted)?;
            j -= 1;
        }
        sortable.set(j, key)?;
    }
    Ok(Sorted::InPlace)
}

/// Sweep from the back towards the sorted prefix, swapping adjacent pairs
/// that are out of order.
pub fn bubble_sort<S>(sortable: &mut S) -> Result<Sorted<S>>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    let len = sortable.len();
    for i in 0..len {
        for j in (i + 1..len).rev() {
            if sortable.get(j - 1)? > sortable.get(j)? {
                sortable.swap(j - 1, j)?;
            }
        }
    }
    Ok(Sorted::InPlace)
}

/// Gapped insertion sort, halving the gap from `len / 2` down to 1.
pub fn shell_sort<S>(sortable: &mut S) -> Result<Sorted<S>>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    let len = sortable.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let value = sortable.get(i)?.clone();
            let mut j = i;
            while j >= gap && *sortable.get(j - gap)? > value {
                let shifted = sortable.get(j - gap)?.clone();
                sortable.set(j, shifted)?;
                j -= gap;
            }
            sortable.set(j, value)?;
        }
        gap /= 2;
    }
    Ok(Sorted::InPlace)
}

/// Top-down merge sort.
///
/// Not in place: the halves are copied out and merged into fresh sequences
/// by insertion, so this sort is heard through the insertion hooks rather
/// than the assignment ones. Always returns [`Sorted::New`].
pub fn merge_sort<S>(sortable: &mut S) -> Result<Sorted<S>>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    merge_sorted(sortable).map(Sorted::New)
}

fn merge_sorted<S>(sortable: &S) -> Result<S>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    let len = sortable.len();
    if len < 2 {
        return sortable.slice(0..len);
    }

    let middle = len / 2;
    let left = merge_sorted(&sortable.slice(0..middle)?)?;
    let right = merge_sorted(&sortable.slice(middle..len)?)?;
    merge(sortable.fresh(), left, right)
}

fn merge<S>(mut merged: S, mut left: S, mut right: S) -> Result<S>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    while !left.is_empty() && !right.is_empty() {
        let next = if left.get(0)? < right.get(0)? {
            left.remove(0)?
        } else {
            right.remove(0)?
        };
        merged.push(next)?;
    }

    // At most one of them still has elements
    while !left.is_empty() {
        merged.push(left.remove(0)?)?;
    }
    while !right.is_empty() {
        merged.push(right.remove(0)?)?;
    }
    Ok(merged)
}

/// Not implemented: there is no partition scheme to reproduce. Fails before
/// touching the input.
pub fn quick_sort<S>(_sortable: &mut S) -> Result<Sorted<S>>
where
    S: Observable,
    S::Item: PartialOrd + Clone,
{
    Err(Error::NotSupported("quick_sort"))
}
