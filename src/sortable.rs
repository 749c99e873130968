//! The observable sequence every sort is written against.

use core::fmt;
use core::ops::Range;

use crate::error::{Error, Result};
use crate::sonify::{ScaledTones, Sonify};
use crate::tone::SharedEmitter;

/// An ordered, index-addressable sequence whose writes can be observed.
///
/// The sorts in [`crate::sorts`] only ever touch their input through this
/// trait, so everything they move is heard.
pub trait Observable: Sized {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read without making a sound.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Overwrite the element at `index`.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Insert before `index`; `index == len` appends.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Take the element at `index` out, shifting the rest left.
    fn remove(&mut self, index: usize) -> Result<Self::Item>;

    /// A new sequence holding a copy of `range`, observed the same way as
    /// this one. Copying makes no sound.
    fn slice(&self, range: Range<usize>) -> Result<Self>;

    /// A new empty sequence observed the same way as this one.
    fn fresh(&self) -> Self;

    fn push(&mut self, value: Self::Item) -> Result<()> {
        let len = self.len();
        self.insert(len, value)
    }

    /// Exchange two elements with two writes: `i` first, then `j`.
    ///
    /// Swapping an element with itself still writes twice.
    fn swap(&mut self, i: usize, j: usize) -> Result<()>
    where
        Self::Item: Clone,
    {
        let a = self.get(i)?.clone();
        let b = self.get(j)?.clone();
        self.set(i, b)?;
        self.set(j, a)
    }
}

/// A `Vec` that plays through its [`Sonify`] policy whenever it is written
/// to or inserted into.
///
/// ```
/// use musicalsort::{MusicalSortable, Observable, ScaledTones};
/// use musicalsort::tone::Recorder;
/// use std::{cell::RefCell, rc::Rc};
///
/// let recorder = Rc::new(RefCell::new(Recorder::new()));
/// let mut s = MusicalSortable::new(vec![3, 1, 2], recorder.clone(), ScaledTones::default());
/// s.set(0, 0).unwrap();
/// assert_eq!(s.as_slice(), &[0, 1, 2]);
/// // one tone for the index, one for the value
/// assert_eq!(recorder.borrow().len(), 2);
/// ```
pub struct MusicalSortable<T, S = ScaledTones> {
    data: Vec<T>,
    policy: S,
    emitter: SharedEmitter,
}

impl<T, S> MusicalSortable<T, S> {
    pub fn new(data: Vec<T>, emitter: SharedEmitter, policy: S) -> Self {
        Self {
            data,
            policy,
            emitter,
        }
    }

    pub fn empty(emitter: SharedEmitter, policy: S) -> Self {
        Self::new(Vec::new(), emitter, policy)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn policy(&self) -> &S {
        &self.policy
    }

    pub fn emitter(&self) -> &SharedEmitter {
        &self.emitter
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::OutOfRange {
            index,
            len: self.data.len(),
        }
    }
}

impl<T, S> Observable for MusicalSortable<T, S>
where
    T: Clone,
    S: Sonify<T> + Clone,
{
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or_else(|| self.out_of_range(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.data.len() {
            return Err(self.out_of_range(index));
        }

        let len = self.data.len();
        let mut emitter = self.emitter.borrow_mut();
        let policy = &mut self.policy;
        policy.pre_assignment(&mut *emitter, len, index, &value)?;
        self.data[index] = value;
        policy.post_assignment(&mut *emitter, len, index, &self.data[index])
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.data.len() {
            return Err(self.out_of_range(index));
        }

        let len = self.data.len();
        let mut emitter = self.emitter.borrow_mut();
        let policy = &mut self.policy;
        policy.pre_insertion(&mut *emitter, len, index, &value)?;
        self.data.insert(index, value);
        policy.post_insertion(&mut *emitter, len + 1, index, &self.data[index])
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.data.remove(index))
    }

    fn slice(&self, range: Range<usize>) -> Result<Self> {
        // An inverted range is out of bounds at its start
        let bad = range.start.max(range.end);
        let data = self
            .data
            .get(range)
            .ok_or_else(|| self.out_of_range(bad))?;
        Ok(Self::new(data.to_vec(), self.emitter.clone(), self.policy.clone()))
    }

    fn fresh(&self) -> Self {
        Self::empty(self.emitter.clone(), self.policy.clone())
    }
}

impl<T, S> AsRef<[T]> for MusicalSortable<T, S> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: fmt::Debug, S> fmt::Debug for MusicalSortable<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
