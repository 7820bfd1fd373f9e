use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::vec_like::{Growable, VecLike};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    IndexOutOfBounds { index: usize, len: usize },
    InvalidRange { start: usize, end: usize },
    CapacityExceeded { capacity: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            ListError::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} is after end {end}")
            }
            ListError::CapacityExceeded { capacity } => {
                write!(f, "storage capacity of {capacity} exceeded")
            }
        }
    }
}

impl core::error::Error for ListError {}

/// An ordered, indexable list of `T` stored contiguously in `S`.
///
/// Lookups (`get`, `find`, `end`) return `None` rather than failing. Index
/// based mutation returns a [`ListError`] and leaves the list untouched.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct List<T, S = Vec<T>> {
    items: S,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

/// A list with room for at most `N` elements and no allocator.
pub type BoundedList<T, const N: usize> = List<T, heapless::Vec<T, N>>;

impl<T> List<T> {
    pub fn new() -> Self {
        Self::from_storage(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Vec::with_capacity(capacity))
    }
}

impl<T, S: VecLike<T>> List<T, S> {
    /// Wraps existing storage; its current contents become the list.
    pub fn from_storage(items: S) -> Self {
        Self {
            items,
            _phantom: PhantomData,
        }
    }

    pub fn into_storage(self) -> S {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Iterates front to back. Each call starts again from index 0.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ListError> {
        let len = self.len();
        let Some(slot) = self.items.get_mut(index) else {
            log::debug!("set: index {index} out of bounds for length {len}");
            return Err(ListError::IndexOutOfBounds { index, len });
        };
        Ok(core::mem::replace(slot, item))
    }

    /// The last element.
    pub fn end(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    pub fn try_add(&mut self, item: T) -> Result<(), ListError> {
        self.items.push(item).map_err(|_| self.capacity_exceeded("add"))
    }

    /// Inserts `item` at `index`, shifting everything after it one place
    /// right. `index == len()` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.len() {
            return Err(self.out_of_bounds("insert", index));
        }
        self.items
            .insert(index, item)
            .map_err(|_| self.capacity_exceeded("insert"))
    }

    /// Removes the first element equal to `item`. Returns whether one was
    /// found.
    pub fn erase(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.position(|candidate| candidate == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len() {
            return Err(self.out_of_bounds("remove_at", index));
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Makes room for `size` elements in total without changing `len()`.
    pub fn try_reserve(&mut self, size: usize) -> Result<(), ListError> {
        if !self.items.reserve_total(size) {
            log::debug!(
                "reserve: {size} slots requested from storage of capacity {}",
                self.capacity()
            );
            return Err(ListError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// A copy of the elements `start..=end` in new storage.
    pub fn sublist(&self, start: usize, end: usize) -> Result<Self, ListError>
    where
        T: Clone,
        S: Default,
    {
        if start > end {
            log::debug!("sublist: start {start} is after end {end}");
            return Err(ListError::InvalidRange { start, end });
        }
        if end >= self.len() {
            return Err(self.out_of_bounds("sublist", end));
        }

        let mut sublist = Self::default();
        for item in &self.as_slice()[start..=end] {
            sublist.try_add(item.clone())?;
        }
        Ok(sublist)
    }

    /// A shallow copy: every element is cloned into independent storage.
    pub fn duplicate(&self) -> Self
    where
        S: Clone,
    {
        Self::from_storage(self.items.clone())
    }

    fn out_of_bounds(&self, operation: &str, index: usize) -> ListError {
        let len = self.len();
        log::debug!("{operation}: index {index} out of bounds for length {len}");
        ListError::IndexOutOfBounds { index, len }
    }

    fn capacity_exceeded(&self, operation: &str) -> ListError {
        let capacity = self.capacity();
        log::debug!("{operation}: storage full at capacity {capacity}");
        ListError::CapacityExceeded { capacity }
    }
}

impl<T, S: Growable<T>> List<T, S> {
    pub fn add(&mut self, item: T) {
        self.items.push_grow(item);
    }

    /// Same as [`List::add`].
    pub fn push_back(&mut self, item: T) {
        self.add(item);
    }

    /// Makes room for `size` elements in total. Never changes `len()`; use
    /// [`List::resize`] to grow the list itself.
    pub fn reserve(&mut self, size: usize) {
        if size > self.capacity() {
            log::trace!("reserve: growing capacity {} to {size}", self.capacity());
        }
        self.items.reserve_grow(size);
    }

    /// Pads the list with copies of `value` until it holds `size` elements.
    /// Never shrinks.
    pub fn resize(&mut self, size: usize, value: T)
    where
        T: Clone,
    {
        self.reserve(size);
        while self.len() < size {
            self.items.push_grow(value.clone());
        }
    }
}

impl<T, S: VecLike<T> + Default> Default for List<T, S> {
    fn default() -> Self {
        Self::from_storage(S::default())
    }
}

impl<T, S: VecLike<T> + Clone> Clone for List<T, S> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T: fmt::Debug, S: VecLike<T>> fmt::Debug for List<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, S, O> PartialEq<List<T, O>> for List<T, S>
where
    T: PartialEq,
    S: VecLike<T>,
    O: VecLike<T>,
{
    fn eq(&self, other: &List<T, O>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, S: VecLike<T>> Eq for List<T, S> {}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_storage(items)
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.items
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for BoundedList<T, N> {
    type Error = ListError;

    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        let Ok(storage) = heapless::Vec::from_slice(items) else {
            log::debug!("try_from: {} items do not fit capacity {}", items.len(), N);
            return Err(ListError::CapacityExceeded { capacity: N });
        };
        Ok(Self::from_storage(storage))
    }
}

impl<T, S: Growable<T> + Default> FromIterator<T> for List<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T, S: Growable<T>> Extend<T> for List<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T, S: VecLike<T>> IntoIterator for &'a List<T, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: VecLike<T>> IntoIterator for &'a mut List<T, S> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, S> IntoIterator for List<T, S>
where
    S: VecLike<T> + IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
