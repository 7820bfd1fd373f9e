use alloc::vec::Vec;

/// Contiguous storage a [`List`](crate::List) can sit on.
///
/// `insert` and `remove` expect an in-range index; the list checks bounds
/// before calling them.
pub trait VecLike<T> {
    /// Appends `item`, handing it back if the storage is full.
    fn push(&mut self, item: T) -> Result<(), T>;
    /// Inserts `item` at `index <= len`, handing it back if the storage is full.
    fn insert(&mut self, index: usize, item: T) -> Result<(), T>;
    fn remove(&mut self, index: usize) -> T;
    fn get(&self, index: usize) -> Option<&T>;
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn capacity(&self) -> usize;
    fn clear(&mut self);
    /// Makes room for at least `size` elements in total. Returns `false` if
    /// the storage can never hold that many.
    fn reserve_total(&mut self, size: usize) -> bool;
    fn iter(&self) -> core::slice::Iter<'_, T>;
    fn iter_mut(&mut self) -> core::slice::IterMut<'_, T>;
    fn as_slice(&self) -> &[T];
    fn as_mut_slice(&mut self) -> &mut [T];
}

/// Storage that can always make room for one more element.
pub trait Growable<T>: VecLike<T> {
    fn push_grow(&mut self, item: T);
    fn insert_grow(&mut self, index: usize, item: T);
    fn reserve_grow(&mut self, size: usize);
}

impl<T> VecLike<T> for Vec<T> {
    fn push(&mut self, item: T) -> Result<(), T> {
        Vec::push(self, item);
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), T> {
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn reserve_total(&mut self, size: usize) -> bool {
        let additional = size.saturating_sub(Vec::len(self));
        Vec::try_reserve(self, additional).is_ok()
    }

    fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }
}

impl<T> Growable<T> for Vec<T> {
    fn push_grow(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn insert_grow(&mut self, index: usize, item: T) {
        Vec::insert(self, index, item)
    }

    fn reserve_grow(&mut self, size: usize) {
        // `Vec::reserve` counts from the current length, not the capacity.
        if size > Vec::capacity(self) {
            Vec::reserve(self, size - Vec::len(self));
        }
    }
}

impl<T, const N: usize> VecLike<T> for heapless::Vec<T, N> {
    fn push(&mut self, item: T) -> Result<(), T> {
        heapless::Vec::push(self, item)
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), T> {
        heapless::Vec::insert(self, index, item)
    }

    fn remove(&mut self, index: usize) -> T {
        heapless::Vec::remove(self, index)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn capacity(&self) -> usize {
        N
    }

    fn clear(&mut self) {
        heapless::Vec::clear(self)
    }

    fn reserve_total(&mut self, size: usize) -> bool {
        size <= N
    }

    fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn as_slice(&self) -> &[T] {
        heapless::Vec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        heapless::Vec::as_mut_slice(self)
    }
}
