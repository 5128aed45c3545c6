// src/engine/fixed.rs

//! A bounds-checked, fixed-capacity vector backed by an inline array.
//!
//! Everything the engine tracks during a move is bounded by the number of
//! cells on the board, so nothing here ever needs to grow. `FixedVec` keeps
//! the storage on the stack while still refusing to write past its capacity.

use std::fmt;
use std::ops::Deref;

/// Returned by [`FixedVec::try_push`] when the vector is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed-capacity vector is full (capacity {})", self.capacity)
    }
}

impl std::error::Error for CapacityError {}

/// Array plus length. Only the first `len` slots are live.
#[derive(Clone, Copy)]
pub struct FixedVec<T: Copy + Default, const N: usize> {
    items: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> FixedVec<T, N> {
    /// Creates an empty vector.
    pub fn new() -> Self {
        FixedVec {
            items: [T::default(); N],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `item`, or hands back a `CapacityError` if there is no room.
    pub fn try_push(&mut self, item: T) -> Result<(), CapacityError> {
        if self.len == N {
            return Err(CapacityError { capacity: N });
        }
        self.items[self.len] = item;
        self.len += 1;
        Ok(())
    }

    /// Appends `item`.
    ///
    /// # Panics
    /// Panics if the vector is full. Callers size their vectors so that this
    /// cannot happen; overflowing is a logic error.
    pub fn push(&mut self, item: T) {
        if let Err(e) = self.try_push(item) {
            panic!("{}", e);
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items[..self.len].get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Deref for FixedVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy + Default + fmt::Debug, const N: usize> fmt::Debug for FixedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for FixedVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for FixedVec<T, N> {}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn push_until_full_then_try_push_fails() {
        let mut v: FixedVec<u8, 2> = FixedVec::new();
        v.push(7);
        v.push(9);
        assert_eq!(v.try_push(1), Err(CapacityError { capacity: 2 }));
        assert_eq!(v.as_slice(), &[7, 9]);
    }

    #[test]
    #[should_panic(expected = "capacity 1")]
    fn push_past_capacity_panics() {
        let mut v: FixedVec<u8, 1> = FixedVec::new();
        v.push(1);
        v.push(2);
    }

    #[test]
    fn clear_resets_len_and_hides_stale_items() {
        let mut v: FixedVec<usize, 4> = FixedVec::new();
        v.push(3);
        v.push(4);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.get_mut(0), None);
        v.push(5);
        assert_eq!(&v[..], &[5]);
    }
}
