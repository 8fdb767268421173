//! Construction and initialization logic for UnrolledList.
//!
//! This module contains every way of building a list: empty, from repeated
//! values, from iterators and arrays, by deep copy, and with a caller-supplied
//! bucket allocator.

use std::marker::PhantomData;

use crate::allocator::BucketAllocator;
use crate::types::{UnrolledList, NULL_NODE};

impl<T, const K: usize, A: BucketAllocator<T, K> + Default> UnrolledList<T, K, A> {
    /// Create an empty list.
    ///
    /// No bucket is allocated until the first element arrives.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list: UnrolledList<String> = UnrolledList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.bucket_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::new_in(A::default())
    }

    /// Create a list holding `count` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list: UnrolledList<&str, 2> = UnrolledList::from_elem(3, "hello");
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["hello"; 3]);
    /// ```
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(count, value, A::default())
    }

    /// Create a list of `count` elements where element `i` is `f(i)`.
    pub fn from_fn<F>(count: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::from_iter_in((0..count).map(f), A::default())
    }

    /// Create a list of `count` default values.
    pub fn with_default(count: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(count, |_| T::default())
    }
}

impl<T, const K: usize, A: BucketAllocator<T, K>> UnrolledList<T, K, A> {
    /// Create an empty list that takes its buckets from `arena`.
    pub fn new_in(arena: A) -> Self {
        Self {
            arena,
            head: NULL_NODE,
            tail: NULL_NODE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a list holding `count` clones of `value`, using `arena`.
    pub fn from_elem_in(count: usize, value: T, arena: A) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new_in(arena);
        if count > 0 {
            for _ in 1..count {
                list.push_back(value.clone());
            }
            list.push_back(value);
        }
        list
    }

    /// Create a list from an iterator, using `arena`.
    pub fn from_iter_in<I: IntoIterator<Item = T>>(iter: I, arena: A) -> Self {
        let mut list = Self::new_in(arena);
        list.extend(iter);
        list
    }
}

impl<T, const K: usize, A: BucketAllocator<T, K> + Default> Default for UnrolledList<T, K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const K: usize, A: BucketAllocator<T, K> + Default> Clone for UnrolledList<T, K, A> {
    /// Deep copy: every element is cloned into a fresh chain in iteration order.
    ///
    /// The copy gets `A::default()`, not a copy of `self`'s allocator; use
    /// [`from_iter_in`](UnrolledList::from_iter_in) to pick one.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-and-swap: `self` is only touched once the copy is complete, so a
    /// panicking `T::clone` leaves it unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, const K: usize, A: BucketAllocator<T, K> + Default> FromIterator<T> for UnrolledList<T, K, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, A::default())
    }
}

impl<T, const K: usize, A: BucketAllocator<T, K>> Extend<T> for UnrolledList<T, K, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, const K: usize, A: BucketAllocator<T, K>> Extend<&'a T> for UnrolledList<T, K, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const K: usize, const M: usize, A: BucketAllocator<T, K> + Default> From<[T; M]> for UnrolledList<T, K, A> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const K: usize, A: BucketAllocator<T, K> + Default> From<Vec<T>> for UnrolledList<T, K, A> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}
