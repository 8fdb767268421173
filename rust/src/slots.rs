//! Uninitialized element storage for a single bucket.
//!
//! A `SlotArray` is a fixed array of `K` cells that are written and dropped
//! one at a time. It never tracks which cells are live; the owning bucket's
//! length does that, and every method here is `unsafe` for that reason.

use std::mem::MaybeUninit;
use std::ptr;

/// `K` cells, each either holding one `T` or uninitialized.
pub struct SlotArray<T, const K: usize> {
    cells: [MaybeUninit<T>; K],
}

impl<T, const K: usize> SlotArray<T, K> {
    /// All cells start uninitialized; nothing is constructed.
    pub fn new() -> Self {
        Self {
            cells: [const { MaybeUninit::uninit() }; K],
        }
    }

    #[inline]
    fn ptr(&self, i: usize) -> *const T {
        debug_assert!(i <= K);
        // SAFETY: `i <= K` keeps the pointer inside or one past the array.
        unsafe { self.cells.as_ptr().add(i).cast::<T>() }
    }

    #[inline]
    fn mut_ptr(&mut self, i: usize) -> *mut T {
        debug_assert!(i <= K);
        // SAFETY: as in `ptr`.
        unsafe { self.cells.as_mut_ptr().add(i).cast::<T>() }
    }

    /// Construct `value` in cell `i`.
    ///
    /// # Safety
    /// `i < K` and cell `i` must be uninitialized, otherwise its previous value leaks.
    #[inline]
    pub unsafe fn write(&mut self, i: usize, value: T) {
        debug_assert!(i < K);
        self.mut_ptr(i).write(value);
    }

    /// Move the value out of cell `i`, leaving it uninitialized.
    ///
    /// # Safety
    /// Cell `i` must be live. It must be treated as uninitialized afterwards.
    #[inline]
    pub unsafe fn read(&mut self, i: usize) -> T {
        debug_assert!(i < K);
        self.mut_ptr(i).read()
    }

    /// # Safety
    /// Cell `i` must be live.
    #[inline]
    pub unsafe fn get(&self, i: usize) -> &T {
        &*self.ptr(i)
    }

    /// # Safety
    /// Cell `i` must be live.
    #[inline]
    pub unsafe fn get_mut(&mut self, i: usize) -> &mut T {
        &mut *self.mut_ptr(i)
    }

    /// The first `len` cells as a slice.
    ///
    /// # Safety
    /// Cells `[0, len)` must be live and `len <= K`.
    #[inline]
    pub unsafe fn prefix(&self, len: usize) -> &[T] {
        std::slice::from_raw_parts(self.ptr(0), len)
    }

    /// # Safety
    /// Cells `[0, len)` must be live and `len <= K`.
    #[inline]
    pub unsafe fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        std::slice::from_raw_parts_mut(self.mut_ptr(0), len)
    }

    /// Drop the values in cells `[0, len)`.
    ///
    /// # Safety
    /// Cells `[0, len)` must be live; they are uninitialized afterwards.
    pub unsafe fn drop_prefix(&mut self, len: usize) {
        ptr::drop_in_place(self.prefix_mut(len));
    }

    /// Open a gap at `at` by moving cells `[at, live)` up to `[at + 1, live + 1)`.
    ///
    /// # Safety
    /// Cells `[0, live)` must be live, `at <= live < K`. Cell `at` is
    /// uninitialized afterwards.
    #[inline]
    pub unsafe fn shift_right(&mut self, at: usize, live: usize) {
        debug_assert!(at <= live && live < K);
        let base = self.mut_ptr(0);
        ptr::copy(base.add(at), base.add(at + 1), live - at);
    }

    /// Close the gap at `at` by moving cells `[at + 1, live)` down to `[at, live - 1)`.
    ///
    /// # Safety
    /// Cell `at` must already be uninitialized (moved out), cells `[at + 1, live)`
    /// live, `at < live <= K`. Cell `live - 1` is uninitialized afterwards.
    #[inline]
    pub unsafe fn shift_left(&mut self, at: usize, live: usize) {
        debug_assert!(at < live && live <= K);
        let base = self.mut_ptr(0);
        ptr::copy(base.add(at + 1), base.add(at), live - at - 1);
    }

    /// Move cells `[from, from + count)` into `dst` starting at cell 0.
    ///
    /// # Safety
    /// Source cells must be live, `dst` cells `[0, count)` uninitialized and
    /// `from + count <= K`. Source cells are uninitialized afterwards.
    #[inline]
    pub unsafe fn transfer_to(&mut self, from: usize, count: usize, dst: &mut Self) {
        debug_assert!(from + count <= K);
        ptr::copy_nonoverlapping(self.ptr(from), dst.mut_ptr(0), count);
    }
}

impl<T, const K: usize> Default for SlotArray<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
