/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! `Vector<T>` is a growable, contiguous sequence built on top of a [`RawMemory<T>`]
//! buffer and an explicit count of live elements.
//!
//! # Memory layout
//!
//! ```text
//!   Stack               |              Heap
//!   -----               |              ----
//!                       |
//!  +---------------+    |             +----------------------+
//!  | ptr (8 bytes) | -------------->  | 12          (8 bytes)|  \
//!  | cap (8 bytes) |    |             | 151         (8 bytes)|   } live: [0, len)
//!  | len (8 bytes) |    |             | 2           (8 bytes)|  /
//!  +---------------+    |             | (uninit)    (8 bytes)|  } raw: [len, cap)
//!                       |             +----------------------+
//! ```
//!
//! `len` is the only source of truth about which slots hold live values.
//! It is raised only *after* a slot has been written, and lowered *before*
//! a slot is dropped or moved out, so an unwinding panic never observes a
//! slot that is counted as live but uninitialized.
//!
//! # Growth
//!
//! When a new element doesn't fit, capacity doubles (or becomes 1, starting
//! from 0). [`Vector::reserve`] and [`Vector::resize`] allocate exactly what
//! they are asked for.
//!
//! # Panic safety
//!
//! Operations that add a single element (`push`, `emplace_back`, `insert`,
//! `emplace`) provide the strong guarantee: if building the new element
//! panics, the vector is left exactly as it was. When storage must grow, the
//! new element is constructed in the new buffer *before* any existing element
//! is relocated.
//!
//! Relocating elements to a new buffer is always a move. Moves in Rust are
//! bitwise copies which cannot fail, so there is never a reason to fall back
//! to `Clone` in order to keep the original buffer intact.
//!
//! # Bounds checking
//!
//! Element access through `Index`/`IndexMut`, as well as `insert`, `emplace`,
//! `remove` and `erase`, always panic on an out of bounds position, in both
//! debug and release builds.
use std::cmp::{Ordering, max};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use raw_memory::{RawMemory, handle_reserve_error};

mod impls;
mod into_iter;

pub use into_iter::IntoIter;
pub use raw_memory::TryReserveError;

/// See the crate's top level documentation for a description of this type.
pub struct Vector<T> {
    // # Invariants
    //
    // - `len <= buf.capacity()`
    // - Slots `[0, len)` of `buf` hold initialized values owned by the vector.
    // - Slots `[len, capacity)` are uninitialized.
    buf: RawMemory<T>,
    len: usize,
}

/// Creates a [`Vector`] containing the arguments.
///
/// ```rust
/// use advanced_vector::advanced_vector;
///
/// let v = advanced_vector![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[0], 1);
/// assert_eq!(v[1], 2);
/// assert_eq!(v[2], 3);
///
/// let v = advanced_vector![1; 3];
/// assert_eq!(v, [1, 1, 1]);
/// ```
#[macro_export]
macro_rules! advanced_vector {
    (@UNIT $($t:tt)*) => (());

    ($elem:expr; $n:expr) => ({
        let elem = $elem;
        let mut vec = $crate::Vector::new();
        vec.resize_with($n, || ::core::clone::Clone::clone(&elem));
        vec
    });
    () => {$crate::Vector::new()};
    ($($x:expr),*) => ({
        let len = [$($crate::advanced_vector!(@UNIT $x)),*].len();
        let mut vec = $crate::Vector::with_capacity(len);
        $(vec.push($x);)*
        vec
    });
    ($($x:expr,)*) => ($crate::advanced_vector![$($x),*]);
}

impl<T> Vector<T> {
    /// Creates a new empty `Vector`.
    ///
    /// This will not allocate.
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawMemory::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `Vector<T>` with room for exactly `capacity` elements.
    ///
    /// If `capacity` is 0, the vector will not allocate.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::Vector;
    ///
    /// let mut vec = Vector::with_capacity(10);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// for i in 0..10 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.push(11);
    /// assert_eq!(vec.capacity(), 20);
    /// ```
    pub fn with_capacity(capacity: usize) -> Vector<T> {
        Vector {
            buf: RawMemory::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the vector owns memory obtained from the global allocator.
    #[inline]
    pub fn has_allocated(&self) -> bool {
        self.buf.is_allocated()
    }

    /// Returns the memory usage of the vector's storage on the heap, in bytes.
    ///
    /// Does not take into account any additional memory owned by the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::Vector;
    ///
    /// let vec: Vector<i32> = Vector::with_capacity(5);
    /// assert_eq!(vec.mem_usage(), 20);
    ///
    /// assert_eq!(Vector::<u64>::new().mem_usage(), 0);
    /// ```
    pub fn mem_usage(&self) -> usize {
        self.buf.mem_usage()
    }

    /// Returns a raw pointer to the first element (the "begin" position).
    ///
    /// The pointer is never null and `as_ptr().add(len())` is the "end" position.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a raw mutable pointer to the first element.
    ///
    /// See [`Vector::as_ptr`].
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Extracts a slice containing the entire vector.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY:
        // - The pointer is non-null and aligned, even when nothing is allocated.
        // - The first `len` elements are initialized, as guaranteed by the
        //   length-related invariant of `Vector`.
        // - There are no mutable references to the elements, since
        //   `as_slice` takes a shared reference to `self`.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice of the entire vector.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY:
        // - The pointer is non-null and aligned, even when nothing is allocated.
        // - The first `len` elements are initialized, as guaranteed by the
        //   length-related invariant of `Vector`.
        // - We have exclusive access to the elements, since `as_mut_slice`
        //   takes a mutable reference to `self`.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Appends an element to the back of the vector.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut vec = advanced_vector![1, 2];
    /// vec.push(3);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.emplace_back(move || value);
    }

    /// Constructs a new element at the back of the vector, using `make` to build it,
    /// and returns a mutable reference to it.
    ///
    /// If `make` panics, the vector is left unchanged, even if the call
    /// needed to grow the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::Vector;
    ///
    /// let mut vec = Vector::new();
    /// let name = vec.emplace_back(|| String::from("Ferris"));
    /// name.push_str(" the crab");
    /// assert_eq!(vec, ["Ferris the crab"]);
    /// ```
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let old_len = self.len;
        self.emplace(old_len, make)
    }

    /// Removes the last element from the vector and returns it, or [`None`] if it
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut vec = advanced_vector![1, 2, 3];
    /// assert_eq!(vec.pop(), Some(3));
    /// assert_eq!(vec, [1, 2]);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY:
        // - `self.len` (the old length minus one) is within capacity.
        // - The slot was initialized, and it is no longer counted as live,
        //   so the value is read exactly once.
        unsafe { Some(ptr::read(self.buf.slot(self.len))) }
    }

    /// Drops the last element of the vector in place. Does nothing if the vector is empty.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            return;
        }
        // Decrement the length *before* calling drop_in_place(),
        // so that a panic on `Drop` doesn't try to re-drop the
        // value that just failed to drop.
        self.len -= 1;
        // SAFETY:
        // - The slot is within capacity and was initialized.
        // - It is no longer counted as live, so it won't be dropped again.
        unsafe { ptr::drop_in_place(self.buf.slot(self.len)) }
    }

    /// Inserts an element at position `index` within the vector, shifting all
    /// elements after it to the right, and returns a mutable reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut vec = advanced_vector![1, 2, 3];
    /// vec.insert(1, 4);
    /// assert_eq!(vec, [1, 4, 2, 3]);
    /// vec.insert(4, 5);
    /// assert_eq!(vec, [1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace(index, move || value)
    }

    /// Constructs a new element at position `index` using `make`, shifting all
    /// elements after it to the right, and returns a mutable reference to it.
    ///
    /// `make` is invoked before any existing element is touched: if it panics,
    /// the vector is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn emplace<F>(&mut self, index: usize, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let old_len = self.len;
        assert!(index <= old_len, "Index out of bounds");

        if old_len == self.capacity() {
            let new_cap = self.grown_capacity();
            self.reallocate_around(new_cap, index, make);
        } else {
            let value = make();
            // SAFETY:
            // `index <= old_len < capacity`, so the slot is within capacity.
            let index_ptr = unsafe { self.buf.slot(index) };
            // SAFETY:
            // - There is room for one more element, since `old_len < capacity`,
            //   so shifting `[index, old_len)` right by one stays in bounds.
            // - `ptr::copy` handles the overlapping ranges.
            // - `index_ptr.add(1)` is at most one past `old_len`, within capacity.
            unsafe {
                ptr::copy(index_ptr, index_ptr.add(1), old_len - index);
                ptr::write(index_ptr, value);
            }
            self.len = old_len + 1;
        }

        // SAFETY:
        // The slot at `index` was initialized above, and the returned reference
        // borrows `self` mutably, so no other access can happen through it.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Removes and returns the element at position `index` within the vector,
    /// shifting all elements after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut v = advanced_vector![1, 2, 3];
    /// assert_eq!(v.remove(1), 2);
    /// assert_eq!(v, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        let old_len = self.len;
        assert!(index < old_len, "Index out of bounds");

        self.len = old_len - 1;

        // SAFETY:
        // `index < old_len <= capacity`.
        let index_ptr = unsafe { self.buf.slot(index) };
        // SAFETY:
        // - The slot is initialized, since `index < old_len`.
        // - The value is read exactly once: the gap is overwritten right below.
        let value = unsafe { ptr::read(index_ptr) };
        // We shift everything past `index` to the left by 1, to fill the
        // gap left by the removed element.
        //
        // SAFETY:
        // - `[index + 1, old_len)` is initialized and within capacity.
        // - The destination `[index, old_len - 1)` is within capacity.
        // - `ptr::copy` handles the overlapping ranges.
        unsafe {
            ptr::copy(index_ptr.add(1), index_ptr, old_len - index - 1);
        }
        value
    }

    /// Drops the element at position `index`, shifting all elements after it to
    /// the left.
    ///
    /// Returns the index of the element that now occupies position `index`, which
    /// is equal to [`Vector::len`] (the "end" position) if the removed element
    /// was the last one. Calling `erase` on an empty vector does nothing and
    /// returns the end position.
    ///
    /// # Panics
    ///
    /// Panics if the vector isn't empty and `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut v = advanced_vector![1, 2, 3];
    /// assert_eq!(v.erase(0), 0);
    /// assert_eq!(v, [2, 3]);
    /// assert_eq!(v.erase(1), v.len());
    /// assert_eq!(v, [2]);
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        if self.is_empty() {
            return self.len;
        }
        // The removed element is dropped only once the remaining elements
        // are back in place.
        drop(self.remove(index));
        index
    }

    /// Swaps the contents of two vectors, without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut Vector<T>) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Replaces the contents of `self` with the elements of `source`.
    ///
    /// If `self` doesn't have enough capacity to hold all of `source`'s elements,
    /// it takes over `source`'s storage. Otherwise the current elements are dropped
    /// and `source`'s elements are moved into `self`'s existing storage.
    /// In both cases `self` ends up holding exactly the elements of `source`,
    /// in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::{Vector, advanced_vector};
    ///
    /// let mut dst = Vector::with_capacity(8);
    /// dst.push(7);
    ///
    /// dst.assign(advanced_vector![1, 2, 3]);
    /// assert_eq!(dst, [1, 2, 3]);
    /// // The storage of `dst` was large enough, so it was kept.
    /// assert_eq!(dst.capacity(), 8);
    /// ```
    pub fn assign(&mut self, mut source: Vector<T>) {
        if source.len > self.capacity() {
            self.swap(&mut source);
            // `source` now holds our previous contents, which are dropped here.
            return;
        }

        self.clear();

        let count = source.len;
        // `source` no longer owns its elements: they are about to be moved out.
        source.len = 0;
        // SAFETY:
        // - The first `count` slots of `source` are initialized.
        // - `count <= self.capacity()`, checked above, and `self` is empty.
        // - The two buffers are distinct allocations, so they don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(source.buf.as_ptr(), self.buf.as_mut_ptr(), count);
        }
        self.len = count;
    }

    /// Ensures the vector can hold at least `new_capacity` elements in total.
    ///
    /// If `new_capacity` is less than or equal to the current capacity, this does
    /// nothing. Otherwise, storage is reallocated to exactly `new_capacity`
    /// elements and the existing elements are moved over, in order.
    ///
    /// Unlike [`Vec::reserve`], the argument is the total capacity, not the
    /// number of additional elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut vec = advanced_vector![1];
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            handle_reserve_error(err)
        }
    }

    /// Fallible version of [`Vector::reserve`].
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, an error
    /// is returned and the vector is left unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.try_reallocate(new_capacity)
    }

    /// Resizes the vector in-place so that `len` is equal to `new_len`.
    ///
    /// If `new_len` is smaller than `len`, the trailing elements are dropped.
    /// If `new_len` is greater, the vector reserves exactly `new_len` slots
    /// and fills the tail with `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut vec = advanced_vector![1, 2, 3];
    /// vec.resize(5);
    /// assert_eq!(vec, [1, 2, 3, 0, 0]);
    /// vec.resize(1);
    /// assert_eq!(vec, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the vector in-place so that `len` is equal to `new_len`, calling
    /// `f` to produce each new element.
    ///
    /// See [`Vector::resize`].
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.len) {
            Ordering::Less => self.truncate(new_len),
            Ordering::Greater => {
                self.reserve(new_len);
                while self.len < new_len {
                    // SAFETY:
                    // `self.len < new_len <= capacity`, thanks to `reserve`.
                    unsafe { ptr::write(self.buf.slot(self.len), f()) };
                    // Bump the length after each write, so that a panic in `f`
                    // drops exactly the elements built so far.
                    self.len += 1;
                }
            }
            Ordering::Equal => {}
        }
    }

    /// Shortens the vector, keeping the first `len` elements and dropping
    /// the rest.
    ///
    /// If `len` is greater than the vector's current length, this has no
    /// effect. The capacity is left untouched.
    pub fn truncate(&mut self, len: usize) {
        while len < self.len {
            self.pop_back();
        }
    }

    /// Clears the vector, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity
    /// of the vector.
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();

        // We first set the length to 0 to avoid dropping elements
        // twice if an element's `Drop` implementation panics.
        self.len = 0;

        // SAFETY:
        // - The pointer is valid and aligned, since it comes from a reference.
        // - The elements are no longer counted as live, so they won't be
        //   dropped again.
        unsafe { ptr::drop_in_place(elements) }
    }

    /// Capacity to grow to when the vector is full.
    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            cap => cap.checked_mul(2).expect("capacity overflow"),
        }
    }

    /// Reserves room for `additional` more elements, growing geometrically.
    fn reserve_additional(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .expect("capacity overflow");
        if required > self.capacity() {
            let new_cap = max(required, self.grown_capacity());
            self.reserve(new_cap);
        }
    }

    /// Moves all elements to a freshly allocated buffer of `new_cap` slots.
    fn try_reallocate(&mut self, new_cap: usize) -> Result<(), TryReserveError> {
        debug_assert!(new_cap >= self.len);
        let mut new_buf = RawMemory::try_with_capacity(new_cap)?;
        tracing::trace!(
            len = self.len,
            old_capacity = self.capacity(),
            new_capacity = new_cap,
            "reallocating vector storage"
        );

        // SAFETY:
        // - The first `len` slots of the old buffer are initialized.
        // - The new buffer has room for at least `len` elements.
        // - The buffers are distinct allocations, so they don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }
        self.buf.swap(&mut new_buf);
        // `new_buf` now owns the old storage. Its elements have been moved out,
        // and dropping a `RawMemory` only deallocates, so nothing is dropped twice.
        Ok(())
    }

    /// Moves all elements to a freshly allocated buffer of `new_cap` slots,
    /// leaving a gap at `index` which is filled with the value built by `make`.
    ///
    /// The new element is built and written *before* any existing element is
    /// moved: if `make` panics, the new buffer is released and `self` is untouched.
    fn reallocate_around<F>(&mut self, new_cap: usize, index: usize, make: F)
    where
        F: FnOnce() -> T,
    {
        let old_len = self.len;
        debug_assert!(index <= old_len && old_len < new_cap);

        let mut new_buf = RawMemory::with_capacity(new_cap);
        tracing::trace!(
            len = old_len,
            old_capacity = self.capacity(),
            new_capacity = new_cap,
            "reallocating vector storage"
        );

        // SAFETY:
        // `index <= old_len < new_cap`.
        unsafe { ptr::write(new_buf.slot(index), make()) };

        let src = self.buf.as_ptr();
        let dst = new_buf.as_mut_ptr();
        // SAFETY:
        // - `[0, index)` and `[index, old_len)` are initialized in the old buffer.
        // - In the new buffer, `[0, index)` and `[index + 1, old_len + 1)` are
        //   within capacity, since `old_len < new_cap`, and don't overlap the
        //   freshly written slot at `index`.
        // - The buffers are distinct allocations, so they don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(src, dst, index);
            ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), old_len - index);
        }

        self.buf.swap(&mut new_buf);
        self.len = old_len + 1;
    }
}

impl<T> Drop for Vector<T> {
    #[inline]
    fn drop(&mut self) {
        // Elements first, since they may own other resources.
        // The storage itself is released by `RawMemory`'s own `Drop`.
        //
        // SAFETY:
        // - The pointer is valid and unaliased, since it comes from a `&mut` reference.
        // - We're inside a `Drop` implementation.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Default> Vector<T> {
    /// Creates a vector with exactly `len` slots, all holding `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::Vector;
    ///
    /// let vec = Vector::<u32>::with_len(3);
    /// assert_eq!(vec, [0, 0, 0]);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        let mut vec = Vector::with_capacity(len);
        vec.resize_with(len, T::default);
        vec
    }
}

impl<T: Clone> Vector<T> {
    /// Clones and appends all elements in a slice to the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use advanced_vector::advanced_vector;
    ///
    /// let mut vec = advanced_vector![1];
    /// vec.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.extend(other.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Tests that rely on access to `Vector`'s internals to
    //! perform their assertions.
    //!
    //! All other tests are located in the `tests` directory, as they only
    //! access methods that are exposed via the public API.
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grown_capacity() {
        let mut v = Vector::<u8>::new();
        assert_eq!(v.grown_capacity(), 1);
        v.reserve(3);
        assert_eq!(v.grown_capacity(), 6);
    }

    #[test]
    fn test_reserve_additional() {
        let mut v = Vector::<u8>::with_capacity(4);
        v.reserve_additional(4);
        assert_eq!(v.capacity(), 4);

        // Geometric growth wins over the exact requirement...
        v.reserve_additional(5);
        assert_eq!(v.capacity(), 8);

        // ...unless the requirement is larger.
        v.reserve_additional(100);
        assert_eq!(v.capacity(), 100);
    }

    #[test]
    fn test_reallocate_around_keeps_order() {
        let mut v = Vector::<u32>::with_capacity(3);
        v.extend([1, 2, 3]);
        v.reallocate_around(7, 1, || 10);
        assert_eq!(v, [1, 10, 2, 3]);
        assert_eq!(v.capacity(), 7);
        assert_eq!(v.len, 4);
    }

    #[test]
    fn test_assign_moves_elements_out_of_source() {
        let mut dst: Vector<String> = Vector::with_capacity(4);
        let mut src = Vector::new();
        src.push("a".to_owned());
        src.push("b".to_owned());
        let dst_ptr = dst.as_ptr();

        dst.assign(src);

        assert_eq!(dst, ["a", "b"]);
        assert_eq!(dst.as_ptr(), dst_ptr);
        assert_eq!(dst.len, 2);
    }

    #[test]
    fn test_zero_sized_values() {
        let mut v = Vector::<()>::new();
        for _ in 0..5 {
            v.push(());
        }
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
        assert!(!v.has_allocated());
        v.insert(2, ());
        v.remove(0);
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
    }
}
