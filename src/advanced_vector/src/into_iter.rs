/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::iter::FusedIterator;
use std::{fmt, ptr, slice};

use crate::Vector;

/// An iterator that moves out of a [`Vector`].
///
/// Created by the `into_iter` method on [`Vector`] (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T> {
    // # Invariants
    //
    // Slots `[start, vec.len)` are initialized and not yet yielded.
    // Slots `[0, start)` have been moved out and must not be dropped.
    vec: Vector<T>,
    start: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining items of this iterator as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY:
        // `start <= vec.len <= capacity`, so the offsetted pointer stays within
        // (or one past the end of) the vector's storage.
        let start_ptr = unsafe { self.vec.buf.offset(self.start) };
        // SAFETY:
        // - `[start, vec.len)` is initialized and owned by the iterator.
        // - There is no mutable aliasing of the slice, since this method takes a
        //   shared reference to `self`.
        unsafe { slice::from_raw_parts(start_ptr, self.len()) }
    }

    /// Returns the remaining items of this iterator as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY:
        // `start <= vec.len <= capacity`, so the offsetted pointer stays within
        // (or one past the end of) the vector's storage.
        let start_ptr = unsafe { self.vec.buf.offset(self.start) };
        // SAFETY:
        // - `[start, vec.len)` is initialized and owned by the iterator.
        // - We have exclusive access to the slice, since this method takes a
        //   mutable reference to `self`.
        unsafe { slice::from_raw_parts_mut(start_ptr, self.len()) }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            vec: self,
            start: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.vec.len {
            return None;
        }
        let index = self.start;
        self.start += 1;
        // SAFETY:
        // - `index < vec.len`, so the slot is within capacity and initialized.
        // - `start` was bumped past it, so it won't be read or dropped again.
        unsafe { Some(ptr::read(self.vec.buf.slot(index))) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.vec.len - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.vec.len {
            None
        } else {
            self.vec.pop()
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        // The vector must not drop anything itself: the prefix has been
        // moved out, and the remaining elements are dropped right below.
        self.vec.len = 0;
        // SAFETY:
        // - The pointer is valid and aligned, since it comes from a reference.
        // - The elements are no longer counted as live by the vector,
        //   so they are dropped exactly once.
        unsafe { ptr::drop_in_place(remaining) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> AsRef<[T]> for IntoIter<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        // Just create a new `Vector` from the remaining elements and IntoIter it
        Vector::from(self.as_slice()).into_iter()
    }
}
