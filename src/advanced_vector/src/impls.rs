/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Standard trait implementations for [`Vector`].
use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice::SliceIndex;

use crate::Vector;

impl<T> Default for Vector<T> {
    fn default() -> Vector<T> {
        Vector::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Deep-copies all elements into storage sized for exactly `self.len()` elements.
    fn clone(&self) -> Vector<T> {
        let mut copy = Vector::with_capacity(self.len);
        for item in self.iter() {
            // Never reallocates, since capacity matches the number of elements.
            copy.push(item.clone());
        }
        copy
    }

    /// Overwrites `self` with a copy of `source`, reusing the existing storage
    /// (and the existing elements, via [`Clone::clone_from`]) whenever possible.
    fn clone_from(&mut self, source: &Vector<T>) {
        if source.len > self.capacity() {
            // Not enough room: build a full copy on the side and swap it in.
            // If cloning panics, `self` is left untouched.
            let mut copy = source.clone();
            self.swap(&mut copy);
        } else if self.len >= source.len {
            for (dst, src) in self.iter_mut().zip(source.iter()) {
                dst.clone_from(src);
            }
            self.truncate(source.len);
        } else {
            let (head, tail) = source.split_at(self.len);
            for (dst, src) in self.iter_mut().zip(head) {
                dst.clone_from(src);
            }
            for item in tail {
                let value = item.clone();
                // SAFETY:
                // `self.len < source.len <= capacity`, so the slot is within capacity
                // and uninitialized.
                unsafe { ptr::write(self.buf.slot(self.len), value) };
                self.len += 1;
            }
        }
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds, in both debug and release builds.
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, in both debug and release builds.
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for Vector<T> {
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let hint = iter.size_hint().0;
        if hint > 0 {
            self.reserve_additional(hint);
        }
        for x in iter {
            self.push(x);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for Vector<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Vector<T> {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    #[inline]
    fn partial_cmp(&self, other: &Vector<T>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    #[inline]
    fn cmp(&self, other: &Vector<T>) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<A, B> PartialEq<Vector<B>> for Vector<A>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &Vector<B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<A, B> PartialEq<Vec<B>> for Vector<A>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &Vec<B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<A, B> PartialEq<[B]> for Vector<A>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, A, B> PartialEq<&'a [B]> for Vector<A>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &&'a [B]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize, A, B> PartialEq<[B; N]> for Vector<A>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &[B; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, const N: usize, A, B> PartialEq<&'a [B; N]> for Vector<A>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &&'a [B; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(s: &[T]) -> Vector<T> {
        s.iter().cloned().collect()
    }
}

impl<T: Clone> From<&mut [T]> for Vector<T> {
    fn from(s: &mut [T]) -> Vector<T> {
        s.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(s: [T; N]) -> Vector<T> {
        s.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(s: Vec<T>) -> Self {
        s.into_iter().collect()
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(s: Vector<T>) -> Self {
        s.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advanced_vector;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clone_is_exactly_sized() {
        let mut v: Vector<i32> = Vector::with_capacity(16);
        v.extend([1, 2, 3]);
        let w = v.clone();
        assert_eq!(w, [1, 2, 3]);
        assert_eq!(w.capacity(), 3);
        // they should be disjoint in memory.
        assert!(v.as_ptr() != w.as_ptr());
    }

    #[test]
    fn test_clone_from_reuses_storage() {
        let source = advanced_vector![String::from("a"), String::from("b")];

        // Fewer live elements than the source, but enough capacity.
        let mut dst: Vector<String> = Vector::with_capacity(4);
        dst.push(String::from("x"));
        let dst_ptr = dst.as_ptr();
        dst.clone_from(&source);
        assert_eq!(dst, ["a", "b"]);
        assert_eq!(dst.as_ptr(), dst_ptr);
        assert_eq!(dst.len, 2);

        // More live elements than the source.
        let mut dst = advanced_vector![
            String::from("x"),
            String::from("y"),
            String::from("z")
        ];
        let dst_ptr = dst.as_ptr();
        dst.clone_from(&source);
        assert_eq!(dst, ["a", "b"]);
        assert_eq!(dst.as_ptr(), dst_ptr);
        assert_eq!(dst.capacity(), 3);
    }
}
