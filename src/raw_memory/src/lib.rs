/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! `RawMemory<T>` owns a single heap allocation with room for a fixed number of `T`s,
//! without ever treating any of those slots as initialized.
//!
//! It is the storage half of a vector: it knows how big its allocation is and how to
//! release it, but it has no notion of which slots hold live values. Tracking element
//! lifetimes (and running destructors) is entirely up to the owner.
//!
//! # Memory layout
//!
//! ```text
//!   Stack               |              Heap
//!   -----               |              ----
//!                       |
//!  +---------------+    |             +----------------------+
//!  | ptr (8 bytes) | -------------->  | slot 0   (uninit)    |
//!  | cap (8 bytes) |    |             | slot 1   (uninit)    |
//!  +---------------+    |             | ...                  |
//!                       |             | slot cap-1 (uninit)  |
//!                       |             +----------------------+
//! ```
//!
//! A buffer with a capacity of zero never allocates; neither does a buffer of a
//! zero-sized type, whatever its capacity. In both cases `ptr` is a dangling,
//! well-aligned pointer and [`RawMemory::is_allocated`] returns `false`.
use std::alloc::{Layout, alloc, dealloc};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::{fmt, mem};

use layout::*;

mod error;
pub(crate) mod layout;

pub use error::{TryReserveError, handle_reserve_error};

/// See the crate's top level documentation for a description of this type.
pub struct RawMemory<T> {
    // # Invariants
    //
    // - If `needs_allocation::<T>(cap)`, `ptr` points to the start of an allocation
    //   obtained from the global allocator with `allocation_layout::<T>(cap)`.
    // - Otherwise `ptr` is `NonNull::dangling()` and nothing is owned.
    ptr: NonNull<T>,
    cap: usize,
    // This marker type has no consequences for variance, but is necessary
    // to make the compiler's drop logic behave as if we own a `T`.
    //
    // For details, see:
    // https://github.com/rust-lang/rfcs/blob/master/text/0769-sound-generic-drop.md#phantom-data
    _phantom: PhantomData<T>,
}

// SAFETY:
// `RawMemory<T>` is a uniquely owned allocation of `T` slots, the same as the
// buffer inside a `Vec<T>`. Sending it across threads is safe when `T` is `Send`.
unsafe impl<T: Send> Send for RawMemory<T> {}

// SAFETY:
// Shared references to a `RawMemory<T>` only hand out raw pointers, which
// require `unsafe` to dereference. Safe when `T` is `Sync`, as for `Vec<T>`.
unsafe impl<T: Sync> Sync for RawMemory<T> {}

impl<T> RawMemory<T> {
    /// Creates an empty buffer.
    ///
    /// This will not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates uninitialized storage for exactly `cap` elements.
    ///
    /// If `cap` is 0, or `T` is zero-sized, no memory is allocated.
    ///
    /// # Panics
    ///
    /// Panics if the size of the allocation would exceed `isize::MAX` bytes.
    /// Aborts through [`std::alloc::handle_alloc_error`] if the allocator fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_memory::RawMemory;
    ///
    /// let buf = RawMemory::<u64>::with_capacity(4);
    /// assert_eq!(buf.capacity(), 4);
    /// assert!(buf.is_allocated());
    ///
    /// let empty = RawMemory::<u64>::with_capacity(0);
    /// assert!(!empty.is_allocated());
    /// ```
    pub fn with_capacity(cap: usize) -> Self {
        match Self::try_with_capacity(cap) {
            Ok(buf) => buf,
            Err(err) => handle_reserve_error(err),
        }
    }

    /// Fallible version of [`RawMemory::with_capacity`].
    ///
    /// # Errors
    ///
    /// Returns [`TryReserveError::CapacityOverflow`] if the size of the allocation
    /// would exceed `isize::MAX` bytes, [`TryReserveError::AllocError`] if the
    /// allocator reports a failure.
    pub fn try_with_capacity(cap: usize) -> Result<Self, TryReserveError> {
        if !needs_allocation::<T>(cap) {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _phantom: PhantomData,
            });
        }

        let layout = allocation_layout::<T>(cap)?;
        debug_assert!(layout.size() > 0);
        // SAFETY:
        // `layout.size()` is greater than zero, since `cap` is greater than zero
        // and `T` is not a zero-sized type (see `needs_allocation`).
        let ptr = unsafe { alloc(layout) } as *mut T;

        let Some(ptr) = NonNull::new(ptr) else {
            tracing::debug!(
                capacity = cap,
                bytes = layout.size(),
                "raw memory allocation failed"
            );
            return Err(TryReserveError::AllocError { layout });
        };

        Ok(Self {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `true` if the buffer owns memory obtained from the global allocator.
    #[inline]
    pub const fn is_allocated(&self) -> bool {
        needs_allocation::<T>(self.cap)
    }

    /// Returns the number of bytes owned on the heap. Returns 0 if nothing was allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_memory::RawMemory;
    ///
    /// assert_eq!(RawMemory::<u32>::with_capacity(5).mem_usage(), 20);
    /// assert_eq!(RawMemory::<u32>::new().mem_usage(), 0);
    /// ```
    pub fn mem_usage(&self) -> usize {
        if self.is_allocated() {
            self.current_layout().size()
        } else {
            0
        }
    }

    /// Returns a pointer to the first slot.
    ///
    /// The pointer is never null. When nothing is allocated it is dangling,
    /// but well-aligned, so it can back an empty slice.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    ///
    /// See [`RawMemory::as_ptr`].
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the address of the slot at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be strictly less than [`RawMemory::capacity`].
    /// This is only checked when debug assertions are enabled.
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(
            index < self.cap,
            "slot index {index} out of bounds for capacity {}",
            self.cap
        );
        // SAFETY:
        // The caller guarantees that `index < cap`, so the offsetted pointer
        // stays within the allocation (or is a no-op offset for zero-sized types).
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Returns the address `offset` slots past the start of the buffer.
    ///
    /// Unlike [`RawMemory::slot`], the one-past-the-end address is allowed.
    ///
    /// # Safety
    ///
    /// `offset` must be less than or equal to [`RawMemory::capacity`].
    /// This is only checked when debug assertions are enabled.
    #[inline]
    pub unsafe fn offset(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.cap,
            "offset {offset} out of bounds for capacity {}",
            self.cap
        );
        // SAFETY:
        // The caller guarantees that `offset <= cap`, so the result is either
        // within the allocation or one byte past its end.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchanges the storage of two buffers. No slot is read or written.
    #[inline]
    pub fn swap(&mut self, other: &mut RawMemory<T>) {
        mem::swap(self, other);
    }

    /// Takes ownership of the storage, leaving an empty buffer in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_memory::RawMemory;
    ///
    /// let mut buf = RawMemory::<u8>::with_capacity(8);
    /// let moved = buf.take();
    /// assert_eq!(moved.capacity(), 8);
    /// assert_eq!(buf.capacity(), 0);
    /// assert!(!buf.is_allocated());
    /// ```
    #[inline]
    pub fn take(&mut self) -> RawMemory<T> {
        mem::take(self)
    }

    /// The layout the current allocation was obtained with.
    fn current_layout(&self) -> Layout {
        debug_assert!(self.is_allocated());
        // SAFETY:
        // The very same layout was successfully computed by `allocation_layout`
        // when the buffer was allocated, so its size doesn't overflow `isize::MAX`
        // and the alignment is the (power of two) alignment of `T`.
        unsafe {
            Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>())
        }
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        if self.is_allocated() {
            // Elements are *not* dropped here: the buffer has no idea which
            // slots are initialized. That's the owner's job.
            //
            // SAFETY:
            // - The pointer was allocated via the same global allocator.
            // - The layout we used to allocate the pointer matches the layout
            //   we're using to deallocate it.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, self.current_layout()) }
        }
    }
}

impl<T> Default for RawMemory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("ptr", &self.ptr)
            .field("capacity", &self.cap)
            .finish()
    }
}
