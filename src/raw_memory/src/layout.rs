/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Utilities for computing the layout of allocations.
use crate::TryReserveError;
use std::alloc::Layout;
use std::mem;

/// Gets the layout of the allocation owned by a `RawMemory<T>` with the given capacity.
///
/// Fails with [`TryReserveError::CapacityOverflow`] if the array would exceed `isize::MAX` bytes.
pub(crate) fn allocation_layout<T>(cap: usize) -> Result<Layout, TryReserveError> {
    Layout::array::<T>(cap).map_err(|_| TryReserveError::CapacityOverflow)
}

/// Returns `true` if a buffer of `cap` slots of `T` occupies any heap memory.
///
/// Empty buffers and buffers of zero-sized types never allocate.
pub(crate) const fn needs_allocation<T>(cap: usize) -> bool {
    cap != 0 && mem::size_of::<T>() != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_allocation_layout() {
        let layout = allocation_layout::<u64>(4).unwrap();
        assert_eq!(layout.size(), 32);
        assert_eq!(layout.align(), 8);

        #[repr(align(64))]
        struct Funky(#[allow(dead_code)] u8);
        let layout = allocation_layout::<Funky>(3).unwrap();
        assert_eq!(layout.size(), 3 * 64);
        assert_eq!(layout.align(), 64);
    }

    #[test]
    fn test_allocation_layout_overflow() {
        assert_eq!(
            allocation_layout::<u64>(usize::MAX / 4),
            Err(TryReserveError::CapacityOverflow)
        );
        assert_eq!(
            allocation_layout::<u8>(isize::MAX as usize + 1),
            Err(TryReserveError::CapacityOverflow)
        );
    }

    #[test]
    fn test_needs_allocation() {
        assert!(!needs_allocation::<u32>(0));
        assert!(needs_allocation::<u32>(1));
        assert!(!needs_allocation::<()>(0));
        assert!(!needs_allocation::<()>(1024));
    }
}
