/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::alloc::{Layout, handle_alloc_error};
use thiserror::Error;

/// Errors that can occur when reserving raw storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TryReserveError {
    /// The requested capacity exceeds `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocError {
        /// The layout of the allocation that failed.
        layout: Layout,
    },
}

/// Converts a failed reservation into the failure mode of the infallible APIs:
/// a panic for a capacity overflow, [`handle_alloc_error`] for an allocator failure.
#[cold]
#[inline(never)]
pub fn handle_reserve_error(err: TryReserveError) -> ! {
    match err {
        TryReserveError::CapacityOverflow => panic!("capacity overflow"),
        TryReserveError::AllocError { layout } => handle_alloc_error(layout),
    }
}
