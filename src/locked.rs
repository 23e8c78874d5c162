//! `GlobalAlloc` adapter.
//!
//! ```no_run
//! #[global_allocator]
//! static ALLOCATOR: firstfit::LockedArena<65536> = firstfit::LockedArena::new();
//!
//! fn main() {
//!     ALLOCATOR.init();
//!     // ...
//! }
//! ```
//!
//! The spin lock only serializes threads. An interrupt handler that allocates
//! while the interrupted code holds the lock will spin forever, so mask
//! interrupts around allocation on single-core targets as usual.

use core::alloc::{GlobalAlloc, Layout};
use core::ptr::{self, NonNull};

use log::warn;
use spin::{Mutex, MutexGuard};

use crate::arena::Arena;
use crate::block::GRANULARITY;

/// An [`Arena`] behind a spin lock.
pub struct LockedArena<const CAPACITY: usize> {
    inner: Mutex<Arena<CAPACITY>>,
}

impl<const CAPACITY: usize> LockedArena<CAPACITY> {
    pub const fn new() -> Self {
        LockedArena {
            inner: Mutex::new(Arena::new()),
        }
    }

    /// Builds the free list. If this is never called the arena initializes
    /// itself on the first allocation.
    pub fn init(&self) {
        self.inner.lock().init()
    }

    /// Exclusive access to the underlying arena.
    pub fn lock(&self) -> MutexGuard<'_, Arena<CAPACITY>> {
        self.inner.lock()
    }

    fn arena(&self, layout: Layout) -> Option<MutexGuard<'_, Arena<CAPACITY>>> {
        if layout.align() > GRANULARITY {
            warn!(
                "unsupported alignment {} (max {GRANULARITY}) for {} bytes",
                layout.align(),
                layout.size()
            );
            return None;
        }

        let arena = self.inner.lock();
        if !arena.is_initialized() {
            arena.init();
        }

        Some(arena)
    }
}

impl<const CAPACITY: usize> Default for LockedArena<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<const CAPACITY: usize> GlobalAlloc for LockedArena<CAPACITY> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        self.arena(layout)
            .and_then(|arena| arena.allocate(layout.size()).ok())
            .map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        self.arena(layout)
            .and_then(|arena| arena.allocate_zeroed(layout.size()).ok())
            .map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let Some(ptr) = NonNull::new(ptr) else {
            return;
        };
        // Failures were already logged by the arena and cannot be reported
        // through this interface.
        let _ = self.inner.lock().release(ptr, layout.size());
    }
}
