//! The process-wide heap a runtime allocates objects and stacks from.
//!
//! ```no_run
//! # fn disable_interrupts() {}
//! # fn enable_interrupts() {}
//! disable_interrupts();
//! unsafe { firstfit::heap::init() };
//! let obj = unsafe { firstfit::heap::allocate(48) };
//! enable_interrupts();
//! ```

use core::ptr::NonNull;

use crate::arena::{Arena, ArenaStats};
use crate::config::DEFAULT_CAPACITY;
use crate::error::Result;

/// An [`Arena`] that can live in a `static`.
///
/// There is no lock. Every method is `unsafe` and shares one contract: the
/// caller holds an exclusive scheduling context (interrupts masked, preemption
/// off) from before the call until it returns.
pub struct Heap<const CAPACITY: usize> {
    arena: Arena<CAPACITY>,
}

// SAFETY: all access goes through unsafe methods whose callers guarantee
// mutual exclusion.
unsafe impl<const CAPACITY: usize> Sync for Heap<CAPACITY> {}

impl<const CAPACITY: usize> Heap<CAPACITY> {
    pub const fn new() -> Self {
        Heap {
            arena: Arena::new(),
        }
    }

    /// # Safety
    /// Caller must hold exclusive access; see [`Heap`].
    pub unsafe fn init(&self) {
        self.arena.init()
    }

    /// # Safety
    /// Caller must hold exclusive access; see [`Heap`].
    pub unsafe fn allocate(&self, size: usize) -> Result<NonNull<u8>> {
        self.arena.allocate(size)
    }

    /// # Safety
    /// Caller must hold exclusive access; see [`Heap`].
    pub unsafe fn allocate_zeroed(&self, size: usize) -> Result<NonNull<u8>> {
        self.arena.allocate_zeroed(size)
    }

    /// # Safety
    /// Caller must hold exclusive access; see [`Heap`]. `size` should be the
    /// size passed to the matching allocate.
    pub unsafe fn release(&self, ptr: NonNull<u8>, size: usize) -> Result<()> {
        self.arena.release(ptr, size)
    }

    /// # Safety
    /// Caller must hold exclusive access; see [`Heap`].
    pub unsafe fn stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    /// # Safety
    /// Caller must hold exclusive access; see [`Heap`].
    pub unsafe fn check(&self) -> Result<()> {
        self.arena.check()
    }
}

impl<const CAPACITY: usize> Default for Heap<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

/// The runtime heap, [`DEFAULT_CAPACITY`] bytes, reserved in `.bss`.
pub static HEAP: Heap<DEFAULT_CAPACITY> = Heap::new();

/// Builds the free list of [`HEAP`]. Call once at startup.
///
/// # Safety
/// Caller must hold exclusive access to the heap for the duration of the call.
pub unsafe fn init() {
    unsafe { HEAP.init() }
}

/// Allocates `size` bytes from [`HEAP`].
///
/// # Safety
/// Caller must hold exclusive access to the heap for the duration of the call.
pub unsafe fn allocate(size: usize) -> Result<NonNull<u8>> {
    unsafe { HEAP.allocate(size) }
}

/// Returns `size` bytes at `ptr` to [`HEAP`].
///
/// # Safety
/// Caller must hold exclusive access to the heap for the duration of the call.
pub unsafe fn release(ptr: NonNull<u8>, size: usize) -> Result<()> {
    unsafe { HEAP.release(ptr, size) }
}

/// # Safety
/// Caller must hold exclusive access to the heap for the duration of the call.
pub unsafe fn stats() -> ArenaStats {
    unsafe { HEAP.stats() }
}
