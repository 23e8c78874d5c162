//! Address-ordered free-list allocator over one fixed arena.
//!
//! Free regions carry an intrusive [`FreeBlock`] header in their first bytes
//! and are chained in ascending offset order. Allocated regions carry nothing,
//! so the caller has to hand the size back on release.
//!
//! ```text
//! offset 0                                                       CAPACITY
//! | used 16 | FREE len=48 next=96 ----+ | used 32 | FREE len=.. next=NIL |
//!           ^ head                    +-----------^
//! ```
//!
//! Allocation is first-fit: the first region large enough is split and its low
//! end handed out. Release walks to the insertion point, refuses anything that
//! overlaps free memory, and merges with either neighbour it touches.

use core::cell::{Cell, UnsafeCell};
use core::fmt;
use core::ptr::{self, NonNull};

use log::{debug, error, trace, warn};

use crate::block::{FreeBlock, GRANULARITY, NIL, round_up};
use crate::error::{AllocError, Result};

#[repr(C, align(16))]
struct Storage<const N: usize>([u8; N]);

/// A single fixed-size heap.
///
/// The allocator does no locking of its own. The type is `Send` but not
/// `Sync`, so sharing one arena between execution contexts needs a wrapper
/// that provides mutual exclusion, see [`Heap`](crate::Heap) and
/// [`LockedArena`](crate::LockedArena).
///
/// Offsets rather than addresses link the free list, but handed-out pointers
/// are absolute: don't move an arena while allocations are live.
pub struct Arena<const CAPACITY: usize> {
    storage: UnsafeCell<Storage<CAPACITY>>,
    /// Sentinel: offset of the lowest free block
    head: Cell<usize>,
    free: Cell<usize>,
    initialized: Cell<bool>,
}

/// One entry of the free list, as seen by [`Arena::free_blocks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeRegion {
    /// Distance from the arena base in bytes.
    pub offset: usize,
    /// Size of the region in bytes.
    pub length: usize,
}

/// Snapshot of an arena's accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaStats {
    pub capacity: usize,
    pub free_bytes: usize,
    pub allocated_bytes: usize,
    pub free_blocks: usize,
    pub largest_free_block: usize,
}

impl<const CAPACITY: usize> Arena<CAPACITY> {
    /// Reserves the storage. The arena is unusable until [`init`](Self::init).
    pub const fn new() -> Self {
        const {
            assert!(CAPACITY >= GRANULARITY, "arena smaller than one block");
            assert!(
                CAPACITY % GRANULARITY == 0,
                "arena size must be a multiple of the block granularity"
            );
        }

        Arena {
            storage: UnsafeCell::new(Storage([0; CAPACITY])),
            head: Cell::new(NIL),
            free: Cell::new(0),
            initialized: Cell::new(false),
        }
    }

    /// Turns the whole arena into a single free block.
    ///
    /// Calling this again discards every outstanding allocation.
    pub fn init(&self) {
        self.set_header(0, FreeBlock::new(CAPACITY, NIL));
        self.head.set(0);
        self.free.set(CAPACITY);
        self.initialized.set(true);

        debug!(
            "arena initialized: {CAPACITY} bytes at {:#x}",
            self.base_addr()
        );
    }

    /// Hands out at least `size` bytes from the first free block that fits.
    ///
    /// The region spans `round_up(size)` bytes and is aligned to
    /// [`GRANULARITY`]. Its contents are whatever was there before.
    pub fn allocate(&self, size: usize) -> Result<NonNull<u8>> {
        if size == 0 {
            warn!("rejected zero-sized allocation");
            return Err(AllocError::InvalidSize);
        }
        self.ensure_initialized()?;

        let Some(needed) = round_up(size) else {
            return Err(self.out_of_memory(usize::MAX));
        };

        let mut prev = NIL;
        let mut cursor = self.head.get();
        while cursor != NIL {
            let block = self.header(cursor);

            if block.length >= needed {
                let replacement = if block.length == needed {
                    block.next
                } else {
                    let rest = cursor + needed;
                    self.set_header(rest, FreeBlock::new(block.length - needed, block.next));
                    rest
                };
                self.link(prev, replacement);
                self.free.set(self.free.get() - needed);
                debug_assert_eq!(self.check(), Ok(()));

                trace!("allocated {needed} bytes at offset {cursor:#x}");
                return Ok(self.pointer(cursor));
            }

            prev = cursor;
            cursor = block.next;
        }

        Err(self.out_of_memory(needed))
    }

    /// Same as [`allocate`](Self::allocate), but the whole rounded region is
    /// zeroed.
    pub fn allocate_zeroed(&self, size: usize) -> Result<NonNull<u8>> {
        let ptr = self.allocate(size)?;
        let length = round_up(size).unwrap_or(size);
        // SAFETY: allocate just carved out `length` bytes starting at `ptr`,
        // all inside the storage.
        unsafe { ptr.as_ptr().write_bytes(0, length) };

        Ok(ptr)
    }

    /// Returns a region to the free list, merging it with adjacent free
    /// blocks.
    ///
    /// `size` must be the size the region was allocated with. The pointer is
    /// never dereferenced, only its address is used, so a bogus pointer is
    /// reported rather than followed. Overlap with free memory is caught; a
    /// double free whose neighbours have since been handed out again can slip
    /// through, since allocated regions carry no record of their own.
    pub fn release(&self, ptr: NonNull<u8>, size: usize) -> Result<()> {
        let address = ptr.as_ptr().addr();
        if size == 0 {
            warn!("rejected zero-sized release at {address:#x}");
            return Err(AllocError::InvalidSize);
        }
        self.ensure_initialized()?;

        let base = self.base_addr();
        let offset = address.wrapping_sub(base);
        if address < base || offset >= CAPACITY || offset % GRANULARITY != 0 {
            warn!("release of {address:#x}, which is not a block in this arena");
            return Err(AllocError::InvalidPointer { address });
        }

        let rounded = round_up(size).unwrap_or(size);
        let Some(end) = offset.checked_add(rounded).filter(|&end| end <= CAPACITY) else {
            return Err(self.corruption(address, rounded));
        };
        let length = end - offset;

        let mut prev = NIL;
        let mut next = self.head.get();
        while next != NIL && next < offset {
            prev = next;
            next = self.header(next).next;
        }

        let prev_block = (prev != NIL).then(|| self.header(prev));
        let top = prev_block.map_or(0, |block| prev + block.length);
        if top > offset || (next != NIL && end > next) {
            return Err(self.corruption(address, length));
        }

        let (start, mut block, merged_back) = match prev_block {
            Some(mut block) if top == offset => {
                block.length += length;
                (prev, block, true)
            }
            _ => {
                self.link(prev, offset);
                (offset, FreeBlock::new(length, next), false)
            }
        };

        let merged_forward = next != NIL && start + block.length == next;
        if merged_forward {
            let following = self.header(next);
            block.length += following.length;
            block.next = following.next;
        }

        self.set_header(start, block);
        self.free.set(self.free.get() + length);
        debug_assert_eq!(self.check(), Ok(()));

        trace!("released {length} bytes at offset {offset:#x}");
        if merged_back || merged_forward {
            debug!(
                "coalesced into free block at offset {start:#x}, {} bytes",
                block.length
            );
        }

        Ok(())
    }

    /// Walks the free list and verifies its invariants: blocks are in bounds,
    /// granularity-sized, strictly ascending, never touching, and their total
    /// matches the free-byte count.
    pub fn check(&self) -> Result<()> {
        let base = self.base_addr();
        let corrupt = |offset: usize, size: usize| AllocError::CorruptionDetected {
            address: base.wrapping_add(offset),
            size,
        };

        let mut total = 0usize;
        let mut prev_end = None;
        let mut cursor = self.head.get();
        let mut remaining = CAPACITY / GRANULARITY;
        while cursor != NIL {
            if remaining == 0 || cursor >= CAPACITY || cursor % GRANULARITY != 0 {
                return Err(corrupt(cursor, 0));
            }
            remaining -= 1;

            let block = self.header(cursor);
            let in_bounds = cursor
                .checked_add(block.length)
                .is_some_and(|end| end <= CAPACITY);
            if block.length == 0 || block.length % GRANULARITY != 0 || !in_bounds {
                return Err(corrupt(cursor, block.length));
            }
            if prev_end.is_some_and(|end| cursor <= end) {
                return Err(corrupt(cursor, block.length));
            }

            total += block.length;
            prev_end = Some(cursor + block.length);
            cursor = block.next;
        }

        if total != self.free.get() {
            return Err(corrupt(0, total));
        }

        Ok(())
    }

    /// Iterates the free list in address order.
    pub fn free_blocks(&self) -> FreeBlocks<'_, CAPACITY> {
        FreeBlocks {
            arena: self,
            cursor: self.head.get(),
        }
    }

    pub fn largest_free_block(&self) -> usize {
        self.free_blocks()
            .map(|region| region.length)
            .max()
            .unwrap_or(0)
    }

    pub fn stats(&self) -> ArenaStats {
        let (free_blocks, largest_free_block) = self
            .free_blocks()
            .fold((0, 0), |(count, largest), region| {
                (count + 1, largest.max(region.length))
            });

        ArenaStats {
            capacity: CAPACITY,
            free_bytes: self.free_bytes(),
            allocated_bytes: self.allocated_bytes(),
            free_blocks,
            largest_free_block,
        }
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn free_bytes(&self) -> usize {
        self.free.get()
    }

    /// Bytes currently handed out. Zero before `init`.
    pub fn allocated_bytes(&self) -> usize {
        if self.initialized.get() {
            CAPACITY - self.free.get()
        } else {
            0
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// First byte of the arena.
    pub fn base(&self) -> NonNull<u8> {
        self.pointer(0)
    }

    /// Whether `ptr` points into the arena.
    pub fn contains(&self, ptr: *const u8) -> bool {
        ptr.addr()
            .checked_sub(self.base_addr())
            .is_some_and(|offset| offset < CAPACITY)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized.get() {
            Ok(())
        } else {
            warn!("arena used before init");
            Err(AllocError::Uninitialized)
        }
    }

    fn out_of_memory(&self, requested: usize) -> AllocError {
        let free = self.free.get();
        warn!("out of memory: requested {requested} bytes, {free} bytes free");
        AllocError::OutOfMemory { requested, free }
    }

    fn corruption(&self, address: usize, size: usize) -> AllocError {
        error!(
            "heap corruption: release of {size} bytes at {address:#x} \
             overlaps free memory or leaves the arena"
        );
        AllocError::CorruptionDetected { address, size }
    }

    /// Points the sentinel (`prev == NIL`) or the block at `prev` at `next`.
    fn link(&self, prev: usize, next: usize) {
        if prev == NIL {
            self.head.set(next);
        } else {
            let mut block = self.header(prev);
            block.next = next;
            self.set_header(prev, block);
        }
    }

    fn header(&self, offset: usize) -> FreeBlock {
        debug_assert!(offset % GRANULARITY == 0 && offset + GRANULARITY <= CAPACITY);
        // SAFETY: free-list offsets are granularity-aligned and leave room for a
        // header; the storage is 16-byte aligned, which covers FreeBlock.
        unsafe { ptr::read(self.base_ptr().add(offset).cast::<FreeBlock>()) }
    }

    fn set_header(&self, offset: usize, block: FreeBlock) {
        debug_assert!(offset % GRANULARITY == 0 && offset + GRANULARITY <= CAPACITY);
        // SAFETY: as in `header`; the bytes belong to a free region, which no
        // caller holds a pointer to.
        unsafe { ptr::write(self.base_ptr().add(offset).cast::<FreeBlock>(), block) }
    }

    fn base_ptr(&self) -> *mut u8 {
        self.storage.get().cast::<u8>()
    }

    fn base_addr(&self) -> usize {
        self.base_ptr().addr()
    }

    fn pointer(&self, offset: usize) -> NonNull<u8> {
        debug_assert!(offset < CAPACITY);
        // SAFETY: offset lies inside the storage, so the result is in bounds
        // of a live allocation and therefore non-null.
        unsafe { NonNull::new_unchecked(self.base_ptr().add(offset)) }
    }
}

impl<const CAPACITY: usize> Default for Arena<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> fmt::Debug for Arena<CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("base", &self.base_ptr())
            .field("capacity", &CAPACITY)
            .field("free_bytes", &self.free.get())
            .field("initialized", &self.initialized.get())
            .finish()
    }
}

/// Iterator returned by [`Arena::free_blocks`].
pub struct FreeBlocks<'a, const CAPACITY: usize> {
    arena: &'a Arena<CAPACITY>,
    cursor: usize,
}

impl<const CAPACITY: usize> Iterator for FreeBlocks<'_, CAPACITY> {
    type Item = FreeRegion;

    fn next(&mut self) -> Option<FreeRegion> {
        if self.cursor == NIL {
            return None;
        }

        let block = self.arena.header(self.cursor);
        let region = FreeRegion {
            offset: self.cursor,
            length: block.length,
        };
        self.cursor = block.next;

        Some(region)
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    const G: usize = GRANULARITY;

    fn arena<const N: usize>() -> Arena<N> {
        let arena = Arena::new();
        arena.init();
        arena
    }

    fn offset_of<const N: usize>(arena: &Arena<N>, ptr: NonNull<u8>) -> usize {
        ptr.as_ptr().addr() - arena.base().as_ptr().addr()
    }

    fn shape<const N: usize>(arena: &Arena<N>) -> Vec<(usize, usize)> {
        arena
            .free_blocks()
            .map(|region| (region.offset, region.length))
            .collect()
    }

    #[test]
    fn init_makes_one_block() {
        let arena = arena::<4096>();
        assert_eq!(shape(&arena), [(0, 4096)]);
        assert_eq!(arena.free_bytes(), 4096);
        assert_eq!(arena.allocated_bytes(), 0);
        assert_eq!(arena.check(), Ok(()));
    }

    #[test]
    fn alloc_chunks() {
        let arena = arena::<4096>();

        let one = arena.allocate(16).unwrap();
        let two = arena.allocate(1).unwrap();
        let three = arena.allocate(G + 1).unwrap();

        assert_eq!(offset_of(&arena, one), 0);
        assert_eq!(offset_of(&arena, two), round_up(16).unwrap());
        assert_eq!(offset_of(&arena, three), round_up(16).unwrap() + G);
        assert_eq!(arena.free_bytes() + arena.allocated_bytes(), 4096);

        arena.release(three, G + 1).unwrap();
        arena.release(one, 16).unwrap();
        arena.release(two, 1).unwrap();
        assert_eq!(shape(&arena), [(0, 4096)]);
    }

    #[test]
    fn zero_sized() {
        let arena = arena::<256>();
        assert_eq!(arena.allocate(0), Err(AllocError::InvalidSize));
        assert_eq!(arena.release(arena.base(), 0), Err(AllocError::InvalidSize));
        assert_eq!(shape(&arena), [(0, 256)]);
    }

    #[test]
    fn whole_arena() {
        let arena = arena::<256>();

        let all = arena.allocate(256).unwrap();
        assert_eq!(all, arena.base());
        assert_eq!(arena.free_blocks().count(), 0);
        assert_eq!(
            arena.allocate(256),
            Err(AllocError::OutOfMemory {
                requested: 256,
                free: 0
            })
        );
        assert_eq!(arena.check(), Ok(()));

        arena.release(all, 256).unwrap();
        assert_eq!(shape(&arena), [(0, 256)]);
    }

    #[test]
    fn overflow() {
        let arena = arena::<256>();
        let before = shape(&arena);

        assert!(matches!(
            arena.allocate(257),
            Err(AllocError::OutOfMemory { free: 256, .. })
        ));
        // Rounding overflows; the request is reported saturated.
        assert_eq!(
            arena.allocate(usize::MAX - 1),
            Err(AllocError::OutOfMemory {
                requested: usize::MAX,
                free: 256
            })
        );
        assert_eq!(shape(&arena), before);
    }

    #[test]
    fn fragmented_out_of_memory() {
        let arena = arena::<{ 4 * GRANULARITY }>();
        let a = arena.allocate(G).unwrap();
        let _b = arena.allocate(G).unwrap();
        let c = arena.allocate(G).unwrap();
        let _d = arena.allocate(G).unwrap();
        arena.release(a, G).unwrap();
        arena.release(c, G).unwrap();

        // Two free blocks of G each, none of 2G.
        assert_eq!(arena.free_bytes(), 2 * G);
        assert_eq!(
            arena.allocate(2 * G),
            Err(AllocError::OutOfMemory {
                requested: 2 * G,
                free: 2 * G
            })
        );
        assert_eq!(shape(&arena), [(0, G), (2 * G, G)]);
    }

    #[test]
    fn first_fit_not_best_fit() {
        let arena = arena::<{ 16 * GRANULARITY }>();
        let big = arena.allocate(4 * G).unwrap();
        let _guard = arena.allocate(G).unwrap();
        let small = arena.allocate(G).unwrap();
        let _guard2 = arena.allocate(G).unwrap();
        arena.release(big, 4 * G).unwrap();
        arena.release(small, G).unwrap();

        // The exact-size hole comes second; first fit still takes the first.
        let got = arena.allocate(G).unwrap();
        assert_eq!(got, big);
        assert_eq!(shape(&arena)[0], (G, 3 * G));
    }

    #[test]
    fn exact_fit_unlinks() {
        let arena = arena::<{ 8 * GRANULARITY }>();
        let a = arena.allocate(2 * G).unwrap();
        let _b = arena.allocate(G).unwrap();
        arena.release(a, 2 * G).unwrap();
        assert_eq!(shape(&arena), [(0, 2 * G), (3 * G, 5 * G)]);

        let again = arena.allocate(2 * G).unwrap();
        assert_eq!(again, a);
        assert_eq!(shape(&arena), [(3 * G, 5 * G)]);
    }

    #[test]
    fn merge() {
        // Release order: left then right, and right then left.
        for left_first in [true, false] {
            let arena = arena::<{ 8 * GRANULARITY }>();
            let left = arena.allocate(G).unwrap();
            let right = arena.allocate(2 * G).unwrap();
            let tail = arena.allocate(5 * G).unwrap();

            if left_first {
                arena.release(left, G).unwrap();
                arena.release(right, 2 * G).unwrap();
            } else {
                arena.release(right, 2 * G).unwrap();
                arena.release(left, G).unwrap();
            }
            assert_eq!(shape(&arena), [(0, 3 * G)]);

            arena.release(tail, 5 * G).unwrap();
            assert_eq!(shape(&arena), [(0, 8 * G)]);
        }
    }

    #[test]
    fn merge_both_sides() {
        let arena = arena::<{ 4 * GRANULARITY }>();
        let a = arena.allocate(G).unwrap();
        let b = arena.allocate(G).unwrap();
        let c = arena.allocate(G).unwrap();
        arena.release(a, G).unwrap();
        arena.release(c, G).unwrap();
        assert_eq!(shape(&arena), [(0, G), (2 * G, 2 * G)]);

        arena.release(b, G).unwrap();
        assert_eq!(shape(&arena), [(0, 4 * G)]);
    }

    #[test]
    fn double_free() {
        let arena = arena::<256>();
        let a = arena.allocate(G).unwrap();
        let _b = arena.allocate(G).unwrap();

        arena.release(a, G).unwrap();
        let before = shape(&arena);
        assert!(matches!(
            arena.release(a, G),
            Err(AllocError::CorruptionDetected { .. })
        ));
        assert_eq!(shape(&arena), before);
        assert_eq!(arena.check(), Ok(()));
    }

    #[test]
    fn double_free_after_merge() {
        let arena = arena::<256>();
        let a = arena.allocate(G).unwrap();
        let b = arena.allocate(G).unwrap();
        arena.release(a, G).unwrap();
        arena.release(b, G).unwrap();

        // `b` now sits in the middle of the merged block.
        assert_eq!(
            arena.release(b, G),
            Err(AllocError::CorruptionDetected {
                address: b.as_ptr().addr(),
                size: G
            })
        );
    }

    #[test]
    fn oversized_release() {
        let arena = arena::<{ 8 * GRANULARITY }>();
        let a = arena.allocate(G).unwrap();
        let _b = arena.allocate(G).unwrap();

        // The wrong size spills into the free tail.
        assert!(matches!(
            arena.release(a, 3 * G),
            Err(AllocError::CorruptionDetected { .. })
        ));
        // Or off the end of the arena.
        let all_rest = arena.allocate(6 * G).unwrap();
        assert!(matches!(
            arena.release(all_rest, 7 * G),
            Err(AllocError::CorruptionDetected { .. })
        ));
        assert_eq!(arena.check(), Ok(()));
    }

    #[test]
    fn invalid_pointers() {
        let arena = arena::<256>();
        let a = arena.allocate(4 * G).unwrap();
        let before = shape(&arena);

        let outside = [0u8; 8];
        let outside = NonNull::from(&outside).cast::<u8>();
        if !arena.contains(outside.as_ptr()) {
            assert_eq!(
                arena.release(outside, G),
                Err(AllocError::InvalidPointer {
                    address: outside.as_ptr().addr()
                })
            );
        }

        let below = NonNull::new(arena.base().as_ptr().wrapping_sub(G)).unwrap();
        assert_eq!(
            arena.release(below, G),
            Err(AllocError::InvalidPointer {
                address: below.as_ptr().addr()
            })
        );

        // SAFETY: both pointers stay inside or one past the arena.
        let misaligned = unsafe { a.add(1) };
        let past_end = unsafe { arena.base().add(256) };
        assert!(matches!(
            arena.release(misaligned, G),
            Err(AllocError::InvalidPointer { .. })
        ));
        assert!(matches!(
            arena.release(past_end, G),
            Err(AllocError::InvalidPointer { .. })
        ));
        assert_eq!(shape(&arena), before);
    }

    #[test]
    fn uninitialized() {
        let arena = Arena::<256>::new();
        assert!(!arena.is_initialized());
        assert_eq!(arena.allocate(8), Err(AllocError::Uninitialized));
        assert_eq!(
            arena.release(arena.base(), 8),
            Err(AllocError::Uninitialized)
        );
        assert_eq!(arena.allocated_bytes(), 0);
        assert_eq!(arena.check(), Ok(()));
    }

    #[test]
    fn reinit_discards_allocations() {
        let arena = arena::<256>();
        arena.allocate(100).unwrap();
        arena.allocate(50).unwrap();

        arena.init();
        assert_eq!(shape(&arena), [(0, 256)]);
        assert_eq!(arena.allocated_bytes(), 0);
    }

    #[test]
    fn zeroed() {
        let arena = arena::<256>();
        let dirty = arena.allocate(64).unwrap();
        // SAFETY: `dirty` spans 64 bytes of the arena.
        unsafe { dirty.as_ptr().write_bytes(0xAB, 64) };
        arena.release(dirty, 64).unwrap();

        let clean = arena.allocate_zeroed(64).unwrap();
        assert_eq!(clean, dirty);
        // SAFETY: `clean` spans 64 initialized bytes.
        let bytes = unsafe { core::slice::from_raw_parts(clean.as_ptr(), 64) };
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn stats() {
        let arena = arena::<{ 8 * GRANULARITY }>();
        let a = arena.allocate(G).unwrap();
        let _b = arena.allocate(G).unwrap();
        arena.release(a, G).unwrap();

        assert_eq!(
            arena.stats(),
            ArenaStats {
                capacity: 8 * G,
                free_bytes: 7 * G,
                allocated_bytes: G,
                free_blocks: 2,
                largest_free_block: 6 * G,
            }
        );
    }

    #[test]
    fn alignment() {
        let arena = arena::<1024>();
        for size in [1, 3, 7, 17, 33, 100] {
            let ptr = arena.allocate(size).unwrap();
            assert_eq!(ptr.as_ptr().addr() % GRANULARITY, 0);
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn walkthrough_256() {
        let arena = arena::<256>();
        let base = arena.base();

        let a = arena.allocate(10).unwrap();
        assert_eq!(a, base);
        assert_eq!(shape(&arena), [(16, 240)]);

        let b = arena.allocate(200).unwrap();
        assert_eq!(offset_of(&arena, b), 16);
        assert_eq!(shape(&arena), [(224, 32)]);

        arena.release(a, 16).unwrap();
        assert_eq!(shape(&arena), [(0, 16), (224, 32)]);

        arena.release(b, 200).unwrap();
        assert_eq!(shape(&arena), [(0, 256)]);
        assert_eq!(arena.free_bytes(), 256);
    }
}
