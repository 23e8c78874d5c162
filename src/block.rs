use core::mem::size_of;

/// Header of a free region, stored in the first bytes of the region itself.
///
/// Allocated regions carry no header at all; the caller replays the size on
/// release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub(crate) struct FreeBlock {
    /// Size of the free region in bytes, always a multiple of [`GRANULARITY`]
    pub length: usize,
    /// Offset of the next free region, or [`NIL`]
    pub next: usize,
}

impl FreeBlock {
    pub const fn new(length: usize, next: usize) -> Self {
        FreeBlock { length, next }
    }
}

/// Smallest unit of allocation. Every request is rounded up to a multiple of
/// this, so any free region can always hold its own header.
pub const GRANULARITY: usize = size_of::<FreeBlock>();

/// End-of-list marker. Never a valid offset since offsets stay below capacity.
pub(crate) const NIL: usize = usize::MAX;

const _: () = {
    assert!(GRANULARITY.is_power_of_two());
    assert!(GRANULARITY <= 16, "arena storage is only 16-byte aligned");
};

/// Rounds `size` up to the next multiple of [`GRANULARITY`].
///
/// Returns `None` on overflow.
pub const fn round_up(size: usize) -> Option<usize> {
    match size.checked_add(GRANULARITY - 1) {
        Some(padded) => Some(padded & !(GRANULARITY - 1)),
        None => None,
    }
}
