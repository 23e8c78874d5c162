//! A first-fit heap over one statically reserved arena, for targets with no
//! platform allocator underneath.
//!
//! [`Arena`] owns a fixed byte range and serves variable-sized requests from an
//! address-ordered free list whose headers live inside the free memory itself.
//! Allocated blocks carry no header, so [`Arena::release`] takes the size back
//! from the caller. Neighbouring free blocks are always merged.
//!
//! ```
//! use firstfit::Arena;
//!
//! let arena = Arena::<1024>::new();
//! arena.init();
//!
//! let obj = arena.allocate(40).unwrap();
//! assert_eq!(arena.free_bytes(), 1024 - firstfit::round_up(40).unwrap());
//! arena.release(obj, 40).unwrap();
//! assert_eq!(arena.free_bytes(), 1024);
//! ```
//!
//! The arena itself never locks. [`heap`] exposes a process-wide instance for
//! runtimes that mask interrupts around each call, and [`LockedArena`] plugs
//! an arena into `#[global_allocator]`.
#![no_std]

pub mod arena;
mod block;
pub mod config;
pub mod error;
pub mod heap;
pub mod locked;

pub use arena::{Arena, ArenaStats, FreeBlocks, FreeRegion};
pub use block::{GRANULARITY, round_up};
pub use error::{AllocError, Result};
pub use heap::Heap;
pub use locked::LockedArena;
