//! Build-time configuration.
//!
//! The size of the process-wide arena is fixed when the crate is compiled.
//! Set `FIRSTFIT_ARENA_SIZE` (decimal, or hex with a `0x` prefix) in the build
//! environment to override the default:
//!
//! ```text
//! FIRSTFIT_ARENA_SIZE=0x10000 cargo build --release
//! ```

/// Arena size used when `FIRSTFIT_ARENA_SIZE` is not set.
pub const FALLBACK_CAPACITY: usize = 4096;

/// Capacity of the process-wide [`HEAP`](crate::heap::HEAP).
pub const DEFAULT_CAPACITY: usize = match option_env!("FIRSTFIT_ARENA_SIZE") {
    Some(value) => parse_capacity(value),
    None => FALLBACK_CAPACITY,
};

/// Parses a byte count written in decimal or `0x`-prefixed hex.
/// Underscores are accepted as digit separators.
///
/// Panics on malformed input, which turns into a compile error when evaluated
/// in a const context.
pub const fn parse_capacity(value: &str) -> usize {
    let bytes = value.as_bytes();
    let (radix, mut i) = if bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] | 0x20) == b'x' {
        (16, 2)
    } else {
        (10, 0)
    };
    assert!(i < bytes.len(), "empty arena size");

    let mut total: usize = 0;
    let mut digits = 0;
    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        if b == b'_' {
            continue;
        }
        let digit = match b {
            b'0'..=b'9' => (b - b'0') as usize,
            b'a'..=b'f' if radix == 16 => (b - b'a' + 10) as usize,
            b'A'..=b'F' if radix == 16 => (b - b'A' + 10) as usize,
            _ => panic!("arena size must be a decimal or 0x-prefixed hex number"),
        };
        total = match total.checked_mul(radix) {
            Some(shifted) => match shifted.checked_add(digit) {
                Some(sum) => sum,
                None => panic!("arena size overflows usize"),
            },
            None => panic!("arena size overflows usize"),
        };
        digits += 1;
    }
    assert!(digits > 0, "arena size has no digits");

    total
}
