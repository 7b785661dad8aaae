//! Reference allocator adapters.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::sms::{domain::CsmsReference, ports::ReferenceAllocator};

/// Allocates references uniformly from `00` to `FF`.
///
/// Backed by [`OsRng`], which holds no state and is safe to share between
/// workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReferenceAllocator;

impl RandomReferenceAllocator {
    /// Creates a random allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReferenceAllocator for RandomReferenceAllocator {
    fn allocate(&self) -> CsmsReference {
        let mut byte = [0_u8; 1];
        OsRng.fill_bytes(&mut byte);
        let [value] = byte;
        CsmsReference::new(value)
    }
}

/// Allocates the same reference every time.
///
/// # Examples
///
/// ```
/// use telegraph::sms::adapters::reference::FixedReferenceAllocator;
/// use telegraph::sms::ports::ReferenceAllocator;
///
/// let allocator = FixedReferenceAllocator::new(0xA7);
/// assert_eq!(allocator.allocate().to_string(), "A7");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedReferenceAllocator {
    reference: CsmsReference,
}

impl FixedReferenceAllocator {
    /// Creates an allocator that always returns `value`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self {
            reference: CsmsReference::new(value),
        }
    }
}

impl ReferenceAllocator for FixedReferenceAllocator {
    fn allocate(&self) -> CsmsReference {
        self.reference
    }
}
