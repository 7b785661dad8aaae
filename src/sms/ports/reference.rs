//! Reference allocator port for concatenated message groups.

use crate::sms::domain::CsmsReference;

/// Source of CSMS reference numbers.
///
/// One reference is allocated per segmented group and reused by every
/// segment in it. No uniqueness across groups is promised: the handset
/// disambiguates with the recipient, originator, and a short time window.
///
/// Implementations must be safe to call from concurrent workers.
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceAllocator: Send + Sync {
    /// Allocates a reference for a new group.
    fn allocate(&self) -> CsmsReference;
}
