use std::alloc::{GlobalAlloc, Layout, System};
use std::ptr::NonNull;

use allocator_api2::alloc::{AllocError, Allocator};

use crate::region::Region;

/// Marker for allocators whose storage is reclaimed only in bulk by an
/// owning region, never element by element.
///
/// Generic code that relies on `deallocate` actually recycling memory can
/// bound against this trait to reject such allocators at compile time
/// instead of leaking by convention.
pub trait BulkFreed {}

/// Borrowing allocator capability over a [`Region`], for generic containers.
///
/// `allocate` forwards to [`Region::allocate_aligned`]; `deallocate` is an
/// intentional no-op, because element storage belongs to the region and only
/// [`Region::release`] reclaims it. The consequence for containers: memory
/// use inside the region grows monotonically, and growth or rehash patterns
/// that abandon old buffers keep them allocated until the next release.
///
/// The borrow ties the adapter to its region, so it cannot outlive it, and
/// since [`Region::release`] takes `&mut self`, no container built on this
/// adapter can live across a release either. One adapter value serves every
/// element type; it is `Copy`, so containers can duplicate the capability
/// freely.
pub struct RegionAlloc<'r, A: GlobalAlloc = System> {
    region: &'r Region<A>,
}

impl<'r, A: GlobalAlloc> RegionAlloc<'r, A> {
    pub fn new(region: &'r Region<A>) -> RegionAlloc<'r, A> {
        RegionAlloc { region }
    }
}

impl<'r, A: GlobalAlloc> Clone for RegionAlloc<'r, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'r, A: GlobalAlloc> Copy for RegionAlloc<'r, A> {}

impl<'r, A: GlobalAlloc> BulkFreed for RegionAlloc<'r, A> {}

unsafe impl<'r, A: GlobalAlloc> Allocator for RegionAlloc<'r, A> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let at = self
            .region
            .allocate_aligned(layout.size(), layout.align())
            .map_err(|_| AllocError)?;
        Ok(NonNull::slice_from_raw_parts(at, layout.size()))
    }

    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {
        // bulk-owned storage: Region::release reclaims it, nothing else does
    }
}

#[cfg(test)]
mod adapter_tests {
    use crate::Region;
    use allocator_api2::vec::Vec;

    #[test]
    fn containers_can_ride_on_a_region() {
        let region = Region::with_reserve(4096);
        let mut items = Vec::new_in(region.allocator());
        for i in 0u64..100 {
            items.push(i);
        }
        assert_eq!(100, items.len());
        assert!(items.iter().copied().eq(0u64..100));
    }

    #[test]
    fn dropping_a_container_returns_nothing_to_the_region() {
        let region = Region::with_reserve(4096);
        let mut items = Vec::with_capacity_in(64, region.allocator());
        for i in 0u32..64 {
            items.push(i);
        }
        let used: usize = region.stats().blocks.iter().map(|b| b.used).sum();
        drop(items);
        let used_after: usize = region.stats().blocks.iter().map(|b| b.used).sum();
        assert_eq!(used, used_after);
    }

    #[test]
    fn container_growth_leaks_into_the_region_until_release() {
        let region = Region::with_reserve(64 * 1024);
        let mut items = Vec::new_in(region.allocator());
        for i in 0u32..1000 {
            items.push(i);
        }
        // abandoned buffers from every doubling stay allocated
        let used: usize = region.stats().blocks.iter().map(|b| b.used).sum();
        assert!(used > 1000 * std::mem::size_of::<u32>());
    }
}
