use std::ptr::NonNull;

/// One contiguous unit of storage, subdivided by a bump cursor.
///
/// Blocks live in the owning region's slot vector; `next` is a slot index
/// into that vector, chaining the block into either the active chain or the
/// released pool. Payload storage never moves, so pointers into it survive
/// slot vector growth.
pub struct Block {
    ptr: NonNull<u8>,
    capacity: usize,
    free: usize,
    pub next: Option<usize>,
}

impl Block {
    pub fn new(ptr: NonNull<u8>, capacity: usize) -> Block {
        Block {
            ptr,
            capacity,
            free: 0,
            next: None,
        }
    }

    #[inline(always)]
    pub fn base(&self) -> NonNull<u8> {
        self.ptr
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn used(&self) -> usize {
        self.free
    }

    /// Serves `bytes` from the cursor, or `None` when the remaining capacity
    /// is too small. `free <= capacity` holds on both sides of the call.
    #[inline(always)]
    pub fn bump(&mut self, bytes: usize) -> Option<NonNull<u8>> {
        if bytes <= self.capacity - self.free {
            let at = unsafe { self.ptr.as_ptr().add(self.free) };
            self.free += bytes;
            Some(unsafe { NonNull::new_unchecked(at) })
        } else {
            None
        }
    }

    /// Rewinds the cursor for reuse. Called when the block is pulled back out
    /// of the released pool, not when it enters it.
    #[inline(always)]
    pub fn recycle(&mut self) {
        self.free = 0;
    }
}
