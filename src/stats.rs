/// Capacity and bytes in use of one active block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStats {
    pub capacity: usize,
    pub used: usize,
}

/// Aggregate usage numbers of a region, the whole contract reporting code
/// needs. Rendering and unit formatting happen elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionStats {
    /// Active-chain blocks, in chain order.
    pub blocks: Vec<BlockStats>,
    /// Retired blocks kept for reuse.
    pub released_blocks: usize,
}
