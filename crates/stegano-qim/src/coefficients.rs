//! Transform domain storage for a whole image.
//!
//! Blocks are stored in block-raster order: top-to-bottom block rows,
//! left-to-right within a row. This order, combined with the position table,
//! forms the tape onto which frame bits are written and from which they are
//! read, so embedding and extraction both walk it through [`CoefficientArray::tape`].

use crate::positions::{BLOCK_SIZE, POSITION_TABLE};

/// One 8x8 matrix, indexed `[row][col]`.
pub type Block = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

/// DCT coefficients of one single channel image.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientArray {
    /// Sample rows of the grid the coefficients were computed from.
    rows: usize,
    /// Sample columns of the grid the coefficients were computed from.
    cols: usize,
    blocks: Vec<Block>,
}

impl CoefficientArray {
    /// Array of all-zero blocks covering a `rows` x `cols` grid.
    ///
    /// Both dimensions must be multiples of [`BLOCK_SIZE`].
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        debug_assert_eq!(rows % BLOCK_SIZE, 0, "rows {rows} not block aligned");
        debug_assert_eq!(cols % BLOCK_SIZE, 0, "cols {cols} not block aligned");
        let count = (rows / BLOCK_SIZE) * (cols / BLOCK_SIZE);
        Self {
            rows,
            cols,
            blocks: vec![[[0.0; BLOCK_SIZE]; BLOCK_SIZE]; count],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn blocks_tall(&self) -> usize {
        self.rows / BLOCK_SIZE
    }

    pub fn blocks_wide(&self) -> usize {
        self.cols / BLOCK_SIZE
    }

    /// Total number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of bits this array can carry, header included.
    pub fn capacity_bits(&self) -> usize {
        crate::capacity::capacity_bits(self.block_count())
    }

    /// Block at block row `br` and block column `bc`.
    pub fn block(&self, br: usize, bc: usize) -> &Block {
        &self.blocks[self.index(br, bc)]
    }

    pub fn block_mut(&mut self, br: usize, bc: usize) -> &mut Block {
        let idx = self.index(br, bc);
        &mut self.blocks[idx]
    }

    /// All blocks in block-raster order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    /// Values at the embedding positions, in the exact order frame bits occupy them.
    pub fn tape(&self) -> impl Iterator<Item = f64> + '_ {
        self.blocks
            .iter()
            .flat_map(|block| POSITION_TABLE.iter().map(move |&(r, c)| block[r][c]))
    }

    fn index(&self, br: usize, bc: usize) -> usize {
        debug_assert!(br < self.blocks_tall(), "block row {br} >= {}", self.blocks_tall());
        debug_assert!(bc < self.blocks_wide(), "block col {bc} >= {}", self.blocks_wide());
        br * self.blocks_wide() + bc
    }
}
