//! In-block coefficient positions that carry payload bits.
//!
//! The table lists the mid-frequency band of an 8x8 DCT block along its
//! anti-diagonals. Earlier entries are filled first. The DC coefficient (0, 0)
//! never carries data, which is asserted at compile time.

/// Edge length of the square transform blocks.
pub const BLOCK_SIZE: usize = 8;

/// Ordered (row, col) coordinates used for embedding within each block.
#[rustfmt::skip]
pub const POSITION_TABLE: [(usize, usize); 14] = [
    (0, 3), (1, 2), (2, 1), (3, 0),
    (0, 4), (1, 3), (2, 2), (3, 1), (4, 0),
    (1, 4), (2, 3), (3, 2), (4, 1),
    (2, 4),
];

/// Bits carried by a single block.
pub const BITS_PER_BLOCK: usize = POSITION_TABLE.len();

const _: () = assert!(is_valid_table(&POSITION_TABLE));

/// A usable table stays inside the block, skips DC and names no position twice.
const fn is_valid_table(table: &[(usize, usize)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let (row, col) = table[i];
        if row >= BLOCK_SIZE || col >= BLOCK_SIZE || (row == 0 && col == 0) {
            return false;
        }
        let mut j = i + 1;
        while j < table.len() {
            if table[j].0 == row && table[j].1 == col {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
