//! Block transform engine: orthonormal 2D DCT-II over 8x8 blocks.
//!
//! The forward transform of a block `X` is `C = B·X·Bᵗ`, the inverse is
//! `X = Bᵗ·C·B`, where `B` is the DCT basis. All arithmetic is `f64`;
//! no rounding happens here, only the final clamp to the intensity range.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::coefficients::{Block, CoefficientArray};
use crate::grid::SampleGrid;
use crate::positions::BLOCK_SIZE;

/// Orthonormal DCT-II basis of size `n`.
///
/// `values[k * n + i] = sqrt(2/n) · cos(PI · (2i + 1) · k / 2n)`, with the
/// first row additionally scaled by `1/sqrt(2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    n: usize,
    values: Vec<f64>,
}

impl Basis {
    pub fn dct(n: usize) -> Self {
        let nf = n as f64;
        let scale = (2.0 / nf).sqrt();
        let mut values = vec![0.0; n * n];

        for k in 0..n {
            let alpha = if k == 0 { scale / 2f64.sqrt() } else { scale };
            for i in 0..n {
                values[k * n + i] =
                    alpha * (PI * (2.0 * i as f64 + 1.0) * k as f64 / (2.0 * nf)).cos();
            }
        }

        Self { n, values }
    }

    /// Element at row `k` (frequency) and column `i` (sample).
    #[inline]
    pub fn get(&self, k: usize, i: usize) -> f64 {
        self.values[k * self.n + i]
    }
}

/// The 8x8 basis, computed on first use.
pub fn block_basis() -> &'static Basis {
    static BASIS: OnceLock<Basis> = OnceLock::new();
    BASIS.get_or_init(|| Basis::dct(BLOCK_SIZE))
}

/// `C = B·X·Bᵗ`
pub fn forward_block(basis: &Basis, block: &Block) -> Block {
    // tmp = B·X
    let mut tmp = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (k, row) in tmp.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value = (0..BLOCK_SIZE).map(|i| basis.get(k, i) * block[i][j]).sum();
        }
    }

    // C = tmp·Bᵗ
    let mut out = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (k, row) in out.iter_mut().enumerate() {
        for (l, value) in row.iter_mut().enumerate() {
            *value = (0..BLOCK_SIZE).map(|j| tmp[k][j] * basis.get(l, j)).sum();
        }
    }
    out
}

/// `X = Bᵗ·C·B`
pub fn inverse_block(basis: &Basis, coefficients: &Block) -> Block {
    // tmp = Bᵗ·C
    let mut tmp = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in tmp.iter_mut().enumerate() {
        for (l, value) in row.iter_mut().enumerate() {
            *value = (0..BLOCK_SIZE)
                .map(|k| basis.get(k, i) * coefficients[k][l])
                .sum();
        }
    }

    // X = tmp·B
    let mut out = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value = (0..BLOCK_SIZE).map(|l| tmp[i][l] * basis.get(l, j)).sum();
        }
    }
    out
}

/// Transforms every block of `grid`, in block-raster order.
pub fn forward(grid: &SampleGrid) -> CoefficientArray {
    let basis = block_basis();
    let mut coefficients = CoefficientArray::zeroed(grid.rows(), grid.cols());

    for br in 0..grid.blocks_tall() {
        for bc in 0..grid.blocks_wide() {
            *coefficients.block_mut(br, bc) = forward_block(basis, &grid.block(br, bc));
        }
    }

    log::trace!(
        "forward transform of {}x{} grid into {} blocks",
        grid.rows(),
        grid.cols(),
        coefficients.block_count()
    );
    coefficients
}

/// Reconstructs the sample grid, clamping every sample to `[0, 255]`.
pub fn inverse(coefficients: &CoefficientArray) -> SampleGrid {
    let basis = block_basis();
    let mut grid = SampleGrid::filled(coefficients.rows(), coefficients.cols(), 0.0);
    let mut clamped = 0usize;

    for br in 0..coefficients.blocks_tall() {
        for bc in 0..coefficients.blocks_wide() {
            let mut block = inverse_block(basis, coefficients.block(br, bc));
            for sample in block.iter_mut().flat_map(|row| row.iter_mut()) {
                if *sample < 0.0 || *sample > 255.0 {
                    clamped += 1;
                    *sample = sample.clamp(0.0, 255.0);
                }
            }
            grid.set_block(br, bc, &block);
        }
    }

    if clamped > 0 {
        log::warn!(
            "{clamped} reconstructed samples left the intensity range and were clamped; \
             embedded bits near them may not survive"
        );
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn basis_is_orthonormal() {
        let basis = Basis::dct(BLOCK_SIZE);
        for a in 0..BLOCK_SIZE {
            for b in 0..BLOCK_SIZE {
                let dot: f64 = (0..BLOCK_SIZE)
                    .map(|i| basis.get(a, i) * basis.get(b, i))
                    .sum();
                let expected = if a == b { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < EPS, "rows {a},{b}: {dot}");
            }
        }
    }

    #[test]
    fn basis_first_row_is_flat() {
        let basis = Basis::dct(4);
        for i in 0..4 {
            assert!((basis.get(0, i) - 0.5).abs() < EPS);
        }
    }

    #[test]
    fn cached_basis_matches_fresh_one() {
        assert_eq!(block_basis(), &Basis::dct(BLOCK_SIZE));
        assert!(std::ptr::eq(block_basis(), block_basis()));
    }

    #[test]
    fn constant_block_has_only_dc() {
        let block = [[128.0; BLOCK_SIZE]; BLOCK_SIZE];
        let coefficients = forward_block(block_basis(), &block);

        assert!((coefficients[0][0] - 1024.0).abs() < EPS);
        for (k, row) in coefficients.iter().enumerate() {
            for (l, &value) in row.iter().enumerate() {
                if (k, l) != (0, 0) {
                    assert!(value.abs() < EPS, "({k},{l}) = {value}");
                }
            }
        }
    }

    #[test]
    fn block_transform_inverts() {
        let mut block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (i, row) in block.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = ((i * 31 + j * 17) % 256) as f64;
            }
        }

        let basis = block_basis();
        let back = inverse_block(basis, &forward_block(basis, &block));
        for i in 0..BLOCK_SIZE {
            for j in 0..BLOCK_SIZE {
                assert!((back[i][j] - block[i][j]).abs() < EPS);
            }
        }
    }

    #[test]
    fn inverse_clamps_to_intensity_range() {
        let mut coefficients = CoefficientArray::zeroed(8, 8);
        coefficients.block_mut(0, 0)[0][0] = 4000.0;
        let grid = inverse(&coefficients);
        assert!(grid.samples().iter().all(|&s| s == 255.0));

        coefficients.block_mut(0, 0)[0][0] = -50.0;
        let grid = inverse(&coefficients);
        assert!(grid.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn forward_keeps_grid_dimensions() {
        let grid = SampleGrid::filled(24, 40, 3.0);
        let coefficients = forward(&grid);

        assert_eq!((coefficients.rows(), coefficients.cols()), (24, 40));
        assert_eq!(coefficients.block_count(), 15);
        assert_eq!(inverse(&coefficients).dimensions(), (24, 40));
    }
}
