//! Single channel sample grid.
//!
//! Samples live in the 0–255 intensity domain but are kept as `f64` while
//! processing. Every constructor truncates the dimensions down to a multiple of
//! [`BLOCK_SIZE`]; remainder rows and columns are dropped silently.

use image::{GrayImage, Luma};

use crate::coefficients::Block;
use crate::error::{QimError, Result};
use crate::positions::BLOCK_SIZE;

/// Row-major grid of intensity samples with block aligned dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    rows: usize,
    cols: usize,
    samples: Vec<f64>,
}

/// Largest multiple of the block size that is not greater than `n`.
#[inline]
pub fn align_to_block(n: usize) -> usize {
    n - n % BLOCK_SIZE
}

impl SampleGrid {
    /// Grid of the given size where every sample has `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        let rows = align_to_block(rows);
        let cols = align_to_block(cols);
        Self {
            rows,
            cols,
            samples: vec![value; rows * cols],
        }
    }

    /// Takes a row-major buffer of `rows * cols` samples.
    pub fn from_samples(rows: usize, cols: usize, samples: Vec<f64>) -> Result<Self> {
        if samples.len() != rows * cols {
            return Err(QimError::InvalidSampleBuffer {
                expected: rows * cols,
                actual: samples.len(),
            });
        }

        let aligned_rows = align_to_block(rows);
        let aligned_cols = align_to_block(cols);
        if aligned_rows == rows && aligned_cols == cols {
            return Ok(Self {
                rows,
                cols,
                samples,
            });
        }

        let samples = samples
            .chunks_exact(cols.max(1))
            .take(aligned_rows)
            .flat_map(|row| row[..aligned_cols].iter().copied())
            .collect();

        Ok(Self {
            rows: aligned_rows,
            cols: aligned_cols,
            samples,
        })
    }

    /// Reads the luma channel of an 8 bit grayscale image.
    pub fn from_luma(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        let rows = align_to_block(height as usize);
        let cols = align_to_block(width as usize);

        let mut samples = Vec::with_capacity(rows * cols);
        for y in 0..rows as u32 {
            for x in 0..cols as u32 {
                samples.push(image.get_pixel(x, y).0[0] as f64);
            }
        }

        Self {
            rows,
            cols,
            samples,
        }
    }

    /// Rounds every sample to the nearest integer intensity.
    pub fn to_luma_image(&self) -> GrayImage {
        GrayImage::from_fn(self.cols as u32, self.rows as u32, |x, y| {
            let sample = self.get(y as usize, x as usize);
            Luma([sample.round().clamp(0.0, 255.0) as u8])
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn blocks_tall(&self) -> usize {
        self.rows / BLOCK_SIZE
    }

    pub fn blocks_wide(&self) -> usize {
        self.cols / BLOCK_SIZE
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.samples[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.samples[row * self.cols + col] = value;
    }

    /// Copies out the block at block row `br` and block column `bc`.
    pub fn block(&self, br: usize, bc: usize) -> Block {
        let mut block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (i, row) in block.iter_mut().enumerate() {
            let start = (br * BLOCK_SIZE + i) * self.cols + bc * BLOCK_SIZE;
            row.copy_from_slice(&self.samples[start..start + BLOCK_SIZE]);
        }
        block
    }

    /// Writes `block` at block row `br` and block column `bc`.
    pub fn set_block(&mut self, br: usize, bc: usize, block: &Block) {
        for (i, row) in block.iter().enumerate() {
            let start = (br * BLOCK_SIZE + i) * self.cols + bc * BLOCK_SIZE;
            self.samples[start..start + BLOCK_SIZE].copy_from_slice(row);
        }
    }
}
