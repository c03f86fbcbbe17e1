//! Fidelity diagnostics between two sample grids.
//!
//! Purely informational, embedding and extraction never consult these numbers.

use crate::error::{QimError, Result};
use crate::grid::SampleGrid;

/// Peak intensity of an 8 bit sample.
const PEAK: f64 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityMetrics {
    /// Mean squared error over all samples.
    pub mse: f64,
    /// Peak signal-to-noise ratio in dB, `+inf` for identical grids.
    pub psnr: f64,
}

/// Compares `reconstructed` against `original`.
///
/// Empty grids count as identical.
pub fn quality_metrics(original: &SampleGrid, reconstructed: &SampleGrid) -> Result<QualityMetrics> {
    if original.dimensions() != reconstructed.dimensions() {
        return Err(QimError::DimensionMismatch {
            expected: original.dimensions(),
            found: reconstructed.dimensions(),
        });
    }

    let count = original.samples().len();
    let mse = if count == 0 {
        0.0
    } else {
        original
            .samples()
            .iter()
            .zip(reconstructed.samples())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            / count as f64
    };

    Ok(QualityMetrics {
        mse,
        psnr: psnr(mse),
    })
}

fn psnr(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (PEAK * PEAK / mse).log10()
}
