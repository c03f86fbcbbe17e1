use crate::error::{QimError, Result};

/// Default quantization step for embedding and extraction.
pub const DEFAULT_QUANTIZATION_STEP: f64 = 15.0;

/// Options shared by [`QimEncoder`](crate::QimEncoder) and [`QimDecoder`](crate::QimDecoder).
///
/// None of these values are carried inside the embedded frame, so the decoder
/// must be configured exactly like the encoder was.
///
/// The step can only be set through [`QimOptions::with_step`], so a zero,
/// negative or non finite step never reaches the codec:
///
/// ```compile_fail
/// let options = stegano_qim::QimOptions { quantization_step: 0.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QimOptions {
    /// Distance between two quantization levels of a coefficient.
    /// Larger steps survive more noise but are more visible.
    quantization_step: f64,
}

impl Default for QimOptions {
    fn default() -> Self {
        Self {
            quantization_step: DEFAULT_QUANTIZATION_STEP,
        }
    }
}

impl QimOptions {
    /// Replaces the quantization step, rejecting zero, negative or non finite values.
    pub fn with_step(mut self, step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(QimError::InvalidQuantizationStep { step });
        }
        self.quantization_step = step;
        Ok(self)
    }

    pub fn quantization_step(&self) -> f64 {
        self.quantization_step
    }
}
