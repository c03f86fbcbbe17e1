//! Quantization index modulation of a single coefficient.
//!
//! A bit is carried by the parity of `round(v / step)`: odd means `1`,
//! even means `0`. Writing snaps the coefficient onto the nearest lattice
//! point and moves it by one level if the parity is wrong.

/// Quantization index of `value`.
#[inline]
pub fn quantization_index(value: f64, step: f64) -> i64 {
    (value / step).round() as i64
}

/// Returns `value` moved onto a lattice point whose index parity encodes `bit`.
#[inline]
pub fn embed_bit(value: f64, bit: bool, step: f64) -> f64 {
    let mut q = quantization_index(value, step);
    let odd = q.rem_euclid(2) == 1;
    if bit && !odd {
        q += 1;
    } else if !bit && odd {
        q -= 1;
    }
    q as f64 * step
}

/// Reads the bit carried by `value`.
#[inline]
pub fn extract_bit(value: f64, step: f64) -> bool {
    quantization_index(value, step).abs() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f64 = 15.0;

    #[test]
    fn should_write_one_by_incrementing_even_index() {
        // round(0/15) = 0, even -> 1
        assert_eq!(embed_bit(0.0, true, STEP), 15.0);
        // round(31/15) = 2, even -> 3
        assert_eq!(embed_bit(31.0, true, STEP), 45.0);
    }

    #[test]
    fn should_write_zero_by_decrementing_odd_index() {
        // round(14/15) = 1, odd -> 0
        assert_eq!(embed_bit(14.0, false, STEP), 0.0);
        // round(-14/15) = -1, odd -> -2
        assert_eq!(embed_bit(-14.0, false, STEP), -30.0);
    }

    #[test]
    fn should_only_snap_when_parity_matches() {
        assert_eq!(embed_bit(16.0, true, STEP), 15.0);
        assert_eq!(embed_bit(-29.0, false, STEP), -30.0);
    }

    #[test]
    fn extracted_bit_matches_embedded_bit() {
        for value in [-250.3, -37.5, -7.4, 0.0, 7.6, 22.4, 1024.0] {
            for bit in [false, true] {
                let written = embed_bit(value, bit, STEP);
                assert_eq!(extract_bit(written, STEP), bit, "value {value} bit {bit}");
                assert!((written - value).abs() <= 1.5 * STEP);
            }
        }
    }

    #[test]
    fn negative_indices_use_absolute_parity() {
        assert!(extract_bit(-15.0, STEP));
        assert!(!extract_bit(-30.0, STEP));
    }
}
