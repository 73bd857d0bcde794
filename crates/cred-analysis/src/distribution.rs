//! Probability distribution primitives.
//!
//! A distribution is one non-negative entry per node, in a fixed node
//! ordering, summing to 1.0 within floating-point tolerance. These helpers
//! construct and compare distributions; they never normalize arbitrary
//! input. They are the convergence oracle for the propagation engine.

use cred_core::errors::NumericError;

/// One entry per node, in node order.
pub type Distribution = Vec<f64>;

/// Largest length a `Vec<f64>` can address.
pub const MAX_DISTRIBUTION_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// A value that may name a distribution size.
///
/// Integer and floating-point sizes are both accepted so that values coming
/// from loosely typed hosts are validated in one place.
pub trait DistributionSize: Copy + std::fmt::Debug {
    /// The size as a `usize`, or `None` unless it is a finite positive
    /// whole number.
    fn positive_size(self) -> Option<usize>;
}

macro_rules! impl_unsigned_size {
    ($($t:ty),*) => {$(
        impl DistributionSize for $t {
            fn positive_size(self) -> Option<usize> {
                usize::try_from(self).ok().filter(|&n| n > 0)
            }
        }
    )*};
}

macro_rules! impl_signed_size {
    ($($t:ty),*) => {$(
        impl DistributionSize for $t {
            fn positive_size(self) -> Option<usize> {
                if self <= 0 {
                    return None;
                }
                usize::try_from(self).ok()
            }
        }
    )*};
}

impl_unsigned_size!(usize, u8, u16, u32, u64);
impl_signed_size!(isize, i8, i16, i32, i64);

impl DistributionSize for f64 {
    fn positive_size(self) -> Option<usize> {
        if !self.is_finite() || self <= 0.0 || self.fract() != 0.0 || self >= usize::MAX as f64 {
            return None;
        }
        Some(self as usize)
    }
}

/// A distribution of length `size` with every entry equal to `1/size`.
pub fn uniform_distribution<N: DistributionSize>(size: N) -> Result<Distribution, NumericError> {
    let n = size.positive_size().ok_or_else(|| {
        NumericError::invalid_argument(format!("expected positive integer, got {size:?}"))
    })?;
    if n > MAX_DISTRIBUTION_LEN {
        return Err(NumericError::invalid_argument(format!(
            "size {n} exceeds the addressable maximum {MAX_DISTRIBUTION_LEN}"
        )));
    }
    Ok(vec![1.0 / n as f64; n])
}

/// L∞ distance between two distributions: `max_i |a[i] - b[i]|`.
///
/// Symmetric in its arguments.
pub fn compute_delta(a: &[f64], b: &[f64]) -> Result<f64, NumericError> {
    if a.is_empty() || b.is_empty() {
        return Err(NumericError::invalid_input("empty distribution"));
    }
    if a.len() != b.len() {
        return Err(NumericError::invalid_input(format!(
            "length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max))
}

/// True iff `compute_delta(a, b) < target`. Equality returns false.
pub fn delta_less_than(a: &[f64], b: &[f64], target: f64) -> Result<bool, NumericError> {
    Ok(compute_delta(a, b)? < target)
}

/// Sum of all entries.
pub fn total_mass(distribution: &[f64]) -> f64 {
    distribution.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_one_is_certain() {
        assert_eq!(uniform_distribution(1usize).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_size_two_splits_evenly() {
        assert_eq!(uniform_distribution(2u32).unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_whole_float_sizes_accepted() {
        assert_eq!(uniform_distribution(4.0f64).unwrap().len(), 4);
    }

    #[test]
    fn test_infinity_rejected() {
        assert!(uniform_distribution(f64::INFINITY).is_err());
    }

    #[test]
    fn test_unaddressable_sizes_rejected() {
        // 2^64 rounds to usize::MAX as f64 and would saturate in the cast
        assert_eq!(18_446_744_073_709_551_616.0f64.positive_size(), None);
        for err in [
            uniform_distribution(18_446_744_073_709_551_616.0f64),
            uniform_distribution(u64::MAX),
            uniform_distribution(MAX_DISTRIBUTION_LEN + 1),
        ] {
            assert!(matches!(err, Err(NumericError::InvalidArgument { .. })));
        }
    }

    #[test]
    fn test_max_delta_ignores_sign() {
        let a = [0.25, 0.75];
        let b = [0.75, 0.25];
        assert_eq!(compute_delta(&a, &b).unwrap(), 0.5);
    }
}
