use tracing::{debug, trace};

use crate::error::{ProductError, Result};
use crate::factor::{Factor, Magnitude};

/// For every index, the product of all other elements of `nums`, computed
/// without division in two linear passes.
///
/// Multiplication wraps on overflow. Wrapping is exact modulo `2^bits`, so
/// every entry whose true value fits in `T` is correct even when a running
/// product wrapped on the way there. [`checked_product_except_self`] reports
/// entries that don't fit instead.
///
/// The product of no elements is one, so `[5]` yields `[1]` and `[]` yields `[]`.
pub fn product_except_self<T: Factor>(nums: &[T]) -> Vec<T> {
    trace!(len = nums.len(), "computing products");

    wrapping_products(nums)
}

/// Like [`product_except_self`], but fails with [`ProductError::Overflow`]
/// naming the lowest index whose product does not fit in `T`.
///
/// Overflow is judged on the true product of each entry, so running products
/// that overflow but end up multiplied by a zero are not reported.
pub fn checked_product_except_self<T: Factor>(nums: &[T]) -> Result<Vec<T>> {
    trace!(len = nums.len(), "computing checked products");

    let mut zeros = nums
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n == T::ZERO)
        .map(|(i, _)| i);

    let result = match (zeros.next(), zeros.next()) {
        (None, _) => checked_without_zeros(nums),
        (Some(zero), None) => checked_single_zero(nums, zero),
        (Some(_), Some(_)) => Ok(vec![T::ZERO; nums.len()]),
    };

    if let Err(ProductError::Overflow { index }) = &result {
        debug!(len = nums.len(), index, "product overflows");
    }

    result
}

fn wrapping_products<T: Factor>(nums: &[T]) -> Vec<T> {
    let mut result = vec![T::ONE; nums.len()];

    let mut prefix = T::ONE;
    for (i, &n) in nums.iter().enumerate() {
        result[i] = prefix;
        prefix = prefix.wrapping_mul(n);
    }

    let mut suffix = T::ONE;
    for (i, &n) in nums.iter().enumerate().rev() {
        result[i] = result[i].wrapping_mul(suffix);
        suffix = suffix.wrapping_mul(n);
    }

    result
}

// Every other entry is zero, the zero's own entry is the product of the rest.
fn checked_single_zero<T: Factor>(nums: &[T], zero: usize) -> Result<Vec<T>> {
    let mut value = T::ONE;
    let mut magnitude = <T::Magnitude as Magnitude>::ONE;
    let mut negative = false;
    for (i, &n) in nums.iter().enumerate() {
        if i == zero {
            continue;
        }

        value = value.wrapping_mul(n);
        magnitude = magnitude
            .checked_mul(n.magnitude())
            .ok_or(ProductError::Overflow { index: zero })?;
        negative ^= n.is_negative();
    }

    if !T::fits(magnitude, negative) {
        return Err(ProductError::Overflow { index: zero });
    }

    let mut result = vec![T::ZERO; nums.len()];
    result[zero] = value;
    Ok(result)
}

// With no zeros each running product divides the entry it feeds into, so an
// unsigned overflow along the way means the entry itself cannot fit.
fn checked_without_zeros<T: Factor>(nums: &[T]) -> Result<Vec<T>> {
    let mut magnitudes: Vec<Option<T::Magnitude>> = vec![None; nums.len()];

    let mut prefix = Some(<T::Magnitude as Magnitude>::ONE);
    for (i, &n) in nums.iter().enumerate() {
        magnitudes[i] = prefix;
        prefix = prefix.and_then(|p| p.checked_mul(n.magnitude()));
    }

    let mut suffix = Some(<T::Magnitude as Magnitude>::ONE);
    for (i, &n) in nums.iter().enumerate().rev() {
        magnitudes[i] = magnitudes[i]
            .zip(suffix)
            .and_then(|(p, s)| p.checked_mul(s));
        suffix = suffix.and_then(|s| s.checked_mul(n.magnitude()));
    }

    let negatives = nums.iter().filter(|n| n.is_negative()).count();
    for (index, (&n, magnitude)) in nums.iter().zip(magnitudes).enumerate() {
        let negative = (negatives - usize::from(n.is_negative())) % 2 == 1;
        match magnitude {
            Some(m) if T::fits(m, negative) => {}
            _ => return Err(ProductError::Overflow { index }),
        }
    }

    Ok(wrapping_products(nums))
}
