//! Property tests comparing both products against a naive quadratic product
//! carried out in `i128`, which is wide enough for every generated input.

#[cfg(test)]
mod tests {
    use crate::{checked_product_except_self, product_except_self, ProductError};
    use proptest::prelude::*;

    fn naive(nums: &[i64]) -> Vec<i128> {
        (0..nums.len())
            .map(|i| {
                nums.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &n)| n as i128)
                    .product::<i128>()
            })
            .collect()
    }

    // Small values so exact products stay inside i32 often enough to matter.
    prop_compose! {
        fn small_nums()(nums in prop::collection::vec(-20i32..=20, 0..10)) -> Vec<i32> {
            nums
        }
    }

    // Full i8 range, at most 12 elements: |product| <= 2^84.
    prop_compose! {
        fn full_range_i8()(nums in prop::collection::vec(any::<i8>(), 0..=12)) -> Vec<i8> {
            nums
        }
    }

    proptest! {
        #[test]
        fn same_length(nums in small_nums()) {
            prop_assert_eq!(product_except_self(&nums).len(), nums.len());
        }

        #[test]
        fn wrapping_matches_naive_modulo_width(nums in full_range_i8()) {
            let wide: Vec<i64> = nums.iter().map(|&n| n as i64).collect();
            let expected: Vec<i8> = naive(&wide).into_iter().map(|p| p as i8).collect();

            prop_assert_eq!(product_except_self(&nums), expected);
        }

        #[test]
        fn times_self_is_total(nums in small_nums()) {
            let wide: Vec<i64> = nums.iter().map(|&n| n as i64).collect();
            let total: i64 = wide.iter().product();
            let result = product_except_self(&wide);

            for (i, &n) in wide.iter().enumerate() {
                if n != 0 {
                    prop_assert_eq!(result[i] * n, total);
                }
            }
        }

        #[test]
        fn zeros_decide_the_shape(nums in small_nums()) {
            let result = product_except_self(&nums);
            let zeros: Vec<usize> = nums
                .iter()
                .enumerate()
                .filter(|&(_, &n)| n == 0)
                .map(|(i, _)| i)
                .collect();

            match zeros.as_slice() {
                [] => {}
                [k] => {
                    for (i, &r) in result.iter().enumerate() {
                        if i != *k {
                            prop_assert_eq!(r, 0);
                        }
                    }
                }
                _ => prop_assert!(result.iter().all(|&r| r == 0)),
            }
        }

        #[test]
        fn checked_agrees_with_naive(nums in full_range_i8()) {
            let wide: Vec<i64> = nums.iter().map(|&n| n as i64).collect();
            let expected = naive(&wide);
            let first_overflow = expected
                .iter()
                .position(|&p| p < i8::MIN as i128 || p > i8::MAX as i128);

            match (checked_product_except_self(&nums), first_overflow) {
                (Ok(result), None) => {
                    let expected: Vec<i8> = expected.into_iter().map(|p| p as i8).collect();
                    prop_assert_eq!(result, expected);
                }
                (Err(ProductError::Overflow { index }), Some(i)) => prop_assert_eq!(index, i),
                (result, overflow) => {
                    prop_assert!(false, "got {:?}, first overflow at {:?}", result, overflow);
                }
            }
        }

        #[test]
        fn checked_agrees_with_wrapping_when_ok(nums in small_nums()) {
            if let Ok(result) = checked_product_except_self(&nums) {
                prop_assert_eq!(result, product_except_self(&nums));
            }
        }
    }
}
