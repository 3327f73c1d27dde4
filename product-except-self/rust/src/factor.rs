use std::fmt::Debug;

/// Signed integer type that can take part in a product.
///
/// Besides the plain arithmetic the product needs, every factor exposes its
/// magnitude as the unsigned integer of the same width, which is how overflow
/// is decided without being thrown off by the asymmetric signed range.
pub trait Factor: Copy + Eq + Debug {
    type Magnitude: Magnitude;

    const ONE: Self;
    const ZERO: Self;

    fn wrapping_mul(self, rhs: Self) -> Self;
    fn is_negative(self) -> bool;
    fn magnitude(self) -> Self::Magnitude;

    /// Whether a value with this magnitude and sign is representable as `Self`.
    fn fits(magnitude: Self::Magnitude, negative: bool) -> bool;
}

pub trait Magnitude: Copy + Ord + Debug {
    const ONE: Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_factor {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl Factor for $t {
                type Magnitude = $u;

                const ONE: Self = 1;
                const ZERO: Self = 0;

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline(always)]
                fn is_negative(self) -> bool {
                    <$t>::is_negative(self)
                }

                #[inline(always)]
                fn magnitude(self) -> $u {
                    <$t>::unsigned_abs(self)
                }

                #[inline(always)]
                fn fits(magnitude: $u, negative: bool) -> bool {
                    if negative {
                        magnitude <= <$t>::MIN.unsigned_abs()
                    } else {
                        magnitude <= <$t>::MAX.unsigned_abs()
                    }
                }
            }

            impl Magnitude for $u {
                const ONE: Self = 1;

                #[inline(always)]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$u>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_factor!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
