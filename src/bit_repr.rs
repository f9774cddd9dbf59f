//! Portable leading-zero count. `u32::leading_zeros` and friends do the same
//! thing natively; this is a plain bit scan usable where no intrinsic is wanted
//! and as a reference to check the native one against.

pub trait FixedWidth: Copy {
    const BITS: u32;

    /// Whether bit `index` (0 = least significant) is set.
    fn bit(self, index: u32) -> bool;
}

macro_rules! fixed_width_impl {
    ( $x:ty ) => {
        impl FixedWidth for $x {
            const BITS: u32 = <$x>::BITS;

            fn bit(self, index: u32) -> bool {
                (self >> index) & 1 != 0
            }
        }
    };
}

fixed_width_impl!(u8);
fixed_width_impl!(u16);
fixed_width_impl!(u32);
fixed_width_impl!(u64);
fixed_width_impl!(u128);
fixed_width_impl!(usize);

/// Number of zero bits above the most significant set bit, in `0..=T::BITS`.
pub fn count_leading_zeros<T: FixedWidth>(value: T) -> u32 {
    let mut i = T::BITS;
    while i > 0 && !value.bit(i - 1) {
        i -= 1;
    }
    T::BITS - i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_leading_zeros() {
        assert_eq!(count_leading_zeros(0u8), 8);
        assert_eq!(count_leading_zeros(0u16), 16);
        assert_eq!(count_leading_zeros(0u32), 32);
        assert_eq!(count_leading_zeros(0u64), 64);
        assert_eq!(count_leading_zeros(0u128), 128);
    }

    #[test]
    fn top_bit_set() {
        assert_eq!(count_leading_zeros(0b1000_0000u8), 0);
        assert_eq!(count_leading_zeros(u16::MAX), 0);
        assert_eq!(count_leading_zeros(1u64 << 63), 0);
    }

    #[test]
    fn single_bits() {
        assert_eq!(count_leading_zeros(1u8), 7);
        assert_eq!(count_leading_zeros(0b0001_0110u8), 3);
        assert_eq!(count_leading_zeros(1u32 << 20), 11);
        assert_eq!(count_leading_zeros(1usize), usize::BITS - 1);
    }

    #[test]
    fn matches_native() {
        let mut x = 0x9E37_79B9_7F4A_7C15u64;
        for _ in 0..1_000 {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            let shifted = x >> (x % 64);
            assert_eq!(count_leading_zeros(shifted), shifted.leading_zeros());
            assert_eq!(count_leading_zeros(shifted as u32), (shifted as u32).leading_zeros());
            assert_eq!(count_leading_zeros(shifted as u8), (shifted as u8).leading_zeros());
        }
    }
}
