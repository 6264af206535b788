//! Floating-point comparison in units of least precision.
//!
//! Exported (rather than `cfg(test)`) so the integration suites of the other
//! workspace crates can use [`assert_ulp_lt!`](crate::assert_ulp_lt).

/// Maps an `f64` onto a `u64` whose ordering matches the float ordering, so
/// that the distance between two mapped values counts representable floats.
#[inline]
pub fn ordered_bits(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Number of representable `f64` values between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    ordered_bits(a).abs_diff(ordered_bits(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    // +0.0 and -0.0 are 1 apart in the ordered mapping but compare equal.
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "{ctx}: non-finite value a={a} b={b}"
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{ctx}: ULP={d} exceeds {max_ulp}, a={a} (0x{:016x}) b={b} (0x{:016x})",
        a.to_bits(),
        b.to_bits()
    );
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!("{} vs {}", stringify!($a), stringify!($b)),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_floats_are_one_ulp_apart() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_diff(a, b), 1);
    }

    #[test]
    fn test_ulp_diff_across_zero() {
        let tiny = f64::from_bits(1);
        assert_eq!(ulp_diff(tiny, -tiny), 3);
    }

    #[test]
    fn test_signed_zeros_pass() {
        assert_ulp_lt!(0.0, -0.0, 0);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_distant_values_fail() {
        assert_ulp_lt!(1.0, 1.0001, 4);
    }
}
