// ============================================================================
// Math Functions
// Standard math-library functions over native floats and Real
// ============================================================================
//
// Every function here accepts a `Real` or a bare `f32`/`f64`. On a `Real`
// the function runs on the primary value at its native width and, when
// tracked, on the shadow value in f64. On bare natives the result is a bare
// native, so the free functions can replace direct calls into the math
// library without touching the surrounding code.
//
// Domain errors are not checked: `sqrt(-1.0)` is NaN, `log(0.0)` is -inf.

use super::mode::{Double, Precision, Single, Tracking};
use super::real::Real;

macro_rules! unary_math {
    ($( $(#[$doc:meta])* $name:ident => $f32:expr, $f64:expr; )*) => {
        /// Elementary and transcendental functions of one argument.
        ///
        /// Implemented for `f32`, `f64` and every `Real<P, T>`.
        pub trait UnaryMath: Sized {
            $(
                $(#[$doc])*
                fn $name(self) -> Self;
            )*

            /// `-1` if strictly negative, otherwise `+1`.
            ///
            /// Zero (of either sign) and NaN map to `+1`.
            fn sign(self) -> Self;
        }

        impl UnaryMath for f32 {
            $(
                #[inline]
                fn $name(self) -> Self {
                    ($f32)(self)
                }
            )*

            #[inline]
            fn sign(self) -> Self {
                if self < 0.0 { -1.0 } else { 1.0 }
            }
        }

        impl UnaryMath for f64 {
            $(
                #[inline]
                fn $name(self) -> Self {
                    ($f64)(self)
                }
            )*

            #[inline]
            fn sign(self) -> Self {
                if self < 0.0 { -1.0 } else { 1.0 }
            }
        }

        impl<P: Precision, T: Tracking> UnaryMath for Real<P, T> {
            $(
                #[inline]
                fn $name(self) -> Self {
                    self.lift(<P::Native as UnaryMath>::$name, <f64 as UnaryMath>::$name)
                }
            )*

            /// The shadow follows the sign of the primary value.
            #[inline]
            fn sign(self) -> Self {
                Self::new(self.value().sign())
            }
        }

        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<X: UnaryMath>(x: X) -> X {
                x.$name()
            }
        )*
    };
}

unary_math! {
    /// Absolute value.
    abs => f32::abs, f64::abs;
    /// Largest integer not greater than the argument.
    floor => f32::floor, f64::floor;
    /// Smallest integer not less than the argument.
    ceil => f32::ceil, f64::ceil;
    /// Nearest integer, halfway cases away from zero.
    round => f32::round, f64::round;
    /// Nearest integer, halfway cases to even.
    rint => f32::round_ties_even, f64::round_ties_even;
    /// Integer part, rounding toward zero.
    trunc => f32::trunc, f64::trunc;
    /// Square root.
    sqrt => f32::sqrt, f64::sqrt;
    /// Cube root.
    cbrt => f32::cbrt, f64::cbrt;
    /// `e^x`.
    exp => f32::exp, f64::exp;
    /// `2^x`.
    exp2 => f32::exp2, f64::exp2;
    /// Natural logarithm.
    log => f32::ln, f64::ln;
    /// Base-2 logarithm.
    log2 => f32::log2, f64::log2;
    /// Base-10 logarithm.
    log10 => f32::log10, f64::log10;
    /// `ln(1 + x)`, accurate near zero.
    log1p => f32::ln_1p, f64::ln_1p;
    sin => f32::sin, f64::sin;
    cos => f32::cos, f64::cos;
    tan => f32::tan, f64::tan;
    asin => f32::asin, f64::asin;
    acos => f32::acos, f64::acos;
    atan => f32::atan, f64::atan;
    sinh => f32::sinh, f64::sinh;
    cosh => f32::cosh, f64::cosh;
    tanh => f32::tanh, f64::tanh;
    asinh => f32::asinh, f64::asinh;
    acosh => f32::acosh, f64::acosh;
    atanh => f32::atanh, f64::atanh;
    /// Error function.
    erf => libm::erff, libm::erf;
    /// Complementary error function, `1 - erf(x)`.
    erfc => libm::erfcf, libm::erfc;
    /// Gamma function.
    tgamma => libm::tgammaf, libm::tgamma;
    /// Natural logarithm of the absolute value of the gamma function.
    lgamma => libm::lgammaf, libm::lgamma;
}

/// `-1` if the primary value is strictly negative, otherwise `+1`.
#[inline]
pub fn sign<X: UnaryMath>(x: X) -> X {
    x.sign()
}

macro_rules! binary_math {
    (@mixed $P:ty, $N:ty; $($name:ident),*) => {
        impl<T: Tracking> BinaryMath<$N> for Real<$P, T> {
            type Output = Self;

            $(
                #[inline]
                fn $name(self, rhs: $N) -> Self::Output {
                    <Self as BinaryMath>::$name(self, Self::new(rhs))
                }
            )*
        }

        impl<T: Tracking> BinaryMath<Real<$P, T>> for $N {
            type Output = Real<$P, T>;

            $(
                #[inline]
                fn $name(self, rhs: Real<$P, T>) -> Self::Output {
                    <Real<$P, T> as BinaryMath>::$name(Real::new(self), rhs)
                }
            )*
        }
    };
    ($( $(#[$doc:meta])* $name:ident => $f32:expr, $f64:expr; )*) => {
        /// Math functions of two arguments.
        ///
        /// Implemented for every pairing of `Real<P, T>` with itself or with
        /// `P::Native`, and for `f32`/`f64` pairs. A `Real` on either side
        /// yields a `Real`; two natives yield a native.
        pub trait BinaryMath<Rhs = Self> {
            type Output;

            $(
                $(#[$doc])*
                fn $name(self, rhs: Rhs) -> Self::Output;
            )*
        }

        impl BinaryMath for f32 {
            type Output = f32;

            $(
                #[inline]
                fn $name(self, rhs: f32) -> f32 {
                    ($f32)(self, rhs)
                }
            )*
        }

        impl BinaryMath for f64 {
            type Output = f64;

            $(
                #[inline]
                fn $name(self, rhs: f64) -> f64 {
                    ($f64)(self, rhs)
                }
            )*
        }

        impl<P: Precision, T: Tracking> BinaryMath for Real<P, T> {
            type Output = Self;

            $(
                #[inline]
                fn $name(self, rhs: Self) -> Self::Output {
                    self.lift2(rhs, <P::Native as BinaryMath>::$name, <f64 as BinaryMath>::$name)
                }
            )*
        }

        binary_math!(@mixed Single, f32; $($name),*);
        binary_math!(@mixed Double, f64; $($name),*);

        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<L: BinaryMath<R>, R>(lhs: L, rhs: R) -> L::Output {
                lhs.$name(rhs)
            }
        )*
    };
}

binary_math! {
    /// `lhs` raised to the power `rhs`.
    pow => f32::powf, f64::powf;
    /// `sqrt(lhs² + rhs²)` without intermediate overflow.
    hypot => f32::hypot, f64::hypot;
    /// Four-quadrant arctangent of `lhs / rhs`.
    atan2 => f32::atan2, f64::atan2;
    /// IEEE remainder: `lhs - n * rhs` with `n` the nearest integer to `lhs / rhs`.
    remainder => libm::remainderf, libm::remainder;
    /// Truncated remainder, with the sign of `lhs`.
    fmod => |a: f32, b: f32| a % b, |a: f64, b: f64| a % b;
    /// Smaller of the two. A NaN operand is ignored if the other is a number.
    min => f32::min, f64::min;
    /// Larger of the two. A NaN operand is ignored if the other is a number.
    max => f32::max, f64::max;
}

/// Restrict `x` to `[lo, hi]`, computed as `max(lo, min(x, hi))`.
///
/// Any mix of `Real` and native arguments is accepted. No check is made that
/// `lo <= hi`; if it does not hold the result is `lo`.
#[inline]
pub fn clamp<X, L, H>(x: X, lo: L, hi: H) -> <L as BinaryMath<X::Output>>::Output
where
    X: BinaryMath<H>,
    L: BinaryMath<X::Output>,
{
    max(lo, min(x, hi))
}

/// Minimum of one or more values, folded left to right.
///
/// Arguments may mix `Real` and native values. When every argument is a
/// native float the result is a native float.
///
/// ```
/// use shadow_real::numeric::{Real, Single};
///
/// let m: f32 = shadow_real::min!(3.0f32, 1.0f32, 2.0f32);
/// assert_eq!(m, 1.0);
///
/// let r = shadow_real::min!(3.0f32, Real::<Single>::new(0.5), 2.0f32);
/// assert_eq!(r.value(), 0.5);
/// ```
///
/// At least one argument is required:
///
/// ```compile_fail
/// let _: f32 = shadow_real::min!();
/// ```
#[macro_export]
macro_rules! min {
    ($x:expr) => {
        $x
    };
    ($x:expr, $y:expr $(, $rest:expr)*) => {
        $crate::min!($crate::numeric::min($x, $y) $(, $rest)*)
    };
}

/// Maximum of one or more values, folded left to right.
///
/// See [`min!`](crate::min!) for the argument rules.
///
/// ```compile_fail
/// let _: f32 = shadow_real::max!();
/// ```
#[macro_export]
macro_rules! max {
    ($x:expr) => {
        $x
    };
    ($x:expr, $y:expr $(, $rest:expr)*) => {
        $crate::max!($crate::numeric::max($x, $y) $(, $rest)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Double, Tracked};

    type R32 = Real<Single>;
    type T32 = Real<Single, Tracked>;
    type T64 = Real<Double, Tracked>;

    #[test]
    fn test_unary_matches_native_bits() {
        let inputs = [0.3f32, 1.7, 2.5, -0.8, 12.25];
        for &x in &inputs {
            let r = R32::new(x);
            assert_eq!(abs(r).value().to_bits(), x.abs().to_bits());
            assert_eq!(floor(r).value().to_bits(), x.floor().to_bits());
            assert_eq!(exp(r).value().to_bits(), x.exp().to_bits());
            assert_eq!(sin(r).value().to_bits(), x.sin().to_bits());
            assert_eq!(atan(r).value().to_bits(), x.atan().to_bits());
            assert_eq!(tanh(r).value().to_bits(), x.tanh().to_bits());
            assert_eq!(erf(r).value().to_bits(), libm::erff(x).to_bits());
            assert_eq!(cbrt(r).value().to_bits(), x.cbrt().to_bits());
        }
    }

    #[test]
    fn test_unary_on_natives_returns_natives() {
        let x: f32 = sqrt(4.0f32);
        let y: f64 = log(1.0f64);
        assert_eq!(x, 2.0);
        assert_eq!(y, 0.0);
        assert_eq!(log2(8.0f32), 3.0);
        assert_eq!(log10(1000.0f64), 3.0);
    }

    #[test]
    fn test_tracked_unary_runs_wide() {
        let r = sqrt(T32::new(2.0));
        assert_eq!(r.value(), 2.0f32.sqrt());
        assert_eq!(r.exact(), 2.0f64.sqrt());
        assert!(r.error() != 0.0);

        let c = cos(T32::new(1.0));
        assert_eq!(c.exact(), 1.0f64.cos());
    }

    #[test]
    fn test_rounding_family() {
        assert_eq!(round(2.5f32), 3.0);
        assert_eq!(rint(2.5f32), 2.0);
        assert_eq!(rint(R32::new(3.5)).value(), 4.0);
        assert_eq!(trunc(R32::new(-2.7)).value(), -2.0);
        assert_eq!(ceil(T32::new(1.2)).exact(), 2.0);
    }

    #[test]
    fn test_special_functions() {
        assert_eq!(erf(0.0f64), 0.0);
        assert_eq!(erfc(0.0f64), 1.0);
        assert!((tgamma(5.0f64) - 24.0).abs() < 1e-12);
        assert!(lgamma(T64::new(1.0)).value().abs() < 1e-15);
        assert!((log1p(1e-10f64) - 1e-10).abs() < 1e-20);
        assert!((exp2(R32::new(3.0)).value() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_domain_errors_propagate() {
        assert!(sqrt(R32::new(-1.0)).value().is_nan());
        assert_eq!(log(T32::new(0.0)).value(), f32::NEG_INFINITY);
        assert_eq!(log(T32::new(0.0)).exact(), f64::NEG_INFINITY);
        assert!(acosh(0.5f64).is_nan());
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(R32::new(-3.0)).value(), -1.0);
        assert_eq!(sign(R32::new(2.0)).value(), 1.0);
        assert_eq!(sign(R32::new(0.0)).value(), 1.0);
        assert_eq!(sign(T32::new(-0.0)).value(), 1.0);
        assert_eq!(sign(T32::new(-0.0)).exact(), 1.0);
        assert_eq!(sign(-5.0f64), -1.0);
    }

    #[test]
    fn test_binary_combinations() {
        let two = T32::new(2.0);
        let three = T32::new(3.0);

        assert_eq!(pow(two, three).value(), 8.0);
        assert_eq!(pow(two, 3.0f32).exact(), 8.0);
        assert_eq!(pow(3.0f32, two).value(), 9.0);
        assert_eq!(pow(3.0f32, two).exact(), 9.0);

        let native: f32 = pow(2.0f32, 10.0f32);
        assert_eq!(native, 1024.0);
    }

    #[test]
    fn test_binary_argument_order() {
        let y = R32::new(1.0);
        let x = R32::new(2.0);
        assert_eq!(atan2(y, 2.0f32).value(), 1.0f32.atan2(2.0));
        assert_eq!(atan2(1.0f32, x).value(), 1.0f32.atan2(2.0));
        assert_eq!(fmod(7.0f32, R32::new(3.0)).value(), 1.0);
    }

    #[test]
    fn test_remainder_and_fmod() {
        assert_eq!(remainder(5.0f64, 3.0f64), -1.0);
        assert_eq!(fmod(5.0f64, 3.0f64), 2.0);
        assert_eq!(fmod(-5.0f32, 3.0f32), -2.0);
        assert_eq!(remainder(T32::new(5.0), 3.0f32).exact(), -1.0);
        assert_eq!(hypot(T32::new(3.0), T32::new(4.0)).value(), 5.0);
    }

    #[test]
    fn test_min_max_pairs() {
        let a = T32::with_exact(1.0, 1.5);
        let b = T32::with_exact(2.0, 2.5);

        assert_eq!(min(a, b).value(), 1.0);
        assert_eq!(min(a, b).exact(), 1.5);
        assert_eq!(max(a, b).value(), 2.0);
        assert_eq!(max(a, b).exact(), 2.5);

        assert_eq!(min(0.5f32, b).value(), 0.5);
        assert_eq!(max(a, 4.0f32).exact(), 4.0);

        let native: f64 = max(1.0f64, 2.0f64);
        assert_eq!(native, 2.0);
    }

    #[test]
    fn test_min_max_ignore_nan() {
        let nan = R32::new(f32::NAN);
        let one = R32::new(1.0);
        assert_eq!(min(nan, one).value(), 1.0);
        assert_eq!(max(one, nan).value(), 1.0);
        assert_eq!(min(f32::NAN, 2.0f32), 2.0);
    }

    #[test]
    fn test_variadic_min_max() {
        let m: f32 = crate::min!(1.0f32, 2.0f32, 3.0f32);
        assert_eq!(m, 1.0);

        let single: f32 = crate::max!(7.0f32);
        assert_eq!(single, 7.0);

        let mixed = crate::max!(1.0f32, R32::new(5.0), 3.0f32, R32::new(4.0));
        assert_eq!(mixed.value(), 5.0);

        let tracked = crate::min!(T32::with_exact(3.0, 3.25), 4.0f32, T32::new(3.5));
        assert_eq!(tracked.value(), 3.0);
        assert_eq!(tracked.exact(), 3.25);
    }

    #[test]
    fn test_clamp() {
        let lo = T32::new(1.0);
        let hi = T32::new(3.0);

        assert_eq!(clamp(T32::new(5.0), lo, hi).value(), 3.0);
        assert_eq!(clamp(T32::new(-2.0), lo, hi).value(), 1.0);
        assert_eq!(clamp(T32::new(2.0), lo, hi).value(), 2.0);
        assert_eq!(clamp(R32::new(5.0), 1.0f32, 3.0f32).value(), 3.0);
        assert_eq!(clamp(R32::new(0.0), R32::new(1.0), 3.0f32).value(), 1.0);

        let native: f32 = clamp(9.0f32, 0.0f32, 1.0f32);
        assert_eq!(native, 1.0);
    }

    #[test]
    fn test_clamp_tracks_shadow() {
        let r = clamp(T32::with_exact(2.0, 2.125), 1.0f32, 3.0f32);
        assert_eq!(r.value(), 2.0);
        assert_eq!(r.exact(), 2.125);
    }
}
