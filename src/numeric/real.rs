// ============================================================================
// Dual-Precision Real
// Native float replacement with an optional f64 shadow computation
// ============================================================================

use super::mode::{Double, NativeFloat, Precision, Single, Tracked, Tracking, Untracked, Widen};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A floating-point value of width `P`, optionally shadowed by an `f64`.
///
/// `Real<Single>` is a drop-in replacement for `f32` and `Real<Double>` for
/// `f64`: same size, same alignment, same results. Switching the second
/// parameter to [`Tracked`] makes every operation also run in `f64` on a
/// shadow value, so the round-off introduced by the narrower width can be
/// read back at any point with [`Real::error`].
///
/// # Type Parameters
/// - `P`: [`Single`] (primary is `f32`, default) or [`Double`] (primary is `f64`)
/// - `T`: [`Untracked`] (default) or [`Tracked`]
///
/// # Example
/// ```
/// use shadow_real::numeric::{Real, Single, Tracked};
///
/// let mut x = Real::<Single, Tracked>::with_exact(0.1f32, 0.1f64);
/// x += x;
/// assert!(x.error() != 0.0);
/// assert_eq!(x.value(), 0.2f32);
/// ```
///
/// Comparisons only look at the primary value; the shadow never takes part
/// in control flow.
///
/// The shadow accessors exist only on tracked types. Each of these fails to
/// compile:
///
/// ```compile_fail
/// use shadow_real::numeric::{Real, Single};
///
/// let _ = Real::<Single>::new(1.0).exact();
/// ```
///
/// ```compile_fail
/// use shadow_real::numeric::{Real, Single};
///
/// let _ = Real::<Single>::new(1.0).error();
/// ```
///
/// ```compile_fail
/// use shadow_real::numeric::{Real, Single};
///
/// let _ = Real::<Single>::with_exact(1.0, 1.0);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Real<P: Precision = Single, T: Tracking = Untracked> {
    value: P::Native,
    exact: T::Shadow,
}

// ============================================================================
// Construction and Access
// ============================================================================

impl<P: Precision, T: Tracking> Real<P, T> {
    /// Create from a native value. The shadow, if any, starts as the widened
    /// value, so a fresh instance has zero error.
    #[inline]
    pub fn new(value: P::Native) -> Self {
        Self {
            value,
            exact: T::seed(value.widen()),
        }
    }

    /// Zero value
    #[inline]
    pub fn zero() -> Self {
        Self::new(P::Native::ZERO)
    }

    /// One (1.0)
    #[inline]
    pub fn one() -> Self {
        Self::new(P::Native::ONE)
    }

    /// The primary value.
    #[inline]
    pub fn value(self) -> P::Native {
        self.value
    }

    /// The primary value widened to `f64`.
    #[inline]
    pub fn widened(self) -> f64 {
        self.value.widen()
    }

    /// Whether this type carries a shadow value.
    #[inline]
    pub const fn is_tracked() -> bool {
        T::ENABLED
    }

    /// Assign from any primitive number.
    ///
    /// `value` is rounded to `P::Native` and the shadow restarts from that
    /// rounded primary, so `error()` is zero afterwards. Plain assignment
    /// between two `Real`s copies both fields and keeps their divergence.
    #[inline]
    pub fn set(&mut self, value: impl Widen) {
        *self = Self::new(P::Native::narrow(value.to_wide()));
    }

    /// Apply a unary operation to the primary value at its native width and
    /// to the shadow at full width.
    #[inline(always)]
    pub(crate) fn lift(
        self,
        narrow: impl FnOnce(P::Native) -> P::Native,
        wide: impl FnOnce(f64) -> f64,
    ) -> Self {
        Self {
            value: narrow(self.value),
            exact: T::map(self.exact, wide),
        }
    }

    /// Binary counterpart of [`Real::lift`]. The shadow of `rhs` feeds the
    /// wide operation.
    #[inline(always)]
    pub(crate) fn lift2(
        self,
        rhs: Self,
        narrow: impl FnOnce(P::Native, P::Native) -> P::Native,
        wide: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        Self {
            value: narrow(self.value, rhs.value),
            exact: T::zip(self.exact, rhs.exact, wide),
        }
    }
}

impl<P: Precision> Real<P, Tracked> {
    /// Create with an independently seeded shadow value.
    ///
    /// Useful to compare against a reference computed elsewhere at full
    /// precision, e.g. `with_exact(0.1f32, 0.1f64)` exposes the rounding of
    /// the literal itself. The shadow may be any primitive number.
    #[inline]
    pub fn with_exact(value: P::Native, exact: impl Widen) -> Self {
        Self {
            value,
            exact: exact.to_wide(),
        }
    }

    /// The shadow value.
    #[inline]
    pub fn exact(self) -> f64 {
        self.exact
    }

    /// Accumulated round-off: `exact() - widened()`.
    #[inline]
    pub fn error(self) -> f64 {
        self.exact - self.widened()
    }

    /// `|error()| / |exact()|`, or `|error()|` when the shadow is zero.
    #[inline]
    pub fn relative_error(self) -> f64 {
        let error = self.error().abs();
        if self.exact == 0.0 {
            error
        } else {
            error / self.exact.abs()
        }
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl<P: Precision, T: Tracking> Neg for Real<P, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.lift(|v| -v, |e| -e)
    }
}

macro_rules! arithmetic_operator {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<P: Precision, T: Tracking> $Op for Real<P, T> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self::Output {
                self.lift2(rhs, |a, b| a $sym b, |a, b| a $sym b)
            }
        }

        impl<P: Precision, T: Tracking> $OpAssign for Real<P, T> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

arithmetic_operator!(Add, add, AddAssign, add_assign, +);
arithmetic_operator!(Sub, sub, SubAssign, sub_assign, -);
arithmetic_operator!(Mul, mul, MulAssign, mul_assign, *);
arithmetic_operator!(Div, div, DivAssign, div_assign, /);

impl<P: Precision, T: Tracking> Sum for Real<P, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, P: Precision, T: Tracking> Sum<&'a Real<P, T>> for Real<P, T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}

impl<P: Precision, T: Tracking> Product for Real<P, T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a, P: Precision, T: Tracking> Product<&'a Real<P, T>> for Real<P, T> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * *x)
    }
}

// ============================================================================
// Comparison (primary value only)
// ============================================================================

impl<P: Precision, T: Tracking> PartialEq for Real<P, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: Precision, T: Tracking> PartialOrd for Real<P, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// ============================================================================
// Mixed Real / Native Operands
// ============================================================================

macro_rules! native_operands {
    (@arith $P:ty, $N:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Tracking> $Op<$N> for Real<$P, T> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: $N) -> Self::Output {
                self $sym Self::new(rhs)
            }
        }

        impl<T: Tracking> $Op<Real<$P, T>> for $N {
            type Output = Real<$P, T>;

            #[inline]
            fn $op(self, rhs: Real<$P, T>) -> Self::Output {
                Real::new(self) $sym rhs
            }
        }

        impl<T: Tracking> $OpAssign<$N> for Real<$P, T> {
            #[inline]
            fn $op_assign(&mut self, rhs: $N) {
                *self = *self $sym Self::new(rhs);
            }
        }
    };
    ($P:ty, $N:ty) => {
        impl<T: Tracking> From<$N> for Real<$P, T> {
            #[inline]
            fn from(value: $N) -> Self {
                Self::new(value)
            }
        }

        impl<T: Tracking> From<Real<$P, T>> for $N {
            #[inline]
            fn from(real: Real<$P, T>) -> Self {
                real.value
            }
        }

        native_operands!(@arith $P, $N, Add, add, AddAssign, add_assign, +);
        native_operands!(@arith $P, $N, Sub, sub, SubAssign, sub_assign, -);
        native_operands!(@arith $P, $N, Mul, mul, MulAssign, mul_assign, *);
        native_operands!(@arith $P, $N, Div, div, DivAssign, div_assign, /);

        impl<T: Tracking> PartialEq<$N> for Real<$P, T> {
            #[inline]
            fn eq(&self, other: &$N) -> bool {
                self.value == *other
            }
        }

        impl<T: Tracking> PartialEq<Real<$P, T>> for $N {
            #[inline]
            fn eq(&self, other: &Real<$P, T>) -> bool {
                *self == other.value
            }
        }

        impl<T: Tracking> PartialOrd<$N> for Real<$P, T> {
            #[inline]
            fn partial_cmp(&self, other: &$N) -> Option<Ordering> {
                self.value.partial_cmp(other)
            }
        }

        impl<T: Tracking> PartialOrd<Real<$P, T>> for $N {
            #[inline]
            fn partial_cmp(&self, other: &Real<$P, T>) -> Option<Ordering> {
                self.partial_cmp(&other.value)
            }
        }
    };
}

native_operands!(Single, f32);
native_operands!(Double, f64);

// ============================================================================
// Display and Debug
// ============================================================================

impl<P: Precision, T: Tracking> fmt::Display for Real<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(exact) = T::read(self.exact) else {
            return fmt::Display::fmt(&self.value, f);
        };
        let error = exact - self.widened();

        match f.precision() {
            Some(prec) => write!(
                f,
                "{{value = {:.prec$}, exact value = {:.prec$}, error = {:.prec$}}}",
                self.value,
                exact,
                error,
                prec = prec
            ),
            None => write!(
                f,
                "{{value = {}, exact value = {}, error = {}}}",
                self.value, exact, error
            ),
        }
    }
}

impl<P: Precision, T: Tracking> fmt::Debug for Real<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match T::read(self.exact) {
            Some(exact) => write!(
                f,
                "Real<{}>({:?}, exact={:?})",
                <P::Native as NativeFloat>::NAME,
                self.value,
                exact
            ),
            None => write!(
                f,
                "Real<{}>({:?})",
                <P::Native as NativeFloat>::NAME,
                self.value
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
