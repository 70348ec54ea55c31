// ============================================================================
// Precision and Tracking Modes
// Compile-time selectors for the primary width and the shadow computation
// ============================================================================

use super::functions::{BinaryMath, UnaryMath};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Single {}
    impl Sealed for super::Double {}
    impl Sealed for super::Untracked {}
    impl Sealed for super::Tracked {}

    pub trait SealedArithmetic {}

    macro_rules! sealed_arithmetic {
        ($($t:ty),*) => { $(impl SealedArithmetic for $t {})* };
    }

    sealed_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
}

// ============================================================================
// Native Floating-Point Types
// ============================================================================

/// A hardware floating-point type usable as the primary value of a `Real`.
///
/// Implemented for `f32` and `f64` only.
pub trait NativeFloat:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + UnaryMath
    + BinaryMath<Self, Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Type name used in `Debug` output
    const NAME: &'static str;

    /// Convert to `f64` without loss.
    fn widen(self) -> f64;

    /// Convert from `f64`, rounding to nearest when narrowing.
    fn narrow(wide: f64) -> Self;
}

impl NativeFloat for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NAME: &'static str = "f32";

    #[inline(always)]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline(always)]
    fn narrow(wide: f64) -> Self {
        wide as f32
    }
}

impl NativeFloat for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NAME: &'static str = "f64";

    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }

    #[inline(always)]
    fn narrow(wide: f64) -> Self {
        wide
    }
}

// ============================================================================
// Arithmetic Inputs
// ============================================================================

/// Any primitive number that can be assigned to a `Real` or seed its shadow.
///
/// Integers beyond 2^53 in magnitude round to the nearest `f64`.
pub trait Widen: sealed::SealedArithmetic + Copy {
    fn to_wide(self) -> f64;
}

macro_rules! widen_as_f64 {
    ($($t:ty),*) => {
        $(
            impl Widen for $t {
                #[inline(always)]
                fn to_wide(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

widen_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ============================================================================
// Precision Selector
// ============================================================================

/// Selects the native width a `Real` behaves as.
pub trait Precision:
    sealed::Sealed + Copy + Default + fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// The native type holding the primary value
    type Native: NativeFloat;
}

/// Single precision: the primary value is an `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Single;

/// Double precision: the primary value is an `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Double;

impl Precision for Single {
    type Native = f32;
}

impl Precision for Double {
    type Native = f64;
}

// ============================================================================
// Tracking Selector
// ============================================================================

/// Selects whether a `Real` carries an `f64` shadow of its primary value.
///
/// Every arithmetic operation on `Real` is routed through `seed`, `map` and
/// `zip`. For `Untracked` the shadow is `()` and these are no-ops, so the
/// closures computing the wide result are never called and compile away.
pub trait Tracking:
    sealed::Sealed + Copy + Default + fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// Storage for the shadow value
    type Shadow: Copy + Default + fmt::Debug + Send + Sync;

    /// Whether a shadow value is maintained
    const ENABLED: bool;

    /// Build a shadow from a wide value.
    fn seed(wide: f64) -> Self::Shadow;

    /// Apply a unary wide operation to the shadow.
    fn map(shadow: Self::Shadow, op: impl FnOnce(f64) -> f64) -> Self::Shadow;

    /// Apply a binary wide operation to two shadows.
    fn zip(
        lhs: Self::Shadow,
        rhs: Self::Shadow,
        op: impl FnOnce(f64, f64) -> f64,
    ) -> Self::Shadow;

    /// Read the shadow, if there is one.
    fn read(shadow: Self::Shadow) -> Option<f64>;
}

/// No shadow value. `Real<P, Untracked>` is layout- and result-identical to
/// `P::Native`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Untracked;

/// Carry an `f64` shadow alongside the primary value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tracked;

impl Tracking for Untracked {
    type Shadow = ();
    const ENABLED: bool = false;

    #[inline(always)]
    fn seed(_wide: f64) -> Self::Shadow {}

    #[inline(always)]
    fn map(_shadow: Self::Shadow, _op: impl FnOnce(f64) -> f64) -> Self::Shadow {}

    #[inline(always)]
    fn zip(
        _lhs: Self::Shadow,
        _rhs: Self::Shadow,
        _op: impl FnOnce(f64, f64) -> f64,
    ) -> Self::Shadow {
    }

    #[inline(always)]
    fn read(_shadow: Self::Shadow) -> Option<f64> {
        None
    }
}

impl Tracking for Tracked {
    type Shadow = f64;
    const ENABLED: bool = true;

    #[inline(always)]
    fn seed(wide: f64) -> Self::Shadow {
        wide
    }

    #[inline(always)]
    fn map(shadow: Self::Shadow, op: impl FnOnce(f64) -> f64) -> Self::Shadow {
        op(shadow)
    }

    #[inline(always)]
    fn zip(
        lhs: Self::Shadow,
        rhs: Self::Shadow,
        op: impl FnOnce(f64, f64) -> f64,
    ) -> Self::Shadow {
        op(lhs, rhs)
    }

    #[inline(always)]
    fn read(shadow: Self::Shadow) -> Option<f64> {
        Some(shadow)
    }
}
