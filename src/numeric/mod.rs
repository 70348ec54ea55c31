// ============================================================================
// Numeric Module
// Dual-precision floating-point values for round-off analysis
// ============================================================================
//
// This module provides:
// - Real<P, T>: native float replacement with an optional f64 shadow
// - Precision (Single/Double) and Tracking (Untracked/Tracked) selectors
// - UnaryMath/BinaryMath: math-library functions over Real and natives
//
// Design principles:
// - Modes are type parameters, never runtime flags
// - Untracked values have the size, layout and results of the native type
// - Comparisons never look at the shadow value

mod functions;
mod mode;
mod real;

pub use functions::{
    abs, acos, acosh, asin, asinh, atan, atan2, atanh, cbrt, ceil, clamp, cos, cosh, erf, erfc,
    exp, exp2, floor, fmod, hypot, lgamma, log, log10, log1p, log2, max, min, pow, remainder, rint,
    round, sign, sin, sinh, sqrt, tan, tanh, tgamma, trunc, BinaryMath, UnaryMath,
};
pub use mode::{Double, NativeFloat, Precision, Single, Tracked, Tracking, Untracked, Widen};
pub use real::Real;
