// ============================================================================
// Shadow Real Library
// Drop-in f32/f64 replacement with optional double-precision shadow tracking
// ============================================================================

//! # Shadow Real
//!
//! Find the sections of numerical code where single precision is not good
//! enough, without rewriting them.
//!
//! ## Features
//!
//! - **Drop-in replacement**: `Real<Single>` behaves as `f32`, `Real<Double>` as `f64`,
//!   with the same size, layout and results
//! - **Shadow tracking**: `Real<Single, Tracked>` repeats every operation in `f64`
//!   and exposes the accumulated round-off through `error()`
//! - **Math library**: operators, comparisons and the usual `<cmath>` function set
//!   over any mix of `Real` and native operands
//! - **Accuracy probes**: tolerance checks with `tracing` output for watched sections
//!
//! ## Example
//!
//! ```rust
//! use shadow_real::prelude::*;
//! use shadow_real::numeric::sqrt;
//!
//! // Declare the type once; switch `Tracked` to `Untracked` for production.
//! type Scalar = Real<Single, Tracked>;
//!
//! let a = Scalar::new(2.0);
//! let b = sqrt(a) * sqrt(a) - 2.0f32;
//!
//! println!("{}", b);
//! assert_eq!(b.value(), sqrt(2.0f32) * sqrt(2.0f32) - 2.0);
//! assert!(b.error().abs() < 1e-6);
//! ```

pub mod numeric;
pub mod probe;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        BinaryMath, Double, NativeFloat, Precision, Real, Single, Tracked, Tracking, UnaryMath,
        Untracked, Widen,
    };
    pub use crate::probe::{AccuracyProbe, Observation, ProbeConfig, ProbeError, ProbeSummary};
}

#[cfg(test)]
mod property_tests {
    use super::numeric::*;
    use proptest::prelude::*;
    use quickcheck::TestResult;

    type R32 = Real<Single>;
    type T32 = Real<Single, Tracked>;

    fn same_f32(a: f32, b: f32) -> bool {
        a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
    }

    fn same_f64(a: f64, b: f64) -> bool {
        a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
    }

    /// Apply one step of a mixed operation sequence to a value.
    fn step<X>(x: X, op: u8, k: f32) -> X
    where
        X: UnaryMath
            + std::ops::Add<f32, Output = X>
            + std::ops::Sub<f32, Output = X>
            + std::ops::Mul<f32, Output = X>
            + std::ops::Div<f32, Output = X>,
    {
        match op {
            0 => x + k,
            1 => x - k,
            2 => x * k,
            3 => x / k,
            4 => sqrt(abs(x)),
            _ => sin(x),
        }
    }

    fn wide_step(x: f64, op: u8, k: f32) -> f64 {
        let k = f64::from(k);
        match op {
            0 => x + k,
            1 => x - k,
            2 => x * k,
            3 => x / k,
            4 => x.abs().sqrt(),
            _ => x.sin(),
        }
    }

    proptest! {
        #[test]
        fn untracked_is_bit_identical_to_native(
            x in -1.0e6f32..1.0e6f32,
            y in -1.0e6f32..1.0e6f32,
        ) {
            let (a, b) = (R32::new(x), R32::new(y));

            prop_assert!(same_f32((a + b).value(), x + y));
            prop_assert!(same_f32((a - y).value(), x - y));
            prop_assert!(same_f32((x * b).value(), x * y));
            prop_assert!(same_f32((a / b).value(), x / y));
            prop_assert!(same_f32(sqrt(a).value(), x.sqrt()));
            prop_assert!(same_f32(cos(a).value(), x.cos()));
            prop_assert!(same_f32(hypot(a, b).value(), x.hypot(y)));
            prop_assert!(same_f32(atan2(a, y).value(), x.atan2(y)));
            prop_assert!(same_f32(min(a, b).value(), x.min(y)));
        }

        #[test]
        fn shadow_follows_wide_computation(
            start in -100.0f32..100.0f32,
            ops in prop::collection::vec((0u8..6, -100.0f32..100.0f32), 1..32),
        ) {
            let mut tracked = T32::new(start);
            let mut narrow = start;
            let mut wide = f64::from(start);

            for &(op, k) in &ops {
                tracked = step(tracked, op, k);
                narrow = step(narrow, op, k);
                wide = wide_step(wide, op, k);
            }

            prop_assert!(same_f32(tracked.value(), narrow));
            prop_assert!(same_f64(tracked.exact(), wide));
            prop_assert!(same_f64(tracked.error(), tracked.exact() - f64::from(tracked.value())));
        }

        #[test]
        fn set_discards_divergence(
            start in 0.0f32..10.0f32,
            reset in -10.0f32..10.0f32,
            wide in -10.0f64..10.0f64,
        ) {
            let mut x = sqrt(T32::new(start)) * 3.1f32;
            let copy = x;
            prop_assert!(same_f64(copy.error(), x.error()));

            x.set(reset);
            prop_assert_eq!(x.value(), reset);
            prop_assert_eq!(x.exact(), f64::from(reset));
            prop_assert_eq!(x.error(), 0.0);

            x.set(wide);
            prop_assert_eq!(x.value(), wide as f32);
            prop_assert_eq!(x.exact(), f64::from(wide as f32));
            prop_assert_eq!(x.error(), 0.0);
        }
    }

    #[test]
    fn comparisons_ignore_shadow() {
        fn prop(value: f32, e1: f64, e2: f64) -> TestResult {
            if value.is_nan() {
                return TestResult::discard();
            }
            let a = T32::with_exact(value, e1);
            let b = T32::with_exact(value, e2);
            TestResult::from_bool(
                a == b && a <= b && a >= b && a.partial_cmp(&b) == Some(std::cmp::Ordering::Equal),
            )
        }

        quickcheck::quickcheck(prop as fn(f32, f64, f64) -> TestResult);
    }

    #[test]
    fn documented_scenarios() {
        // fresh value: no error
        let a = T32::new(0.1);
        assert_eq!(a.exact(), f64::from(0.1f32));
        assert_eq!(a.error(), 0.0);

        // independently seeded reference exposes the rounding of 0.1
        let mut b = T32::with_exact(0.1f32, 0.1f64);
        let e0 = b.error();
        assert!(e0 != 0.0 && e0.abs() < 1e-8);
        b += b;
        assert_eq!(b.error(), 2.0 * e0);

        assert_eq!(sign(T32::new(-0.0)).value(), 1.0);
        assert_eq!(
            clamp(T32::new(5.0), T32::new(1.0), T32::new(3.0)).value(),
            3.0
        );

        let m: f32 = crate::min!(1.0f32, 2.0f32, 3.0f32);
        assert_eq!(m, 1.0);
    }
}
