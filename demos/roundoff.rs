// ============================================================================
// Round-off Analysis Example
// ============================================================================
//
// Run with: cargo run --example roundoff --features logging

use shadow_real::numeric::{sqrt, Real, Single, Tracked};
use shadow_real::probe::{AccuracyProbe, ProbeConfig};

// Switch to `Untracked` and the same code runs as plain f32.
type Scalar = Real<Single, Tracked>;

/// Smaller root of x^2 - b*x + c = 0 via the textbook formula.
fn small_root_naive(b: Scalar, c: Scalar) -> Scalar {
    (b - sqrt(b * b - 4.0f32 * c)) / 2.0f32
}

/// Same root, rewritten to avoid cancellation.
fn small_root_stable(b: Scalar, c: Scalar) -> Scalar {
    2.0f32 * c / (b + sqrt(b * b - 4.0f32 * c))
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Shadow Real Example ===\n");

    // Literal rounding
    let tenth = Scalar::with_exact(0.1f32, 0.1f64);
    println!("0.1 as f32:          {}", tenth);

    // Harmonic series
    let mut harmonic = AccuracyProbe::new(ProbeConfig::single_precision("harmonic_sum"))
        .expect("valid probe config");
    let mut sum = Scalar::zero();
    for k in 1..=100_000 {
        sum += 1.0f32 / k as f32;
        if k % 20_000 == 0 {
            harmonic.observe(sum);
        }
    }
    println!("harmonic sum:        {}", sum);
    println!("  {}", harmonic.summary());

    // Quadratic roots
    let mut roots = AccuracyProbe::new(ProbeConfig::single_precision("quadratic_root"))
        .expect("valid probe config");
    let b = Scalar::new(1000.0);
    let c = Scalar::new(0.25);

    let naive = small_root_naive(b, c);
    let stable = small_root_stable(b, c);
    roots.observe(naive);
    roots.observe(stable);

    println!("naive small root:    {:.9}", naive);
    println!("stable small root:   {:.9}", stable);
    println!("  {}", roots.summary());
}
