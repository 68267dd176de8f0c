//! Bessel functions of the first and second kind for integer order and real argument.
//!
//! Small arguments (|x| < 8) use the defining power series; J₀, J₁, Y₀ and Y₁
//! switch to Hankel's asymptotic expansion beyond that. Higher orders are
//! obtained by forward recurrence, which is stable for Yₙ everywhere and for
//! Jₙ while n < x. When n ≥ x the series is used for Jₙ at any argument.
//!
//! Precision is visualization-grade: the hand-over at x = 8 is continuous to
//! roughly 1e-7, which is the floor of the truncated asymptotic expansion there.
//!
//! # References
//!
//! - Abramowitz & Stegun, *Handbook of Mathematical Functions*, §9.1 and §9.2.

use std::f64::consts::PI;

/// Argument below which the power series is used.
const SERIES_LIMIT: f64 = 8.0;
/// Relative magnitude at which a series term is considered negligible.
const SERIES_TOLERANCE: f64 = 1.0e-15;
/// Safety bound on the number of series terms.
const SERIES_MAX_TERMS: u32 = 50;
/// Safety bound on the number of asymptotic correction terms.
const ASYMPTOTIC_MAX_TERMS: u32 = 30;
/// Euler–Mascheroni constant γ.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Bessel function of the first kind Jₙ(x).
///
/// Exact at the origin: J₀(0) = 1 and Jₙ(0) = 0 for n > 0.
#[must_use]
pub fn bessel_j(n: u32, x: f64) -> f64 {
    if x == 0.0 {
        return if n == 0 { 1.0 } else { 0.0 };
    }
    if x.is_infinite() {
        return 0.0;
    }
    // Jₙ(−x) = (−1)ⁿ Jₙ(x)
    let sign = if x < 0.0 && n % 2 == 1 { -1.0 } else { 1.0 };
    let ax = x.abs();
    let value = if ax < SERIES_LIMIT || f64::from(n) >= ax {
        j_series(n, ax)
    } else {
        j_upward(n, ax)
    };
    sign * value
}

/// First derivative J'ₙ(x).
#[must_use]
pub fn bessel_j_prime(n: u32, x: f64) -> f64 {
    if n == 0 {
        -bessel_j(1, x)
    } else {
        0.5 * (bessel_j(n - 1, x) - bessel_j(n + 1, x))
    }
}

/// Bessel function of the second kind (Neumann function) Yₙ(x).
///
/// Yₙ is singular at the origin. For `x <= 0` this returns
/// [`f64::NEG_INFINITY`] instead of failing; callers must check for
/// non-finite results before doing further arithmetic.
#[must_use]
pub fn bessel_y(n: u32, x: f64) -> f64 {
    if x <= 0.0 || x.is_nan() {
        return f64::NEG_INFINITY;
    }
    if x.is_infinite() {
        return 0.0;
    }
    let (y0, y1) = if x < SERIES_LIMIT {
        (y0_series(x), y1_series(x))
    } else {
        (hankel_asymptotic(0, x).1, hankel_asymptotic(1, x).1)
    };
    match n {
        0 => y0,
        1 => y1,
        _ => upward(n, x, y0, y1),
    }
}

/// First derivative Y'ₙ(x).
///
/// For `x <= 0` the derivative is reported as [`f64::INFINITY`], the limit
/// from the right.
#[must_use]
pub fn bessel_y_prime(n: u32, x: f64) -> f64 {
    if x <= 0.0 || x.is_nan() {
        return f64::INFINITY;
    }
    if n == 0 {
        -bessel_y(1, x)
    } else {
        0.5 * (bessel_y(n - 1, x) - bessel_y(n + 1, x))
    }
}

/// Power series Σₖ (−1)ᵏ (x/2)^(2k+n) / (k! (k+n)!).
fn j_series(n: u32, x: f64) -> f64 {
    let half = 0.5 * x;
    // (x/2)ⁿ / n! built incrementally so large orders do not overflow.
    let mut term = 1.0;
    for i in 1..=n {
        term *= half / f64::from(i);
    }
    let quarter_sq = half * half;
    let mut sum = term;
    for k in 1..SERIES_MAX_TERMS {
        term *= -quarter_sq / (f64::from(k) * f64::from(k + n));
        sum += term;
        if term.abs() < SERIES_TOLERANCE * sum.abs() {
            break;
        }
    }
    sum
}

fn j_upward(n: u32, x: f64) -> f64 {
    let (j0, _) = hankel_asymptotic(0, x);
    let (j1, _) = hankel_asymptotic(1, x);
    match n {
        0 => j0,
        1 => j1,
        _ => upward(n, x, j0, j1),
    }
}

/// Forward recurrence Cₖ₊₁ = (2k/x) Cₖ − Cₖ₋₁ seeded with C₀, C₁.
fn upward(n: u32, x: f64, c0: f64, c1: f64) -> f64 {
    let mut prev = c0;
    let mut curr = c1;
    for k in 1..n {
        let next = 2.0 * f64::from(k) / x * curr - prev;
        prev = curr;
        curr = next;
    }
    curr
}

/// Y₀ from its logarithmic series around the origin.
fn y0_series(x: f64) -> f64 {
    let quarter_sq = 0.25 * x * x;
    let mut term = quarter_sq;
    let mut harmonic = 1.0;
    let mut sum = term;
    for k in 1..SERIES_MAX_TERMS {
        let next = f64::from(k + 1);
        term *= -quarter_sq / (next * next);
        harmonic += 1.0 / next;
        let contribution = term * harmonic;
        sum += contribution;
        if contribution.abs() < SERIES_TOLERANCE * sum.abs() {
            break;
        }
    }
    2.0 / PI * (((0.5 * x).ln() + EULER_GAMMA) * j_series(0, x) + sum)
}

/// Y₁ from its logarithmic series around the origin.
fn y1_series(x: f64) -> f64 {
    let half = 0.5 * x;
    let quarter_sq = half * half;
    let mut term = half;
    let mut h_k = 0.0;
    let mut h_k1 = 1.0;
    let mut sum = term * (h_k + h_k1);
    for k in 1..SERIES_MAX_TERMS {
        let kf = f64::from(k);
        term *= -quarter_sq / (kf * (kf + 1.0));
        h_k = h_k1;
        h_k1 += 1.0 / (kf + 1.0);
        let contribution = term * (h_k + h_k1);
        sum += contribution;
        if contribution.abs() < SERIES_TOLERANCE * sum.abs() {
            break;
        }
    }
    2.0 / PI * ((half.ln() + EULER_GAMMA) * j_series(1, x)) - 2.0 / (PI * x) - sum / PI
}

/// Hankel's expansion returning (Jᵥ(x), Yᵥ(x)) for large positive x.
///
/// The correction series P, Q are summed until their terms stop shrinking.
fn hankel_asymptotic(order: u32, x: f64) -> (f64, f64) {
    let mu = 4.0 * f64::from(order) * f64::from(order);
    let eight_x = 8.0 * x;
    let mut p = 1.0;
    let mut q = 0.0;
    let mut term: f64 = 1.0;
    for k in 1..=ASYMPTOTIC_MAX_TERMS {
        let odd = f64::from(2 * k - 1);
        let next = term * (mu - odd * odd) / (f64::from(k) * eight_x);
        if next.abs() >= term.abs() {
            break;
        }
        term = next;
        match k % 4 {
            1 => q += term,
            2 => p -= term,
            3 => q -= term,
            _ => p += term,
        }
        if term.abs() < f64::EPSILON * 1.0e-2 {
            break;
        }
    }
    let chi = x - (0.5 * f64::from(order) + 0.25) * PI;
    let amplitude = (2.0 / (PI * x)).sqrt();
    let (sin_chi, cos_chi) = chi.sin_cos();
    (
        amplitude * (p * cos_chi - q * sin_chi),
        amplitude * (p * sin_chi + q * cos_chi),
    )
}
