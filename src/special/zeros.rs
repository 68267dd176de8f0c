//! Positive zeros of Jₙ and J'ₙ.
//!
//! Orders 0–4 and the first five roots come from a static table. Anything
//! outside the table is located by Newton–Raphson from an asymptotic initial
//! guess. The zero of J'₀ at the origin is excluded, so the p-th root of J'₀
//! is the p-th root of J₁.

#![allow(clippy::excessive_precision)]

use std::f64::consts::PI;

use tracing::{debug, warn};

use super::bessel::{bessel_j, bessel_j_prime};
use super::BesselError;

/// Number of tabulated orders (n = 0 .. `TABULATED_ORDERS - 1`).
pub const TABULATED_ORDERS: u32 = 5;
/// Number of tabulated roots per order (p = 1 ..= `TABULATED_ROOTS`).
pub const TABULATED_ROOTS: u32 = 5;

const NEWTON_MAX_ITERATIONS: u32 = 20;
const NEWTON_TOLERANCE: f64 = 1.0e-12;

/// jₙ,ₚ: zeros of Jₙ, row = order, column = root index − 1.
static J_ZEROS: [[f64; 5]; 5] = [
    [2.404825557695773, 5.520078110286311, 8.653727912911012, 11.79153443901428, 14.93091770848779],
    [3.831705970207512, 7.015586669815619, 10.17346813506272, 13.32369193631422, 16.47063005087763],
    [5.135622301840683, 8.417244140399865, 11.61984117214906, 14.79595178235126, 17.95981949498783],
    [6.380161895923984, 9.761023129981670, 13.01520072169843, 16.22346616031877, 19.40941522643501],
    [7.588342434503804, 11.06470948850118, 14.37253667161759, 17.61596604980483, 20.82693295696239],
];

/// j'ₙ,ₚ: zeros of J'ₙ excluding the origin.
static J_PRIME_ZEROS: [[f64; 5]; 5] = [
    [3.831705970207512, 7.015586669815619, 10.17346813506272, 13.32369193631422, 16.47063005087763],
    [1.841183781340659, 5.331442773525033, 8.536316366346286, 11.70600490259206, 14.86358863390903],
    [3.054236928227140, 6.706133194158459, 9.969467823087596, 13.17037085601612, 16.34752231832178],
    [4.201188941210528, 8.015236598375952, 11.34592431074301, 14.58584828616703, 17.78874786606647],
    [5.317553126083994, 9.282396285241612, 12.68190844263889, 15.96410703773155, 19.19602880004891],
];

fn tabulated(table: &[[f64; 5]; 5], n: u32, p: u32) -> Option<f64> {
    if n < TABULATED_ORDERS && p <= TABULATED_ROOTS {
        Some(table[n as usize][(p - 1) as usize])
    } else {
        None
    }
}

/// The p-th positive root of Jₙ(x) = 0 (p ≥ 1).
pub fn bessel_j_zero(n: u32, p: u32) -> Result<f64, BesselError> {
    if p == 0 {
        return Err(BesselError::InvalidRootIndex { order: n, index: p });
    }
    if let Some(root) = tabulated(&J_ZEROS, n, p) {
        return Ok(root);
    }
    let order = f64::from(n);
    let guess = if p == 1 {
        order + 1.8 * order.cbrt() + 0.5 * PI
    } else {
        mcmahon(order, p, 0.25, -1.0)
    };
    debug!(order = n, index = p, guess, "refining Bessel J zero outside the table");
    newton_refine(n, p, guess, |x| bessel_j(n, x), |x| bessel_j_prime(n, x))
}

/// The p-th positive root of J'ₙ(x) = 0 (p ≥ 1), the origin excluded.
pub fn bessel_j_prime_zero(n: u32, p: u32) -> Result<f64, BesselError> {
    if p == 0 {
        return Err(BesselError::InvalidRootIndex { order: n, index: p });
    }
    if let Some(root) = tabulated(&J_PRIME_ZEROS, n, p) {
        return Ok(root);
    }
    if n == 0 {
        // J'₀ = −J₁
        return bessel_j_zero(1, p);
    }
    let order = f64::from(n);
    let guess = if p == 1 {
        order + 0.8086 * order.cbrt()
    } else {
        mcmahon(order, p, 0.75, 3.0)
    };
    debug!(order = n, index = p, guess, "refining Bessel J' zero outside the table");
    let second_derivative =
        |x: f64| (order * order / (x * x) - 1.0) * bessel_j(n, x) - bessel_j_prime(n, x) / x;
    newton_refine(n, p, guess, |x| bessel_j_prime(n, x), second_derivative)
}

/// McMahon's large-root expansion β − (4n² + shift)/(8β), β = (p + n/2 − offset)π.
fn mcmahon(order: f64, p: u32, offset: f64, shift: f64) -> f64 {
    let beta = (f64::from(p) + 0.5 * order - offset) * PI;
    beta - (4.0 * order * order + shift) / (8.0 * beta)
}

fn newton_refine<F, D>(n: u32, p: u32, guess: f64, f: F, df: D) -> Result<f64, BesselError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = guess;
    for _ in 0..NEWTON_MAX_ITERATIONS {
        let step = f(x) / df(x);
        x -= step;
        if !x.is_finite() || x <= 0.0 {
            return Err(BesselError::NoConvergence {
                order: n,
                index: p,
                estimate: x,
            });
        }
        if step.abs() < NEWTON_TOLERANCE {
            return Ok(x);
        }
    }
    warn!(
        order = n,
        index = p,
        estimate = x,
        "Newton refinement hit its iteration cap; returning last estimate"
    );
    Ok(x)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn tabulated_zeros_are_roots() {
        for n in 0..TABULATED_ORDERS {
            for p in 1..=TABULATED_ROOTS {
                let chi = bessel_j_zero(n, p).unwrap();
                assert!(bessel_j(n, chi).abs() < 1.0e-3, "J_{n}({chi})");
                let chi_prime = bessel_j_prime_zero(n, p).unwrap();
                assert!(bessel_j_prime(n, chi_prime).abs() < 1.0e-3, "J'_{n}({chi_prime})");
            }
        }
    }

    #[test]
    fn zero_index_is_rejected() {
        assert_eq!(
            bessel_j_zero(2, 0),
            Err(BesselError::InvalidRootIndex { order: 2, index: 0 })
        );
        assert!(bessel_j_prime_zero(0, 0).is_err());
    }

    #[test]
    fn newton_fallback_finds_untabulated_roots() {
        assert_abs_diff_eq!(bessel_j_zero(5, 1).unwrap(), 8.771_483_815_959_954, epsilon = 1.0e-6);
        assert_abs_diff_eq!(bessel_j_zero(0, 6).unwrap(), 18.071_063_967_910_92, epsilon = 1.0e-6);
        assert_abs_diff_eq!(
            bessel_j_prime_zero(5, 1).unwrap(),
            6.415_616_375_700_24,
            epsilon = 1.0e-6
        );
        assert_abs_diff_eq!(
            bessel_j_prime_zero(5, 6).unwrap(),
            23.803_581_476_593_86,
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn derivative_zeros_of_order_zero_follow_j1() {
        assert_abs_diff_eq!(
            bessel_j_prime_zero(0, 6).unwrap(),
            19.615_858_510_468_24,
            epsilon = 1.0e-6
        );
        assert_eq!(bessel_j_prime_zero(0, 1).unwrap(), bessel_j_zero(1, 1).unwrap());
    }

    #[test]
    fn roots_increase_with_index() {
        for n in 0..8 {
            let mut last = 0.0;
            for p in 1..9 {
                let root = bessel_j_zero(n, p).unwrap();
                assert!(root > last);
                last = root;
            }
        }
    }
}
