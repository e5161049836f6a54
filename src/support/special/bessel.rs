use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Below this argument the ascending series is summed directly.
///
/// Its largest term stays below `4` here, so cancellation costs less than
/// one digit.
const SERIES_LIMIT: f64 = 4.0;

/// From this argument on, Hankel's asymptotic expansion is used.
///
/// Its smallest term is below `1e-20` here. Between the two limits `J0` and
/// `J1` come from Miller's backward recurrence.
const ASYMPTOTIC_LIMIT: f64 = 25.0;

const MAX_SERIES_TERMS: usize = 200;

/// Magnitude at which the backward recurrence is rescaled to avoid overflow.
const RECURRENCE_RESCALE: f64 = 1e250;

/// Newton steps used to polish the McMahon estimate of a `J0` zero.
const MAX_ZERO_REFINEMENTS: usize = 12;

/// Bessel function of the first kind of order zero, `J0(x)`.
#[must_use]
pub fn bessel_j0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < SERIES_LIMIT {
        ascending_series(0, ax)
    } else if ax < ASYMPTOTIC_LIMIT {
        backward_recurrence(ax).0
    } else {
        hankel_asymptotic(0, ax)
    }
}

/// Bessel function of the first kind of order one, `J1(x)`.
///
/// `J1` is odd: `J1(-x) = -J1(x)`.
#[must_use]
pub fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    let value = if ax < SERIES_LIMIT {
        ascending_series(1, ax)
    } else if ax < ASYMPTOTIC_LIMIT {
        backward_recurrence(ax).1
    } else {
        hankel_asymptotic(1, ax)
    };
    if x < 0.0 { -value } else { value }
}

/// The `s`-th positive zero of `J0`, counting from `s = 1`.
///
/// Returns `0.0` for `s = 0`, which is the convenient lower end of the first
/// bracketing interval for cylinder eigenvalues.
///
/// Starts from McMahon's expansion and polishes with Newton's method using
/// `J0' = -J1`.
#[must_use]
pub fn bessel_j0_zero(s: usize) -> f64 {
    if s == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let beta = (s as f64 - 0.25) * PI;
    let b8 = 8.0 * beta;
    let mut x = beta + 1.0 / b8 - 124.0 / (3.0 * b8.powi(3)) + 120_928.0 / (15.0 * b8.powi(5));

    for _ in 0..MAX_ZERO_REFINEMENTS {
        let step = bessel_j0(x) / bessel_j1(x);
        x += step;
        if step.abs() <= f64::EPSILON * x {
            break;
        }
    }
    x
}

/// Ascending series `Σ (-1)^k (x/2)^(2k+ν) / (k! (k+ν)!)` for `ν ∈ {0, 1}`.
fn ascending_series(order: u8, x: f64) -> f64 {
    let half = 0.5 * x;
    let nu = f64::from(order);
    let mut term = if order == 0 { 1.0 } else { half };
    let mut sum = term;

    for k in 1..=MAX_SERIES_TERMS {
        #[allow(clippy::cast_precision_loss)]
        let k = k as f64;
        term *= -half * half / (k * (k + nu));
        sum += term;
        if term.abs() <= 1e-17 * sum.abs() {
            break;
        }
    }
    sum
}

/// Miller's backward recurrence for `(J0(x), J1(x))`, `x > 0`.
///
/// Runs `f_{k-1} = (2k/x)·f_k − f_{k+1}` down from an order well above `x`
/// and normalizes with `J0 + 2·(J2 + J4 + …) = 1`.
fn backward_recurrence(x: f64) -> (f64, f64) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let start = 2 * ((x + 2.0 * (40.0 * x).sqrt() + 20.0) / 2.0) as usize;

    let mut above = 0.0;
    let mut current = 1e-30;
    let mut norm = 0.0;
    let mut j1 = 0.0;

    for k in (1..=start).rev() {
        #[allow(clippy::cast_precision_loss)]
        let below = 2.0 * k as f64 / x * current - above;
        above = current;
        current = below;

        if current.abs() > RECURRENCE_RESCALE {
            current /= RECURRENCE_RESCALE;
            above /= RECURRENCE_RESCALE;
            norm /= RECURRENCE_RESCALE;
            j1 /= RECURRENCE_RESCALE;
        }

        // `current` now holds order k − 1.
        let order = k - 1;
        if order == 1 {
            j1 = current;
        }
        if order > 0 && order % 2 == 0 {
            norm += 2.0 * current;
        }
    }
    norm += current;

    (current / norm, j1 / norm)
}

/// Hankel's large-argument expansion
/// `Jν(x) = sqrt(2/(πx)) (P cos ω − Q sin ω)`, `ω = x − νπ/2 − π/4`.
///
/// The `P` and `Q` series are summed until their terms stop shrinking.
fn hankel_asymptotic(order: u8, x: f64) -> f64 {
    let mu = 4.0 * f64::from(order).powi(2);
    let mut p = 1.0;
    let mut q = 0.0;
    let mut term = 1.0_f64;
    let mut previous = f64::INFINITY;

    for k in 1..=MAX_SERIES_TERMS {
        #[allow(clippy::cast_precision_loss)]
        let kf = k as f64;
        let odd = 2.0 * kf - 1.0;
        let next = term * (mu - odd * odd) / (kf * 8.0 * x);
        if next.abs() >= previous {
            break;
        }
        term = next;
        previous = term.abs();

        // a_k alternates in sign within each of P (even k) and Q (odd k).
        let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
        if k % 2 == 1 {
            q += sign * term;
        } else {
            p += sign * term;
        }

        if previous < 1e-17 {
            break;
        }
    }

    let omega = x - f64::from(order) * FRAC_PI_2 - FRAC_PI_4;
    (2.0 / (PI * x)).sqrt() * (p * omega.cos() - q * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // Reference values from Abramowitz & Stegun, Table 9.1.
    #[test]
    fn tabulated_values() {
        let cases = [
            (0.0, 1.0, 0.0),
            (1.0, 0.765_197_686_557_966_6, 0.440_050_585_744_933_5),
            (2.5, -0.048_383_776_468_197_8, 0.497_094_102_464_274_5),
            (5.0, -0.177_596_771_314_338_3, -0.327_579_137_591_465_2),
            (10.0, -0.245_935_764_451_348_3, 0.043_472_746_168_861_4),
            (15.0, -0.014_224_472_826_780_8, 0.205_104_038_613_522_7),
            (30.0, -0.086_367_983_581_040_2, -0.118_751_062_616_623),
        ];

        for (x, j0, j1) in cases {
            assert_relative_eq!(bessel_j0(x), j0, epsilon = 1e-14);
            assert_relative_eq!(bessel_j1(x), j1, epsilon = 1e-14);
        }
    }

    #[test]
    fn accurate_between_series_and_asymptotics() {
        let cases = [
            (11.9, 0.025_049_441_699_589_645, -0.228_983_249_661_924_04),
            (12.0, 0.047_689_310_796_833_535, -0.223_447_104_490_627_6),
            (12.1, 0.069_666_773_606_807_31, -0.215_748_973_376_924_8),
            (50.0, 0.055_812_327_669_251_816, -0.097_511_828_125_175_14),
        ];

        for (x, j0, j1) in cases {
            assert_relative_eq!(bessel_j0(x), j0, epsilon = 1e-14);
            assert_relative_eq!(bessel_j1(x), j1, epsilon = 1e-14);
        }
    }

    #[test]
    fn continuous_across_method_switches() {
        for limit in [SERIES_LIMIT, ASYMPTOTIC_LIMIT] {
            let below = limit - 1e-13;
            assert_relative_eq!(bessel_j0(below), bessel_j0(limit), epsilon = 1e-13);
            assert_relative_eq!(bessel_j1(below), bessel_j1(limit), epsilon = 1e-13);
        }
    }

    #[test]
    fn parity() {
        assert_relative_eq!(bessel_j0(-3.2), bessel_j0(3.2));
        assert_relative_eq!(bessel_j1(-3.2), -bessel_j1(3.2));
    }

    #[test]
    fn zeros_of_j0() {
        let tabulated = [
            2.404_825_557_695_773,
            5.520_078_110_286_311,
            8.653_727_912_911_013,
            11.791_534_439_014_281,
            14.930_917_708_487_787,
        ];

        assert_eq!(bessel_j0_zero(0), 0.0);
        for (s, &zero) in tabulated.iter().enumerate() {
            assert_relative_eq!(bessel_j0_zero(s + 1), zero, epsilon = 1e-13);
        }
    }

    #[test]
    fn zeros_are_increasing_far_out() {
        let zeros: Vec<f64> = (1..=60).map(bessel_j0_zero).collect();
        for pair in zeros.windows(2) {
            assert!(pair[1] > pair[0]);
            // Successive zeros approach a spacing of π.
            assert!((pair[1] - pair[0] - PI).abs() < 0.1);
        }
        for &zero in &zeros {
            assert!(bessel_j0(zero).abs() < 1e-14);
        }
    }
}
