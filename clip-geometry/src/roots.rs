// BSL 1.0 License

//! Real roots of low-degree polynomials, restricted to the open unit interval. Bezier curves are
//! parameterized over `[0, 1]`, so the endpoints and anything outside of them are never interesting.

use crate::util::{approx_eq, in_unit_interval};
use core::f64::consts::PI;
use ordered_float::OrderedFloat;
use tinyvec::ArrayVec;

#[cfg(not(test))]
use num_traits::Float;

/// Coefficients with a magnitude below this are treated as zero.
pub const ROOT_EPSILON: f64 = 1e-10;

/// Roots closer together than this are considered the same root.
const DUPLICATE_EPSILON: f64 = 1e-9;

/// Newton iterations used to polish the closed-form cubic roots.
const POLISH_ITERATIONS: usize = 2;

/// A sorted set of at most three roots, each strictly between zero and one.
pub type Roots = ArrayVec<[f64; 3]>;

/// Find the roots of `a*t^2 + b*t + c` that lie in `(0, 1)`.
///
/// When `a` is negligible this degrades into the linear equation `b*t + c`. Complex roots are discarded.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    let mut roots = Roots::new();

    if a.abs() < ROOT_EPSILON {
        if b.abs() >= ROOT_EPSILON {
            push_root(&mut roots, -c / b);
        }
        return roots;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return roots;
    }

    // avoid the cancellation in -b +/- sqrt(d) by computing the larger-magnitude root first
    let sqrt_d = discriminant.sqrt();
    let q = if b < 0.0 {
        -0.5 * (b - sqrt_d)
    } else {
        -0.5 * (b + sqrt_d)
    };

    push_root(&mut roots, q / a);
    if q.abs() >= ROOT_EPSILON {
        push_root(&mut roots, c / q);
    }

    sort_roots(&mut roots);
    roots
}

/// Find the roots of `a*t^3 + b*t^2 + c*t + d` that lie in `(0, 1)`.
///
/// When `a` is negligible this is handed off to [`solve_quadratic`].
#[must_use]
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Roots {
    if a.abs() < ROOT_EPSILON {
        return solve_quadratic(b, c, d);
    }

    // normalize into t^3 + A*t^2 + B*t + C, then substitute t = x - A/3 to get x^3 + p*x + q
    let (na, nb, nc) = (b / a, c / a, d / a);
    let shift = na / 3.0;
    let p = nb - na * na / 3.0;
    let q = 2.0 * na * na * na / 27.0 - na * nb / 3.0 + nc;

    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let discriminant = half_q * half_q + third_p * third_p * third_p;

    let mut candidates = Roots::new();

    if approx_eq(discriminant, 0.0, ROOT_EPSILON) {
        if approx_eq(q, 0.0, ROOT_EPSILON) {
            // triple root
            candidates.push(-shift);
        } else {
            let u = (-half_q).cbrt();
            candidates.push(2.0 * u - shift);
            candidates.push(-u - shift);
        }
    } else if discriminant > 0.0 {
        // one real root: Cardano
        let sqrt_d = discriminant.sqrt();
        let u = (-half_q + sqrt_d).cbrt();
        let v = (-half_q - sqrt_d).cbrt();
        candidates.push(u + v - shift);
    } else {
        // three real roots: trigonometric form
        let r = (-third_p * third_p * third_p).sqrt();
        let cos_phi = (-half_q / r).max(-1.0).min(1.0);
        let phi = cos_phi.acos();
        let m = 2.0 * (-third_p).sqrt();
        for k in 0..3 {
            candidates.push(m * ((phi + 2.0 * PI * f64::from(k)) / 3.0).cos() - shift);
        }
    }

    let mut roots = Roots::new();
    for candidate in candidates {
        push_root(&mut roots, polish_cubic_root(a, b, c, d, candidate));
    }

    sort_roots(&mut roots);
    roots
}

/// Evaluate `a*t^3 + b*t^2 + c*t + d`.
#[inline]
#[must_use]
pub fn eval_cubic(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    ((a * t + b) * t + c) * t + d
}

/// Evaluate `a*t^2 + b*t + c`.
#[inline]
#[must_use]
pub fn eval_quadratic(a: f64, b: f64, c: f64, t: f64) -> f64 {
    (a * t + b) * t + c
}

/// Refine a root with a few Newton steps against the original, unnormalized polynomial. Normalizing by a
/// small leading coefficient loses precision, and this wins it back.
fn polish_cubic_root(a: f64, b: f64, c: f64, d: f64, mut t: f64) -> f64 {
    for _ in 0..POLISH_ITERATIONS {
        let value = eval_cubic(a, b, c, d, t);
        let slope = eval_quadratic(3.0 * a, 2.0 * b, c, t);
        if slope.abs() < ROOT_EPSILON {
            break;
        }

        let next = t - value / slope;
        if !next.is_finite() {
            break;
        }

        // only keep steps that actually improve the residual
        if eval_cubic(a, b, c, d, next).abs() > value.abs() {
            break;
        }
        t = next;
    }

    t
}

/// Add a root if it lies in the unit interval and is not a duplicate of one we already have.
fn push_root(roots: &mut Roots, t: f64) {
    if !in_unit_interval(t) {
        return;
    }

    if roots
        .iter()
        .any(|&existing| approx_eq(existing, t, DUPLICATE_EPSILON))
    {
        return;
    }

    roots.push(t);
}

fn sort_roots(roots: &mut Roots) {
    roots.sort_unstable_by_key(|&t| OrderedFloat(t));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_valid_quadratic(a: f64, b: f64, c: f64) {
        for &t in solve_quadratic(a, b, c).iter() {
            assert!(t > 0.0 && t < 1.0, "root {} out of range", t);
            assert!(
                eval_quadratic(a, b, c, t).abs() < 1e-2,
                "root {} of {}t^2 + {}t + {} does not vanish",
                t,
                a,
                b,
                c
            );
        }
    }

    fn assert_valid_cubic(a: f64, b: f64, c: f64, d: f64) {
        for &t in solve_cubic(a, b, c, d).iter() {
            assert!(t > 0.0 && t < 1.0, "root {} out of range", t);
            assert!(
                eval_cubic(a, b, c, d, t).abs() < 1e-2,
                "root {} of {}t^3 + {}t^2 + {}t + {} does not vanish",
                t,
                a,
                b,
                c,
                d
            );
        }
    }

    #[test]
    fn quadratic_two_roots() {
        // (t - 0.25)(t - 0.75) = t^2 - t + 0.1875
        let roots = solve_quadratic(1.0, -1.0, 0.1875);
        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(roots[1], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn quadratic_filters_out_of_range_roots() {
        // (t - 0.5)(t - 2) = t^2 - 2.5t + 1
        let roots = solve_quadratic(1.0, -2.5, 1.0);
        assert_eq!(roots.as_slice(), &[0.5]);

        // roots at exactly 0 and 1 are excluded
        assert!(solve_quadratic(1.0, -1.0, 0.0).is_empty());
    }

    #[test]
    fn quadratic_degenerates_to_linear() {
        let roots = solve_quadratic(1e-12, 2.0, -1.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 0.5, epsilon = 1e-9);

        // no t at all
        assert!(solve_quadratic(0.0, 0.0, 1.0).is_empty());
        assert!(solve_quadratic(0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn quadratic_complex_and_double_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());

        // (t - 0.5)^2 reports a single root
        let roots = solve_quadratic(1.0, -1.0, 0.25);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn cubic_three_roots() {
        // (t - 0.1)(t - 0.5)(t - 0.9)
        let (a, b, c, d) = (1.0, -1.5, 0.59, -0.045);
        let roots = solve_cubic(a, b, c, d);
        assert_eq!(roots.len(), 3);
        assert_abs_diff_eq!(roots[0], 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[2], 0.9, epsilon = 1e-9);
    }

    #[test]
    fn cubic_single_root() {
        // (t - 0.3)(t^2 + 1) = t^3 - 0.3t^2 + t - 0.3
        let roots = solve_cubic(1.0, -0.3, 1.0, -0.3);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 0.3, epsilon = 1e-9);
    }

    #[test]
    fn cubic_repeated_roots() {
        // (t - 0.5)^3
        let roots = solve_cubic(1.0, -1.5, 0.75, -0.125);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 0.5, epsilon = 1e-6);

        // (t - 0.2)^2 (t - 0.6) = t^3 - t^2 + 0.28t - 0.024
        let roots = solve_cubic(1.0, -1.0, 0.28, -0.024);
        assert!(!roots.is_empty());
        assert_valid_cubic(1.0, -1.0, 0.28, -0.024);
    }

    #[test]
    fn cubic_degenerates_to_quadratic() {
        let roots = solve_cubic(0.0, 1.0, -1.0, 0.1875);
        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(roots[1], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn roots_satisfy_their_polynomials() {
        let coefficients = [-100.0, -37.5, -3.0, -1.0, -0.25, 0.0, 0.1, 0.5, 1.0, 2.0, 7.0, 64.0];

        for &a in coefficients.iter() {
            for &b in coefficients.iter() {
                for &c in coefficients.iter() {
                    assert_valid_quadratic(a, b, c);
                    for &d in coefficients.iter() {
                        assert_valid_cubic(a, b, c, d);
                    }
                }
            }
        }
    }

    #[test]
    fn bezier_style_coefficients() {
        // X(t) - 50 for a cubic with control x coordinates -50, 150, -50, 150
        let (p0, p1, p2, p3) = (-50.0, 150.0, -50.0, 150.0);
        let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
        let b = 3.0 * p0 - 6.0 * p1 + 3.0 * p2;
        let c = -3.0 * p0 + 3.0 * p1;
        let d = p0 - 50.0;
        let roots = solve_cubic(a, b, c, d);
        assert_eq!(roots.len(), 3);
        assert_valid_cubic(a, b, c, d);
    }
}
