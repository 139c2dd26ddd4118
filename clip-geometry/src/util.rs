// BSL 1.0 License

use num_traits::Float;

pub(crate) fn approx_eq<Num: Float>(a: Num, b: Num, epsilon: Num) -> bool {
    (a - b).abs() < epsilon
}

/// Whether `t` lies strictly inside of the unit interval.
pub(crate) fn in_unit_interval(t: f64) -> bool {
    t.is_finite() && t > 0.0 && t < 1.0
}
