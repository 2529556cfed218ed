//! Hit-side entropy of a single event
//!
//! Measures the information a fact contributes when it turns out true.
//! A miss contributes nothing, so this is not the full binary entropy
//! `-p·log₂p - (1-p)·log₂(1-p)`.

/// Weight for learning a letter's multiset membership
pub const INCLUSION_WEIGHT: f64 = 1.0;

/// Weight for learning a letter's exact placement
pub const POSITION_WEIGHT: f64 = 2.0;

/// Expected information of an event with probability `p`
///
/// H(p) = p · log₂(1/p)
///
/// # Properties
/// - Returns 0.0 for `p <= 0`, `p >= 1`, and NaN (certain facts carry no information)
/// - Peaks at `p = 1/e` with value `log₂(e)/e ≈ 0.531`
/// - Never negative
///
/// # Examples
/// ```
/// use longwordle_ranker::scoring::entropy;
///
/// assert_eq!(entropy(0.0), 0.0);
/// assert_eq!(entropy(1.0), 0.0);
/// assert!((entropy(0.5) - 0.5).abs() < 1e-12);
/// assert!((entropy(0.25) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn entropy(p: f64) -> f64 {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    p * (1.0 / p).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_saturate_to_zero() {
        for p in [-1.0, 0.0, 1.0, 1.5, f64::NAN, f64::INFINITY] {
            assert!(entropy(p).abs() < f64::EPSILON, "p = {p}");
        }
    }

    #[test]
    fn half_is_half_a_bit() {
        assert!((entropy(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn maximum_is_interior() {
        let peak = entropy(1.0 / std::f64::consts::E);
        assert!((peak - std::f64::consts::LOG2_E / std::f64::consts::E).abs() < 1e-12);

        for step in 1..1000 {
            let p = f64::from(step) / 1000.0;
            let h = entropy(p);
            assert!(h >= 0.0);
            assert!(h <= peak + 1e-12, "p = {p}");
        }
    }

    #[test]
    fn not_full_binary_entropy() {
        // Full binary entropy would be symmetric around 0.5
        assert!((entropy(0.1) - entropy(0.9)).abs() > 0.1);
    }

    #[test]
    fn position_weighs_double() {
        assert!((POSITION_WEIGHT / INCLUSION_WEIGHT - 2.0).abs() < f64::EPSILON);
    }
}
