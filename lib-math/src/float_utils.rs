
/// Clamps a cosine into `[-1, 1]` so rounding noise on nearly parallel vectors can never push
/// `acos` outside of its domain.
/// 
pub fn clamp_cosine(value: f32) -> f32 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(-1.0, 1.0)
}

/// Approximate equality check for two scalars with a given tolerance.
/// 
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    libm::fabsf(a - b) <= tol
}

/// Arithmetic mean of an accumulated sum, returns `None` for an empty batch instead of dividing
/// by zero.
/// 
pub fn mean(sum: f32, count: usize) -> Option<f32> {
    if count == 0 {
        return None;
    }
    Some(sum / count as f32)
}
