use crate::*;

#[test]
fn test_clamp_cosine_bounds() {
    assert_eq!(clamp_cosine(1.0000001), 1.0);
    assert_eq!(clamp_cosine(-1.5), -1.0);
    assert_eq!(clamp_cosine(0.25), 0.25);
    assert_eq!(clamp_cosine(f32::NAN), 1.0);
}

#[test]
fn test_mean_of_empty_batch() {
    assert_eq!(mean(10.0, 0), None);
    assert_eq!(mean(10.0, 4), Some(2.5));
}
