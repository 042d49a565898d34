use crate::*;

#[test]
fn test_magnitude_unit_axes() {
    assert!(approx_eq(Vector::new(0.0, 0.0, 1.0).magnitude(), 1.0, 1e-6));
    assert!(approx_eq(Vector::new(3.0, 4.0, 0.0).magnitude(), 5.0, 1e-6));
}

#[test]
fn test_angle_to_itself_is_zero() {
    let v = Vector::new(0.02, -0.01, 0.98);
    assert_eq!(v.angle_to(&v), 0.0);
}

#[test]
fn test_angle_to_orthogonal_vectors() {
    let v1 = Vector { x: 1.0, y: 0.0, z: 0.0 };
    let v2 = Vector { x: 0.0, y: 0.0, z: 2.0 };
    assert!(approx_eq(v1.angle_to(&v2), 90.0, 1e-3));
}

#[test]
fn test_angle_to_opposite_vectors() {
    let v1 = Vector { x: 0.0, y: 0.0, z: 1.0 };
    let v2 = Vector { x: 0.0, y: 0.0, z: -1.0 };
    assert!(approx_eq(v1.angle_to(&v2), 180.0, 1e-2));
}

#[test]
fn test_angle_to_zero_vector() {
    let v = Vector::new(0.0, 0.0, 1.0);
    assert_eq!(v.angle_to(&Vector::zero()), 0.0);
}

#[test]
fn test_sum_and_scale() {
    let samples = [
        Vector::new(1.0, 2.0, 3.0),
        Vector::new(3.0, 2.0, 1.0),
    ];
    let mean = samples.iter().copied().sum::<Vector>() / samples.len() as f32;
    assert!(mean.approx_eq(&Vector::new(2.0, 2.0, 2.0), 1e-6));
    assert!((mean * 0.5).approx_eq(&Vector::new(1.0, 1.0, 1.0), 1e-6));
}
