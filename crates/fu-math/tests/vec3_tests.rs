// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use core::f64::consts::{FRAC_PI_2, PI};
use fu_math::{MathError, Vec3};

const EPS: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= EPS, "expected {b}, got {a} (diff {diff})");
}

fn approx_eq3(a: Vec3<f64>, b: Vec3<f64>) {
    approx_eq(a.x, b.x);
    approx_eq(a.y, b.y);
    approx_eq(a.z, b.z);
}

#[test]
fn cross_of_unit_axes() {
    let x = Vec3::new(1, 0, 0);
    let y = Vec3::new(0, 1, 0);
    assert_eq!(x.cross(y), Vec3::new(0, 0, 1));
    assert_eq!(y.cross(x), Vec3::new(0, 0, -1));
    assert_eq!(
        Vec3::new(1.0, 2.0, 3.0).cross(Vec3::new(4.0, 5.0, 6.0)),
        Vec3::new(-3.0, 6.0, -3.0)
    );
}

#[test]
fn sum_and_average_of_three() {
    let items = vec![
        Vec3::new(1.0_f64, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(2.0, 2.0, 2.0),
    ];
    assert_eq!(items.iter().sum::<Vec3<f64>>(), Vec3::new(4.0, 4.0, 4.0));
    let pair = [Vec3::new(1.0_f64, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0)];
    assert_eq!(Vec3::average(pair), Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn sum_and_average_of_mirrored_pair() {
    let items = [Vec3::new(1.0_f64, 2.0, 3.0), Vec3::new(3.0, 2.0, 1.0)];
    assert_eq!(items.iter().sum::<Vec3<f64>>(), Vec3::new(4.0, 4.0, 4.0));
    assert_eq!(Vec3::average(items), Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn average_of_nothing_is_nan_for_floats() {
    let avg = Vec3::<f64>::average(Vec::new());
    assert!(avg.x.is_nan() && avg.y.is_nan() && avg.z.is_nan());
}

#[test]
fn index_three_is_out_of_range() {
    let v = Vec3::new(1, 2, 3);
    assert_eq!(v.get(2), Ok(3));
    let err = v.get(3).unwrap_err();
    assert_eq!(err, MathError::IndexOutOfRange { index: 3, max: 2 });
    assert_eq!(err.to_string(), "index 3 out of range [0, 2]");
}

#[test]
fn direction_constants() {
    assert_eq!(Vec3::<i32>::right(), Vec3::new(1, 0, 0));
    assert_eq!(Vec3::<i32>::left(), Vec3::new(-1, 0, 0));
    assert_eq!(Vec3::<i32>::up(), Vec3::new(0, 1, 0));
    assert_eq!(Vec3::<i32>::down(), Vec3::new(0, -1, 0));
    assert_eq!(Vec3::<i32>::back(), Vec3::new(0, 0, 1));
    assert_eq!(Vec3::<i32>::forward(), Vec3::new(0, 0, -1));
    assert_eq!(Vec3::<i32>::DIM, 3);
}

#[test]
fn angle_between_axes_is_unsigned() {
    let x = Vec3::new(1.0_f64, 0.0, 0.0);
    let y = Vec3::new(0.0_f64, 1.0, 0.0);
    approx_eq(x.angle_to(y), FRAC_PI_2);
    approx_eq(y.angle_to(x), FRAC_PI_2);
    approx_eq(x.angle_to(-x), PI);
}

#[test]
fn spherical_poles_and_equator() {
    approx_eq3(Vec3::from_spherical(0.0, 1.234), Vec3::new(0.0, 0.0, 1.0));
    approx_eq3(Vec3::from_spherical(FRAC_PI_2, 0.0), Vec3::new(1.0, 0.0, 0.0));
    approx_eq3(
        Vec3::from_spherical_radius(FRAC_PI_2, FRAC_PI_2, 2.0),
        Vec3::new(0.0, 2.0, 0.0),
    );
    approx_eq3(
        Vec3::from_cylindrical(0.0, 3.0, -1.0),
        Vec3::new(3.0, 0.0, -1.0),
    );
}

#[test]
fn reference_up_switches_near_the_poles() {
    assert_eq!(Vec3::new(1.0_f64, 0.0, 0.0).reference_up(), Vec3::up());
    assert_eq!(Vec3::new(0.0_f64, 1.0, 0.0).reference_up(), Vec3::forward());
    assert_eq!(Vec3::new(0.0_f64, -1.0, 0.0).reference_up(), Vec3::forward());
}

#[test]
fn orthonormal_basis_is_orthonormal() {
    for normal in [
        Vec3::new(1.0_f64, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(1.0, 2.0, 3.0).normalize(),
    ] {
        let basis = normal.orthonormal_basis();
        approx_eq(basis.tangent.length(), 1.0);
        approx_eq(basis.bitangent.length(), 1.0);
        approx_eq(basis.tangent.dot(basis.bitangent), 0.0);
        approx_eq(basis.tangent.dot(normal), 0.0);
        approx_eq(basis.bitangent.dot(normal), 0.0);
    }
}

#[test]
fn azimuth_is_measured_in_the_basis() {
    let normal = Vec3::new(0.0_f64, 0.0, 1.0);
    let basis = normal.orthonormal_basis();
    let along_tangent = normal + basis.tangent;
    let along_bitangent = normal + basis.bitangent;
    approx_eq(normal.azimuth_to(along_tangent, &basis), 0.0);
    approx_eq(normal.azimuth_to(along_bitangent, &basis), FRAC_PI_2);
    approx_eq(normal.azimuth_to_local(along_bitangent), FRAC_PI_2);
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = Vec3::new(0.1_f64, 0.2, 0.3);
    let b = Vec3::new(-7.0_f64, 11.5, 1e6);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
}

#[test]
fn min_max_abs_are_componentwise() {
    let a = Vec3::new(-1, 5, 3);
    let b = Vec3::new(2, -4, 3);
    assert_eq!(a.min(b), Vec3::new(-1, -4, 3));
    assert_eq!(a.max(b), Vec3::new(2, 5, 3));
    assert_eq!(a.abs(), Vec3::new(1, 5, 3));
}

#[test]
fn display_is_a_parenthesised_tuple() {
    assert_eq!(Vec3::new(1, -2, 3).to_string(), "(1, -2, 3)");
}

#[test]
fn integer_vectors_scale_from_either_side() {
    let v = Vec3::new(1_i64, -2, 3);
    assert_eq!(v * 2, Vec3::new(2, -4, 6));
    assert_eq!(2_i64 * v, Vec3::new(2, -4, 6));
    assert_eq!(v.dot(v), 14);
}

#[test]
fn widening_is_lossless() {
    let v = Vec3::new(0.5_f32, -0.25, 3.0);
    let wide: Vec3<f64> = v.into();
    assert_eq!(wide, Vec3::new(0.5, -0.25, 3.0));
    assert_eq!(wide.narrow(), v);
}
