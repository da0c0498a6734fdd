use super::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use super::*;
use crate::error::SectionError;
use nalgebra::{vector, Rotation2, Vector2};
use proptest::prelude::*;

fn unit_square() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ]
}

fn l_shape() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 2.0],
        vector![0.0, 2.0],
    ]
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

#[test]
fn unit_square_reference_values() {
    let p = section_properties(&unit_square()).unwrap();
    assert_eq!(p.area, 1.0);
    assert!((p.centroid - vector![0.5, 0.5]).norm() < 1e-15);
    // about the origin, not the centroid
    assert!((p.inertia.ixx - 1.0 / 3.0).abs() < 1e-15);
    assert!((p.inertia.iyy - 1.0 / 3.0).abs() < 1e-15);
    assert!((p.inertia.ixy - 0.25).abs() < 1e-15);
    assert!((p.principal.i1 - (1.0 / 3.0 + 0.25)).abs() < 1e-15);
    assert!((p.principal.i2 - (1.0 / 3.0 - 0.25)).abs() < 1e-15);
    assert!((p.principal.theta + std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    let s = p.scalars();
    assert_eq!(s[0], p.area);
    assert_eq!(s[5], p.inertia.ixy);
    assert_eq!(s[8], p.principal.theta);
}

#[test]
fn clockwise_square_flips_area_sign() {
    let mut cw = unit_square();
    cw.reverse();
    let ring = Ring::new(&cw).unwrap();
    assert_eq!(area(&ring), -1.0);
    // centroid divides by the signed area, so it does not move
    let c = centroid(&ring, SectionCfg::default()).unwrap();
    assert!((c - vector![0.5, 0.5]).norm() < 1e-15);
    // moment sums carry the winding sign
    let i = inertia(&ring, SectionCfg::default()).unwrap();
    assert!((i.ixx + 1.0 / 3.0).abs() < 1e-15);
}

#[test]
fn rectangle_origin_and_centroidal_moments() {
    let (b, h) = (2.0, 3.0);
    let pts = vec![
        vector![0.0, 0.0],
        vector![b, 0.0],
        vector![b, h],
        vector![0.0, h],
    ];
    let ring = Ring::new(&pts).unwrap();
    let cfg = SectionCfg::default();
    let i0 = inertia(&ring, cfg).unwrap();
    assert!(close(i0.ixx, b * h.powi(3) / 3.0, 1e-14));
    assert!(close(i0.iyy, h * b.powi(3) / 3.0, 1e-14));
    assert!(close(i0.ixy, b * b * h * h / 4.0, 1e-14));

    let ic = centroidal_inertia(&ring, cfg).unwrap();
    assert!(close(ic.ixx, b * h.powi(3) / 12.0, 1e-14));
    assert!(close(ic.iyy, h * b.powi(3) / 12.0, 1e-14));
    assert!(ic.ixy.abs() < 1e-12);

    let props = section_properties(&pts).unwrap();
    assert_eq!(props.centroidal_inertia(), ic);
}

#[test]
fn l_shape_is_non_convex_but_exact() {
    let pts = l_shape();
    assert!((area_of(&pts).unwrap() - 3.0).abs() < 1e-15);
    let c = centroid_of(&pts).unwrap();
    assert!((c - vector![5.0 / 6.0, 5.0 / 6.0]).norm() < 1e-15);
    // ∫y² over [0,2]x[0,1] plus [0,1]x[1,2]: 2/3 + 7/3
    let i = inertia_of(&pts).unwrap();
    assert!(close(i.ixx, 3.0, 1e-14));
    assert!(close(i.iyy, 3.0, 1e-14));
}

#[test]
fn rotated_rectangle_recovers_angle() {
    let phi = 0.3;
    let rot = Rotation2::new(phi);
    let pts: Vec<_> = [(-0.5, -1.5), (0.5, -1.5), (0.5, 1.5), (-0.5, 1.5)]
        .iter()
        .map(|&(x, y)| rot * vector![x, y])
        .collect();
    let ring = Ring::new(&pts).unwrap();
    let pr = centroidal_inertia(&ring, SectionCfg::default())
        .unwrap()
        .principal();
    assert!((pr.theta - phi).abs() < 1e-12);
    assert!((pr.i1 - 27.0 / 12.0).abs() < 1e-12);
    assert!((pr.i2 - 3.0 / 12.0).abs() < 1e-12);
    let (major, minor) = pr.axes();
    assert!((major - rot * vector![1.0, 0.0]).norm() < 1e-12);
    assert!(major.dot(&minor).abs() < 1e-15);
}

#[test]
fn isotropic_tensor_has_zero_angle() {
    let pr = principal(2.5, 2.5, 0.0);
    assert_eq!(pr.theta, 0.0);
    assert_eq!(pr.i1, 2.5);
    assert_eq!(pr.i2, 2.5);
}

#[test]
fn angle_keeps_sign_convention() {
    // diff > 0, Ixy > 0 → negative rotation
    let pr = principal(3.0, 1.0, 1.0);
    assert!((pr.theta + std::f64::consts::FRAC_PI_8).abs() < 1e-15);
    // diff < 0, Ixy = 0 → atan2(-0, negative) = -π, halved
    let pr = principal(1.0, 3.0, 0.0);
    assert!((pr.theta.abs() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    assert_eq!(pr.i1, 3.0);
}

#[test]
fn collinear_points_are_degenerate() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    assert_eq!(area_of(&pts).unwrap(), 0.0);
    assert!(matches!(
        centroid_of(&pts),
        Err(SectionError::DegenerateArea { .. })
    ));
    assert!(matches!(
        inertia_of(&pts),
        Err(SectionError::DegenerateArea { .. })
    ));
    assert!(section_properties(&pts).is_err());
}

#[test]
fn near_collinear_respects_tolerance() {
    let pts = vec![vector![0.0, 0.0], vector![1e6, 0.0], vector![2e6, 1e-9]];
    assert!(matches!(
        section_properties(&pts),
        Err(SectionError::DegenerateArea { .. })
    ));
    let loose = SectionCfg { eps_area: 0.0 };
    assert!(section_properties_with(&pts, loose).is_ok());
}

#[test]
fn fewer_than_three_points_rejected() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
    assert_eq!(
        section_properties(&pts).unwrap_err(),
        SectionError::InvalidPolygon { vertices: 2 }
    );
    assert!(area_of(&pts).is_err());
}

#[test]
fn non_finite_input_propagates() {
    let pts = vec![vector![0.0, 0.0], vector![f64::NAN, 0.0], vector![0.0, 1.0]];
    let p = section_properties(&pts).unwrap();
    assert!(p.area.is_nan());
    assert!(p.principal.i1.is_nan());
}

#[test]
fn overflowing_area_propagates_as_infinity() {
    let s = 1e200;
    let pts = vec![
        vector![0.0, 0.0],
        vector![s, 0.0],
        vector![s, s],
        vector![0.0, s],
    ];
    let p = section_properties(&pts).unwrap();
    assert!(p.area.is_infinite() && p.area > 0.0);
    assert!(p.centroid.x.is_nan());
}

#[test]
fn negative_tolerance_still_rejects_zero_area() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    let cfg = SectionCfg { eps_area: -1.0 };
    assert_eq!(
        section_properties_with(&pts, cfg).unwrap_err(),
        SectionError::DegenerateArea { area: 0.0 }
    );
    // a proper polygon is unaffected
    assert!(section_properties_with(&unit_square(), cfg).is_ok());
}

/// Traced outline shipped with the demo: duplicated first vertex, clockwise.
const TRACED: &[(f64, f64)] = &[
    (0.8071752, 1.3929228),
    (0.8071752, 1.3929228),
    (0.8600110, 1.3809864),
    (0.8667849, 1.3579882),
    (0.8640753, 1.3254607),
    (0.8871063, 1.3025415),
    (0.9020088, 1.2673899),
    (0.9033635, 1.2430107),
    (0.8735587, 1.2388018),
    (0.8708492, 1.2184671),
    (0.8437538, 1.2210451),
    (0.8437538, 1.2413666),
    (0.8058204, 1.2533754),
    (0.7651775, 1.2545328),
    (0.7380822, 1.2489822),
    (0.7136964, 1.2231233),
    (0.7150511, 1.1838417),
    (0.7218250, 1.1527150),
    (0.6987940, 1.1471841),
    (0.6662796, 1.1172214),
    (0.6662796, 1.0901261),
    (0.6811820, 1.0874890),
    (0.7150511, 1.0686867),
    (0.7150511, 1.0375271),
    (0.6974392, 1.0198296),
    (0.6622153, 1.0196586),
    (0.6351200, 1.0357843),
    (0.6147985, 1.0343309),
    (0.6080247, 1.0519099),
    (0.5998961, 1.0654181),
    (0.5998961, 1.0830301),
    (0.6202176, 1.0939668),
    (0.6283462, 1.1224564),
    (0.6486676, 1.1401670),
    (0.6486676, 1.1930028),
    (0.6486676, 1.2092600),
    (0.6269914, 1.2294762),
    (0.6351200, 1.2620301),
    (0.6269914, 1.2863764),
    (0.6567962, 1.3068426),
    (0.6771177, 1.3394556),
    (0.6811820, 1.3584420),
    (0.7015035, 1.3666692),
    (0.7326631, 1.3600467),
    (0.7516298, 1.3574292),
    (0.7854989, 1.3616579),
];

#[test]
fn traced_outline_golden_values() {
    let pts: Vec<_> = TRACED.iter().map(|&(x, y)| vector![x, y]).collect();
    let got = section_properties(&pts).unwrap().scalars();
    let want = [
        -0.0450432104941651,
        0.7354473504763201,
        1.240181727833372,
        -0.06970477899991707,
        -0.024632903067737282,
        -0.04128519624540878,
        -0.00013336581529273944,
        -0.09420431625236161,
        1.0352277465824002,
    ];
    for (k, (g, w)) in got.iter().zip(want).enumerate() {
        assert!(close(*g, w, 1e-12), "scalar {k}: {g} vs {w}");
    }
}

#[test]
fn explicit_closure_gives_identical_results() {
    let open = l_shape();
    let mut closed = open.clone();
    closed.push(open[0]);
    assert_eq!(
        section_properties(&open).unwrap(),
        section_properties(&closed).unwrap()
    );
}

fn star(seed: u64, index: u64, center: Vector2<f64>) -> Vec<Vector2<f64>> {
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 4, max: 24 },
        center,
        ..StarCfg::default()
    };
    draw_star_polygon(cfg, ReplayToken { seed, index })
}

proptest! {
    #[test]
    fn prop_reversal_negates_area(seed in any::<u64>(), index in 0u64..1000) {
        let pts = star(seed, index, vector![0.3, -0.2]);
        let a = area_of(&pts).unwrap();
        let mut rev = pts.clone();
        rev.reverse();
        let b = area_of(&rev).unwrap();
        prop_assert!(a > 0.0);
        prop_assert!(close(a, -b, 1e-12));
    }

    #[test]
    fn prop_translation_invariance(
        seed in any::<u64>(),
        dx in -50.0..50.0f64,
        dy in -50.0..50.0f64,
    ) {
        let pts = star(seed, 0, Vector2::zeros());
        let d = vector![dx, dy];
        let moved: Vec<_> = pts.iter().map(|p| p + d).collect();
        let p0 = section_properties(&pts).unwrap();
        let p1 = section_properties(&moved).unwrap();
        prop_assert!(close(p0.area, p1.area, 1e-9));
        prop_assert!((p1.centroid - (p0.centroid + d)).norm() < 1e-8);
        let c0 = p0.centroidal_inertia();
        let c1 = p1.centroidal_inertia();
        prop_assert!((c0.ixx - c1.ixx).abs() < 1e-6);
        prop_assert!((c0.iyy - c1.iyy).abs() < 1e-6);
        prop_assert!((c0.ixy - c1.ixy).abs() < 1e-6);
    }

    #[test]
    fn prop_closure_idempotent(seed in any::<u64>(), index in 0u64..1000) {
        let open = star(seed, index, vector![1.0, 2.0]);
        let mut closed = open.clone();
        closed.push(open[0]);
        prop_assert_eq!(
            section_properties(&open).unwrap(),
            section_properties(&closed).unwrap()
        );
    }

    #[test]
    fn prop_centroidal_moments_non_negative(seed in any::<u64>(), index in 0u64..1000) {
        let pts = star(seed, index, vector![-4.0, 7.5]);
        let ring = Ring::new(&pts).unwrap();
        let ic = centroidal_inertia(&ring, SectionCfg::default()).unwrap();
        prop_assert!(ic.ixx > 0.0 && ic.iyy > 0.0);
        // Cauchy–Schwarz on the centroidal tensor
        prop_assert!(ic.ixy * ic.ixy <= ic.ixx * ic.iyy * (1.0 + 1e-9));
    }

    #[test]
    fn prop_principal_ordering_and_trace(
        ixx in -1e3..1e3f64,
        iyy in -1e3..1e3f64,
        ixy in -1e3..1e3f64,
    ) {
        let pr = Inertia::new(ixx, iyy, ixy).principal();
        prop_assert!(pr.i1 >= pr.i2);
        prop_assert!(close(pr.i1 + pr.i2, Inertia::new(ixx, iyy, ixy).trace(), 1e-12));
        prop_assert!(pr.theta > -std::f64::consts::FRAC_PI_2 - 1e-15);
        prop_assert!(pr.theta <= std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn prop_principal_diagonalizes(
        ixx in 0.1..1e3f64,
        iyy in 0.1..1e3f64,
        ixy in -1e2..1e2f64,
    ) {
        // rotating the tensor by -theta removes the product term
        let pr = principal(ixx, iyy, ixy);
        let (s, c) = pr.theta.sin_cos();
        let rotated_ixy = (ixx - iyy) * s * c + ixy * (c * c - s * s);
        prop_assert!(rotated_ixy.abs() < 1e-9 * (1.0 + ixx + iyy));
    }
}
