use fracture_analysis_toolbox::fracture::calculator::{
    compute_stress_intensity, FractureCalcError, StressIntensityInput,
};

fn steel_rig(force_n: f64) -> StressIntensityInput {
    StressIntensityInput {
        force_n,
        area_m2: 0.0045,
        crack_length_m: 0.001,
        geometric_factor: 1.0,
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = compute_stress_intensity(steel_rig(731.25)).expect("calc");
    let b = compute_stress_intensity(steel_rig(731.25)).expect("calc");
    assert_eq!(a.k_mpa_sqrt_m.to_bits(), b.k_mpa_sqrt_m.to_bits());
    assert_eq!(a.stress.to_bits(), b.stress.to_bits());
}

#[test]
fn zero_crack_length_yields_zero_k() {
    let mut input = steel_rig(1000.0);
    input.crack_length_m = 0.0;
    let res = compute_stress_intensity(input).expect("calc");
    assert_eq!(res.k_mpa_sqrt_m, 0.0);
}

#[test]
fn k_is_monotone_in_force() {
    let mut prev = f64::NEG_INFINITY;
    for step in 0..=20 {
        let force = step as f64 * 50.0;
        let res = compute_stress_intensity(steel_rig(force)).expect("calc");
        assert!(
            res.k_mpa_sqrt_m >= prev,
            "force={force} k={} prev={prev}",
            res.k_mpa_sqrt_m
        );
        prev = res.k_mpa_sqrt_m;
    }
}

#[test]
fn zero_geometric_factor_yields_zero_k() {
    let mut input = steel_rig(1000.0);
    input.geometric_factor = 0.0;
    let res = compute_stress_intensity(input).expect("calc");
    assert_eq!(res.k_mpa_sqrt_m, 0.0);
}

#[test]
fn nonpositive_area_is_rejected() {
    for area in [0.0, -0.0045, f64::NAN] {
        let mut input = steel_rig(100.0);
        input.area_m2 = area;
        let err = compute_stress_intensity(input).expect_err("area must be rejected");
        assert!(matches!(
            err,
            FractureCalcError::InvalidGeometry {
                field: "area_m2",
                ..
            }
        ));
    }
}

#[test]
fn negative_crack_length_is_rejected() {
    let mut input = steel_rig(100.0);
    input.crack_length_m = -0.001;
    let err = compute_stress_intensity(input).expect_err("crack length must be rejected");
    assert!(matches!(
        err,
        FractureCalcError::InvalidGeometry {
            field: "crack_length_m",
            ..
        }
    ));
}

#[test]
fn steel_reference_case() {
    // F=1000 N, A=0.0045 m², a=0.001 m, Y=1 → σ≈222222.2, K≈12455.5
    let res = compute_stress_intensity(steel_rig(1000.0)).expect("calc");
    assert!(
        (res.stress - 222222.222).abs() < 0.1,
        "stress={}",
        res.stress
    );
    assert!(
        (res.k_mpa_sqrt_m - 12455.5).abs() < 1.0,
        "k={}",
        res.k_mpa_sqrt_m
    );
}
