use std::collections::VecDeque;

use fracture_analysis_toolbox::config::Config;
use fracture_analysis_toolbox::fracture::analyzer::{
    classify, AnalyzerError, ConfigUpdate, FractureAnalyzer, Verdict,
};
use fracture_analysis_toolbox::fracture::calculator::{
    compute_stress_intensity, StressIntensityInput,
};
use fracture_analysis_toolbox::fracture::sensor::{RandomSource, SensorSimulator};
use fracture_analysis_toolbox::material_db::{CatalogError, MaterialCatalog, MaterialData};

/// 호출 순서대로 미리 정한 값을 돌려주는 난수원.
struct ScriptedSource {
    values: VecDeque<f64>,
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self, low: f64, _high: f64) -> f64 {
        self.values.pop_front().unwrap_or(low)
    }
}

/// 스텝마다 (하중, 경도 지터) 순서로 소비되는 수열을 만든다.
fn scripted_sensor(draws: &[f64]) -> SensorSimulator {
    SensorSimulator::new(Box::new(ScriptedSource {
        values: draws.iter().copied().collect(),
    }))
}

/// 지터 0으로 고정하고 하중 수열만 스크립트한 기본 해석기.
fn steel_analyzer(forces: &[f64]) -> FractureAnalyzer {
    let mut draws = Vec::new();
    for f in forces {
        draws.push(*f);
        draws.push(0.0);
    }
    FractureAnalyzer::new(
        MaterialCatalog::builtin(),
        scripted_sensor(&draws),
        &Config::default(),
    )
    .expect("analyzer")
}

#[test]
fn history_grows_by_one_entry_per_step_in_call_order() {
    let forces = [100.0, 200.0, 300.0, 400.0, 500.0];
    let mut analyzer = steel_analyzer(&forces);
    for (i, expected) in forces.iter().enumerate() {
        let res = analyzer.analyze();
        assert_eq!(analyzer.history().len(), i + 1);
        assert_eq!(res.force_n, *expected);
    }
    let recorded: Vec<f64> = analyzer.history().iter().map(|e| e.force_n).collect();
    assert_eq!(recorded, forces);
}

#[test]
fn steel_at_full_force_is_likely() {
    let mut analyzer = steel_analyzer(&[1000.0]);
    let res = analyzer.analyze();
    assert!((res.k_mpa_sqrt_m - 12455.5).abs() < 1.0, "k={}", res.k_mpa_sqrt_m);
    assert_eq!(res.toughness_mpa_sqrt_m, 50.0);
    assert_eq!(res.verdict, Verdict::FractureLikely);
}

#[test]
fn zero_force_is_unlikely() {
    let mut analyzer = steel_analyzer(&[0.0]);
    let res = analyzer.analyze();
    assert_eq!(res.k_mpa_sqrt_m, 0.0);
    assert_eq!(res.verdict, Verdict::FractureUnlikely);
}

#[test]
fn verdict_is_likely_at_exact_threshold() {
    // 같은 입력으로 미리 계산한 K를 그대로 파괴인성으로 써서 동률을 만든다
    let cfg = Config {
        material: "testium".to_string(),
        ..Config::default()
    };
    let k = compute_stress_intensity(StressIntensityInput {
        force_n: 500.0,
        area_m2: cfg.area_m2,
        crack_length_m: cfg.crack_length_m,
        geometric_factor: cfg.geometric_factor,
    })
    .expect("calc")
    .k_mpa_sqrt_m;
    let catalog = MaterialCatalog::from_entries(vec![MaterialData::new(
        "testium", "Testium", "테스트 전용", k, 100.0,
    )])
    .expect("catalog");
    let mut analyzer =
        FractureAnalyzer::new(catalog, scripted_sensor(&[500.0, 0.0]), &cfg).expect("analyzer");
    let res = analyzer.analyze();
    assert_eq!(res.k_mpa_sqrt_m.to_bits(), res.toughness_mpa_sqrt_m.to_bits());
    assert_eq!(res.verdict, Verdict::FractureLikely);
}

#[test]
fn classify_uses_inclusive_threshold() {
    assert_eq!(classify(50.0, 50.0), Verdict::FractureLikely);
    assert_eq!(classify(49.999, 50.0), Verdict::FractureUnlikely);
    assert_eq!(classify(50.001, 50.0), Verdict::FractureLikely);
}

#[test]
fn configure_with_unknown_material_preserves_state() {
    let mut analyzer = steel_analyzer(&[100.0, 200.0]);
    analyzer.analyze();
    analyzer.analyze();
    let err = analyzer
        .configure(ConfigUpdate {
            material: Some("unobtainium"),
            ..Default::default()
        })
        .expect_err("unknown material must fail");
    assert!(matches!(err, AnalyzerError::UnknownMaterial(_)));
    assert_eq!(analyzer.history().len(), 2);
    assert_eq!(analyzer.config().material.code, "steel");
}

#[test]
fn configure_rejects_nonpositive_geometry_atomically() {
    let mut analyzer = steel_analyzer(&[]);
    for update in [
        ConfigUpdate {
            area_m2: Some(-1.0),
            ..Default::default()
        },
        ConfigUpdate {
            crack_length_m: Some(0.0),
            ..Default::default()
        },
        ConfigUpdate {
            geometric_factor: Some(0.0),
            ..Default::default()
        },
        // 유효한 재료와 무효한 형상이 섞여도 아무것도 반영되지 않는다
        ConfigUpdate {
            material: Some("titanium"),
            area_m2: Some(f64::NAN),
            ..Default::default()
        },
    ] {
        let err = analyzer.configure(update).expect_err("must fail");
        assert!(matches!(err, AnalyzerError::Geometry(_)));
        assert_eq!(analyzer.config().material.code, "steel");
        assert!((analyzer.config().area_m2 - 0.0045).abs() < 1e-12);
        assert!((analyzer.config().crack_length_m - 0.001).abs() < 1e-12);
    }
}

#[test]
fn configure_between_steps_keeps_history() {
    let mut analyzer = steel_analyzer(&[100.0, 200.0, 300.0]);
    analyzer.analyze();
    analyzer.analyze();
    analyzer
        .configure(ConfigUpdate {
            area_m2: Some(0.002),
            ..Default::default()
        })
        .expect("configure");
    analyzer.analyze();
    assert_eq!(analyzer.history().len(), 3);
    assert!((analyzer.config().area_m2 - 0.002).abs() < 1e-12);
}

#[test]
fn hardness_is_recorded_but_does_not_change_the_verdict() {
    let mut low_jitter = FractureAnalyzer::new(
        MaterialCatalog::builtin(),
        scripted_sensor(&[500.0, -9.0]),
        &Config::default(),
    )
    .expect("analyzer");
    let mut high_jitter = FractureAnalyzer::new(
        MaterialCatalog::builtin(),
        scripted_sensor(&[500.0, 9.0]),
        &Config::default(),
    )
    .expect("analyzer");
    let a = low_jitter.analyze();
    let b = high_jitter.analyze();
    assert_eq!(a.hardness, 141.0);
    assert_eq!(b.hardness, 159.0);
    assert_eq!(a.k_mpa_sqrt_m.to_bits(), b.k_mpa_sqrt_m.to_bits());
    assert_eq!(a.verdict, b.verdict);
}

#[test]
fn analyzer_rejects_unknown_material_at_construction() {
    let cfg = Config {
        material: "plastic".to_string(),
        ..Config::default()
    };
    let err = FractureAnalyzer::new(MaterialCatalog::builtin(), scripted_sensor(&[]), &cfg)
        .err()
        .expect("construction must fail");
    assert!(matches!(err, AnalyzerError::UnknownMaterial(_)));
}

#[test]
fn catalog_rejects_nonpositive_properties() {
    let err = MaterialCatalog::from_entries(vec![MaterialData::new(
        "bogus", "Bogus", "", 0.0, 100.0,
    )])
    .expect_err("zero toughness must fail");
    assert!(matches!(err, CatalogError::NonPositiveProperty { .. }));
    assert!(matches!(
        MaterialCatalog::from_entries(Vec::new()),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn builtin_catalog_lookup_is_case_insensitive() {
    let catalog = MaterialCatalog::builtin();
    assert!(catalog.find("Steel").is_some());
    assert!(catalog.find("ALUMINUM").is_some());
    assert!(catalog.find("Titanium").is_some());
    assert!(catalog.find("unobtainium").is_none());
}
