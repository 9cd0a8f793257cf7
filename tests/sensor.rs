use std::collections::VecDeque;

use fracture_analysis_toolbox::fracture::sensor::{
    RandomSource, SensorSimulator, FORCE_MAX_N, FORCE_MIN_N, HARDNESS_JITTER,
};
use fracture_analysis_toolbox::material_db::MaterialCatalog;

/// 호출 순서대로 미리 정한 값을 돌려주는 난수원.
struct ScriptedSource {
    values: VecDeque<f64>,
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self, low: f64, _high: f64) -> f64 {
        self.values.pop_front().unwrap_or(low)
    }
}

fn scripted(values: &[f64]) -> SensorSimulator {
    SensorSimulator::new(Box::new(ScriptedSource {
        values: values.iter().copied().collect(),
    }))
}

#[test]
fn force_stays_in_range_and_is_not_constant() {
    let mut sensor = SensorSimulator::with_thread_rng();
    let samples: Vec<f64> = (0..1000).map(|_| sensor.read_force()).collect();
    for s in &samples {
        assert!((FORCE_MIN_N..=FORCE_MAX_N).contains(s), "force={s}");
    }
    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(max > min, "1000 draws came out constant: {min}");
}

#[test]
fn hardness_stays_within_jitter_band() {
    let catalog = MaterialCatalog::builtin();
    let steel = *catalog.find("steel").expect("steel");
    let mut sensor = SensorSimulator::with_thread_rng();
    for _ in 0..500 {
        let h = sensor.read_hardness(&steel);
        assert!(
            (steel.baseline_hardness - HARDNESS_JITTER..=steel.baseline_hardness + HARDNESS_JITTER)
                .contains(&h),
            "hardness={h}"
        );
    }
}

#[test]
fn each_call_draws_fresh_values() {
    let mut sensor = scripted(&[1.0, 2.0, 3.0]);
    assert_eq!(sensor.read_force(), 1.0);
    assert_eq!(sensor.read_force(), 2.0);
    assert_eq!(sensor.read_force(), 3.0);
}

#[test]
fn hardness_is_baseline_plus_jitter() {
    let catalog = MaterialCatalog::builtin();
    let steel = *catalog.find("steel").expect("steel");
    let mut sensor = scripted(&[7.5]);
    assert_eq!(sensor.read_hardness(&steel), 157.5);
}
