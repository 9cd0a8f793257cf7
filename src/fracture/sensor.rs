//! 합성 센서(하중 센서, 경도계) 시뮬레이터.

use rand::Rng;

use crate::material_db::MaterialData;

/// 하중 센서 측정 범위 하한 [N]
pub const FORCE_MIN_N: f64 = 0.0;
/// 하중 센서 측정 범위 상한 [N]
pub const FORCE_MAX_N: f64 = 1000.0;
/// 경도계 지터 폭(기준 경도 ± 이 값)
pub const HARDNESS_JITTER: f64 = 10.0;

/// 난수원 추상화. 테스트에서 고정 수열을 주입할 수 있게 한다.
pub trait RandomSource {
    /// [low, high] 구간 균등분포 실수를 하나 뽑는다.
    fn next_uniform(&mut self, low: f64, high: f64) -> f64;
}

/// rand thread RNG 기반 기본 난수원.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// 한 스텝의 센서 판독값.
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    /// 하중 [N]
    pub force_n: f64,
    /// 경도 샘플
    pub hardness: f64,
}

/// 합성 센서 시뮬레이터. 호출마다 독립적으로 새 값을 샘플링한다.
pub struct SensorSimulator {
    source: Box<dyn RandomSource>,
}

impl SensorSimulator {
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// 기본 난수원(thread RNG)으로 만든다.
    pub fn with_thread_rng() -> Self {
        Self::new(Box::new(ThreadRngSource))
    }

    /// 하중 센서를 읽는다. [0, 1000] N 균등분포.
    pub fn read_force(&mut self) -> f64 {
        self.source.next_uniform(FORCE_MIN_N, FORCE_MAX_N)
    }

    /// 경도계를 읽는다. 재료 기준 경도에 ±10 균등 지터를 더한다.
    pub fn read_hardness(&mut self, material: &MaterialData) -> f64 {
        material.baseline_hardness + self.source.next_uniform(-HARDNESS_JITTER, HARDNESS_JITTER)
    }

    /// 하중과 경도를 한 번씩 읽는다.
    pub fn read(&mut self, material: &MaterialData) -> Reading {
        Reading {
            force_n: self.read_force(),
            hardness: self.read_hardness(material),
        }
    }
}
