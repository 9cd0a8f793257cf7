//! 파괴 해석 오케스트레이터: 센서 판독 → K 계산 → 판정 → 이력 누적.

use crate::config::Config;
use crate::fracture::calculator::{self, FractureCalcError, StressIntensityInput};
use crate::fracture::sensor::SensorSimulator;
use crate::material_db::{MaterialCatalog, MaterialData};

/// 해석기 구성/설정 단계에서 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AnalyzerError {
    /// 카탈로그에 등록되지 않은 재료 코드
    UnknownMaterial(String),
    /// 형상값 검증 실패
    Geometry(FractureCalcError),
}

impl std::fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerError::UnknownMaterial(code) => write!(f, "알 수 없는 재료: {code}"),
            AnalyzerError::Geometry(e) => write!(f, "형상 오류: {e}"),
        }
    }
}

impl std::error::Error for AnalyzerError {}

impl From<FractureCalcError> for AnalyzerError {
    fn from(value: FractureCalcError) -> Self {
        AnalyzerError::Geometry(value)
    }
}

/// 해석기 동작 설정. analyze()는 이 값을 읽기만 한다.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub material: MaterialData,
    /// 단면적 [m²]
    pub area_m2: f64,
    /// 균열 길이 [m]
    pub crack_length_m: f64,
    /// 형상계수 Y (무차원)
    pub geometric_factor: f64,
}

/// configure()에 넘기는 부분 갱신값. None 필드는 기존 값을 유지한다.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate<'a> {
    pub material: Option<&'a str>,
    pub area_m2: Option<f64>,
    pub crack_length_m: Option<f64>,
    pub geometric_factor: Option<f64>,
}

/// 파괴 가능성 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    FractureLikely,
    FractureUnlikely,
}

impl Verdict {
    pub fn is_likely(&self) -> bool {
        matches!(self, Verdict::FractureLikely)
    }
}

/// K가 파괴인성 이상이면 파괴 가능으로 판정한다(경계 동률 포함).
pub fn classify(k_mpa_sqrt_m: f64, toughness_mpa_sqrt_m: f64) -> Verdict {
    if k_mpa_sqrt_m >= toughness_mpa_sqrt_m {
        Verdict::FractureLikely
    } else {
        Verdict::FractureUnlikely
    }
}

/// 한 스텝의 해석 결과.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisResult {
    /// 하중 샘플 [N]
    pub force_n: f64,
    /// 경도 샘플. 기록용이며 판정에는 쓰지 않는다.
    pub hardness: f64,
    /// 공칭 응력 σ = F/A
    pub stress: f64,
    /// 응력확대계수 K [MPa·√m]
    pub k_mpa_sqrt_m: f64,
    /// 판정 기준 파괴인성 [MPa·√m]
    pub toughness_mpa_sqrt_m: f64,
    pub verdict: Verdict,
}

/// 이력 한 점: (하중, K). 시각화의 x축 순서 = 추가 순서.
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry {
    pub force_n: f64,
    pub k_mpa_sqrt_m: f64,
}

/// 파괴 해석기. 카탈로그/센서를 생성 시 주입받고 스텝마다 이력을 누적한다.
pub struct FractureAnalyzer {
    catalog: MaterialCatalog,
    sensor: SensorSimulator,
    config: AnalyzerConfig,
    history: Vec<HistoryEntry>,
}

impl FractureAnalyzer {
    /// 설정의 재료와 형상을 검증한 뒤 해석기를 만든다.
    pub fn new(
        catalog: MaterialCatalog,
        sensor: SensorSimulator,
        cfg: &Config,
    ) -> Result<Self, AnalyzerError> {
        let material = *catalog
            .find(&cfg.material)
            .ok_or_else(|| AnalyzerError::UnknownMaterial(cfg.material.clone()))?;
        let config = AnalyzerConfig {
            material,
            area_m2: cfg.area_m2,
            crack_length_m: cfg.crack_length_m,
            geometric_factor: cfg.geometric_factor,
        };
        validate_config(&config)?;
        Ok(Self {
            catalog,
            sensor,
            config,
            history: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// 설정을 부분 갱신한다. 모든 값을 검증한 뒤에만 반영하며, 실패 시
    /// 설정과 이력 모두 이전 상태 그대로 남는다.
    pub fn configure(&mut self, update: ConfigUpdate<'_>) -> Result<(), AnalyzerError> {
        let mut next = self.config.clone();
        if let Some(code) = update.material {
            next.material = *self
                .catalog
                .find(code)
                .ok_or_else(|| AnalyzerError::UnknownMaterial(code.to_string()))?;
        }
        if let Some(v) = update.area_m2 {
            next.area_m2 = v;
        }
        if let Some(v) = update.crack_length_m {
            next.crack_length_m = v;
        }
        if let Some(v) = update.geometric_factor {
            next.geometric_factor = v;
        }
        validate_config(&next)?;
        self.config = next;
        Ok(())
    }

    /// 시뮬레이션 한 스텝: 센서 두 번 읽기 → K 계산 → 판정 → 이력 한 건 추가.
    /// 형상은 생성/configure 시점에 검증되어 있으므로 실패하지 않는다.
    pub fn analyze(&mut self) -> AnalysisResult {
        let reading = self.sensor.read(&self.config.material);
        let calc = calculator::stress_intensity_unchecked(&StressIntensityInput {
            force_n: reading.force_n,
            area_m2: self.config.area_m2,
            crack_length_m: self.config.crack_length_m,
            geometric_factor: self.config.geometric_factor,
        });
        let toughness = self.config.material.fracture_toughness_mpa_sqrt_m;
        let verdict = classify(calc.k_mpa_sqrt_m, toughness);
        self.history.push(HistoryEntry {
            force_n: reading.force_n,
            k_mpa_sqrt_m: calc.k_mpa_sqrt_m,
        });
        AnalysisResult {
            force_n: reading.force_n,
            hardness: reading.hardness,
            stress: calc.stress,
            k_mpa_sqrt_m: calc.k_mpa_sqrt_m,
            toughness_mpa_sqrt_m: toughness,
            verdict,
        }
    }

    /// 추가 순서 그대로의 이력 뷰.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}

/// 형상값 공통 검증. 면적/균열길이/형상계수 모두 유한한 양수여야 한다.
fn validate_config(cfg: &AnalyzerConfig) -> Result<(), AnalyzerError> {
    for (field, value) in [
        ("area_m2", cfg.area_m2),
        ("crack_length_m", cfg.crack_length_m),
        ("geometric_factor", cfg.geometric_factor),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AnalyzerError::Geometry(FractureCalcError::InvalidGeometry {
                field,
                value,
            }));
        }
    }
    Ok(())
}
