//! 선형탄성 파괴역학 단순식(K = Y·σ·√(a·π))으로 응력확대계수를 계산한다.

/// 응력확대계수 계산 오류를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractureCalcError {
    /// 형상 입력이 물리적으로 무의미한 경우
    InvalidGeometry { field: &'static str, value: f64 },
}

impl std::fmt::Display for FractureCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FractureCalcError::InvalidGeometry { field, value } => {
                write!(f, "잘못된 형상값: {field} = {value}")
            }
        }
    }
}

impl std::error::Error for FractureCalcError {}

/// 응력확대계수 계산 입력값.
#[derive(Debug, Clone)]
pub struct StressIntensityInput {
    /// 인가 하중 [N]
    pub force_n: f64,
    /// 단면적 [m²]
    pub area_m2: f64,
    /// 균열 길이(반길이) [m]
    pub crack_length_m: f64,
    /// 형상계수 Y (무차원)
    pub geometric_factor: f64,
}

/// 응력확대계수 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct StressIntensityResult {
    /// 공칭 응력 σ = F/A
    pub stress: f64,
    /// 응력확대계수 K [MPa·√m]
    pub k_mpa_sqrt_m: f64,
}

/// 면적/균열길이 정의역 검사. 면적은 양수, 균열길이는 0 이상이어야 한다.
pub fn check_geometry(area_m2: f64, crack_length_m: f64) -> Result<(), FractureCalcError> {
    if !area_m2.is_finite() || area_m2 <= 0.0 {
        return Err(FractureCalcError::InvalidGeometry {
            field: "area_m2",
            value: area_m2,
        });
    }
    if !crack_length_m.is_finite() || crack_length_m < 0.0 {
        return Err(FractureCalcError::InvalidGeometry {
            field: "crack_length_m",
            value: crack_length_m,
        });
    }
    Ok(())
}

/// 형상을 검증한 뒤 응력확대계수를 계산한다. 균열길이 0은 K=0으로 유효하다.
pub fn compute_stress_intensity(
    input: StressIntensityInput,
) -> Result<StressIntensityResult, FractureCalcError> {
    check_geometry(input.area_m2, input.crack_length_m)?;
    Ok(stress_intensity_unchecked(&input))
}

/// 형상 검증 없이 식을 그대로 평가한다. 형상이 이미 검증된 경우에만 사용한다.
pub fn stress_intensity_unchecked(input: &StressIntensityInput) -> StressIntensityResult {
    let stress = input.force_n / input.area_m2;
    let k_mpa_sqrt_m =
        input.geometric_factor * stress * (input.crack_length_m * std::f64::consts::PI).sqrt();
    StressIntensityResult {
        stress,
        k_mpa_sqrt_m,
    }
}
