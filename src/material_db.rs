//! 재료별 파괴 물성(파괴인성, 기준 경도) 테이블과 조회 기능을 제공한다.
//! 값은 교육/데모용 근사치이며 실제 설계 검증에는 사용할 수 없다.

/// 단일 재료의 파괴 물성.
#[derive(Debug, Clone, Copy)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 파괴인성 K_IC [MPa·√m]
    pub fracture_toughness_mpa_sqrt_m: f64,
    /// 기준 경도 (데모용 무차원 스케일)
    pub baseline_hardness: f64,
}

impl MaterialData {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        notes: &'static str,
        fracture_toughness_mpa_sqrt_m: f64,
        baseline_hardness: f64,
    ) -> Self {
        Self {
            code,
            name,
            notes,
            fracture_toughness_mpa_sqrt_m,
            baseline_hardness,
        }
    }
}

/// 카탈로그 구성 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CatalogError {
    /// 파괴인성 또는 기준 경도가 0 이하인 항목
    NonPositiveProperty {
        code: String,
        field: &'static str,
        value: f64,
    },
    /// 항목이 하나도 없는 카탈로그
    Empty,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NonPositiveProperty { code, field, value } => {
                write!(f, "재료 물성 오류: {code}.{field} = {value} (양수여야 함)")
            }
            CatalogError::Empty => write!(f, "재료 카탈로그가 비어 있습니다"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// 불변 재료 카탈로그. 런타임에는 조회만 가능하다.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    entries: Vec<MaterialData>,
}

impl MaterialCatalog {
    /// 내장 테이블로 카탈로그를 만든다.
    pub fn builtin() -> Self {
        Self {
            entries: MATERIALS.to_vec(),
        }
    }

    /// 호출자가 넘긴 항목으로 카탈로그를 만든다. 물성이 양수인지 검증한다.
    pub fn from_entries(entries: Vec<MaterialData>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for m in &entries {
            if !(m.fracture_toughness_mpa_sqrt_m > 0.0) {
                return Err(CatalogError::NonPositiveProperty {
                    code: m.code.to_string(),
                    field: "fracture_toughness_mpa_sqrt_m",
                    value: m.fracture_toughness_mpa_sqrt_m,
                });
            }
            if !(m.baseline_hardness > 0.0) {
                return Err(CatalogError::NonPositiveProperty {
                    code: m.code.to_string(),
                    field: "baseline_hardness",
                    value: m.baseline_hardness,
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[MaterialData] {
        &self.entries
    }

    /// 코드 또는 표시 이름으로 재료를 찾는다(대소문자 무시).
    pub fn find(&self, id: &str) -> Option<&MaterialData> {
        self.entries
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(id) || m.name.eq_ignore_ascii_case(id))
    }
}

const MATERIALS: &[MaterialData] = &[
    MaterialData::new("steel", "Steel", "구조용 강재; 데모 기준 재료", 50.0, 150.0),
    MaterialData::new("aluminum", "Aluminum", "알루미늄 합금; 저인성 예시", 30.0, 60.0),
    MaterialData::new("titanium", "Titanium", "티타늄 합금; 고인성 예시", 70.0, 200.0),
    MaterialData::new("cast_iron", "Cast Iron", "주철; 취성 비교용 참고 항목", 20.0, 220.0),
    MaterialData::new("copper", "Copper", "구리; 연성 비교용 참고 항목", 40.0, 50.0),
];

// NOTE:
// - Toughness/hardness values are illustrative classroom figures, not certified data.
// - steel/aluminum/titanium are the reference trio the analyzer defaults rely on;
//   cast_iron/copper are comparison-only extras.
