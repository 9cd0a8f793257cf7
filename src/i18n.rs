use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RUN: &str = "main_menu.run";
    pub const MAIN_MENU_MATERIALS: &str = "main_menu.materials";
    pub const MAIN_MENU_CONFIGURE: &str = "main_menu.configure";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const RUN_HEADING: &str = "run.heading";
    pub const PROMPT_STEPS: &str = "run.prompt_steps";
    pub const VERDICT_LIKELY_LINE: &str = "run.verdict_likely_line";
    pub const VERDICT_UNLIKELY_LINE: &str = "run.verdict_unlikely_line";
    pub const RUN_SUMMARY: &str = "run.summary";

    pub const MATERIALS_HEADING: &str = "materials.heading";
    pub const MATERIALS_COLUMNS: &str = "materials.columns";

    pub const CONFIGURE_HEADING: &str = "configure.heading";
    pub const CONFIGURE_CURRENT: &str = "configure.current";
    pub const PROMPT_MATERIAL: &str = "configure.prompt_material";
    pub const PROMPT_AREA: &str = "configure.prompt_area";
    pub const PROMPT_CRACK_LENGTH: &str = "configure.prompt_crack_length";
    pub const PROMPT_GEOMETRIC_FACTOR: &str = "configure.prompt_geometric_factor";
    pub const CONFIGURE_APPLIED: &str = "configure.applied";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_STEPS: &str = "settings.prompt_steps";
    pub const SETTINGS_PROMPT_INTERVAL: &str = "settings.prompt_interval";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const VERDICT_LIKELY: &str = "verdict.likely";
    pub const VERDICT_UNLIKELY: &str = "verdict.unlikely";

    pub const GUI_MATERIAL: &str = "gui.material";
    pub const GUI_AREA: &str = "gui.area";
    pub const GUI_CRACK_LENGTH: &str = "gui.crack_length";
    pub const GUI_GEOMETRIC_FACTOR: &str = "gui.geometric_factor";
    pub const GUI_INTERVAL: &str = "gui.interval";
    pub const GUI_APPLY: &str = "gui.apply";
    pub const GUI_RUN: &str = "gui.run";
    pub const GUI_PAUSE: &str = "gui.pause";
    pub const GUI_STEP_ONCE: &str = "gui.step_once";
    pub const GUI_RESET_HISTORY: &str = "gui.reset_history";
    pub const GUI_FORCE_PLOT: &str = "gui.force_plot";
    pub const GUI_K_PLOT: &str = "gui.k_plot";
    pub const GUI_LAST_RESULT: &str = "gui.last_result";
    pub const GUI_FORCE: &str = "gui.force";
    pub const GUI_HARDNESS: &str = "gui.hardness";
    pub const GUI_STRESS: &str = "gui.stress";
    pub const GUI_K: &str = "gui.k";
    pub const GUI_TOUGHNESS: &str = "gui.toughness";
    pub const GUI_STEP_COUNT: &str = "gui.step_count";
    pub const GUI_LANGUAGE: &str = "gui.language";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 해당 언어에 없으면 반대 언어, 그래도 없으면 키를 반환한다.
    pub fn t(&self, key: &'static str) -> &'static str {
        let found = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        found.unwrap_or(key)
    }
}

/// CLI 플래그 → 설정 → 시스템 로케일 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// `{name}` 꼴 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "종료합니다.",
        APP_TITLE => "Fracture Analysis Toolbox",

        MAIN_MENU_TITLE => "=== Fracture Analysis Toolbox ===",
        MAIN_MENU_RUN => "1) 시뮬레이션 실행",
        MAIN_MENU_MATERIALS => "2) 재료 카탈로그",
        MAIN_MENU_CONFIGURE => "3) 해석 설정",
        MAIN_MENU_SETTINGS => "4) 환경 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",

        RUN_HEADING => "-- 시뮬레이션 --",
        PROMPT_STEPS => "스텝 수",
        VERDICT_LIKELY_LINE => "파괴 가능: K = {k} MPa·√m ≥ 파괴인성 = {kic} MPa·√m",
        VERDICT_UNLIKELY_LINE => "파괴 가능성 낮음: K = {k} MPa·√m < 파괴인성 = {kic} MPa·√m",
        RUN_SUMMARY => "총 {n} 스텝, 파괴 판정 {likely}회, 최대 K = {kmax} MPa·√m",

        MATERIALS_HEADING => "-- 재료 카탈로그 --",
        MATERIALS_COLUMNS => "코드 / 이름 / K_IC [MPa·√m] / 기준 경도 / 비고",

        CONFIGURE_HEADING => "-- 해석 설정 --",
        CONFIGURE_CURRENT => "현재: 재료={mat}, 면적={area} m², 균열={crack} m, Y={y}",
        PROMPT_MATERIAL => "재료 코드(빈 입력 시 유지): ",
        PROMPT_AREA => "단면적 [m²](빈 입력 시 유지): ",
        PROMPT_CRACK_LENGTH => "균열 길이 [m](빈 입력 시 유지): ",
        PROMPT_GEOMETRIC_FACTOR => "형상계수 Y(빈 입력 시 유지): ",
        CONFIGURE_APPLIED => "설정이 반영되었습니다.",

        SETTINGS_HEADING => "-- 환경 설정 --",
        SETTINGS_CURRENT => "현재: 언어={lang}, 기본 스텝={steps}, 간격={ms} ms",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(auto/ko/en, 빈 입력 시 유지): ",
        SETTINGS_PROMPT_STEPS => "기본 스텝 수(빈 입력 시 유지): ",
        SETTINGS_PROMPT_INTERVAL => "스텝 간격 ms(빈 입력 시 유지): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",

        VERDICT_LIKELY => "파괴 가능",
        VERDICT_UNLIKELY => "파괴 가능성 낮음",

        GUI_MATERIAL => "재료",
        GUI_AREA => "단면적 [m²]",
        GUI_CRACK_LENGTH => "균열 길이 [m]",
        GUI_GEOMETRIC_FACTOR => "형상계수 Y",
        GUI_INTERVAL => "스텝 간격 [ms]",
        GUI_APPLY => "적용",
        GUI_RUN => "실행",
        GUI_PAUSE => "일시정지",
        GUI_STEP_ONCE => "한 스텝",
        GUI_RESET_HISTORY => "이력 초기화",
        GUI_FORCE_PLOT => "하중 - 시간",
        GUI_K_PLOT => "K - 하중",
        GUI_LAST_RESULT => "최근 스텝",
        GUI_FORCE => "하중 [N]",
        GUI_HARDNESS => "경도 샘플",
        GUI_STRESS => "응력 [Pa]",
        GUI_K => "K [MPa·√m]",
        GUI_TOUGHNESS => "파괴인성 [MPa·√m]",
        GUI_STEP_COUNT => "누적 스텝",
        GUI_LANGUAGE => "언어",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        APP_TITLE => "Fracture Analysis Toolbox",

        MAIN_MENU_TITLE => "=== Fracture Analysis Toolbox ===",
        MAIN_MENU_RUN => "1) Run simulation",
        MAIN_MENU_MATERIALS => "2) Material catalog",
        MAIN_MENU_CONFIGURE => "3) Analysis setup",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Choose again.",
        ERROR_INVALID_NUMBER => "Enter a number.",

        RUN_HEADING => "-- Simulation --",
        PROMPT_STEPS => "Steps",
        VERDICT_LIKELY_LINE => "Fracture likely: K = {k} MPa·√m ≥ toughness = {kic} MPa·√m",
        VERDICT_UNLIKELY_LINE => "Fracture unlikely: K = {k} MPa·√m < toughness = {kic} MPa·√m",
        RUN_SUMMARY => "{n} steps, {likely} fracture verdicts, max K = {kmax} MPa·√m",

        MATERIALS_HEADING => "-- Material catalog --",
        MATERIALS_COLUMNS => "code / name / K_IC [MPa·√m] / baseline hardness / notes",

        CONFIGURE_HEADING => "-- Analysis setup --",
        CONFIGURE_CURRENT => "Current: material={mat}, area={area} m², crack={crack} m, Y={y}",
        PROMPT_MATERIAL => "Material code (empty to keep): ",
        PROMPT_AREA => "Cross-section area [m²] (empty to keep): ",
        PROMPT_CRACK_LENGTH => "Crack length [m] (empty to keep): ",
        PROMPT_GEOMETRIC_FACTOR => "Geometric factor Y (empty to keep): ",
        CONFIGURE_APPLIED => "Configuration applied.",

        SETTINGS_HEADING => "-- Settings --",
        SETTINGS_CURRENT => "Current: language={lang}, default steps={steps}, interval={ms} ms",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, empty to keep): ",
        SETTINGS_PROMPT_STEPS => "Default step count (empty to keep): ",
        SETTINGS_PROMPT_INTERVAL => "Step interval ms (empty to keep): ",
        SETTINGS_SAVED => "Settings saved.",

        VERDICT_LIKELY => "Fracture likely",
        VERDICT_UNLIKELY => "Fracture unlikely",

        GUI_MATERIAL => "Material",
        GUI_AREA => "Area [m²]",
        GUI_CRACK_LENGTH => "Crack length [m]",
        GUI_GEOMETRIC_FACTOR => "Geometric factor Y",
        GUI_INTERVAL => "Step interval [ms]",
        GUI_APPLY => "Apply",
        GUI_RUN => "Run",
        GUI_PAUSE => "Pause",
        GUI_STEP_ONCE => "Single step",
        GUI_RESET_HISTORY => "Reset history",
        GUI_FORCE_PLOT => "Force vs. time",
        GUI_K_PLOT => "K vs. force",
        GUI_LAST_RESULT => "Last step",
        GUI_FORCE => "Force [N]",
        GUI_HARDNESS => "Hardness sample",
        GUI_STRESS => "Stress [Pa]",
        GUI_K => "K [MPa·√m]",
        GUI_TOUGHNESS => "Toughness [MPa·√m]",
        GUI_STEP_COUNT => "Accumulated steps",
        GUI_LANGUAGE => "Language",
        _ => return None,
    })
}
