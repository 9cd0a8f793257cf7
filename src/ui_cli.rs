use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::app::AppError;
use crate::config::Config;
use crate::fracture::analyzer::{AnalysisResult, ConfigUpdate, FractureAnalyzer};
use crate::i18n::{fill_template, keys, Translator};
use crate::material_db::MaterialCatalog;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunSimulation,
    Materials,
    Configure,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RUN));
    println!("{}", tr.t(keys::MAIN_MENU_MATERIALS));
    println!("{}", tr.t(keys::MAIN_MENU_CONFIGURE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::RunSimulation),
            "2" => return Ok(MenuChoice::Materials),
            "3" => return Ok(MenuChoice::Configure),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 시뮬레이션 메뉴를 처리한다.
pub fn handle_run(
    tr: &Translator,
    config: &Config,
    analyzer: &mut FractureAnalyzer,
) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::RUN_HEADING));
    let prompt = format!("{} [{}]: ", tr.t(keys::PROMPT_STEPS), config.steps);
    let steps = read_optional::<u32>(tr, &prompt)?.unwrap_or(config.steps);
    run_steps(tr, analyzer, steps, config.interval_ms);
    Ok(())
}

/// 스텝을 반복 실행하며 스텝별 판정 라인과 요약을 출력한다.
pub fn run_steps(tr: &Translator, analyzer: &mut FractureAnalyzer, steps: u32, interval_ms: u64) {
    let mut likely = 0u32;
    let mut k_max = 0.0f64;
    for _ in 0..steps {
        let res = analyzer.analyze();
        println!("{}", verdict_line(tr, &res));
        if res.verdict.is_likely() {
            likely += 1;
        }
        if res.k_mpa_sqrt_m > k_max {
            k_max = res.k_mpa_sqrt_m;
        }
        if interval_ms > 0 {
            thread::sleep(Duration::from_millis(interval_ms));
        }
    }
    println!(
        "{}",
        fill_template(
            tr.t(keys::RUN_SUMMARY),
            &[
                ("n", steps.to_string()),
                ("likely", likely.to_string()),
                ("kmax", format!("{k_max:.2}")),
            ],
        )
    );
}

/// 스텝 하나의 판정 결과를 사람이 읽는 한 줄로 만든다.
pub fn verdict_line(tr: &Translator, res: &AnalysisResult) -> String {
    let key = if res.verdict.is_likely() {
        keys::VERDICT_LIKELY_LINE
    } else {
        keys::VERDICT_UNLIKELY_LINE
    };
    fill_template(
        tr.t(key),
        &[
            ("k", format!("{:.2}", res.k_mpa_sqrt_m)),
            ("kic", res.toughness_mpa_sqrt_m.to_string()),
        ],
    )
}

/// 재료 카탈로그를 표로 출력한다.
pub fn handle_materials(tr: &Translator, catalog: &MaterialCatalog) {
    println!("\n{}", tr.t(keys::MATERIALS_HEADING));
    println!("{}", tr.t(keys::MATERIALS_COLUMNS));
    for m in catalog.entries() {
        println!(
            "{:<10} {:<10} {:>8.1} {:>8.1}  {}",
            m.code, m.name, m.fracture_toughness_mpa_sqrt_m, m.baseline_hardness, m.notes
        );
    }
}

/// 해석 설정 메뉴를 처리한다. 성공 시 설정 파일 기본값에도 반영한다.
pub fn handle_configure(
    tr: &Translator,
    config: &mut Config,
    analyzer: &mut FractureAnalyzer,
) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::CONFIGURE_HEADING));
    let current = analyzer.config();
    println!(
        "{}",
        fill_template(
            tr.t(keys::CONFIGURE_CURRENT),
            &[
                ("mat", current.material.code.to_string()),
                ("area", current.area_m2.to_string()),
                ("crack", current.crack_length_m.to_string()),
                ("y", current.geometric_factor.to_string()),
            ],
        )
    );
    let material = read_optional_line(tr.t(keys::PROMPT_MATERIAL))?;
    let area_m2 = read_optional::<f64>(tr, tr.t(keys::PROMPT_AREA))?;
    let crack_length_m = read_optional::<f64>(tr, tr.t(keys::PROMPT_CRACK_LENGTH))?;
    let geometric_factor = read_optional::<f64>(tr, tr.t(keys::PROMPT_GEOMETRIC_FACTOR))?;
    let update = ConfigUpdate {
        material: material.as_deref(),
        area_m2,
        crack_length_m,
        geometric_factor,
    };
    match analyzer.configure(update) {
        Ok(()) => {
            let applied = analyzer.config();
            config.material = applied.material.code.to_string();
            config.area_m2 = applied.area_m2;
            config.crack_length_m = applied.crack_length_m;
            config.geometric_factor = applied.geometric_factor;
            println!("{}", tr.t(keys::CONFIGURE_APPLIED));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 환경 설정 메뉴를 처리한다. 언어 변경은 다음 실행부터 적용된다.
pub fn handle_settings(tr: &Translator, config: &mut Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        fill_template(
            tr.t(keys::SETTINGS_CURRENT),
            &[
                ("lang", config.language.clone()),
                ("steps", config.steps.to_string()),
                ("ms", config.interval_ms.to_string()),
            ],
        )
    );
    if let Some(lang) = read_optional_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))? {
        config.language = lang;
    }
    if let Some(steps) = read_optional::<u32>(tr, tr.t(keys::SETTINGS_PROMPT_STEPS))? {
        config.steps = steps;
    }
    if let Some(ms) = read_optional::<u64>(tr, tr.t(keys::SETTINGS_PROMPT_INTERVAL))? {
        config.interval_ms = ms;
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 빈 입력이면 None, 아니면 공백을 제거한 문자열을 반환한다.
fn read_optional_line(prompt: &str) -> Result<Option<String>, AppError> {
    let s = read_line(prompt)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// 빈 입력이면 None, 아니면 파싱 성공까지 재시도한다.
fn read_optional<T: std::str::FromStr>(
    tr: &Translator,
    prompt: &str,
) -> Result<Option<T>, AppError> {
    loop {
        match read_optional_line(prompt)? {
            None => return Ok(None),
            Some(s) => match s.parse::<T>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
            },
        }
    }
}
