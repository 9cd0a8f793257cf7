use crate::config::Config;
use crate::fracture::analyzer::{AnalyzerError, FractureAnalyzer};
use crate::fracture::sensor::SensorSimulator;
use crate::i18n::{self, Translator};
use crate::material_db::MaterialCatalog;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 해석기 구성 오류
    Analyzer(AnalyzerError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Analyzer(e) => write!(f, "해석기 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<AnalyzerError> for AppError {
    fn from(value: AnalyzerError) -> Self {
        AppError::Analyzer(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut analyzer = FractureAnalyzer::new(
        MaterialCatalog::builtin(),
        SensorSimulator::with_thread_rng(),
        config,
    )?;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::RunSimulation => ui_cli::handle_run(tr, config, &mut analyzer)?,
            MenuChoice::Materials => ui_cli::handle_materials(tr, analyzer.catalog()),
            MenuChoice::Configure => {
                ui_cli::handle_configure(tr, config, &mut analyzer)?;
                config.save()?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
