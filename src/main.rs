use clap::Parser;

use fracture_analysis_toolbox::fracture::analyzer::FractureAnalyzer;
use fracture_analysis_toolbox::fracture::sensor::SensorSimulator;
use fracture_analysis_toolbox::material_db::MaterialCatalog;
use fracture_analysis_toolbox::{app, config, i18n, ui_cli};

/// 파괴 해석 CLI. 옵션 없이 실행하면 대화형 메뉴를 연다.
#[derive(Debug, Parser)]
#[command(name = "fracture_analysis_toolbox_cli", version, about)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 메뉴 없이 지정한 스텝 수만큼 바로 시뮬레이션을 실행한다
    #[arg(long)]
    run: bool,
    /// 시뮬레이션 스텝 수 (기본값: 설정 파일)
    #[arg(long)]
    steps: Option<u32>,
    /// 재료 코드 (기본값: 설정 파일)
    #[arg(long)]
    material: Option<String>,
    /// 스텝 간 간격 [ms]
    #[arg(long)]
    interval_ms: Option<u64>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let resolved = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&resolved);

    if let Some(code) = &cli.material {
        cfg.material = code.clone();
    }
    if let Some(steps) = cli.steps {
        cfg.steps = steps;
    }
    if let Some(ms) = cli.interval_ms {
        cfg.interval_ms = ms;
    }

    if cli.run {
        let mut analyzer = FractureAnalyzer::new(
            MaterialCatalog::builtin(),
            SensorSimulator::with_thread_rng(),
            &cfg,
        )?;
        ui_cli::run_steps(&tr, &mut analyzer, cfg.steps, cfg.interval_ms);
    } else {
        app::run(&mut cfg, &tr)?;
    }
    Ok(())
}
