#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Line, Plot, PlotPoints};
use image::GenericImageView;
use std::time::{Duration, Instant};
use std::{env, fs, path::Path};

use fracture_analysis_toolbox::config;
use fracture_analysis_toolbox::fracture::analyzer::{
    AnalysisResult, AnalyzerError, ConfigUpdate, FractureAnalyzer,
};
use fracture_analysis_toolbox::fracture::sensor::SensorSimulator;
use fracture_analysis_toolbox::i18n::{self, keys, Translator};
use fracture_analysis_toolbox::material_db::{MaterialCatalog, MaterialData};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    let lang_arg = cli_lang.unwrap_or_else(|| "auto".to_string());
    app_cfg.language = i18n::resolve_language(&lang_arg, Some(app_cfg.language.as_str()));

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1000.0, 720.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = match GuiApp::new(app_cfg.clone()) {
        Ok(app) => app,
        Err(e) => {
            // 저장된 설정이 깨졌으면 기본 설정으로 되돌린다
            eprintln!("설정 오류: {e}");
            let mut fallback = config::Config::default();
            fallback.language = app_cfg.language.clone();
            match GuiApp::new(fallback) {
                Ok(app) => app,
                Err(e) => {
                    eprintln!("초기화 실패: {e}");
                    return Ok(());
                }
            }
        }
    };

    eframe::run_native(
        "Fracture Analysis Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(app)
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한국어 표시가 가능한 시스템 폰트를 찾아 egui에 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".into(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "malgunbd.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("CJK font not found; falling back to the default font.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(name.to_owned());
    ctx.set_fonts(fonts);
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    analyzer: FractureAnalyzer,
    running: bool,
    // 설정 입력란
    material_input: String,
    area_input: f64,
    crack_input: f64,
    factor_input: f64,
    interval_ms: u64,
    lang_input: String,
    last_result: Option<AnalysisResult>,
    last_step: Option<Instant>,
    status: Option<String>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Result<Self, AnalyzerError> {
        let analyzer = FractureAnalyzer::new(
            MaterialCatalog::builtin(),
            SensorSimulator::with_thread_rng(),
            &cfg,
        )?;
        let current = analyzer.config().clone();
        let tr = Translator::new(&cfg.language);
        Ok(Self {
            running: false,
            material_input: current.material.code.to_string(),
            area_input: current.area_m2,
            crack_input: current.crack_length_m,
            factor_input: current.geometric_factor,
            interval_ms: cfg.interval_ms,
            lang_input: tr.language_code().to_string(),
            last_result: None,
            last_step: None,
            status: None,
            tr,
            analyzer,
            config: cfg,
        })
    }

    /// 입력란 값으로 해석기 설정을 갱신한다. 실패하면 상태줄에 표시하고 유지한다.
    fn apply_config(&mut self) {
        let update = ConfigUpdate {
            material: Some(self.material_input.as_str()),
            area_m2: Some(self.area_input),
            crack_length_m: Some(self.crack_input),
            geometric_factor: Some(self.factor_input),
        };
        match self.analyzer.configure(update) {
            Ok(()) => {
                let applied = self.analyzer.config();
                self.config.material = applied.material.code.to_string();
                self.config.area_m2 = applied.area_m2;
                self.config.crack_length_m = applied.crack_length_m;
                self.config.geometric_factor = applied.geometric_factor;
                self.config.interval_ms = self.interval_ms;
                self.status = Some(self.tr.t(keys::CONFIGURE_APPLIED).to_string());
            }
            Err(e) => {
                self.status = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn single_step(&mut self) {
        self.last_result = Some(self.analyzer.analyze());
    }

    /// 현재 설정 그대로 해석기를 새로 만들어 이력을 비운다.
    fn reset_history(&mut self) {
        let current = self.analyzer.config().clone();
        let mut cfg = self.config.clone();
        cfg.material = current.material.code.to_string();
        cfg.area_m2 = current.area_m2;
        cfg.crack_length_m = current.crack_length_m;
        cfg.geometric_factor = current.geometric_factor;
        match FractureAnalyzer::new(
            MaterialCatalog::builtin(),
            SensorSimulator::with_thread_rng(),
            &cfg,
        ) {
            Ok(analyzer) => {
                self.analyzer = analyzer;
                self.last_result = None;
            }
            Err(e) => {
                self.status = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::APP_TITLE));
        ui.separator();

        let entries: Vec<MaterialData> = self.analyzer.catalog().entries().to_vec();
        egui::ComboBox::from_label(self.tr.t(keys::GUI_MATERIAL))
            .selected_text(self.material_input.clone())
            .show_ui(ui, |ui| {
                for m in &entries {
                    ui.selectable_value(&mut self.material_input, m.code.to_string(), m.name);
                }
            });

        egui::Grid::new("geometry_inputs")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(self.tr.t(keys::GUI_AREA));
                ui.add(
                    egui::DragValue::new(&mut self.area_input)
                        .speed(0.0001)
                        .clamp_range(1e-6..=10.0),
                );
                ui.end_row();
                ui.label(self.tr.t(keys::GUI_CRACK_LENGTH));
                ui.add(
                    egui::DragValue::new(&mut self.crack_input)
                        .speed(0.0001)
                        .clamp_range(1e-6..=1.0),
                );
                ui.end_row();
                ui.label(self.tr.t(keys::GUI_GEOMETRIC_FACTOR));
                ui.add(
                    egui::DragValue::new(&mut self.factor_input)
                        .speed(0.01)
                        .clamp_range(0.01..=10.0),
                );
                ui.end_row();
                ui.label(self.tr.t(keys::GUI_INTERVAL));
                ui.add(egui::DragValue::new(&mut self.interval_ms).clamp_range(10..=2000));
                ui.end_row();
            });

        if ui.button(self.tr.t(keys::GUI_APPLY)).clicked() {
            self.apply_config();
        }
        ui.separator();

        ui.horizontal(|ui| {
            let run_label = if self.running {
                self.tr.t(keys::GUI_PAUSE)
            } else {
                self.tr.t(keys::GUI_RUN)
            };
            if ui.button(run_label).clicked() {
                self.running = !self.running;
            }
            if ui.button(self.tr.t(keys::GUI_STEP_ONCE)).clicked() {
                self.single_step();
            }
            if ui.button(self.tr.t(keys::GUI_RESET_HISTORY)).clicked() {
                self.reset_history();
            }
        });
        ui.separator();

        if let Some(res) = self.last_result {
            ui.strong(self.tr.t(keys::GUI_LAST_RESULT));
            egui::Grid::new("last_result")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(self.tr.t(keys::GUI_FORCE));
                    ui.label(format!("{:.1}", res.force_n));
                    ui.end_row();
                    ui.label(self.tr.t(keys::GUI_HARDNESS));
                    ui.label(format!("{:.1}", res.hardness));
                    ui.end_row();
                    ui.label(self.tr.t(keys::GUI_STRESS));
                    ui.label(format!("{:.0}", res.stress));
                    ui.end_row();
                    ui.label(self.tr.t(keys::GUI_K));
                    ui.label(format!("{:.2}", res.k_mpa_sqrt_m));
                    ui.end_row();
                    ui.label(self.tr.t(keys::GUI_TOUGHNESS));
                    ui.label(format!("{:.1}", res.toughness_mpa_sqrt_m));
                    ui.end_row();
                });
            let (verdict_key, color) = if res.verdict.is_likely() {
                (keys::VERDICT_LIKELY, egui::Color32::LIGHT_RED)
            } else {
                (keys::VERDICT_UNLIKELY, egui::Color32::LIGHT_GREEN)
            };
            ui.label(egui::RichText::new(self.tr.t(verdict_key)).color(color).strong());
        }
        ui.separator();

        ui.label(format!(
            "{}: {}",
            self.tr.t(keys::GUI_STEP_COUNT),
            self.analyzer.history().len()
        ));

        let lang_before = self.lang_input.clone();
        egui::ComboBox::from_label(self.tr.t(keys::GUI_LANGUAGE))
            .selected_text(self.lang_input.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_input, "ko".to_string(), "한국어");
                ui.selectable_value(&mut self.lang_input, "en".to_string(), "English");
            });
        if self.lang_input != lang_before {
            self.config.language = self.lang_input.clone();
            self.tr = Translator::new(&self.lang_input);
        }

        if let Some(status) = &self.status {
            ui.separator();
            ui.small(status.clone());
        }
    }

    fn plots_ui(&mut self, ui: &mut egui::Ui) {
        let force_points: PlotPoints = self
            .analyzer
            .history()
            .iter()
            .enumerate()
            .map(|(i, e)| [i as f64, e.force_n])
            .collect();
        let k_points: PlotPoints = self
            .analyzer
            .history()
            .iter()
            .map(|e| [e.force_n, e.k_mpa_sqrt_m])
            .collect();
        let half = ((ui.available_height() - 48.0) / 2.0).max(120.0);

        ui.label(self.tr.t(keys::GUI_FORCE_PLOT));
        Plot::new("force_time")
            .height(half)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(force_points).name(self.tr.t(keys::GUI_FORCE)));
            });
        ui.label(self.tr.t(keys::GUI_K_PLOT));
        Plot::new("k_force")
            .height(half)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(k_points).name(self.tr.t(keys::GUI_K)));
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.running {
            // 마우스 이동 등으로 프레임이 빨라져도 스텝 간격은 유지한다
            let interval = Duration::from_millis(self.interval_ms);
            let due = self.last_step.map_or(true, |t| t.elapsed() >= interval);
            if due {
                self.single_step();
                self.last_step = Some(Instant::now());
            }
            ctx.request_repaint_after(interval);
        }
        egui::SidePanel::left("controls")
            .min_width(280.0)
            .show(ctx, |ui| self.controls_ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.plots_ui(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            eprintln!("설정 저장 실패: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gui_defaults_follow_config() {
        let app = GuiApp::new(config::Config::default()).expect("gui app");
        assert!(!app.running);
        assert_eq!(app.material_input, "steel");
        assert!((app.area_input - 0.0045).abs() < 1e-12);
        assert!((app.crack_input - 0.001).abs() < 1e-12);
        assert_eq!(app.interval_ms, 100);
        assert!(app.analyzer.history().is_empty());
    }

    #[test]
    fn apply_config_updates_analyzer() {
        let mut app = GuiApp::new(config::Config::default()).expect("gui app");
        app.material_input = "titanium".to_string();
        app.area_input = 0.002;
        app.apply_config();
        assert_eq!(app.analyzer.config().material.code, "titanium");
        assert!((app.analyzer.config().area_m2 - 0.002).abs() < 1e-12);
        assert_eq!(app.config.material, "titanium");
    }

    #[test]
    fn apply_config_rejects_bad_geometry_and_keeps_previous() {
        let mut app = GuiApp::new(config::Config::default()).expect("gui app");
        app.area_input = -1.0;
        app.apply_config();
        assert!((app.analyzer.config().area_m2 - 0.0045).abs() < 1e-12);
        assert!(app.status.is_some());
    }

    #[test]
    fn single_step_appends_history() {
        let mut app = GuiApp::new(config::Config::default()).expect("gui app");
        app.single_step();
        app.single_step();
        assert_eq!(app.analyzer.history().len(), 2);
        assert!(app.last_result.is_some());
    }

    #[test]
    fn reset_history_clears_but_keeps_config() {
        let mut app = GuiApp::new(config::Config::default()).expect("gui app");
        app.material_input = "aluminum".to_string();
        app.apply_config();
        app.single_step();
        app.reset_history();
        assert!(app.analyzer.history().is_empty());
        assert_eq!(app.analyzer.config().material.code, "aluminum");
    }
}
