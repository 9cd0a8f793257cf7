use fracture_analysis_toolbox::config::Config;
use fracture_analysis_toolbox::i18n::{self, keys, Translator};

#[test]
fn defaults_match_the_reference_rig() {
    let cfg = Config::default();
    assert_eq!(cfg.material, "steel");
    assert!((cfg.area_m2 - 0.0045).abs() < 1e-12);
    assert!((cfg.crack_length_m - 0.001).abs() < 1e-12);
    assert!((cfg.geometric_factor - 1.0).abs() < 1e-12);
    assert_eq!(cfg.steps, 100);
    assert_eq!(cfg.interval_ms, 100);
}

#[test]
fn config_roundtrips_through_toml() {
    let cfg = Config {
        language: "en".to_string(),
        material: "titanium".to_string(),
        area_m2: 0.002,
        crack_length_m: 0.0005,
        geometric_factor: 1.12,
        steps: 42,
        interval_ms: 250,
    };
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("parse");
    assert_eq!(back.language, "en");
    assert_eq!(back.material, "titanium");
    assert!((back.area_m2 - 0.002).abs() < 1e-12);
    assert!((back.crack_length_m - 0.0005).abs() < 1e-12);
    assert!((back.geometric_factor - 1.12).abs() < 1e-12);
    assert_eq!(back.steps, 42);
    assert_eq!(back.interval_ms, 250);
}

#[test]
fn explicit_language_codes_win_over_config() {
    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("en-US", Some("ko")), "en");
    assert_eq!(i18n::resolve_language("auto", Some("en")), "en");
}

#[test]
fn translator_returns_language_specific_strings() {
    let en = Translator::new("en");
    let ko = Translator::new("ko");
    assert_eq!(en.t(keys::VERDICT_LIKELY), "Fracture likely");
    assert_eq!(ko.t(keys::VERDICT_LIKELY), "파괴 가능");
    // 등록되지 않은 키는 키 문자열 그대로 반환한다
    assert_eq!(en.t("missing.key"), "missing.key");
}
