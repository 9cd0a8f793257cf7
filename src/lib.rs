//! 핵심 해석 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI에서도 공유한다.

pub mod app;
pub mod config;
pub mod fracture;
pub mod i18n;
pub mod material_db;
pub mod ui_cli;
