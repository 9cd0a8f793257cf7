//! 파괴 해석 관련 모듈 모음.

pub mod analyzer;
pub mod calculator;
pub mod sensor;

pub use analyzer::*;
pub use calculator::*;
pub use sensor::*;
