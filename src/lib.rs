pub mod analysis;
pub mod config;
pub mod core;
pub mod reference;
pub mod ui;

use lazy_static::lazy_static;

pub use crate::analysis::{CombinedDetector, Detection, DetectorConfig, LanguageScorer, Signal};
pub use crate::core::{Language, LanguageMap, ScoreMap};

lazy_static! {
    static ref DEFAULT_DETECTOR: CombinedDetector = CombinedDetector::new();
}

/// 기본 설정 감지기로 언어 감지
///
/// 입력 검증은 호출자 책임입니다 (`ui::validator::validate_text`).
pub fn detect(text: &str) -> (Language, ScoreMap) {
    DEFAULT_DETECTOR.detect(text)
}

/// 기본 설정 감지기의 결합 점수
pub fn scores(text: &str) -> ScoreMap {
    DEFAULT_DETECTOR.scores(text)
}
