//! 언어 모델 타입과 텍스트 유틸리티

pub mod language;
pub mod text;

pub use language::{Language, LanguageMap, ScoreMap};
