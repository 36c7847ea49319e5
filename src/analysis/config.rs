//! 언어 감지기 설정
//!
//! 분석기 상수와 텍스트 길이별 가중치 구간 정의

use serde::{Deserialize, Serialize};

use super::Signal;

/// 다섯 신호의 결합 가중치
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub frequency: f64,
    pub ngram: f64,
    pub stopword: f64,
    pub coincidence: f64,
    pub levenshtein: f64,
}

impl Weights {
    /// [frequency, ngram, stopword, ic, levenshtein] 순서로 생성
    pub const fn new(
        frequency: f64,
        ngram: f64,
        stopword: f64,
        coincidence: f64,
        levenshtein: f64,
    ) -> Self {
        Self {
            frequency,
            ngram,
            stopword,
            coincidence,
            levenshtein,
        }
    }

    /// 신호별 가중치
    pub fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Frequency => self.frequency,
            Signal::Ngram => self.ngram,
            Signal::Stopword => self.stopword,
            Signal::Coincidence => self.coincidence,
            Signal::Levenshtein => self.levenshtein,
        }
    }

    pub fn sum(&self) -> f64 {
        Signal::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// 50자 미만: 단어 일치 신호 위주
pub const SHORT_TEXT_WEIGHTS: Weights = Weights::new(0.10, 0.15, 0.45, 0.10, 0.20);
/// 200자 미만
pub const BRIEF_TEXT_WEIGHTS: Weights = Weights::new(0.15, 0.20, 0.35, 0.15, 0.15);
/// 500자 미만
pub const MEDIUM_TEXT_WEIGHTS: Weights = Weights::new(0.20, 0.25, 0.30, 0.15, 0.10);
/// 500자 이상: 통계 분포 신호 위주
pub const LONG_TEXT_WEIGHTS: Weights = Weights::new(0.25, 0.30, 0.25, 0.15, 0.05);

/// 길이 구간 하나 (`max_letters` 미만일 때 적용)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeightTier {
    pub max_letters: usize,
    pub weights: Weights,
}

/// 감지기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DetectorConfig {
    /// 불용어가 하나도 일치하지 않을 때 모든 언어에 주는 점수
    pub stopword_fallback: f64,

    /// IC 유사도 정규화 상수
    /// 기대 IC와의 차이가 이 값 이상이면 유사도 0
    pub ic_max_difference: f64,

    /// 불용어 비교 최소 토큰 길이
    pub min_stopword_len: usize,

    /// 편집 거리 비교 최소 토큰 길이
    pub min_edit_token_len: usize,

    /// 알파벳 수 기준 가중치 구간 (오름차순, 첫 일치 구간 사용)
    pub weight_tiers: Vec<WeightTier>,

    /// 모든 구간을 넘는 긴 텍스트의 가중치
    pub long_text_weights: Weights,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            stopword_fallback: 0.2,
            ic_max_difference: 0.05,
            min_stopword_len: 2,
            min_edit_token_len: 3,
            weight_tiers: vec![
                WeightTier {
                    max_letters: 50,
                    weights: SHORT_TEXT_WEIGHTS,
                },
                WeightTier {
                    max_letters: 200,
                    weights: BRIEF_TEXT_WEIGHTS,
                },
                WeightTier {
                    max_letters: 500,
                    weights: MEDIUM_TEXT_WEIGHTS,
                },
            ],
            long_text_weights: LONG_TEXT_WEIGHTS,
        }
    }
}

impl DetectorConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 불용어 무일치 점수 설정
    pub fn with_stopword_fallback(mut self, fallback: f64) -> Self {
        self.stopword_fallback = fallback;
        self
    }

    /// IC 정규화 상수 설정
    pub fn with_ic_max_difference(mut self, max_difference: f64) -> Self {
        self.ic_max_difference = max_difference;
        self
    }

    /// 가중치 구간 설정
    pub fn with_weight_tiers(mut self, tiers: Vec<WeightTier>) -> Self {
        self.weight_tiers = tiers;
        self
    }

    /// 긴 텍스트 가중치 설정
    pub fn with_long_text_weights(mut self, weights: Weights) -> Self {
        self.long_text_weights = weights;
        self
    }

    /// 알파벳 수에 맞는 가중치 선택
    pub fn weights_for(&self, letter_count: usize) -> Weights {
        self.weight_tiers
            .iter()
            .find(|tier| letter_count < tier.max_letters)
            .map(|tier| tier.weights)
            .unwrap_or(self.long_text_weights)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.stopword_fallback) {
            return Err(format!(
                "stopword_fallback must be within 0..=1: {}",
                self.stopword_fallback
            ));
        }
        if self.ic_max_difference <= 0.0 {
            return Err(format!(
                "ic_max_difference must be positive: {}",
                self.ic_max_difference
            ));
        }

        let mut previous = 0;
        for tier in &self.weight_tiers {
            if tier.max_letters <= previous {
                return Err(format!(
                    "weight tiers must be ascending: {} <= {}",
                    tier.max_letters, previous
                ));
            }
            previous = tier.max_letters;
            check_weights(&tier.weights)?;
        }
        check_weights(&self.long_text_weights)
    }
}

fn check_weights(weights: &Weights) -> Result<(), String> {
    if Signal::ALL.iter().any(|s| weights.get(*s) < 0.0) {
        return Err(format!("negative weight: {:?}", weights));
    }
    if (weights.sum() - 1.0).abs() > 1e-6 {
        return Err(format!("weights must sum to 1, got {:.4}", weights.sum()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert!((config.stopword_fallback - 0.2).abs() < f64::EPSILON);
        assert!((config.ic_max_difference - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.min_stopword_len, 2);
        assert_eq!(config.min_edit_token_len, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_weight_vectors_sum_to_one() {
        for weights in [
            SHORT_TEXT_WEIGHTS,
            BRIEF_TEXT_WEIGHTS,
            MEDIUM_TEXT_WEIGHTS,
            LONG_TEXT_WEIGHTS,
        ] {
            assert!((weights.sum() - 1.0).abs() < 1e-9, "{:?}", weights);
        }
    }

    #[test]
    fn test_weights_for_boundaries() {
        let config = DetectorConfig::default();
        assert_eq!(config.weights_for(0), SHORT_TEXT_WEIGHTS);
        assert_eq!(config.weights_for(49), SHORT_TEXT_WEIGHTS);
        assert_eq!(config.weights_for(50), BRIEF_TEXT_WEIGHTS);
        assert_eq!(config.weights_for(199), BRIEF_TEXT_WEIGHTS);
        assert_eq!(config.weights_for(200), MEDIUM_TEXT_WEIGHTS);
        assert_eq!(config.weights_for(499), MEDIUM_TEXT_WEIGHTS);
        assert_eq!(config.weights_for(500), LONG_TEXT_WEIGHTS);
        assert_eq!(config.weights_for(10_000), LONG_TEXT_WEIGHTS);
    }

    #[test]
    fn test_short_text_favors_word_matching() {
        let short = SHORT_TEXT_WEIGHTS;
        let long = LONG_TEXT_WEIGHTS;
        assert!(short.stopword + short.levenshtein > long.stopword + long.levenshtein);
        assert!(short.frequency + short.ngram < long.frequency + long.ngram);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DetectorConfig::new()
            .with_stopword_fallback(0.1)
            .with_ic_max_difference(0.02)
            .with_weight_tiers(Vec::new())
            .with_long_text_weights(SHORT_TEXT_WEIGHTS);

        assert!((config.stopword_fallback - 0.1).abs() < f64::EPSILON);
        assert!((config.ic_max_difference - 0.02).abs() < f64::EPSILON);
        assert_eq!(config.weights_for(10_000), SHORT_TEXT_WEIGHTS);
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let config = DetectorConfig::new().with_long_text_weights(Weights::new(0.5, 0.5, 0.5, 0.0, 0.0));
        assert!(config.validate().is_err());

        let config = DetectorConfig::new().with_long_text_weights(Weights::new(1.2, -0.2, 0.0, 0.0, 0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unsorted_tiers() {
        let config = DetectorConfig::new().with_weight_tiers(vec![
            WeightTier {
                max_letters: 200,
                weights: BRIEF_TEXT_WEIGHTS,
            },
            WeightTier {
                max_letters: 50,
                weights: SHORT_TEXT_WEIGHTS,
            },
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_constants() {
        assert!(DetectorConfig::new().with_ic_max_difference(0.0).validate().is_err());
        assert!(DetectorConfig::new().with_stopword_fallback(1.5).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"stopword_fallback": 0.3}"#;
        let config: DetectorConfig = serde_json::from_str(json).unwrap();
        assert!((config.stopword_fallback - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.weight_tiers.len(), 3);
        assert_eq!(config.long_text_weights, LONG_TEXT_WEIGHTS);
    }
}
