//! 다섯 신호의 가중 결합
//!
//! 파이프라인:
//! 1. 각 분석기의 원시 점수 맵 계산
//! 2. 거리 기반 점수(알파벳 빈도)를 "높을수록 유사"로 정규화
//! 3. ASCII 알파벳 수로 가중치 구간 선택
//! 4. 가중합 후 최댓값 언어 선택

use serde::Serialize;

use crate::core::text::letter_count;
use crate::core::{Language, ScoreMap};

use super::coincidence::CoincidenceAnalyzer;
use super::config::{DetectorConfig, Weights};
use super::frequency::FrequencyAnalyzer;
use super::levenshtein::LevenshteinAnalyzer;
use super::ngram::NgramAnalyzer;
use super::stopword::StopwordAnalyzer;
use super::{LanguageScorer, Signal};

/// 거리 맵을 유사도 맵으로 변환: 1 - d / max(d)
///
/// 모든 거리가 0이면 분모를 1.0으로 둡니다.
pub fn normalize_distances(distances: &ScoreMap) -> ScoreMap {
    let max = distances.max_value();
    let max = if max > 0.0 { max } else { 1.0 };
    distances.map(|_, &d| 1.0 - d / max)
}

/// 신호 하나의 결합 내역
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalScores {
    pub signal: Signal,
    /// 분석기가 반환한 값 그대로
    pub raw: ScoreMap,
    /// 높을수록 유사하도록 맞춘 값
    pub normalized: ScoreMap,
    pub weight: f64,
}

/// 감지 결과 전체
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub language: Language,
    /// 가중치 구간 선택에 쓴 ASCII 알파벳 수
    pub letter_count: usize,
    pub weights: Weights,
    pub signals: [SignalScores; 5],
    pub combined: ScoreMap,
}

impl Detection {
    /// 특정 신호의 결합 내역
    pub fn signal(&self, signal: Signal) -> &SignalScores {
        // signals는 Signal::ALL 순서로 채워짐
        &self.signals[signal as usize]
    }
}

/// 결합 감지기
#[derive(Debug, Clone)]
pub struct CombinedDetector {
    frequency: FrequencyAnalyzer,
    ngram: NgramAnalyzer,
    stopword: StopwordAnalyzer,
    coincidence: CoincidenceAnalyzer,
    levenshtein: LevenshteinAnalyzer,
    config: DetectorConfig,
}

impl Default for CombinedDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinedDetector {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    /// 설정을 지정하여 생성
    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            frequency: FrequencyAnalyzer::new(),
            ngram: NgramAnalyzer::new(),
            stopword: StopwordAnalyzer::with_config(&config),
            coincidence: CoincidenceAnalyzer::with_config(&config),
            levenshtein: LevenshteinAnalyzer::with_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// 신호에 해당하는 분석기
    pub fn scorer(&self, signal: Signal) -> &dyn LanguageScorer {
        match signal {
            Signal::Frequency => &self.frequency,
            Signal::Ngram => &self.ngram,
            Signal::Stopword => &self.stopword,
            Signal::Coincidence => &self.coincidence,
            Signal::Levenshtein => &self.levenshtein,
        }
    }

    /// 불용어 분석기 (리포트의 일치 수 표시용)
    pub fn stopword_analyzer(&self) -> &StopwordAnalyzer {
        &self.stopword
    }

    /// 전체 결합 내역 계산
    pub fn analyze(&self, text: &str) -> Detection {
        let lowered = text.to_lowercase();
        let letters = letter_count(&lowered);
        let weights = self.config.weights_for(letters);
        log::debug!("알파벳 {}개 → 가중치 {:?}", letters, weights);

        let signals = Signal::ALL.map(|signal| {
            let scorer = self.scorer(signal);
            let raw = scorer.scores(&lowered);
            let normalized = if scorer.lower_is_better() {
                normalize_distances(&raw)
            } else {
                raw
            };
            log::trace!("{}: raw={:?} normalized={:?}", scorer.name(), raw, normalized);

            SignalScores {
                signal,
                raw,
                normalized,
                weight: weights.get(signal),
            }
        });

        let combined = ScoreMap::from_fn(|lang| {
            signals
                .iter()
                .map(|s| s.weight * s.normalized[lang])
                .sum()
        });
        let language = combined.best();
        log::debug!("감지 결과: {} ({:.4})", language, combined[language]);

        Detection {
            language,
            letter_count: letters,
            weights,
            signals,
            combined,
        }
    }

    /// 감지 언어와 결합 점수
    pub fn detect(&self, text: &str) -> (Language, ScoreMap) {
        let detection = self.analyze(text);
        (detection.language, detection.combined)
    }
}

impl LanguageScorer for CombinedDetector {
    fn name(&self) -> &'static str {
        "Combined"
    }

    fn scores(&self, text: &str) -> ScoreMap {
        self.analyze(text).combined
    }
}
