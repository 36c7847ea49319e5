//! 일치 지수(Index of Coincidence) 분석
//!
//! IC는 텍스트에서 임의로 고른 두 글자가 같을 확률입니다.
//! 언어마다 알파벳 분포가 달라 기대 IC도 다르므로, 계산된 IC가
//! 기대값에 얼마나 가까운지를 유사도로 씁니다.

use crate::core::text::ascii_letters;
use crate::core::{Language, ScoreMap};
use crate::reference::{self, letter_index};

use super::config::DetectorConfig;
use super::LanguageScorer;

/// IC = Σ n_i(n_i - 1) / (N(N - 1))
///
/// a-z만 셉니다. 알파벳이 1개 이하이면 0.0.
pub fn index_of_coincidence(text: &str) -> f64 {
    let mut counts = [0u64; 26];
    let mut total = 0u64;
    for c in ascii_letters(text) {
        if let Some(idx) = letter_index(c) {
            counts[idx] += 1;
            total += 1;
        }
    }

    if total <= 1 {
        return 0.0;
    }

    let numerator: f64 = counts.iter().map(|&n| (n * n.saturating_sub(1)) as f64).sum();
    let denominator = total as f64 * (total - 1) as f64;
    numerator / denominator
}

/// IC 분석기
#[derive(Debug, Clone)]
pub struct CoincidenceAnalyzer {
    /// 이 값 이상 벗어나면 유사도 0
    max_difference: f64,
}

impl Default for CoincidenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CoincidenceAnalyzer {
    pub fn new() -> Self {
        Self::with_config(&DetectorConfig::default())
    }

    pub fn with_config(config: &DetectorConfig) -> Self {
        Self {
            max_difference: config.ic_max_difference,
        }
    }

    /// 언어별 기대 IC
    pub fn expected(&self, lang: Language) -> f64 {
        reference::expected_ic(lang)
    }

    /// IC 값 하나를 언어별 유사도로 변환
    pub fn similarity(&self, ic: f64, lang: Language) -> f64 {
        let difference = (ic - self.expected(lang)).abs();
        (1.0 - difference / self.max_difference).max(0.0)
    }
}

impl LanguageScorer for CoincidenceAnalyzer {
    fn name(&self) -> &'static str {
        "IC"
    }

    fn scores(&self, text: &str) -> ScoreMap {
        let ic = index_of_coincidence(text);
        ScoreMap::from_fn(|lang| self.similarity(ic, lang))
    }
}
