//! 불용어 정확 일치 분석
//!
//! a-z 이외의 문자를 구분자로 토큰을 나눈 뒤, 토큰이 각 언어의 불용어 집합에
//! 있으면 그 언어의 일치 수를 올립니다. 여러 언어에 동시에 속한 토큰은
//! 모든 해당 언어에 집계됩니다.

use crate::core::text::ascii_word_tokens;
use crate::core::{Language, LanguageMap, ScoreMap};
use crate::reference;

use super::config::DetectorConfig;
use super::LanguageScorer;

/// 불용어 분석기
#[derive(Debug, Clone)]
pub struct StopwordAnalyzer {
    /// 비교 최소 토큰 길이
    min_token_len: usize,
    /// 일치가 하나도 없을 때의 균등 점수
    fallback: f64,
}

impl Default for StopwordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordAnalyzer {
    pub fn new() -> Self {
        Self::with_config(&DetectorConfig::default())
    }

    pub fn with_config(config: &DetectorConfig) -> Self {
        Self {
            min_token_len: config.min_stopword_len,
            fallback: config.stopword_fallback,
        }
    }

    /// 언어별 불용어 일치 수
    pub fn match_counts(&self, text: &str) -> LanguageMap<usize> {
        let mut counts = LanguageMap::default();
        for token in ascii_word_tokens(text) {
            if token.len() < self.min_token_len {
                continue;
            }
            for lang in Language::ALL {
                if reference::stopwords(lang).contains(token.as_str()) {
                    counts[lang] += 1;
                }
            }
        }
        counts
    }

    /// 무일치 시 균등 점수
    pub fn fallback(&self) -> f64 {
        self.fallback
    }
}

impl LanguageScorer for StopwordAnalyzer {
    fn name(&self) -> &'static str {
        "Stopwords"
    }

    /// 일치 수를 최대 일치 수로 나눈 값
    fn scores(&self, text: &str) -> ScoreMap {
        let counts = self.match_counts(text);
        let max = counts.values().max().unwrap_or(0);

        if max == 0 {
            return ScoreMap::filled(self.fallback);
        }
        counts.map(|_, &count| count as f64 / max as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_counts() {
        let analyzer = StopwordAnalyzer::new();
        let counts = analyzer.match_counts("the and of this was were have");

        assert_eq!(counts[Language::English], 7);
        assert_eq!(counts[Language::German], 1); // was
        assert_eq!(counts[Language::Dutch], 2); // of, was
        assert_eq!(counts[Language::French], 0);
        assert_eq!(counts[Language::Italian], 0);
    }

    #[test]
    fn test_english_only_stopwords() {
        let scores = StopwordAnalyzer::new().scores("the would should they");
        assert_eq!(scores[Language::English], 1.0);
        for lang in [Language::French, Language::German, Language::Italian, Language::Dutch] {
            assert!(scores[lang] < 1.0, "{} 점수 {}", lang, scores[lang]);
        }
    }

    #[test]
    fn test_normalized_by_max() {
        let scores = StopwordAnalyzer::new().scores("the and of this was were have");
        assert_eq!(scores[Language::English], 1.0);
        assert!((scores[Language::Dutch] - 2.0 / 7.0).abs() < 1e-12);
        assert!((scores[Language::German] - 1.0 / 7.0).abs() < 1e-12);
        assert_eq!(scores[Language::French], 0.0);
    }

    #[test]
    fn test_ambiguous_token_counts_for_all() {
        let counts = StopwordAnalyzer::new().match_counts("de");
        assert_eq!(counts[Language::French], 1);
        assert_eq!(counts[Language::Dutch], 1);
    }

    #[test]
    fn test_no_match_gives_fallback() {
        let analyzer = StopwordAnalyzer::new();
        let scores = analyzer.scores("xyzzy qwerty");
        assert!(scores.values().all(|s| (s - 0.2).abs() < f64::EPSILON));

        let scores = analyzer.scores("");
        assert!(scores.values().all(|s| (s - analyzer.fallback()).abs() < f64::EPSILON));
    }

    #[test]
    fn test_short_tokens_ignored() {
        // "a"와 "i"는 영어 불용어지만 2글자 미만
        let counts = StopwordAnalyzer::new().match_counts("a i a");
        assert!(counts.values().all(|c| c == 0));
    }

    #[test]
    fn test_accented_words_are_split() {
        // "être" → "tre" 토큰이 되어 "etre"와 일치하지 않음
        let counts = StopwordAnalyzer::new().match_counts("être");
        assert_eq!(counts[Language::French], 0);

        let counts = StopwordAnalyzer::new().match_counts("etre");
        assert_eq!(counts[Language::French], 1);
    }

    #[test]
    fn test_punctuation_separates_tokens() {
        let counts = StopwordAnalyzer::new().match_counts("Der,Die;Das!");
        assert_eq!(counts[Language::German], 3);
    }

    #[test]
    fn test_custom_fallback() {
        let config = DetectorConfig::new().with_stopword_fallback(0.0);
        let scores = StopwordAnalyzer::with_config(&config).scores("qqq");
        assert!(scores.values().all(|s| s == 0.0));
    }
}
