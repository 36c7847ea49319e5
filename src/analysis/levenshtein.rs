//! 편집 거리 기반 상용어 매칭
//!
//! 3글자 이상 토큰마다 모든 언어의 상용어 중 가장 비슷한 단어를 찾아
//! 그 단어의 언어에 한 표를 줍니다. 최종 점수는 득표율입니다.
//!
//! 언어는 `Language::ALL` 순서로 훑으며, 더 큰 유사도만 기존 최선을
//! 대체합니다. 따라서 동점이면 앞선 언어가 이깁니다.

use crate::core::text::whitespace_tokens;
use crate::core::{Language, LanguageMap, ScoreMap};
use crate::reference;

use super::config::DetectorConfig;
use super::LanguageScorer;

/// 삽입/삭제/치환 비용이 모두 1인 편집 거리
///
/// 문자(char) 단위로 비교하며 대소문자를 구분합니다.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // dp[i][j] = a[..i] → b[..j] 최소 편집 수
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j - 1].min(dp[i - 1][j]).min(dp[i][j - 1])
            };
        }
    }

    dp[a.len()][b.len()]
}

/// 1 - 거리 / 긴 쪽 길이 (둘 다 비어 있으면 1.0)
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// 토큰에 가장 가까운 상용어
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestMatch {
    pub language: Language,
    pub word: &'static str,
    pub similarity: f64,
}

/// 모든 언어의 상용어 중 최근접 단어 검색
///
/// 동점이면 `Language::ALL` 순서상 먼저 나온 언어, 같은 언어 안에서는
/// 목록상 먼저 나온 단어를 유지합니다.
pub fn closest_match(token: &str) -> ClosestMatch {
    let mut best = ClosestMatch {
        language: Language::English,
        word: "",
        similarity: -1.0,
    };

    for lang in Language::ALL {
        for &word in reference::common_words(lang) {
            let score = similarity(token, word);
            if score > best.similarity {
                best = ClosestMatch {
                    language: lang,
                    word,
                    similarity: score,
                };
            }
        }
    }

    best
}

/// 편집 거리 분석기
#[derive(Debug, Clone)]
pub struct LevenshteinAnalyzer {
    /// 비교 최소 토큰 길이
    min_token_len: usize,
}

impl Default for LevenshteinAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LevenshteinAnalyzer {
    pub fn new() -> Self {
        Self::with_config(&DetectorConfig::default())
    }

    pub fn with_config(config: &DetectorConfig) -> Self {
        Self {
            min_token_len: config.min_edit_token_len,
        }
    }

    /// 언어별 득표 수
    pub fn match_counts(&self, text: &str) -> LanguageMap<usize> {
        let mut counts = LanguageMap::default();
        for token in whitespace_tokens(text) {
            if token.chars().count() < self.min_token_len {
                continue;
            }
            let closest = closest_match(&token);
            log::trace!(
                "'{}' → {} ({}, {:.3})",
                token,
                closest.language,
                closest.word,
                closest.similarity
            );
            counts[closest.language] += 1;
        }
        counts
    }
}

impl LanguageScorer for LevenshteinAnalyzer {
    fn name(&self) -> &'static str {
        "Levenshtein"
    }

    /// 득표율 (합계 1.0, 후보 토큰이 없으면 모두 0)
    fn scores(&self, text: &str) -> ScoreMap {
        let counts = self.match_counts(text);
        let total: usize = counts.values().sum();

        if total == 0 {
            return ScoreMap::default();
        }
        counts.map(|_, &count| count as f64 / total as f64)
    }
}
