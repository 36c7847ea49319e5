//! 알파벳 빈도 분석
//!
//! 텍스트의 a-z 상대 빈도와 언어별 참조 빈도표 사이의 유클리드 거리를 계산합니다.
//! 이 분석기의 점수는 거리이므로 낮을수록 유사합니다.

use crate::core::text::{alphabetic_count, ascii_letters};
use crate::core::ScoreMap;
use crate::reference::{self, letter_index, LetterFrequencyTable};

use super::LanguageScorer;

/// 텍스트의 a-z 상대 빈도
///
/// 분모는 악센트 문자를 포함한 전체 알파벳 수입니다.
/// 알파벳이 없으면 모든 슬롯이 0인 표를 반환합니다.
pub fn letter_distribution(text: &str) -> LetterFrequencyTable {
    let mut table = [0.0; 26];
    let total = alphabetic_count(text);
    if total == 0 {
        return table;
    }

    for c in ascii_letters(text) {
        if let Some(idx) = letter_index(c) {
            table[idx] += 1.0;
        }
    }
    for freq in table.iter_mut() {
        *freq /= total as f64;
    }
    table
}

/// 26차원 유클리드 거리
pub fn euclidean_distance(a: &LetterFrequencyTable, b: &LetterFrequencyTable) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// 알파벳 빈도 분석기
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer;

impl FrequencyAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageScorer for FrequencyAnalyzer {
    fn name(&self) -> &'static str {
        "Frequency"
    }

    fn scores(&self, text: &str) -> ScoreMap {
        let observed = letter_distribution(text);
        ScoreMap::from_fn(|lang| euclidean_distance(&observed, reference::letter_frequencies(lang)))
    }

    fn lower_is_better(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;

    #[test]
    fn test_letter_distribution() {
        let table = letter_distribution("AaB!");
        assert!((table[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((table[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!(table[2..].iter().all(|f| *f == 0.0));
    }

    #[test]
    fn test_accented_letters_count_in_total() {
        // 'é'는 분모에만 포함
        let table = letter_distribution("eé");
        assert!((table[4] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(letter_distribution("123 !?"), [0.0; 26]);
    }

    #[test]
    fn test_identical_distribution_has_zero_distance() {
        let a = letter_distribution("abab");
        let b = letter_distribution("BABA");
        assert_eq!(euclidean_distance(&a, &b), 0.0);

        for lang in Language::ALL {
            let table = reference::letter_frequencies(lang);
            assert_eq!(euclidean_distance(table, table), 0.0);
        }
    }

    #[test]
    fn test_synthetic_text_matches_table_exactly() {
        // 영어 빈도(‰)를 반올림한 정수 개수로 텍스트 구성
        let counts: [usize; 26] = [
            82, 15, 28, 43, 127, 22, 20, 61, 70, 2, 8, 40, 24, 67, 75, 19, 1, 60, 63, 91, 28,
            10, 24, 2, 20, 1,
        ];
        let total: usize = counts.iter().sum();
        let table: LetterFrequencyTable =
            std::array::from_fn(|i| counts[i] as f64 / total as f64);

        let mut text = String::new();
        for (letter, &count) in reference::ALPHABET.iter().zip(counts.iter()) {
            for _ in 0..count {
                text.push(*letter);
            }
            text.push(' ');
        }

        let observed = letter_distribution(&text);
        assert_eq!(euclidean_distance(&observed, &table), 0.0);
        assert!(euclidean_distance(&observed, reference::letter_frequencies(Language::English)) > 0.0);
    }

    #[test]
    fn test_distance_is_non_negative() {
        let analyzer = FrequencyAnalyzer::new();
        for text in ["hello world", "", "zzzz", "Über den Wolken"] {
            let scores = analyzer.scores(text);
            assert_eq!(scores.iter().count(), Language::COUNT);
            assert!(scores.values().all(|d| d >= 0.0), "음수 거리: {}", text);
        }
    }

    #[test]
    fn test_empty_text_gives_reference_norm() {
        let scores = FrequencyAnalyzer::new().scores("");
        for lang in Language::ALL {
            let norm = euclidean_distance(&[0.0; 26], reference::letter_frequencies(lang));
            assert!((scores[lang] - norm).abs() < 1e-12);
        }
    }

    #[test]
    fn test_detect_prefers_lowest_distance() {
        let analyzer = FrequencyAnalyzer::new();
        assert!(analyzer.lower_is_better());

        let scores = analyzer.scores("the");
        assert_eq!(analyzer.detect("the"), scores.lowest());
    }
}
