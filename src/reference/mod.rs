//! 언어별 고정 참조 데이터
//!
//! 모든 표는 프로세스 시작 후 한 번만 초기화되는 불변 데이터이며
//! 아래 읽기 전용 접근자로만 노출됩니다.
//!
//! ```
//! use langfreq::reference;
//! use langfreq::Language;
//!
//! assert!(reference::stopwords(Language::German).contains("und"));
//! assert_eq!(reference::expected_ic(Language::English), 0.0667);
//! ```

mod bigrams;
mod letters;
mod words;

use std::collections::HashSet;

use crate::core::Language;

pub use bigrams::{Bigram, BigramFrequencyTable};
pub use letters::{letter_index, LetterFrequencyTable, ALPHABET};

/// 알파벳 빈도표 (a-z)
pub fn letter_frequencies(lang: Language) -> &'static LetterFrequencyTable {
    match lang {
        Language::English => &letters::ENGLISH,
        Language::French => &letters::FRENCH,
        Language::German => &letters::GERMAN,
        Language::Italian => &letters::ITALIAN,
        Language::Dutch => &letters::DUTCH,
    }
}

/// 특징 바이그램 빈도표
pub fn bigram_frequencies(lang: Language) -> &'static BigramFrequencyTable {
    &bigrams::TABLES[lang]
}

/// 불용어 집합
pub fn stopwords(lang: Language) -> &'static HashSet<&'static str> {
    &words::STOPWORDS[lang]
}

/// 편집 거리 비교용 상용어 목록
pub fn common_words(lang: Language) -> &'static [&'static str] {
    words::common_words(lang)
}

/// 언어별 기대 일치 지수 (Index of Coincidence)
pub fn expected_ic(lang: Language) -> f64 {
    match lang {
        Language::English => 0.0667,
        Language::French => 0.0778,
        Language::German => 0.0762,
        Language::Italian => 0.0738,
        Language::Dutch => 0.0798,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_tables_sum_to_one() {
        for lang in Language::ALL {
            let sum: f64 = letter_frequencies(lang).iter().sum();
            assert!((sum - 1.0).abs() < 0.03, "{} 빈도 합계 {}", lang, sum);
            assert!(letter_frequencies(lang).iter().all(|f| *f > 0.0));
        }
    }

    #[test]
    fn test_expected_ic_range() {
        for lang in Language::ALL {
            let ic = expected_ic(lang);
            assert!(ic > 0.06 && ic < 0.09, "{} 기대 IC {}", lang, ic);
        }
        assert!(expected_ic(Language::Dutch) > expected_ic(Language::English));
    }

    #[test]
    fn test_accessors_cover_every_language() {
        for lang in Language::ALL {
            assert!(!bigram_frequencies(lang).is_empty());
            assert!(!stopwords(lang).is_empty());
            assert!(!common_words(lang).is_empty());
        }
    }
}
