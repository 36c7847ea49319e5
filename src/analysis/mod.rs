//! 통계 신호 기반 언어 감지
//!
//! 다섯 개의 독립 분석기가 각각 언어별 점수 맵을 만들고,
//! `CombinedDetector`가 텍스트 길이에 따른 가중치로 결합합니다.
//!
//! 1. **알파벳 빈도**: 참조 빈도표와의 유클리드 거리 (낮을수록 유사)
//! 2. **바이그램**: 참조 바이그램과의 코사인 유사도
//! 3. **불용어**: 불용어 정확 일치 수
//! 4. **일치 지수(IC)**: 기대 IC와의 근접도
//! 5. **편집 거리**: 토큰별 최근접 상용어의 언어 득표
//!
//! # 사용 예시
//!
//! ```
//! use langfreq::analysis::{CombinedDetector, LanguageScorer, StopwordAnalyzer};
//! use langfreq::Language;
//!
//! let detector = CombinedDetector::new();
//! let (language, scores) = detector.detect("der und die das ist sein");
//! assert_eq!(language, Language::German);
//! assert_eq!(scores.best(), Language::German);
//!
//! // 분석기 단독 사용
//! let stopwords = StopwordAnalyzer::new();
//! assert_eq!(stopwords.detect("de het een van en"), Language::Dutch);
//! ```

mod coincidence;
mod combined;
mod config;
mod frequency;
mod levenshtein;
mod ngram;
mod stopword;

use serde::Serialize;

use crate::core::{Language, ScoreMap};

pub use coincidence::{index_of_coincidence, CoincidenceAnalyzer};
pub use combined::{normalize_distances, CombinedDetector, Detection, SignalScores};
pub use config::{
    DetectorConfig, WeightTier, Weights, BRIEF_TEXT_WEIGHTS, LONG_TEXT_WEIGHTS,
    MEDIUM_TEXT_WEIGHTS, SHORT_TEXT_WEIGHTS,
};
pub use frequency::{euclidean_distance, letter_distribution, FrequencyAnalyzer};
pub use levenshtein::{closest_match, edit_distance, similarity, ClosestMatch, LevenshteinAnalyzer};
pub use ngram::{bigram_distribution, cosine_similarity, NgramAnalyzer};
pub use stopword::StopwordAnalyzer;

/// "텍스트 → 언어별 점수 맵" 공통 인터페이스
pub trait LanguageScorer {
    /// 표시용 이름
    fn name(&self) -> &'static str;

    /// 모든 언어에 대한 점수 맵
    fn scores(&self, text: &str) -> ScoreMap;

    /// 점수가 거리(낮을수록 유사)인지 여부
    fn lower_is_better(&self) -> bool {
        false
    }

    /// 가장 유사한 언어 (동점이면 `Language::ALL` 순서상 앞선 언어)
    fn detect(&self, text: &str) -> Language {
        let scores = self.scores(text);
        if self.lower_is_better() {
            scores.lowest()
        } else {
            scores.best()
        }
    }
}

/// 결합기에서 본 개별 신호 (가중치 배열 순서와 동일)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Signal {
    Frequency,
    Ngram,
    Stopword,
    Coincidence,
    Levenshtein,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::Frequency,
        Signal::Ngram,
        Signal::Stopword,
        Signal::Coincidence,
        Signal::Levenshtein,
    ];

    /// 리포트 열 제목
    pub fn label(self) -> &'static str {
        match self {
            Signal::Frequency => "Frequency",
            Signal::Ngram => "N-grams",
            Signal::Stopword => "Stopwords",
            Signal::Coincidence => "IC",
            Signal::Levenshtein => "Levenshtein",
        }
    }
}
