//! 바이그램 분포 분석
//!
//! a-z만 남긴 문자열에서 겹치는 두 글자 창을 모두 세어 분포를 만들고,
//! 언어별 참조 바이그램 표와의 코사인 유사도를 계산합니다.

use std::collections::BTreeMap;

use crate::core::text::ascii_letters;
use crate::core::ScoreMap;
use crate::reference::{self, Bigram};

use super::LanguageScorer;

/// 텍스트의 바이그램 상대 빈도
///
/// 알파벳이 2개 미만이면 빈 맵
pub fn bigram_distribution(text: &str) -> BTreeMap<Bigram, f64> {
    let chars: Vec<char> = ascii_letters(text).collect();

    let mut counts: BTreeMap<Bigram, u64> = BTreeMap::new();
    let mut total = 0u64;
    for window in chars.windows(2) {
        *counts.entry((window[0], window[1])).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return BTreeMap::new();
    }

    counts
        .into_iter()
        .map(|(bigram, count)| (bigram, count as f64 / total as f64))
        .collect()
}

/// 희소 벡터 간 코사인 유사도 (0.0 ~ 1.0)
///
/// 한쪽에만 있는 키는 다른 쪽 값을 0으로 봅니다.
/// 어느 한쪽의 노름이 0이면 0.0.
/// 키 순서대로 합산하므로 같은 입력이면 결과가 비트 단위로 같습니다.
pub fn cosine_similarity(u: &BTreeMap<Bigram, f64>, v: &BTreeMap<Bigram, f64>) -> f64 {
    let dot: f64 = u
        .iter()
        .filter_map(|(bigram, a)| v.get(bigram).map(|b| a * b))
        .sum();
    let norm_u = u.values().map(|a| a * a).sum::<f64>().sqrt();
    let norm_v = v.values().map(|b| b * b).sum::<f64>().sqrt();

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }

    (dot / (norm_u * norm_v)).clamp(0.0, 1.0)
}

/// 바이그램 분석기
#[derive(Debug, Clone, Default)]
pub struct NgramAnalyzer;

impl NgramAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageScorer for NgramAnalyzer {
    fn name(&self) -> &'static str {
        "N-grams"
    }

    fn scores(&self, text: &str) -> ScoreMap {
        let observed = bigram_distribution(text);
        ScoreMap::from_fn(|lang| cosine_similarity(&observed, reference::bigram_frequencies(lang)))
    }
}
