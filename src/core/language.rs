//! 지원 언어 열거형과 언어별 점수 맵
//!
//! 모든 분석기는 `ScoreMap`을 반환합니다. 배열 기반이므로
//! 언어 키 누락이 구조적으로 불가능합니다.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// 지원 언어 (선언 순서 = 모든 동점 처리의 스캔 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
pub enum Language {
    English,
    French,
    German,
    Italian,
    Dutch,
}

impl Language {
    /// 지원 언어 수
    pub const COUNT: usize = 5;

    /// 고정 스캔 순서: English, French, German, Italian, Dutch
    pub const ALL: [Language; Language::COUNT] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Dutch,
    ];

    /// 표시용 이름
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Dutch => "Dutch",
        }
    }

    /// `ALL` 배열 내 인덱스
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 언어를 키로 하는 고정 크기 맵
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageMap<T> {
    values: [T; Language::COUNT],
}

/// 언어별 실수 점수
pub type ScoreMap = LanguageMap<f64>;

impl<T> LanguageMap<T> {
    /// 언어마다 클로저를 호출하여 맵 생성
    pub fn from_fn(mut f: impl FnMut(Language) -> T) -> Self {
        Self {
            values: std::array::from_fn(|i| f(Language::ALL[i])),
        }
    }

    /// (언어, 값 참조) 순회, 항상 `Language::ALL` 순서
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> + '_ {
        Language::ALL.into_iter().zip(self.values.iter())
    }

    /// 값을 변환한 새 맵
    pub fn map<U>(&self, mut f: impl FnMut(Language, &T) -> U) -> LanguageMap<U> {
        LanguageMap::from_fn(|lang| f(lang, &self.values[lang.index()]))
    }
}

impl<T: Clone> LanguageMap<T> {
    /// 모든 언어를 같은 값으로 채운 맵
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T: Copy> LanguageMap<T> {
    /// 값 조회
    pub fn get(&self, lang: Language) -> T {
        self.values[lang.index()]
    }

    /// 값만 순회
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }
}

impl<T: Default> Default for LanguageMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Language> for LanguageMap<T> {
    type Output = T;

    fn index(&self, lang: Language) -> &T {
        &self.values[lang.index()]
    }
}

impl<T> IndexMut<Language> for LanguageMap<T> {
    fn index_mut(&mut self, lang: Language) -> &mut T {
        &mut self.values[lang.index()]
    }
}

/// `{ "English": 0.5, ... }` 형태로 직렬화
impl<T: Serialize> Serialize for LanguageMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Language::COUNT))?;
        for (lang, value) in self.iter() {
            map.serialize_entry(lang.display_name(), value)?;
        }
        map.end()
    }
}

impl ScoreMap {
    /// 최댓값 (NaN 제외)
    pub fn max_value(&self) -> f64 {
        self.values().fold(f64::NEG_INFINITY, f64::max)
    }

    /// 점수 합계
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    /// 점수가 가장 높은 언어
    ///
    /// 동점이면 `Language::ALL` 순서상 먼저 나온 언어가 이김.
    /// 비교 가능한 값이 없으면 English.
    pub fn best(&self) -> Language {
        let mut best = Language::English;
        let mut best_score = f64::NEG_INFINITY;
        for (lang, &score) in self.iter() {
            if score > best_score {
                best = lang;
                best_score = score;
            }
        }
        best
    }

    /// 점수가 가장 낮은 언어 (거리 기반 점수용)
    pub fn lowest(&self) -> Language {
        let mut best = Language::English;
        let mut best_score = f64::INFINITY;
        for (lang, &score) in self.iter() {
            if score < best_score {
                best = lang;
                best_score = score;
            }
        }
        best
    }

    /// 내림차순 정렬된 (언어, 점수) 목록. 동점은 `ALL` 순서 유지
    pub fn ranked(&self) -> Vec<(Language, f64)> {
        let mut entries: Vec<(Language, f64)> = self.iter().map(|(l, &s)| (l, s)).collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}
