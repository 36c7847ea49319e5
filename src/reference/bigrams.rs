//! 언어별 특징 바이그램 빈도표
//!
//! 알파벳 제곱 전체가 아니라 언어마다 가장 특징적인 30개만 저장합니다.
//! 표에 없는 바이그램의 빈도는 0으로 간주합니다.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::core::{Language, LanguageMap};

/// 소문자 두 글자 바이그램
pub type Bigram = (char, char);

/// 희소 바이그램 빈도표 (키 순서 고정)
pub type BigramFrequencyTable = BTreeMap<Bigram, f64>;

const ENGLISH: &[(&str, f64)] = &[
    ("th", 0.0356), ("he", 0.0307), ("in", 0.0243), ("er", 0.0205), ("an", 0.0199),
    ("re", 0.0185), ("on", 0.0176), ("at", 0.0149), ("en", 0.0145), ("nd", 0.0135),
    ("ti", 0.0134), ("es", 0.0134), ("or", 0.0128), ("te", 0.0120), ("of", 0.0117),
    ("ed", 0.0117), ("is", 0.0113), ("it", 0.0112), ("al", 0.0109), ("ar", 0.0107),
    ("st", 0.0105), ("to", 0.0104), ("nt", 0.0104), ("ng", 0.0095), ("se", 0.0093),
    ("ha", 0.0093), ("as", 0.0087), ("ou", 0.0087), ("io", 0.0083), ("le", 0.0083),
];

const FRENCH: &[(&str, f64)] = &[
    ("es", 0.0315), ("en", 0.0265), ("de", 0.0248), ("le", 0.0223), ("re", 0.0215),
    ("on", 0.0208), ("nt", 0.0205), ("la", 0.0198), ("er", 0.0195), ("te", 0.0188),
    ("ou", 0.0185), ("an", 0.0178), ("se", 0.0172), ("ai", 0.0168), ("qu", 0.0165),
    ("et", 0.0160), ("it", 0.0155), ("is", 0.0150), ("ur", 0.0145), ("ti", 0.0140),
    ("ie", 0.0135), ("me", 0.0130), ("ne", 0.0125), ("pa", 0.0120), ("ra", 0.0115),
    ("us", 0.0110), ("ue", 0.0105), ("ns", 0.0100), ("ce", 0.0095), ("co", 0.0090),
];

const GERMAN: &[(&str, f64)] = &[
    ("en", 0.0415), ("er", 0.0378), ("ch", 0.0275), ("de", 0.0248), ("ei", 0.0231),
    ("nd", 0.0215), ("te", 0.0205), ("in", 0.0198), ("ie", 0.0192), ("ge", 0.0185),
    ("un", 0.0178), ("st", 0.0172), ("es", 0.0165), ("an", 0.0158), ("he", 0.0152),
    ("be", 0.0148), ("sc", 0.0142), ("ng", 0.0138), ("au", 0.0132), ("ic", 0.0128),
    ("ne", 0.0122), ("se", 0.0118), ("re", 0.0112), ("di", 0.0108), ("it", 0.0102),
    ("ni", 0.0098), ("da", 0.0095), ("ht", 0.0092), ("as", 0.0088), ("is", 0.0085),
];

const ITALIAN: &[(&str, f64)] = &[
    ("er", 0.0298), ("re", 0.0275), ("on", 0.0258), ("di", 0.0245), ("en", 0.0232),
    ("to", 0.0225), ("an", 0.0218), ("ta", 0.0212), ("la", 0.0205), ("te", 0.0198),
    ("in", 0.0192), ("ti", 0.0185), ("no", 0.0178), ("co", 0.0172), ("ne", 0.0168),
    ("ch", 0.0162), ("al", 0.0158), ("el", 0.0152), ("ra", 0.0148), ("le", 0.0142),
    ("io", 0.0138), ("de", 0.0132), ("na", 0.0128), ("li", 0.0122), ("ia", 0.0118),
    ("pe", 0.0112), ("se", 0.0108), ("at", 0.0102), ("ri", 0.0098), ("si", 0.0095),
];

const DUTCH: &[(&str, f64)] = &[
    ("en", 0.0498), ("de", 0.0339), ("an", 0.0256), ("er", 0.0251), ("ee", 0.0214),
    ("et", 0.0203), ("te", 0.0199), ("ge", 0.0195), ("nd", 0.0183), ("in", 0.0182),
    ("he", 0.0175), ("ij", 0.0171), ("va", 0.0168), ("aa", 0.0165), ("ve", 0.0158),
    ("oo", 0.0155), ("da", 0.0147), ("ie", 0.0145), ("or", 0.0140), ("ng", 0.0138),
    ("op", 0.0135), ("is", 0.0132), ("st", 0.0129), ("re", 0.0125), ("el", 0.0122),
    ("ni", 0.0118), ("me", 0.0115), ("we", 0.0112), ("be", 0.0108), ("al", 0.0105),
];

fn raw_table(lang: Language) -> &'static [(&'static str, f64)] {
    match lang {
        Language::English => ENGLISH,
        Language::French => FRENCH,
        Language::German => GERMAN,
        Language::Italian => ITALIAN,
        Language::Dutch => DUTCH,
    }
}

/// "th" 형태의 키를 바이그램 튜플로 변환
fn parse_bigram(key: &str) -> Option<Bigram> {
    let mut chars = key.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}

lazy_static! {
    pub(super) static ref TABLES: LanguageMap<BigramFrequencyTable> = LanguageMap::from_fn(|lang| {
        raw_table(lang)
            .iter()
            .filter_map(|&(key, freq)| parse_bigram(key).map(|bigram| (bigram, freq)))
            .collect()
    });
}
