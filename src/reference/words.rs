//! 언어별 불용어 집합과 편집 거리 비교용 상용어 목록
//!
//! 불용어는 정확 일치로만 비교됩니다. 상용어 목록에는 악센트 문자가 그대로
//! 남아 있으며, a-z만 남기는 불용어 토큰화와 달리 공백 분리 토큰과 비교됩니다.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::core::{Language, LanguageMap};

const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "time", "no", "just", "him", "know", "take",
    "people", "into", "year", "your", "good", "some", "could", "them", "see", "other",
    "than", "then", "now", "look", "only", "come", "its", "over", "think", "also",
    "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
    "is", "are", "was", "were", "been", "being", "has", "had", "does", "did",
    "shall", "should", "may", "might", "must", "am", "very", "here", "where", "why",
];

const FRENCH_STOPWORDS: &[&str] = &[
    "le", "la", "les", "de", "et", "un", "une", "que", "pour", "dans",
    "ce", "il", "qui", "ne", "sur", "se", "pas", "plus", "par", "je",
    "avec", "tout", "faire", "son", "mettre", "autre", "on", "mais", "nous", "comme",
    "ou", "si", "leur", "elle", "peu", "aussi", "mon", "puis", "donc", "votre",
    "au", "aux", "du", "des", "est", "sont", "ont", "ete", "cette", "ces",
    "vous", "tu", "ton", "ta", "tes", "mes", "nos", "vos", "ses", "lui",
    "eux", "cela", "ceci", "ci", "ici", "moi", "toi", "soi", "quel", "quelle",
    "quoi", "dont", "peut", "fait", "bien", "meme", "entre", "apres", "avant", "sous",
    "sans", "chez", "vers", "jusque", "depuis", "pendant", "selon", "contre", "tres", "encore",
    "avoir", "etre", "dit", "dit", "quand", "comment", "pourquoi", "toujours", "jamais", "rien",
];

const GERMAN_STOPWORDS: &[&str] = &[
    "der", "die", "das", "und", "in", "sein", "zu", "haben", "mit", "fur",
    "nicht", "ich", "auf", "sie", "es", "sich", "ein", "auch", "von", "so",
    "aber", "bei", "nur", "noch", "werden", "jetzt", "nach", "bis", "wenn", "oder",
    "aus", "durch", "schon", "dieser", "dann", "unter", "kann", "uber", "mich", "ihm",
    "den", "dem", "des", "einer", "einem", "einen", "eines", "ist", "sind", "war",
    "waren", "wird", "wir", "ihr", "ihre", "ihrem", "ihren", "ihrer", "als", "wie",
    "man", "doch", "weil", "was", "hier", "da", "wo", "wer", "wen", "wem",
    "sein", "seine", "seinem", "seinen", "seiner", "mein", "meine", "meinem", "meinen", "meiner",
    "dein", "deine", "deinem", "deinen", "deiner", "uns", "euch", "diese", "dieses", "diesem",
    "diesen", "viel", "mehr", "sehr", "kein", "keine", "keinem", "keinen", "keiner", "selbst",
];

const ITALIAN_STOPWORDS: &[&str] = &[
    "il", "di", "che", "la", "in", "non", "un", "per", "sono", "una",
    "ma", "come", "da", "ho", "ci", "questo", "qui", "chi", "mi", "ha",
    "lei", "si", "lo", "dove", "nella", "sua", "cosa", "tu", "quando", "piu",
    "anche", "gli", "dei", "delle", "della", "tutto", "fare", "tra", "essere", "molto",
    "del", "al", "dal", "nel", "sul", "con", "alla", "dalla", "nella", "sulla",
    "ai", "dai", "nei", "sui", "alle", "dalle", "nelle", "sulle", "gli", "le",
    "io", "noi", "voi", "loro", "lui", "essa", "esso", "esse", "essi", "mio",
    "mia", "miei", "mie", "tuo", "tua", "tuoi", "tue", "suo", "suoi", "sue",
    "nostro", "nostra", "nostri", "nostre", "vostro", "vostra", "vostri", "vostre", "questo", "questa",
    "questi", "queste", "quello", "quella", "quelli", "quelle", "stato", "stata", "stati", "state",
];

const DUTCH_STOPWORDS: &[&str] = &[
    "de", "het", "een", "van", "en", "in", "is", "dat", "op", "te",
    "zijn", "voor", "niet", "met", "hij", "ik", "je", "zij", "maar", "er",
    "dan", "om", "aan", "nog", "bij", "door", "na", "naar", "uit", "wie",
    "of", "zal", "waar", "was", "wel", "nu", "geen", "zou", "heeft", "meer",
    "worden", "kan", "ook", "als", "dit", "tot", "wat", "hebben", "mijn", "over",
    "deze", "hun", "werd", "haar", "zo", "worden", "wij", "al", "waren", "veel",
    "me", "ben", "tegen", "men", "hem", "iets", "toch", "reeds", "hier", "ons",
    "die", "der", "zelf", "alleen", "ander", "andere", "onder", "zonder", "echter", "dus",
    "eens", "heel", "ieder", "alle", "omdat", "wanneer", "zeer", "altijd", "misschien", "eigen",
    "jullie", "moeten", "mogen", "willen", "kunnen", "zullen", "gaan", "komen", "doen", "maken",
];

const ENGLISH_COMMON: &[&str] = &["the", "be", "to", "of", "and", "a", "in", "that", "have", "i"];
const FRENCH_COMMON: &[&str] = &["le", "la", "les", "de", "et", "être", "avoir", "que", "pour", "dans"];
const GERMAN_COMMON: &[&str] = &["der", "die", "das", "und", "in", "sein", "zu", "haben", "mit", "für"];
const ITALIAN_COMMON: &[&str] = &["il", "di", "che", "è", "la", "in", "non", "un", "per", "sono"];
const DUTCH_COMMON: &[&str] = &["de", "het", "een", "van", "en", "in", "is", "dat", "op", "te"];

fn raw_stopwords(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::English => ENGLISH_STOPWORDS,
        Language::French => FRENCH_STOPWORDS,
        Language::German => GERMAN_STOPWORDS,
        Language::Italian => ITALIAN_STOPWORDS,
        Language::Dutch => DUTCH_STOPWORDS,
    }
}

/// 편집 거리 비교용 상용어 (순서 유지)
pub(super) fn common_words(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::English => ENGLISH_COMMON,
        Language::French => FRENCH_COMMON,
        Language::German => GERMAN_COMMON,
        Language::Italian => ITALIAN_COMMON,
        Language::Dutch => DUTCH_COMMON,
    }
}

lazy_static! {
    /// 언어별 불용어 집합 (목록의 중복 항목은 하나로 합쳐짐)
    pub(super) static ref STOPWORDS: LanguageMap<HashSet<&'static str>> =
        LanguageMap::from_fn(|lang| raw_stopwords(lang).iter().copied().collect());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopword_membership() {
        assert!(STOPWORDS[Language::English].contains("the"));
        assert!(STOPWORDS[Language::French].contains("avec"));
        assert!(STOPWORDS[Language::German].contains("und"));
        assert!(STOPWORDS[Language::Italian].contains("della"));
        assert!(STOPWORDS[Language::Dutch].contains("het"));

        assert!(!STOPWORDS[Language::English].contains("und"));
    }

    #[test]
    fn test_shared_stopwords() {
        // "de"는 프랑스어와 네덜란드어 양쪽 불용어
        assert!(STOPWORDS[Language::French].contains("de"));
        assert!(STOPWORDS[Language::Dutch].contains("de"));
        assert!(!STOPWORDS[Language::German].contains("de"));
    }

    #[test]
    fn test_duplicates_collapse() {
        // "worden"은 원본 목록에 두 번 등장
        let raw = raw_stopwords(Language::Dutch);
        assert_eq!(raw.iter().filter(|w| **w == "worden").count(), 2);
        assert!(STOPWORDS[Language::Dutch].len() < raw.len());
    }

    #[test]
    fn test_stopwords_are_lowercase() {
        for lang in Language::ALL {
            for word in STOPWORDS[lang].iter() {
                assert_eq!(*word, word.to_lowercase(), "{} 불용어 대소문자: {}", lang, word);
            }
        }
    }

    #[test]
    fn test_common_words() {
        for lang in Language::ALL {
            assert_eq!(common_words(lang).len(), 10, "{} 상용어 수", lang);
        }
        assert!(common_words(Language::French).contains(&"être"));
        assert!(common_words(Language::German).contains(&"für"));
        assert!(common_words(Language::Italian).contains(&"è"));
    }
}
