//! 텍스트 정규화 및 토큰 분리 유틸리티
//!
//! 분석기마다 토큰화 규칙이 다르므로 각 규칙을 별도 함수로 둡니다.

/// 소문자로 접은 문자 스트림
pub fn folded_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

/// 소문자 ASCII 알파벳(a-z)만 남긴 문자 스트림
pub fn ascii_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    folded_chars(text).filter(char::is_ascii_lowercase)
}

/// ASCII 알파벳 개수 (가중치 구간 선택용)
pub fn letter_count(text: &str) -> usize {
    ascii_letters(text).count()
}

/// 알파벳 문자 개수 (악센트 문자 포함)
pub fn alphabetic_count(text: &str) -> usize {
    folded_chars(text).filter(|c| c.is_alphabetic()).count()
}

/// a-z 이외의 문자를 모두 구분자로 보고 분리한 토큰
///
/// "être" → ["tre"] 처럼 악센트 문자도 구분자로 취급됨
pub fn ascii_word_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// 공백 기준 토큰 (구두점 유지)
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// 공백 기준 단어 수
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
