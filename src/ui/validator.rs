//! 입력 텍스트 검증
//!
//! 감지기는 어떤 입력도 거부하지 않으므로, 의미 없는 입력은 여기서 걸러냅니다.
//! 문자가 없는 입력은 숫자뿐인지, 기호뿐인지에 따라 다른 오류를 돌려줍니다.

use std::fmt;

/// 입력 검증 오류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// 비어 있거나 공백뿐인 텍스트
    Empty,
    /// 공백을 빼면 숫자뿐인 텍스트
    OnlyDigits,
    /// 공백을 빼면 문자도 숫자도 없는 텍스트
    OnlySpecialCharacters,
    /// 숫자와 기호가 섞였지만 문자가 없는 텍스트
    NoLetters,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Error: The text is empty. Please enter some text."),
            ValidationError::OnlyDigits => write!(
                f,
                "Error: The text contains only numbers. Please include some letters for frequency analysis."
            ),
            ValidationError::OnlySpecialCharacters => write!(
                f,
                "Error: The text contains only special characters. Please include some letters for frequency analysis."
            ),
            ValidationError::NoLetters => write!(
                f,
                "Error: No letters found in the text. Please include some letters for frequency analysis."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// 알파벳 문자(악센트 포함)가 하나라도 있는지 검사
pub fn has_letters(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

fn non_whitespace(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| !c.is_whitespace())
}

/// 공백을 제외한 모든 문자가 숫자인지 검사 (빈 텍스트는 false)
pub fn contains_only_digits(text: &str) -> bool {
    !text.trim().is_empty() && non_whitespace(text).all(char::is_numeric)
}

/// 공백을 제외한 모든 문자가 문자도 숫자도 아닌지 검사 (빈 텍스트는 false)
pub fn contains_only_special_characters(text: &str) -> bool {
    !text.trim().is_empty() && !non_whitespace(text).any(char::is_alphanumeric)
}

/// 감지 전에 입력 검증
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if !has_letters(text) {
        if contains_only_digits(text) {
            return Err(ValidationError::OnlyDigits);
        }
        if contains_only_special_characters(text) {
            return Err(ValidationError::OnlySpecialCharacters);
        }
        return Err(ValidationError::NoLetters);
    }
    Ok(())
}
