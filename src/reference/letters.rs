//! 언어별 알파벳 빈도표 (a-z 순서, 상대 빈도)
//!
//! 각 표의 합은 약 1.0입니다. 악센트 문자 비중만큼 1.0보다 조금 작을 수 있습니다.

/// a-z 26개 슬롯의 상대 빈도
pub type LetterFrequencyTable = [f64; 26];

/// 표 인덱스 순서의 알파벳
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// 소문자 ASCII 알파벳의 표 인덱스
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

pub(super) const ENGLISH: LetterFrequencyTable = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015,
    0.06094, 0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749,
    0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056, 0.02758,
    0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

pub(super) const FRENCH: LetterFrequencyTable = [
    0.07636, 0.00901, 0.03260, 0.03669, 0.14715, 0.01066, 0.01043,
    0.00737, 0.07529, 0.00545, 0.00049, 0.05456, 0.02968, 0.07095,
    0.05796, 0.02521, 0.01362, 0.06693, 0.07948, 0.07244, 0.06311,
    0.01838, 0.00114, 0.00427, 0.00128, 0.00326,
];

pub(super) const GERMAN: LetterFrequencyTable = [
    0.06516, 0.01886, 0.02732, 0.05076, 0.16396, 0.01656, 0.03009,
    0.04577, 0.07550, 0.00268, 0.01417, 0.03437, 0.02534, 0.09776,
    0.02510, 0.00670, 0.00018, 0.07003, 0.07270, 0.06154, 0.04166,
    0.00846, 0.01921, 0.00034, 0.00039, 0.01134,
];

pub(super) const ITALIAN: LetterFrequencyTable = [
    0.11745, 0.00927, 0.04501, 0.03736, 0.11792, 0.01153, 0.01644,
    0.01539, 0.11285, 0.00001, 0.00009, 0.06510, 0.02512, 0.06883,
    0.09832, 0.03056, 0.00505, 0.06367, 0.04981, 0.05623, 0.03011,
    0.02097, 0.00033, 0.00003, 0.00020, 0.00495,
];

pub(super) const DUTCH: LetterFrequencyTable = [
    0.07490, 0.01580, 0.01240, 0.05930, 0.18910, 0.00810, 0.03400,
    0.02380, 0.06500, 0.01460, 0.02250, 0.03570, 0.02210, 0.10030,
    0.06060, 0.01570, 0.00009, 0.06410, 0.03730, 0.06790, 0.01990,
    0.02850, 0.01520, 0.00040, 0.00035, 0.01390,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('A'), None);
        assert_eq!(letter_index('é'), None);
        for (i, c) in ALPHABET.iter().enumerate() {
            assert_eq!(letter_index(*c), Some(i));
        }
    }

    #[test]
    fn test_well_known_peaks() {
        // 모든 언어에서 'e'가 최빈 또는 공동 최빈
        assert!((ENGLISH[4] - 0.12702).abs() < f64::EPSILON);
        assert!((DUTCH[4] - 0.18910).abs() < f64::EPSILON);
        // 이탈리아어는 'a'와 'e'가 거의 같음
        assert!((ITALIAN[0] - ITALIAN[4]).abs() < 0.001);
    }
}
