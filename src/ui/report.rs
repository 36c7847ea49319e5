//! 터미널 감지 리포트
//!
//! 텍스트 통계, 신호별 점수표, 불용어 일치 수, 알파벳 빈도 비교표를 출력합니다.
//! 모든 출력은 `io::Write`로 보내므로 테스트에서 버퍼에 받아 검사할 수 있습니다.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::analysis::{
    index_of_coincidence, letter_distribution, CombinedDetector, Detection, Signal,
};
use crate::config::LangfreqConfig;
use crate::core::text::word_count;
use crate::core::Language;
use crate::reference::{self, ALPHABET};

const SCORE_BORDER: &str =
    "+---------------+-----------+-----------+-----------+-----------+-----------+-----------+";
const LETTER_BORDER: &str =
    "+--------+----------+----------+----------+----------+----------+----------+";

/// 리포트 출력 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub color: bool,
    pub show_stopword_counts: bool,
    pub show_letter_table: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_stopword_counts: true,
            show_letter_table: true,
        }
    }
}

impl From<&LangfreqConfig> for ReportOptions {
    fn from(config: &LangfreqConfig) -> Self {
        Self {
            color: config.color,
            show_stopword_counts: config.show_stopword_counts,
            show_letter_table: config.show_letter_table,
        }
    }
}

/// 빈도 차이(퍼센트 포인트)에 따른 셀 색상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceShade {
    Close,
    Moderate,
    Plain,
    Far,
}

impl DifferenceShade {
    /// 0.5 미만 Close, 1.0 미만 Moderate, 2.0 초과 Far
    pub fn for_difference(difference: f64) -> Self {
        if difference < 0.5 {
            DifferenceShade::Close
        } else if difference < 1.0 {
            DifferenceShade::Moderate
        } else if difference > 2.0 {
            DifferenceShade::Far
        } else {
            DifferenceShade::Plain
        }
    }

    fn paint(self, cell: String, color: bool) -> String {
        if !color {
            return cell;
        }
        match self {
            DifferenceShade::Close => cell.green().to_string(),
            DifferenceShade::Moderate => cell.yellow().to_string(),
            DifferenceShade::Far => cell.red().to_string(),
            DifferenceShade::Plain => cell,
        }
    }
}

/// 감지 결과 전체 리포트 출력
pub fn write_report<W: Write>(
    out: &mut W,
    text: &str,
    detection: &Detection,
    detector: &CombinedDetector,
    options: &ReportOptions,
) -> io::Result<()> {
    write_statistics(out, text, detection)?;
    write_score_table(out, detection)?;

    if options.show_stopword_counts {
        write_stopword_counts(out, text, detector)?;
    }
    if options.show_letter_table {
        write_letter_table(out, text, options.color)?;
    }
    Ok(())
}

fn write_statistics<W: Write>(out: &mut W, text: &str, detection: &Detection) -> io::Result<()> {
    writeln!(
        out,
        "\nText Statistics: {} characters, {} words",
        detection.letter_count,
        word_count(text)
    )?;
    writeln!(
        out,
        "Calculated Index of Coincidence: {:.4}",
        index_of_coincidence(text)
    )
}

fn write_score_table<W: Write>(out: &mut W, detection: &Detection) -> io::Result<()> {
    writeln!(out, "\nLanguage Detection Results:")?;
    writeln!(out, "{}", SCORE_BORDER)?;
    writeln!(
        out,
        "| Language      | Frequency |  N-grams  | Stopwords |    IC     |Levenshtein| Combined  |"
    )?;
    writeln!(out, "{}", SCORE_BORDER)?;

    for (lang, combined) in detection.combined.ranked() {
        let mut row = format!("| {:<13} |", lang.display_name());
        for signal in Signal::ALL {
            let percent = detection.signal(signal).normalized[lang] * 100.0;
            row.push_str(&format!(" {:>8.2}% |", percent));
        }
        row.push_str(&format!(" {:>8.2}%|", combined * 100.0));
        if lang == detection.language {
            row.push_str(" *");
        }
        writeln!(out, "{}", row)?;
    }

    writeln!(out, "{}", SCORE_BORDER)?;
    writeln!(out, "* = Best Match")
}

fn write_stopword_counts<W: Write>(
    out: &mut W,
    text: &str,
    detector: &CombinedDetector,
) -> io::Result<()> {
    let counts = detector.stopword_analyzer().match_counts(&text.to_lowercase());
    let mut entries: Vec<(Language, usize)> = counts.iter().map(|(l, &c)| (l, c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    writeln!(out, "\nStopword Matches per Language:")?;
    for (lang, count) in entries {
        writeln!(out, "  {}: {} matches", lang.display_name(), count)?;
    }
    Ok(())
}

fn write_letter_table<W: Write>(out: &mut W, text: &str, color: bool) -> io::Result<()> {
    let input = letter_distribution(text);

    writeln!(out, "\nLetter Frequencies Comparison:")?;
    writeln!(out, "{}", LETTER_BORDER)?;
    write!(out, "| Letter | Input    |")?;
    for lang in Language::ALL {
        write!(out, " {:<8} |", lang.display_name())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", LETTER_BORDER)?;

    for (idx, letter) in ALPHABET.iter().enumerate() {
        let input_percent = input[idx] * 100.0;
        write!(out, "| {:<6} | {:>7.2}% |", letter, input_percent)?;

        for lang in Language::ALL {
            let reference_percent = reference::letter_frequencies(lang)[idx] * 100.0;
            let shade = DifferenceShade::for_difference((input_percent - reference_percent).abs());
            let cell = shade.paint(format!("{:>7.2}%", reference_percent), color);
            write!(out, " {} |", cell)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", LETTER_BORDER)?;

    writeln!(out, "\nColor Legend:")?;
    writeln!(
        out,
        "{}",
        DifferenceShade::Close.paint("Green: Very close match (difference < 0.5%)".to_string(), color)
    )?;
    writeln!(
        out,
        "{}",
        DifferenceShade::Moderate.paint("Yellow: Moderate match (difference < 1.0%)".to_string(), color)
    )?;
    writeln!(
        out,
        "{}",
        DifferenceShade::Far.paint("Red: Large difference (difference > 2.0%)".to_string(), color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, options: ReportOptions) -> String {
        let detector = CombinedDetector::new();
        let detection = detector.analyze(text);
        let mut buffer = Vec::new();
        write_report(&mut buffer, text, &detection, &detector, &options).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn plain() -> ReportOptions {
        ReportOptions {
            color: false,
            ..ReportOptions::default()
        }
    }

    #[test]
    fn test_difference_shades() {
        assert_eq!(DifferenceShade::for_difference(0.0), DifferenceShade::Close);
        assert_eq!(DifferenceShade::for_difference(0.49), DifferenceShade::Close);
        assert_eq!(DifferenceShade::for_difference(0.5), DifferenceShade::Moderate);
        assert_eq!(DifferenceShade::for_difference(1.5), DifferenceShade::Plain);
        assert_eq!(DifferenceShade::for_difference(2.0), DifferenceShade::Plain);
        assert_eq!(DifferenceShade::for_difference(2.01), DifferenceShade::Far);
    }

    #[test]
    fn test_best_match_marked() {
        let report = render("de het een van en", plain());
        let marked: Vec<&str> = report.lines().filter(|l| l.ends_with(" *")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].starts_with("| Dutch"));
        assert!(report.contains("* = Best Match"));
    }

    #[test]
    fn test_rows_sorted_by_combined() {
        let report = render("the quick brown fox jumps over the lazy dog", plain());
        let first_row = report
            .lines()
            .find(|l| l.starts_with("| ") && !l.starts_with("| Language") && !l.starts_with("| Letter"))
            .unwrap();
        assert!(first_row.starts_with("| English"));
    }

    #[test]
    fn test_statistics() {
        let report = render("Hello World", plain());
        assert!(report.contains("Text Statistics: 10 characters, 2 words"));
        assert!(report.contains("Calculated Index of Coincidence:"));
    }

    #[test]
    fn test_stopword_counts_descending() {
        let report = render("the and of this was were have", plain());
        let section: Vec<&str> = report
            .lines()
            .skip_while(|l| !l.starts_with("Stopword Matches"))
            .skip(1)
            .take(Language::COUNT)
            .collect();
        assert_eq!(section[0], "  English: 7 matches");
        assert_eq!(section[1], "  Dutch: 2 matches");
        assert_eq!(section[2], "  German: 1 matches");
    }

    #[test]
    fn test_letter_table_rows() {
        let report = render("aaaa", plain());
        let rows: Vec<&str> = report.lines().filter(|l| l.starts_with("| ") && l.len() > 2).collect();
        assert!(rows.iter().any(|l| l.starts_with("| a      | 100.00% |")));
        assert!(rows.iter().any(|l| l.starts_with("| z      |    0.00% |")));
        assert!(report.contains("Color Legend:"));
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn test_sections_can_be_hidden() {
        let options = ReportOptions {
            color: false,
            show_stopword_counts: false,
            show_letter_table: false,
        };
        let report = render("hello world", options);
        assert!(!report.contains("Stopword Matches"));
        assert!(!report.contains("Letter Frequencies"));
        assert!(report.contains("Language Detection Results:"));
    }

    #[test]
    fn test_options_from_config() {
        let mut config = LangfreqConfig::default();
        config.color = false;
        config.show_letter_table = false;
        let options = ReportOptions::from(&config);
        assert!(!options.color);
        assert!(options.show_stopword_counts);
        assert!(!options.show_letter_table);
    }
}
