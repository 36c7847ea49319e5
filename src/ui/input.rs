//! 대화형 텍스트 입력

use std::io::{self, BufRead, Write};

/// 입력 안내 문구
pub const PROMPT: &str = "Enter or paste your text (press Enter twice to finish):";

/// 연속된 빈 줄 두 개 또는 EOF까지 읽기
///
/// 각 줄 끝에 개행을 붙여 이어 붙이며, 종료를 알린 두 번째 빈 줄은 포함하지 않습니다.
pub fn read_text<R: BufRead>(reader: R) -> io::Result<String> {
    let mut text = String::new();
    let mut previous_blank = false;

    for line in reader.lines() {
        let line = line?;
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            break;
        }
        text.push_str(&line);
        text.push('\n');
        previous_blank = blank;
    }

    Ok(text)
}

/// 안내 문구 출력 후 표준 입력에서 읽기
pub fn prompt_stdin() -> io::Result<String> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", PROMPT)?;
    stdout.flush()?;
    read_text(io::stdin().lock())
}
