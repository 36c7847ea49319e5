//! 명령줄 입출력 계층
//!
//! 인자 파싱, 입력 읽기, 입력 검증, 리포트 출력

pub mod args;
pub mod input;
pub mod report;
pub mod validator;

pub use args::{Args, InputSource};
pub use input::{prompt_stdin, read_text};
pub use report::{write_report, ReportOptions};
pub use validator::{validate_text, ValidationError};
