use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "langfreq",
    version,
    about = "Statistical language detector (English, French, German, Italian, Dutch)",
    long_about = "Detects the language of a text by combining letter frequencies, bigrams, stopwords, the index of coincidence and edit distance to common words, weighted by text length."
)]
pub struct Args {
    /// Text to analyze (words are joined with spaces)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print the detection as JSON instead of the report
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,

    /// Config file path (default: ~/.config/langfreq/config.json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long = "init-config", default_value_t = false)]
    pub init_config: bool,
}

/// 입력 출처
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Inline(String),
    Prompt,
}

impl Args {
    /// `--file` > 위치 인자 > 대화형 입력 순
    pub fn input_source(&self) -> InputSource {
        if let Some(path) = &self.file {
            InputSource::File(path.clone())
        } else if !self.text.is_empty() {
            InputSource::Inline(self.text.join(" "))
        } else {
            InputSource::Prompt
        }
    }
}
