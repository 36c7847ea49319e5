//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::analysis::DetectorConfig;

/// langfreq 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LangfreqConfig {
    /// 리포트 색상 출력
    #[serde(default = "default_color")]
    pub color: bool,
    /// 불용어 일치 수 표시
    #[serde(default = "default_show_stopword_counts")]
    pub show_stopword_counts: bool,
    /// 알파벳 빈도 비교표 표시
    #[serde(default = "default_show_letter_table")]
    pub show_letter_table: bool,
    /// 감지기 상수와 가중치
    #[serde(default)]
    pub detector: DetectorConfig,
}

fn default_color() -> bool {
    true
}

fn default_show_stopword_counts() -> bool {
    true
}

fn default_show_letter_table() -> bool {
    true
}

impl Default for LangfreqConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            show_stopword_counts: default_show_stopword_counts(),
            show_letter_table: default_show_letter_table(),
            detector: DetectorConfig::default(),
        }
    }
}

/// 설정 파일 오류
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {}", e),
            ConfigError::Parse(msg) => write!(f, "config file parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// 설정 파일 경로: ~/.config/langfreq/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("langfreq").join("config.json")
}

/// 설정 파일 로드 및 검증
pub fn load_config(path: &Path) -> Result<LangfreqConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LangfreqConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.detector.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// 설정 파일 로드 (실패 시 기본값)
///
/// 파일이 없으면 조용히 기본값을 쓰고, 그 밖의 오류는 경고를 남깁니다.
pub fn load_config_or_default(path: &Path) -> LangfreqConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            LangfreqConfig::default()
        }
        Err(e) => {
            log::warn!("{} ({}), using defaults", e, path.display());
            LangfreqConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &LangfreqConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
