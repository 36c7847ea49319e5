//! langfreq - 통계 기반 언어 감지 CLI

use clap::Parser;
use langfreq::config::{config_path, load_config_or_default, save_config, LangfreqConfig};
use langfreq::ui::{prompt_stdin, validate_text, write_report, Args, InputSource, ReportOptions};
use langfreq::CombinedDetector;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 로깅 초기화 (기본 warn, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let path = args.config.clone().unwrap_or_else(config_path);

    if args.init_config {
        return match save_config(&LangfreqConfig::default(), &path) {
            Ok(()) => {
                println!("Wrote default configuration to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    // 설정 로드
    let config = load_config_or_default(&path);

    let text = match read_input(&args.input_source()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: could not read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = validate_text(&text) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let detector = CombinedDetector::with_config(config.detector.clone());
    let detection = detector.analyze(&text);
    log::info!("감지 언어: {}", detection.language);

    let mut stdout = io::stdout().lock();
    let result = if args.json {
        serde_json::to_string_pretty(&detection)
            .map_err(io::Error::from)
            .and_then(|json| writeln!(stdout, "{}", json))
    } else {
        let mut options = ReportOptions::from(&config);
        if args.no_color {
            options.color = false;
        }
        write_report(&mut stdout, &text, &detection, &detector, &options)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // 파이프가 먼저 닫힌 경우는 정상 종료로 취급
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: could not write output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_input(source: &InputSource) -> io::Result<String> {
    match source {
        InputSource::File(path) => fs::read_to_string(path),
        InputSource::Inline(text) => Ok(text.clone()),
        InputSource::Prompt => prompt_stdin(),
    }
}
