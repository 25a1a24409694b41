//! phonedrop - 붙여넣은 연락처 정리 및 vCard 내보내기

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use phonedrop::config::{config_path, load_config, save_config};
use phonedrop::naming::{NamingOptions, NumberFormat};
use phonedrop::{
    generate_multiple_vcards, validate_naming_template, DuplicatePolicy, Input, Pipeline,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Skip,
    KeepFirst,
    KeepLongest,
    Merge,
    SkipAll,
}

impl From<PolicyArg> for DuplicatePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Skip => Self::Skip,
            PolicyArg::KeepFirst => Self::KeepFirst,
            PolicyArg::KeepLongest => Self::KeepLongest,
            PolicyArg::Merge => Self::Merge,
            PolicyArg::SkipAll => Self::SkipAll,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Vcard,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "phonedrop", version, about = "붙여넣은 연락처를 정리해 vCard로 내보냅니다")]
struct Cli {
    /// 입력 파일 (.csv는 표 형식으로 읽음). 없으면 표준 입력
    #[arg(long, short, value_name = "PATH")]
    input: Option<PathBuf>,

    /// 설정 파일 경로
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 중복 처리 정책
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// 이름 템플릿 (예: "[{prefix}] {name}")
    #[arg(long)]
    template: Option<String>,

    /// 템플릿의 {prefix} 값
    #[arg(long, default_value = "")]
    prefix: String,

    /// 템플릿의 {suffix} 값
    #[arg(long, default_value = "")]
    suffix: String,

    /// 템플릿의 {number}를 001부터 채움
    #[arg(long)]
    number: bool,

    /// 입력 오류 자동 수정 끄기
    #[arg(long)]
    no_fix: bool,

    /// 출력 형식
    #[arg(long, value_enum, default_value_t = OutputFormat::Vcard)]
    format: OutputFormat,

    /// 적용된 설정을 설정 파일에 저장
    #[arg(long)]
    save_config: bool,
}

fn read_input(cli: &Cli) -> io::Result<Vec<u8>> {
    match &cli.input {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn is_csv(cli: &Cli) -> bool {
    cli.input
        .as_ref()
        .and_then(|p| p.extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드 후 명령줄 옵션으로 덮어쓰기
    let path = cli.config.clone().unwrap_or_else(config_path);
    let mut config = load_config(&path);

    if let Some(policy) = cli.policy {
        config.duplicate_policy = policy.into();
    }
    if cli.no_fix {
        config.auto_fix = false;
    }
    if let Some(template) = &cli.template {
        let validation = validate_naming_template(template);
        if !validation.is_valid {
            for error in &validation.errors {
                eprintln!("템플릿 오류: {}", error);
            }
            process::exit(2);
        }

        let mut naming = NamingOptions::new(template.as_str())
            .with_prefix(cli.prefix.as_str())
            .with_suffix(cli.suffix.as_str());
        if cli.number {
            naming = naming.with_auto_number(NumberFormat::ThreeDigits);
        }
        config.naming = Some(naming);
    }

    if cli.save_config {
        if let Err(e) = save_config(&config, &path) {
            log::error!("설정 저장 실패: {}", e);
        }
    }

    let raw = match read_input(&cli) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("입력을 읽을 수 없습니다: {}", e);
            process::exit(1);
        }
    };

    let pipeline = Pipeline::new(config);
    let report = if is_csv(&cli) {
        pipeline.run(Input::Csv(&raw))
    } else {
        let text = String::from_utf8_lossy(&raw);
        pipeline.run(Input::Text(&text))
    };

    for error in &report.errors {
        eprintln!("{}", error);
    }
    for suggestion in &report.suggestions {
        eprintln!("{}", suggestion);
    }
    if report.not_exportable > 0 {
        log::warn!("내보내기 불가 연락처 {}개", report.not_exportable);
    }

    match cli.format {
        OutputFormat::Vcard => println!("{}", generate_multiple_vcards(&report.contacts)),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON 직렬화 실패: {}", e);
                process::exit(1);
            }
        },
    }
}
