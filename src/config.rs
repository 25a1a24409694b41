//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dedup::DuplicatePolicy;
use crate::error::ConfigError;
use crate::naming::NamingOptions;
use crate::parser::ParseOptions;
use crate::transfer::TransferOptions;

/// phonedrop 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhonedropConfig {
    /// 붙여넣은 텍스트 파싱 방식
    #[serde(default)]
    pub parse: ParseOptions,
    /// 같은 번호를 가진 연락처 처리 방식
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// 신뢰도 높은 입력 오류 자동 수정
    #[serde(default = "default_auto_fix")]
    pub auto_fix: bool,
    /// 일괄 이름 변경 (없으면 이름 유지)
    #[serde(default)]
    pub naming: Option<NamingOptions>,
    #[serde(default)]
    pub transfer: TransferOptions,
}

fn default_auto_fix() -> bool {
    true
}

impl Default for PhonedropConfig {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            duplicate_policy: DuplicatePolicy::default(),
            auto_fix: default_auto_fix(),
            naming: None,
            transfer: TransferOptions::default(),
        }
    }
}

/// 기본 설정 파일 경로: ~/.config/phonedrop/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("phonedrop").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> PhonedropConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            PhonedropConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => PhonedropConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 읽기 실패, 기본값 사용 ({}): {}", path.display(), e);
            PhonedropConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &PhonedropConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
