//! 줄 단위 구분자 감지 및 토큰 분리

use serde::{Deserialize, Serialize};

/// 구분자 설정
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = "\t")]
    Tab,
    #[serde(rename = " ")]
    Space,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "|")]
    Pipe,
    #[serde(rename = ";")]
    Semicolon,
}

/// 자동 감지 후보 (동점이면 앞선 후보 우선)
const CANDIDATES: [char; 6] = [',', '\t', ' ', '/', '|', ';'];

impl Delimiter {
    /// 지정된 구분자 문자. 자동이면 None
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Auto => None,
            Self::Comma => Some(','),
            Self::Tab => Some('\t'),
            Self::Space => Some(' '),
            Self::Slash => Some('/'),
            Self::Pipe => Some('|'),
            Self::Semicolon => Some(';'),
        }
    }

    /// 이 줄에 사용할 구분자 결정
    pub fn resolve(self, line: &str) -> char {
        self.as_char().unwrap_or_else(|| detect_delimiter(line))
    }
}

/// 가장 많이 등장한 후보 문자를 구분자로 선택
///
/// 아무 후보도 없으면 공백
pub fn detect_delimiter(line: &str) -> char {
    let mut best = (' ', 0);
    for candidate in CANDIDATES {
        let count = line.matches(candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

/// 구분자로 나누고 앞뒤 공백 제거, 빈 토큰 제외
pub fn tokenize(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
