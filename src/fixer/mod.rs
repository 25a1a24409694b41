//! 입력 오류 자동 수정 모듈
//!
//! 전화번호/이메일/이름의 흔한 입력 실수를 찾아 신뢰도와 함께 수정안을 제시합니다.
//! 탐지는 입력을 바꾸지 않으며, 신뢰도 90 이상인 수정안만 자동 적용됩니다.
//! 나머지는 `apply_fixes`로 사용자가 고른 항목만 반영합니다.

mod email;
mod name;
mod phone;

use serde::Serialize;

use crate::contact::Contact;

pub use email::{detect_email_errors, DOMAIN_TYPOS};
pub use name::detect_name_errors;
pub use phone::detect_phone_errors;

/// 자동 적용 기준 신뢰도
pub const AUTO_FIX_THRESHOLD: u8 = 90;

/// 수정 대상 필드
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FixKind {
    Phone,
    Email,
    Name,
}

impl FixKind {
    /// 화면/선택 키에 쓰는 필드 이름
    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "전화번호",
            Self::Email => "이메일",
            Self::Name => "이름",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "전화번호" => Some(Self::Phone),
            "이메일" => Some(Self::Email),
            "이름" => Some(Self::Name),
            _ => None,
        }
    }
}

/// 신뢰도 구간
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            90..=u8::MAX => Self::High,
            70..=89 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// 수정 제안
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorFix {
    /// 탐지 단계에서는 필드 이름, 결과에서는 `"{행}행 {필드}"`
    pub field: String,
    pub original: String,
    pub suggested: String,
    #[serde(rename = "type")]
    pub kind: FixKind,
    /// 0 ~ 100
    pub confidence: u8,
    pub description: String,
}

impl ErrorFix {
    pub(crate) fn new(
        kind: FixKind,
        original: &str,
        suggested: impl Into<String>,
        confidence: u8,
        description: &str,
    ) -> Self {
        Self {
            field: kind.label().to_string(),
            original: original.to_string(),
            suggested: suggested.into(),
            kind,
            confidence,
            description: description.to_string(),
        }
    }

    pub fn is_auto_fixable(&self) -> bool {
        self.confidence >= AUTO_FIX_THRESHOLD
    }

    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FixStatistics {
    pub total_errors: usize,
    pub auto_fixed: usize,
    pub requires_confirmation: usize,
    /// 오류가 없으면 100
    pub fix_rate: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ErrorFixResult {
    /// 고신뢰 수정안이 자동 적용된 사본
    pub contacts: Vec<Contact>,
    pub fixes: Vec<ErrorFix>,
    pub statistics: FixStatistics,
}

/// 필드 라벨: `"{행}행 {필드}"`
pub fn row_field_label(row: usize, kind: FixKind) -> String {
    format!("{}행 {}", row, kind.label())
}

/// 선택 키: `"{행}-{필드}"`
pub fn selection_key(row: usize, kind: FixKind) -> String {
    format!("{}-{}", row, kind.label())
}

/// 자동 적용할 수정안: 기준 이상 중 신뢰도가 가장 높은 것 (동점이면 앞선 것)
fn best_auto_fix(fixes: &[ErrorFix]) -> Option<&ErrorFix> {
    fixes
        .iter()
        .filter(|f| f.is_auto_fixable())
        .fold(None, |best: Option<&ErrorFix>, f| match best {
            Some(b) if b.confidence >= f.confidence => Some(b),
            _ => Some(f),
        })
}

/// 모든 연락처의 오류 탐지 및 고신뢰 수정 자동 적용
pub fn detect_and_fix_errors(contacts: &[Contact]) -> ErrorFixResult {
    let mut fixes = Vec::new();
    let mut fixed_contacts = Vec::with_capacity(contacts.len());

    for (index, contact) in contacts.iter().enumerate() {
        let row = index + 1;
        let mut fixed = contact.clone();

        let phone_fixes = if contact.phone.is_empty() {
            Vec::new()
        } else {
            detect_phone_errors(&contact.phone)
        };
        if let Some(f) = best_auto_fix(&phone_fixes) {
            fixed.phone = f.suggested.clone();
        }

        let email_fixes = match contact.email.as_deref() {
            Some(email) if !email.is_empty() => detect_email_errors(email),
            _ => Vec::new(),
        };
        if let Some(f) = best_auto_fix(&email_fixes) {
            fixed.email = Some(f.suggested.clone());
        }

        let name_fixes = if contact.name.is_empty() {
            Vec::new()
        } else {
            detect_name_errors(&contact.name)
        };
        if let Some(f) = best_auto_fix(&name_fixes) {
            fixed.name = f.suggested.clone();
        }

        for mut fix in phone_fixes.into_iter().chain(email_fixes).chain(name_fixes) {
            fix.field = row_field_label(row, fix.kind);
            fixes.push(fix);
        }

        fixed_contacts.push(fixed);
    }

    let auto_fixed = fixes.iter().filter(|f| f.is_auto_fixable()).count();
    let total_errors = fixes.len();
    let fix_rate = if total_errors > 0 {
        auto_fixed as f64 / total_errors as f64 * 100.0
    } else {
        100.0
    };

    ErrorFixResult {
        contacts: fixed_contacts,
        statistics: FixStatistics {
            total_errors,
            auto_fixed,
            requires_confirmation: total_errors - auto_fixed,
            fix_rate,
        },
        fixes,
    }
}

/// 선택된 수정안만 적용한 새 목록 반환
///
/// 선택 키 형식은 `"{행}-{필드}"` (예: `"1-전화번호"`).
/// 같은 필드에 수정안이 여러 개면 첫 번째 것을 적용합니다.
pub fn apply_fixes(contacts: &[Contact], fixes: &[ErrorFix], selected: &[String]) -> Vec<Contact> {
    let mut result = contacts.to_vec();

    for key in selected {
        let Some((row, label)) = key.split_once('-') else {
            continue;
        };
        let (Ok(row), Some(kind)) = (row.parse::<usize>(), FixKind::from_label(label)) else {
            continue;
        };
        if row == 0 || row > result.len() {
            continue;
        }

        let field = row_field_label(row, kind);
        let Some(fix) = fixes.iter().find(|f| f.field == field) else {
            continue;
        };

        let contact = &mut result[row - 1];
        match kind {
            FixKind::Phone => contact.phone = fix.suggested.clone(),
            FixKind::Email => contact.email = Some(fix.suggested.clone()),
            FixKind::Name => contact.name = fix.suggested.clone(),
        }
    }

    result
}
