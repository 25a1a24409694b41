//! 연락처 레코드

use serde::{Deserialize, Serialize};

use crate::normalize::validate_phone;

/// 전화번호를 알 수 없을 때 채워 넣는 기본값
pub const SENTINEL_PHONE: &str = "010-0000-0000";

/// 연락처
///
/// 식별자는 없습니다. 중복 판별은 정규화된 전화번호로만 합니다.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl Contact {
    /// 이름과 전화번호만으로 생성
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// 내보내기 가능 여부: 이름이 비어있지 않고 전화번호가 유효해야 함
    pub fn is_valid_for_export(&self) -> bool {
        !self.name.trim().is_empty() && validate_phone(&self.phone)
    }

    /// 전화번호가 기본값(미확인)인지 확인
    pub fn has_sentinel_phone(&self) -> bool {
        self.phone == SENTINEL_PHONE
    }
}

/// 값이 있고 비어있지 않은 선택 필드만 돌려줌
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
