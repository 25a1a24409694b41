//! 붙여넣기 텍스트 스마트 파서
//!
//! 스프레드시트, 메신저, 메모장 등에서 복사한 여러 줄 텍스트를
//! 형식 지정 없이 연락처 목록으로 변환합니다.
//!
//! 줄마다 다음 순서로 처리합니다:
//!
//! 1. **구분자 감지**: `,` `\t` 공백 `/` `|` `;` 중 가장 많이 나온 문자
//! 2. **토큰 분리**: 앞뒤 공백 제거, 빈 토큰 제외
//! 3. **필드 분류**: 이메일 → 전화번호 → 회사 → 직책 → 메모 → 이름
//! 4. **검증**: 이름이 없으면 그 줄만 실패로 기록
//!
//! # 사용 예시
//!
//! ```
//! use phonedrop::parser::{smart_parse, ParseOptions};
//!
//! let result = smart_parse("홍길동 01012345678", &ParseOptions::default());
//! assert_eq!(result.contacts.len(), 1);
//! assert_eq!(result.contacts[0].phone, "010-1234-5678");
//! ```

mod classifier;
mod delimiter;
mod suggestion;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::contact::{Contact, SENTINEL_PHONE};
use crate::error::LineError;
use crate::normalize::{
    is_phone_number, normalize_phone, normalize_phone_number, validate_email, validate_phone,
};

pub use classifier::{FieldClassifier, KeywordClassifier, KeywordField};
pub use delimiter::{detect_delimiter, tokenize, Delimiter};
pub use suggestion::generate_suggestion;

/// 이름 위치 힌트
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NamePosition {
    #[default]
    Auto,
    /// 줄 첫 토큰이 번호면 마지막 토큰을 이름으로
    First,
    /// 줄 마지막 토큰이 번호면 첫 토큰을 이름으로
    Last,
}

/// 전화번호 처리 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFormat {
    #[default]
    #[serde(alias = "auto")]
    Normalize,
    /// 입력 그대로 유지
    Keep,
}

/// 전화번호가 없는 줄의 처리 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingPhonePolicy {
    /// `010-0000-0000` 기본값을 채움
    #[default]
    Sentinel,
    /// 해당 줄을 실패로 처리
    Reject,
}

/// 스마트 파서 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    #[serde(default)]
    pub delimiter: Delimiter,
    #[serde(default)]
    pub name_position: NamePosition,
    #[serde(default)]
    pub phone_format: PhoneFormat,
    #[serde(default)]
    pub missing_phone: MissingPhonePolicy,
}

/// 파싱 결과
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ParsedResult {
    pub contacts: Vec<Contact>,
    /// 0.0 ~ 100.0
    pub confidence: f64,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}

/// 한 줄에서 분류된 필드
#[derive(Debug, Default)]
struct LineFields {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    company: Option<String>,
    title: Option<String>,
    memo: Option<String>,
}

/// 스마트 파서
#[derive(Debug, Clone)]
pub struct SmartParser<C = KeywordClassifier> {
    options: ParseOptions,
    classifier: C,
}

impl SmartParser<KeywordClassifier> {
    /// 기본 한국어 키워드 분류기로 생성
    pub fn new(options: ParseOptions) -> Self {
        Self::with_classifier(options, KeywordClassifier::default())
    }
}

impl Default for SmartParser<KeywordClassifier> {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl<C: FieldClassifier> SmartParser<C> {
    /// 분류기를 지정하여 생성
    pub fn with_classifier(options: ParseOptions, classifier: C) -> Self {
        Self { options, classifier }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// 여러 줄 텍스트 파싱
    ///
    /// 줄 단위 실패는 `errors`에 기록되며 전체 처리를 중단하지 않습니다.
    pub fn parse(&self, text: &str) -> ParsedResult {
        let lines: Vec<&str> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut contacts = Vec::new();
        let mut errors = Vec::new();
        let mut suggestions = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let row = index + 1;
            match self.parse_line(line) {
                Ok(contact) => contacts.push(contact),
                Err(e) => {
                    log::debug!("{}행 파싱 실패: {} ({:?})", row, e, line);
                    errors.push(format!("{}행: {}", row, e));

                    if let Some(suggestion) = generate_suggestion(line) {
                        suggestions.push(format!("{}행 제안: {}", row, suggestion));
                    }
                }
            }
        }

        let duplicates = count_repeated_phones(&contacts);
        if duplicates > 0 {
            suggestions.push(format!(
                "중복 가능성: {}개의 연락처가 중복될 수 있습니다",
                duplicates
            ));
        }

        let confidence = calculate_confidence(contacts.len(), lines.len(), errors.len());

        ParsedResult {
            contacts,
            confidence,
            errors,
            suggestions,
        }
    }

    /// 한 줄을 연락처로 변환
    pub fn parse_line(&self, line: &str) -> Result<Contact, LineError> {
        let delimiter = self.options.delimiter.resolve(line);
        let tokens = tokenize(line, delimiter);
        if tokens.is_empty() {
            return Err(LineError::Empty);
        }

        let fields = self.extract_fields(&tokens);

        let name = fields
            .name
            .as_deref()
            .map(normalize_name)
            .filter(|n| !n.is_empty())
            .ok_or(LineError::MissingName)?;

        let phone = match fields.phone {
            Some(raw) => {
                let normalized = match self.options.phone_format {
                    PhoneFormat::Normalize => normalize_phone(&raw),
                    PhoneFormat::Keep => raw.clone(),
                };
                // 형식이 잘못되었어도 값이 있으면 그대로 보존
                if validate_phone(&normalized) {
                    normalized
                } else {
                    raw
                }
            }
            None => match self.options.missing_phone {
                MissingPhonePolicy::Sentinel => SENTINEL_PHONE.to_string(),
                MissingPhonePolicy::Reject => return Err(LineError::MissingPhone),
            },
        };

        Ok(Contact {
            name,
            phone,
            email: fields.email,
            company: fields.company,
            title: fields.title,
            memo: fields.memo,
        })
    }

    fn extract_fields(&self, tokens: &[&str]) -> LineFields {
        let mut fields = LineFields::default();

        for &token in tokens {
            if token.contains('@') && validate_email(token) {
                fields.email = Some(token.to_string());
                continue;
            }

            if is_phone_number(token) {
                fields.phone = Some(token.to_string());
                continue;
            }

            if let Some((field, value)) = self.classifier.classify(token) {
                match field {
                    KeywordField::Company => fields.company = Some(value),
                    KeywordField::Title => fields.title = Some(value),
                    KeywordField::Memo => fields.memo = Some(value),
                }
                continue;
            }

            if fields.name.is_none() {
                fields.name = Some(token.to_string());
            }
        }

        if let (Some(&first), Some(&last)) = (tokens.first(), tokens.last()) {
            if tokens.len() > 1 {
                let (phone, name) = match self.options.name_position {
                    NamePosition::First => (first, last),
                    NamePosition::Last => (last, first),
                    NamePosition::Auto => return fields,
                };
                // 다른 필드로 분류된 토큰은 이름으로 쓰지 않음
                if is_phone_number(phone) && self.is_unclassified(name) {
                    fields.phone = Some(phone.to_string());
                    fields.name = Some(name.to_string());
                }
            }
        }

        fields
    }

    fn is_unclassified(&self, token: &str) -> bool {
        !(token.contains('@') && validate_email(token))
            && !is_phone_number(token)
            && self.classifier.classify(token).is_none()
    }
}

/// 기본 설정으로 텍스트 파싱
pub fn smart_parse(text: &str, options: &ParseOptions) -> ParsedResult {
    SmartParser::new(options.clone()).parse(text)
}

/// 이름에서 괄호 문자 제거
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '(' | ')' | '{' | '}' | '[' | ']'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// 같은 번호가 두 번째 이후로 나온 횟수 (기본값 번호는 제외)
fn count_repeated_phones(contacts: &[Contact]) -> usize {
    let mut seen = HashSet::new();
    contacts
        .iter()
        .filter(|c| !c.has_sentinel_phone())
        .filter(|c| !seen.insert(normalize_phone_number(&c.phone)))
        .count()
}

/// 신뢰도 = 성공률 - 오류 페널티 (0 ~ 100)
fn calculate_confidence(parsed: usize, total_lines: usize, error_count: usize) -> f64 {
    if total_lines == 0 {
        return 0.0;
    }

    let total = total_lines as f64;
    let success_rate = parsed as f64 / total * 100.0;
    let error_penalty = error_count as f64 / total * 20.0;

    (success_rate - error_penalty).clamp(0.0, 100.0)
}
