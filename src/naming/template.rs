//! `{변수}` 템플릿 치환 엔진

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::error::TemplateError;
use crate::normalize::digits_only;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([^{}]+)\}").unwrap();
}

/// 사용할 수 있는 변수 이름
pub const PLACEHOLDERS: [&str; 11] = [
    "name",
    "phone",
    "email",
    "company",
    "title",
    "memo",
    "prefix",
    "suffix",
    "number",
    "department",
    "phone_last4",
];

/// 이름이 비어있을 때 `{name}` 대체값
pub const UNNAMED: &str = "미지정";

/// 자동 번호 형식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberFormat {
    #[default]
    #[serde(rename = "001")]
    ThreeDigits,
    #[serde(rename = "0001")]
    FourDigits,
    #[serde(rename = "A001")]
    Prefixed,
}

impl NumberFormat {
    pub fn format(self, number: usize) -> String {
        match self {
            Self::ThreeDigits => format!("{:03}", number),
            Self::FourDigits => format!("{:04}", number),
            Self::Prefixed => format!("A{:03}", number),
        }
    }
}

/// 일괄 이름 변경 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamingOptions {
    pub template: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub auto_number: bool,
    #[serde(default)]
    pub number_format: NumberFormat,
}

impl NamingOptions {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            prefix: String::new(),
            suffix: String::new(),
            auto_number: false,
            number_format: NumberFormat::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_auto_number(mut self, format: NumberFormat) -> Self {
        self.auto_number = true;
        self.number_format = format;
        self
    }
}

/// 알 수 없는 변수 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// 치환하지 못한 변수를 그대로 남김
    Lenient,
    /// 치환하지 못한 변수가 있으면 에러
    Strict,
}

/// 템플릿 검증 결과
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TemplateValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

fn resolve(placeholder: &str, contact: &Contact, options: &NamingOptions, row: usize) -> Option<String> {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    // "회사-부서" 형식이면 첫 '-' 기준으로 분리
    let (company, department) = match contact.company.as_deref() {
        Some(c) => c.split_once('-').unwrap_or((c, "")),
        None => ("", ""),
    };

    let value = match placeholder {
        "name" if contact.name.is_empty() => UNNAMED.to_string(),
        "name" => contact.name.clone(),
        "phone" => contact.phone.clone(),
        "email" => text(&contact.email),
        "company" => company.to_string(),
        "department" => department.to_string(),
        "title" => text(&contact.title),
        "memo" => text(&contact.memo),
        "prefix" => options.prefix.clone(),
        "suffix" => options.suffix.clone(),
        "number" if options.auto_number => options.number_format.format(row),
        "phone_last4" => {
            let digits = digits_only(&contact.phone);
            digits[digits.len().saturating_sub(4)..].to_string()
        }
        _ => return None,
    };
    Some(value)
}

/// 한 연락처의 새 이름 생성 (`row`는 1부터)
pub fn render_name(
    contact: &Contact,
    options: &NamingOptions,
    row: usize,
    mode: RenderMode,
) -> Result<String, TemplateError> {
    let template = options.template.as_str();
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        rendered.push_str(&template[last..whole.start()]);
        last = whole.end();

        let name = name.as_str();
        match resolve(name, contact, options, row) {
            Some(value) => rendered.push_str(&value),
            None if mode == RenderMode::Lenient => rendered.push_str(whole.as_str()),
            None if PLACEHOLDERS.contains(&name) => {
                return Err(TemplateError::UnresolvedPlaceholder(name.to_string()))
            }
            None => return Err(TemplateError::UnknownPlaceholder(name.to_string())),
        }
    }
    rendered.push_str(&template[last..]);

    Ok(collapse_whitespace(&rendered))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 템플릿으로 모든 연락처 이름 변경 (치환 못한 변수는 그대로 남김)
///
/// 결과가 빈 문자열이면 원래 이름을 유지합니다.
///
/// # Examples
/// ```
/// use phonedrop::naming::{apply_naming_template, NamingOptions, NumberFormat};
/// use phonedrop::Contact;
///
/// let contacts = vec![Contact::new("김철수", "010-0000-0000")];
/// let options = NamingOptions::new("{name}({number})").with_auto_number(NumberFormat::ThreeDigits);
/// assert_eq!(apply_naming_template(&contacts, &options)[0].name, "김철수(001)");
/// ```
pub fn apply_naming_template(contacts: &[Contact], options: &NamingOptions) -> Vec<Contact> {
    contacts
        .iter()
        .enumerate()
        .map(|(index, contact)| {
            let name = render_name(contact, options, index + 1, RenderMode::Lenient)
                .ok()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| contact.name.clone());
            Contact {
                name,
                ..contact.clone()
            }
        })
        .collect()
}

/// 템플릿으로 모든 연락처 이름 변경. 치환하지 못한 변수가 있으면 에러
pub fn try_apply_naming_template(
    contacts: &[Contact],
    options: &NamingOptions,
) -> Result<Vec<Contact>, TemplateError> {
    contacts
        .iter()
        .enumerate()
        .map(|(index, contact)| {
            Ok(Contact {
                name: render_name(contact, options, index + 1, RenderMode::Strict)?,
                ..contact.clone()
            })
        })
        .collect()
}

/// 템플릿 검증
pub fn validate_naming_template(template: &str) -> TemplateValidation {
    let mut errors = Vec::new();

    if template.trim().is_empty() {
        errors.push("템플릿이 비어있습니다.".to_string());
    }

    if !template.contains("{name}") && !template.contains("{number}") {
        errors.push("템플릿에 {name} 또는 {number} 변수가 포함되어야 합니다.".to_string());
    }

    if template.matches('{').count() != template.matches('}').count() {
        errors.push("중괄호가 짝이 맞지 않습니다.".to_string());
    }

    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if !PLACEHOLDERS.contains(&name) {
            errors.push(TemplateError::UnknownPlaceholder(name.to_string()).to_string());
        }
    }

    TemplateValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact::new("홍길동", "010-1234-5678")
            .with_email("hong@example.com")
            .with_company("ABC주식회사-영업팀-1파트")
            .with_title("팀장")
    }

    #[test]
    fn test_auto_number() {
        let contacts = vec![Contact::new("김철수", "010-0000-0000"), Contact::new("이영희", "010-1111-2222")];
        let options = NamingOptions::new("{name}({number})").with_auto_number(NumberFormat::ThreeDigits);
        let renamed = apply_naming_template(&contacts, &options);
        assert_eq!(renamed[0].name, "김철수(001)");
        assert_eq!(renamed[1].name, "이영희(002)");
        assert_eq!(renamed[1].phone, "010-1111-2222");
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(NumberFormat::ThreeDigits.format(7), "007");
        assert_eq!(NumberFormat::FourDigits.format(7), "0007");
        assert_eq!(NumberFormat::Prefixed.format(12), "A012");
        assert_eq!(NumberFormat::ThreeDigits.format(1234), "1234");
    }

    #[test]
    fn test_company_department_split() {
        let options = NamingOptions::new("{company} {department} {name} {title}");
        let name = render_name(&sample(), &options, 1, RenderMode::Strict).unwrap();
        assert_eq!(name, "ABC주식회사 영업팀-1파트 홍길동 팀장");
    }

    #[test]
    fn test_prefix_suffix_and_whitespace() {
        let options = NamingOptions::new("  [{prefix}]   {name}  {suffix} ")
            .with_prefix("2026세미나")
            .with_suffix("");
        let name = render_name(&sample(), &options, 1, RenderMode::Lenient).unwrap();
        assert_eq!(name, "[2026세미나] 홍길동");
    }

    #[test]
    fn test_phone_last4_and_empty_name() {
        let contact = Contact::new("", "010-1234-5678");
        let options = NamingOptions::new("{name}-{phone_last4}");
        assert_eq!(
            render_name(&contact, &options, 1, RenderMode::Strict).unwrap(),
            "미지정-5678"
        );
    }

    #[test]
    fn test_unknown_placeholder_lenient() {
        let options = NamingOptions::new("{name} {nickname}");
        let renamed = apply_naming_template(&[sample()], &options);
        assert_eq!(renamed[0].name, "홍길동 {nickname}");
    }

    #[test]
    fn test_empty_result_keeps_name() {
        let contact = Contact::new("홍길동", "010-1234-5678");
        let renamed = apply_naming_template(&[contact], &NamingOptions::new("{company}"));
        assert_eq!(renamed[0].name, "홍길동");
    }

    #[test]
    fn test_unknown_placeholder_strict() {
        let options = NamingOptions::new("{name} {nickname}");
        assert_eq!(
            try_apply_naming_template(&[sample()], &options),
            Err(TemplateError::UnknownPlaceholder("nickname".into()))
        );
    }

    #[test]
    fn test_number_without_auto_number() {
        let options = NamingOptions::new("{name}-{number}");
        assert_eq!(
            render_name(&sample(), &options, 1, RenderMode::Lenient).unwrap(),
            "홍길동-{number}"
        );
        assert_eq!(
            render_name(&sample(), &options, 1, RenderMode::Strict),
            Err(TemplateError::UnresolvedPlaceholder("number".into()))
        );
    }

    #[test]
    fn test_values_not_resubstituted() {
        // 연락처 값에 들어있는 중괄호는 다시 치환하지 않음
        let contact = Contact::new("{phone}", "010-1234-5678");
        let options = NamingOptions::new("{name}");
        assert_eq!(
            render_name(&contact, &options, 1, RenderMode::Strict).unwrap(),
            "{phone}"
        );
    }

    #[test]
    fn test_validate_template() {
        assert!(validate_naming_template("{name}").is_valid);
        assert!(validate_naming_template("미지정-{number}").is_valid);

        let v = validate_naming_template("");
        assert!(!v.is_valid);
        assert_eq!(v.errors.len(), 2);

        let v = validate_naming_template("{company}");
        assert_eq!(
            v.errors,
            vec!["템플릿에 {name} 또는 {number} 변수가 포함되어야 합니다.".to_string()]
        );

        let v = validate_naming_template("{name} {foo");
        assert_eq!(v.errors, vec!["중괄호가 짝이 맞지 않습니다.".to_string()]);

        let v = validate_naming_template("{name} {foo}");
        assert_eq!(v.errors, vec!["유효하지 않은 변수: {foo}".to_string()]);
    }
}
