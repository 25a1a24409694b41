//! 표 형식(CSV 등) 데이터 가져오기
//!
//! 머리글 이름은 한글/영문 별칭을 모두 받고 대소문자를 구분하지 않습니다.

use std::collections::HashMap;

use csv::ReaderBuilder;
use serde::Serialize;

use crate::contact::{Contact, SENTINEL_PHONE};
use crate::error::ImportError;
use crate::normalize::{format_phone, validate_email};

const NAME_ALIASES: [&str; 3] = ["이름", "name", "성명"];
const PHONE_ALIASES: [&str; 4] = ["전화번호", "phone", "연락처", "tel"];
const EMAIL_ALIASES: [&str; 3] = ["이메일", "email", "메일"];
const COMPANY_ALIASES: [&str; 3] = ["회사", "company", "소속"];
const TITLE_ALIASES: [&str; 3] = ["직책", "title", "직급"];

/// 가져오기 결과
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub contacts: Vec<Contact>,
    pub errors: Vec<String>,
}

/// 별칭 순서대로 값이 있는 첫 칸 찾기
fn find_field<'a>(row: &'a HashMap<String, String>, aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|alias| {
        row.iter()
            .find(|(key, value)| {
                key.trim().to_lowercase() == alias.to_lowercase() && !value.trim().is_empty()
            })
            .map(|(_, value)| value.trim())
    })
}

/// 한 행을 연락처로 변환
///
/// 이름은 필수. 전화번호가 없으면 기본값을 넣고, 형식이 잘못된 이메일은 조용히 버립니다.
pub fn contact_from_row(row: &HashMap<String, String>) -> Result<Contact, ImportError> {
    let name = find_field(row, &NAME_ALIASES).ok_or(ImportError::MissingName)?;

    let phone = find_field(row, &PHONE_ALIASES)
        .map(format_phone)
        .unwrap_or_else(|| SENTINEL_PHONE.to_string());

    Ok(Contact {
        name: name.to_string(),
        phone,
        email: find_field(row, &EMAIL_ALIASES)
            .filter(|e| validate_email(e))
            .map(str::to_string),
        company: find_field(row, &COMPANY_ALIASES).map(str::to_string),
        title: find_field(row, &TITLE_ALIASES).map(str::to_string),
        memo: None,
    })
}

/// CSV 바이트를 연락처 목록으로
///
/// 첫 행은 머리글입니다. 오류 행 번호는 머리글을 1행으로 센 값입니다.
pub fn parse_csv(content: &[u8]) -> ImportResult {
    let content = content.strip_prefix("\u{feff}".as_bytes()).unwrap_or(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            return ImportResult {
                contacts: Vec::new(),
                errors: vec![ImportError::from(e).to_string()],
            }
        }
    };

    let mut result = ImportResult::default();

    for (index, record) in reader.records().enumerate() {
        let row_number = index + 2;
        let converted = record.map_err(ImportError::from).and_then(|record| {
            let row: HashMap<String, String> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect();
            contact_from_row(&row)
        });

        match converted {
            Ok(contact) => result.contacts.push(contact),
            Err(e) => {
                log::debug!("CSV {}행 건너뜀: {}", row_number, e);
                result.errors.push(format!("CSV {}행: {}", row_number, e));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_korean_headers() {
        let contact = contact_from_row(&row(&[
            ("이름", "홍길동"),
            ("전화번호", "01012345678"),
            ("이메일", "hong@example.com"),
            ("회사", "ABC회사"),
            ("직책", "팀장"),
        ]))
        .unwrap();
        assert_eq!(contact.name, "홍길동");
        assert_eq!(contact.phone, "010-1234-5678");
        assert_eq!(contact.email.as_deref(), Some("hong@example.com"));
        assert_eq!(contact.company.as_deref(), Some("ABC회사"));
        assert_eq!(contact.title.as_deref(), Some("팀장"));
    }

    #[test]
    fn test_english_headers_case_insensitive() {
        let contact = contact_from_row(&row(&[("Name", " Kim "), ("TEL", "02-123-4567")])).unwrap();
        assert_eq!(contact.name, "Kim");
        assert_eq!(contact.phone, "02-123-4567");
    }

    #[test]
    fn test_missing_phone_and_bad_email() {
        let contact = contact_from_row(&row(&[("성명", "홍길동"), ("메일", "not-an-email")])).unwrap();
        assert_eq!(contact.phone, SENTINEL_PHONE);
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_missing_name() {
        assert!(matches!(
            contact_from_row(&row(&[("이름", "  "), ("전화번호", "01012345678")])),
            Err(ImportError::MissingName)
        ));
    }

    #[test]
    fn test_parse_csv() {
        let csv = "\u{feff}이름,전화번호,이메일\n홍길동,01012345678,hong@example.com\n,01098765432,\n김철수,0212345678,\n";
        let result = parse_csv(csv.as_bytes());
        assert_eq!(result.contacts.len(), 2);
        assert_eq!(result.contacts[1].phone, "02-1234-5678");
        assert_eq!(result.errors, vec!["CSV 3행: 이름은 필수 항목입니다".to_string()]);
    }
}
