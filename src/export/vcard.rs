//! vCard 3.0 쓰기/읽기

use crate::contact::{non_empty, Contact};
use crate::error::VCardError;

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// 연락처 하나를 vCard 3.0 텍스트로 변환
///
/// 빈 선택 필드는 줄을 만들지 않습니다.
pub fn generate_vcard(contact: &Contact) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN;CHARSET=UTF-8:{}", escape(&contact.name)),
        format!("TEL;TYPE=CELL:{}", contact.phone),
    ];

    if let Some(email) = non_empty(&contact.email) {
        lines.push(format!("EMAIL;TYPE=INTERNET:{}", email));
    }
    if let Some(company) = non_empty(&contact.company) {
        lines.push(format!("ORG;CHARSET=UTF-8:{}", escape(company)));
    }
    if let Some(title) = non_empty(&contact.title) {
        lines.push(format!("TITLE;CHARSET=UTF-8:{}", escape(title)));
    }
    if let Some(memo) = non_empty(&contact.memo) {
        lines.push(format!("NOTE;CHARSET=UTF-8:{}", escape(memo)));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// 여러 연락처를 하나의 .vcf 텍스트로
pub fn generate_multiple_vcards(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(generate_vcard)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 접힌 줄(공백/탭으로 시작하는 줄)을 앞 줄에 이어붙임
fn unfold(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.lines() {
        let raw = raw.trim_end_matches('\r');
        if let (Some(rest), Some(prev)) = (raw.strip_prefix([' ', '\t']), lines.last_mut()) {
            prev.push_str(rest);
            continue;
        }
        lines.push(raw.to_string());
    }
    lines
}

/// .vcf 텍스트에서 연락처 읽기
///
/// FN, TEL, EMAIL, ORG, TITLE, NOTE만 읽고 나머지 속성은 무시합니다.
/// 같은 속성이 여러 번 나오면 첫 번째 값을 씁니다.
pub fn parse_vcards(text: &str) -> Result<Vec<Contact>, VCardError> {
    let mut contacts = Vec::new();
    let mut current: Option<Contact> = None;

    for line in unfold(text) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("BEGIN:VCARD") {
            if current.is_some() {
                return Err(VCardError::Unterminated {
                    index: contacts.len() + 1,
                });
            }
            current = Some(Contact::default());
            continue;
        }

        if line.eq_ignore_ascii_case("END:VCARD") {
            let index = contacts.len() + 1;
            match current.take() {
                Some(contact) if contact.name.trim().is_empty() => {
                    return Err(VCardError::MissingName { index })
                }
                Some(contact) => contacts.push(contact),
                None => {}
            }
            continue;
        }

        let Some(contact) = current.as_mut() else {
            continue;
        };
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let property = key.split(';').next().unwrap_or(key).to_ascii_uppercase();
        let value = unescape(value);

        let slot = match property.as_str() {
            "FN" if contact.name.is_empty() => {
                contact.name = value;
                continue;
            }
            "TEL" if contact.phone.is_empty() => {
                contact.phone = value;
                continue;
            }
            "EMAIL" => &mut contact.email,
            "ORG" => &mut contact.company,
            "TITLE" => &mut contact.title,
            "NOTE" => &mut contact.memo,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    if current.is_some() {
        return Err(VCardError::Unterminated {
            index: contacts.len() + 1,
        });
    }

    Ok(contacts)
}
