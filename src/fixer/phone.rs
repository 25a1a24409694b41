//! 전화번호 입력 실수 탐지

use lazy_static::lazy_static;
use regex::Regex;

use super::{ErrorFix, FixKind};
use crate::normalize::digits_only;

lazy_static! {
    static ref MISSING_LEADING_ZERO: Regex = Regex::new(r"^1\d{9}$").unwrap();
}

fn fix(phone: &str, suggested: String, confidence: u8, description: &str) -> ErrorFix {
    ErrorFix::new(FixKind::Phone, phone, suggested, confidence, description)
}

fn hyphenate(digits: &str, head: usize, middle: usize) -> String {
    format!(
        "{}-{}-{}",
        &digits[..head],
        &digits[head..head + middle],
        &digits[head + middle..]
    )
}

/// 전화번호 오류 후보 (여러 개가 동시에 해당될 수 있음)
pub fn detect_phone_errors(phone: &str) -> Vec<ErrorFix> {
    let mut fixes = Vec::new();
    let cleaned = digits_only(phone);
    let has_hyphen = phone.contains('-');

    // 1012345678 -> 01012345678
    if MISSING_LEADING_ZERO.is_match(&cleaned) {
        fixes.push(fix(phone, format!("0{}", cleaned), 95, "앞자리 0 누락"));
    }

    // O10-1234-5678 -> 010-1234-5678
    if phone.contains("O10-") {
        fixes.push(fix(phone, phone.replacen("O10-", "010-", 1), 98, "O를 0으로 수정"));
    }

    if cleaned.len() == 10 && cleaned.starts_with("01") {
        fixes.push(fix(phone, hyphenate(&cleaned, 3, 3), 85, "자리수 형식 수정"));
    }

    if cleaned.len() == 11 && cleaned.starts_with("01") && !has_hyphen {
        fixes.push(fix(phone, hyphenate(&cleaned, 3, 4), 92, "휴대폰 번호 형식화"));
    }

    if cleaned.len() == 10 && cleaned.starts_with("02") && !has_hyphen {
        fixes.push(fix(phone, hyphenate(&cleaned, 2, 4), 92, "서울 번호 형식화"));
    }

    // +82 10-1234-5678 -> 010-1234-5678
    if phone.starts_with("+82") || phone.starts_with("+ 82") {
        let domestic = format!("0{}", &cleaned[2..]);
        if domestic.len() == 11 && domestic.starts_with("01") {
            fixes.push(fix(
                phone,
                hyphenate(&domestic, 3, 4),
                90,
                "국제 번호를 국내 번호로 변환",
            ));
        }
    }

    fixes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions(phone: &str) -> Vec<(String, u8)> {
        detect_phone_errors(phone)
            .into_iter()
            .map(|f| (f.suggested, f.confidence))
            .collect()
    }

    #[test]
    fn test_missing_leading_zero() {
        assert_eq!(
            suggestions("1012345678"),
            vec![("01012345678".into(), 95)]
        );
    }

    #[test]
    fn test_letter_o() {
        assert_eq!(
            suggestions("O10-1234-5678"),
            vec![("01012345678".into(), 95), ("010-1234-5678".into(), 98)]
        );
    }

    #[test]
    fn test_short_mobile() {
        assert_eq!(suggestions("0101234567"), vec![("010-123-4567".into(), 85)]);
    }

    #[test]
    fn test_unhyphenated() {
        assert_eq!(suggestions("01012345678"), vec![("010-1234-5678".into(), 92)]);
        assert_eq!(suggestions("0212345678"), vec![("02-1234-5678".into(), 92)]);
        assert!(suggestions("02-1234-5678").is_empty());
    }

    #[test]
    fn test_international() {
        assert_eq!(suggestions("+82 10-1234-5678"), vec![("010-1234-5678".into(), 90)]);
        assert_eq!(suggestions("+ 82 10 1234 5678"), vec![("010-1234-5678".into(), 90)]);
        // 국내 번호가 휴대폰 형식이 아니면 제안 없음
        assert!(suggestions("+82 2-123-4567").is_empty());
    }

    #[test]
    fn test_clean_number() {
        assert!(detect_phone_errors("010-1234-5678").is_empty());
        assert!(detect_phone_errors("").is_empty());
    }
}
