//! 이메일 형식 검사
//!
//! RFC 5322 전체 검증이 아닌 구문 수준의 확인만 합니다.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// `<공백 없음>@<공백 없음>.<공백 없음>` 형식이면 true
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("hong@example.com"));
        assert!(validate_email("a.b@c.co.kr"));

        assert!(!validate_email(""));
        assert!(!validate_email("hong"));
        assert!(!validate_email("hong@example"));
        assert!(!validate_email("hong @example.com"));
        assert!(!validate_email("a@b@c.com"));
    }
}
