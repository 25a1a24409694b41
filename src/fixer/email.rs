//! 이메일 입력 실수 탐지

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{ErrorFix, FixKind};

lazy_static! {
    /// 자주 틀리는 도메인 -> 교정 도메인
    pub static ref DOMAIN_TYPOS: HashMap<&'static str, &'static str> = HashMap::from([
        ("gnail.com", "gmail.com"),
        ("gamil.com", "gmail.com"),
        ("gmial.com", "gmail.com"),
        ("nate.com", "naver.com"),
    ]);
}

/// 이메일 오류 후보
pub fn detect_email_errors(email: &str) -> Vec<ErrorFix> {
    let mut fixes = Vec::new();

    if email.chars().any(char::is_whitespace) {
        let stripped: String = email.chars().filter(|c| !c.is_whitespace()).collect();
        fixes.push(ErrorFix::new(FixKind::Email, email, stripped, 85, "이메일 공백 제거"));
    }

    let lower = email.to_lowercase();
    if lower != email {
        fixes.push(ErrorFix::new(FixKind::Email, email, lower, 75, "이메일 소문자 변환"));
    }

    if let Some((local, domain)) = email.split_once('@') {
        let domain = domain.split('@').next().unwrap_or(domain).to_lowercase();
        if let Some(&fixed) = DOMAIN_TYPOS.get(domain.as_str()) {
            fixes.push(ErrorFix::new(
                FixKind::Email,
                email,
                format!("{}@{}", local, fixed),
                80,
                &format!("도메인 오타 수정: {} → {}", domain, fixed),
            ));
        }
    }

    fixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        let fixes = detect_email_errors("hong @example.com");
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].suggested, "hong@example.com");
        assert_eq!(fixes[0].confidence, 85);
    }

    #[test]
    fn test_uppercase() {
        let fixes = detect_email_errors("Hong@Example.com");
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].suggested, "hong@example.com");
        assert_eq!(fixes[0].confidence, 75);
    }

    #[test]
    fn test_domain_typo() {
        let fixes = detect_email_errors("hong@gnail.com");
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].suggested, "hong@gmail.com");
        assert_eq!(fixes[0].confidence, 80);
        assert_eq!(fixes[0].description, "도메인 오타 수정: gnail.com → gmail.com");

        // 도메인 비교는 대소문자 무시
        let fixes = detect_email_errors("hong@GAMIL.com");
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[1].suggested, "hong@gmail.com");
    }

    #[test]
    fn test_domain_typo_table() {
        // 표의 모든 오타가 교정 후보를 만듦
        for (typo, fixed) in DOMAIN_TYPOS.iter() {
            let fixes = detect_email_errors(&format!("a@{}", typo));
            assert!(fixes.iter().any(|f| f.suggested == format!("a@{}", fixed)));
        }
        assert_eq!(DOMAIN_TYPOS.len(), 4);
    }

    #[test]
    fn test_clean_email() {
        assert!(detect_email_errors("hong@gmail.com").is_empty());
        assert!(detect_email_errors("no-at-sign").is_empty());
    }
}
