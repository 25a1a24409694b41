//! 이름 입력 실수 탐지

use super::{ErrorFix, FixKind};

const BRACKETS: [char; 6] = ['(', ')', '{', '}', '[', ']'];

/// 이름 오류 후보
pub fn detect_name_errors(name: &str) -> Vec<ErrorFix> {
    let mut fixes = Vec::new();

    if name.contains(BRACKETS) {
        let cleaned = name.replace(BRACKETS, "").trim().to_string();
        if cleaned != name {
            fixes.push(ErrorFix::new(FixKind::Name, name, cleaned, 70, "괄호 및 특수문자 제거"));
        }
    }

    if name.contains("  ") || name.contains('\t') {
        let cleaned = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if cleaned != name {
            fixes.push(ErrorFix::new(FixKind::Name, name, cleaned, 85, "여러 공백 정리"));
        }
    }

    let trimmed = name.trim();
    if trimmed != name {
        fixes.push(ErrorFix::new(FixKind::Name, name, trimmed, 90, "양 끝 공백 제거"));
    }

    fixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets() {
        let fixes = detect_name_errors("(홍길동)");
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].suggested, "홍길동");
        assert_eq!(fixes[0].confidence, 70);
    }

    #[test]
    fn test_repeated_whitespace() {
        let fixes = detect_name_errors("홍  길동");
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].suggested, "홍 길동");
        assert_eq!(fixes[0].confidence, 85);
    }

    #[test]
    fn test_surrounding_whitespace() {
        let fixes = detect_name_errors(" 홍길동\t");
        // 탭 정리(85)와 양 끝 공백 제거(90)가 함께 제안됨
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].confidence, 85);
        assert_eq!(fixes[1].suggested, "홍길동");
        assert_eq!(fixes[1].confidence, 90);
    }

    #[test]
    fn test_clean_name() {
        assert!(detect_name_errors("홍길동").is_empty());
    }
}
