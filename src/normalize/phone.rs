//! 한국 전화번호 검증/형식화
//!
//! 번호 체계:
//! - 휴대폰: 010, 011, 016, 017, 018, 019 (10-11자리)
//! - 서울: 02 (9-10자리)
//! - 지방: 031 ~ 064 (9-10자리)
//! - 인터넷 전화 070, 수신자 부담 080 (10-11자리)
//! - 대표번호: 15xx, 16xx, 18xx (9-10자리)

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PHONE_PATTERNS: Vec<Regex> = [
        r"^01[016789]\d{7,8}$",
        r"^02\d{7,8}$",
        r"^0[3-6][1-6]\d{6,7}$",
        r"^070\d{7,8}$",
        r"^080\d{7,8}$",
        r"^15\d{7,8}$",
        r"^16\d{7,8}$",
        r"^18\d{7,8}$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// 대한민국 국가번호
const COUNTRY_CODE: &str = "82";

/// 번호 앞자리로 구분한 번호 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    Mobile,
    Seoul,
    Regional,
    Voip,
    TollFree,
    Special,
}

impl PhoneKind {
    /// 숫자만 남긴 문자열의 앞자리로 종류 판별
    pub fn from_digits(digits: &str) -> Option<Self> {
        let b = digits.as_bytes();
        if b.len() < 2 {
            return None;
        }
        match (b[0], b[1], b.get(2).copied()) {
            (b'0', b'1', Some(b'0' | b'1' | b'6' | b'7' | b'8' | b'9')) => Some(Self::Mobile),
            (b'0', b'2', _) => Some(Self::Seoul),
            (b'0', b'3'..=b'6', Some(b'1'..=b'6')) => Some(Self::Regional),
            (b'0', b'7', Some(b'0')) => Some(Self::Voip),
            (b'0', b'8', Some(b'0')) => Some(Self::TollFree),
            (b'1', b'5' | b'6' | b'8', _) => Some(Self::Special),
            _ => None,
        }
    }

    /// (앞자리 길이, 가운데 자리 길이). 나머지는 뒷자리
    fn grouping(self, len: usize) -> Option<(usize, usize)> {
        match (self, len) {
            (Self::Mobile, 10) => Some((3, 3)),
            (Self::Mobile, 11) => Some((3, 4)),
            (Self::Seoul, 9) => Some((2, 3)),
            (Self::Seoul, 10) => Some((2, 4)),
            (Self::Regional, 9 | 10) => Some((3, 3)),
            (Self::Voip | Self::TollFree, 9 | 10) => Some((3, 3)),
            (Self::Voip | Self::TollFree, 11) => Some((3, 4)),
            // 대표번호는 뒷자리가 4자리로 떨어지지 않음
            (Self::Special, 9) => Some((3, 3)),
            (Self::Special, 10) => Some((4, 3)),
            _ => None,
        }
    }
}

/// 숫자가 아닌 문자를 모두 제거
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// 전화번호 유효성 검사
///
/// 숫자만 남긴 뒤 번호 체계 중 하나와 일치하면 true.
/// 문자 `O`를 `0`으로 바꾸는 등의 보정은 하지 않습니다 (`fixer` 담당).
pub fn validate_phone(phone: &str) -> bool {
    let cleaned = digits_only(phone);
    PHONE_PATTERNS.iter().any(|p| p.is_match(&cleaned))
}

/// 전화번호에 하이픈 삽입
///
/// 9자리 미만이거나 알 수 없는 형식이면 원본을 그대로 반환합니다.
///
/// # Examples
/// ```
/// use phonedrop::normalize::format_phone;
///
/// assert_eq!(format_phone("01012345678"), "010-1234-5678");
/// assert_eq!(format_phone("0212345678"), "02-1234-5678");
/// assert_eq!(format_phone("123"), "123");
/// ```
pub fn format_phone(phone: &str) -> String {
    let cleaned = digits_only(phone);
    if cleaned.len() < 9 {
        return phone.to_string();
    }

    let grouping = PhoneKind::from_digits(&cleaned).and_then(|kind| kind.grouping(cleaned.len()));
    match grouping {
        Some((head, middle)) => format!(
            "{}-{}-{}",
            &cleaned[..head],
            &cleaned[head..head + middle],
            &cleaned[head + middle..]
        ),
        None => phone.to_string(),
    }
}

/// 중복 판별용 키: 숫자만 남기고 국가번호(82)를 국내 0으로 치환
///
/// 사용자에게 보여주지 않는 내부 비교용 값입니다.
pub fn normalize_phone_number(phone: &str) -> String {
    let mut normalized = digits_only(phone);

    if normalized.starts_with(COUNTRY_CODE) && normalized.len() == 12 {
        normalized = format!("0{}", &normalized[2..]);
    }

    // +82 10 형식 (13자리)
    if normalized.starts_with("8210") && normalized.len() == 13 {
        normalized = format!("0{}", &normalized[2..]);
    }

    normalized
}

/// 국가번호 처리 후 하이픈 형식으로 재구성
pub fn normalize_phone(phone: &str) -> String {
    format_phone(&normalize_phone_number(phone))
}

/// 붙여넣기 텍스트의 토큰이 전화번호처럼 보이는지 판별
///
/// 숫자 10-11자리이고 01, 02, 1로 시작하면 전화번호로 간주
pub fn is_phone_number(text: &str) -> bool {
    let cleaned = digits_only(text);
    (10..=11).contains(&cleaned.len())
        && (cleaned.starts_with("01") || cleaned.starts_with("02") || cleaned.starts_with('1'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        // 휴대폰
        assert!(validate_phone("01012345678"));
        assert!(validate_phone("010-1234-5678"));
        assert!(validate_phone("011-123-4567"));
        // 서울/지방
        assert!(validate_phone("02-123-4567"));
        assert!(validate_phone("0212345678"));
        assert!(validate_phone("031-123-4567"));
        // 인터넷 전화, 대표번호
        assert!(validate_phone("070-1234-5678"));
        assert!(validate_phone("1588123456"));

        assert!(!validate_phone("123"));
        assert!(!validate_phone(""));
        assert!(!validate_phone("012-1234-5678"));
        assert!(!validate_phone("010123456789"));
    }

    #[test]
    fn test_validate_phone_does_not_fix_letters() {
        // O/0 혼동은 여기서 보정하지 않음
        assert!(!validate_phone("O10-1234-5678"));
    }

    #[test]
    fn test_format_mobile() {
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
        assert_eq!(format_phone("0111234567"), "011-123-4567");
        assert_eq!(format_phone("010 1234 5678"), "010-1234-5678");
    }

    #[test]
    fn test_format_landline() {
        assert_eq!(format_phone("0212345678"), "02-1234-5678");
        assert_eq!(format_phone("021234567"), "02-123-4567");
        assert_eq!(format_phone("0311234567"), "031-123-4567");
        assert_eq!(format_phone("07012345678"), "070-1234-5678");
        assert_eq!(format_phone("1588123456"), "1588-123-456");
    }

    #[test]
    fn test_format_returns_original_when_unknown() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("12345678"), "12345678");
        assert_eq!(format_phone("099-1234-5678"), "099-1234-5678");
        assert_eq!(format_phone("010123456789"), "010123456789");
    }

    #[test]
    fn test_format_idempotent() {
        for input in ["01012345678", "0212345678", "031 123 4567", "1588123456", "07012345678"] {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once, "입력 '{}'", input);
        }
    }

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("010-1234-5678"), "01012345678");
        assert_eq!(normalize_phone_number("+82 10-1234-5678"), "01012345678");
        assert_eq!(normalize_phone_number("82-2-123-4567"), "8221234567");
        assert_eq!(normalize_phone_number("8210123456789"), "010123456789");
        assert_eq!(normalize_phone_number(""), "");
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+82 10-1234-5678"), "010-1234-5678");
        assert_eq!(normalize_phone("01012345678"), "010-1234-5678");
        assert_eq!(normalize_phone("abc"), "");
    }

    #[test]
    fn test_is_phone_number() {
        assert!(is_phone_number("01012345678"));
        assert!(is_phone_number("02-1234-5678"));
        assert!(is_phone_number("1012345678"));
        assert!(!is_phone_number("홍길동"));
        assert!(!is_phone_number("031-123-4567"));
        assert!(!is_phone_number("010-123"));
    }

    #[test]
    fn test_phone_kind() {
        assert_eq!(PhoneKind::from_digits("0101234"), Some(PhoneKind::Mobile));
        assert_eq!(PhoneKind::from_digits("02"), Some(PhoneKind::Seoul));
        assert_eq!(PhoneKind::from_digits("0511234"), Some(PhoneKind::Regional));
        assert_eq!(PhoneKind::from_digits("0701234"), Some(PhoneKind::Voip));
        assert_eq!(PhoneKind::from_digits("0801234"), Some(PhoneKind::TollFree));
        assert_eq!(PhoneKind::from_digits("1644"), Some(PhoneKind::Special));
        assert_eq!(PhoneKind::from_digits("0121234"), None);
        assert_eq!(PhoneKind::from_digits("0"), None);
    }
}
