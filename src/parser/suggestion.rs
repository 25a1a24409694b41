//! 파싱 실패 줄에 대한 수정 제안

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::digits_only;

lazy_static! {
    static ref MISSING_LEADING_ZERO: Regex = Regex::new(r"^1\d{9,10}$").unwrap();
    static ref SHORT_MIDDLE_GROUP: Regex = Regex::new(r"(\d{3})-(\d{3})-(\d{4})").unwrap();
}

/// 흔한 입력 실수를 보정한 줄을 제안. 해당 없으면 None
pub fn generate_suggestion(line: &str) -> Option<String> {
    // O/0 혼동 (숫자만 보면 앞자리 누락처럼 보이므로 먼저 확인)
    if line.contains("O10-") {
        return Some(line.replacen("O10-", "010-", 1));
    }

    // 앞자리 0 누락
    if MISSING_LEADING_ZERO.is_match(&digits_only(line)) {
        return Some(format!("0{}", line));
    }

    // 010 번호의 가운데 자리가 3자리
    if let Some(caps) = SHORT_MIDDLE_GROUP.captures(line) {
        if &caps[1] == "010" {
            let fixed = format!("{}-0{}-{}", &caps[1], &caps[2], &caps[3]);
            return Some(line.replacen(&caps[0], &fixed, 1));
        }
    }

    None
}
