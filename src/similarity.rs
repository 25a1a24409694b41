//! 문자열/연락처 유사도 계산
//!
//! 편집 거리(Levenshtein) 기반 0~100 점수를 계산합니다.
//! 길이와 거리는 모두 유니코드 문자(code point) 단위입니다.

use crate::contact::{non_empty, Contact};

/// 두 문자열의 편집 거리 (삽입/삭제/치환 비용 1)
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// 문자열 유사도 (0.0 ~ 100.0)
///
/// 같으면 100, 그 외에는 `100 * (긴 쪽 길이 - 편집 거리) / 긴 쪽 길이`
pub fn string_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }

    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 100.0;
    }

    let distance = levenshtein_distance(a, b);
    (longer - distance) as f64 / longer as f64 * 100.0
}

/// 연락처 유사도 (0.0 ~ 100.0)
///
/// 양쪽 모두 값이 있는 필드만 평균에 포함합니다.
/// 이메일은 완전히 같을 때만 100점입니다.
pub fn contact_similarity(c1: &Contact, c2: &Contact) -> f64 {
    let mut score = 0.0;
    let mut factors = 0;

    if !c1.name.is_empty() && !c2.name.is_empty() {
        score += string_similarity(&c1.name, &c2.name);
        factors += 1;
    }

    if let (Some(e1), Some(e2)) = (non_empty(&c1.email), non_empty(&c2.email)) {
        score += if e1 == e2 { 100.0 } else { 0.0 };
        factors += 1;
    }

    for (f1, f2) in [(&c1.company, &c2.company), (&c1.title, &c2.title)] {
        if let (Some(v1), Some(v2)) = (non_empty(f1), non_empty(f2)) {
            score += string_similarity(v1, v2);
            factors += 1;
        }
    }

    if factors == 0 {
        return 0.0;
    }
    score / factors as f64
}

/// 그룹 내 모든 쌍의 평균 유사도. 구성원이 1명 이하이면 100
pub fn group_similarity(contacts: &[Contact]) -> f64 {
    if contacts.len() <= 1 {
        return 100.0;
    }

    let mut total = 0.0;
    let mut comparisons = 0;
    for i in 0..contacts.len() {
        for j in (i + 1)..contacts.len() {
            total += contact_similarity(&contacts[i], &contacts[j]);
            comparisons += 1;
        }
    }

    total / comparisons as f64
}
