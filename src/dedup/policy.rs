//! 중복 그룹 처리 정책

use serde::{Deserialize, Serialize};

use crate::contact::{non_empty, Contact};

/// 중복 그룹을 하나로 줄이는 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// 첫 번째 연락처 유지 (`KeepFirst`와 동일하게 동작)
    Skip,
    #[default]
    KeepFirst,
    /// 정보가 가장 많은 연락처 유지
    KeepLongest,
    /// 모든 정보를 합친 연락처 생성
    Merge,
    /// 그룹 전체를 결과에서 제외
    SkipAll,
}

/// 정책을 그룹 전체에 적용. 남길 연락처가 없으면 None
pub fn apply_policy(contacts: &[Contact], policy: DuplicatePolicy) -> Option<Contact> {
    let first = contacts.first()?;
    match policy {
        DuplicatePolicy::Skip | DuplicatePolicy::KeepFirst => Some(first.clone()),
        DuplicatePolicy::KeepLongest => longest_contact(contacts).cloned(),
        DuplicatePolicy::Merge => Some(merge_contacts(contacts)),
        DuplicatePolicy::SkipAll => None,
    }
}

/// 이름/이메일/회사/직책/메모 글자 수 합
pub fn contact_info_length(contact: &Contact) -> usize {
    let optional = [&contact.email, &contact.company, &contact.title, &contact.memo];
    contact.name.chars().count()
        + optional
            .iter()
            .map(|f| f.as_deref().map_or(0, |s| s.chars().count()))
            .sum::<usize>()
}

/// 정보량이 가장 많은 연락처 (동점이면 앞선 것)
fn longest_contact(contacts: &[Contact]) -> Option<&Contact> {
    contacts.iter().fold(None, |best: Option<&Contact>, current| match best {
        Some(b) if contact_info_length(current) <= contact_info_length(b) => Some(b),
        _ => Some(current),
    })
}

/// 그룹을 하나의 연락처로 병합
///
/// - 전화번호: 첫 번째 연락처
/// - 이름: 가장 긴 이름
/// - 이메일 `", "`, 회사/직책 `" / "`: 중복 제거 후 등장 순서대로
/// - 메모 `" | "`: 모두 이어붙임
pub fn merge_contacts(contacts: &[Contact]) -> Contact {
    let Some(first) = contacts.first() else {
        return Contact::default();
    };

    let name = contacts
        .iter()
        .fold(&first.name, |longest, c| {
            if c.name.chars().count() > longest.chars().count() {
                &c.name
            } else {
                longest
            }
        })
        .clone();

    let memos: Vec<&str> = contacts.iter().filter_map(|c| non_empty(&c.memo)).collect();

    Contact {
        name,
        phone: first.phone.clone(),
        email: join_unique(contacts.iter().map(|c| &c.email), ", "),
        company: join_unique(contacts.iter().map(|c| &c.company), " / "),
        title: join_unique(contacts.iter().map(|c| &c.title), " / "),
        memo: (!memos.is_empty()).then(|| memos.join(" | ")),
    }
}

fn join_unique<'a>(
    values: impl Iterator<Item = &'a Option<String>>,
    separator: &str,
) -> Option<String> {
    let mut unique: Vec<&str> = Vec::new();
    for value in values.filter_map(non_empty) {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    (!unique.is_empty()).then(|| unique.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Vec<Contact> {
        vec![
            Contact::new("홍길동", "010-1234-5678").with_email("hong@a.com"),
            Contact::new("홍길동 팀장", "01012345678")
                .with_email("hong@b.com")
                .with_company("ABC회사")
                .with_memo("첫 만남"),
            Contact::new("길동", "+82 10-1234-5678")
                .with_email("hong@a.com")
                .with_company("XYZ회사")
                .with_title("팀장")
                .with_memo("재방문"),
        ]
    }

    #[test]
    fn test_keep_first_and_skip_parity() {
        let g = group();
        assert_eq!(apply_policy(&g, DuplicatePolicy::KeepFirst), Some(g[0].clone()));
        assert_eq!(apply_policy(&g, DuplicatePolicy::Skip), Some(g[0].clone()));
    }

    #[test]
    fn test_skip_all_drops_group() {
        assert_eq!(apply_policy(&group(), DuplicatePolicy::SkipAll), None);
    }

    #[test]
    fn test_keep_longest() {
        let g = group();
        // 홍길동 팀장(6) + hong@b.com(10) + ABC회사(5) + 첫 만남(4) = 25
        // 길동(2) + hong@a.com(10) + XYZ회사(5) + 팀장(2) + 재방문(3) = 22
        assert_eq!(contact_info_length(&g[1]), 25);
        assert_eq!(apply_policy(&g, DuplicatePolicy::KeepLongest), Some(g[1].clone()));
    }

    #[test]
    fn test_keep_longest_tie_keeps_earliest() {
        let g = vec![Contact::new("가나", "1"), Contact::new("다라", "2")];
        assert_eq!(apply_policy(&g, DuplicatePolicy::KeepLongest).unwrap().name, "가나");
    }

    #[test]
    fn test_merge() {
        let merged = merge_contacts(&group());
        assert_eq!(merged.name, "홍길동 팀장");
        assert_eq!(merged.phone, "010-1234-5678");
        assert_eq!(merged.email.as_deref(), Some("hong@a.com, hong@b.com"));
        assert_eq!(merged.company.as_deref(), Some("ABC회사 / XYZ회사"));
        assert_eq!(merged.title.as_deref(), Some("팀장"));
        assert_eq!(merged.memo.as_deref(), Some("첫 만남 | 재방문"));
    }

    #[test]
    fn test_merge_without_optional_fields() {
        let merged = merge_contacts(&[Contact::new("a", "1"), Contact::new("bb", "2")]);
        assert_eq!(merged.name, "bb");
        assert_eq!(merged.phone, "1");
        assert!(merged.email.is_none());
        assert!(merged.memo.is_none());
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(apply_policy(&[], DuplicatePolicy::KeepFirst), None);
    }

    #[test]
    fn test_policy_serde() {
        let policy: DuplicatePolicy = serde_json::from_str(r#""keep_longest""#).unwrap();
        assert_eq!(policy, DuplicatePolicy::KeepLongest);
        assert_eq!(serde_json::to_string(&DuplicatePolicy::SkipAll).unwrap(), r#""skip_all""#);
    }
}
