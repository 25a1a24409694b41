//! 전화번호 기반 중복 탐지 및 해소

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::policy::{apply_policy, DuplicatePolicy};
use crate::contact::{non_empty, Contact};
use crate::normalize::normalize_phone_number;
use crate::similarity::group_similarity;

/// 같은 정규화 번호를 가진 연락처 묶음 (2명 이상)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DuplicateGroup {
    pub contacts: Vec<Contact>,
    pub normalized_phone: String,
    /// 그룹 평균 유사도 (0.0 ~ 100.0)
    pub similarity: f64,
    pub suggestions: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DuplicateStatistics {
    pub total_processed: usize,
    pub duplicates_found: usize,
    pub unique_count: usize,
    /// 입력이 비어있으면 0
    pub duplicate_rate: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DuplicateResult {
    pub groups: Vec<DuplicateGroup>,
    /// 제거될 연락처 수 (그룹 수가 아님)
    pub total_duplicates: usize,
    /// `KeepFirst` 정책으로 해소한 미리보기
    pub unique_contacts: Vec<Contact>,
    pub statistics: DuplicateStatistics,
}

/// 정규화 번호로 연락처를 묶음. 번호가 처음 나온 순서를 유지
fn bucket_by_phone(contacts: &[Contact], skip_sentinel: bool) -> Vec<(String, Vec<Contact>)> {
    let mut buckets: Vec<(String, Vec<Contact>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for contact in contacts {
        if skip_sentinel && contact.has_sentinel_phone() {
            continue;
        }
        let key = normalize_phone_number(&contact.phone);
        match index.get(&key) {
            Some(&i) => buckets[i].1.push(contact.clone()),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![contact.clone()]));
            }
        }
    }

    buckets
}

/// 중복 탐지
pub fn detect_duplicates(contacts: &[Contact]) -> DuplicateResult {
    detect(contacts, false)
}

/// 기본값 번호(`010-0000-0000`)를 가진 연락처는 그룹에 넣지 않는 중복 탐지
///
/// 번호를 모르는 서로 다른 사람들이 한 그룹으로 묶이지 않습니다.
/// 이 연락처들은 `resolve_duplicates`에서 그대로 남습니다.
pub fn detect_duplicates_ignoring_sentinel(contacts: &[Contact]) -> DuplicateResult {
    detect(contacts, true)
}

fn detect(contacts: &[Contact], skip_sentinel: bool) -> DuplicateResult {
    let groups: Vec<DuplicateGroup> = bucket_by_phone(contacts, skip_sentinel)
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(normalized_phone, members)| DuplicateGroup {
            similarity: group_similarity(&members),
            suggestions: generate_suggestions(&members),
            normalized_phone,
            contacts: members,
        })
        .collect();

    let total_duplicates: usize = groups.iter().map(|g| g.contacts.len() - 1).sum();
    let unique_contacts = resolve_duplicates(contacts, &groups, DuplicatePolicy::KeepFirst);

    let duplicate_rate = if contacts.is_empty() {
        0.0
    } else {
        total_duplicates as f64 / contacts.len() as f64 * 100.0
    };

    log::debug!(
        "중복 탐지: {}개 중 {}개 그룹, {}개 중복",
        contacts.len(),
        groups.len(),
        total_duplicates
    );

    DuplicateResult {
        statistics: DuplicateStatistics {
            total_processed: contacts.len(),
            duplicates_found: total_duplicates,
            unique_count: unique_contacts.len(),
            duplicate_rate,
        },
        groups,
        total_duplicates,
        unique_contacts,
    }
}

/// 중복 해소
///
/// 원래 순서대로 한 번 순회합니다. 그룹에 속한 번호는 처음 나온 위치에서
/// 그룹 전체에 정책을 적용한 결과로 대체되고, 그룹이 없는 연락처는 그대로 남습니다.
pub fn resolve_duplicates(
    contacts: &[Contact],
    groups: &[DuplicateGroup],
    policy: DuplicatePolicy,
) -> Vec<Contact> {
    let group_lookup: HashMap<&str, &DuplicateGroup> = groups
        .iter()
        .filter(|g| g.contacts.len() > 1)
        .map(|g| (g.normalized_phone.as_str(), g))
        .collect();

    let mut processed: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for contact in contacts {
        let key = normalize_phone_number(&contact.phone);
        let Some(group) = group_lookup.get(key.as_str()) else {
            result.push(contact.clone());
            continue;
        };

        if processed.insert(key) {
            result.extend(apply_policy(&group.contacts, policy));
        }
    }

    result
}

/// 그룹 통합 제안 문구
fn generate_suggestions(contacts: &[Contact]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let [c1, c2] = contacts {
        if c1.name != c2.name {
            suggestions.push(format!("이름 통합: {} + {}", c1.name, c2.name));
        }

        if let (Some(e1), Some(e2)) = (non_empty(&c1.email), non_empty(&c2.email)) {
            if e1 != e2 {
                suggestions.push(format!("이메일 병합: {}, {}", e1, e2));
            }
        }

        if let (Some(co1), Some(co2)) = (non_empty(&c1.company), non_empty(&c2.company)) {
            if co1 != co2 {
                suggestions.push("회사 정보 통합 필요".to_string());
            }
        }
    } else {
        suggestions.push(format!("{}개 연락처 통합 필요", contacts.len()));
    }

    suggestions
}
