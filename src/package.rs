//! 연락처 패키지 저장소
//!
//! 행사, 회사, 팀 등 용도별로 연락처 묶음을 vCard와 함께 보관하고
//! 다운로드/공유 횟수를 셉니다. 만료가 없으므로 삭제는 `remove`로 합니다.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::Contact;
use crate::error::PackageError;
use crate::export::generate_multiple_vcards;

/// 패키지 분류
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PackageCategory {
    Event,
    Company,
    Team,
    Parents,
    #[default]
    Custom,
}

impl PackageCategory {
    pub const ALL: [PackageCategory; 5] = [
        PackageCategory::Event,
        PackageCategory::Company,
        PackageCategory::Team,
        PackageCategory::Parents,
        PackageCategory::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PackageCategory::Event => "이벤트",
            PackageCategory::Company => "회사",
            PackageCategory::Team => "팀",
            PackageCategory::Parents => "학부모",
            PackageCategory::Custom => "커스텀",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PackageCategory::Event => "세미나, 컨퍼런스, 워크샵 등",
            PackageCategory::Company => "영업팀, 부서별, 전사원",
            PackageCategory::Team => "프로젝트팀, 동아리",
            PackageCategory::Parents => "학급, 반별, 학부모회",
            PackageCategory::Custom => "직접 정의",
        }
    }

    /// 기본 색상 (hex)
    pub fn color(self) -> &'static str {
        match self {
            PackageCategory::Event => "#EC4899",
            PackageCategory::Company => "#3B82F6",
            PackageCategory::Team => "#10B981",
            PackageCategory::Parents => "#F59E0B",
            PackageCategory::Custom => "#6B7280",
        }
    }
}

/// 다운로드/공유 횟수
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackageStats {
    pub downloads: u64,
    pub shares: u64,
}

/// 연락처 패키지
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactPackage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: PackageCategory,
    pub contacts: Vec<Contact>,
    /// 생성 시점의 연락처로 만든 .vcf 텍스트
    pub vcard: String,
    pub created_at: DateTime<Utc>,
    pub stats: PackageStats,
}

impl ContactPackage {
    /// 내려받을 때 쓰는 파일 이름
    pub fn vcard_file_name(&self) -> String {
        format!("{}_연락처.vcf", self.name)
    }
}

#[derive(Debug, Default)]
pub struct PackageStore {
    packages: HashMap<String, ContactPackage>,
}

impl PackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// 새 패키지 생성
    pub fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: PackageCategory,
        contacts: Vec<Contact>,
        now: DateTime<Utc>,
    ) -> ContactPackage {
        let id = Uuid::new_v4().simple().to_string();
        let package = ContactPackage {
            id: id.clone(),
            name: name.into(),
            description: description.into(),
            category,
            vcard: generate_multiple_vcards(&contacts),
            contacts,
            created_at: now,
            stats: PackageStats::default(),
        };

        log::debug!(
            "연락처 패키지 생성: {} ({}, {}개 연락처)",
            id,
            category.label(),
            package.contacts.len()
        );
        self.packages.insert(id, package.clone());
        package
    }

    pub fn get(&self, id: &str) -> Option<&ContactPackage> {
        self.packages.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<ContactPackage> {
        self.packages.remove(id)
    }

    /// 전체 패키지 (생성 시각, 이름 순)
    pub fn list(&self) -> Vec<&ContactPackage> {
        let mut packages: Vec<&ContactPackage> = self.packages.values().collect();
        packages.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        packages
    }

    pub fn by_category(&self, category: PackageCategory) -> Vec<&ContactPackage> {
        self.list()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// 다운로드 1회 기록, 갱신된 횟수 반환
    pub fn record_download(&mut self, id: &str) -> Result<PackageStats, PackageError> {
        let package = self.get_mut(id)?;
        package.stats.downloads += 1;
        Ok(package.stats)
    }

    /// 공유 1회 기록, 갱신된 횟수 반환
    pub fn record_share(&mut self, id: &str) -> Result<PackageStats, PackageError> {
        let package = self.get_mut(id)?;
        package.stats.shares += 1;
        Ok(package.stats)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ContactPackage, PackageError> {
        self.packages
            .get_mut(id)
            .ok_or_else(|| PackageError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::new("홍길동", "010-1234-5678"),
            Contact::new("김철수", "010-2222-3333").with_company("ABC"),
        ]
    }

    #[test]
    fn test_create_and_get() {
        let mut store = PackageStore::new();
        let now = Utc::now();
        let package = store.create(
            "2025 세미나",
            "참석자 연락처",
            PackageCategory::Event,
            contacts(),
            now,
        );

        assert_eq!(store.len(), 1);
        assert_eq!(package.stats, PackageStats::default());
        assert_eq!(package.vcard.matches("BEGIN:VCARD").count(), 2);
        assert_eq!(package.vcard_file_name(), "2025 세미나_연락처.vcf");
        assert_eq!(store.get(&package.id), Some(&package));
    }

    #[test]
    fn test_record_stats() {
        let mut store = PackageStore::new();
        let id = store
            .create("팀", "", PackageCategory::Team, contacts(), Utc::now())
            .id;

        store.record_download(&id).unwrap();
        let stats = store.record_download(&id).unwrap();
        assert_eq!(stats.downloads, 2);

        let stats = store.record_share(&id).unwrap();
        assert_eq!(stats, PackageStats { downloads: 2, shares: 1 });
        assert_eq!(store.get(&id).unwrap().stats, stats);
    }

    #[test]
    fn test_unknown_id() {
        let mut store = PackageStore::new();
        assert_eq!(
            store.record_download("nope"),
            Err(PackageError::NotFound("nope".into()))
        );
        assert_eq!(
            store.record_share("nope"),
            Err(PackageError::NotFound("nope".into()))
        );
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_list_by_category() {
        let mut store = PackageStore::new();
        let now = Utc::now();
        store.create("영업팀", "", PackageCategory::Company, contacts(), now);
        store.create("1반", "", PackageCategory::Parents, contacts(), now);
        store.create(
            "개발팀",
            "",
            PackageCategory::Company,
            contacts(),
            now + TimeDelta::seconds(1),
        );

        let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["1반", "영업팀", "개발팀"]);

        let company: Vec<&str> = store
            .by_category(PackageCategory::Company)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(company, vec!["영업팀", "개발팀"]);
        assert!(store.by_category(PackageCategory::Event).is_empty());
    }

    #[test]
    fn test_remove() {
        let mut store = PackageStore::new();
        let id = store
            .create("임시", "", PackageCategory::Custom, contacts(), Utc::now())
            .id;
        assert!(store.remove(&id).is_some());
        assert!(store.is_empty());
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(
            serde_json::to_string(&PackageCategory::Parents).unwrap(),
            "\"parents\""
        );
        let parsed: PackageCategory = serde_json::from_str("\"event\"").unwrap();
        assert_eq!(parsed, PackageCategory::Event);
        assert_eq!(PackageCategory::default(), PackageCategory::Custom);
        assert_eq!(PackageCategory::ALL.len(), 5);
        assert_eq!(PackageCategory::Company.label(), "회사");
        assert_eq!(PackageCategory::Team.color(), "#10B981");
    }
}
