//! 빠른 전송 링크 저장소
//!
//! 연락처 묶음을 임시 링크로 공유합니다. 링크는 만료 시각과 최대 접근 횟수를 가지며,
//! 만료된 링크는 `evict_expired`로 정리합니다. 현재 시각은 호출자가 넘깁니다.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::Contact;
use crate::error::TransferError;
use crate::export::generate_multiple_vcards;

fn default_expires_in_minutes() -> i64 {
    10
}

fn default_max_access() -> u32 {
    10
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// 링크 생성 옵션
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferOptions {
    #[serde(default = "default_expires_in_minutes")]
    pub expires_in_minutes: i64,
    #[serde(default = "default_max_access")]
    pub max_access: u32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            expires_in_minutes: default_expires_in_minutes(),
            max_access: default_max_access(),
            base_url: default_base_url(),
        }
    }
}

/// 전송 링크
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TransferLink {
    pub id: String,
    pub url: String,
    pub expires_at: DateTime<Utc>,
    pub access_count: u32,
    pub max_access: u32,
    pub contacts: Vec<Contact>,
    pub created_at: DateTime<Utc>,
}

impl TransferLink {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// 링크가 담은 연락처의 vCard 텍스트
    pub fn vcard(&self) -> String {
        generate_multiple_vcards(&self.contacts)
    }
}

/// 링크 상태 (접근 횟수를 올리지 않음)
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferStatus {
    pub expired: bool,
    pub access_count: u32,
    pub max_access: u32,
    pub remaining_access: u32,
    /// 남은 시간 (밀리초, 만료되면 0)
    pub time_remaining_ms: i64,
}

#[derive(Debug, Default)]
pub struct TransferStore {
    links: HashMap<String, TransferLink>,
}

impl TransferStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// 새 링크 생성
    ///
    /// 만료 시간은 1분 이상이어야 하며, 만료 시각을 표현할 수 없으면 에러입니다.
    pub fn create(
        &mut self,
        contacts: Vec<Contact>,
        options: &TransferOptions,
        now: DateTime<Utc>,
    ) -> Result<TransferLink, TransferError> {
        let minutes = options.expires_in_minutes;
        let expires_at = Some(minutes)
            .filter(|&m| m > 0)
            .and_then(TimeDelta::try_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(TransferError::InvalidExpiry(minutes))?;

        let id = Uuid::new_v4().simple().to_string();
        let link = TransferLink {
            url: format!("{}/transfer/{}", options.base_url.trim_end_matches('/'), id),
            expires_at,
            access_count: 0,
            max_access: options.max_access,
            contacts,
            created_at: now,
            id: id.clone(),
        };

        log::debug!(
            "전송 링크 생성: {} ({}개 연락처, {}까지)",
            id,
            link.contacts.len(),
            link.expires_at
        );
        self.links.insert(id, link.clone());
        Ok(link)
    }

    /// 링크 열기. 성공하면 접근 횟수가 1 늘어남
    pub fn get(&mut self, id: &str, now: DateTime<Utc>) -> Result<TransferLink, TransferError> {
        let link = self
            .links
            .get_mut(id)
            .ok_or_else(|| TransferError::NotFound(id.to_string()))?;

        if link.is_expired(now) {
            self.links.remove(id);
            return Err(TransferError::Expired(id.to_string()));
        }

        if link.access_count >= link.max_access {
            return Err(TransferError::AccessLimitReached(id.to_string()));
        }

        link.access_count += 1;
        Ok(link.clone())
    }

    pub fn status(&self, id: &str, now: DateTime<Utc>) -> Option<TransferStatus> {
        let link = self.links.get(id)?;
        Some(TransferStatus {
            expired: link.is_expired(now),
            access_count: link.access_count,
            max_access: link.max_access,
            remaining_access: link.max_access.saturating_sub(link.access_count),
            time_remaining_ms: (link.expires_at - now).num_milliseconds().max(0),
        })
    }

    /// 만료된 링크 삭제, 삭제한 개수 반환
    pub fn evict_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.links.len();
        self.links.retain(|_, link| !link.is_expired(now));
        let evicted = before - self.links.len();
        if evicted > 0 {
            log::debug!("만료된 전송 링크 {}개 정리", evicted);
        }
        evicted
    }
}
