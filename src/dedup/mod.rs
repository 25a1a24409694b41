//! 중복 연락처 탐지/해소 모듈
//!
//! 정규화된 전화번호가 같은 연락처를 한 그룹으로 보고,
//! 그룹마다 유사도와 통합 제안을 계산한 뒤 정책에 따라 하나로 줄입니다.

mod detector;
mod policy;

pub use detector::{
    detect_duplicates, detect_duplicates_ignoring_sentinel, resolve_duplicates, DuplicateGroup,
    DuplicateResult, DuplicateStatistics,
};
pub use policy::{apply_policy, contact_info_length, merge_contacts, DuplicatePolicy};
