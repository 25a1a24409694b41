//! 에러 타입

use thiserror::Error;

/// 설정 파일 로드/저장 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 읽기/쓰기 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("설정 직렬화 오류: {0}")]
    Serde(#[from] serde_json::Error),
}

/// 스마트 파서 줄 단위 실패
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("빈 줄입니다")]
    Empty,

    #[error("이름을 찾을 수 없습니다")]
    MissingName,

    #[error("전화번호를 찾을 수 없습니다")]
    MissingPhone,
}

/// 이름 템플릿 치환 에러 (엄격 모드)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("유효하지 않은 변수: {{{0}}}")]
    UnknownPlaceholder(String),

    #[error("값이 없는 변수: {{{0}}}")]
    UnresolvedPlaceholder(String),
}

/// 표 형식 데이터 가져오기 에러
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("이름은 필수 항목입니다")]
    MissingName,

    #[error("CSV 파싱 오류: {0}")]
    Csv(#[from] csv::Error),
}

/// vCard 읽기 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VCardError {
    #[error("{index}번째 vCard에 FN(이름)이 없습니다")]
    MissingName { index: usize },

    #[error("{index}번째 vCard에 END:VCARD가 없습니다")]
    Unterminated { index: usize },
}

/// 빠른 전송 링크 조회 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("전송 링크를 찾을 수 없습니다: {0}")]
    NotFound(String),

    #[error("만료된 전송 링크입니다: {0}")]
    Expired(String),

    #[error("접근 횟수를 초과했습니다: {0}")]
    AccessLimitReached(String),

    #[error("유효하지 않은 만료 시간(분): {0}")]
    InvalidExpiry(i64),
}

/// 연락처 패키지 조회 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("연락처 패키지를 찾을 수 없습니다: {0}")]
    NotFound(String),
}
