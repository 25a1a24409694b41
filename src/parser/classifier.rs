//! 키워드 기반 필드 분류기
//!
//! 회사/직책/메모 판별 어휘는 언어와 업종에 따라 달라지므로
//! `FieldClassifier` 구현을 바꿔 끼울 수 있게 분리했습니다.

/// 키워드로 판별하는 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordField {
    Company,
    Title,
    Memo,
}

/// 토큰 분류 전략
pub trait FieldClassifier {
    /// 토큰이 키워드 필드에 해당하면 (필드, 저장할 값) 반환
    fn classify(&self, token: &str) -> Option<(KeywordField, String)>;
}

/// 한국어 기본 키워드 분류기
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    pub company_keywords: Vec<String>,
    pub title_keywords: Vec<String>,
    /// 메모 표시 접두어 (값에서 제거됨)
    pub memo_markers: Vec<String>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self {
            company_keywords: to_owned(&["회사", "주식회사", "(주)"]),
            title_keywords: to_owned(&["팀장", "매니저", "사원", "대표"]),
            memo_markers: to_owned(&["메모:", "참고:", "비고:"]),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl FieldClassifier for KeywordClassifier {
    fn classify(&self, token: &str) -> Option<(KeywordField, String)> {
        let contains_any = |words: &[String]| words.iter().any(|w| token.contains(w.as_str()));

        if contains_any(&self.company_keywords) {
            return Some((KeywordField::Company, token.to_string()));
        }

        if contains_any(&self.title_keywords) {
            return Some((KeywordField::Title, token.to_string()));
        }

        if contains_any(&self.memo_markers) {
            let mut memo = token.to_string();
            for marker in &self.memo_markers {
                memo = memo.replace(marker.as_str(), "");
            }
            return Some((KeywordField::Memo, memo.trim().to_string()));
        }

        None
    }
}
