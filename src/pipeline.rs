//! 파싱 → 오류 수정 → 중복 해소 → 이름 변경 흐름

use serde::Serialize;

use crate::config::PhonedropConfig;
use crate::contact::Contact;
use crate::dedup::{detect_duplicates_ignoring_sentinel, resolve_duplicates, DuplicateStatistics};
use crate::fixer::{detect_and_fix_errors, ErrorFix};
use crate::import::parse_csv;
use crate::naming::{apply_naming_template, validate_naming_template};
use crate::parser::SmartParser;

/// 파이프라인 입력
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// 자유 형식 텍스트 (한 줄에 한 명)
    Text(&'a str),
    /// 머리글이 있는 CSV
    Csv(&'a [u8]),
}

/// 처리 결과
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PipelineReport {
    pub contacts: Vec<Contact>,
    /// 파싱/가져오기 실패 행
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
    /// 텍스트 파싱 신뢰도 (CSV 입력이면 None)
    pub confidence: Option<f64>,
    /// 탐지된 모든 수정안 (자동 적용 여부와 무관)
    pub fixes: Vec<ErrorFix>,
    pub duplicates: DuplicateStatistics,
    /// 내보내기 불가(이름 없음/번호 무효)로 표시된 연락처 수
    pub not_exportable: usize,
}

pub struct Pipeline {
    config: PhonedropConfig,
    parser: SmartParser,
}

impl Pipeline {
    /// 설정의 이름 템플릿이 유효하지 않으면 경고를 남기고 이름 변경을 끕니다
    pub fn new(mut config: PhonedropConfig) -> Self {
        if let Some(naming) = &config.naming {
            let validation = validate_naming_template(&naming.template);
            if !validation.is_valid {
                for error in &validation.errors {
                    log::warn!("이름 템플릿 무시 ({:?}): {}", naming.template, error);
                }
                config.naming = None;
            }
        }

        let parser = SmartParser::new(config.parse.clone());
        Self { config, parser }
    }

    pub fn config(&self) -> &PhonedropConfig {
        &self.config
    }

    pub fn run(&self, input: Input<'_>) -> PipelineReport {
        let (contacts, errors, suggestions, confidence) = match input {
            Input::Text(text) => {
                let parsed = self.parser.parse(text);
                (
                    parsed.contacts,
                    parsed.errors,
                    parsed.suggestions,
                    Some(parsed.confidence),
                )
            }
            Input::Csv(bytes) => {
                let imported = parse_csv(bytes);
                (imported.contacts, imported.errors, Vec::new(), None)
            }
        };

        let (contacts, fixes) = if self.config.auto_fix {
            let fixed = detect_and_fix_errors(&contacts);
            (fixed.contacts, fixed.fixes)
        } else {
            (contacts, Vec::new())
        };

        // 기본값 번호는 서로 다른 사람일 수 있으므로 중복 판별에서 제외
        let detected = detect_duplicates_ignoring_sentinel(&contacts);
        let mut contacts =
            resolve_duplicates(&contacts, &detected.groups, self.config.duplicate_policy);

        if let Some(naming) = &self.config.naming {
            contacts = apply_naming_template(&contacts, naming);
        }

        let not_exportable = contacts.iter().filter(|c| !c.is_valid_for_export()).count();

        log::debug!(
            "파이프라인 완료: 연락처 {}개, 실패 {}행, 수정안 {}개, 중복 {}개",
            contacts.len(),
            errors.len(),
            fixes.len(),
            detected.total_duplicates
        );

        PipelineReport {
            contacts,
            errors,
            suggestions,
            confidence,
            fixes,
            duplicates: detected.statistics,
            not_exportable,
        }
    }
}
