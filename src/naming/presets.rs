//! 미리 정의된 이름 템플릿

use serde::Serialize;

use super::template::{render_name, NamingOptions, NumberFormat, RenderMode};
use crate::contact::Contact;

/// 미리 정의된 템플릿
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NamingTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub pattern: &'static str,
    pub example: &'static str,
}

pub static PREDEFINED_TEMPLATES: [NamingTemplate; 5] = [
    NamingTemplate {
        id: "default",
        name: "기본",
        description: "이름만 사용",
        pattern: "{name}",
        example: "홍길동",
    },
    NamingTemplate {
        id: "event",
        name: "행사",
        description: "행사명을 앞에 붙임",
        pattern: "[{prefix}] {name}",
        example: "[2026세미나] 홍길동",
    },
    NamingTemplate {
        id: "company",
        name: "회사-부서-이름",
        description: "소속을 함께 표시",
        pattern: "{company}-{department}-{name}",
        example: "ABC주식회사-영업팀-홍길동",
    },
    NamingTemplate {
        id: "phone-only",
        name: "번호만",
        description: "이름 없이 일련번호 사용",
        pattern: "미지정-{number}",
        example: "미지정-001",
    },
    NamingTemplate {
        id: "custom",
        name: "사용자 정의",
        description: "접두사와 접미사 사용",
        pattern: "{prefix} {name} {suffix}",
        example: "2026세미나 홍길동 참가자",
    },
];

/// id로 템플릿 찾기
pub fn find_template(id: &str) -> Option<&'static NamingTemplate> {
    PREDEFINED_TEMPLATES.iter().find(|t| t.id == id)
}

fn sample_contact() -> Contact {
    Contact::new("홍길동", "010-1234-5678")
        .with_email("hong@example.com")
        .with_company("ABC주식회사-영업팀")
        .with_title("팀장")
        .with_memo("VIP고객")
}

/// 예시 연락처로 템플릿 미리보기
pub fn generate_template_example(template: &str) -> String {
    let options = NamingOptions::new(template)
        .with_prefix("2026세미나")
        .with_suffix("참가자")
        .with_auto_number(NumberFormat::ThreeDigits);

    render_name(&sample_contact(), &options, 1, RenderMode::Lenient)
        .unwrap_or_else(|_| template.to_string())
}
