//! 일괄 이름 변경 모듈
//!
//! `{name}`, `{number}` 같은 변수를 담은 템플릿으로 연락처 표시 이름을 다시 만듭니다.

mod presets;
mod template;

pub use presets::{find_template, generate_template_example, NamingTemplate, PREDEFINED_TEMPLATES};
pub use template::{
    apply_naming_template, render_name, try_apply_naming_template, validate_naming_template,
    NamingOptions, NumberFormat, RenderMode, TemplateValidation, PLACEHOLDERS, UNNAMED,
};
