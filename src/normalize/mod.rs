//! 전화번호/이메일 정규화 및 검증 모듈

pub mod email;
pub mod phone;

pub use email::validate_email;
pub use phone::{
    digits_only, format_phone, is_phone_number, normalize_phone, normalize_phone_number,
    validate_phone, PhoneKind,
};
