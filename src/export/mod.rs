//! 내보내기 형식

mod vcard;

pub use vcard::{generate_multiple_vcards, generate_vcard, parse_vcards};
