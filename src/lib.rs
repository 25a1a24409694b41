pub mod config;
pub mod contact;
pub mod dedup;
pub mod error;
pub mod export;
pub mod fixer;
pub mod import;
pub mod naming;
pub mod normalize;
pub mod package;
pub mod parser;
pub mod pipeline;
pub mod similarity;
pub mod transfer;

pub use contact::{Contact, SENTINEL_PHONE};
pub use dedup::{detect_duplicates, resolve_duplicates, DuplicatePolicy};
pub use export::{generate_multiple_vcards, generate_vcard, parse_vcards};
pub use fixer::{apply_fixes, detect_and_fix_errors};
pub use naming::{apply_naming_template, validate_naming_template, NamingOptions};
pub use normalize::{format_phone, normalize_phone, validate_email, validate_phone};
pub use parser::{smart_parse, ParseOptions, ParsedResult, SmartParser};
pub use pipeline::{Input, Pipeline, PipelineReport};
