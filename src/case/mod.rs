//! Case conversion module
//!
//! Pure string transforms between identifier naming conventions.
//!
//! # Styles
//!
//! - **camelCase**: `userName` (the canonical form every inferred field starts in)
//! - **PascalCase**: `UserName`
//! - **snake_case**: `user_name`
//! - **kebab-case**: `user-name`
//! - **UPPER_SNAKE_CASE**: `USER_NAME`

mod converters;
mod types;

pub use converters::{
    convert, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_upper_snake_case,
};
pub use types::CaseStyle;
