//! Schema inference module
//!
//! Infers relational columns from JSON records.
//!
//! # Features
//!
//! - **Type Inference**: Maps a JSON value to a semantic kind and a dialect column type
//! - **Field Mapping**: Builds the ordered column list from a representative record
//! - **Primary Key Guess**: Flags fields named `id` or ending in `id`
//! - **Type Widening**: Optionally samples every record and widens column kinds
//! - **Collision Handling**: Detects or suffixes keys that convert to the same name

mod inference;
mod naming;
mod types;

pub use inference::{
    format_sample, infer_kind, infer_mapping, infer_type, is_primary_key, json_type_of,
    FieldMapper, MAX_VARCHAR_LENGTH, SAMPLE_LENGTH,
};
pub use naming::assign_names;
pub use types::{CollisionPolicy, FieldMapping, JsonType, SamplingMode};
