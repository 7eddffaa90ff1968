//! Ferrous Zone Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod migration;
pub mod transform;
pub mod validation;
pub mod zone;

pub use config::{ConfigError, ErrorMode, NormalizerConfig};
pub use dns_record::{
    Record, RecordType, APEX, TRANSFORM_METADATA_KEY, TRANSFORM_TABLE_METADATA_KEY,
};
pub use errors::{NormalizeError, RecordError, RuleSyntaxError, SyntaxError, ValidationError};
pub use migration::transform_cname;
pub use transform::{Rewrite, TransformRule, TransformRuleSet};
pub use validation::{
    assert_no_trailing_dot, assert_no_underscore, assert_valid_ipv4, assert_valid_target,
};
pub use zone::Zone;
