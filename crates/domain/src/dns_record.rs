mod record;
mod record_type;

pub use record::{Record, APEX, TRANSFORM_METADATA_KEY, TRANSFORM_TABLE_METADATA_KEY};
pub use record_type::RecordType;
