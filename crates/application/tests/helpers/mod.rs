#![allow(dead_code)]

mod builders;

pub use builders::{init_tracing, RecordBuilder, ZoneBuilder};
