pub mod errors;
pub mod normalizer;

pub use errors::ConfigError;
pub use normalizer::{ErrorMode, NormalizerConfig};
